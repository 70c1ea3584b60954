use thiserror::Error;

#[derive(Debug, Error)]
pub enum PredictError {
    #[error("prediction request failed: {0}")]
    Request(String),

    #[error("prediction service returned status {0}")]
    Status(u16),

    #[error("response parsing failed: {0}")]
    ResponseParse(String),

    #[error("response carried no usable prediction label")]
    MissingLabel,

    #[error("client configuration error: {0}")]
    Config(String),
}
