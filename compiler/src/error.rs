use thiserror::Error;

#[derive(Debug, Error)]
pub enum GbnfError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid schema JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Unsupported literal {0}: only null, boolean, number and string values can appear in \"const\" or \"enum\"")]
    UnsupportedLiteral(String),
}
