use thiserror::Error;

/// Pipeline-wide error taxonomy. Every stage surfaces exactly one of these;
/// nothing is retried or recovered below the driver.
#[derive(Error, Debug)]
pub enum TallyError {
    #[error("cannot read statement document: {0}")]
    DocumentRead(String),

    #[error("Anthropic credential missing or rejected: {0}")]
    Authentication(String),

    #[error("categorization service failure: {0}")]
    Service(String),

    #[error("categorization service returned an empty reply")]
    EmptyReply,

    #[error("no Date,Description,Amount,Category header found in model reply")]
    MalformedReply,

    #[error("bad transaction row at payload line {line}: {reason}")]
    MalformedRow { line: usize, reason: String },

    #[error("cannot write output file: {0}")]
    OutputWrite(String),
}

pub type Result<T> = std::result::Result<T, TallyError>;
