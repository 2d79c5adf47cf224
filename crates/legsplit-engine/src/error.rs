/// Errors produced while parsing amounts or splitting them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SplitError {
    /// The text is not a finite decimal number.
    #[error("invalid decimal amount {0:?}")]
    InvalidAmount(String),

    /// Decimal places outside the supported range.
    #[error("decimal places out of range ({decimals}, max {max})")]
    PrecisionOutOfRange { decimals: u32, max: u32 },

    /// An intermediate value does not fit the decimal representation.
    #[error("arithmetic overflow while computing {0}")]
    Overflow(&'static str),
}

pub type Result<T> = std::result::Result<T, SplitError>;
