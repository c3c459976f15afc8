use thiserror::Error;

/// Raised when a byte-level input cannot be interpreted as text.
///
/// This is the only error the engine can produce. Every valid UTF-8 string,
/// including the empty string, yields a result rather than an error.
#[derive(Debug, Error)]
#[error("input is not valid UTF-8 text")]
pub struct InvalidInputError {
    #[from]
    source: std::str::Utf8Error,
}

impl InvalidInputError {
    /// Byte offset of the first invalid sequence.
    pub fn valid_up_to(&self) -> usize {
        self.source.valid_up_to()
    }
}
