use std::io;
use std::num::ParseIntError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FactoryError {
    /// The age line did not parse as an integer.
    #[error("invalid age {input:?}: {source}")]
    InvalidAge {
        input: String,
        source: ParseIntError,
    },

    #[error("input ended before the record was complete")]
    EndOfInput,

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
