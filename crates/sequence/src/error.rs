use thiserror::Error;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum SequenceError {
    #[error("index {index} is out of bounds for a sequence of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
}

#[inline]
pub(crate) fn check_index(index: usize, len: usize) -> Result<(), SequenceError> {
    if index < len {
        Ok(())
    } else {
        Err(SequenceError::IndexOutOfBounds { index, len })
    }
}
