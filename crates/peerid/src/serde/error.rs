use crate::{Error, PeerId};
use core::fmt;

/// Errors that can occur while decoding ids through serde.
///
/// Generic over the decoded id type `E` so the rejected value can be
/// inspected or logged.
#[derive(Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[non_exhaustive]
pub enum SerdeError<E: fmt::Debug> {
    /// The decoded integer sets reserved bits of the target layout.
    #[error("decode overflow: {id:?}")]
    DecodeOverflow {
        /// The decoded id, which failed validation.
        id: E,
    },
}

impl From<SerdeError<PeerId>> for Error {
    fn from(err: SerdeError<PeerId>) -> Self {
        match err {
            SerdeError::DecodeOverflow { id } => Self::ReservedBits { value: id.to_raw() },
        }
    }
}
