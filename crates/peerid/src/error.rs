/// A result type for the few checked constructors `peerid` offers.
///
/// The core conversions are total and return plain values. Only the
/// `try_*` constructors and the serde adapters can fail.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// All possible errors that `peerid` can produce.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The bare number does not fit in the 48 bits a [`crate::PeerId`]
    /// reserves for it.
    #[error("bare id {bare:#x} does not fit in 48 bits")]
    BareOverflow {
        /// The rejected bare number.
        bare: u64,
    },

    /// A packed value sets the serialized flag or the reserved high byte.
    #[error("packed peer id {value:#018x} sets reserved bits")]
    ReservedBits {
        /// The rejected packed value.
        value: u64,
    },
}
