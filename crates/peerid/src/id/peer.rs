use crate::{
    CategoryId, ChannelId, ChatId, EmptyId, Error, PlaceholderId, RESERVED_TAG_BIT, Result,
    TypedId, UserId,
};
use core::fmt;

/// An identifier of any category, packed into one `u64`.
///
/// ```text
///  Bit Index:  63          56 55          48 47                           0
///              +--------------+--------------+-----------------------------+
///  Field:      | reserved (8) |   tag (8)    |          bare (48)          |
///              +--------------+--------------+-----------------------------+
///              |<----- MSB ------------- 64 bits ------------- LSB ------->|
/// ```
///
/// `PeerId` is the key type for maps and sets that mix categories, so
/// equality, ordering and hashing use the full packed value. A value of zero
/// is the empty peer regardless of category.
///
/// With the `serde` feature, a `PeerId` serializes through
/// [`crate::serialize_peer_id`] and deserializes through
/// [`crate::deserialize_peer_id`].
#[derive(Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PeerId {
    value: u64,
}

impl PeerId {
    /// Bitmask for extracting the 48-bit bare number. Occupies bits 0
    /// through 47.
    pub const BARE_MASK: u64 = (1 << 48) - 1;

    /// Bitmask for extracting the 8-bit tag once shifted down.
    pub const TAG_MASK: u64 = (1 << 8) - 1;

    /// Number of bits to shift the tag to its position (bit 48).
    pub const TAG_SHIFT: u32 = 48;

    /// Bits that a well-formed packed value never sets: the reserved tag bit
    /// and the unused high byte.
    pub const RESERVED_MASK: u64 = !(Self::BARE_MASK | (0x7F << Self::TAG_SHIFT));

    /// The empty peer.
    pub const EMPTY: Self = Self { value: 0 };

    /// Wraps an already packed value as is.
    pub const fn from_raw(value: u64) -> Self {
        Self { value }
    }

    /// Wraps a packed value, rejecting one that sets reserved bits.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ReservedBits`] if any bit of
    /// [`PeerId::RESERVED_MASK`] is set.
    pub const fn try_from_raw(value: u64) -> Result<Self> {
        if value & Self::RESERVED_MASK != 0 {
            return Err(Error::ReservedBits { value });
        }
        Ok(Self { value })
    }

    /// Returns the packed value.
    pub const fn to_raw(self) -> u64 {
        self.value
    }

    /// Lifts a typed id, storing its category tag next to the bare number.
    ///
    /// The bare number is expected to fit in 48 bits. It is neither masked
    /// nor checked; a wider one spills into the tag and reserved bits, and
    /// the result matches no category.
    pub fn from_typed<T: CategoryId>(id: T) -> Self {
        Self {
            value: id.to_bare() | (u64::from(T::TAG) << Self::TAG_SHIFT),
        }
    }

    /// Returns the tag byte, bits 48 through 55.
    pub const fn tag(self) -> u8 {
        ((self.value >> Self::TAG_SHIFT) & Self::TAG_MASK) as u8
    }

    /// Returns the bare number, bits 0 through 47, whatever the category.
    pub const fn bare(self) -> u64 {
        self.value & Self::BARE_MASK
    }

    /// Returns `true` if this peer belongs to the category of `T`.
    ///
    /// Everything above the bare number takes part in the match, so a value
    /// with any reserved bit set belongs to no category.
    pub fn is<T: CategoryId>(self) -> bool {
        self.value >> Self::TAG_SHIFT == u64::from(T::TAG)
    }

    /// Projects this peer onto the category of `T`.
    ///
    /// On a category mismatch this returns the empty `T`, never an error.
    /// Callers that care must check [`PeerId::is`] first.
    pub fn to<T: CategoryId>(self) -> T {
        if self.is::<T>() {
            T::from_bare(self.bare())
        } else {
            T::default()
        }
    }

    /// Returns `true` if this is the empty peer.
    pub const fn is_empty(self) -> bool {
        self.value == 0
    }

    /// Returns `None` for the empty peer and `Some(self)` otherwise.
    pub const fn non_empty(self) -> Option<Self> {
        if self.is_empty() { None } else { Some(self) }
    }

    /// Returns `true` for a user.
    pub fn is_user(self) -> bool {
        self.is::<UserId>()
    }

    /// Returns `true` for a chat.
    pub fn is_chat(self) -> bool {
        self.is::<ChatId>()
    }

    /// Returns `true` for a channel.
    pub fn is_channel(self) -> bool {
        self.is::<ChannelId>()
    }

    /// Returns `true` for a placeholder.
    pub fn is_placeholder(self) -> bool {
        self.is::<PlaceholderId>()
    }

    /// Builds a user peer from a [`UserId`], a raw `u64` or a wire integer.
    pub fn from_user(id: impl Into<UserId>) -> Self {
        Self::from_typed(id.into())
    }

    /// Builds a chat peer from a [`ChatId`], a raw `u64` or a wire integer.
    pub fn from_chat(id: impl Into<ChatId>) -> Self {
        Self::from_typed(id.into())
    }

    /// Builds a channel peer from a [`ChannelId`], a raw `u64` or a wire
    /// integer.
    pub fn from_channel(id: impl Into<ChannelId>) -> Self {
        Self::from_typed(id.into())
    }

    /// Projects onto [`UserId`]; empty on a category mismatch.
    pub fn to_user(self) -> UserId {
        self.to()
    }

    /// Projects onto [`ChatId`]; empty on a category mismatch.
    pub fn to_chat(self) -> ChatId {
        self.to()
    }

    /// Projects onto [`ChannelId`]; empty on a category mismatch.
    pub fn to_channel(self) -> ChannelId {
        self.to()
    }
}

impl<const KIND: u8> From<TypedId<KIND>> for PeerId {
    fn from(id: TypedId<KIND>) -> Self {
        id.to_peer()
    }
}

impl From<EmptyId> for PeerId {
    fn from(_: EmptyId) -> Self {
        Self::EMPTY
    }
}

impl PartialEq<EmptyId> for PeerId {
    fn eq(&self, _: &EmptyId) -> bool {
        self.is_empty()
    }
}

impl PartialEq<PeerId> for EmptyId {
    fn eq(&self, other: &PeerId) -> bool {
        other.is_empty()
    }
}

impl fmt::Display for PeerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl fmt::Debug for PeerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PeerId")
            .field("value", &format_args!("{:#018x}", self.value))
            .field("tag", &self.tag())
            .field("bare", &self.bare())
            .finish()
    }
}

// The reserved tag bit is part of the reserved mask.
const _: () = assert!(PeerId::RESERVED_MASK & ((RESERVED_TAG_BIT as u64) << PeerId::TAG_SHIFT) != 0);
