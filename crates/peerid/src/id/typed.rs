use crate::{
    CHANNEL_TAG, CHAT_TAG, CategoryId, EmptyId, Error, PLACEHOLDER_TAG, PeerId, RESERVED_TAG_BIT,
    Result, USER_TAG, WireInt, WireLong,
};
use core::fmt;

/// A bare identifier of one fixed category.
///
/// The category tag `KIND` is part of the type, not the value: a
/// `TypedId<KIND>` is a single `u64` in memory. Ids of different categories
/// are different types and never convert into each other except through
/// [`PeerId`].
///
/// Equality, ordering and hashing only look at the bare number. A bare number
/// of zero is the empty id of the category.
///
/// Tags with the top bit set are reserved. Constructing such a type fails the
/// build:
///
/// ```compile_fail
/// let _ = peerid::TypedId::<0x80>::new(1);
/// ```
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TypedId<const KIND: u8> {
    bare: u64,
}

/// A user.
pub type UserId = TypedId<USER_TAG>;

/// A small group chat.
pub type ChatId = TypedId<CHAT_TAG>;

/// A channel or supergroup.
pub type ChannelId = TypedId<CHANNEL_TAG>;

/// A synthetic peer that only exists locally.
pub type PlaceholderId = TypedId<PLACEHOLDER_TAG>;

/// The empty channel.
pub const NO_CHANNEL: ChannelId = ChannelId::EMPTY;

impl<const KIND: u8> TypedId<KIND> {
    /// The empty id of this category.
    pub const EMPTY: Self = Self::new(0);

    /// Wraps a bare number.
    ///
    /// The number is not checked. Lifting it into a [`PeerId`] assumes it
    /// fits in [`PeerId::BARE_MASK`]; use [`TypedId::try_new`] when the
    /// source is untrusted.
    pub const fn new(bare: u64) -> Self {
        const { assert!(KIND & RESERVED_TAG_BIT == 0, "category tag sets the reserved bit") };
        Self { bare }
    }

    /// Wraps a bare number, rejecting anything wider than 48 bits.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BareOverflow`] if `bare > PeerId::BARE_MASK`.
    pub const fn try_new(bare: u64) -> Result<Self> {
        if bare & !PeerId::BARE_MASK != 0 {
            return Err(Error::BareOverflow { bare });
        }
        Ok(Self::new(bare))
    }

    /// The category tag of this type.
    pub const fn tag() -> u8 {
        const { assert!(KIND & RESERVED_TAG_BIT == 0, "category tag sets the reserved bit") };
        KIND
    }

    /// Returns the bare number.
    pub const fn bare(self) -> u64 {
        self.bare
    }

    /// Returns `true` if this is the empty id.
    pub const fn is_empty(self) -> bool {
        self.bare == 0
    }

    /// Returns `None` for the empty id and `Some(self)` otherwise.
    pub const fn non_empty(self) -> Option<Self> {
        if self.is_empty() { None } else { Some(self) }
    }

    /// Lifts this id into a [`PeerId`] tagged with `KIND`.
    ///
    /// The bare number is not checked; see [`PeerId::from_typed`].
    pub const fn to_peer(self) -> PeerId {
        PeerId::from_raw(self.bare | ((Self::tag() as u64) << PeerId::TAG_SHIFT))
    }

    const fn name() -> Option<&'static str> {
        match KIND {
            USER_TAG => Some("UserId"),
            CHAT_TAG => Some("ChatId"),
            CHANNEL_TAG => Some("ChannelId"),
            PLACEHOLDER_TAG => Some("PlaceholderId"),
            _ => None,
        }
    }
}

impl<const KIND: u8> CategoryId for TypedId<KIND> {
    const TAG: u8 = {
        assert!(KIND & RESERVED_TAG_BIT == 0, "category tag sets the reserved bit");
        KIND
    };

    fn from_bare(bare: u64) -> Self {
        Self::new(bare)
    }

    fn to_bare(&self) -> u64 {
        self.bare
    }
}

impl<const KIND: u8> Default for TypedId<KIND> {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl<const KIND: u8> From<u64> for TypedId<KIND> {
    fn from(bare: u64) -> Self {
        Self::new(bare)
    }
}

impl<const KIND: u8> From<WireLong> for TypedId<KIND> {
    fn from(value: WireLong) -> Self {
        Self::new(value.0)
    }
}

// 32-bit carriers hold unsigned ids in a signed slot.
impl<const KIND: u8> From<WireInt> for TypedId<KIND> {
    fn from(value: WireInt) -> Self {
        Self::new(u64::from(value.0 as u32))
    }
}

impl<const KIND: u8> From<TypedId<KIND>> for u64 {
    fn from(id: TypedId<KIND>) -> Self {
        id.bare
    }
}

impl<const KIND: u8> PartialEq<EmptyId> for TypedId<KIND> {
    fn eq(&self, _: &EmptyId) -> bool {
        self.is_empty()
    }
}

impl<const KIND: u8> PartialEq<TypedId<KIND>> for EmptyId {
    fn eq(&self, other: &TypedId<KIND>) -> bool {
        other.is_empty()
    }
}

impl<const KIND: u8> fmt::Display for TypedId<KIND> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.bare)
    }
}

impl<const KIND: u8> fmt::Debug for TypedId<KIND> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match Self::name() {
            Some(name) => write!(f, "{name}({})", self.bare),
            None => write!(f, "TypedId<{KIND:#x}>({})", self.bare),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::hash::{BuildHasher, RandomState};

    #[test]
    fn empty_is_zero_for_every_category() {
        assert!(UserId::EMPTY.is_empty());
        assert!(ChatId::default().is_empty());
        assert!(NO_CHANNEL.is_empty());
        assert!(PlaceholderId::new(0) == EmptyId);
        assert!(EmptyId == ChannelId::new(0));
        assert_eq!(UserId::new(0).non_empty(), None);
    }

    #[test]
    fn non_empty_ids_are_present() {
        let id = UserId::new(42);
        assert!(!id.is_empty());
        assert!(id != EmptyId);
        assert_eq!(id.non_empty(), Some(id));
        assert_eq!(id.bare(), 42);
    }

    #[test]
    fn ordering_follows_bare_number() {
        let mut ids = [ChatId::new(30), ChatId::new(1), ChatId::new(u64::MAX), ChatId::new(7)];
        ids.sort();
        assert_eq!(
            ids,
            [ChatId::new(1), ChatId::new(7), ChatId::new(30), ChatId::new(u64::MAX)]
        );
        assert!(ChatId::new(2) > ChatId::EMPTY);
        assert_eq!(ChatId::new(5), ChatId::new(5));
    }

    #[test]
    fn hash_only_sees_the_bare_number() {
        let state = RandomState::new();
        assert_eq!(
            state.hash_one(UserId::new(99)),
            state.hash_one(ChannelId::new(99))
        );
        assert_eq!(state.hash_one(UserId::new(99)), state.hash_one(99u64));

        let set: HashSet<UserId> = [1, 2, 2, 3].into_iter().map(UserId::new).collect();
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn builds_from_wire_carriers() {
        assert_eq!(UserId::from(WireLong(1_000_000_007)), UserId::new(1_000_000_007));
        assert_eq!(ChatId::from(WireInt(777)), ChatId::new(777));
        assert_eq!(ChannelId::from(WireInt(-1)), ChannelId::new(0xFFFF_FFFF));
        assert_eq!(u64::from(ChannelId::new(5)), 5);
    }

    #[test]
    fn try_new_rejects_wide_bare_numbers() {
        assert_eq!(UserId::try_new(PeerId::BARE_MASK), Ok(UserId::new(PeerId::BARE_MASK)));
        assert_eq!(
            UserId::try_new(PeerId::BARE_MASK + 1),
            Err(Error::BareOverflow { bare: PeerId::BARE_MASK + 1 })
        );
    }

    #[test]
    fn tags_match_categories() {
        assert_eq!(UserId::tag(), 0);
        assert_eq!(ChatId::tag(), 1);
        assert_eq!(ChannelId::tag(), 2);
        assert_eq!(PlaceholderId::tag(), 0x7F);
        assert_eq!(<ChannelId as CategoryId>::TAG, 2);
    }

    #[test]
    fn formats_with_category_name() {
        assert_eq!(format!("{:?}", UserId::new(42)), "UserId(42)");
        assert_eq!(format!("{:?}", ChannelId::new(1)), "ChannelId(1)");
        assert_eq!(format!("{:?}", TypedId::<9>::new(3)), "TypedId<0x9>(3)");
        assert_eq!(format!("{:?}", TypedId::<0x7E>::new(0)), "TypedId<0x7e>(0)");
        assert_eq!(format!("{:?}", PlaceholderId::new(8)), "PlaceholderId(8)");
        assert_eq!(ChatId::new(17).to_string(), "17");
    }
}
