use core::fmt;
use core::hash::Hash;

/// Tag of [`crate::UserId`].
pub const USER_TAG: u8 = 0;

/// Tag of [`crate::ChatId`].
pub const CHAT_TAG: u8 = 1;

/// Tag of [`crate::ChannelId`].
pub const CHANNEL_TAG: u8 = 2;

/// Tag of [`crate::PlaceholderId`]. Never appears in real data.
pub const PLACEHOLDER_TAG: u8 = 0x7F;

/// The top bit of the tag byte. No category may set it; the persisted codec
/// uses it to mark modern values.
pub const RESERVED_TAG_BIT: u8 = 0x80;

/// A bare identifier whose category is fixed by its type.
///
/// This is the bound that lets [`crate::PeerId::is`] and
/// [`crate::PeerId::to`] be generic over categories. Every
/// [`crate::TypedId`] implements it; there is no reason to implement it
/// elsewhere.
///
/// # Example
///
/// ```
/// use peerid::{CategoryId, ChatId, PeerId};
///
/// fn lift<T: CategoryId>(bare: u64) -> PeerId {
///     PeerId::from_typed(T::from_bare(bare))
/// }
///
/// assert!(lift::<ChatId>(7).is_chat());
/// ```
pub trait CategoryId:
    Copy + Clone + Default + fmt::Display + fmt::Debug + PartialOrd + Ord + PartialEq + Eq + Hash
{
    /// Category tag stored in bits 48..56 of a [`crate::PeerId`].
    const TAG: u8;

    /// Builds an id of this category from a bare number.
    fn from_bare(bare: u64) -> Self;

    /// Returns the bare number, without any tag.
    fn to_bare(&self) -> u64;

    /// Returns `true` for the empty (zero) id of this category.
    fn is_empty(&self) -> bool {
        self.to_bare() == 0
    }
}

/// The "no peer" sentinel.
///
/// Ids can be compared for equality against it, but not ordered against it.
/// `id < EmptyId` does not compile, which rules out the meaningless
/// "less than zero" checks on unsigned, tagged values.
///
/// ```
/// use peerid::{EmptyId, UserId};
///
/// assert!(UserId::new(0) == EmptyId);
/// assert!(UserId::new(5) != EmptyId);
/// ```
///
/// ```compile_fail
/// use peerid::{EmptyId, UserId};
///
/// let _ = UserId::new(5) > EmptyId;
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct EmptyId;
