//! The persisted form of a [`PeerId`].
//!
//! Two layouts exist in stored data. The legacy layout kept a type nibble in
//! bits 32..36 and a 32-bit bare number below it:
//!
//! ```text
//!  Bit Index:  63          36 35        32 31                             0
//!              +--------------+------------+-------------------------------+
//!  Field:      |   zero (28)  |  type (4)  |           bare (32)           |
//!              +--------------+------------+-------------------------------+
//! ```
//!
//! The modern layout is the packed [`PeerId`] value with the reserved tag bit
//! (bit 55) set as a marker. Legacy values never reach bit 36, so the marker
//! alone tells the two apart.
//!
//! [`serialize_peer_id`] always writes the modern layout.
//! [`deserialize_peer_id`] reads both and never fails.

use crate::{ChannelId, ChatId, PeerId, PlaceholderId, RESERVED_TAG_BIT, UserId};
#[cfg(feature = "tracing")]
use tracing::instrument;

/// Marks a value written by [`serialize_peer_id`].
pub const SERIALIZED_FLAG: u64 = (RESERVED_TAG_BIT as u64) << PeerId::TAG_SHIFT;

/// Bitmask for the 32-bit bare number of a legacy value.
pub const LEGACY_BARE_MASK: u64 = 0xFFFF_FFFF;

/// Bitmask for the type nibble of a legacy value. Occupies bits 32 through
/// 35.
pub const LEGACY_TYPE_MASK: u64 = 0xF_0000_0000;

/// Legacy type nibble of a user, in place.
pub const LEGACY_USER_TYPE: u64 = 0x0_0000_0000;

/// Legacy type nibble of a chat, in place.
pub const LEGACY_CHAT_TYPE: u64 = 0x1_0000_0000;

/// Legacy type nibble of a channel, in place.
pub const LEGACY_CHANNEL_TYPE: u64 = 0x2_0000_0000;

/// Legacy type nibble of a placeholder peer, in place.
pub const LEGACY_PLACEHOLDER_TYPE: u64 = 0xF_0000_0000;

/// Number of low bits a legacy value may occupy.
const LEGACY_BITS: u32 = 36;

/// The layout a persisted value was written in.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PersistedFormat {
    /// Written by [`serialize_peer_id`]: packed value plus [`SERIALIZED_FLAG`].
    Modern,
    /// Range-based layout with a type nibble in bits 32..36.
    Legacy,
    /// A packed value stored without the flag. It is recognized because it
    /// reaches above bit 35, where no legacy value goes.
    Packed,
}

/// Tells which layout produced `serialized`.
pub const fn detect_format(serialized: u64) -> PersistedFormat {
    if serialized & SERIALIZED_FLAG != 0 {
        PersistedFormat::Modern
    } else if serialized >> LEGACY_BITS == 0 {
        PersistedFormat::Legacy
    } else {
        PersistedFormat::Packed
    }
}

/// Encodes `id` for storage.
///
/// The output always uses the modern layout. `id` must not already have the
/// reserved tag bit set; any [`PeerId`] built from a typed id satisfies this.
///
/// ```
/// use peerid::{ChannelId, PeerId, serialize_peer_id};
///
/// let id = PeerId::from(ChannelId::new(12345));
/// assert_eq!(serialize_peer_id(id), 0x0082_0000_0000_3039);
/// ```
pub const fn serialize_peer_id(id: PeerId) -> u64 {
    debug_assert!(id.to_raw() & SERIALIZED_FLAG == 0, "peer id already sets the serialized flag");
    id.to_raw() | SERIALIZED_FLAG
}

/// Decodes a stored value written in either layout.
///
/// Every input maps to some [`PeerId`]. Unknown legacy type nibbles give the
/// empty peer. Unknown modern tags give a non-empty peer that matches no
/// category.
///
/// ```
/// use peerid::{ChatId, PeerId, deserialize_peer_id, serialize_peer_id};
///
/// // Legacy chat 777.
/// assert_eq!(deserialize_peer_id(0x1_0000_0309), PeerId::from(ChatId::new(777)));
///
/// let id = PeerId::from(ChatId::new(777));
/// assert_eq!(deserialize_peer_id(serialize_peer_id(id)), id);
/// ```
#[cfg_attr(feature = "tracing", instrument(level = "trace"))]
pub fn deserialize_peer_id(serialized: u64) -> PeerId {
    let format = detect_format(serialized);
    #[cfg(feature = "tracing")]
    tracing::trace!(?format, "detected persisted peer id format");

    match format {
        PersistedFormat::Modern => PeerId::from_raw(serialized & !SERIALIZED_FLAG),
        PersistedFormat::Legacy => deserialize_legacy(serialized),
        PersistedFormat::Packed => PeerId::from_raw(serialized),
    }
}

fn deserialize_legacy(serialized: u64) -> PeerId {
    let bare = serialized & LEGACY_BARE_MASK;
    match serialized & LEGACY_TYPE_MASK {
        LEGACY_USER_TYPE => PeerId::from(UserId::new(bare)),
        LEGACY_CHAT_TYPE => PeerId::from(ChatId::new(bare)),
        LEGACY_CHANNEL_TYPE => PeerId::from(ChannelId::new(bare)),
        LEGACY_PLACEHOLDER_TYPE => PeerId::from(PlaceholderId::new(bare)),
        _unknown => {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                serialized,
                nibble = _unknown >> 32,
                "unknown legacy peer type, decoding as empty"
            );
            PeerId::EMPTY
        }
    }
}
