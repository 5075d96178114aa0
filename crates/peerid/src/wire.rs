//! Transport-side integer carriers and the peer description they travel in.
//!
//! These are value models of what the protocol layer hands over. The
//! conversions here only read and write the carried integers; no framing or
//! magnitude checks happen.

use crate::{ChannelId, ChatId, PeerId, UserId};

/// A 32-bit integer as carried on the wire.
#[cfg_attr(
    feature = "serde",
    derive(::serde::Serialize, ::serde::Deserialize),
    serde(transparent)
)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct WireInt(pub i32);

/// A 64-bit integer as carried on the wire.
#[cfg_attr(
    feature = "serde",
    derive(::serde::Serialize, ::serde::Deserialize),
    serde(transparent)
)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct WireLong(pub u64);

/// A remote peer reference. The active variant is the category.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum WirePeer {
    User { user_id: WireLong },
    Chat { chat_id: WireLong },
    Channel { channel_id: WireLong },
}

/// Reads the category and bare number out of a wire peer.
pub fn peer_from_wire(peer: &WirePeer) -> PeerId {
    match *peer {
        WirePeer::User { user_id } => PeerId::from_user(user_id),
        WirePeer::Chat { chat_id } => PeerId::from_chat(chat_id),
        WirePeer::Channel { channel_id } => PeerId::from_channel(channel_id),
    }
}

/// Builds a minimal wire peer for `id`.
///
/// A peer of no known category, including one with a placeholder tag, comes
/// out as the empty user.
pub fn peer_to_wire(id: PeerId) -> WirePeer {
    if id.is::<UserId>() {
        WirePeer::User {
            user_id: bare_to_wire(id),
        }
    } else if id.is::<ChatId>() {
        WirePeer::Chat {
            chat_id: bare_to_wire(id),
        }
    } else if id.is::<ChannelId>() {
        WirePeer::Channel {
            channel_id: bare_to_wire(id),
        }
    } else {
        WirePeer::User {
            user_id: WireLong(0),
        }
    }
}

/// The bare number of `id`, whatever its category, as a wire long.
pub const fn bare_to_wire(id: PeerId) -> WireLong {
    WireLong(id.bare())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PlaceholderId;

    #[test]
    fn variant_selects_category() {
        let user = peer_from_wire(&WirePeer::User {
            user_id: WireLong(10),
        });
        let chat = peer_from_wire(&WirePeer::Chat {
            chat_id: WireLong(10),
        });
        let channel = peer_from_wire(&WirePeer::Channel {
            channel_id: WireLong(10),
        });

        assert_eq!(user.to_user(), UserId::new(10));
        assert_eq!(chat.to_chat(), ChatId::new(10));
        assert_eq!(channel.to_channel(), ChannelId::new(10));
        assert_ne!(user, chat);
        assert_ne!(chat, channel);
    }

    #[test]
    fn wire_peer_round_trips() {
        let peers = [
            WirePeer::User {
                user_id: WireLong(5_000_000_000),
            },
            WirePeer::Chat {
                chat_id: WireLong(777),
            },
            WirePeer::Channel {
                channel_id: WireLong(1_234_567_890),
            },
        ];
        for peer in peers {
            assert_eq!(peer_to_wire(peer_from_wire(&peer)), peer);
        }
    }

    #[test]
    fn unknown_category_becomes_empty_user() {
        let empty_user = WirePeer::User {
            user_id: WireLong(0),
        };
        assert_eq!(peer_to_wire(PeerId::from(PlaceholderId::new(3))), empty_user);
        assert_eq!(peer_to_wire(PeerId::from_raw((0x10 << 48) | 3)), empty_user);
        assert_eq!(peer_to_wire(PeerId::EMPTY), empty_user);
    }

    #[test]
    fn oversized_wire_id_converts_without_panicking() {
        let id = peer_from_wire(&WirePeer::User {
            user_id: WireLong(u64::MAX),
        });
        assert!(!id.is_user());
        assert!(id.to_user().is_empty());
        assert_eq!(
            peer_to_wire(id),
            WirePeer::User {
                user_id: WireLong(0)
            }
        );
    }

    #[test]
    fn bare_drops_the_tag() {
        let id = PeerId::from_channel(12345u64);
        assert_eq!(bare_to_wire(id), WireLong(12345));
    }
}
