//! # peerid
//!
//! Category-safe peer identifiers that flatten into a single `u64`.
//!
//! Three kinds of addressable entities (users, small group chats and
//! channels) each get their own bare id type, [`UserId`], [`ChatId`] and
//! [`ChannelId`]. These are all instances of [`TypedId`], with the category
//! tag carried in the type. Mixing them up is a compile error.
//!
//! When ids of different categories need to share a map or a storage column,
//! they are lifted into a [`PeerId`], which packs the tag into bits 48..56:
//!
//! ```text
//!  Bit Index:  63          56 55          48 47                           0
//!              +--------------+--------------+-----------------------------+
//!  Field:      | reserved (8) |   tag (8)    |          bare (48)          |
//!              +--------------+--------------+-----------------------------+
//!              |<----- MSB ------------- 64 bits ------------- LSB ------->|
//! ```
//!
//! ```
//! use peerid::{ChannelId, PeerId, UserId};
//!
//! let peer = PeerId::from(ChannelId::new(12345));
//! assert!(peer.is_channel());
//! assert_eq!(peer.to_channel(), ChannelId::new(12345));
//!
//! // Projecting to the wrong category yields the empty id, never an error.
//! assert!(peer.to_user().is_empty());
//! assert_eq!(peer.to::<UserId>(), UserId::default());
//! ```
//!
//! Persisted values go through [`serialize_peer_id`] and
//! [`deserialize_peer_id`]. The latter also reads values written in the
//! older, range-based layout.
//!
//! ## Features
//!
//! - `std`: links the standard library. Without it the crate is `no_std`.
//! - `serde`: `Serialize`/`Deserialize` for all id types.
//! - `tracing`: instruments the persisted codec.
#![cfg_attr(not(any(feature = "std", test)), no_std)]

mod codec;
mod error;
mod id;
#[cfg(feature = "serde")]
mod serde;
mod wire;

pub use crate::codec::*;
pub use crate::error::*;
pub use crate::id::*;
#[cfg(feature = "serde")]
pub use crate::serde::*;
pub use crate::wire::*;
