use crate::{PeerId, SerdeError, deserialize_peer_id, serialize_peer_id};
use ::serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Writes the persisted form, so stored peers stay readable by
/// [`deserialize_peer_id`].
impl Serialize for PeerId {
    fn serialize<S>(&self, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serialize_peer_id(*self).serialize(s)
    }
}

/// Reads either persisted layout. Never rejects an integer.
impl<'de> Deserialize<'de> for PeerId {
    fn deserialize<D>(d: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        u64::deserialize(d).map(deserialize_peer_id)
    }
}

/// Serialize a [`PeerId`] as its packed in-memory value, without the
/// persisted-format flag.
///
/// Use with `#[serde(with = "peerid::as_packed_peer")]` for exchange with
/// systems that only understand the tagged layout.
pub mod as_packed_peer {
    use super::{Deserialize, Deserializer, PeerId, SerdeError, Serialize, Serializer};

    /// Serialize a peer id as its packed integer.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying serializer fails.
    pub fn serialize<S>(id: &PeerId, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        id.to_raw().serialize(s)
    }

    /// Deserialize a peer id from its packed integer.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The underlying deserializer fails
    /// - The integer sets the reserved tag bit or the unused high byte
    pub fn deserialize<'de, D>(d: D) -> Result<PeerId, D::Error>
    where
        D: Deserializer<'de>,
    {
        let n = u64::deserialize(d)?;
        PeerId::try_from_raw(n).map_err(|_| {
            ::serde::de::Error::custom(SerdeError::DecodeOverflow {
                id: PeerId::from_raw(n),
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ChannelId, ChatId, Error, UserId, WireLong, WirePeer};
    use serde_json::json;

    #[derive(PartialEq, Eq, Debug, Serialize, Deserialize)]
    struct Row {
        peer: PeerId,
        user: UserId,
    }

    #[derive(PartialEq, Eq, Debug, Serialize, Deserialize)]
    struct PackedRow {
        #[serde(with = "as_packed_peer")]
        peer: PeerId,
    }

    #[test]
    fn peer_writes_the_persisted_form() {
        let row = Row {
            peer: PeerId::from(ChannelId::new(12345)),
            user: UserId::new(42),
        };
        let value = serde_json::to_value(&row).expect("serialize");
        assert_eq!(value, json!({ "peer": 0x0082_0000_0000_3039_u64, "user": 42 }));

        let back: Row = serde_json::from_value(value).expect("deserialize");
        assert_eq!(back, row);
    }

    #[test]
    fn peer_reads_legacy_values() {
        let row: Row =
            serde_json::from_value(json!({ "peer": 0x1_0000_0309_u64, "user": 0 })).expect("deserialize");
        assert_eq!(row.peer, PeerId::from(ChatId::new(777)));
        assert!(row.user.is_empty());
    }

    #[test]
    fn packed_roundtrip() {
        let row = PackedRow {
            peer: PeerId::from(ChannelId::new(12345)),
        };
        let json = serde_json::to_string(&row).expect("serialize");
        assert_eq!(json, format!(r#"{{"peer":{}}}"#, (2u64 << 48) | 12345));
        let back: PackedRow = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, row);
    }

    #[test]
    fn packed_rejects_reserved_bits() {
        let raw = (1u64 << 55) | 5;
        let err = serde_json::from_value::<PackedRow>(json!({ "peer": raw })).expect_err("should fail");
        assert_eq!(
            err.to_string(),
            SerdeError::DecodeOverflow {
                id: PeerId::from_raw(raw)
            }
            .to_string()
        );
    }

    #[test]
    fn serde_error_converts_into_crate_error() {
        let err: Error = SerdeError::DecodeOverflow {
            id: PeerId::from_raw(u64::MAX),
        }
        .into();
        assert_eq!(err, Error::ReservedBits { value: u64::MAX });
    }

    #[test]
    fn wire_peer_is_externally_tagged() {
        let peer = WirePeer::Channel {
            channel_id: WireLong(9),
        };
        let value = serde_json::to_value(peer).expect("serialize");
        assert_eq!(value, json!({ "Channel": { "channel_id": 9 } }));
    }
}
