use crate::TypedId;
use ::serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Writes the bare number.
impl<const KIND: u8> Serialize for TypedId<KIND> {
    fn serialize<S>(&self, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.bare().serialize(s)
    }
}

/// Reads a bare number. Goes through [`TypedId::new`], so a reserved tag
/// fails the build here as it does everywhere else.
impl<'de, const KIND: u8> Deserialize<'de> for TypedId<KIND> {
    fn deserialize<D>(d: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        u64::deserialize(d).map(Self::new)
    }
}
