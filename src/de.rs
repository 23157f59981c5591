use core::fmt;

use serde::de::{self, Deserialize, Deserializer, SeqAccess, Visitor};

use crate::{try_decode, VarUint, MAX_LEN};

struct VarUintVisitor;

impl<'de> Visitor<'de> for VarUintVisitor {
    type Value = VarUint;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("the bytes of a single canonically encoded varuint")
    }

    fn visit_bytes<E>(self, v: &[u8]) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        let (value, len) = try_decode(v).map_err(E::custom)?;
        // Exactly one value, nothing after it
        if len != v.len() {
            return Err(E::invalid_length(v.len(), &self));
        }
        Ok(VarUint(value))
    }

    // Self-describing formats without a native bytes type (JSON) hand us a sequence of u8
    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut buf = [0_u8; MAX_LEN];
        let mut len = 0;
        while let Some(byte) = seq.next_element::<u8>()? {
            if len == MAX_LEN {
                return Err(de::Error::invalid_length(len + 1, &self));
            }
            buf[len] = byte;
            len += 1;
        }
        self.visit_bytes(&buf[..len])
    }
}

impl<'de> Deserialize<'de> for VarUint {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_bytes(VarUintVisitor)
    }
}
