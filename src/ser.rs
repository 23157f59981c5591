use serde::ser::{Serialize, Serializer};

use crate::{encode, VarUint, MAX_LEN};

impl Serialize for VarUint {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut buf = [0_u8; MAX_LEN];
        let len = encode(&mut buf, self.0);
        serializer.serialize_bytes(&buf[..len])
    }
}
