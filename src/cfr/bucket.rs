/// bytes in a bucket: five zero-padded slots for the acting seat's sorted
/// hand followed by up to twenty public plays in order.
pub const BUCKET_WIDTH: usize = 25;

/// an information-set key: a canonical, fixed-width serialization of what
/// the seat to act can see. zero is not a valid card byte, so padding is
/// unambiguous. fixed width keeps hashing cheap and the table key `Copy`
/// (no strings, no heap).
///
/// two states with equal buckets are indistinguishable to the seat to
/// act and share one strategy entry.
#[derive(Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Bucket([u8; BUCKET_WIDTH]);

/// fixed-width hex string, so buckets can key string-only map formats.
#[cfg(feature = "serde")]
impl serde::Serialize for Bucket {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use std::fmt::Write;
        let mut hex = String::with_capacity(2 * BUCKET_WIDTH);
        for byte in self.0.iter() {
            write!(hex, "{:02x}", byte).expect("writing to a string");
        }
        serializer.serialize_str(&hex)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Bucket {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::Error;
        let hex = String::deserialize(deserializer)?;
        if hex.len() != 2 * BUCKET_WIDTH || !hex.is_ascii() {
            return Err(D::Error::custom("malformed bucket encoding"));
        }
        let mut bytes = [0u8; BUCKET_WIDTH];
        for (i, slot) in bytes.iter_mut().enumerate() {
            *slot = u8::from_str_radix(&hex[2 * i..2 * i + 2], 16).map_err(D::Error::custom)?;
        }
        Ok(Self(bytes))
    }
}

impl From<[u8; BUCKET_WIDTH]> for Bucket {
    fn from(bytes: [u8; BUCKET_WIDTH]) -> Self {
        Self(bytes)
    }
}

/// zero-pads short observations, for games smaller than euchre.
impl From<&[u8]> for Bucket {
    fn from(bytes: &[u8]) -> Self {
        assert!(bytes.len() <= BUCKET_WIDTH, "observation too wide for a bucket");
        let mut padded = [0u8; BUCKET_WIDTH];
        padded[..bytes.len()].copy_from_slice(bytes);
        Self(padded)
    }
}

impl std::fmt::Debug for Bucket {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let trimmed = self.0.iter().rposition(|b| *b != 0).map_or(0, |i| i + 1);
        write!(f, "Bucket(")?;
        for byte in self.0.iter().take(trimmed) {
            write!(f, "{:02}", byte)?;
        }
        write!(f, ")")
    }
}
