use serde::{
    de::{self, Visitor},
    Deserialize, Deserializer, Serialize, Serializer,
};
use std::cmp::Ordering;
use std::fmt;

/// A server-assigned item or account ID.
///
/// Mastodon-style IDs are large integers sent to clients as strings, because
/// JavaScript numbers cannot hold an i64.  This newtype keeps the string as the
/// "true" value and compares by length first, then lexicographically, which
/// matches numeric order for ids of any magnitude without ever parsing them.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Id(pub String);

impl Id {
    pub fn new(inner: impl Into<String>) -> Self {
        let inner = inner.into();
        if !inner.bytes().all(|b| b.is_ascii_digit()) {
            log::warn!("Non-numeric id `{}`; falling back to string order", inner);
        }
        Self(inner)
    }
}

impl Ord for Id {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.0.len().cmp(&other.0.len()) {
            Ordering::Equal => self.0.cmp(&other.0),
            unequal => unequal,
        }
    }
}

impl PartialOrd for Id {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Id {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Id({})", self.0)
    }
}

impl From<&str> for Id {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl Serialize for Id {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Id {
    fn deserialize<D>(deserializer: D) -> Result<Id, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_string(IdVisitor)
    }
}

struct IdVisitor;
impl<'de> Visitor<'de> for IdVisitor {
    type Value = Id;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a string holding a decimal id")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        Ok(Id::new(value))
    }

    fn visit_string<E: de::Error>(self, value: String) -> Result<Self::Value, E> {
        Ok(Id::new(value))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn numeric_order_across_digit_lengths() {
        assert!(Id::new("100") > Id::new("99"));
        assert!(Id::new("99") < Id::new("100"));
        assert!(Id::new("102775370117886890") > Id::new("99999999999999999"));
    }

    #[test]
    fn same_length_compares_lexicographically() {
        assert!(Id::new("105") > Id::new("104"));
        assert_eq!(Id::new("104").cmp(&Id::new("104")), Ordering::Equal);
    }

    #[test]
    fn equality_is_string_identity() {
        assert_ne!(Id::new("007"), Id::new("7"));
        assert_eq!(Id::new("7"), Id::new("7"));
    }
}
