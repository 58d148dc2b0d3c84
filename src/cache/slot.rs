use crate::Id;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// One position in a cached sequence: a known id, or a marker meaning "items
/// may be missing between the neighboring slots".
///
/// Serializes as the id string or JSON `null`, the representation the web
/// client renders a load-more row from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Slot {
    Item(Id),
    Gap,
}

impl Slot {
    pub fn id(&self) -> Option<&Id> {
        match self {
            Self::Item(id) => Some(id),
            Self::Gap => None,
        }
    }

    pub(crate) fn is_gap(&self) -> bool {
        matches!(self, Self::Gap)
    }
}

impl From<Id> for Slot {
    fn from(id: Id) -> Self {
        Self::Item(id)
    }
}

impl Serialize for Slot {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Item(id) => id.serialize(serializer),
            Self::Gap => serializer.serialize_unit(),
        }
    }
}

impl<'de> Deserialize<'de> for Slot {
    fn deserialize<D>(deserializer: D) -> Result<Slot, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<Id>::deserialize(deserializer)? {
            Some(id) => Self::Item(id),
            None => Self::Gap,
        })
    }
}
