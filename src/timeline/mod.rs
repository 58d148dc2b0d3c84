//! Stream keys.
//!
//! Each independently-paginated, independently-live-updated sequence is one
//! `Timeline`.  Keys have a canonical textual form (`home`, `public:local`,
//! `hashtag:rust`, `list:7`, `account:1`, ...) which is what the deletion
//! cascade's exclusion prefix matches against and what state snapshots use.

mod err;

pub use err::TimelineErr;

use crate::Id;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

type Result<T> = std::result::Result<T, TimelineErr>;

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Timeline(pub Stream, pub Reach);

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum Stream {
    Home,
    Notifications,
    Public,
    Hashtag(String),
    List(i64),
    Account(Id),
    Direct,
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Reach {
    Federated,
    Local,
}

impl Timeline {
    pub fn home() -> Self {
        Self(Stream::Home, Reach::Federated)
    }

    pub fn notifications() -> Self {
        Self(Stream::Notifications, Reach::Federated)
    }

    /// Notifications route live items by focus, not just scroll position.
    pub(crate) fn is_notifications(&self) -> bool {
        matches!(self.0, Stream::Notifications)
    }

    pub fn from_key(key: &str) -> Result<Self> {
        use {Reach::*, Stream::*};

        Ok(match &key.split(':').collect::<Vec<&str>>()[..] {
            ["home"] => Timeline(Home, Federated),
            ["notifications"] => Timeline(Notifications, Federated),
            ["public"] => Timeline(Public, Federated),
            ["public", "local"] => Timeline(Public, Local),
            ["hashtag", tag] => Timeline(Hashtag((*tag).to_string()), Federated),
            ["hashtag", tag, "local"] => Timeline(Hashtag((*tag).to_string()), Local),
            ["list", id] => Timeline(List(id.parse()?), Federated),
            ["account", id] => Timeline(Account(Id::new(*id)), Federated),
            ["direct"] => Timeline(Direct, Federated),
            [..] => Err(TimelineErr::InvalidInput)?, // Other streams don't exist
        })
    }
}

impl fmt::Display for Timeline {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use {Reach::*, Stream::*};

        let key = match self {
            Timeline(Home, _) => "home".to_string(),
            Timeline(Notifications, _) => "notifications".to_string(),
            Timeline(Public, Federated) => "public".to_string(),
            Timeline(Public, Local) => "public:local".to_string(),
            Timeline(Hashtag(tag), Federated) => ["hashtag:", tag].concat(),
            Timeline(Hashtag(tag), Local) => ["hashtag:", tag, ":local"].concat(),
            Timeline(List(id), _) => format!("list:{}", id),
            Timeline(Account(id), _) => format!("account:{}", id),
            Timeline(Direct, _) => "direct".to_string(),
        };
        write!(f, "{}", key)
    }
}

impl FromStr for Timeline {
    type Err = TimelineErr;

    fn from_str(key: &str) -> Result<Self> {
        Self::from_key(key)
    }
}

impl Serialize for Timeline {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Timeline {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Timeline, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(TimelineVisitor)
    }
}

struct TimelineVisitor;
impl<'de> Visitor<'de> for TimelineVisitor {
    type Value = Timeline;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a timeline key such as `home` or `hashtag:rust`")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> std::result::Result<Self::Value, E> {
        Timeline::from_key(value).map_err(|_| E::custom(format!("unsupported key: {}", value)))
    }
}
