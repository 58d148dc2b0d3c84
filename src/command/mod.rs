//! The engine's entire external surface: a closed set of already-parsed
//! commands, applied one at a time.
//!
//! The transport layer resolves its own concerns (HTTP fetches, push
//! connections, viewport tracking in the UI) and reports the outcomes here as
//! discrete commands.  The engine never performs I/O of its own, so a
//! `Command` carries everything the engine needs: ids, not payloads.

mod err;
mod id;

pub use err::CommandErr;
pub use id::Id;

use crate::cache::MergeMode;
use crate::timeline::Timeline;

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;

#[rustfmt::skip]
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "snake_case", tag = "op")]
pub enum Command {
    /// A backfill/refresh request went out; the in-flight counter goes up.
    ExpandRequest { timeline: Timeline },
    /// A fetched page arrived: a contiguous, descending run of ids.
    ExpandSuccess {
        timeline: Timeline,
        mode: MergeMode,
        items: Vec<Id>,
        #[serde(default)]
        partial: bool,
        #[serde(default = "default_has_more")]
        has_more: bool,
    },
    /// A request failed; the in-flight counter still has to come down.
    ExpandFail { timeline: Timeline },
    /// A single item delivered over the live push channel.
    Update { timeline: Timeline, id: Id, #[serde(default)] filtered: bool },
    Connect { timeline: Timeline },
    Disconnect { timeline: Timeline },
    /// The viewer asked for the withheld items ("show N new items").
    LoadPending { timeline: Timeline },
    SetViewport { timeline: Timeline, top: bool, visible: bool, mounted: u32 },
    /// The stream's filter/scope changed; its cache starts over.
    ClearTimeline { timeline: Timeline },
    /// An item was deleted, along with everything that referenced it.
    Delete {
        id: Id,
        #[serde(default)]
        references: Vec<Id>,
        #[serde(default)]
        exclude: Option<String>,
    },
    /// A block/mute/unfollow: every item owned by the account disappears.
    PurgeAccount { account: Id, owners: HashMap<Id, Id> },
    MarkForDelete { id: Id, marked: bool },
    SetCleaningMode { active: bool },
    /// The server acknowledged a read marker.
    MarkerSaved { id: Id },
}

fn default_has_more() -> bool {
    true
}

impl TryFrom<&str> for Command {
    type Error = CommandErr;

    fn try_from(text: &str) -> Result<Self, Self::Error> {
        Ok(serde_json::from_str(text)?)
    }
}
