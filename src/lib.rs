//! Client-side reconciliation cache for Mastodon-style timelines.
//!
//! Weir keeps local replicas of server-ordered item sequences (a home feed,
//! public/list/hashtag feeds, the notifications stream) consistent under
//! three concurrent, unordered input channels: a live push channel delivering
//! single newest-first items, paginated backfill fetches returning contiguous
//! runs, and relationship/deletion events that retroactively remove items
//! from every cache.
//!
//! # Notes on data flow
//! * **Transport → `Command`**:
//! The transport layer performs the HTTP fetches and maintains the push
//! connection.  It reports each already-resolved outcome (a finished fetch, a
//! delivered push item, a failed request) as one `Command`; ids come in, no
//! payloads.
//!
//! * **`Command` → `Engine`**:
//! The `Engine` is the single serial event-application point.  It owns one
//! `TimelineCache` per stream key and applies commands strictly in receipt
//! order; there are no internal threads and nothing ever blocks.
//!
//! * **`Engine` → rendering**:
//! The rendering layer reads cache state (the visible slot sequence with its
//! gap markers, the pending count, the unread count) and feeds viewport
//! changes (scroll position, tab visibility, mounts) back in as commands.

pub mod cache;
pub mod command;
pub mod config;
pub mod engine;
pub mod err;
pub mod timeline;

pub use command::{Command, Id};
pub use engine::Engine;
