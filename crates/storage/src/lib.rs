//! Local storage for Signage Studio
//!
//! This crate provides the editor's device-local persistence: a sled-backed
//! JSON key-value store and a bounded, deduplicated recency list built on it.
//! The site's content lives behind the back-office API; only editor-side
//! state (theme history, device settings) is stored here.

#![warn(clippy::all)]

pub mod kv;
pub mod recency;

pub use kv::{KvConfig, KvError, KvStore};
pub use recency::RecencyList;
