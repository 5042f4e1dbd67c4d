//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `map_draft` wraps the imperative map widget so pages only deal with a
//! draft signal and an update callback.

pub mod map_draft;
