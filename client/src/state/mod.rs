//! Plain state structs held in Leptos signals.

pub mod draft;
