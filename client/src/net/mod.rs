//! HTTP calls to the dev host.

pub mod config;
