//! cari-bot library
//!
//! Telegram front end for SerpApi Google search with Indonesian locale
//! defaults. The binary wires configuration, logging, and the dispatcher;
//! everything else lives here so tests can drive it directly.

pub mod bot;
pub mod config;
pub mod format;
pub mod logging;
pub mod search;
