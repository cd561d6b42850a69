//! Core logic for the Met art Telegram bot.
//!
//! This crate is framework-agnostic. Telegram and HTTP live behind ports
//! (traits) implemented in adapter crates.

pub mod artwork;
pub mod config;
pub mod dispatch;
pub mod domain;
pub mod errors;
pub mod formatting;
pub mod logging;
pub mod messaging;
pub mod ports;

pub use errors::{Error, Result};
