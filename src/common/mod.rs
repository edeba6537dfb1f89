//! # Common Components
//!
//! Shared utilities and data structures used by the client and both services.
//!
//! ## Modules
//!
//! - [`codec`]: Exchange Value encoding (8-byte big-endian IEEE-754 doubles)
//! - [`connection`]: TCP connection abstraction that reads and writes Exchange Values
//! - [`config`]: Configuration structures and TOML loading
//! - [`error`]: Typed errors surfaced by every network exchange
//! - [`listener`]: Accept loop shared by the two services
//! - [`logging`]: Logger initialization for the binaries

pub mod codec;
pub mod config;
pub mod connection;
pub mod error;
pub mod listener;
pub mod logging;
