//! # Operation Service
//!
//! The leaf service of the system. It squares whatever value it is sent.
//!
//! ## Core ([`core`])
//! Performs the arithmetic and nothing else.
//!
//! ## Server ([`server`])
//! Owns the listener, reads one value per connection, replies with one value.

pub mod core;
pub mod server;

pub use self::core::OperationCore;
pub use server::OperationServer;
