//! # Calculation Service
//!
//! The coordinating service. It receives `a` and `b` from a client, has each
//! value squared by an Operation Service, and answers with `sqrt(a² + b²)`.
//!
//! ## Caller ([`caller`])
//! One outbound exchange per value, with a local fallback when the Operation
//! Service cannot be reached.
//!
//! ## Core ([`core`])
//! Orders the two calls and combines their results.
//!
//! ## Server ([`server`])
//! Owns the listener and the client-facing exchange.

pub mod caller;
pub mod core;
pub mod server;

pub use caller::{OperationCaller, SquareSource, Squared};
pub use self::core::{hypotenuse, Calculation, CalculationCore};
pub use server::CalculationServer;
