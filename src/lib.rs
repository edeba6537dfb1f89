//! # Remote Hypotenuse
//!
//! A client sends two numbers to a Calculation Service, which has each one
//! squared by an Operation Service (or squares it locally when that service is
//! unreachable) and replies with `sqrt(a² + b²)`.
//!
//! Every hop speaks the same protocol: the initiator writes 8-byte big-endian
//! doubles, the responder writes one back, and the connection closes.

pub mod calculation;
pub mod client;
pub mod common;
pub mod operation;

pub use calculation::CalculationServer;
pub use client::ClientCore;
pub use common::error::{ExchangeError, Result};
pub use operation::OperationServer;
