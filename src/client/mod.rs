//! # Client Components
//!
//! ## Core Client ([`client`])
//! Sends `a` and `b` to the Calculation Service and reads back the hypotenuse.
//!
//! ## Report ([`report`])
//! Optional JSON record of a finished exchange.

pub mod client;
pub mod report;

pub use client::ClientCore;
pub use report::ExchangeReport;
