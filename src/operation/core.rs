//! # Operation Core
//!
//! Squares a single value. All socket handling lives in
//! [`OperationServer`](super::server::OperationServer).

use log::info;

/// Square `value` under plain IEEE-754 multiplication.
///
/// The Calculation Service uses the same function for its fallback, so a value
/// squared locally is indistinguishable from one squared remotely.
pub fn square(value: f64) -> f64 {
    value * value
}

/// Core operation component, named for logging.
pub struct OperationCore {
    name: String,
}

impl OperationCore {
    pub fn new(name: String) -> Self {
        Self { name }
    }

    /// Square a value received from a caller.
    pub fn square(&self, value: f64) -> f64 {
        info!("📥 {} received value: {}", self.name, value);
        let result = square(value);
        info!("📤 {} sending result: {}", self.name, result);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_matches_multiplication() {
        let core = OperationCore::new("op".to_string());
        for v in [0.0, 3.0, 4.5, 123456789.0, 987654321.0, 1e-300] {
            assert_eq!(core.square(v).to_bits(), (v * v).to_bits());
        }
    }

    #[test]
    fn test_square_of_negative_is_positive() {
        assert_eq!(square(-4.0), 16.0);
    }
}
