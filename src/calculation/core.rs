//! # Calculation Core
//!
//! Gets `a²` and `b²` from the configured Operation Services and combines them.

use log::info;

use super::caller::{OperationCaller, Squared};
use crate::common::config::OperationsConfig;

/// `sqrt(a2 + b2)`, where the arguments are already squared.
pub fn hypotenuse(a_squared: f64, b_squared: f64) -> f64 {
    (a_squared + b_squared).sqrt()
}

/// Outcome of one calculation, including where each square came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Calculation {
    pub a: Squared,
    pub b: Squared,
    pub hypotenuse: f64,
}

pub struct CalculationCore {
    operations: OperationsConfig,
    caller: OperationCaller,
}

impl CalculationCore {
    pub fn new(operations: OperationsConfig) -> Self {
        let caller = OperationCaller::new(operations.timeout());
        Self { operations, caller }
    }

    /// Square `a` on Operation Service A and `b` on Operation Service B, then
    /// combine.
    ///
    /// Calls run `a` then `b` unless `concurrent` is set. A failed call never
    /// fails the calculation; see [`OperationCaller::square_or_fallback`].
    pub async fn compute(&self, a: f64, b: f64) -> Calculation {
        let (a_squared, b_squared) = if self.operations.concurrent {
            tokio::join!(
                self.caller.square_or_fallback("a", &self.operations.a, a),
                self.caller.square_or_fallback("b", &self.operations.b, b),
            )
        } else {
            let a_squared = self.caller.square_or_fallback("a", &self.operations.a, a).await;
            let b_squared = self.caller.square_or_fallback("b", &self.operations.b, b).await;
            (a_squared, b_squared)
        };

        let result = hypotenuse(a_squared.value, b_squared.value);
        info!(
            "📐 a² via {}, b² via {} -> hypotenuse {}",
            a_squared.source, b_squared.source, result
        );

        Calculation {
            a: a_squared,
            b: b_squared,
            hypotenuse: result,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::caller::SquareSource;

    #[test]
    fn test_hypotenuse() {
        assert_eq!(hypotenuse(9.0, 16.0), 5.0);
        assert_eq!(hypotenuse(0.0, 0.0), 0.0);
    }

    #[tokio::test]
    async fn test_compute_with_no_operation_servers() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let dead = listener.local_addr().unwrap().to_string();
        drop(listener);

        for concurrent in [false, true] {
            let core = CalculationCore::new(OperationsConfig {
                a: dead.clone(),
                b: dead.clone(),
                concurrent,
                timeout_ms: Some(1_000),
            });

            let calc = core.compute(3.0, 4.0).await;
            assert_eq!(calc.hypotenuse, 5.0);
            assert_eq!(calc.a.source, SquareSource::Local);
            assert_eq!(calc.b.source, SquareSource::Local);
        }
    }
}
