//! FILENAME: core/operations/src/aggregate.rs
//! PURPOSE: Incremental reduction of numeric values for grouping.

use serde::{Deserialize, Serialize};

use crate::definition::AggregationType;

/// Accumulator for computing aggregates incrementally.
/// Stores the intermediate state needed for every aggregation type.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AggregateAccumulator {
    pub sum: f64,
    /// Running mean, used when `sum` overflows.
    pub mean: f64,
    pub count: u64,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl AggregateAccumulator {
    pub fn new() -> Self {
        AggregateAccumulator::default()
    }

    /// Adds a defined numeric value.
    pub fn add_number(&mut self, value: f64) {
        self.count += 1;
        self.sum += value;
        self.mean += (value - self.mean) / (self.count as f64);
        self.min = Some(self.min.map_or(value, |m| m.min(value)));
        self.max = Some(self.max.map_or(value, |m| m.max(value)));
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Computes the final aggregate, or None when no value was added.
    /// With `integer` set, averages are truncated toward zero.
    /// A sum that left the f64 range comes back infinite.
    pub fn compute(&self, aggregation: AggregationType, integer: bool) -> Option<f64> {
        if self.is_empty() {
            return None;
        }
        match aggregation {
            AggregationType::Sum => Some(self.sum),
            AggregationType::Average => {
                let avg = if self.sum.is_finite() {
                    self.sum / (self.count as f64)
                } else {
                    self.mean
                };
                Some(if integer { avg.trunc() } else { avg })
            }
            AggregationType::Maximum => self.max,
            AggregationType::Minimum => self.min,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(values: &[f64]) -> AggregateAccumulator {
        let mut acc = AggregateAccumulator::new();
        for v in values {
            acc.add_number(*v);
        }
        acc
    }

    #[test]
    fn test_reductions() {
        let acc = filled(&[77.0, 309.0, 190.0]);
        assert_eq!(acc.compute(AggregationType::Sum, true), Some(576.0));
        assert_eq!(acc.compute(AggregationType::Average, true), Some(192.0));
        assert_eq!(acc.compute(AggregationType::Maximum, true), Some(309.0));
        assert_eq!(acc.compute(AggregationType::Minimum, true), Some(77.0));
    }

    #[test]
    fn test_integer_average_truncates() {
        let acc = filled(&[72.0, 309.0]);
        assert_eq!(acc.compute(AggregationType::Average, true), Some(190.0));
        assert_eq!(acc.compute(AggregationType::Average, false), Some(190.5));

        let negative = filled(&[-3.0, -4.0]);
        assert_eq!(negative.compute(AggregationType::Average, true), Some(-3.0));
    }

    #[test]
    fn test_average_survives_sum_overflow() {
        let acc = filled(&[1e308, 1e308, 1e308]);
        assert_eq!(acc.compute(AggregationType::Sum, false), Some(f64::INFINITY));
        assert_eq!(acc.compute(AggregationType::Average, false), Some(1e308));
        assert_eq!(acc.compute(AggregationType::Maximum, false), Some(1e308));
    }

    #[test]
    fn test_empty_accumulator_has_no_result() {
        let acc = AggregateAccumulator::new();
        assert!(acc.is_empty());
        assert_eq!(acc.compute(AggregationType::Sum, false), None);
    }
}
