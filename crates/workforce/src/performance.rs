//! Worker performance scoring.
//!
//! The composite score is the plain mean of accuracy and productivity; it is
//! not rounded here. Tiers are evaluated top-down, first match wins.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use stockyard_core::{DomainResult, Percentage};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PerformanceTier {
    NeedsImprovement,
    Average,
    Good,
    Excellent,
}

impl PerformanceTier {
    pub const ALL: [PerformanceTier; 4] = [
        PerformanceTier::Excellent,
        PerformanceTier::Good,
        PerformanceTier::Average,
        PerformanceTier::NeedsImprovement,
    ];

    /// Tier for a composite score.
    pub fn for_score(composite: Decimal) -> Self {
        if composite >= Decimal::from(95) {
            PerformanceTier::Excellent
        } else if composite >= Decimal::from(90) {
            PerformanceTier::Good
        } else if composite >= Decimal::from(80) {
            PerformanceTier::Average
        } else {
            PerformanceTier::NeedsImprovement
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PerformanceTier::Excellent => "Excellent",
            PerformanceTier::Good => "Good",
            PerformanceTier::Average => "Average",
            PerformanceTier::NeedsImprovement => "Needs Improvement",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceScore {
    pub composite_score: Decimal,
    pub tier: PerformanceTier,
}

/// Score raw percentages. Values outside 0..=100 are an `InvalidArgument`.
pub fn score(accuracy: Decimal, productivity: Decimal) -> DomainResult<PerformanceScore> {
    Ok(score_percentages(
        Percentage::new(accuracy)?,
        Percentage::new(productivity)?,
    ))
}

/// Score already range-checked percentages.
pub fn score_percentages(accuracy: Percentage, productivity: Percentage) -> PerformanceScore {
    let composite_score = (accuracy.value() + productivity.value()) / Decimal::TWO;
    PerformanceScore {
        composite_score,
        tier: PerformanceTier::for_score(composite_score),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn reference_scores() {
        assert_eq!(
            score(dec!(98.5), dec!(95.2)).unwrap(),
            PerformanceScore {
                composite_score: dec!(96.85),
                tier: PerformanceTier::Excellent,
            }
        );
        assert_eq!(
            score(dec!(96.8), dec!(88.7)).unwrap(),
            PerformanceScore {
                composite_score: dec!(92.75),
                tier: PerformanceTier::Good,
            }
        );
        assert_eq!(
            score(dec!(0), dec!(0)).unwrap(),
            PerformanceScore {
                composite_score: dec!(0),
                tier: PerformanceTier::NeedsImprovement,
            }
        );
    }

    #[test]
    fn tier_thresholds_are_inclusive() {
        assert_eq!(PerformanceTier::for_score(dec!(95)), PerformanceTier::Excellent);
        assert_eq!(PerformanceTier::for_score(dec!(94.99)), PerformanceTier::Good);
        assert_eq!(PerformanceTier::for_score(dec!(90)), PerformanceTier::Good);
        assert_eq!(PerformanceTier::for_score(dec!(80)), PerformanceTier::Average);
        assert_eq!(PerformanceTier::for_score(dec!(79.995)), PerformanceTier::NeedsImprovement);
    }

    #[test]
    fn composite_is_not_rounded() {
        let s = score(dec!(90.1), dec!(90.2)).unwrap();
        assert_eq!(s.composite_score, dec!(90.15));
    }

    #[test]
    fn out_of_range_inputs_are_invalid_arguments() {
        assert!(score(dec!(100.5), dec!(90)).unwrap_err().is_invalid_argument());
        assert!(score(dec!(90), dec!(-0.1)).unwrap_err().is_invalid_argument());
    }

    #[test]
    fn serializes_tier_in_upper_snake_case() {
        let json = serde_json::to_string(&PerformanceTier::NeedsImprovement).unwrap();
        assert_eq!(json, "\"NEEDS_IMPROVEMENT\"");
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn percentage() -> impl Strategy<Value = Decimal> {
            (0i64..=1000).prop_map(|tenths| Decimal::new(tenths, 1))
        }

        proptest! {
            #[test]
            fn composite_stays_between_its_inputs(a in percentage(), p in percentage()) {
                let s = score(a, p).unwrap();
                prop_assert!(s.composite_score >= a.min(p));
                prop_assert!(s.composite_score <= a.max(p));
            }

            #[test]
            fn tier_is_monotonic_in_the_score(a in percentage(), p in percentage(), bump in percentage()) {
                let base = score(a, p).unwrap();
                let higher_accuracy = (a + bump).min(Decimal::from(100));
                let better = score(higher_accuracy, p).unwrap();
                prop_assert!(better.tier >= base.tier);
            }
        }
    }
}
