//! Confidence banding for prediction results.
//!
//! Branching uses the raw probability; rounding only happens for display.

use std::fmt;

/// Final decision for an application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Approved,
    Rejected,
}

impl Decision {
    /// `prediction == 1` is approval; every other value is a rejection.
    pub fn from_prediction(prediction: u8) -> Self {
        if prediction == 1 {
            Decision::Approved
        } else {
            Decision::Rejected
        }
    }
}

/// Discrete label assigned to a probability range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfidenceBand {
    MarginalApproval,
    ModerateApproval,
    HighApproval,
    BorderlineRejection,
    ModerateRejection,
    HighRejection,
}

impl ConfidenceBand {
    pub fn message(self) -> &'static str {
        match self {
            ConfidenceBand::MarginalApproval => {
                "Marginal approval – additional review recommended"
            }
            ConfidenceBand::ModerateApproval => "Moderate confidence approval",
            ConfidenceBand::HighApproval => "High confidence approval",
            ConfidenceBand::BorderlineRejection => "Borderline case – manual review suggested",
            ConfidenceBand::ModerateRejection => "Moderate confidence rejection",
            ConfidenceBand::HighRejection => "High confidence rejection",
        }
    }
}

impl fmt::Display for ConfidenceBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Map a (prediction, probability) pair to its band.
pub fn classify(prediction: u8, probability: f64) -> ConfidenceBand {
    match Decision::from_prediction(prediction) {
        Decision::Approved => {
            if probability < 0.60 {
                ConfidenceBand::MarginalApproval
            } else if probability < 0.75 {
                ConfidenceBand::ModerateApproval
            } else {
                ConfidenceBand::HighApproval
            }
        }
        Decision::Rejected => {
            if probability > 0.40 {
                ConfidenceBand::BorderlineRejection
            } else if probability > 0.30 {
                ConfidenceBand::ModerateRejection
            } else {
                ConfidenceBand::HighRejection
            }
        }
    }
}

/// Probability as a percentage with one decimal, e.g. `0.8234` -> `"82.3"`.
pub fn percent_label(probability: f64) -> String {
    format!("{:.1}", probability * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_approval_bands() {
        assert_eq!(classify(1, 0.0), ConfidenceBand::MarginalApproval);
        assert_eq!(classify(1, 0.5999), ConfidenceBand::MarginalApproval);
        assert_eq!(classify(1, 0.60), ConfidenceBand::ModerateApproval);
        assert_eq!(classify(1, 0.7499), ConfidenceBand::ModerateApproval);
        assert_eq!(classify(1, 0.75), ConfidenceBand::HighApproval);
        assert_eq!(classify(1, 1.0), ConfidenceBand::HighApproval);
    }

    #[test]
    fn test_rejection_bands() {
        assert_eq!(classify(0, 0.0), ConfidenceBand::HighRejection);
        assert_eq!(classify(0, 0.30), ConfidenceBand::HighRejection);
        assert_eq!(classify(0, 0.3001), ConfidenceBand::ModerateRejection);
        assert_eq!(classify(0, 0.40), ConfidenceBand::ModerateRejection);
        assert_eq!(classify(0, 0.4001), ConfidenceBand::BorderlineRejection);
        assert_eq!(classify(0, 0.99), ConfidenceBand::BorderlineRejection);
    }

    #[test]
    fn test_boundary_messages() {
        assert_eq!(classify(1, 0.60).message(), "Moderate confidence approval");
        assert_eq!(classify(0, 0.30).message(), "High confidence rejection");
        assert_eq!(classify(0, 0.40).message(), "Moderate confidence rejection");
        assert_eq!(
            classify(1, 0.2).message(),
            "Marginal approval – additional review recommended"
        );
        assert_eq!(
            classify(0, 0.45).message(),
            "Borderline case – manual review suggested"
        );
    }

    #[test]
    fn test_sweep_matches_band_definitions() {
        for i in 0..=1000 {
            let p = i as f64 / 1000.0;
            let approved = classify(1, p);
            let expected = if p < 0.60 {
                ConfidenceBand::MarginalApproval
            } else if p < 0.75 {
                ConfidenceBand::ModerateApproval
            } else {
                ConfidenceBand::HighApproval
            };
            assert_eq!(approved, expected, "approval p={p}");

            let rejected = classify(0, p);
            let expected = if p <= 0.30 {
                ConfidenceBand::HighRejection
            } else if p <= 0.40 {
                ConfidenceBand::ModerateRejection
            } else {
                ConfidenceBand::BorderlineRejection
            };
            assert_eq!(rejected, expected, "rejection p={p}");
        }
    }

    #[test]
    fn test_rounding_is_display_only() {
        // 0.59996 shows as 60.0% but still bands as marginal.
        assert_eq!(percent_label(0.59996), "60.0");
        assert_eq!(classify(1, 0.59996), ConfidenceBand::MarginalApproval);
        assert_eq!(percent_label(0.82), "82.0");
    }

    #[test]
    fn test_any_non_one_prediction_is_rejection() {
        assert_eq!(Decision::from_prediction(0), Decision::Rejected);
        assert_eq!(Decision::from_prediction(2), Decision::Rejected);
        assert_eq!(classify(2, 0.9), ConfidenceBand::BorderlineRejection);
    }
}
