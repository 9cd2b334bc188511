//! View models. Everything a front-end needs to draw a result or a form field,
//! computed without touching any output device.

use super::classifier::{ConfidenceBand, Decision, classify, percent_label};
use super::entities::PredictionResult;

/// Numeric form fields that carry a live value label next to their input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Age,
    Income,
    EmploymentExperience,
    LoanAmount,
    CreditScore,
    CreditHistoryLength,
}

impl FormField {
    pub fn label(self) -> &'static str {
        match self {
            FormField::Age => "Age",
            FormField::Income => "Annual income",
            FormField::EmploymentExperience => "Employment experience",
            FormField::LoanAmount => "Loan amount",
            FormField::CreditScore => "Credit score",
            FormField::CreditHistoryLength => "Credit history length",
        }
    }

    /// Value label as shown beside the slider.
    pub fn display(self, value: f64) -> String {
        match self {
            FormField::Age | FormField::EmploymentExperience => {
                format!("{} years", value.round())
            }
            FormField::Income | FormField::LoanAmount => format!("₹{}", group_thousands(value)),
            FormField::CreditScore => format!("{}", value.round()),
            FormField::CreditHistoryLength => format!("{:.1} years", value),
        }
    }
}

/// Thousands-grouped number with at most three fraction digits, e.g. `1234567.5` -> `1,234,567.5`.
pub fn group_thousands(value: f64) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    let negative = rounded < 0.0;
    let text = format!("{:.3}", rounded.abs());
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), ""));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let frac = frac_part.trim_end_matches('0');
    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&grouped);
    if !frac.is_empty() {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// One labelled value on the result card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRow {
    pub label: &'static str,
    pub value: String,
}

/// Everything the result card shows, derived from a single prediction.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultView {
    pub decision: Decision,
    pub band: ConfidenceBand,
    pub icon: &'static str,
    pub title: &'static str,
    /// e.g. `Confidence: 82.0%`
    pub probability_text: String,
    pub details: Vec<DetailRow>,
    pub risk_factors: Vec<String>,
    /// `result-approved` or `result-rejected`.
    pub card_class: &'static str,
}

impl ResultView {
    pub fn from_result(result: &PredictionResult) -> Self {
        let decision = Decision::from_prediction(result.prediction);
        let approved = decision == Decision::Approved;
        let data = &result.application_data;

        let details = vec![
            DetailRow {
                label: "Applicant Age",
                value: format!("{} years", data.person_age),
            },
            DetailRow {
                label: "Annual Income",
                value: format!("${}", group_thousands(data.person_income)),
            },
            DetailRow {
                label: "Loan Amount",
                value: format!("${}", group_thousands(data.loan_amnt)),
            },
            DetailRow {
                label: "Credit Score",
                value: data.credit_score.to_string(),
            },
            DetailRow {
                label: "Loan Purpose",
                value: data.loan_intent.clone(),
            },
        ];

        Self {
            decision,
            band: classify(result.prediction, result.probability),
            icon: if approved { "✅" } else { "❌" },
            title: if approved { "Loan Approved!" } else { "Loan Rejected" },
            probability_text: format!("Confidence: {}%", percent_label(result.probability)),
            details,
            risk_factors: result.risk_factors.clone(),
            card_class: if approved {
                "result-approved"
            } else {
                "result-rejected"
            },
        }
    }

    pub fn is_approved(&self) -> bool {
        self.decision == Decision::Approved
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::ApplicationSummary;

    fn result(prediction: u8, probability: f64, risks: &[&str]) -> PredictionResult {
        PredictionResult {
            prediction,
            probability,
            application_data: ApplicationSummary {
                person_age: 34.0,
                person_income: 85000.0,
                loan_amnt: 12500.0,
                credit_score: 720,
                loan_intent: "EDUCATION".to_string(),
            },
            risk_factors: risks.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0.0), "0");
        assert_eq!(group_thousands(999.0), "999");
        assert_eq!(group_thousands(1000.0), "1,000");
        assert_eq!(group_thousands(1234567.0), "1,234,567");
        assert_eq!(group_thousands(1234.5), "1,234.5");
        assert_eq!(group_thousands(-2500.0), "-2,500");
        assert_eq!(group_thousands(0.12345), "0.123");
    }

    #[test]
    fn test_slider_labels() {
        assert_eq!(FormField::Age.display(29.6), "30 years");
        assert_eq!(FormField::Income.display(50000.0), "₹50,000");
        assert_eq!(FormField::LoanAmount.display(7500.0), "₹7,500");
        assert_eq!(FormField::EmploymentExperience.display(3.0), "3 years");
        assert_eq!(FormField::CreditScore.display(700.4), "700");
        assert_eq!(FormField::CreditHistoryLength.display(4.0), "4.0 years");
    }

    #[test]
    fn test_approved_view() {
        let view = ResultView::from_result(&result(1, 0.82, &[]));
        assert!(view.is_approved());
        assert_eq!(view.card_class, "result-approved");
        assert_eq!(view.title, "Loan Approved!");
        assert_eq!(view.icon, "✅");
        assert_eq!(view.probability_text, "Confidence: 82.0%");
        assert_eq!(view.band.message(), "High confidence approval");
    }

    #[test]
    fn test_rejected_view_details() {
        let view = ResultView::from_result(&result(0, 0.35, &["Low credit score (< 600)"]));
        assert_eq!(view.card_class, "result-rejected");
        assert_eq!(view.band, ConfidenceBand::ModerateRejection);
        assert_eq!(view.risk_factors, vec!["Low credit score (< 600)".to_string()]);

        let values: Vec<&str> = view.details.iter().map(|d| d.value.as_str()).collect();
        assert_eq!(
            values,
            vec!["34 years", "$85,000", "$12,500", "720", "EDUCATION"]
        );
    }
}
