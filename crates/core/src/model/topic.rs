use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown CFA topic: {0}")]
pub struct TopicError(pub String);

/// One of the ten CFA curriculum subject areas.
///
/// Variant order is the canonical enumeration order used for listings and
/// tie-breaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Topic {
    #[serde(rename = "Ethics")]
    Ethics,
    #[serde(rename = "Quantitative Methods")]
    QuantitativeMethods,
    #[serde(rename = "Economics")]
    Economics,
    #[serde(rename = "Financial Reporting and Analysis")]
    FinancialReportingAndAnalysis,
    #[serde(rename = "Corporate Finance")]
    CorporateFinance,
    #[serde(rename = "Equity Investments")]
    EquityInvestments,
    #[serde(rename = "Fixed Income")]
    FixedIncome,
    #[serde(rename = "Derivatives")]
    Derivatives,
    #[serde(rename = "Alternative Investments")]
    AlternativeInvestments,
    #[serde(rename = "Portfolio Management")]
    PortfolioManagement,
}

impl Topic {
    pub const ALL: [Topic; 10] = [
        Topic::Ethics,
        Topic::QuantitativeMethods,
        Topic::Economics,
        Topic::FinancialReportingAndAnalysis,
        Topic::CorporateFinance,
        Topic::EquityInvestments,
        Topic::FixedIncome,
        Topic::Derivatives,
        Topic::AlternativeInvestments,
        Topic::PortfolioManagement,
    ];

    /// Display name, identical to the key used in the persisted profile.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Topic::Ethics => "Ethics",
            Topic::QuantitativeMethods => "Quantitative Methods",
            Topic::Economics => "Economics",
            Topic::FinancialReportingAndAnalysis => "Financial Reporting and Analysis",
            Topic::CorporateFinance => "Corporate Finance",
            Topic::EquityInvestments => "Equity Investments",
            Topic::FixedIncome => "Fixed Income",
            Topic::Derivatives => "Derivatives",
            Topic::AlternativeInvestments => "Alternative Investments",
            Topic::PortfolioManagement => "Portfolio Management",
        }
    }

    /// Looks a topic up by name, ignoring ASCII case and surrounding whitespace.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|topic| topic.name().eq_ignore_ascii_case(name))
    }

    /// Comma-separated list of every topic name, for usage messages.
    #[must_use]
    pub fn names() -> String {
        Self::ALL.map(Topic::name).join(", ")
    }
}

impl FromStr for Topic {
    type Err = TopicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| TopicError(s.to_owned()))
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_ignores_case_and_padding() {
        assert_eq!(Topic::from_name("ethics"), Some(Topic::Ethics));
        assert_eq!(
            Topic::from_name("  fixed income "),
            Some(Topic::FixedIncome)
        );
        assert_eq!(Topic::from_name("Astrology"), None);
    }

    #[test]
    fn serde_names_match_display_names() {
        for topic in Topic::ALL {
            let json = serde_json::to_string(&topic).unwrap();
            assert_eq!(json, format!("\"{}\"", topic.name()));
        }
    }

    #[test]
    fn ordering_follows_enumeration() {
        let mut shuffled = vec![Topic::Derivatives, Topic::Ethics, Topic::FixedIncome];
        shuffled.sort();
        assert_eq!(
            shuffled,
            vec![Topic::Ethics, Topic::FixedIncome, Topic::Derivatives]
        );
    }
}
