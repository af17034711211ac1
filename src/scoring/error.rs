use std::fmt;

/// Scoring failures. All are caller-side problems (bad config or incomplete
/// data), reported synchronously and never retried.
#[derive(Debug, Clone, PartialEq)]
pub enum ScoreError {
    /// The domain config references an indicator the table has no column for.
    MissingIndicator { domain: String, indicator: String },
    /// The domain's weights do not sum to 1.0 within tolerance.
    InvalidWeights { domain: String, sum: f64 },
    /// A required indicator column has a missing cell for a district.
    MissingValue {
        indicator: String,
        district_code: u8,
    },
}

impl fmt::Display for ScoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoreError::MissingIndicator { domain, indicator } => write!(
                f,
                "domain '{}': indicator '{}' is not a column of the table",
                domain, indicator
            ),
            ScoreError::InvalidWeights { domain, sum } => write!(
                f,
                "domain '{}': weights sum to {} instead of 1.0",
                domain, sum
            ),
            ScoreError::MissingValue {
                indicator,
                district_code,
            } => write!(
                f,
                "indicator '{}' has no value for district {}",
                indicator, district_code
            ),
        }
    }
}

impl std::error::Error for ScoreError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_the_offender() {
        let e = ScoreError::MissingIndicator {
            domain: "economia".to_string(),
            indicator: "tasa_paro".to_string(),
        };
        let msg = e.to_string();
        assert!(msg.contains("economia"));
        assert!(msg.contains("tasa_paro"));

        let e = ScoreError::MissingValue {
            indicator: "renta_media".to_string(),
            district_code: 13,
        };
        assert!(e.to_string().contains("district 13"));
    }
}
