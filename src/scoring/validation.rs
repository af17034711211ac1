use super::domain::{DomainConfig, WEIGHT_TOLERANCE};

/// Validate a set of domain configurations at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_domains(domains: &[DomainConfig]) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    for (i, domain) in domains.iter().enumerate() {
        if domain.name.trim().is_empty() {
            errors.push(format!("domains[{}].name: must not be empty", i));
        }

        if domains[..i].iter().any(|d| d.name == domain.name) {
            errors.push(format!(
                "domains[{}].name: duplicate domain '{}'",
                i, domain.name
            ));
        }

        if domain.indicators.is_empty() {
            errors.push(format!(
                "domains[{}] ('{}'): must define at least one indicator",
                i, domain.name
            ));
            continue;
        }

        for (j, iw) in domain.indicators.iter().enumerate() {
            if iw.indicator.trim().is_empty() {
                errors.push(format!(
                    "domains[{}].indicators[{}].indicator: must not be empty",
                    i, j
                ));
            }
            if !iw.weight.is_finite() {
                errors.push(format!(
                    "domains[{}].indicators[{}].weight: must be finite, got {}",
                    i, j, iw.weight
                ));
            } else if iw.weight < 0.0 {
                errors.push(format!(
                    "domains[{}].indicators[{}].weight: must be non-negative, got {}",
                    i, j, iw.weight
                ));
            }
            if domain.indicators[..j]
                .iter()
                .any(|other| other.indicator == iw.indicator)
            {
                errors.push(format!(
                    "domains[{}].indicators[{}]: duplicate indicator '{}'",
                    i, j, iw.indicator
                ));
            }
        }

        let sum = domain.weight_sum();
        if sum.is_finite() && (sum - 1.0).abs() > WEIGHT_TOLERANCE {
            errors.push(format!(
                "domains[{}] ('{}'): weights sum to {} instead of 1.0",
                i, domain.name, sum
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
