use serde::Serialize;

use super::domain::{DomainConfig, Polarity, WEIGHT_TOLERANCE};
use super::error::ScoreError;
use super::normalize;
use crate::table::IndicatorTable;

/// How one indicator contributed to a district's score.
#[derive(Debug, Clone)]
pub struct IndicatorContribution {
    pub indicator: String,
    pub weight: f64,
    /// Normalized value after polarity inversion, in [0, 1].
    pub normalized: f64,
    /// `weight * normalized`.
    pub weighted: f64,
}

/// One district's composite score for a domain.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredDistrict {
    pub code: u8,
    pub name: String,
    /// 0-100, two decimals.
    pub score: f64,
    /// Per-indicator breakdown for display; not part of the tabular output.
    #[serde(skip)]
    pub breakdown: Vec<IndicatorContribution>,
}

/// The scored table for one domain: district identity plus the score column,
/// one row per input district, in input row order.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreTable {
    pub domain: String,
    /// Name of the score column, e.g. "nota_economia".
    pub score_column: String,
    pub rows: Vec<ScoredDistrict>,
}

/// Compute a domain's composite 0-100 score for every district in `table`.
///
/// Each indicator column referenced by `config` is min-max normalized across
/// all districts present, NEGATIVE-polarity indicators are inverted so higher
/// is always better, and the weighted sum is rescaled to 0-100 with
/// two-decimal rounding. The input table is only borrowed; normalization
/// happens in fresh buffers. Deterministic for identical inputs.
///
/// Missing values are not imputed here: any empty cell in a required column
/// is an error, the upstream preparation stage must resolve gaps first.
pub fn compute_domain_score(
    table: &IndicatorTable,
    config: &DomainConfig,
) -> Result<ScoreTable, ScoreError> {
    let sum = config.weight_sum();
    if (sum - 1.0).abs() > WEIGHT_TOLERANCE {
        return Err(ScoreError::InvalidWeights {
            domain: config.name.clone(),
            sum,
        });
    }

    // One normalized buffer per configured indicator, parallel to the rows.
    let mut normalized_columns: Vec<Vec<f64>> = Vec::with_capacity(config.indicators.len());
    for iw in &config.indicators {
        let column = table
            .column(&iw.indicator)
            .ok_or_else(|| ScoreError::MissingIndicator {
                domain: config.name.clone(),
                indicator: iw.indicator.clone(),
            })?;

        let mut raw = Vec::with_capacity(column.len());
        for (row, cell) in column.iter().enumerate() {
            match cell {
                Some(v) => raw.push(*v),
                None => {
                    return Err(ScoreError::MissingValue {
                        indicator: iw.indicator.clone(),
                        district_code: table.district_rows()[row].0,
                    })
                }
            }
        }

        let mut normed = normalize::min_max(&raw);
        if iw.polarity == Polarity::Negative {
            normalize::invert(&mut normed);
        }
        normalized_columns.push(normed);
    }

    let rows = table
        .district_rows()
        .iter()
        .enumerate()
        .map(|(row, (code, name))| {
            let mut acc = 0.0;
            let mut breakdown = Vec::with_capacity(config.indicators.len());
            for (iw, column) in config.indicators.iter().zip(&normalized_columns) {
                let weighted = iw.weight * column[row];
                acc += weighted;
                breakdown.push(IndicatorContribution {
                    indicator: iw.indicator.clone(),
                    weight: iw.weight,
                    normalized: column[row],
                    weighted,
                });
            }
            ScoredDistrict {
                code: *code,
                name: name.clone(),
                score: round2(acc * 100.0),
                breakdown,
            }
        })
        .collect();

    Ok(ScoreTable {
        domain: config.name.clone(),
        score_column: config.score_column(),
        rows,
    })
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::domain::IndicatorWeight;
    use crate::table::IndicatorTable;

    fn single_indicator_config(polarity: Polarity) -> DomainConfig {
        DomainConfig {
            name: "test".to_string(),
            indicators: vec![IndicatorWeight {
                indicator: "renta_media".to_string(),
                weight: 1.0,
                polarity,
            }],
        }
    }

    fn renta_table() -> IndicatorTable {
        let mut t = IndicatorTable::new();
        t.push_district(1, "Centro").unwrap();
        t.push_district(2, "Arganzuela").unwrap();
        t.push_district(3, "Retiro").unwrap();
        t.insert_column(
            "renta_media",
            vec![Some(10000.0), Some(20000.0), Some(30000.0)],
        )
        .unwrap();
        t
    }

    #[test]
    fn test_single_positive_indicator() {
        let result =
            compute_domain_score(&renta_table(), &single_indicator_config(Polarity::Positive))
                .unwrap();
        let scores: Vec<f64> = result.rows.iter().map(|r| r.score).collect();
        assert_eq!(scores, vec![0.0, 50.0, 100.0]);
    }

    #[test]
    fn test_single_negative_indicator() {
        let result =
            compute_domain_score(&renta_table(), &single_indicator_config(Polarity::Negative))
                .unwrap();
        let scores: Vec<f64> = result.rows.iter().map(|r| r.score).collect();
        assert_eq!(scores, vec![100.0, 50.0, 0.0]);
    }

    #[test]
    fn test_scores_stay_in_bounds() {
        let mut t = renta_table();
        t.insert_column("tasa_paro", vec![Some(21.4), Some(9.3), Some(4.8)])
            .unwrap();
        let config = DomainConfig {
            name: "economia".to_string(),
            indicators: vec![
                IndicatorWeight {
                    indicator: "renta_media".to_string(),
                    weight: 0.6,
                    polarity: Polarity::Positive,
                },
                IndicatorWeight {
                    indicator: "tasa_paro".to_string(),
                    weight: 0.4,
                    polarity: Polarity::Negative,
                },
            ],
        };
        let result = compute_domain_score(&t, &config).unwrap();
        for row in &result.rows {
            assert!((0.0..=100.0).contains(&row.score), "score {}", row.score);
        }
    }

    #[test]
    fn test_row_order_matches_input() {
        let result =
            compute_domain_score(&renta_table(), &single_indicator_config(Polarity::Positive))
                .unwrap();
        let codes: Vec<u8> = result.rows.iter().map(|r| r.code).collect();
        assert_eq!(codes, vec![1, 2, 3]);
        assert_eq!(result.rows[0].name, "Centro");
    }

    #[test]
    fn test_deterministic_across_calls() {
        let t = renta_table();
        let config = single_indicator_config(Polarity::Positive);
        let a = compute_domain_score(&t, &config).unwrap();
        let b = compute_domain_score(&t, &config).unwrap();
        for (x, y) in a.rows.iter().zip(&b.rows) {
            assert_eq!(x.score, y.score);
        }
    }

    #[test]
    fn test_zero_variance_column_is_neutral() {
        let mut t = IndicatorTable::new();
        t.push_district(1, "Centro").unwrap();
        t.push_district(2, "Arganzuela").unwrap();
        t.insert_column("esperanza_vida", vec![Some(84.0), Some(84.0)])
            .unwrap();
        let config = DomainConfig {
            name: "salud".to_string(),
            indicators: vec![IndicatorWeight {
                indicator: "esperanza_vida".to_string(),
                weight: 1.0,
                polarity: Polarity::Positive,
            }],
        };
        let result = compute_domain_score(&t, &config).unwrap();
        assert_eq!(result.rows[0].score, 50.0);
        assert_eq!(result.rows[1].score, 50.0);
    }

    #[test]
    fn test_missing_indicator_column() {
        let config = DomainConfig {
            name: "economia".to_string(),
            indicators: vec![IndicatorWeight {
                indicator: "tasa_paro".to_string(),
                weight: 1.0,
                polarity: Polarity::Negative,
            }],
        };
        let err = compute_domain_score(&renta_table(), &config).unwrap_err();
        assert_eq!(
            err,
            ScoreError::MissingIndicator {
                domain: "economia".to_string(),
                indicator: "tasa_paro".to_string(),
            }
        );
    }

    #[test]
    fn test_invalid_weight_sum() {
        let config = DomainConfig {
            name: "economia".to_string(),
            indicators: vec![IndicatorWeight {
                indicator: "renta_media".to_string(),
                weight: 0.9,
                polarity: Polarity::Positive,
            }],
        };
        let err = compute_domain_score(&renta_table(), &config).unwrap_err();
        assert!(matches!(err, ScoreError::InvalidWeights { .. }));
    }

    #[test]
    fn test_missing_value_names_the_district() {
        let mut t = IndicatorTable::new();
        t.push_district(1, "Centro").unwrap();
        t.push_district(13, "Puente de Vallecas").unwrap();
        t.insert_column("renta_media", vec![Some(16500.0), None])
            .unwrap();
        let err =
            compute_domain_score(&t, &single_indicator_config(Polarity::Positive)).unwrap_err();
        assert_eq!(
            err,
            ScoreError::MissingValue {
                indicator: "renta_media".to_string(),
                district_code: 13,
            }
        );
    }

    #[test]
    fn test_positive_monotonicity() {
        // Raising a POSITIVE indicator for one district must not lower its score.
        let t = renta_table();
        let config = single_indicator_config(Polarity::Positive);
        let before = compute_domain_score(&t, &config).unwrap().rows[1].score;

        let mut raised = IndicatorTable::new();
        raised.push_district(1, "Centro").unwrap();
        raised.push_district(2, "Arganzuela").unwrap();
        raised.push_district(3, "Retiro").unwrap();
        raised
            .insert_column(
                "renta_media",
                vec![Some(10000.0), Some(25000.0), Some(30000.0)],
            )
            .unwrap();
        let after = compute_domain_score(&raised, &config).unwrap().rows[1].score;
        assert!(after >= before, "{} < {}", after, before);
    }

    #[test]
    fn test_negative_monotonicity() {
        let t = renta_table();
        let config = single_indicator_config(Polarity::Negative);
        let before = compute_domain_score(&t, &config).unwrap().rows[1].score;

        let mut raised = IndicatorTable::new();
        raised.push_district(1, "Centro").unwrap();
        raised.push_district(2, "Arganzuela").unwrap();
        raised.push_district(3, "Retiro").unwrap();
        raised
            .insert_column(
                "renta_media",
                vec![Some(10000.0), Some(25000.0), Some(30000.0)],
            )
            .unwrap();
        let after = compute_domain_score(&raised, &config).unwrap().rows[1].score;
        assert!(after <= before, "{} > {}", after, before);
    }

    #[test]
    fn test_breakdown_sums_to_score() {
        let mut t = renta_table();
        t.insert_column("tasa_paro", vec![Some(21.4), Some(9.3), Some(4.8)])
            .unwrap();
        let config = DomainConfig {
            name: "economia".to_string(),
            indicators: vec![
                IndicatorWeight {
                    indicator: "renta_media".to_string(),
                    weight: 0.7,
                    polarity: Polarity::Positive,
                },
                IndicatorWeight {
                    indicator: "tasa_paro".to_string(),
                    weight: 0.3,
                    polarity: Polarity::Negative,
                },
            ],
        };
        let result = compute_domain_score(&t, &config).unwrap();
        for row in &result.rows {
            let total: f64 = row.breakdown.iter().map(|c| c.weighted).sum();
            assert!((total * 100.0 - row.score).abs() < 0.01);
        }
    }

    #[test]
    fn test_rounding_to_two_decimals() {
        let mut t = IndicatorTable::new();
        t.push_district(1, "Centro").unwrap();
        t.push_district(2, "Arganzuela").unwrap();
        t.push_district(3, "Retiro").unwrap();
        t.insert_column("renta_media", vec![Some(0.0), Some(1.0), Some(3.0)])
            .unwrap();
        let result =
            compute_domain_score(&t, &single_indicator_config(Polarity::Positive)).unwrap();
        // 1/3 normalized -> 33.333... -> 33.33
        assert_eq!(result.rows[1].score, 33.33);
    }

    #[test]
    fn test_builtin_economia_on_full_columns() {
        let mut t = IndicatorTable::new();
        t.push_district(4, "Salamanca").unwrap();
        t.push_district(12, "Usera").unwrap();
        for (name, salamanca, usera) in [
            ("renta_media", 28900.0, 10700.0),
            ("tasa_paro", 5.1, 14.8),
            ("tasa_paro_larga_duracion", 1.9, 5.6),
            ("tasa_paro_joven", 3.2, 9.9),
            ("pension_media", 1650.0, 900.0),
            ("tasa_comercios", 31.0, 12.0),
        ] {
            t.insert_column(name, vec![Some(salamanca), Some(usera)])
                .unwrap();
        }
        let result = compute_domain_score(&t, &DomainConfig::economia()).unwrap();
        // Salamanca is best on every indicator (unemployment columns are
        // inverted), Usera worst, so with two districts the notas pin to the
        // scale ends.
        assert_eq!(result.rows[0].score, 100.0);
        assert_eq!(result.rows[1].score, 0.0);
    }
}
