//! Simplified AHP weight derivation from a pairwise comparison matrix.
//!
//! This is the normalize-and-average step only: divide each column of the
//! comparison matrix by its column sum, then average each row. It is not an
//! eigenvector-based AHP solver and performs no consistency-ratio check; the
//! weights it yields are a first-order approximation that matches the
//! principal eigenvector exactly only for perfectly consistent matrices.

use anyhow::{bail, Result};

/// A criterion and its derived weight. Weights across one call sum to 1.0.
#[derive(Debug, Clone, PartialEq)]
pub struct CriterionWeight {
    pub criterion: String,
    pub weight: f64,
}

/// Derive weights for `criteria` from a square pairwise comparison matrix.
///
/// `matrix[i][j]` is how much more important criterion `i` is than `j` on
/// the usual 1-9 comparison scale; entries must be positive. Errors on a
/// non-square matrix, a dimension mismatch with `criteria`, or non-positive
/// entries.
pub fn ahp_weights(criteria: &[&str], matrix: &[Vec<f64>]) -> Result<Vec<CriterionWeight>> {
    let n = criteria.len();
    if n == 0 {
        bail!("criteria list is empty");
    }
    if matrix.len() != n {
        bail!(
            "comparison matrix has {} rows for {} criteria",
            matrix.len(),
            n
        );
    }
    for (i, row) in matrix.iter().enumerate() {
        if row.len() != n {
            bail!("comparison matrix row {} has {} entries, expected {}", i, row.len(), n);
        }
        for &v in row {
            if !v.is_finite() || v <= 0.0 {
                bail!("comparison values must be positive, got {}", v);
            }
        }
    }

    let mut column_sums = vec![0.0; n];
    for row in matrix {
        for (j, &v) in row.iter().enumerate() {
            column_sums[j] += v;
        }
    }

    // Row means of the column-normalized matrix.
    Ok(criteria
        .iter()
        .enumerate()
        .map(|(i, criterion)| {
            let mean = matrix[i]
                .iter()
                .zip(&column_sums)
                .map(|(v, sum)| v / sum)
                .sum::<f64>()
                / n as f64;
            CriterionWeight {
                criterion: criterion.to_string(),
                weight: mean,
            }
        })
        .collect())
}
