//! Plug-in conditional entropy over a table of count rows.
//!
//! Each row holds the outcome counts observed under one conditioning value.
//! The estimate is `H(Y | X) = sum_x P(x) * H(Y | X = x)` where
//! `P(x) = n_x / total` and `H(Y | X = x)` uses `c / n_x` for every outcome.

use crate::entropy::shannon_entropy;
use crate::Bits;

/// Sums every count of every row.
pub fn table_total<R: AsRef<[u64]>>(rows: &[R]) -> u64 {
    rows.iter()
        .map(|row| row.as_ref().iter().sum::<u64>())
        .sum()
}

/// Computes the conditional entropy of the outcome given the row, in bits.
///
/// Returns `None` when the table holds no observations at all, since the
/// row probabilities are undefined in that case. Rows with a zero total carry
/// zero weight and are ignored, as are zero counts inside a row.
pub fn conditional_entropy<R: AsRef<[u64]>>(rows: &[R]) -> Option<Bits> {
    let total = table_total(rows);
    if total == 0 {
        return None;
    }
    let total = total as f64;

    let mut entropy = 0.0;
    for row in rows {
        let counts = row.as_ref();
        let row_total: u64 = counts.iter().sum();
        if row_total == 0 {
            continue;
        }
        entropy += row_total as f64 / total * shannon_entropy(counts);
    }

    // Rounding can leave a -0.0 or a value a hair below zero.
    Some(entropy.max(0.0))
}
