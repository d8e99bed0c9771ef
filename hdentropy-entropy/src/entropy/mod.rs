// hdentropy-entropy/src/entropy/mod.rs
use libm::log2;

use crate::Bits;

/// Calculates the Shannon entropy of a discrete distribution given as raw counts.
///
/// Probabilities are the plug-in estimates `count / total`. Zero counts are
/// skipped, so they never reach `log2`. Returns `0.0` for an empty or all-zero
/// distribution.
pub fn shannon_entropy(counts: &[u64]) -> Bits {
    let total: u64 = counts.iter().sum();
    if total == 0 {
        return 0.0;
    }

    let total = total as f64;
    let mut entropy = 0.0;

    for &count in counts {
        if count > 0 {
            let p = count as f64 / total;
            entropy -= p * log2(p);
        }
    }

    entropy
}
