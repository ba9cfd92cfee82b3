//! Chance-corrected agreement between two partitions of the same records.

use herd_core::errors::{HerdResult, InputError};

fn pairs(count: u64) -> u128 {
    let c = count as u128;
    c * c.saturating_sub(1) / 2
}

/// Adjusted Rand Index of two label vectors over the same records.
///
/// 1.0 for identical partitions (up to relabelling), about 0.0 for
/// agreement at chance level. Partitions that are both all-singletons or
/// both a single group score 1.0, as does any input of fewer than two records.
pub fn adjusted_rand_index(a: &[usize], b: &[usize]) -> HerdResult<f64> {
    if a.len() != b.len() {
        return Err(InputError::AssignmentLengthMismatch {
            expected: a.len(),
            got: b.len(),
        }
        .into());
    }
    let n = a.len() as u64;
    if n < 2 {
        return Ok(1.0);
    }

    let rows = a.iter().max().map_or(0, |m| m + 1);
    let cols = b.iter().max().map_or(0, |m| m + 1);
    let mut table = vec![0u64; rows * cols];
    let mut row_sums = vec![0u64; rows];
    let mut col_sums = vec![0u64; cols];
    for (&x, &y) in a.iter().zip(b) {
        table[x * cols + y] += 1;
        row_sums[x] += 1;
        col_sums[y] += 1;
    }

    let index: u128 = table.iter().map(|&c| pairs(c)).sum();
    let sum_a: u128 = row_sums.iter().map(|&c| pairs(c)).sum();
    let sum_b: u128 = col_sums.iter().map(|&c| pairs(c)).sum();
    let total = pairs(n);

    // max == expected  <=>  (sum_a + sum_b) * total == 2 * sum_a * sum_b
    if (sum_a + sum_b) * total == 2 * sum_a * sum_b {
        return Ok(1.0);
    }

    let expected = sum_a as f64 * sum_b as f64 / total as f64;
    let max = (sum_a + sum_b) as f64 / 2.0;
    Ok((index as f64 - expected) / (max - expected))
}
