//! Fibonacci sequence membership.

/// Number of terms searched past the seed pair.
pub const SEQUENCE_TERMS: usize = 1000;

/// Whether `n` is one of the first [`SEQUENCE_TERMS`] Fibonacci numbers
/// (0, 1, 1, 2, 3, 5, 8, ...).
///
/// Terms grow monotonically after the seed pair, so the search stops at the
/// first term larger than `n`. A term that no longer fits in a `u64` is also
/// larger than any `n`.
pub fn is_in_sequence(n: u64) -> bool {
    let (mut a, mut b) = (0u64, 1u64);
    if n == a || n == b {
        return true;
    }

    for _ in 0..SEQUENCE_TERMS {
        let Some(next) = a.checked_add(b) else {
            return false;
        };
        if next == n {
            return true;
        }
        if next > n {
            return false;
        }
        a = b;
        b = next;
    }

    false
}

/// Iterator over the Fibonacci numbers representable as `u64`, starting at 0.
pub fn sequence() -> impl Iterator<Item = u64> {
    std::iter::successors(Some((0u64, Some(1u64))), |&(a, b)| {
        b.map(|b| (b, a.checked_add(b)))
    })
    .map(|(a, _)| a)
}
