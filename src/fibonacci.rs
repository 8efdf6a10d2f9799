use std::fmt::Display;

use tracing::trace;

use crate::constants::MAX_INDEX;

/// Computes the `n`-th Fibonacci number, keeping only the two preceding values around.
///
/// Indices `n <= 1` are returned as they are, which yields `F(0) = 0` and `F(1) = 1`.
/// Negative indices are not rejected and come back unchanged as well.
///
/// Addition wraps on overflow, i.e. every index above [`MAX_INDEX`] produces a wrapped value.
/// Use [`checked_compute`] to detect this.
///
/// ```
/// use fibonacci::fibonacci::compute;
/// assert_eq!(compute(10), 55);
/// ```
pub fn compute(n: i64) -> i64 {
    if n <= 1 {
        return n;
    }

    let (mut a, mut b) = (0i64, 1i64);
    for _ in 2..=n {
        (a, b) = (b, a.wrapping_add(b));
    }

    trace!("fib({}) = {}", n, b);
    b
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FibonacciError {
    NegativeIndex(i64),
    Overflow(i64),
}

impl Display for FibonacciError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NegativeIndex(n) => write!(f, "index {} is negative", n),
            Self::Overflow(n) => write!(
                f,
                "fib({}) does not fit into 64 bits (largest index is {})",
                n, MAX_INDEX
            ),
        }
    }
}

impl std::error::Error for FibonacciError {}

/// Like [`compute`], but rejects negative indices and reports overflow instead of wrapping.
pub fn checked_compute(n: i64) -> Result<i64, FibonacciError> {
    if n < 0 {
        return Err(FibonacciError::NegativeIndex(n));
    }
    if n <= 1 {
        return Ok(n);
    }

    let (mut a, mut b) = (0i64, 1i64);
    for _ in 2..=n {
        let next = a.checked_add(b).ok_or(FibonacciError::Overflow(n))?;
        (a, b) = (b, next);
    }

    Ok(b)
}

/// Iterator over `F(0), F(1), ...`
///
/// Ends after `F(MAX_INDEX)`, the last value representable as `i64`.
#[derive(Debug, Clone)]
pub struct Fibonacci {
    current: Option<i64>,
    following: Option<i64>,
}

impl Fibonacci {
    pub fn new() -> Self {
        Self {
            current: Some(0),
            following: Some(1),
        }
    }
}

impl Default for Fibonacci {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for Fibonacci {
    type Item = i64;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current.take()?;
        (self.current, self.following) = (
            self.following,
            self.following
                .and_then(|following| following.checked_add(current)),
        );
        Some(current)
    }
}

#[cfg(test)]
mod test {
    use test_case::test_case;

    use super::*;

    fn naive(n: i64) -> i64 {
        if n <= 1 {
            n
        } else {
            naive(n - 1) + naive(n - 2)
        }
    }

    #[test_case(0, 0)]
    #[test_case(1, 1)]
    #[test_case(2, 1)]
    #[test_case(3, 2)]
    #[test_case(10, 55)]
    #[test_case(20, 6765)]
    #[test_case(92, 7540113804746346429; "largest_representable")]
    fn test_compute(n: i64, expected: i64) {
        assert_eq!(compute(n), expected);
        assert_eq!(checked_compute(n), Ok(expected));
    }

    #[test]
    fn test_recurrence() {
        for n in 2..=60 {
            assert_eq!(compute(n), compute(n - 1) + compute(n - 2), "n = {}", n);
        }
    }

    #[test]
    fn test_matches_naive() {
        for n in 0..=25 {
            assert_eq!(compute(n), naive(n), "n = {}", n);
        }
    }

    #[test_case(-1)]
    #[test_case(-10)]
    #[test_case(i64::MIN)]
    fn test_negative_passthrough(n: i64) {
        assert_eq!(compute(n), n);
        assert_eq!(checked_compute(n), Err(FibonacciError::NegativeIndex(n)));
    }

    #[test]
    fn test_overflow_wraps() {
        assert_eq!(compute(93), -6246583658587674878);
        assert_eq!(compute(93), compute(92).wrapping_add(compute(91)));
        assert_eq!(checked_compute(93), Err(FibonacciError::Overflow(93)));
        assert_eq!(checked_compute(1000), Err(FibonacciError::Overflow(1000)));
    }

    #[test]
    fn test_iterator() {
        let sequence: Vec<i64> = Fibonacci::new().collect();

        assert_eq!(sequence.len() as i64, MAX_INDEX + 1);
        assert_eq!(&sequence[..8], &[0, 1, 1, 2, 3, 5, 8, 13]);
        for (n, value) in sequence.into_iter().enumerate() {
            assert_eq!(compute(n as i64), value);
        }
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            FibonacciError::NegativeIndex(-3).to_string(),
            "index -3 is negative"
        );
        assert_eq!(
            FibonacciError::Overflow(100).to_string(),
            "fib(100) does not fit into 64 bits (largest index is 92)"
        );
    }
}
