/// Integer math primitives used by the builtin functions.
///
/// The function table only owns the contract of each builtin: its arity and
/// the domain of every argument. The arithmetic itself comes from an
/// implementation of this trait, so it can be swapped out (for instance for
/// a student's own versions) without touching the parser or the evaluator.
///
/// Arguments are already validated against the builtin's domain when a
/// method is called. Methods that can leave the `i64` range return `None`
/// instead of wrapping.
pub trait MathPrimitives {
    /// Absolute value.
    fn abs(&self, x: i64) -> Option<i64>;
    /// Integer square root, rounded down. `x` is non-negative.
    fn sqrt(&self, x: i64) -> Option<i64>;
    /// `base` raised to a non-negative `exponent`.
    fn pow(&self, base: i64, exponent: i64) -> Option<i64>;
    /// `1 + 2 + ... + n` for a non-negative `n`.
    fn sum_to(&self, n: i64) -> Option<i64>;
    /// Greatest common factor of two non-negative numbers.
    fn gcf(&self, a: i64, b: i64) -> Option<i64>;
    /// Whether `n` (greater than 1) is prime.
    fn is_prime(&self, n: i64) -> bool;
    /// Hypotenuse of a right triangle with positive legs, rounded down.
    fn hypot(&self, a: i64, b: i64) -> Option<i64>;
    /// The low 8 bits of a non-negative `n`, written out in binary digits
    /// and read back as a decimal number (`5` becomes `101`).
    fn to_binary(&self, n: i64) -> Option<i64>;
}

/// The stock implementation of [`MathPrimitives`].
///
/// ## Example
/// ```
/// use krunch::math::{MathPrimitives, StandardMath};
///
/// assert_eq!(StandardMath.sqrt(17), Some(4));
/// assert_eq!(StandardMath.to_binary(5), Some(101));
/// assert_eq!(StandardMath.pow(2, 63), None);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardMath;

impl MathPrimitives for StandardMath {
    fn abs(&self, x: i64) -> Option<i64> {
        x.checked_abs()
    }

    fn sqrt(&self, x: i64) -> Option<i64> {
        (x >= 0).then(|| x.isqrt())
    }

    fn pow(&self, base: i64, exponent: i64) -> Option<i64> {
        if exponent < 0 {
            return None;
        }

        let mut result: i64 = 1;
        let mut base = base;
        let mut exponent = exponent;
        while exponent > 0 {
            if exponent & 1 == 1 {
                result = result.checked_mul(base)?;
            }
            exponent >>= 1;
            if exponent > 0 {
                base = base.checked_mul(base)?;
            }
        }
        Some(result)
    }

    fn sum_to(&self, n: i64) -> Option<i64> {
        if n < 0 {
            return None;
        }
        n.checked_mul(n.checked_add(1)?).map(|product| product / 2)
    }

    fn gcf(&self, a: i64, b: i64) -> Option<i64> {
        if a < 0 || b < 0 {
            return None;
        }

        let (mut a, mut b) = (a, b);
        while b != 0 {
            (a, b) = (b, a % b);
        }
        Some(a)
    }

    fn is_prime(&self, n: i64) -> bool {
        if n < 2 {
            return false;
        }

        let mut divisor: i64 = 2;
        while divisor <= n / divisor {
            if n % divisor == 0 {
                return false;
            }
            divisor += 1;
        }
        true
    }

    fn hypot(&self, a: i64, b: i64) -> Option<i64> {
        let squares = a.checked_mul(a)?.checked_add(b.checked_mul(b)?)?;
        self.sqrt(squares)
    }

    fn to_binary(&self, n: i64) -> Option<i64> {
        if n < 0 {
            return None;
        }

        let low_byte = n & 0xFF;
        Some((0..8).rev()
                   .fold(0, |digits, bit| digits * 10 + ((low_byte >> bit) & 1)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sqrt_rounds_down() {
        assert_eq!(StandardMath.sqrt(0), Some(0));
        assert_eq!(StandardMath.sqrt(15), Some(3));
        assert_eq!(StandardMath.sqrt(16), Some(4));
        assert_eq!(StandardMath.sqrt(-4), None);
    }

    #[test]
    fn pow_handles_edges_and_overflow() {
        assert_eq!(StandardMath.pow(2, 10), Some(1024));
        assert_eq!(StandardMath.pow(7, 0), Some(1));
        assert_eq!(StandardMath.pow(0, 0), Some(1));
        assert_eq!(StandardMath.pow(1, i64::MAX), Some(1));
        assert_eq!(StandardMath.pow(-3, 3), Some(-27));
        assert_eq!(StandardMath.pow(2, 62), Some(1 << 62));
        assert_eq!(StandardMath.pow(10, 19), None);
    }

    #[test]
    fn sum_to_uses_closed_form() {
        assert_eq!(StandardMath.sum_to(0), Some(0));
        assert_eq!(StandardMath.sum_to(4), Some(10));
        assert_eq!(StandardMath.sum_to(100), Some(5050));
        assert_eq!(StandardMath.sum_to(i64::MAX), None);
    }

    #[test]
    fn gcf_of_zero() {
        assert_eq!(StandardMath.gcf(12, 18), Some(6));
        assert_eq!(StandardMath.gcf(0, 9), Some(9));
        assert_eq!(StandardMath.gcf(0, 0), Some(0));
    }

    #[test]
    fn primes() {
        let primes: Vec<i64> = (2..30).filter(|n| StandardMath.is_prime(*n)).collect();
        assert_eq!(primes, vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
        assert!(StandardMath.is_prime(2_147_483_647));
        assert!(!StandardMath.is_prime(1));
    }

    #[test]
    fn hypot_rounds_down() {
        assert_eq!(StandardMath.hypot(3, 4), Some(5));
        assert_eq!(StandardMath.hypot(1, 1), Some(1));
        assert_eq!(StandardMath.hypot(i64::MAX, 1), None);
    }

    #[test]
    fn to_binary_keeps_low_byte() {
        assert_eq!(StandardMath.to_binary(0), Some(0));
        assert_eq!(StandardMath.to_binary(5), Some(101));
        assert_eq!(StandardMath.to_binary(255), Some(1111_1111));
        assert_eq!(StandardMath.to_binary(256), Some(0));
        assert_eq!(StandardMath.to_binary(258), Some(10));
    }
}
