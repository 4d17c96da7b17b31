use num_bigint::BigUint;
use num_traits::{One, ToPrimitive, Zero};

/// Check if `n` is a prime number.
///
/// Uses trial division up to sqrt(n). Suitable for validating
/// factor tables at startup, not for high-performance primality testing.
pub const fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n == 2 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }

    // i * i would overflow u64 once i passes 2^32; compare via division
    let mut i = 3;
    while i <= n / i {
        if n % i == 0 {
            return false;
        }
        i += 2;
    }
    true
}

/// Compute `n!` as a [`BigUint`].
///
/// This is the order of the symmetric group S_n, handy as a yardstick when
/// comparing group orders.
///
/// # Example
///
/// ```
/// use monstrum::factorial;
/// use num_bigint::BigUint;
///
/// assert_eq!(factorial(5), BigUint::from(120u32));
/// assert_eq!(factorial(0), BigUint::from(1u32));
/// ```
pub fn factorial(n: u32) -> BigUint {
    let mut acc = BigUint::one();
    for k in 2..=u64::from(n) {
        acc *= k;
    }
    acc
}

/// Render a big integer with thousands separators, e.g. `808,017,424,…`.
pub fn grouped_decimal(n: &BigUint) -> String {
    let digits = n.to_string();
    let mut head = digits.len() % 3;
    if head == 0 {
        head = digits.len().min(3);
    }
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    out.push_str(&digits[..head]);
    let mut rest = &digits[head..];
    while !rest.is_empty() {
        out.push(',');
        out.push_str(&rest[..3]);
        rest = &rest[3..];
    }
    out
}

/// Render a big integer in scientific notation, e.g. `8.08 × 10^53`.
///
/// The mantissa keeps the leading three digits exactly as written
/// (truncated, not rounded), so the output never depends on float
/// conversion of a value that does not fit in a float.
pub fn scientific_notation(n: &BigUint) -> String {
    let digits = n.to_string();
    if digits == "0" {
        return "0".to_string();
    }
    let exponent = digits.len() - 1;
    let head = &digits[..1];
    let frac = &digits[1..digits.len().min(3)];
    format!("{}.{:0<2} × 10^{}", head, frac, exponent)
}

/// Approximate the ratio `numerator / denominator` as an `f64`.
///
/// Returns `None` if the denominator is zero or either value converts to a
/// non-finite float. Good enough for "how many times larger" comparisons;
/// never use it where exactness matters.
pub fn order_ratio(numerator: &BigUint, denominator: &BigUint) -> Option<f64> {
    if denominator.is_zero() {
        return None;
    }
    let n = numerator.to_f64().filter(|v| v.is_finite())?;
    let d = denominator.to_f64().filter(|v| v.is_finite())?;
    Some(n / d)
}
