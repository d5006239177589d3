/// Floored division with remainder.
///
/// Returns `(quotient, remainder)` where the quotient is rounded toward
/// negative infinity and the remainder has the sign of the divisor, so that
/// `quotient * divisor + remainder == dividend` up to rounding.
///
/// The divisor must be non-zero; callers report division by zero themselves.
///
/// ## Example
/// ```
/// use stackwalk::util::num::floor_divmod;
///
/// assert_eq!(floor_divmod(7.0, 2.0), (3.0, 1.0));
/// assert_eq!(floor_divmod(-7.0, 2.0), (-4.0, 1.0));
/// assert_eq!(floor_divmod(7.0, -2.0), (-4.0, -1.0));
/// ```
#[must_use]
pub fn floor_divmod(dividend: f64, divisor: f64) -> (f64, f64) {
    let mut rem = dividend % divisor;
    let mut div = (dividend - rem) / divisor;

    if rem == 0.0 {
        rem = 0.0_f64.copysign(divisor);
    } else if (divisor < 0.0) != (rem < 0.0) {
        rem += divisor;
        div -= 1.0;
    }

    let quotient = if div == 0.0 {
        0.0_f64.copysign(dividend / divisor)
    } else {
        let floored = div.floor();
        if div - floored > 0.5 { floored + 1.0 } else { floored }
    };

    (quotient, rem)
}
