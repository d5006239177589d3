/// Numeric helpers.
///
/// This module provides the floored division and modulo used by the `//`
/// and `%` operators, where the remainder takes the sign of the divisor.
pub mod num;
