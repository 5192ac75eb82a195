//! Mathematical utilities shared by the disaggregation algorithms.

/// π
pub const PI: f64 = core::f64::consts::PI;

/// Converts degrees to radians.
#[inline]
pub const fn degrees_to_radians(degrees: f64) -> f64 {
    degrees.to_radians()
}

/// Converts radians to degrees.
#[inline]
pub const fn radians_to_degrees(radians: f64) -> f64 {
    radians.to_degrees()
}

/// Clamps a value into `[lower, upper]`.
///
/// NaN passes through unchanged; callers validate finiteness at the boundary.
#[inline]
pub fn clamp(value: f64, lower: f64, upper: f64) -> f64 {
    if value < lower {
        lower
    } else if value > upper {
        upper
    } else {
        value
    }
}

/// Rounds `value` to the nearest multiple of `step` (ties away from zero).
#[inline]
pub fn round_to_multiple(value: f64, step: f64) -> f64 {
    round(value / step) * step
}

/// Computes a polynomial using Horner's method for numerical stability.
///
/// Coefficients are ordered [a₀, a₁, a₂, ...] for a₀ + a₁x + a₂x² + ...
pub fn polynomial(coeffs: &[f64], x: f64) -> f64 {
    let Some(&last) = coeffs.last() else {
        return 0.0;
    };

    let mut result = last;
    for &coeff in coeffs.iter().rev().skip(1) {
        result = mul_add(result, x, coeff);
    }
    result
}

/// Defines single-argument float functions that use native `f64` methods with
/// `std` and the `libm` equivalents otherwise.
macro_rules! float_fns {
    ($($(#[$doc:meta])* $name:ident => $libm:ident;)+) => {
        $(
            $(#[$doc])*
            #[inline]
            pub fn $name(x: f64) -> f64 {
                #[cfg(feature = "std")]
                return x.$name();

                #[cfg(not(feature = "std"))]
                return libm::$libm(x);
            }
        )+
    };
}

float_fns! {
    /// Sine of `x` (radians).
    sin => sin;
    /// Cosine of `x` (radians).
    cos => cos;
    /// Tangent of `x` (radians).
    tan => tan;
    /// Arc cosine in radians.
    acos => acos;
    /// `e^x`.
    exp => exp;
    /// Largest integer not above `x`.
    floor => floor;
    /// Smallest integer not below `x`.
    ceil => ceil;
    /// Nearest integer, half-way cases away from zero.
    round => round;
}

/// `x * a + b` with a single rounding.
#[inline]
pub fn mul_add(x: f64, a: f64, b: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.mul_add(a, b);

    #[cfg(not(feature = "std"))]
    return libm::fma(x, a, b);
}

/// `x` raised to an integer power.
#[inline]
pub fn powi(x: f64, n: i32) -> f64 {
    #[cfg(feature = "std")]
    return x.powi(n);

    #[cfg(not(feature = "std"))]
    return libm::pow(x, f64::from(n));
}
