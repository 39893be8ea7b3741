//! Scientific formatting of ring values.
//!
//! Def files carry samples in C-style scientific notation with an explicit
//! sign and a sign-and-two-digit exponent (`+1.20000E+02`). Rust's `{:E}`
//! renders the exponent as `E2`, so the formatter here pads it back into
//! the expected shape.

/// Fraction digits for sky positions, which need sub-arcsecond precision
/// when expressed in degrees.
const POSITION_FRAC_DIGITS: usize = 8;
/// Fraction digits for everything else.
const DEFAULT_FRAC_DIGITS: usize = 5;

/// Fraction digits used when writing samples of the given parameter.
///
/// Position parameters are matched on the first four characters so the
/// numbered-disk forms (`XPOS_2`, …) get the same treatment.
pub fn frac_digits_for(key: &str) -> usize {
    if key.starts_with("XPOS") || key.starts_with("YPOS") {
        POSITION_FRAC_DIGITS
    } else {
        DEFAULT_FRAC_DIGITS
    }
}

/// Formats one sample: sign, one integer digit, `frac_digits` fraction
/// digits, and a signed two-digit exponent, e.g. `+1.00000E+00`.
pub fn format_sample(value: f64, frac_digits: usize) -> String {
    let formatted = format!("{:+.*E}", frac_digits, value);
    let Some((mantissa, exponent)) = formatted.split_once('E') else {
        // Non-finite values have no exponent part; pass them through.
        return formatted;
    };
    let (sign, digits) = match exponent.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("+", exponent),
    };
    format!("{}E{}{:0>2}", mantissa, sign, digits)
}

/// Space-joins samples in ring order, at the precision for `key`.
pub fn format_samples(key: &str, samples: &[f64]) -> String {
    let digits = frac_digits_for(key);
    samples
        .iter()
        .map(|v| format_sample(*v, digits))
        .collect::<Vec<_>>()
        .join(" ")
}
