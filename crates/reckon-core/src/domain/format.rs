//! Human-readable number rendering shared by results and history lines.

/// Magnitude from which values switch to scientific notation.
const SCIENTIFIC_ABOVE: f64 = 1e16;
/// Magnitude below which non-zero values switch to scientific notation.
const SCIENTIFIC_BELOW: f64 = 1e-4;

/// Render a float the way the calculator prints it.
///
/// Integral values keep one decimal place (`8.0`), very large or very small
/// magnitudes use scientific notation with a signed, two-digit exponent
/// (`1e+16`, `1.5e-07`) and everything else uses the shortest representation
/// that round-trips (`2.5`, `0.30000000000000004`). Non-finite values print
/// as `inf`, `-inf`, `NaN`.
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let magnitude = value.abs();
    if magnitude >= SCIENTIFIC_ABOVE || (magnitude != 0.0 && magnitude < SCIENTIFIC_BELOW) {
        return scientific(value);
    }

    if value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}

/// `{:e}` with the exponent padded to two digits and always signed.
fn scientific(value: f64) -> String {
    let rendered = format!("{value:e}");
    let Some((mantissa, exponent)) = rendered.split_once('e') else {
        return rendered;
    };
    let (sign, digits) = match exponent.strip_prefix('-') {
        Some(digits) => ('-', digits),
        None => ('+', exponent),
    };
    format!("{mantissa}e{sign}{digits:0>2}")
}
