/// Magnitude at and above which results switch to exponent notation.
pub const EXPONENT_UPPER: f64 = 1e21;
/// Magnitude below which non-zero results switch to exponent notation.
pub const EXPONENT_LOWER: f64 = 1e-6;

/// Converts the in-progress input string to a number.
///
/// Returns `None` for anything that is not a complete numeral, including the
/// empty string and partial entries such as `"-"` or `"."`. Trailing dots are
/// accepted, so `"0."` is zero. The non-finite texts [`format_number`] shows,
/// `Infinity`, `-Infinity` and `NaN`, read back as the same values.
///
/// ## Example
/// ```
/// use abacus::util::num::parse_input;
///
/// assert_eq!(parse_input("12.5"), Some(12.5));
/// assert_eq!(parse_input("0."), Some(0.0));
/// assert_eq!(parse_input("-0.25"), Some(-0.25));
/// assert_eq!(parse_input(""), None);
/// assert_eq!(parse_input("-"), None);
/// assert_eq!(parse_input("-Infinity"), Some(f64::NEG_INFINITY));
/// assert!(parse_input("NaN").is_some_and(f64::is_nan));
/// ```
#[must_use]
pub fn parse_input(input: &str) -> Option<f64> {
    let trimmed = input.trim();
    match trimmed {
        "" => return None,
        "Infinity" => return Some(f64::INFINITY),
        "-Infinity" => return Some(f64::NEG_INFINITY),
        "NaN" => return Some(f64::NAN),
        _ => {},
    }
    // `str::parse` also accepts words like "inf" and "NaN".
    if !trimmed.chars()
               .all(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E'))
    {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Renders a number the way the calculator display shows it.
///
/// Integral values print without a fractional part, fractions use the
/// shortest representation that round-trips, negative zero prints as `0`,
/// very large or very small magnitudes use exponent notation with an explicit
/// sign, and non-finite values print as `Infinity`, `-Infinity` or `NaN`.
///
/// ## Example
/// ```
/// use abacus::util::num::format_number;
///
/// assert_eq!(format_number(14.0), "14");
/// assert_eq!(format_number(1.5), "1.5");
/// assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
/// assert_eq!(format_number(-0.0), "0");
/// assert_eq!(format_number(1e21), "1e+21");
/// assert_eq!(format_number(f64::INFINITY), "Infinity");
/// ```
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value.is_sign_positive() { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if (EXPONENT_LOWER..EXPONENT_UPPER).contains(&magnitude) {
        return format!("{value}");
    }

    let formatted = format!("{value:e}");
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        },
        _ => formatted,
    }
}
