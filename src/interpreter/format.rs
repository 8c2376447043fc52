use crate::interpreter::value::decimal::{Decimal, ParseDecimalError};

/// Renders a decimal for display.
///
/// The whole part gets a `,` every three digits counting from the right; a
/// leading `-` is left alone. Trailing fractional zeros are dropped, and a
/// whole number is shown without a decimal point. Nothing is rounded.
///
/// # Example
/// ```
/// use decicalc::interpreter::{format::format_decimal, value::decimal::Decimal};
///
/// assert_eq!(format_decimal(&Decimal::new(1_234_567, 0)), "1,234,567");
/// assert_eq!(format_decimal(&Decimal::new(123_450, 2)), "1,234.5");
/// assert_eq!(format_decimal(&Decimal::new(-5_000, 3)), "-5");
/// ```
#[must_use]
pub fn format_decimal(value: &Decimal) -> String {
    let plain = value.to_string();
    let (whole, fraction) = plain.split_once('.').unwrap_or((plain.as_str(), ""));
    let (sign, digits) = whole.strip_prefix('-').map_or(("", whole), |rest| ("-", rest));
    let grouped = group_thousands(digits);

    if fraction.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}.{fraction}")
    }
}

/// Inserts `,` between every group of three digits, counting from the right.
///
/// # Example
/// ```
/// use decicalc::interpreter::format::group_thousands;
///
/// assert_eq!(group_thousands("1234567"), "1,234,567");
/// assert_eq!(group_thousands("123"), "123");
/// ```
#[must_use]
pub fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

/// Reads a number back from its formatted form.
///
/// Accepts what [`format_decimal`] produces: an optional `-`, digits with `,`
/// separators and an optional fraction.
///
/// # Errors
/// Returns a [`ParseDecimalError`] for anything else, including separators
/// inside the fraction.
///
/// # Example
/// ```
/// use decicalc::interpreter::format::{format_decimal, parse_formatted};
///
/// let value = parse_formatted("-12,345.678").unwrap();
/// assert_eq!(format_decimal(&value), "-12,345.678");
/// ```
pub fn parse_formatted(text: &str) -> Result<Decimal, ParseDecimalError> {
    let whole_len = text.find('.').unwrap_or(text.len());
    let (whole, fraction) = text.split_at(whole_len);

    if fraction.contains(',') || whole.starts_with(',') || whole.ends_with(',') {
        return Err(ParseDecimalError { input: text.to_string() });
    }

    let plain = format!("{}{fraction}", whole.replace(',', ""));
    plain.parse::<Decimal>()
         .map_err(|_| ParseDecimalError { input: text.to_string() })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(text: &str) -> Decimal {
        text.parse().unwrap()
    }

    #[test]
    fn negative_sign_is_not_grouped() {
        assert_eq!(format_decimal(&Decimal::new(-123_456, 0)), "-123,456");
        assert_eq!(format_decimal(&Decimal::new(-999, 0)), "-999");
    }

    #[test]
    fn fraction_is_never_grouped() {
        assert_eq!(format_decimal(&dec("1234.56789")), "1,234.56789");
    }

    #[test]
    fn whole_numbers_drop_the_point() {
        assert_eq!(format_decimal(&dec("1000.000")), "1,000");
        assert_eq!(format_decimal(&Decimal::zero()), "0");
    }

    #[test]
    fn small_fractions_keep_leading_zero() {
        assert_eq!(format_decimal(&dec("-0.05")), "-0.05");
    }

    #[test]
    fn formatted_text_round_trips() {
        assert_eq!(parse_formatted("1,234,567").unwrap(), Decimal::new(1_234_567, 0));
        assert!(parse_formatted("1.234,5").is_err());
        assert!(parse_formatted(",123").is_err());
    }
}
