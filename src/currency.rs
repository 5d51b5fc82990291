// USD amount <-> display string, en-US conventions
const SYMBOL: &str = "$";
const DECIMAL_SEPARATOR: char = '.';
const GROUP_SEPARATOR: char = ',';

/// Pulls the numeric amount out of a display string like "$1,299.99".
/// Anything that is not a digit, a minus sign or the decimal separator is
/// dropped; the separator is mapped to `.` where the locale's differs.
/// Returns NaN when nothing parseable remains.
pub fn decode(text: &str) -> f64 {
    let normalized: String = text
        .chars()
        .filter_map(|c| {
            if c.is_ascii_digit() || c == '-' {
                Some(c)
            } else if c == DECIMAL_SEPARATOR {
                Some('.')
            } else {
                None
            }
        })
        .collect();

    normalized.parse::<f64>().unwrap_or(f64::NAN)
}

/// Formats an amount as "$1,299.99": grouped dollars, two cent digits,
/// sign ahead of the symbol. NaN comes out as "$NaN" so undefined
/// aggregates stay printable.
pub fn encode(amount: f64) -> String {
    if amount.is_nan() {
        return format!("{SYMBOL}NaN");
    }

    let cents = (amount.abs() * 100.0).round() as u64;
    let sign = if amount < 0.0 { "-" } else { "" };
    format!(
        "{sign}{SYMBOL}{}{DECIMAL_SEPARATOR}{:02}",
        group_thousands(cents / 100),
        cents % 100
    )
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(GROUP_SEPARATOR);
        }
        grouped.push(c);
    }
    grouped
}
