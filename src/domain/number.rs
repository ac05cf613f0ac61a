//! Number - Formatting, Parsing and Stepping for Numeric Inputs

/// Display format of a numeric value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberFormat {
    /// Fixed number of decimals; `None` keeps the shortest representation
    pub precision: Option<usize>,
    /// Inserted between groups of three integer digits
    pub thousand_separator: Option<char>,
    pub decimal_separator: char,
    pub prefix: Option<String>,
    pub suffix: Option<String>,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self {
            precision: None,
            thousand_separator: Some(','),
            decimal_separator: '.',
            prefix: None,
            suffix: None,
        }
    }
}

impl NumberFormat {
    /// Format without any grouping, prefix or suffix
    pub fn plain() -> Self {
        Self {
            thousand_separator: None,
            ..Self::default()
        }
    }

    /// Two decimals behind a currency symbol
    pub fn currency(symbol: impl Into<String>) -> Self {
        Self::default().precision(2).prefix(symbol)
    }

    /// Set the precision
    pub fn precision(mut self, precision: usize) -> Self {
        self.precision = Some(precision);
        self
    }

    /// Set the prefix
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Set the suffix
    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = Some(suffix.into());
        self
    }

    /// Set both separators
    pub fn separators(mut self, thousand: Option<char>, decimal: char) -> Self {
        self.thousand_separator = thousand;
        self.decimal_separator = decimal;
        self
    }

    /// Format a value for display
    pub fn format(&self, value: f64) -> String {
        let raw = match self.precision {
            Some(precision) => format!("{value:.precision$}"),
            None => value.to_string(),
        };

        let (sign, unsigned) = match raw.strip_prefix('-') {
            Some(rest) => ("-", rest),
            None => ("", raw.as_str()),
        };
        let (integer, fraction) = match unsigned.split_once('.') {
            Some((integer, fraction)) => (integer, Some(fraction)),
            None => (unsigned, None),
        };

        let mut out = String::new();
        if let Some(prefix) = &self.prefix {
            out.push_str(prefix);
        }
        out.push_str(sign);
        out.push_str(&group_digits(integer, self.thousand_separator));
        if let Some(fraction) = fraction {
            out.push(self.decimal_separator);
            out.push_str(fraction);
        }
        if let Some(suffix) = &self.suffix {
            out.push_str(suffix);
        }
        out
    }

    /// Parse user text back into a number.
    ///
    /// Everything except digits, the decimal separator and `-` is dropped,
    /// so formatted values parse back to their number.
    pub fn parse(&self, text: &str) -> Option<f64> {
        let text = self
            .prefix
            .as_deref()
            .and_then(|prefix| text.strip_prefix(prefix))
            .unwrap_or(text);
        let text = self
            .suffix
            .as_deref()
            .and_then(|suffix| text.strip_suffix(suffix))
            .unwrap_or(text);

        let cleaned: String = text
            .chars()
            .filter_map(|c| {
                if c.is_ascii_digit() || c == '-' {
                    Some(c)
                } else if c == self.decimal_separator {
                    Some('.')
                } else {
                    None
                }
            })
            .collect();

        cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
    }
}

/// Group the digits of an integer string in threes
fn group_digits(digits: &str, separator: Option<char>) -> String {
    let Some(separator) = separator else {
        return digits.to_string();
    };

    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(c);
    }
    out
}

/// Format an integer with thousand separators
pub fn format_number(n: i64) -> String {
    NumberFormat::default().format(n as f64)
}

/// Allowed range and step of a numeric input
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumberBounds {
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub step: f64,
}

impl Default for NumberBounds {
    fn default() -> Self {
        Self {
            min: None,
            max: None,
            step: 1.0,
        }
    }
}

impl NumberBounds {
    /// Clamp a value into `[min, max]`
    pub fn clamp(&self, value: f64) -> f64 {
        let value = self.min.map_or(value, |min| value.max(min));
        self.max.map_or(value, |max| value.min(max))
    }

    /// Value after one step up; an unparsable value starts from `min` or zero
    pub fn increment(&self, value: Option<f64>) -> f64 {
        let base = value.unwrap_or_else(|| self.min.unwrap_or(0.0) - self.step);
        self.clamp(base + self.step)
    }

    /// Value after one step down
    pub fn decrement(&self, value: Option<f64>) -> f64 {
        let base = value.unwrap_or_else(|| self.max.unwrap_or(0.0) + self.step);
        self.clamp(base - self.step)
    }

    /// Whether the increment control is enabled
    pub fn can_increment(&self, value: Option<f64>) -> bool {
        match (value, self.max) {
            (Some(value), Some(max)) => value < max,
            _ => true,
        }
    }

    /// Whether the decrement control is enabled
    pub fn can_decrement(&self, value: Option<f64>) -> bool {
        match (value, self.min) {
            (Some(value), Some(min)) => value > min,
            _ => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1,000");
        assert_eq!(format_number(-1234567), "-1,234,567");
    }

    #[test]
    fn formats_precision_prefix_and_suffix() {
        let format = NumberFormat::default().precision(2).prefix("$");
        assert_eq!(format.format(1234.5), "$1,234.50");

        let format = NumberFormat::default()
            .separators(Some('.'), ',')
            .precision(1)
            .suffix(" €");
        assert_eq!(format.format(-98765.43), "-98.765,4 €");
    }

    #[test]
    fn currency_keeps_two_decimals() {
        assert_eq!(NumberFormat::currency("$").format(1_000_000.0), "$1,000,000.00");
        assert_eq!(NumberFormat::currency("¥").format(-3.456), "¥-3.46");
    }

    #[test]
    fn plain_format_has_no_grouping() {
        assert_eq!(NumberFormat::plain().format(12345.0), "12345");
        assert_eq!(NumberFormat::plain().format(0.25), "0.25");
    }

    #[test]
    fn parses_formatted_values_back() {
        let format = NumberFormat::default().precision(2).prefix("$");
        assert_eq!(format.parse("$1,234.50"), Some(1234.5));

        let format = NumberFormat::default().separators(Some('.'), ',');
        assert_eq!(format.parse("1.234,5"), Some(1234.5));
    }

    #[test]
    fn parse_rejects_empty_and_garbage() {
        let format = NumberFormat::default();
        assert_eq!(format.parse(""), None);
        assert_eq!(format.parse("abc"), None);
        assert_eq!(format.parse("--1"), None);
    }

    #[test]
    fn bounds_clamp_and_step() {
        let bounds = NumberBounds {
            min: Some(0.0),
            max: Some(10.0),
            step: 2.5,
        };
        assert_eq!(bounds.clamp(-4.0), 0.0);
        assert_eq!(bounds.clamp(12.0), 10.0);
        assert_eq!(bounds.increment(Some(9.0)), 10.0);
        assert_eq!(bounds.decrement(Some(1.0)), 0.0);
        assert_eq!(bounds.increment(None), 0.0);
        assert_eq!(bounds.decrement(None), 10.0);
        assert!(!bounds.can_increment(Some(10.0)));
        assert!(bounds.can_decrement(Some(10.0)));
    }

    #[test]
    fn unbounded_steps_freely() {
        let bounds = NumberBounds::default();
        assert_eq!(bounds.increment(Some(-1.0)), 0.0);
        assert_eq!(bounds.decrement(None), 0.0);
        assert!(bounds.can_increment(None));
    }
}
