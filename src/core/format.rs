//! Number formatting for display. The only computation the dashboard does.

/// Direction of a change figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
}

impl Trend {
    /// Zero counts as up.
    pub fn of(change: f64) -> Self {
        if change >= 0.0 {
            Trend::Up
        } else {
            Trend::Down
        }
    }

    pub fn arrow(self) -> &'static str {
        match self {
            Trend::Up => "↗",
            Trend::Down => "↘",
        }
    }
}

/// `150000.0` → `"$150,000"`, `1234.5` → `"$1,234.5"`.
pub fn currency(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{sign}${}", grouped(value.abs()))
}

/// `8.5` → `"8.5%"`, `15.0` → `"15%"`.
pub fn percent(value: f64) -> String {
    format!("{}%", trim_decimal(value, 2))
}

/// Absolute change with its arrow, e.g. `-2.1` → `"↘ 2.1%"`.
pub fn change(value: f64) -> String {
    format!("{} {}", Trend::of(value).arrow(), percent(value.abs()))
}

/// Gauge fill for an APY figure: ten points per percent, clamped to 0..=100.
pub fn apy_gauge_percent(apy: f64) -> u16 {
    if !apy.is_finite() {
        return 0;
    }
    (apy * 10.0).round().clamp(0.0, 100.0) as u16
}

/// `"active"` → `"Active"`.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn grouped(value: f64) -> String {
    let text = trim_decimal(value, 2);
    let (int_part, frac_part) = match text.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (text.as_str(), None),
    };

    let digits = int_part.as_bytes();
    let mut out = String::with_capacity(text.len() + digits.len() / 3);
    for (i, d) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(*d as char);
    }
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

fn trim_decimal(value: f64, max_decimals: usize) -> String {
    let text = format!("{value:.max_decimals$}");
    if !text.contains('.') {
        return text;
    }
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_grouping() {
        assert_eq!(currency(150_000.0), "$150,000");
        assert_eq!(currency(2_500_000.0), "$2,500,000");
        assert_eq!(currency(999.0), "$999");
        assert_eq!(currency(0.0), "$0");
    }

    #[test]
    fn test_currency_fraction_and_sign() {
        assert_eq!(currency(1234.5), "$1,234.5");
        assert_eq!(currency(-75_000.25), "-$75,000.25");
    }

    #[test]
    fn test_percent_trims() {
        assert_eq!(percent(8.5), "8.5%");
        assert_eq!(percent(15.0), "15%");
        assert_eq!(percent(8.75), "8.75%");
    }

    #[test]
    fn test_change_uses_absolute_value() {
        assert_eq!(change(-2.1), "↘ 2.1%");
        assert_eq!(change(5.2), "↗ 5.2%");
        assert_eq!(Trend::of(0.0), Trend::Up);
    }

    #[test]
    fn test_apy_gauge_clamped() {
        assert_eq!(apy_gauge_percent(8.5), 85);
        assert_eq!(apy_gauge_percent(12.0), 100);
        assert_eq!(apy_gauge_percent(-1.0), 0);
        assert_eq!(apy_gauge_percent(f64::NAN), 0);
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("pending"), "Pending");
        assert_eq!(capitalize(""), "");
    }
}
