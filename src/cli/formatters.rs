use chrono::NaiveDate;
use lease_core::{CurrencyFormatter, DateFormatter, MileageFormatter};

/// Formatter implementations used by the terminal views.
///
/// Values stay at full precision until they pass through here.
#[derive(Debug, Clone, Copy)]
pub struct CliFormatters {
    precision: usize,
}

impl Default for CliFormatters {
    fn default() -> Self {
        Self { precision: 2 }
    }
}

impl CliFormatters {
    pub fn with_precision(precision: usize) -> Self {
        Self { precision }
    }
}

impl CurrencyFormatter for CliFormatters {
    fn format_amount(&self, amount: f64) -> String {
        format!("${amount:.prec$}", amount = amount, prec = self.precision)
    }
}

impl MileageFormatter for CliFormatters {
    fn format_miles(&self, miles: f64) -> String {
        format!("{miles:.prec$}", miles = miles, prec = self.precision)
    }
}

impl DateFormatter for CliFormatters {
    /// Long style, e.g. `November 25, 2024`.
    fn format_date(&self, date: NaiveDate) -> String {
        date.format("%B %-d, %Y").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_only_for_display() {
        let formatters = CliFormatters::default();
        assert_eq!(formatters.format_amount(250.0), "$250.00");
        assert_eq!(formatters.format_amount(0.126), "$0.13");
        assert_eq!(formatters.format_miles(12032.876712), "12032.88");
        assert_eq!(CliFormatters::with_precision(0).format_miles(99.6), "100");
    }

    #[test]
    fn dates_use_long_style() {
        let date = NaiveDate::from_ymd_opt(2024, 11, 5).unwrap();
        assert_eq!(CliFormatters::default().format_date(date), "November 5, 2024");
    }
}
