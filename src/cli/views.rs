//! Text renderings of the lease and offer screens.

use lease_core::{
    CurrencyFormatter, DateFormatter, LeaseReport, MileageFormatter, MileageStanding,
    OfferComparison, SessionState,
};
use lease_domain::{LeaseTerm, MileageAllowance, OfferSlot};

pub const MILEAGE_PLACEHOLDER: &str = "Enter Your Current Mileage!";

/// Formatter bundle required by the views.
pub trait ViewFormatter: CurrencyFormatter + DateFormatter + MileageFormatter {}

impl<T: CurrencyFormatter + DateFormatter + MileageFormatter> ViewFormatter for T {}

pub fn lease_info_lines(report: &LeaseReport, fmt: &impl ViewFormatter) -> Vec<String> {
    let mut lines = vec![
        fmt.format_date(report.as_of),
        format!("Days left in Lease: {}", report.days_left),
    ];

    let Some(metrics) = report.metrics else {
        lines.push(MILEAGE_PLACEHOLDER.to_string());
        return lines;
    };

    lines.push(format!(
        "Current Mileage: {}",
        fmt.format_miles(metrics.current_mileage)
    ));
    lines.push(format!(
        "Recommended Mileage: {}",
        fmt.format_miles(metrics.recommended_mileage)
    ));
    if metrics.shows_amount_owed() {
        lines.push(format!(
            "Amount Owed if Mileage Not Reduced: {}",
            fmt.format_amount(metrics.amount_owed)
        ));
    }
    lines.push(match metrics.standing {
        MileageStanding::Under(miles) => format!("You are under {} miles", fmt.format_miles(miles)),
        MileageStanding::Over(miles) => format!("You are over {} miles", fmt.format_miles(miles)),
        MileageStanding::OnTrack => "You are where you should be.".to_string(),
    });
    lines.push(format!(
        "Your Daily Average Mileage: {}",
        fmt.format_miles(metrics.average_daily_mileage)
    ));
    lines
}

pub fn allowance_line(selected: MileageAllowance) -> String {
    MileageAllowance::ALL
        .iter()
        .map(|tier| {
            if *tier == selected {
                format!("[{}]", tier.label())
            } else {
                format!(" {} ", tier.label())
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn offer_lines(session: &SessionState, fmt: &impl CurrencyFormatter) -> Vec<String> {
    let mut lines = Vec::new();
    for slot in OfferSlot::ALL {
        let entry = session.offer_entry(slot);
        lines.push(format!(
            "{}: Down Payment {} | Monthly Payment {}",
            slot,
            field_or_dash(&entry.down_payment),
            field_or_dash(&entry.monthly_payment)
        ));
        lines.push(format!(
            "Total Amount Paid: {}",
            fmt.format_amount(session.offer_total(slot))
        ));
    }
    if let Some(comparison) = session.offer_comparison() {
        lines.push(saving_line(&comparison, fmt));
    }
    lines
}

pub fn saving_line(comparison: &OfferComparison, fmt: &impl CurrencyFormatter) -> String {
    format!(
        "You are saving {} more with the {}!",
        fmt.format_amount(comparison.difference),
        comparison.cheaper.ordinal_label()
    )
}

pub fn lease_term_lines(term: &LeaseTerm, report: &LeaseReport, fmt: &impl DateFormatter) -> Vec<String> {
    vec![
        format!("Start: {}", fmt.format_date(term.start())),
        format!("End: {}", fmt.format_date(term.end())),
        format!("Length: {} days", term.length_in_days()),
        format!("Days left in Lease: {}", report.days_left),
    ]
}

fn field_or_dash(text: &str) -> &str {
    if text.is_empty() {
        "-"
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::formatters::CliFormatters;
    use chrono::NaiveDate;
    use lease_core::{Clock, FixedClock, OfferField};

    fn term() -> LeaseTerm {
        LeaseTerm::new(
            NaiveDate::from_ymd_opt(2023, 11, 25).unwrap(),
            NaiveDate::from_ymd_opt(2026, 11, 25).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn empty_session_shows_placeholder() {
        let session = SessionState::default();
        let now = FixedClock::on(NaiveDate::from_ymd_opt(2024, 11, 24).unwrap()).now();
        let lines = lease_info_lines(&session.lease_report(&term(), now), &CliFormatters::default());
        assert_eq!(
            lines,
            vec![
                "November 24, 2024".to_string(),
                "Days left in Lease: 731".to_string(),
                MILEAGE_PLACEHOLDER.to_string(),
            ]
        );
    }

    #[test]
    fn overage_lines_include_amount_owed() {
        let mut session = SessionState::default();
        session.submit_mileage("13000");
        let now = FixedClock::on(NaiveDate::from_ymd_opt(2024, 11, 24).unwrap()).now();
        let lines = lease_info_lines(&session.lease_report(&term(), now), &CliFormatters::default());
        assert_eq!(lines[2], "Current Mileage: 13000.00");
        assert_eq!(lines[3], "Recommended Mileage: 12000.00");
        assert_eq!(lines[4], "Amount Owed if Mileage Not Reduced: $250.00");
        assert_eq!(lines[5], "You are over 1000.00 miles");
        assert_eq!(lines[6], "Your Daily Average Mileage: 35.62");
    }

    #[test]
    fn comparison_line_appears_once_both_monthlies_exist() {
        let mut session = SessionState::default();
        let fmt = CliFormatters::default();
        session.set_offer_field(OfferSlot::First, OfferField::DownPayment, "1000");
        session.set_offer_field(OfferSlot::First, OfferField::MonthlyPayment, "300");
        assert_eq!(offer_lines(&session, &fmt).len(), 4);

        session.set_offer_field(OfferSlot::Second, OfferField::DownPayment, "2000");
        session.set_offer_field(OfferSlot::Second, OfferField::MonthlyPayment, "250");
        let lines = offer_lines(&session, &fmt);
        assert_eq!(lines[1], "Total Amount Paid: $11800.00");
        assert_eq!(lines[3], "Total Amount Paid: $11000.00");
        assert_eq!(lines[4], "You are saving $800.00 more with the 2nd set!");
    }

    #[test]
    fn allowance_line_marks_selection() {
        assert_eq!(
            allowance_line(MileageAllowance::FifteenThousand),
            " 10k   12k  [15k]"
        );
    }
}
