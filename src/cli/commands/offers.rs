use lease_core::OfferField;
use lease_domain::OfferSlot;

use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::output;
use crate::cli::registry::{CommandEntry, CommandGroup};
use crate::cli::views;

const OFFER_USAGE: &str = "offer <1|2> <down|monthly> [amount]";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "offer",
            CommandGroup::Offers,
            "Enter the down or monthly payment of an offer",
            OFFER_USAGE,
            cmd_offer,
        ),
        CommandEntry::new(
            "offers",
            CommandGroup::Offers,
            "Show both offers and which one costs less",
            "offers",
            cmd_offers,
        ),
    ]
}

fn parse_slot(raw: &str) -> Option<OfferSlot> {
    raw.parse::<u8>().ok().and_then(OfferSlot::from_number)
}

fn parse_field(raw: &str) -> Option<OfferField> {
    match raw.to_ascii_lowercase().as_str() {
        "down" | "down_payment" | "down-payment" => Some(OfferField::DownPayment),
        "monthly" | "monthly_payment" | "monthly-payment" => Some(OfferField::MonthlyPayment),
        _ => None,
    }
}

/// Stores the text as typed; an omitted amount clears the field.
fn cmd_offer(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let (Some(slot), Some(field)) = (
        args.first().copied().and_then(parse_slot),
        args.get(1).copied().and_then(parse_field),
    ) else {
        return Err(CommandError::usage(OFFER_USAGE));
    };

    let text = args[2..].join(" ");
    context.session.set_offer_field(slot, field, text.trim());
    tracing::debug!(%slot, field = field.label(), "offer field updated");

    print_offers(context);
    Ok(())
}

fn cmd_offers(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    print_offers(context);
    Ok(())
}

fn print_offers(context: &ShellContext) {
    output::section("Lease Calculator");
    for line in views::offer_lines(&context.session, &context.formatters) {
        output::detail(line);
    }
}

#[cfg(test)]
mod tests {
    use crate::cli::test_support::script_context;
    use lease_domain::OfferSlot;

    #[test]
    fn offer_command_fills_requested_slot() {
        let mut context = script_context("2024-11-24");
        context.process_line("offer 2 down 2000").unwrap();
        context.process_line("offer 2 monthly 250").unwrap();

        let entry = context.session.offer_entry(OfferSlot::Second);
        assert_eq!(entry.down_payment, "2000");
        assert_eq!(entry.monthly_payment, "250");
        assert_eq!(context.session.offer_total(OfferSlot::Second), 11000.0);
        assert!(context.session.offer_entry(OfferSlot::First).monthly_payment.is_empty());
    }

    #[test]
    fn comparison_needs_both_monthly_payments() {
        let mut context = script_context("2024-11-24");
        context.process_line("offer 1 monthly 300").unwrap();
        assert!(context.session.offer_comparison().is_none());

        context.process_line("offer 2 monthly 250").unwrap();
        let comparison = context.session.offer_comparison().unwrap();
        assert_eq!(comparison.cheaper, OfferSlot::Second);
        assert_eq!(comparison.difference, 1800.0);
    }

    #[test]
    fn omitted_amount_clears_field() {
        let mut context = script_context("2024-11-24");
        context.process_line("offer 1 down 500").unwrap();
        context.process_line("offer 1 down").unwrap();
        assert!(context.session.offer_entry(OfferSlot::First).down_payment.is_empty());
    }

    #[test]
    fn invalid_slot_or_field_is_rejected() {
        let mut context = script_context("2024-11-24");
        assert!(context.process_line("offer 3 down 100").is_err());
        assert!(context.process_line("offer 1 balloon 100").is_err());
        assert!(context.process_line("offer").is_err());
    }

    #[test]
    fn compare_alias_reaches_offers() {
        let mut context = script_context("2024-11-24");
        assert!(context.process_line("compare").is_ok());
    }
}
