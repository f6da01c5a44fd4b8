use lease_domain::MileageAllowance;

use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::output;
use crate::cli::registry::{CommandEntry, CommandGroup};
use crate::cli::views;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "mileage",
            CommandGroup::Mileage,
            "Save the current odometer reading",
            "mileage <miles>",
            cmd_mileage,
        ),
        CommandEntry::new(
            "allowance",
            CommandGroup::Mileage,
            "Show or select the annual mileage limit",
            "allowance [10k|12k|15k]",
            cmd_allowance,
        ),
        CommandEntry::new(
            "info",
            CommandGroup::Mileage,
            "Show lease information for today",
            "info",
            cmd_info,
        ),
        CommandEntry::new(
            "lease",
            CommandGroup::Mileage,
            "Show the configured lease term",
            "lease",
            cmd_lease,
        ),
        CommandEntry::new(
            "reset",
            CommandGroup::Mileage,
            "Clear mileage, offers and allowance back to defaults",
            "reset",
            cmd_reset,
        ),
    ]
}

/// Unusable readings leave the saved mileage untouched and print nothing.
fn cmd_mileage(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if args.is_empty() {
        return Err(CommandError::usage("mileage <miles>"));
    }
    let input = args.join(" ");
    if context.session.submit_mileage(&input).is_some() {
        output::success("Mileage Saved: The mileage has been updated.");
    }
    Ok(())
}

fn cmd_allowance(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if let Some(raw) = args.first() {
        let tier = raw
            .parse::<MileageAllowance>()
            .map_err(|err| CommandError::InvalidArguments(err.to_string()))?;
        context.session.select_allowance(tier);
        output::success(format!("Annual mileage limit set to {}.", tier));
    }
    output::section("Select Your Annual Mileage Limit");
    output::detail(views::allowance_line(context.session.mileage.annual_allowance));
    Ok(())
}

fn cmd_info(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let report = context.report();
    output::section("Lease Information");
    for line in views::lease_info_lines(&report, &context.formatters) {
        output::detail(line);
    }
    Ok(())
}

fn cmd_lease(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let report = context.report();
    output::section("Lease Term");
    for line in views::lease_term_lines(&context.term, &report, &context.formatters) {
        output::detail(line);
    }
    Ok(())
}

fn cmd_reset(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    context.session.reset(context.config.default_allowance);
    output::success("Session cleared.");
    Ok(())
}
