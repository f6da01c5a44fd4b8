use crate::cli::output;
use crate::cli::registry::{CommandEntry, CommandGroup, CommandRegistry};

pub fn print_overview(registry: &CommandRegistry) {
    for group in CommandGroup::ALL {
        let entries = registry.in_group(group);
        if entries.is_empty() {
            continue;
        }
        output::section(group.title());
        for entry in entries {
            output::detail(format!("{:<10} {}", entry.name, entry.description));
        }
    }
    output::hint("Use `help <command>` for details.");
}

pub fn print_command(entry: &CommandEntry) {
    output::section(format!("Help: {}", entry.name));
    output::detail(entry.description);
    output::detail(format!("usage: {}", entry.usage));
}
