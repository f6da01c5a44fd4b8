use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::help;
use crate::cli::output;
use crate::cli::registry::{CommandEntry, CommandGroup};
use crate::utils::build_info;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "version",
            CommandGroup::System,
            "Show build metadata",
            "version",
            cmd_version,
        ),
        CommandEntry::new(
            "help",
            CommandGroup::System,
            "Show available commands",
            "help [command]",
            cmd_help,
        ),
        CommandEntry::new("exit", CommandGroup::System, "Exit the shell", "exit", cmd_exit),
    ]
}

fn cmd_version(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let meta = build_info::current();
    output::section(format!("Lease Info {}", meta.version));
    output::detail(meta.summary());
    output::detail(format!("Build hash : {} ({})", meta.git_hash, meta.git_status));
    output::detail(format!("Built at   : {}", meta.timestamp));
    output::detail(format!("Target     : {}", meta.target));
    output::detail(format!("Profile    : {}", meta.profile));
    output::detail(format!("Rustc      : {}", meta.rustc));
    Ok(())
}

fn cmd_help(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if let Some(raw) = args.first() {
        match context.registry.get(&raw.to_lowercase()) {
            Some(entry) => help::print_command(entry),
            None => context.suggest_command(raw),
        }
        return Ok(());
    }

    help::print_overview(&context.registry);
    Ok(())
}

fn cmd_exit(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    Err(CommandError::ExitRequested)
}
