use lease_config::{Config, CONFIG_KEYS};

use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::output;
use crate::cli::registry::{CommandEntry, CommandGroup};

const CONFIG_USAGE: &str = "config [show|set <key> <value>|reset]";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "config",
        CommandGroup::System,
        "View and change lease settings and CLI preferences",
        CONFIG_USAGE,
        cmd_config,
    )]
}

fn cmd_config(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if args.is_empty() || args[0].eq_ignore_ascii_case("show") {
        show_config(context);
        return Ok(());
    }

    match args[0].to_lowercase().as_str() {
        "set" => {
            if args.len() < 3 {
                return Err(CommandError::usage(
                    "config set <lease_start|lease_end|default_allowance|ui_color_enabled|plain_output> <value>",
                ));
            }
            let key = args[1].to_lowercase();
            let value = args[2..].join(" ");
            let mut updated = context.config.clone();
            updated.set(&key, value.trim())?;
            context.apply_config(updated)?;
            if key == "default_allowance" {
                context.session.select_allowance(context.config.default_allowance);
            }
            output::success(format!("Updated `{}`.", key));
            Ok(())
        }
        "reset" => {
            context.apply_config(Config::default())?;
            context.session.select_allowance(context.config.default_allowance);
            output::success("Configuration restored to defaults.");
            Ok(())
        }
        _ => Err(CommandError::usage(CONFIG_USAGE)),
    }
}

fn show_config(context: &ShellContext) {
    output::section("Configuration");
    for key in CONFIG_KEYS {
        let value = context.config.get(key).unwrap_or_default();
        output::detail(format!("{:<18} {}", key, value));
    }
    output::detail(format!(
        "{:<18} {}",
        "file",
        context.config_manager.config_path().display()
    ));
}
