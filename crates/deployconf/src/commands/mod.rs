use clap::ArgMatches;
use tracing::error;

use deployconf_core::events;

pub mod helpers;
mod json_types;

mod defaults;
mod resolve;
mod template;
mod validate;

pub fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    events::log_app_startup();

    let result = match matches.subcommand() {
        Some(("defaults", sub_matches)) => defaults::handle_defaults_command(sub_matches),
        Some(("template", sub_matches)) => template::handle_template_command(sub_matches),
        Some(("validate", sub_matches)) => validate::handle_validate_command(sub_matches),
        Some(("resolve", sub_matches)) => resolve::handle_resolve_command(sub_matches),
        _ => {
            error!(event = "cli.command_unknown");
            Err("Unknown command".into())
        }
    };

    if let Err(e) = &result {
        events::log_app_error(&**e);
    }
    result
}
