use clap::ArgMatches;
use tracing::info;

use super::helpers::{access_guard, build_registry};
use super::json_types::SettingOutput;

pub(crate) fn handle_defaults_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = matches.get_flag("json");

    info!(event = "cli.defaults_started", json_output = json_output);

    let registry = build_registry(matches)?;
    let guard = access_guard(matches);
    let defaults = registry.get_defaults(guard.as_ref())?;

    // Catalog order, not map order
    let settings: Vec<_> = registry
        .names()
        .filter_map(|name| defaults.get(name))
        .collect();

    if json_output {
        let output: Vec<SettingOutput> = settings.iter().map(|s| SettingOutput::from(*s)).collect();
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        let name_width = settings
            .iter()
            .map(|s| s.name().len())
            .max()
            .unwrap_or(0);
        for setting in &settings {
            println!(
                "{:<name_width$}  {:<20}  {}",
                setting.name(),
                setting.default_value().unwrap_or("(unset)"),
                setting.describe(),
            );
        }
    }

    info!(event = "cli.defaults_completed", count = settings.len());
    Ok(())
}
