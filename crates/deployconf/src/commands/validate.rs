use clap::ArgMatches;
use tracing::{error, info};

use super::helpers::build_registry;

pub(crate) fn handle_validate_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let key = matches
        .get_one::<String>("key")
        .ok_or("Key argument is required")?;
    let value = matches
        .get_one::<String>("value")
        .ok_or("Value argument is required")?;

    info!(event = "cli.validate_started", key = %key);

    let registry = build_registry(matches)?;
    let setting = registry
        .get(key)
        .ok_or_else(|| format!("Unknown setting '{}'", key))?;

    match setting.validate(value) {
        Ok(canonical) => {
            println!("{}", canonical);
            info!(event = "cli.validate_completed", key = %key, value = %canonical);
            Ok(())
        }
        Err(e) => {
            error!(event = "cli.validate_failed", key = %key, error = %e);
            Err(e.into())
        }
    }
}
