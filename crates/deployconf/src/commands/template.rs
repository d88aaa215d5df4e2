use clap::ArgMatches;
use tracing::info;

use deployconf_core::settings::render_template;

use super::helpers::{access_guard, build_registry};

pub(crate) fn handle_template_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    info!(event = "cli.template_started");

    let registry = build_registry(matches)?;
    registry.get_defaults(access_guard(matches).as_ref())?;

    print!("{}", render_template(&registry));

    info!(event = "cli.template_completed", settings = registry.len());
    Ok(())
}
