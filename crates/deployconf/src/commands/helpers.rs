use std::path::PathBuf;

use clap::ArgMatches;
use tracing::error;

use deployconf_core::{AccessGuard, DefaultPaths, DefaultsRegistry, ReadAllowList, Unrestricted};

/// Directory name used for the platform config and cache locations.
pub const APP_NAME: &str = "deployconf";

/// Build the registry for the host layout, honoring `--deployment-file`.
pub fn build_registry(matches: &ArgMatches) -> Result<DefaultsRegistry, Box<dyn std::error::Error>> {
    let mut paths = DefaultPaths::detect(APP_NAME);
    if let Some(file) = matches.get_one::<String>("deployment-file") {
        paths = paths.with_deployment_file(PathBuf::from(file));
    }

    DefaultsRegistry::build(&paths).map_err(|e| {
        error!(event = "cli.registry.build_failed", error = %e);
        e.into()
    })
}

/// Read guard selected by `--sandbox-root`. No roots means unrestricted reads.
pub fn access_guard(matches: &ArgMatches) -> Box<dyn AccessGuard> {
    match matches.get_many::<String>("sandbox-root") {
        Some(roots) => Box::new(ReadAllowList::new(roots.map(PathBuf::from))),
        None => Box::new(Unrestricted),
    }
}
