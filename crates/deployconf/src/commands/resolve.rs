use std::path::{Path, PathBuf};

use clap::ArgMatches;
use tracing::{info, warn};

use deployconf_core::resolve::system_config_ref;
use deployconf_core::{AccessGuard, ConfigLayer, LayerKind, SystemConfigRef};

use super::helpers::{access_guard, build_registry};

pub(crate) fn handle_resolve_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = matches.get_flag("json");
    let enforce = matches.get_flag("enforce");

    info!(event = "cli.resolve_started", json_output = json_output, enforce = enforce);

    let registry = build_registry(matches)?;
    let guard = access_guard(matches);

    let user = match matches.get_one::<String>("user") {
        Some(path) => Some(load_layer(guard.as_ref(), LayerKind::User, Path::new(path))?),
        None => load_deployment_file(guard.as_ref(), &registry.deployment_file().path)?,
    };

    let system = match matches.get_one::<String>("system") {
        Some(path) => Some(load_layer(guard.as_ref(), LayerKind::System, Path::new(path))?),
        None => match &user {
            Some(user) => load_referenced_system(guard.as_ref(), user)?,
            None => None,
        },
    }
    .map(|layer| layer.with_mandatory(enforce));

    let resolution = deployconf_core::resolve(&registry, system.as_ref(), user.as_ref());

    if json_output {
        println!("{}", serde_json::to_string_pretty(&resolution)?);
    } else {
        for (key, resolved) in resolution.config.iter() {
            println!("{}={}", key, resolved.value);
        }
        for report in &resolution.reports {
            eprintln!("Warning: {}", report);
        }
    }

    info!(
        event = "cli.resolve_completed",
        resolved = resolution.config.len(),
        reports = resolution.reports.len()
    );
    Ok(())
}

fn load_layer(
    guard: &dyn AccessGuard,
    kind: LayerKind,
    path: &Path,
) -> Result<ConfigLayer, Box<dyn std::error::Error>> {
    guard.check_read(path)?;
    Ok(ConfigLayer::load(kind, path)?)
}

/// Load the user deployment file. A missing file means no user layer.
fn load_deployment_file(
    guard: &dyn AccessGuard,
    path: &str,
) -> Result<Option<ConfigLayer>, Box<dyn std::error::Error>> {
    match load_layer(guard, LayerKind::User, Path::new(path)) {
        Ok(layer) => Ok(Some(layer)),
        Err(e) => match e.downcast_ref::<deployconf_core::LayerError>() {
            Some(layer_error) if layer_error.is_not_found() => {
                info!(event = "cli.resolve.deployment_file_absent", path = path);
                Ok(None)
            }
            _ => Err(e),
        },
    }
}

/// Follow the user layer's pointer to a system configuration.
///
/// Only `file:` locations are loaded. An unusable location is fatal when the
/// pointer is marked mandatory and logged otherwise.
fn load_referenced_system(
    guard: &dyn AccessGuard,
    user: &ConfigLayer,
) -> Result<Option<ConfigLayer>, Box<dyn std::error::Error>> {
    let Some(pointer) = system_config_ref(user)? else {
        return Ok(None);
    };

    let path: PathBuf = match pointer.local_path() {
        Some(path) => path,
        None => {
            return skip_or_fail(&pointer, format!("unsupported scheme '{}'", pointer.url.scheme()));
        }
    };

    match load_layer(guard, LayerKind::System, &path) {
        Ok(layer) => Ok(Some(layer)),
        Err(e) => skip_or_fail(&pointer, e.to_string()),
    }
}

fn skip_or_fail(
    pointer: &SystemConfigRef,
    reason: String,
) -> Result<Option<ConfigLayer>, Box<dyn std::error::Error>> {
    if let Some(e) = pointer.unavailable(reason.clone()) {
        return Err(e.into());
    }

    eprintln!(
        "Warning: Could not load system configuration {}: {}. Continuing without it.",
        pointer.url, reason
    );
    warn!(
        event = "cli.resolve.system_config_skipped",
        location = %pointer.url,
        reason = %reason
    );
    Ok(None)
}
