use tracing::{error, info, warn};

pub fn log_app_startup() {
    info!(
        event = "core.app.startup_completed",
        version = env!("CARGO_PKG_VERSION")
    );
}

pub fn log_app_error(error: &dyn std::error::Error) {
    error!(
        event = "core.app.error_occurred",
        error = %error,
        error_type = std::any::type_name_of_val(error)
    );
}

pub fn log_catalog_built(settings: usize) {
    info!(event = "core.catalog.build_completed", settings = settings);
}

pub fn log_catalog_rejected(error: &dyn std::error::Error) {
    error!(event = "core.catalog.build_failed", error = %error);
}

pub fn log_defaults_issued(settings: usize) {
    info!(event = "core.defaults.issue_completed", settings = settings);
}

pub fn log_access_denied(path: &str) {
    warn!(event = "core.defaults.access_denied", path = path);
}

pub fn log_value_rejected(key: &str, layer: &str, value: &str, reason: &str) {
    warn!(
        event = "core.resolve.value_rejected",
        key = key,
        layer = layer,
        value = value,
        reason = reason
    );
}

pub fn log_policy_violation(key: &str, user_value: &str, enforced_value: Option<&str>) {
    warn!(
        event = "core.resolve.policy_violation",
        key = key,
        user_value = user_value,
        enforced_value = enforced_value
    );
}

pub fn log_unknown_key(key: &str, layer: &str) {
    warn!(event = "core.resolve.unknown_key", key = key, layer = layer);
}

pub fn log_resolution_completed(resolved: usize, reports: usize) {
    info!(
        event = "core.resolve.resolution_completed",
        resolved = resolved,
        reports = reports
    );
}

pub fn log_layer_loaded(origin: &str, entries: usize, locked: usize) {
    info!(
        event = "core.layer.load_completed",
        origin = origin,
        entries = entries,
        locked = locked
    );
}
