//! Environment helpers: centralized dotenv loading and ergonomic getters.
//! Call `init_env()` once early in the binary (the getters also call it).
use std::sync::Once;
use tracing::info;

static INIT: Once = Once::new();

/// Load .env exactly once. Safe to call many times.
pub fn init_env() {
    INIT.call_once(|| {
        let _ = dotenv::dotenv();
    });
}

/// Get required env var; error if missing or blank.
pub fn env_req(key: &str) -> anyhow::Result<String> {
    env_opt(key).ok_or_else(|| anyhow::anyhow!("missing env var {key}"))
}

/// Get optional env var (None if unset or empty).
pub fn env_opt(key: &str) -> Option<String> {
    init_env();
    match std::env::var(key) {
        Ok(v) if !v.trim().is_empty() => Some(v),
        _ => None,
    }
}

/// Mask secrets before they reach the logs.
pub fn redact_value(key: &str, val: &str) -> String {
    let k = key.to_ascii_uppercase();
    let val_trim = val.trim();
    if val_trim.is_empty() {
        return String::new();
    }

    if k.contains("TOKEN") || k.contains("SECRET") || k.contains("PASSWORD") || k.ends_with("_KEY")
    {
        let tail: String = val_trim
            .chars()
            .rev()
            .take(4)
            .collect::<Vec<_>>()
            .into_iter()
            .rev()
            .collect();
        if val_trim.chars().count() > 8 {
            return format!("***{tail}");
        }
        return "***".to_string();
    }

    val_trim.to_string()
}

/// Validate required keys and log a consolidated, redacted snapshot of configuration.
/// Returns error if any required key is missing.
pub fn preflight_check(title: &str, required: &[&str], also_log: &[&str]) -> anyhow::Result<()> {
    init_env();
    let missing: Vec<&str> = required
        .iter()
        .copied()
        .filter(|k| env_opt(k).is_none())
        .collect();
    let snapshot: Vec<(String, String)> = also_log
        .iter()
        .map(|&k| {
            let v = env_opt(k).unwrap_or_default();
            (k.to_string(), redact_value(k, &v))
        })
        .collect();
    info!(target = "preflight", title, snapshot = ?snapshot, "configuration snapshot");
    if !missing.is_empty() {
        return Err(anyhow::anyhow!("missing required env: {:?}", missing));
    }
    Ok(())
}
