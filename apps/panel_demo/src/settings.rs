use std::{collections::HashMap, fs, path::Path};

use panel_core::ToggleAffordancePolicy;
use shared::domain::TargetId;
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub catalog_path: Option<String>,
    pub toggle_policy: ToggleAffordancePolicy,
    /// Targets rendered inside the panel boundary.
    pub panel_targets: Vec<TargetId>,
    pub toggle_target: TargetId,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            catalog_path: None,
            toggle_policy: ToggleAffordancePolicy::Excluded,
            panel_targets: vec![TargetId(2)],
            toggle_target: TargetId(1),
        }
    }
}

pub fn load_settings(path: &Path) -> Settings {
    let mut file_cfg = HashMap::new();
    if let Ok(raw) = fs::read_to_string(path) {
        match toml::from_str::<HashMap<String, String>>(&raw) {
            Ok(parsed) => file_cfg = parsed,
            Err(error) => {
                warn!(path = %path.display(), %error, "ignoring unreadable settings file")
            }
        }
    }

    resolve_settings(&file_cfg, |key| std::env::var(key).ok())
}

/// Defaults, then the settings file, then `PANEL_*` and `APP__*` variables.
pub fn resolve_settings(
    file_cfg: &HashMap<String, String>,
    env: impl Fn(&str) -> Option<String>,
) -> Settings {
    let mut settings = Settings::default();

    let lookup = |key: &str, env_keys: [&str; 2]| {
        env_keys
            .into_iter()
            .rev()
            .find_map(|env_key| env(env_key))
            .or_else(|| file_cfg.get(key).cloned())
    };

    if let Some(v) = lookup("catalog_path", ["PANEL_CATALOG_PATH", "APP__CATALOG_PATH"]) {
        settings.catalog_path = Some(v);
    }

    if let Some(v) = lookup("toggle_policy", ["PANEL_TOGGLE_POLICY", "APP__TOGGLE_POLICY"]) {
        match parse_policy(&v) {
            Some(policy) => settings.toggle_policy = policy,
            None => warn!(value = %v, "unknown toggle_policy, keeping default"),
        }
    }

    if let Some(v) = lookup("panel_targets", ["PANEL_TARGETS", "APP__PANEL_TARGETS"]) {
        match parse_targets(&v) {
            Some(targets) => settings.panel_targets = targets,
            None => warn!(value = %v, "malformed panel_targets, keeping default"),
        }
    }

    if let Some(v) = lookup("toggle_target", ["PANEL_TOGGLE_TARGET", "APP__TOGGLE_TARGET"]) {
        if let Ok(parsed) = v.trim().parse::<i64>() {
            settings.toggle_target = TargetId(parsed);
        }
    }

    settings
}

fn parse_policy(raw: &str) -> Option<ToggleAffordancePolicy> {
    match raw.trim().to_ascii_lowercase().replace('-', "_").as_str() {
        "excluded" => Some(ToggleAffordancePolicy::Excluded),
        "counts_as_outside" | "outside" => Some(ToggleAffordancePolicy::CountsAsOutside),
        _ => None,
    }
}

fn parse_targets(raw: &str) -> Option<Vec<TargetId>> {
    raw.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| part.parse::<i64>().ok().map(TargetId))
        .collect()
}

#[cfg(test)]
#[path = "tests/settings_tests.rs"]
mod tests;
