use std::path::{Path, PathBuf};

use edsim_render::RenderStyle;
use serde::{Deserialize, Serialize};

/// Current settings version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
const CURRENT_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version. Missing or 0 = pre-versioned settings.
    #[serde(default)]
    pub config_version: u32,
    /// `tracing` filter directive used when `EDSIM_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
    /// Emit log lines as JSON instead of plain text.
    #[serde(default)]
    pub log_json: bool,
    /// Gauge and bar width in character cells.
    #[serde(default = "default_bar_cells")]
    pub bar_cells: usize,
    #[serde(default = "default_color")]
    pub color: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            log_filter: default_log_filter(),
            log_json: false,
            bar_cells: default_bar_cells(),
            color: default_color(),
        }
    }
}

impl Settings {
    pub fn render_style(&self) -> RenderStyle {
        RenderStyle {
            bar_cells: self.bar_cells.max(1),
            color: self.color,
        }
    }
}

fn default_log_filter() -> String {
    "warn".to_string()
}

fn default_bar_cells() -> usize {
    RenderStyle::default().bar_cells
}

fn default_color() -> bool {
    true
}

fn config_dir() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("edsim"))
}

pub fn settings_path() -> eyre::Result<PathBuf> {
    Ok(config_dir()?.join("settings.json"))
}

/// Load settings from the default location, falling back to defaults when
/// no file exists.
pub fn load_settings() -> eyre::Result<Settings> {
    let path = settings_path()?;
    if !path.exists() {
        return Ok(Settings::default());
    }
    load_settings_from(&path)
}

/// Load and migrate a settings file. A file written by an older version is
/// re-saved at the current version.
pub fn load_settings_from(path: &Path) -> eyre::Result<Settings> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read settings at {}: {e}", path.display()))?;

    let (settings, on_disk_version) = parse_settings(&contents)?;
    if on_disk_version < CURRENT_VERSION {
        save_settings_to(path, &settings)?;
    }
    Ok(settings)
}

/// Parse raw JSON, running migrations before deserializing. Returns the
/// settings and the version found on disk.
pub fn parse_settings(contents: &str) -> eyre::Result<(Settings, u32)> {
    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(contents)?;
    let on_disk_version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .unwrap_or(0) as u32;

    let migrated = migrate(json, on_disk_version)?;
    let settings: Settings = serde_json::from_value(migrated)?;
    Ok((settings, on_disk_version))
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION}). \
             Please update edsim."
        ));
    }

    // v0 -> v1: `no_color` became `color`
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| eyre::eyre!("settings file is not a JSON object"))?;
        if let Some(no_color) = obj.remove("no_color").and_then(|v| v.as_bool()) {
            obj.insert("color".to_string(), serde_json::Value::Bool(!no_color));
        }
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("migrated settings v0 -> v1 (no_color -> color)");
    }

    Ok(json)
}

pub fn save_settings_to(path: &Path, settings: &Settings) -> eyre::Result<()> {
    let dir = path
        .parent()
        .ok_or_else(|| eyre::eyre!("settings path has no parent: {}", path.display()))?;
    std::fs::create_dir_all(dir)?;

    // Always write the current version, regardless of what was loaded.
    let mut stamped = settings.clone();
    stamped.config_version = CURRENT_VERSION;

    let json = serde_json::to_string_pretty(&stamped)?;

    // Write to a temp file then rename for atomicity
    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;
    std::fs::rename(&tmp_path, path)?;

    tracing::info!(path = %path.display(), "settings saved");
    Ok(())
}
