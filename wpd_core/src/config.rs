use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;

use crate::DateFormat;
use crate::WpdError;
use crate::WpdResult;

/// Default output path, relative to the working directory.
pub const DEFAULT_OUTPUT_FILE: &str = "package-details.json";

/// Supported config file locations in discovery order (highest precedence
/// first).
pub const CONFIG_FILE_CANDIDATES: [&str; 3] = ["wpd.toml", ".wpd.toml", ".config/wpd.toml"];

/// Project defaults loaded from a `wpd.toml` file. Command-line arguments take
/// precedence over every value here.
///
/// ```toml
/// date_format = "%Y-%m-%d %H:%M:%S"
/// pretty_print = true
/// output = "dist/package-details.json"
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct WpdConfig {
	/// strftime format for `last_updated`.
	#[serde(default)]
	pub date_format: Option<String>,
	/// Indent the generated JSON.
	#[serde(default)]
	pub pretty_print: Option<bool>,
	/// Output path, relative to the config root.
	#[serde(default)]
	pub output: Option<PathBuf>,
}

impl WpdConfig {
	/// Resolve the config path from known discovery candidates.
	#[must_use]
	pub fn resolve_path(root: &Path) -> Option<PathBuf> {
		CONFIG_FILE_CANDIDATES
			.iter()
			.map(|candidate| root.join(candidate))
			.find(|path| path.is_file())
	}

	/// Load the config from the first discovered config file at `root`.
	/// Returns `None` if no config file exists.
	pub fn load(root: &Path) -> WpdResult<Option<WpdConfig>> {
		let Some(config_path) = Self::resolve_path(root) else {
			return Ok(None);
		};

		let content = std::fs::read_to_string(&config_path)?;
		let config: WpdConfig =
			toml::from_str(&content).map_err(|e| WpdError::ConfigParse(e.to_string()))?;
		tracing::debug!(path = %config_path.display(), "loaded config");

		Ok(Some(config))
	}

	/// The configured date format, validated.
	pub fn date_format(&self) -> WpdResult<Option<DateFormat>> {
		self.date_format.as_deref().map(DateFormat::parse).transpose()
	}
}
