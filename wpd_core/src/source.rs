use std::fmt;
use std::path::Path;
use std::path::PathBuf;
use std::str::FromStr;

use url::Url;

use crate::WpdError;
use crate::WpdResult;

/// A plugin or theme source file (or a readme) loaded fully into memory.
///
/// The contents are read once when the value is constructed and never change
/// afterwards. Bytes that are not valid UTF-8 are replaced rather than
/// rejected, since header comments in older plugins are frequently saved in a
/// legacy encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
	path: PathBuf,
	contents: String,
}

impl SourceFile {
	/// Read the file at `path`.
	///
	/// Fails with [`WpdError::InvalidPath`] when nothing readable exists at the
	/// path, before any extraction work can start.
	pub fn open(path: impl AsRef<Path>) -> WpdResult<Self> {
		let path = path.as_ref();

		if !path.is_file() {
			return Err(WpdError::InvalidPath {
				path: path.display().to_string(),
			});
		}

		let bytes = std::fs::read(path)?;
		let contents = String::from_utf8_lossy(&bytes).into_owned();
		tracing::debug!(path = %path.display(), bytes = bytes.len(), "loaded input file");

		Ok(Self {
			path: path.to_path_buf(),
			contents,
		})
	}

	/// Build a source file from contents that are already in memory. The path
	/// is only used to derive the base name.
	pub fn from_contents(path: impl Into<PathBuf>, contents: impl Into<String>) -> Self {
		Self {
			path: path.into(),
			contents: contents.into(),
		}
	}

	pub fn path(&self) -> &Path {
		&self.path
	}

	pub fn contents(&self) -> &str {
		&self.contents
	}

	/// The file name with its final extension removed, e.g. `my-plugin` for
	/// `src/my-plugin.php`.
	pub fn base_name(&self) -> String {
		self.path
			.file_stem()
			.map(|stem| stem.to_string_lossy().into_owned())
			.unwrap_or_default()
	}
}

/// A validated link to the package archive.
///
/// The url is checked for well-formedness on construction but is kept exactly
/// as written, so `to_string()` returns the original text.
/// Schemes that are accepted without a host.
const HOSTLESS_SCHEMES: &[&str] = &["mailto", "news", "file"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadUrl(String);

impl DownloadUrl {
	pub fn parse(value: &str) -> WpdResult<Self> {
		let parsed = Url::parse(value).map_err(|e| {
			WpdError::InvalidUrl {
				url: value.to_string(),
				reason: e.to_string(),
			}
		})?;

		if !parsed.has_host() && !HOSTLESS_SCHEMES.contains(&parsed.scheme()) {
			return Err(WpdError::InvalidUrl {
				url: value.to_string(),
				reason: "url has no host".to_string(),
			});
		}

		Ok(Self(value.to_string()))
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl FromStr for DownloadUrl {
	type Err = WpdError;

	fn from_str(value: &str) -> Result<Self, Self::Err> {
		Self::parse(value)
	}
}

impl fmt::Display for DownloadUrl {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}
