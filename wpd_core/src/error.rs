use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Diagnostic, Error)]
#[non_exhaustive]
pub enum WpdError {
	#[error(transparent)]
	#[diagnostic(code(wpd::io_error))]
	Io(#[from] std::io::Error),

	#[error("no file found at path `{path}`")]
	#[diagnostic(
		code(wpd::invalid_path),
		help("check that the path exists, points to a file, and is readable")
	)]
	InvalidPath { path: String },

	#[error("invalid url `{url}`: {reason}")]
	#[diagnostic(
		code(wpd::invalid_url),
		help("provide an absolute url such as `https://example.org/my-plugin.zip`")
	)]
	InvalidUrl { url: String, reason: String },

	#[error("invalid date format: `{0}`")]
	#[diagnostic(
		code(wpd::invalid_date_format),
		help("use strftime specifiers, e.g. `%a, %d %b %Y %H:%M:%S GMT`")
	)]
	InvalidDateFormat(String),

	#[error("failed to compile pattern `{pattern}`: {reason}")]
	#[diagnostic(code(wpd::invalid_pattern))]
	InvalidPattern { pattern: String, reason: String },

	#[error("failed to serialize package details: {0}")]
	#[diagnostic(code(wpd::json))]
	Json(#[from] serde_json::Error),

	#[error("failed to parse config file: {0}")]
	#[diagnostic(
		code(wpd::config_parse),
		help("check that wpd.toml is valid TOML with `date_format`, `pretty_print`, or `output` keys")
	)]
	ConfigParse(String),
}

impl WpdError {
	/// Whether the error was caused by an input the user supplied (a path, a
	/// url, or a format) rather than by the environment.
	pub fn is_invalid_input(&self) -> bool {
		matches!(
			self,
			Self::InvalidPath { .. }
				| Self::InvalidUrl { .. }
				| Self::InvalidDateFormat(_)
				| Self::ConfigParse(_)
		)
	}
}

pub type WpdResult<T> = Result<T, WpdError>;
pub type AnyError = Box<dyn std::error::Error>;
pub type AnyEmptyResult = Result<(), AnyError>;
pub type AnyResult<T> = Result<T, AnyError>;
