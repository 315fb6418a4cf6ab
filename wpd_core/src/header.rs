use regex::Regex;
use regex::RegexBuilder;

use crate::WpdError;
use crate::WpdResult;

/// Characters that may precede a header label on its line: indentation and
/// the comment markers used by php and css file headers.
const HEADER_PREFIX: &str = r"^[ \t/*#@]*";

/// Extracts the value of one `Label: value` header from a plugin or theme file.
///
/// Matching follows WordPress' `get_file_data()` conventions: the label is
/// matched case-insensitively at the start of any line, optionally preceded
/// by comment-marker noise, and the first matching line wins.
///
/// ```rust
/// use wpd_core::HeaderExtractor;
///
/// let extractor = HeaderExtractor::new("Plugin Name")?;
/// let source = "<?php\n/**\n * Plugin Name: My Plugin\n */";
/// assert_eq!(extractor.extract(source), "My Plugin");
/// # Ok::<(), wpd_core::WpdError>(())
/// ```
#[derive(Debug, Clone)]
pub struct HeaderExtractor {
	label: String,
	pattern: Regex,
}

impl HeaderExtractor {
	pub fn new(label: &str) -> WpdResult<Self> {
		let source = format!(r"{HEADER_PREFIX}{}:(.*)$", regex::escape(label));
		let pattern = RegexBuilder::new(&source)
			.case_insensitive(true)
			.multi_line(true)
			.build()
			.map_err(|e| {
				WpdError::InvalidPattern {
					pattern: source.clone(),
					reason: e.to_string(),
				}
			})?;

		Ok(Self {
			label: label.to_string(),
			pattern,
		})
	}

	pub fn label(&self) -> &str {
		&self.label
	}

	/// Returns the trimmed header value, or an empty string when the header is
	/// not declared.
	pub fn extract(&self, source: &str) -> String {
		self.pattern
			.captures(source)
			.and_then(|captures| captures.get(1))
			.map(|value| value.as_str().trim().to_string())
			.unwrap_or_default()
	}
}

/// Extract a single header value from `source`.
pub fn extract_header(source: &str, label: &str) -> WpdResult<String> {
	Ok(HeaderExtractor::new(label)?.extract(source))
}
