use std::fmt;
use std::fmt::Write;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;
use chrono::format::Item;
use chrono::format::StrftimeItems;

use crate::WpdError;
use crate::WpdResult;

/// RFC 7231 `IMF-fixdate`, e.g. `Sun, 06 Nov 1994 08:49:37 GMT`.
pub const DEFAULT_DATE_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";

/// A validated strftime format used to render `last_updated`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateFormat(String);

impl DateFormat {
	/// Rejects formats containing unknown `%` specifiers.
	pub fn parse(format: &str) -> WpdResult<Self> {
		if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
			return Err(WpdError::InvalidDateFormat(format.to_string()));
		}

		Ok(Self(format.to_string()))
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// Render `instant` in UTC.
	pub fn render(&self, instant: DateTime<Utc>) -> WpdResult<String> {
		let mut rendered = String::new();
		write!(rendered, "{}", instant.format(&self.0))
			.map_err(|_| WpdError::InvalidDateFormat(self.0.clone()))?;

		Ok(rendered)
	}
}

impl Default for DateFormat {
	fn default() -> Self {
		Self(DEFAULT_DATE_FORMAT.to_string())
	}
}

impl FromStr for DateFormat {
	type Err = WpdError;

	fn from_str(format: &str) -> Result<Self, Self::Err> {
		Self::parse(format)
	}
}

impl fmt::Display for DateFormat {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}
