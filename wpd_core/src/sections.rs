use derive_more::Deref;
use regex::Regex;
use serde::Serialize;
use serde::Serializer;
use serde::ser::SerializeMap;

use crate::WpdError;
use crate::WpdResult;

/// A line holding a title wrapped in exactly two equals signs on each side,
/// e.g. `== Installation ==`.
const SECTION_DELIMITER: &str = r"(?m)^\s*==([^=]+)==\s*$";

/// One `== Title ==` block of a readme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
	pub title: String,
	pub body: String,
}

/// Readme sections in order of first appearance.
///
/// Titles are unique: inserting an existing title replaces its body in place.
/// Serializes as a JSON object keyed by title.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deref)]
pub struct Sections(Vec<Section>);

impl Sections {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn insert(&mut self, title: impl Into<String>, body: impl Into<String>) {
		let title = title.into();
		let body = body.into();

		match self.0.iter_mut().find(|section| section.title == title) {
			Some(existing) => existing.body = body,
			None => self.0.push(Section { title, body }),
		}
	}

	/// Body of the section with exactly this title.
	pub fn get(&self, title: &str) -> Option<&str> {
		self.0
			.iter()
			.find(|section| section.title == title)
			.map(|section| section.body.as_str())
	}

	pub fn titles(&self) -> impl Iterator<Item = &str> {
		self.0.iter().map(|section| section.title.as_str())
	}
}

impl<T: Into<String>, B: Into<String>> FromIterator<(T, B)> for Sections {
	fn from_iter<I: IntoIterator<Item = (T, B)>>(iter: I) -> Self {
		let mut sections = Self::new();
		for (title, body) in iter {
			sections.insert(title, body);
		}
		sections
	}
}

impl Serialize for Sections {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		let mut map = serializer.serialize_map(Some(self.0.len()))?;
		for section in &self.0 {
			map.serialize_entry(&section.title, &section.body)?;
		}
		map.end()
	}
}

/// Splits a WordPress readme into its `== Title ==` sections.
#[derive(Debug, Clone)]
pub struct SectionParser {
	delimiter: Regex,
}

impl SectionParser {
	pub fn new() -> WpdResult<Self> {
		let delimiter = Regex::new(SECTION_DELIMITER).map_err(|e| {
			WpdError::InvalidPattern {
				pattern: SECTION_DELIMITER.to_string(),
				reason: e.to_string(),
			}
		})?;

		Ok(Self { delimiter })
	}

	/// Text before the first delimiter (the readme header block) is discarded.
	/// Each body runs from the end of its delimiter line to the start of the
	/// next delimiter, or to the end of the readme.
	pub fn parse(&self, readme: &str) -> Sections {
		let mut sections = Sections::new();
		let delimiters: Vec<_> = self.delimiter.captures_iter(readme).collect();

		for (index, captures) in delimiters.iter().enumerate() {
			let (Some(whole), Some(title)) = (captures.get(0), captures.get(1)) else {
				continue;
			};

			let body_end = delimiters
				.get(index + 1)
				.and_then(|next| next.get(0))
				.map_or(readme.len(), |next| next.start());

			sections.insert(title.as_str().trim(), readme[whole.end()..body_end].trim());
		}

		tracing::debug!(count = sections.len(), "parsed readme sections");
		sections
	}
}

/// Parse `readme` into sections. An empty readme yields no sections.
pub fn parse_sections(readme: &str) -> WpdResult<Sections> {
	Ok(SectionParser::new()?.parse(readme))
}
