use std::cell::OnceCell;

use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;
use serde::Serializer;
use serde::ser::SerializeMap;

use crate::DateFormat;
use crate::DownloadUrl;
use crate::HeaderExtractor;
use crate::PackageVariant;
use crate::SectionParser;
use crate::Sections;
use crate::SourceFile;
use crate::WpdResult;

/// A single value in a details document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum DetailValue {
	Text(String),
	Sections(Sections),
}

impl DetailValue {
	pub fn is_empty(&self) -> bool {
		match self {
			Self::Text(text) => text.is_empty(),
			Self::Sections(sections) => sections.is_empty(),
		}
	}

	pub fn as_str(&self) -> Option<&str> {
		match self {
			Self::Text(text) => Some(text),
			Self::Sections(_) => None,
		}
	}

	pub fn as_sections(&self) -> Option<&Sections> {
		match self {
			Self::Text(_) => None,
			Self::Sections(sections) => Some(sections),
		}
	}
}

impl From<String> for DetailValue {
	fn from(value: String) -> Self {
		Self::Text(value)
	}
}

impl From<&str> for DetailValue {
	fn from(value: &str) -> Self {
		Self::Text(value.to_string())
	}
}

impl From<Sections> for DetailValue {
	fn from(value: Sections) -> Self {
		Self::Sections(value)
	}
}

/// The package-details document served to the update checker.
///
/// Fields keep the order in which they were first set. Fields with empty
/// values never appear in a document returned by [`DetailsGenerator`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageDetails {
	fields: Vec<(String, DetailValue)>,
}

impl PackageDetails {
	/// Set `key`, replacing any earlier value in place.
	pub fn insert(&mut self, key: impl Into<String>, value: impl Into<DetailValue>) {
		let key = key.into();
		let value = value.into();

		match self.fields.iter_mut().find(|(existing, _)| *existing == key) {
			Some((_, existing)) => *existing = value,
			None => self.fields.push((key, value)),
		}
	}

	pub fn get(&self, key: &str) -> Option<&DetailValue> {
		self.fields
			.iter()
			.find(|(existing, _)| existing == key)
			.map(|(_, value)| value)
	}

	pub fn get_str(&self, key: &str) -> Option<&str> {
		self.get(key).and_then(DetailValue::as_str)
	}

	pub fn sections(&self) -> Option<&Sections> {
		self.get("sections").and_then(DetailValue::as_sections)
	}

	pub fn contains_key(&self, key: &str) -> bool {
		self.get(key).is_some()
	}

	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.fields.iter().map(|(key, _)| key.as_str())
	}

	pub fn len(&self) -> usize {
		self.fields.len()
	}

	pub fn is_empty(&self) -> bool {
		self.fields.is_empty()
	}

	/// Drop every field whose value is empty.
	pub fn without_empty(mut self) -> Self {
		self.fields.retain(|(_, value)| !value.is_empty());
		self
	}

	/// Encode as JSON, indented when `pretty` is set and compact otherwise.
	pub fn to_json(&self, pretty: bool) -> WpdResult<String> {
		let json = if pretty {
			serde_json::to_string_pretty(self)?
		} else {
			serde_json::to_string(self)?
		};

		Ok(json)
	}
}

impl Serialize for PackageDetails {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		let mut map = serializer.serialize_map(Some(self.fields.len()))?;
		for (key, value) in &self.fields {
			map.serialize_entry(key, value)?;
		}
		map.end()
	}
}

/// Builds the details document for one package.
///
/// The document is computed on the first call to [`details`](Self::details)
/// and cached for the lifetime of the generator, so repeated calls return the
/// same document with the same `last_updated` timestamp.
///
/// ```rust
/// use wpd_core::DetailsGenerator;
/// use wpd_core::Plugin;
/// use wpd_core::SourceFile;
///
/// let source = SourceFile::from_contents("my-plugin.php", "Plugin Name: My Plugin\nVersion: 1.0.0");
/// let generator = DetailsGenerator::new(source, Plugin);
/// let details = generator.details()?;
///
/// assert_eq!(details.get_str("name"), Some("My Plugin"));
/// assert_eq!(details.get_str("slug"), Some("my-plugin"));
/// assert!(!details.contains_key("sections"));
/// # Ok::<(), wpd_core::WpdError>(())
/// ```
#[derive(Debug)]
pub struct DetailsGenerator<V> {
	source: SourceFile,
	readme: Option<SourceFile>,
	url: Option<DownloadUrl>,
	date_format: DateFormat,
	now: Option<DateTime<Utc>>,
	variant: V,
	details: OnceCell<PackageDetails>,
}

impl<V: PackageVariant> DetailsGenerator<V> {
	pub fn new(source: SourceFile, variant: V) -> Self {
		Self {
			source,
			readme: None,
			url: None,
			date_format: DateFormat::default(),
			now: None,
			variant,
			details: OnceCell::new(),
		}
	}

	#[must_use]
	pub fn with_readme(mut self, readme: impl Into<Option<SourceFile>>) -> Self {
		self.readme = readme.into();
		self.details = OnceCell::new();
		self
	}

	#[must_use]
	pub fn with_download_url(mut self, url: impl Into<Option<DownloadUrl>>) -> Self {
		self.url = url.into();
		self.details = OnceCell::new();
		self
	}

	#[must_use]
	pub fn with_date_format(mut self, date_format: DateFormat) -> Self {
		self.date_format = date_format;
		self.details = OnceCell::new();
		self
	}

	/// Pin `last_updated` to a fixed instant instead of the time of the first
	/// [`details`](Self::details) call.
	#[must_use]
	pub fn at(mut self, now: DateTime<Utc>) -> Self {
		self.now = Some(now);
		self.details = OnceCell::new();
		self
	}

	pub fn variant(&self) -> &V {
		&self.variant
	}

	pub fn details(&self) -> WpdResult<&PackageDetails> {
		if let Some(details) = self.details.get() {
			return Ok(details);
		}

		let details = self.build()?;
		Ok(self.details.get_or_init(|| details))
	}

	pub fn to_json(&self, pretty: bool) -> WpdResult<String> {
		self.details()?.to_json(pretty)
	}

	fn build(&self) -> WpdResult<PackageDetails> {
		let source = self.source.contents();
		let mut details = PackageDetails::default();

		for (key, label) in self.variant.header_map() {
			let value = HeaderExtractor::new(label)?.extract(source);
			tracing::trace!(key, label, value = value.as_str(), "extracted header");
			details.insert(*key, value);
		}

		details.insert(
			"slug",
			self.variant.slug(&self.source).unwrap_or_default(),
		);

		let now = self.now.unwrap_or_else(Utc::now);
		details.insert("last_updated", self.date_format.render(now)?);

		if let Some(url) = &self.url {
			details.insert("download_link", url.to_string());
		}

		let sections = match &self.readme {
			Some(readme) => SectionParser::new()?.parse(readme.contents()),
			None => Sections::new(),
		};

		for (key, value) in self.variant.additional_data(sections) {
			details.insert(key, value);
		}

		let details = details.without_empty();
		tracing::debug!(
			kind = self.variant.kind(),
			source = %self.source.path().display(),
			fields = details.len(),
			"generated package details"
		);

		Ok(details)
	}
}
