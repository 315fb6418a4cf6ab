use crate::DetailValue;
use crate::Sections;
use crate::SourceFile;

/// Output field name paired with the header label it is read from.
pub type HeaderField = (&'static str, &'static str);

/// Plugin headers, in output order.
///
/// See <https://developer.wordpress.org/plugins/plugin-basics/header-requirements/>.
pub const PLUGIN_HEADERS: [HeaderField; 7] = [
	("version", "Version"),
	("name", "Plugin Name"),
	("requires", "Requires at least"),
	("requires_php", "Requires PHP"),
	("homepage", "Plugin URI"),
	("author", "Author"),
	("author_profile", "Author URI"),
];

/// Theme headers, in output order.
///
/// See <https://developer.wordpress.org/themes/basics/main-stylesheet-style-css/>.
pub const THEME_HEADERS: [HeaderField; 5] = [
	("name", "Theme Name"),
	("homepage", "Theme URI"),
	("version", "Version"),
	("requires", "Requires at least"),
	("requires_php", "Requires PHP"),
];

/// The package-type specific part of a details document.
pub trait PackageVariant {
	/// Short name of the package type, used in log output.
	fn kind(&self) -> &'static str;

	/// Headers to extract from the source file.
	fn header_map(&self) -> &'static [HeaderField];

	/// Unique slug for the package. `None` omits the field.
	fn slug(&self, source: &SourceFile) -> Option<String>;

	/// Fields derived from the readme sections, merged after the common fields.
	fn additional_data(&self, sections: Sections) -> Vec<(&'static str, DetailValue)>;
}

/// A plugin, slugged after its main file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Plugin;

impl PackageVariant for Plugin {
	fn kind(&self) -> &'static str {
		"plugin"
	}

	fn header_map(&self) -> &'static [HeaderField] {
		&PLUGIN_HEADERS
	}

	fn slug(&self, source: &SourceFile) -> Option<String> {
		Some(source.base_name())
	}

	fn additional_data(&self, sections: Sections) -> Vec<(&'static str, DetailValue)> {
		vec![("sections", DetailValue::Sections(sections))]
	}
}

/// A theme. Its `style.css` carries no usable name, so the slug must be
/// supplied by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Theme {
	slug: Option<String>,
}

impl Theme {
	pub fn new(slug: Option<String>) -> Self {
		Self { slug }
	}

	pub fn with_slug(slug: impl Into<String>) -> Self {
		Self {
			slug: Some(slug.into()),
		}
	}
}

impl PackageVariant for Theme {
	fn kind(&self) -> &'static str {
		"theme"
	}

	fn header_map(&self) -> &'static [HeaderField] {
		&THEME_HEADERS
	}

	fn slug(&self, _source: &SourceFile) -> Option<String> {
		self.slug.clone()
	}

	fn additional_data(&self, sections: Sections) -> Vec<(&'static str, DetailValue)> {
		let description = sections.get("Description").unwrap_or_default();
		vec![("description", DetailValue::from(description))]
	}
}
