//! `wpd_core` is the core library for the wpd package-details generator. It
//! reads the header comment of a WordPress plugin or theme, splits an
//! optional `readme.txt` into its sections, and merges both into the JSON
//! document an update server hands to WordPress sites checking for new
//! releases.
//!
//! ## Processing Pipeline
//!
//! ```text
//! plugin.php / style.css + readme.txt
//!   → SourceFile (loads inputs, fails fast on missing files)
//!   → HeaderExtractor (finds `Label: value` header lines)
//!   → SectionParser (splits the readme on `== Title ==` lines)
//!   → DetailsGenerator (merges headers, slug, timestamp, url, and variant data)
//!   → PackageDetails (drops empty fields, encodes JSON)
//! ```
//!
//! ## Modules
//!
//! - [`config`] — Optional project defaults loaded from `wpd.toml`.
//!
//! ## Key Types
//!
//! - [`DetailsGenerator`] — Builds and caches the details document for one package.
//! - [`Plugin`] / [`Theme`] — The [`PackageVariant`] strategies for each package type.
//! - [`PackageDetails`] — The generated document.
//! - [`Sections`] — Readme sections in order of appearance.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use wpd_core::DetailsGenerator;
//! use wpd_core::DownloadUrl;
//! use wpd_core::Plugin;
//! use wpd_core::SourceFile;
//!
//! let source = SourceFile::open("my-plugin/my-plugin.php").unwrap();
//! let readme = SourceFile::open("my-plugin/readme.txt").unwrap();
//! let url = DownloadUrl::parse("https://example.org/my-plugin.zip").unwrap();
//!
//! let generator = DetailsGenerator::new(source, Plugin)
//! 	.with_readme(readme)
//! 	.with_download_url(url);
//!
//! std::fs::write("package-details.json", generator.to_json(true).unwrap()).unwrap();
//! ```

pub use details::*;
pub use error::*;
pub use header::*;
pub use sections::*;
pub use source::*;
pub use timestamp::*;
pub use variant::*;

pub mod config;
mod details;
#[allow(unused_assignments)]
mod error;
mod header;
mod sections;
mod source;
mod timestamp;
mod variant;
