use std::path::PathBuf;

use clap::Args;
use clap::Parser;
use clap::Subcommand;
use clap::error::ErrorKind;
use wpd_core::DateFormat;
use wpd_core::DownloadUrl;
use wpd_core::WpdError;

/// Exit code for malformed command lines: unknown flags, missing operands.
pub const EXIT_SYNTAX_ERROR: i32 = 1;
/// Exit code for well-formed arguments with unusable values: missing files,
/// malformed urls, bad date formats.
pub const EXIT_INVALID_ARGUMENT: i32 = 2;
/// Exit code for failures unrelated to the arguments, e.g. an unwritable
/// output path.
pub const EXIT_RUNTIME_ERROR: i32 = 3;

#[derive(Parser)]
#[command(
	author,
	version,
	about = "Create a package-details file in JSON format from WordPress plugin and theme files.",
	long_about = "wpd reads the header comment of a WordPress plugin or theme, the sections of \
	              an optional readme.txt, and an optional download url, and writes the \
	              package-details JSON document served by a self-hosted update \
	              server.\n\nQuick start:\n  wpd plugin my-plugin.php -r readme.txt -u \
	              https://example.org/my-plugin.zip\n  wpd theme style.css my-theme -r readme.txt"
)]
pub struct WpdCli {
	#[command(subcommand)]
	pub command: Option<Commands>,

	/// Enable verbose output.
	#[arg(long, short, global = true, default_value_t = false)]
	pub verbose: bool,

	/// Disable colored output.
	#[arg(long, global = true, default_value_t = false)]
	pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
	/// Create a package-details file for a plugin release.
	///
	/// Headers are read from the main plugin file and the slug is taken from
	/// its file name. Sections from the readme and the download url are
	/// included when provided.
	Plugin {
		/// Main plugin file to extract headers from, usually
		/// `plugin-name.php`.
		#[arg(value_name = "SOURCE_FILE", value_parser = parse_readable_file)]
		source: PathBuf,

		/// Path to the output file. Defaults to `package-details.json`.
		#[arg(value_name = "OUTPUT_FILE")]
		output: Option<PathBuf>,

		#[command(flatten)]
		options: DetailsOptions,
	},
	/// Create a package-details file for a theme release.
	///
	/// Headers are read from the theme stylesheet. The slug must be provided
	/// explicitly. The readme's `Description` section becomes the
	/// `description` field.
	Theme {
		/// Theme stylesheet to extract headers from, usually `style.css`.
		#[arg(value_name = "SOURCE_FILE", value_parser = parse_readable_file)]
		source: PathBuf,

		/// Unique slug of the theme, usually its directory name.
		#[arg(value_name = "SLUG")]
		slug: String,

		/// Path to the output file. Defaults to `package-details.json`.
		#[arg(value_name = "OUTPUT_FILE")]
		output: Option<PathBuf>,

		#[command(flatten)]
		options: DetailsOptions,
	},
}

/// Options shared by every package type.
#[derive(Debug, Clone, Args)]
pub struct DetailsOptions {
	/// Readme file following the WordPress readme standard. Used to generate
	/// the `sections` (plugins) or `description` (themes) field.
	#[arg(long, short, value_name = "README_FILE", value_parser = parse_readable_file)]
	pub readme: Option<PathBuf>,

	/// Url of the package archive. Used for the `download_link` field.
	#[arg(long, short = 'u', value_name = "URL")]
	pub download_url: Option<DownloadUrl>,

	/// Prettify the JSON formatting in the output file.
	#[arg(long, short, default_value_t = false)]
	pub pretty_print: bool,

	/// strftime format for the `last_updated` field. Defaults to the RFC 7231
	/// form, e.g. `Sun, 06 Nov 1994 08:49:37 GMT`.
	#[arg(long, value_name = "FORMAT")]
	pub date_format: Option<DateFormat>,
}

fn parse_readable_file(value: &str) -> Result<PathBuf, String> {
	let path = PathBuf::from(value);
	if path.is_file() {
		Ok(path)
	} else {
		Err(format!("file `{value}` does not exist or cannot be read"))
	}
}

/// Map a command-line parse failure onto the exit-code convention. Help and
/// version requests exit successfully.
pub fn clap_exit_code(kind: ErrorKind) -> i32 {
	match kind {
		ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
		ErrorKind::ValueValidation | ErrorKind::InvalidUtf8 => EXIT_INVALID_ARGUMENT,
		_ => EXIT_SYNTAX_ERROR,
	}
}

/// Exit code for an error raised while generating the details file.
pub fn error_exit_code(error: &WpdError) -> i32 {
	if error.is_invalid_input() {
		EXIT_INVALID_ARGUMENT
	} else {
		EXIT_RUNTIME_ERROR
	}
}
