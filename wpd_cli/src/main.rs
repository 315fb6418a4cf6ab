use std::path::Path;
use std::path::PathBuf;
use std::process;

use clap::CommandFactory;
use clap::Parser;
use owo_colors::OwoColorize;
use tracing_subscriber::EnvFilter;
use wpd_cli::Commands;
use wpd_cli::DetailsOptions;
use wpd_cli::WpdCli;
use wpd_cli::clap_exit_code;
use wpd_cli::error_exit_code;
use wpd_core::DetailsGenerator;
use wpd_core::PackageVariant;
use wpd_core::Plugin;
use wpd_core::SourceFile;
use wpd_core::Theme;
use wpd_core::WpdResult;
use wpd_core::config::DEFAULT_OUTPUT_FILE;
use wpd_core::config::WpdConfig;

static USE_COLOR: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(true);

fn color_enabled() -> bool {
	USE_COLOR.load(std::sync::atomic::Ordering::Relaxed)
}

/// Apply ANSI color codes only when color is enabled.
macro_rules! colored {
	($text:expr,green) => {
		if color_enabled() {
			format!("{}", $text.green())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,bold) => {
		if color_enabled() {
			format!("{}", $text.bold())
		} else {
			format!("{}", $text)
		}
	};
}

fn main() {
	let args = match WpdCli::try_parse() {
		Ok(args) => args,
		Err(error) => {
			let code = clap_exit_code(error.kind());
			error.print().ok();
			process::exit(code);
		}
	};

	// Respect NO_COLOR env var and --no-color flag.
	let use_color = !args.no_color && std::env::var_os("NO_COLOR").is_none();
	if !use_color {
		USE_COLOR.store(false, std::sync::atomic::Ordering::Relaxed);
	}

	init_tracing(args.verbose, use_color);

	// Install miette's fancy handler for rich error diagnostics.
	miette::set_hook(Box::new(move |_| {
		Box::new(
			miette::MietteHandlerOpts::new()
				.color(use_color)
				.unicode(use_color)
				.build(),
		)
	}))
	.ok();

	let Some(command) = args.command else {
		WpdCli::command().print_help().ok();
		return;
	};

	if let Err(e) = run(command) {
		let code = error_exit_code(&e);
		let report: miette::Report = e.into();
		eprintln!("{report:?}");
		process::exit(code);
	}
}

fn init_tracing(verbose: bool, use_color: bool) {
	let default_directive = if verbose { "debug" } else { "warn" };
	let filter =
		EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_ansi(use_color)
		.with_target(false)
		.without_time()
		.try_init()
		.ok();
}

fn run(command: Commands) -> WpdResult<()> {
	let root = std::env::current_dir()?;
	let config = WpdConfig::load(&root)?.unwrap_or_default();

	match command {
		Commands::Plugin {
			source,
			output,
			options,
		} => generate(Plugin, &source, output, &options, &config),
		Commands::Theme {
			source,
			slug,
			output,
			options,
		} => generate(Theme::with_slug(slug), &source, output, &options, &config),
	}
}

fn generate<V: PackageVariant>(
	variant: V,
	source: &Path,
	output: Option<PathBuf>,
	options: &DetailsOptions,
	config: &WpdConfig,
) -> WpdResult<()> {
	// Validate everything before touching the inputs.
	let date_format = match &options.date_format {
		Some(date_format) => date_format.clone(),
		None => config.date_format()?.unwrap_or_default(),
	};
	let pretty_print = options.pretty_print || config.pretty_print.unwrap_or(false);
	let output = output
		.or_else(|| config.output.clone())
		.unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_FILE));

	let source = SourceFile::open(source)?;
	let readme = options
		.readme
		.as_deref()
		.map(SourceFile::open)
		.transpose()?;

	let generator = DetailsGenerator::new(source, variant)
		.with_readme(readme)
		.with_download_url(options.download_url.clone())
		.with_date_format(date_format);
	let json = generator.to_json(pretty_print)?;

	println!("Writing file to {}", colored!(output.display(), bold));
	write_output(&output, &json)?;
	println!(
		"{} {} field(s) written",
		colored!("done:", green),
		generator.details()?.len()
	);

	Ok(())
}

/// Write `contents` to `path`, creating parent directories as needed.
fn write_output(path: &Path, contents: &str) -> WpdResult<()> {
	let missing_parent = path
		.parent()
		.filter(|parent| !parent.as_os_str().is_empty() && !parent.is_dir());

	if let Some(parent) = missing_parent {
		std::fs::create_dir_all(parent)?;
		tracing::debug!(path = %parent.display(), "created output directory");
	}

	std::fs::write(path, contents)?;
	Ok(())
}
