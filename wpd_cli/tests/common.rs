#![allow(dead_code)]

use std::path::Path;

use assert_cmd::Command;
use insta_cmd::get_cargo_bin;
use serde_json::Value;
use wpd_core::AnyResult;

pub const PLUGIN_SOURCE: &str = "<?php
/**
 * Plugin Name:       My Plugin
 * Plugin URI:        https://www.example.org/my-plugin
 * Version:           1.0.0
 * Requires at least: 5.4
 * Requires PHP:      7.4
 * Author:            questionmuppet
 * Author URI:        https://www.example.org/questionmuppet
 */
";

pub const PLUGIN_README: &str = "=== My Plugin ===
Stable tag: 1.0.0

== Description ==

Here is a description of this nifty plugin.

== Installation ==

1. Upload the plugin
2. Activate the plugin
";

pub const THEME_SOURCE: &str = "/*
Theme Name: My Theme
Theme URI: https://www.example.org/my-theme
Version: 2.1
Requires at least: 6.0
Requires PHP: 8.0
*/
";

pub const THEME_README: &str = "=== My Theme ===

== Description ==

A clean theme.
";

/// A `wpd` command running inside `dir`.
pub fn wpd_cmd(dir: &Path) -> Command {
	let mut cmd = Command::new(get_cargo_bin("wpd"));
	cmd.env("NO_COLOR", "1");
	cmd.env_remove("RUST_LOG");
	cmd.current_dir(dir);
	cmd
}

pub fn read_json(path: &Path) -> AnyResult<Value> {
	let contents = std::fs::read_to_string(path)?;
	Ok(serde_json::from_str(&contents)?)
}

pub fn write_plugin(dir: &Path) -> AnyResult<()> {
	std::fs::write(dir.join("my-plugin.php"), PLUGIN_SOURCE)?;
	std::fs::write(dir.join("readme.txt"), PLUGIN_README)?;
	Ok(())
}

pub fn write_theme(dir: &Path) -> AnyResult<()> {
	std::fs::write(dir.join("style.css"), THEME_SOURCE)?;
	std::fs::write(dir.join("readme.txt"), THEME_README)?;
	Ok(())
}
