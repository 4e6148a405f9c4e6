// src/cli.rs

//! CLI argument parsing using `clap`.
//!
//! NOTE: this expects `clap` to be built with the `derive` feature, e.g.:
//! `clap = { version = "4.5.53", features = ["derive"] }` in `Cargo.toml`.

use clap::{Parser, ValueEnum};

use crate::watch::FilterSpec;

/// Command-line arguments for `watchnpm`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "watchnpm",
    version,
    about = "Watch a project tree and run npm commands on change or on HTTP demand.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the config file (TOML).
    ///
    /// Default: `Watchnpm.toml` in the current working directory.
    #[arg(long, value_name = "PATH", default_value = "Watchnpm.toml")]
    pub config: String,

    /// Do not start the filesystem listener (the HTTP control surface
    /// still runs).
    #[arg(long)]
    pub no_watch: bool,

    /// Also start a live server. Requires live-server to be installed in
    /// the nodejs global namespace.
    #[arg(long)]
    pub live_server: bool,

    /// Comma-separated extensions (".js" style) to include in watching.
    /// Tokens not starting with '.' are ignored.
    #[arg(
        short = 'i',
        long,
        value_name = "LIST",
        default_value = ".css,.html,.js,.jsx"
    )]
    pub include: String,

    /// Comma-separated extensions (".pdf" style) or folder names to
    /// exclude from watching.
    #[arg(
        short = 'e',
        long,
        value_name = "LIST",
        default_value = ".pdf,.tex,doc,bin,common,node_modules,build"
    )]
    pub exclude: String,

    /// Comma-separated regexes for files to exclude. Should not contain ','.
    #[arg(long, value_name = "LIST", default_value = "#,~,.git")]
    pub exclude_filters: String,

    /// Comma-separated specific files to exclude from watching.
    #[arg(long, value_name = "LIST", default_value = "")]
    pub exclude_files: String,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `WATCHNPM_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

impl CliArgs {
    /// Split the list options into raw filter rules.
    ///
    /// Include tokens only count when they carry the extension marker
    /// (leading '.'); exclude tokens are routed by the same marker into
    /// extensions vs folder names. Filter regexes and file substrings pass
    /// through untouched.
    pub fn filter_spec(&self) -> FilterSpec {
        let included_extensions = split_list(&self.include)
            .into_iter()
            .filter(|token| token.starts_with('.'))
            .collect();

        let (excluded_extensions, excluded_folders): (Vec<String>, Vec<String>) =
            split_list(&self.exclude)
                .into_iter()
                .partition(|token| token.starts_with('.'));

        FilterSpec {
            included_extensions,
            excluded_extensions,
            excluded_folders,
            excluded_files: split_list(&self.exclude_files),
            excluded_patterns: split_list(&self.exclude_filters),
        }
    }
}

fn split_list(s: &str) -> Vec<String> {
    s.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(String::from)
        .collect()
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
