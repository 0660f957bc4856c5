//! ltport CLI — resolve and inspect layout-test ports.

mod commands;
mod config;

use std::process;

use clap::{Parser, Subcommand};

use commands::resolve::Format;
use config::{LtportConfig, Overrides};
use ltport::PlatformId;

#[derive(Parser)]
#[command(name = "ltport", version, about = "Layout-test port resolution")]
struct Cli {
    /// Log more (repeat for trace output). RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a port and describe it
    Resolve {
        /// Explicit port name (e.g., mac, chromium-win-xp, dryrun-test)
        #[arg(long)]
        port: Option<String>,
        /// Platform to resolve for instead of the host (e.g., darwin, win32, cygwin, linux2)
        #[arg(long)]
        platform: Option<String>,
        /// Use the Chromium build of the platform's port
        #[arg(long, overrides_with = "no_chromium")]
        chromium: bool,
        /// Use the engine-only port even if ltport.toml sets a flavor
        #[arg(long, overrides_with = "chromium")]
        no_chromium: bool,
        /// Enable pixel tests
        #[arg(long, overrides_with = "no_pixel_tests")]
        pixel_tests: bool,
        /// Disable pixel tests even if ltport.toml enables them
        #[arg(long, overrides_with = "pixel_tests")]
        no_pixel_tests: bool,
        /// Output format (human, json)
        #[arg(long)]
        format: Option<String>,
    },
    /// List all ports
    List,
    /// Show the host platform and its default ports
    Platform,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = run(cli);
    if let Err(e) = result {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

/// Log to stderr. RUST_LOG wins; otherwise `-v` picks the level (default: warn).
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .compact()
        .try_init()
        .ok();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Resolve {
            port,
            platform,
            chromium,
            no_chromium,
            pixel_tests,
            no_pixel_tests,
            format,
        } => {
            let cwd = std::env::current_dir()?;
            let config = match LtportConfig::find_and_load(&cwd)? {
                Some((config, path)) => {
                    tracing::debug!(path = %path.display(), "loaded config");
                    config
                }
                None => LtportConfig::default(),
            };

            let effective = config.effective(Overrides {
                port,
                platform: platform.map(PlatformId::from),
                chromium: switch(chromium, no_chromium),
                pixel_tests: switch(pixel_tests, no_pixel_tests),
            });
            let format = Format::parse(format.as_deref())?;

            commands::resolve::run(
                effective.port.as_deref(),
                effective.platform.as_ref(),
                effective.options,
                format,
            )
        }

        Commands::List => commands::list::run(),

        Commands::Platform => commands::platform::run(),
    }
}

/// Fold a `--flag` / `--no-flag` pair into an override.
fn switch(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (false, true) => Some(false),
        (false, false) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn overrides(args: &[&str]) -> (Option<bool>, Option<bool>) {
        let cli = Cli::try_parse_from(["ltport", "resolve"].iter().chain(args).copied()).unwrap();
        match cli.command {
            Commands::Resolve {
                chromium,
                no_chromium,
                pixel_tests,
                no_pixel_tests,
                ..
            } => (
                switch(chromium, no_chromium),
                switch(pixel_tests, no_pixel_tests),
            ),
            _ => unreachable!(),
        }
    }

    #[test]
    fn flags_are_unset_by_default() {
        assert_eq!(overrides(&[]), (None, None));
    }

    #[test]
    fn negated_flags_override_the_file() {
        assert_eq!(
            overrides(&["--no-chromium", "--no-pixel-tests"]),
            (Some(false), Some(false))
        );
        assert_eq!(overrides(&["--chromium"]), (Some(true), None));
    }

    #[test]
    fn last_of_a_flag_pair_wins() {
        assert_eq!(overrides(&["--chromium", "--no-chromium"]).0, Some(false));
        assert_eq!(overrides(&["--no-pixel-tests", "--pixel-tests"]).1, Some(true));
    }
}
