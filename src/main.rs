// iconsmith - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. config.toml loading
// 3. Logging initialisation (debug mode support)
// 4. Dispatch to `generate` or `inspect`

use clap::{Parser, Subcommand};
use iconsmith::app::{generate, inspect};
use iconsmith::core::model::Density;
use iconsmith::platform::config::{self, PlatformPaths};
use iconsmith::util;
use iconsmith::util::error::{ConfigError, IconError};
use std::io::Write;
use std::path::PathBuf;

/// iconsmith - Android launcher icon generator and inspector.
///
/// Draws the shield emblem into every mipmap density folder (square and
/// round variants) and spot-checks generated icons.
#[derive(Parser, Debug)]
#[command(name = "iconsmith", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Config file (defaults to the platform config directory).
    #[arg(short = 'c', long = "config", global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug", global = true)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Regenerate ic_launcher.png and ic_launcher_round.png for every density.
    Generate {
        /// Android resource root containing the mipmap-* folders.
        #[arg(short = 'r', long = "res-dir")]
        res_dir: Option<PathBuf>,
    },

    /// Print an icon's size and the colour at fixed sample points.
    Inspect {
        /// Image to inspect (defaults to the xxhdpi square icon).
        path: Option<PathBuf>,

        /// Sample point as X,Y. Repeatable; replaces the default points.
        #[arg(short = 'p', long = "point")]
        points: Vec<String>,

        /// Print the report as JSON.
        #[arg(long)]
        json: bool,
    },
}

fn run(cli: Cli, config: config::AppConfig) -> util::error::Result<()> {
    match cli.command {
        Command::Generate { res_dir } => {
            let res_dir = res_dir.unwrap_or(config.res_dir);
            let summary = generate::generate_all(&res_dir, &Density::standard())?;
            for path in &summary.written {
                println!("{}", path.display());
            }
        }
        Command::Inspect { path, points, json } => {
            let path = path.unwrap_or(config.inspect_path);
            let points = inspect::resolve_points(&points)?;
            let report = inspect::inspect(&path, &points)?;

            let text = if json {
                // Fails only for paths that are not valid UTF-8.
                serde_json::to_string_pretty(&report).map_err(|e| IconError::Io {
                    path: report.path.clone(),
                    operation: "serialise report",
                    source: e.into(),
                })? + "\n"
            } else {
                report.render_text()
            };
            std::io::stdout()
                .write_all(text.as_bytes())
                .map_err(|e| IconError::Io {
                    path: PathBuf::from("<stdout>"),
                    operation: "write report",
                    source: e,
                })?;
        }
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    // An explicitly requested config file must exist; the default one may not.
    let (config_path, explicit) = match cli.config {
        Some(ref p) => (p.clone(), true),
        None => (PlatformPaths::resolve().config_file(), false),
    };
    let missing_explicit = explicit && !config_path.exists();
    let (config, config_warnings) = config::load_config(&config_path);

    util::logging::init(cli.debug, config.log_level.as_deref());

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        config = %config_path.display(),
        "iconsmith starting"
    );

    for warning in &config_warnings {
        tracing::warn!(error = %warning, "Config warning");
    }

    let result = if missing_explicit {
        Err(IconError::Config(ConfigError::Io {
            path: config_path,
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        }))
    } else {
        run(cli, config)
    };

    if let Err(e) = result {
        tracing::error!(error = %e, "iconsmith failed");
        eprintln!("Error: {e}");
        let mut source = std::error::Error::source(&e);
        while let Some(cause) = source {
            eprintln!("  caused by: {cause}");
            source = cause.source();
        }
        std::process::exit(1);
    }
}
