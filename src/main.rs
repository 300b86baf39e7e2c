//! bigtype - Render text as big ASCII-art banners
//!
//! ```text
//! ####   #   ####
//! #   #  #  #
//! ####   #  #  ##
//! #   #  #  #   #
//! ####   #   ###
//! ```

use anyhow::Context;
use bigtype_config::{Config, RenderDefaults, SizePreset};
use bigtype_core::{BannerRenderer, RenderConfig};
use clap::{CommandFactory, Parser};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Exit status for rejected render arguments
const EXIT_INVALID_ARGUMENT: i32 = 2;

/// Self-contained ASCII text generator (5x7 font). Use --size to make it big.
#[derive(Parser, Debug)]
#[command(name = "bigtype")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Text to render
    text: Option<String>,

    /// Draw character (default: '#'). Use a block like █ for denser output
    #[arg(short = 'c', long = "char", value_name = "DRAW")]
    draw: Option<String>,

    /// Scale factor (integer >= 1). Overrides --size if provided
    #[arg(short = 's', long, allow_negative_numbers = true)]
    scale: Option<i64>,

    /// Preset size: small, medium, large or huge (default: large)
    #[arg(long, value_parser = parse_size)]
    size: Option<SizePreset>,

    /// Columns between letters (default: 1)
    #[arg(long)]
    spacing: Option<usize>,

    /// Write output to file
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Read text from stdin
    #[arg(long)]
    stdin: bool,

    /// Config file path
    #[arg(long)]
    config: Option<PathBuf>,

    /// List the characters the font can draw and exit
    #[arg(long)]
    list_glyphs: bool,

    /// Print the effective settings as TOML and exit
    #[arg(long)]
    print_config: bool,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

fn parse_size(s: &str) -> Result<SizePreset, String> {
    s.parse().map_err(|e: bigtype_config::ConfigError| e.to_string())
}

/// Merge config file defaults with CLI flags (flags win)
fn resolve_settings(args: &Args, user_config: Option<&Path>) -> anyhow::Result<RenderDefaults> {
    let config = Config::load_or_default(args.config.as_deref(), user_config)?.render;

    // --size beats a scale from the config file; --scale beats both
    let scale = match (args.scale, args.size) {
        (Some(scale), _) => Some(scale),
        (None, Some(_)) => None,
        (None, None) => config.scale,
    };

    Ok(RenderDefaults {
        draw: args.draw.clone().unwrap_or(config.draw),
        size: args.size.unwrap_or(config.size),
        scale,
        spacing: args.spacing.unwrap_or(config.spacing),
    })
}

/// Run the CLI against the given streams, returning the process exit code.
///
/// `user_config` is the optional per-user config file consulted when no
/// `--config` is given.
fn run(
    args: &Args,
    user_config: Option<&Path>,
    input: &mut impl Read,
    out: &mut impl Write,
    err: &mut impl Write,
) -> anyhow::Result<i32> {
    if args.list_glyphs {
        let chars: String = bigtype_core::supported_chars().into_iter().collect();
        writeln!(out, "{}", chars)?;
        return Ok(0);
    }

    if args.print_config {
        let config = Config {
            render: resolve_settings(args, user_config)?,
        };
        write!(out, "{}", config.to_toml()?)?;
        return Ok(0);
    }

    let text = if args.stdin {
        let mut buf = String::new();
        input
            .read_to_string(&mut buf)
            .context("failed to read text from stdin")?;
        buf.trim_end_matches('\n').to_string()
    } else {
        args.text.clone().unwrap_or_default()
    };

    if text.is_empty() {
        Args::command().write_help(out)?;
        return Ok(0);
    }

    let settings = resolve_settings(args, user_config)?;
    let renderer = BannerRenderer::with_config(RenderConfig {
        scale: settings.resolved_scale(),
        draw: settings.draw,
        spacing: settings.spacing,
    });

    let unknown = text.chars().filter(|ch| !bigtype_core::is_supported(*ch)).count();
    if unknown > 0 {
        tracing::debug!("{} chars have no glyph and render as a dot", unknown);
    }
    tracing::debug!("Rendering {} chars with {:?}", text.chars().count(), renderer.config());

    let art = match renderer.render(&text) {
        Ok(art) => art,
        Err(e) => {
            writeln!(err, "Error: {}", e)?;
            return Ok(EXIT_INVALID_ARGUMENT);
        }
    };

    match args.output {
        Some(ref path) => {
            std::fs::write(path, &art)
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!("Wrote {} bytes to {}", art.len(), path.display());
            writeln!(out, "Wrote ASCII art to {}", path.display())?;
        }
        None => writeln!(out, "{}", art)?,
    }

    Ok(0)
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Logs go to stderr so stdout carries only the art
    let filter = if args.debug {
        "bigtype=debug,bigtype_core=debug,bigtype_config=debug"
    } else {
        "warn"
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();

    tracing::debug!("Starting bigtype v{}", env!("CARGO_PKG_VERSION"));
    bigtype_core::init()?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let user_config = bigtype_config::default_config_path();
    let code = run(
        &args,
        Some(user_config.as_path()),
        &mut io::stdin().lock(),
        &mut out,
        &mut io::stderr(),
    )?;
    out.flush()?;

    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}
