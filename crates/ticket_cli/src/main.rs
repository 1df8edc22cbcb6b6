//! Ticket CLI
//!
//! Render ticket shapes to SVG and manage `ticket.toml` files.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use ticket_core::{Rect, Size};
use ticket_shape::presets;
use ticket_shape::{path_data, NoContent, SvgContext, TicketConfig, TicketView};

mod config;

use config::{find_preset, ResolvedTicket, TicketFile, CONFIG_FILE_NAME};

#[derive(Parser)]
#[command(name = "ticket")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Render ticket shapes to SVG", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a ticket as an SVG document
    Render {
        /// Configuration file (defaults to ./ticket.toml when present)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Preset to use instead of the one in the config file
        #[arg(short, long)]
        preset: Option<String>,

        /// Ticket width
        #[arg(long)]
        width: Option<f32>,

        /// Ticket height
        #[arg(long)]
        height: Option<f32>,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Write a ticket.toml in the current directory
    Init {
        /// Preset to start from
        #[arg(short, long, default_value = "basic")]
        preset: String,

        /// Overwrite an existing ticket.toml
        #[arg(short, long)]
        force: bool,
    },

    /// List available presets
    Presets,

    /// Print SVG path data for the outline and separator
    Path {
        /// Ticket width
        #[arg(long, default_value = "200")]
        width: f32,

        /// Ticket height
        #[arg(long, default_value = "300")]
        height: f32,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    // SVG goes to stdout, so logs go to stderr
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    match cli.command {
        Commands::Render {
            config,
            preset,
            width,
            height,
            output,
        } => cmd_render(
            config.as_deref(),
            preset.as_deref(),
            width,
            height,
            output.as_deref(),
        ),

        Commands::Init { preset, force } => cmd_init(&preset, force),

        Commands::Presets => cmd_presets(),

        Commands::Path { width, height } => cmd_path(width, height),
    }
}

fn load_file(config: Option<&Path>) -> Result<TicketFile> {
    match config {
        Some(path) => TicketFile::load(path),
        None => TicketFile::load_from_dir(&std::env::current_dir()?),
    }
}

fn render_svg(resolved: &ResolvedTicket) -> String {
    let rect = Rect::new(
        resolved.padding,
        resolved.padding,
        resolved.size.width,
        resolved.size.height,
    );

    let mut ctx = SvgContext::new(resolved.canvas_size());
    TicketView::with_config(resolved.config.clone(), NoContent)
        .render(&mut ctx, rect);
    ctx.finish()
}

fn cmd_render(
    config: Option<&Path>,
    preset: Option<&str>,
    width: Option<f32>,
    height: Option<f32>,
    output: Option<&Path>,
) -> Result<()> {
    let mut file = load_file(config)?;

    if let Some(preset) = preset {
        file.canvas.preset = Some(preset.to_string());
        // Preset on the command line brings its own size unless given explicitly
        file.canvas.width = None;
        file.canvas.height = None;
    }
    if width.is_some() {
        file.canvas.width = width;
    }
    if height.is_some() {
        file.canvas.height = height;
    }

    let resolved = file.resolve()?;
    if resolved.size.width <= 0.0 || resolved.size.height <= 0.0 {
        bail!(
            "Ticket size must be positive, got {}x{}",
            resolved.size.width,
            resolved.size.height
        );
    }

    debug!(?resolved, "resolved ticket");
    let svg = render_svg(&resolved);

    match output {
        Some(path) => {
            fs::write(path, &svg)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!(
                "Rendered {}x{} ticket to {}",
                resolved.size.width,
                resolved.size.height,
                path.display()
            );
        }
        None => {
            std::io::stdout()
                .write_all(svg.as_bytes())
                .context("Failed to write to stdout")?;
        }
    }

    Ok(())
}

fn cmd_init(preset: &str, force: bool) -> Result<()> {
    let preset = find_preset(preset)?;
    let path = std::env::current_dir()?.join(CONFIG_FILE_NAME);

    if path.exists() && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }

    let content = TicketFile::from_preset(&preset).to_toml()?;
    fs::write(&path, content)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    info!("Wrote {} (preset: {})", path.display(), preset.name);
    info!("Run `ticket render -o ticket.svg` to render it");

    Ok(())
}

fn cmd_presets() -> Result<()> {
    println!("Available presets:");
    println!();

    for preset in presets::all() {
        let config = &preset.config;
        println!(
            "  {:<14} {:>4}x{:<4} fill {}  cutout {:.2}  corner {}",
            preset.name,
            preset.size.width,
            preset.size.height,
            config.fill_color.to_hex_string(),
            config.cutout_y_position,
            config.corner_radius,
        );
    }

    Ok(())
}

fn cmd_path(width: f32, height: f32) -> Result<()> {
    let size = Size::new(width, height);
    let paths = TicketConfig::default().paths(size.to_rect());

    println!("outline:   {}", path_data(&paths.outline));
    if let Some(separator) = paths.separator {
        println!("separator: {}", path_data(&separator));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_render() {
        let cli = Cli::parse_from([
            "ticket", "render", "--preset", "movie", "--width", "200", "-o", "out.svg",
        ]);
        match cli.command {
            Commands::Render {
                preset,
                width,
                height,
                output,
                ..
            } => {
                assert_eq!(preset.as_deref(), Some("movie"));
                assert_eq!(width, Some(200.0));
                assert_eq!(height, None);
                assert_eq!(output, Some(PathBuf::from("out.svg")));
            }
            _ => panic!("expected render command"),
        }
    }

    #[test]
    fn test_cli_verbose_is_global() {
        let cli = Cli::parse_from(["ticket", "presets", "--verbose"]);
        assert!(cli.verbose);
    }

    #[test]
    fn test_render_svg_places_ticket_inside_padding() {
        let resolved = TicketFile::parse("[canvas]\nwidth = 200\nheight = 300\n")
            .unwrap()
            .resolve()
            .unwrap();
        let svg = render_svg(&resolved);

        assert!(svg.starts_with("<svg"));
        assert!(svg.contains("width=\"232\""));
        assert!(svg.contains("height=\"332\""));
        assert!(svg.contains("M32 16 L200 16 Q216 16 216 32"));
        assert!(svg.contains("stroke-dasharray"));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn test_render_svg_hides_separator() {
        let resolved = TicketFile::parse("[ticket]\nshow_dashed_line = false\n")
            .unwrap()
            .resolve()
            .unwrap();
        assert!(!render_svg(&resolved).contains("stroke-dasharray"));
    }
}
