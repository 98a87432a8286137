//! # Nebula CLI
//!
//! Command-line interface for image generation and effects.
//!
//! ## Usage
//!
//! ```bash
//! # List available generator and effect modes
//! nebula list
//!
//! # Generate a fractal
//! nebula generate mandelbrot --width 512 --height 512 max_iter=200
//!
//! # Generate with the default 256x256 canvas and default output name
//! nebula generate plasma
//!
//! # Apply an effect to an existing image
//! nebula effect blur --input photo.png radius=5 --output blurry.png
//!
//! # Chain via files
//! nebula effect posterize --input blurry.png bits=2
//! ```

use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

use nebula::engine;
use nebula::params::ModeInfo;
use nebula::{NebulaError, art, fx};

/// Nebula - procedural image synthesis and effects
#[derive(Parser, Debug)]
#[command(name = "nebula")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List available generator and effect modes
    List {
        /// Emit the catalog as JSON (for embedding in another tool's help)
        #[arg(long)]
        json: bool,
    },

    /// Generate an image from a mode name and key=value parameters
    Generate {
        /// Generator mode (run `list` to see available modes)
        mode: String,

        /// Parameters as key=value tokens
        params: Vec<String>,

        /// Canvas width in pixels (max 1024)
        #[arg(long, default_value_t = 256)]
        width: u32,

        /// Canvas height in pixels (max 1024)
        #[arg(long, default_value_t = 256)]
        height: u32,

        /// Output file (defaults to <mode>.png)
        #[arg(long, short = 'o', value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Apply an effect to an image file
    Effect {
        /// Effect mode (run `list` to see available modes)
        mode: String,

        /// Parameters as key=value tokens
        params: Vec<String>,

        /// Source image file
        #[arg(long, short = 'i', value_name = "FILE")]
        input: PathBuf,

        /// Output file (defaults to <mode>.png)
        #[arg(long, short = 'o', value_name = "FILE")]
        output: Option<PathBuf>,
    },
}

#[derive(Debug, Serialize)]
struct Catalog {
    generators: Vec<ModeInfo>,
    effects: Vec<ModeInfo>,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), NebulaError> {
    let cli = Cli::parse();

    match cli.command {
        Commands::List { json } => list_modes(json),
        Commands::Generate {
            mode,
            params,
            width,
            height,
            output,
        } => {
            println!("[engine] Generating {mode} at {width}x{height}...");
            let png = engine::generate(&mode, width, height, &params)?;
            let path = output.unwrap_or_else(|| PathBuf::from(engine::output_filename(&mode)));
            std::fs::write(&path, &png)?;
            println!("[engine] Wrote {} ({} bytes)", path.display(), png.len());
            Ok(())
        }
        Commands::Effect {
            mode,
            params,
            input,
            output,
        } => {
            let source = std::fs::read(&input).map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    NebulaError::MissingInput
                } else {
                    NebulaError::Io(e)
                }
            })?;
            println!("[engine] Applying {mode} to {}...", input.display());
            let png = engine::apply_effect(&mode, &source, &params)?;
            let path = output.unwrap_or_else(|| PathBuf::from(engine::output_filename(&mode)));
            std::fs::write(&path, &png)?;
            println!("[engine] Wrote {} ({} bytes)", path.display(), png.len());
            Ok(())
        }
    }
}

fn list_modes(json: bool) -> Result<(), NebulaError> {
    let catalog = Catalog {
        generators: art::infos(),
        effects: fx::infos(),
    };

    if json {
        let rendered = serde_json::to_string_pretty(&catalog)
            .map_err(|e| NebulaError::Generation(format!("catalog serialization failed: {e}")))?;
        println!("{rendered}");
        return Ok(());
    }

    println!("Available generators:");
    print_infos(&catalog.generators);
    println!();
    println!("Available effects:");
    print_infos(&catalog.effects);
    Ok(())
}

fn print_infos(infos: &[ModeInfo]) {
    for info in infos {
        println!("  {:<20} {}", info.name, info.description);
        for p in info.params {
            println!("      [{}={}] {}", p.name, p.default, p.help);
        }
    }
}
