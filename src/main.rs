//! tim_converter - split PlayStation TIM textures into PXL/CLT files and back
//!
//! ```bash
//! # input.pxl + input.clt -> input.tim
//! tim_converter compose input.pxl input.clt
//!
//! # input.tim -> out.pxl (+ out.clt when the TIM has a CLUT)
//! tim_converter split input.tim out
//!
//! # print the header of any of the three formats as JSON
//! tim_converter info input.tim
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use tim_converter::{
    files::{compose_files, inspect_file, split_file},
    ConverterConfig,
};

/// Converts PS1 TIM textures to and from PXL + CLT files
#[derive(Parser)]
#[command(name = "tim_converter")]
#[command(version)]
struct Cli {
    /// Refuse input files larger than this many bytes
    #[arg(long, global = true)]
    max_file_size: Option<usize>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Combine a pxl and a clt file into a tim texture
    Compose {
        pxl: PathBuf,
        clt: PathBuf,
        /// Defaults to the pxl path with a .tim extension
        output: Option<PathBuf>,
    },

    /// Split a tim texture into a pxl and a clt file
    Split {
        tim: PathBuf,
        /// Defaults to the tim path without its extension
        output_basename: Option<PathBuf>,
    },

    /// Print the header of a tim, pxl or clt file as JSON
    Info { file: PathBuf },
}

fn run(cli: Cli) -> Result<()> {
    let mut config = ConverterConfig::default();
    if let Some(limit) = cli.max_file_size {
        config = config.with_max_file_size(limit);
    }

    match cli.command {
        Commands::Compose { pxl, clt, output } => {
            let tim = compose_files(&pxl, &clt, output.as_deref(), &config)
                .with_context(|| format!("composing {} and {}", pxl.display(), clt.display()))?;
            println!("Successfully created {}", tim.display());
        },
        Commands::Split {
            tim,
            output_basename,
        } => {
            let written = split_file(&tim, output_basename.as_deref(), &config)
                .with_context(|| format!("splitting {}", tim.display()))?;

            println!("Created PXL file: {}", written.pxl.display());
            match written.clt {
                Some(clt) => println!("Created CLT file: {}", clt.display()),
                None => println!("TIM file contained no CLUT data - only created PXL file"),
            }
        },
        Commands::Info { file } => {
            let summary = inspect_file(&file, &config)
                .with_context(|| format!("reading {}", file.display()))?;
            println!("{}", serde_json::to_string_pretty(&summary)?);
        },
    }

    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    if let Err(e) = run(Cli::parse()) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
