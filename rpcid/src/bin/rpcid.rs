//! RPCID CLI
//!
//! Encode descriptor JSON into RPCID records, decode them back, and project
//! them into the bitmap text form.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rpcid::json::registry_to_pretty_json;
use rpcid::{registry, RpcidTool, ToolConfig, DEFAULT_MAX_INPUT_BYTES};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "rpcid")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "RPCID capability record encoder and decoder", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Largest input file accepted, in bytes
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_INPUT_BYTES)]
    max_input_bytes: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a descriptor JSON file into rpcid.sc
    Encode {
        /// Descriptor JSON file
        input: PathBuf,

        /// Existing output directory
        #[arg(short, long, default_value = ".")]
        output: PathBuf,
    },

    /// Decode an RPCID file into rpcid.json
    Decode {
        /// RPCID file
        input: PathBuf,

        /// Existing output directory
        #[arg(short, long, default_value = ".")]
        output: PathBuf,
    },

    /// Project an RPCID file into RPCID.txt
    DecodeText {
        /// RPCID file
        input: PathBuf,

        /// Existing output directory
        #[arg(short, long, default_value = ".")]
        output: PathBuf,
    },

    /// Validate an RPCID file and print its header
    Inspect {
        /// RPCID file
        input: PathBuf,
    },

    /// Print the built-in capability registry
    Registry,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let tool = RpcidTool::new(ToolConfig::default().with_max_input_bytes(cli.max_input_bytes));

    match cli.command {
        Commands::Encode { input, output } => cmd_encode(&tool, &input, &output),
        Commands::Decode { input, output } => cmd_decode(&tool, &input, &output),
        Commands::DecodeText { input, output } => cmd_decode_text(&tool, &input, &output),
        Commands::Inspect { input } => cmd_inspect(&tool, &input),
        Commands::Registry => cmd_registry(),
    }
}

fn cmd_encode(tool: &RpcidTool, input: &Path, output: &Path) -> Result<()> {
    tool.encode(input, output)
        .with_context(|| format!("encode {} failed", input.display()))?;
    Ok(())
}

fn cmd_decode(tool: &RpcidTool, input: &Path, output: &Path) -> Result<()> {
    tool.decode(input, output)
        .with_context(|| format!("decode {} failed", input.display()))?;
    Ok(())
}

fn cmd_decode_text(tool: &RpcidTool, input: &Path, output: &Path) -> Result<()> {
    tool.decode_to_text(input, output)
        .with_context(|| format!("decode-text {} failed", input.display()))?;
    Ok(())
}

fn cmd_inspect(tool: &RpcidTool, input: &Path) -> Result<()> {
    let summary = tool
        .inspect(input)
        .with_context(|| format!("inspect {} failed", input.display()))?;
    println!("{summary}");
    Ok(())
}

fn cmd_registry() -> Result<()> {
    let json = registry_to_pretty_json(registry()?)?;
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(&json)?;
    writeln!(stdout)?;
    Ok(())
}
