//! Sumgrid - batch driver for the fixed-size addition spreadsheet

mod config;
mod render;

use anyhow::{Context, Result, bail};
use std::env;
use std::path::PathBuf;
use sumgrid_core::{CellRef, Document};
use tracing_subscriber::EnvFilter;

fn print_usage() {
    eprintln!("Usage: sumgrid [OPTIONS] [FILE]");
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  [FILE]                    Spreadsheet file to load (.grd)");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -e, --edit <CELL=TEXT>    Set a cell (can be repeated, applied in order)");
    eprintln!("  -x, --clear <CELL>        Clear a cell (can be repeated, applied in order)");
    eprintln!("  -o, --output <FILE>       Save the sheet to a .grd file");
    eprintln!("  -c, --config <FILE>       Load sheet dimensions from a TOML file");
    eprintln!("  --no-config               Ignore the user config file");
    eprintln!("  -v, --verbose             Log edits and recompute sweeps to stderr");
    eprintln!("  -h, --help                Print help");
}

enum Edit {
    Set(CellRef, String),
    Clear(CellRef),
}

struct Options {
    file_path: Option<PathBuf>,
    edits: Vec<Edit>,
    output_file: Option<PathBuf>,
    config_file: Option<PathBuf>,
    no_config: bool,
    verbose: bool,
}

fn parse_cell(name: &str) -> Result<CellRef> {
    CellRef::from_str(name).with_context(|| format!("Invalid cell reference: {}", name))
}

fn parse_args(args: &[String]) -> Result<Option<Options>> {
    let mut opts = Options {
        file_path: None,
        edits: Vec::new(),
        output_file: None,
        config_file: None,
        no_config: false,
        verbose: false,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_usage();
                return Ok(None);
            }
            "-e" | "--edit" => {
                i += 1;
                let Some(arg) = args.get(i) else {
                    bail!("--edit requires CELL=TEXT");
                };
                let Some((cell, text)) = arg.split_once('=') else {
                    bail!("--edit expects CELL=TEXT, got {}", arg);
                };
                opts.edits.push(Edit::Set(parse_cell(cell)?, text.to_string()));
            }
            "-x" | "--clear" => {
                i += 1;
                let Some(arg) = args.get(i) else {
                    bail!("--clear requires a cell reference");
                };
                opts.edits.push(Edit::Clear(parse_cell(arg)?));
            }
            "-o" | "--output" => {
                i += 1;
                let Some(arg) = args.get(i) else {
                    bail!("--output requires a file path");
                };
                opts.output_file = Some(PathBuf::from(arg));
            }
            "-c" | "--config" => {
                i += 1;
                let Some(arg) = args.get(i) else {
                    bail!("--config requires a file path");
                };
                opts.config_file = Some(PathBuf::from(arg));
            }
            "--no-config" => opts.no_config = true,
            "-v" | "--verbose" => opts.verbose = true,
            arg if arg.starts_with('-') => {
                print_usage();
                bail!("Unknown option: {}", arg);
            }
            arg => {
                if opts.file_path.is_some() {
                    print_usage();
                    bail!("Unexpected argument: {}", arg);
                }
                opts.file_path = Some(PathBuf::from(arg));
            }
        }
        i += 1;
    }

    Ok(Some(opts))
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn run(opts: Options) -> Result<()> {
    let config = config::load_config(opts.config_file.as_deref(), !opts.no_config)?;

    let mut print_update = |cell_ref: &CellRef, text: &str| println!("{}: {}", cell_ref, text);

    let mut doc = Document::new(config)?;
    if let Some(path) = &opts.file_path {
        doc.load_file(path, &mut print_update)
            .with_context(|| format!("Failed to load {}", path.display()))?;
    }

    for edit in &opts.edits {
        match edit {
            Edit::Set(cell_ref, text) => doc.set_cell_value(*cell_ref, text, &mut print_update)?,
            Edit::Clear(cell_ref) => doc.clear_cell(cell_ref, &mut print_update)?,
        }
    }

    println!();
    print!("{}", render::render_table(&doc));

    if let Some(output_path) = &opts.output_file {
        doc.save_file_as(output_path)
            .with_context(|| format!("Failed to write {}", output_path.display()))?;
        eprintln!("Saved to {}", output_path.display());
    }
    Ok(())
}

fn main() {
    let args: Vec<String> = env::args().collect();

    let opts = match parse_args(&args) {
        Ok(Some(opts)) => opts,
        Ok(None) => return,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(opts.verbose);

    if let Err(e) = run(opts) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
