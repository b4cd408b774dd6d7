//! Ordinal CLI library
//!
//! This module contains the core CLI logic for the Ordinal tool: it reads
//! a TOML document, orders its top-level entries by their position
//! directives and writes the resulting paths.

pub mod document;
pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::{
    fs,
    io::{self, Write},
};

use log::{info, warn};

use ordinal::{Arranger, OrdinalError};

/// Run the Ordinal CLI application
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `OrdinalError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Malformed input documents
/// - Malformed directives when `diagnostics.deny_malformed` is set
pub fn run(args: &Args) -> Result<(), OrdinalError> {
    info!(
        input_path = args.input,
        output_path:? = args.output;
        "Arranging document"
    );

    let mut app_config = config::load_config(args.config.as_ref())?;
    if let Some(base_path) = &args.base_path {
        app_config = app_config.with_base_path(base_path.as_str());
    }

    let source = fs::read_to_string(&args.input)?;
    let entries = document::entries(&source, app_config.input())?;

    let arranger = Arranger::new(app_config);
    let arrangement = arranger.arrange(entries)?;

    for malformed in &arrangement.malformed {
        let reportable = error_adapter::malformed_reportable(malformed);
        warn!("{}", error_adapter::render(&reportable));
    }

    match &args.output {
        Some(path) => {
            let mut file = io::BufWriter::new(fs::File::create(path)?);
            write_paths(&mut file, &arrangement.paths)?;
            file.flush()?;
        }
        None => write_paths(&mut io::stdout().lock(), &arrangement.paths)?,
    }

    info!(paths_count = arrangement.paths.len(); "Paths written");

    Ok(())
}

fn write_paths(writer: &mut impl Write, paths: &[String]) -> io::Result<()> {
    for path in paths {
        writeln!(writer, "{path}")?;
    }
    Ok(())
}
