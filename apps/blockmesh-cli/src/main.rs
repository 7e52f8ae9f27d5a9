//! blockmesh: decode octree mesh block names into plot rectangles.
//!
//! Reads mesh dumps or simulation logs, finds block names such as `Z0172`
//! or `b#01:72`, decodes each into its refinement level and unit-cube box,
//! and writes the rectangles a renderer needs to draw the mesh.
//!
//! ## Usage
//!
//! ```bash
//! cargo run -p blockmesh-cli -- [OPTIONS] [FILE...]
//! ```
//!
//! Reads stdin when no files are given. Malformed block names are logged
//! and skipped.
//!
//! ## Environment Variables
//!
//! - `RUST_LOG`: Set log level (e.g., info, debug, trace)

mod args;
mod output;

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use anyhow::Context;
use blockmesh_decode::TokenScanner;
use blockmesh_plot::prepare;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::args::Options;

fn main() -> anyhow::Result<()> {
    let options = args::parse_args(std::env::args().skip(1))?;
    if options.show_help {
        print_help();
        return Ok(());
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    run(&options)
}

fn run(options: &Options) -> anyhow::Result<()> {
    let lines = read_inputs(options)?;

    let scanner = TokenScanner::new(options.grammar.clone())?;
    let report = scanner.scan_lines(&lines);
    if !report.rejections.is_empty() {
        warn!(
            skipped = report.rejections.len(),
            "some block names could not be decoded"
        );
    }

    let plan = prepare(&report.blocks, &options.plot)?;
    info!(
        lines = lines.len(),
        blocks = report.blocks.len(),
        rects = plan.rects.len(),
        "decoded mesh"
    );

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    output::write_plan(&mut out, &plan, options.format)?;
    out.flush()?;
    Ok(())
}

fn read_inputs(options: &Options) -> anyhow::Result<Vec<String>> {
    let mut lines = Vec::new();
    if options.inputs.is_empty() {
        read_lines(io::stdin().lock(), &mut lines).context("failed to read stdin")?;
        return Ok(lines);
    }

    for path in &options.inputs {
        if path == Path::new("-") {
            read_lines(io::stdin().lock(), &mut lines).context("failed to read stdin")?;
        } else {
            let file = File::open(path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            read_lines(BufReader::new(file), &mut lines)
                .with_context(|| format!("failed to read {}", path.display()))?;
        }
    }
    Ok(lines)
}

fn read_lines<R: BufRead>(reader: R, lines: &mut Vec<String>) -> io::Result<()> {
    for line in reader.lines() {
        lines.push(line?);
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        "blockmesh - decode octree mesh block names into plot rectangles

USAGE:
    blockmesh [OPTIONS] [FILE...]

Reads FILEs (or stdin when none are given; `-` also means stdin), finds
block names and writes one rectangle per block to stdout.

GRAMMAR OPTIONS:
    -g, --grammar <NAME>     prefixed (e.g. Z0172) or delimited (e.g. b#01:72)
                             Default: prefixed
    -m, --marker <TEXT>      Block name marker
                             Default: Z (prefixed), b# (delimited)
    -s, --separator <CHAR>   Separator for the delimited grammar (default: :)

PLOT OPTIONS:
    -l, --max-level <N>      Plot levels below N (default: 10)
    -u, --unique             Emit each distinct block once
    -p, --palette <COLORS>   Comma-separated names or #rrggbb, cycled by level
                             Default: red,orange,green,blue,magenta,cyan
        --fit[=BORDER]       Fit axis limits to the data with a border
                             fraction (default: 0.2); otherwise [-0.2, 1.2]

OUTPUT OPTIONS:
    -f, --format <FORMAT>    text or bincode (default: text)

OTHER:
    -h, --help               Print this help message

EXAMPLES:
    # Rectangles for every Z block in a mesh dump
    blockmesh mesh.txt

    # Delimited names from a log, levels 0-5 only
    cat run.log | blockmesh -g delimited -l 6

ENVIRONMENT VARIABLES:
    RUST_LOG                 Set log level (e.g., info, debug, trace)"
    );
}
