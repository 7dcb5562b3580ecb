//! Command line front end: reads text, Huffman codes it and prints the bits,
//! the decoded text, the conversion table and the tree.

mod progress;

use std::fs::File;
use std::io::{self, BufRead, Read, Write};
use std::path::{Path, PathBuf};

use clap::{ArgAction, Parser};
use color_eyre::eyre::{bail, WrapErr};
use console::style;
use huffcodec::display::SymbolLabel;
use huffcodec::{compress, decompress, EncodedResult};
use progress::ProgressMonitor;
use tracing::{debug, info, level_filters::LevelFilter, warn};
use tracing_indicatif::IndicatifLayer;
use tracing_subscriber::prelude::*;

const SEPARATOR: &str = "----------";

#[derive(Parser, Debug)]
#[command(version, about = "Huffman code a text and show how it was coded")]
struct Cli {
    /// File to read the text from. Reads standard input if omitted
    file: Option<PathBuf>,

    /// Read exactly this many lines from standard input instead of all of it
    #[arg(short = 'n', long, conflicts_with = "file")]
    lines: Option<usize>,

    /// Don't print the conversion table
    #[arg(long)]
    no_table: bool,

    /// Don't print the tree
    #[arg(long)]
    no_tree: bool,

    /// More log output, repeat for even more
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    debug!(?cli, "parsed arguments");

    let text = match (&cli.file, cli.lines) {
        (Some(path), _) => read_file(path)?,
        (None, Some(lines)) => read_lines(io::stdin().lock(), lines)?,
        (None, None) => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .wrap_err("failed to read standard input")?;
            text
        }
    };
    if text.is_empty() {
        warn!("input is empty, nothing to encode");
    }

    let encoded = compress(&text).wrap_err("failed to compress input")?;
    let decoded = decompress(&encoded).wrap_err("failed to decompress encoded bits")?;
    if decoded != text {
        bail!("decoded text does not match the input");
    }

    let symbols = text.chars().count();
    info!(
        "{} symbols, {} distinct, encoded into {} bits ({:.3} bits per symbol)",
        symbols,
        encoded.tree().map_or(0, |tree| tree.code_table().len()),
        encoded.bit_len(),
        encoded.bits_per_symbol(symbols)
    );

    let report = Report {
        encoded: &encoded,
        decoded: &decoded,
        table: !cli.no_table,
        tree: !cli.no_tree,
    };
    report
        .write(&mut io::stdout().lock())
        .wrap_err("failed to write output")?;
    Ok(())
}

fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    let indicatif_layer = IndicatifLayer::new();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(indicatif_layer.get_stderr_writer()),
        )
        .with(indicatif_layer)
        .with(level)
        .init();
}

fn read_file(path: &Path) -> color_eyre::Result<String> {
    let file = File::open(path).wrap_err_with(|| format!("failed to open {}", path.display()))?;
    let size = file.metadata().map(|meta| meta.len() as usize).unwrap_or(0);
    debug!("reading {} ({})", path.display(), progress::fmt_size(size as f64));

    let mut text = String::with_capacity(size);
    ProgressMonitor::new(file, size)
        .read_to_string(&mut text)
        .wrap_err_with(|| format!("failed to read {} as UTF-8 text", path.display()))?;
    Ok(text)
}

/// Read `count` lines, each kept with a trailing newline
fn read_lines(input: impl BufRead, count: usize) -> color_eyre::Result<String> {
    let mut text = String::new();
    let mut lines = input.lines();
    for read in 0..count {
        let Some(line) = lines.next() else {
            bail!("expected {count} lines of input but got only {read}");
        };
        text.push_str(&line.wrap_err("failed to read line")?);
        text.push('\n');
    }
    Ok(text)
}

struct Report<'a> {
    encoded: &'a EncodedResult,
    decoded: &'a str,
    table: bool,
    tree: bool,
}

impl Report<'_> {
    fn write(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "{SEPARATOR}")?;
        writeln!(out, "{} {}", style("Encoded String:").bold(), self.encoded.bits())?;
        writeln!(out, "{}\n{}", style("Decoded String:").bold(), self.decoded)?;

        let Some(tree) = self.encoded.tree() else {
            return Ok(());
        };
        if self.table {
            writeln!(out, "{SEPARATOR}\n{}", style("Conversion Table").bold())?;
            for (symbol, code) in tree.code_table().iter() {
                writeln!(out, "   {}: {}", SymbolLabel(symbol), style(code).cyan())?;
            }
        }
        if self.tree {
            writeln!(out, "{SEPARATOR}\n{}", style("Huffman Tree").bold())?;
            write!(out, "{tree}")?;
        }
        Ok(())
    }
}
