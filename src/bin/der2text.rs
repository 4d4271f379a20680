//! Shows DER encoded data as text.
//!
//! Reads DER or PEM data from a file or standard input and writes the
//! text rendering to standard output. If decoding fails, the text produced
//! up to the point of failure is still written before the error is
//! reported.

use std::{error, fs, io, process};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use clap::{ArgAction, Parser};
use der2text::{Decoder, Options, Output};
use der2text::pem;


//------------ Args ----------------------------------------------------------

/// Decode DER data into indented text.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// The file to read. Reads standard input if missing or ‘-’.
    input: Option<PathBuf>,

    /// Treat the input as PEM armoured.
    #[arg(long, conflicts_with = "der")]
    pem: bool,

    /// Treat the input as raw DER.
    #[arg(long)]
    der: bool,

    /// Maximum nesting level of constructed values.
    #[arg(long, value_name = "N", conflicts_with = "no_max_depth")]
    max_depth: Option<usize>,

    /// Don’t limit the nesting level of constructed values.
    #[arg(long)]
    no_max_depth: bool,

    /// Don’t guess at the meaning of opaque content.
    #[arg(long)]
    no_hints: bool,

    /// Don’t print names of object identifiers.
    #[arg(long)]
    no_names: bool,

    /// Number of spaces per nesting level.
    #[arg(long, value_name = "N", default_value_t = Output::DEFAULT_INDENT)]
    indent: usize,

    /// Log more. Given twice, log everything.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn options(&self) -> Options {
        let mut res = Options::default()
            .with_hints(!self.no_hints)
            .with_oid_names(!self.no_names);
        if self.no_max_depth {
            res = res.with_max_depth(None);
        }
        else if let Some(depth) = self.max_depth {
            res = res.with_max_depth(Some(depth));
        }
        res
    }

    fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    }
}


//------------ Processing ----------------------------------------------------

/// Reads all data from a file or standard input.
fn read_input(path: Option<&Path>) -> Result<Vec<u8>, io::Error> {
    match path {
        Some(path) if path != Path::new("-") => fs::read(path),
        _ => {
            let mut res = Vec::new();
            io::stdin().read_to_end(&mut res)?;
            Ok(res)
        }
    }
}

/// Renders PEM armoured data.
fn render_pem(
    decoder: &Decoder, out: &mut Output, data: &[u8]
) -> Result<(), Box<dyn error::Error>> {
    let blocks = pem::parse(data)?;
    if blocks.is_empty() {
        log::warn!("no PEM blocks found in input");
    }
    for block in blocks {
        block.decode(decoder, &mut out.indenter())?;
    }
    Ok(())
}

/// Renders `data` according to `args` into `target`.
///
/// The rendering produced so far is written even if decoding fails. A
/// partial last line is terminated before the error is returned.
fn render(
    args: &Args, data: &[u8], target: &mut impl Write
) -> Result<(), Box<dyn error::Error>> {
    let is_pem = if args.pem {
        true
    }
    else if args.der {
        false
    }
    else {
        pem::is_pem(data)
    };
    log::debug!(
        "read {} octets of {} input",
        data.len(), if is_pem { "PEM" } else { "DER" }
    );

    let decoder = Decoder::new(args.options());
    let mut out = Output::with_indent(args.indent);
    let res = if is_pem {
        render_pem(&decoder, &mut out, data)
    }
    else {
        decoder.parse(&mut out.indenter(), data).map_err(Into::into)
    };

    target.write_all(out.as_slice())?;
    if !out.as_slice().ends_with(b"\n") && !out.is_empty() {
        target.write_all(b"\n")?;
    }
    target.flush()?;
    res
}

fn run(args: &Args) -> Result<(), Box<dyn error::Error>> {
    let data = read_input(args.input.as_deref())?;
    render(args, &data, &mut io::stdout().lock())
}

fn main() {
    let args = Args::parse();
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(args.log_filter())
    ).init();

    if let Err(err) = run(&args) {
        eprintln!("der2text: {}", err);
        process::exit(1)
    }
}


//============ Tests =========================================================
