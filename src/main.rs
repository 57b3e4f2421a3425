//! Seqtrans - discrete sequence transforms from the command line
//!
//! Builds a sequence from comma-separated values and applies one
//! operation to it.
//!
//! # Usage
//!
//! ```bash
//! seqtrans -x 1,2,3 --origin 1 zt
//! seqtrans -x 1,2,3 convolve --h 1,1
//! seqtrans -x 1,2,3,4 --latex dft
//! ```

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use seqtrans::{
    error::Result,
    report::{render_samples, render_sequence, OutputFormat},
    AdvisorySink, ConvolveMode, Domain, Laurent, Sequence, SilentSink, TracingSink,
};

/// Discrete sequence transforms
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Sequence values, comma separated
    #[arg(short = 'x', long, value_delimiter = ',', allow_hyphen_values = true, required = true)]
    values: Vec<f64>,

    /// Position of the value at index 0
    #[arg(short, long, allow_hyphen_values = true)]
    origin: Option<i64>,

    /// Logical indices of the values, comma separated
    #[arg(short, long, value_delimiter = ',', allow_hyphen_values = true)]
    indices: Option<Vec<i64>>,

    /// Domain of the input sequence (n, k or z)
    #[arg(short, long, default_value = "n")]
    domain: Domain,

    /// Print sequences as LaTeX
    #[arg(long, conflicts_with = "impulses")]
    latex: bool,

    /// Print sequences as a sum of delayed impulses
    #[arg(long)]
    impulses: bool,

    /// Do not report domain advisories
    #[arg(short, long)]
    quiet: bool,

    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the sequence
    Show,
    /// Discrete Fourier transform
    Dft,
    /// Inverse discrete Fourier transform
    Idft,
    /// Z-transform, term by term
    Zt,
    /// Inverse z-transform, term by term
    Izt,
    /// Convert to another domain (n, k or z)
    To {
        /// Target domain
        target: Domain,
    },
    /// Strip zeros from both ends
    Prune,
    /// Append zeros
    Zeropad {
        /// Number of zeros to append
        count: usize,
    },
    /// Delay by a whole number of samples (negative advances)
    Delay {
        /// Number of samples
        #[arg(allow_hyphen_values = true)]
        samples: f64,
    },
    /// Print the span between the outermost nonzero values
    Extent,
    /// Apply a recursive digital filter
    Filter {
        /// Numerator coefficients
        #[arg(short, long, value_delimiter = ',', allow_hyphen_values = true, required = true)]
        b: Vec<f64>,

        /// Denominator coefficients
        #[arg(short, long, value_delimiter = ',', allow_hyphen_values = true, default_value = "1")]
        a: Vec<f64>,
    },
    /// Convolve with another sequence
    Convolve {
        /// Values of the other sequence
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true, required = true)]
        h: Vec<f64>,

        /// Output length policy (full or same)
        #[arg(short, long, default_value = "full")]
        mode: String,
    },
    /// Evaluate numerically, at the stored indices or at the given ones
    Eval {
        /// Logical indices to evaluate at
        #[arg(allow_hyphen_values = true)]
        at: Vec<i64>,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let filter = match (args.quiet, args.verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, 2) => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();

    let sink: &dyn AdvisorySink = if args.quiet { &SilentSink } else { &TracingSink };
    let format = if args.latex {
        OutputFormat::Latex
    } else if args.impulses {
        OutputFormat::Impulses
    } else {
        OutputFormat::Plain
    };

    // Build the sequence
    let seq = build_sequence(&args)?;
    tracing::info!(len = seq.len(), domain = %seq.domain(), "built sequence");

    let result = match args.command {
        Command::Show => seq,
        Command::Dft => seqtrans::dft(&seq, sink),
        Command::Idft => seqtrans::idft(&seq, sink),
        Command::Zt => seqtrans::zt(&seq, sink)?,
        Command::Izt => seqtrans::izt(&seq, sink)?,
        Command::To { target } => seq.to_domain_with(target, sink)?,
        Command::Prune => seq.prune(),
        Command::Zeropad { count } => seq.zeropad(count),
        Command::Delay { samples } => seq.delay_by(samples)?,
        Command::Extent => {
            println!("{}", seq.extent());
            return Ok(());
        }
        Command::Filter { b, a } => seq.lfilter(&laurents(&b), &laurents(&a))?,
        Command::Convolve { h, mode } => {
            let mode: ConvolveMode = mode.parse()?;
            seq.convolve(&Sequence::new(laurents(&h)), mode)?
        }
        Command::Eval { at } => {
            let (indices, samples) = if at.is_empty() {
                (seq.indices().to_vec(), seq.as_array()?)
            } else {
                let samples = seq.evaluate_at(&at)?;
                (at, samples)
            };
            println!("{}", render_samples(&indices, &samples));
            return Ok(());
        }
    };

    println!("{}", render_sequence(&result, format));

    Ok(())
}

fn laurents(values: &[f64]) -> Vec<Laurent> {
    values.iter().map(|&v| Laurent::from(v)).collect()
}

fn build_sequence(args: &Args) -> Result<Sequence<Laurent>> {
    let mut builder = Sequence::builder(laurents(&args.values)).domain(args.domain);
    if let Some(origin) = args.origin {
        builder = builder.origin(origin);
    }
    if let Some(indices) = &args.indices {
        builder = builder.indices(indices.iter().copied());
    }
    builder.build()
}
