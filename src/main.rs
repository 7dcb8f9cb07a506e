//! Command-line interface for mockframe
//!
//! # Usage Examples
//!
//! ## Features
//! ```bash
//! # Default columns, 100 rows, CSV to stdout
//! mockframe features
//!
//! # Nullable columns as a raw array, written to a file
//! mockframe features --library numpy \
//!   --columns ints_nullable,floats_nullable,booleans_nullable \
//!   --num-rows 20 --output nullable.csv
//!
//! # Everything, reproducibly, as JSON
//! mockframe features --all-dtypes --seed 42 --format json
//! ```
//!
//! ## Graphs
//! ```bash
//! mockframe graph line --x ints --y rand_floats --columns ints,rand_floats
//! mockframe graph scatter --x floats --y rand_floats --hue categoricals \
//!   --columns floats,rand_floats,categoricals --plot-size 8,6
//! ```
//!
//! Set `RUST_LOG=debug` to see selection and generation details.

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use mock_core::MockData;
use mock_generator::Features;
use mock_graph::{Graph, Line, Scatter, SpecBackend};
use mock_output::write_data;
use mockframe::{FeaturesOpts, OutputOpts};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tracing::info;

#[derive(Parser)]
#[command(name = "mockframe")]
#[command(about = "Generate mock tabular datasets and plot descriptions")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a mock features dataset
    Features {
        #[command(flatten)]
        features: FeaturesOpts,

        #[command(flatten)]
        output: OutputOpts,
    },

    /// Describe a plot over a generated dataset as JSON
    Graph {
        /// Plot kind
        #[arg(value_enum)]
        kind: GraphKind,

        /// Column for the x axis (required for line plots)
        #[arg(long)]
        x: Option<String>,

        /// Column for the y axis (required for line plots)
        #[arg(long)]
        y: Option<String>,

        /// Column grouping points by color
        #[arg(long)]
        hue: Option<String>,

        /// Column grouping points by marker
        #[arg(long)]
        style: Option<String>,

        /// Figure size in inches as WIDTH,HEIGHT
        #[arg(long, value_delimiter = ',', num_args = 2, default_values_t = [11.7, 8.27])]
        plot_size: Vec<f64>,

        #[command(flatten)]
        features: FeaturesOpts,

        /// Output file (default: stdout)
        #[arg(long, short = 'o', value_name = "PATH")]
        output: Option<std::path::PathBuf>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum GraphKind {
    Line,
    Scatter,
}

fn main() -> anyhow::Result<()> {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Features { features, output } => {
            let config = features
                .to_config()
                .context("Invalid features configuration")?;
            let data = Features::new(&config)?.create_data()?;

            let writer = open_output(output.output.as_deref())?;
            write_data(&data, output.format.into(), writer)
                .context("Failed to write dataset")?;
        }

        Commands::Graph {
            kind,
            x,
            y,
            hue,
            style,
            plot_size,
            features,
            output,
        } => {
            let config = features
                .to_config()
                .context("Invalid features configuration")?;
            let table = match Features::new(&config)?.create_data()? {
                MockData::Table(table) => table,
                MockData::Array(_) => {
                    anyhow::bail!("Graphs need a labeled dataset; use --library pandas")
                }
            };
            let (width, height) = match plot_size.as_slice() {
                [w, h] => (*w, *h),
                _ => anyhow::bail!("--plot-size takes WIDTH,HEIGHT"),
            };

            let spec = match kind {
                GraphKind::Line => {
                    let x = x.context("--x is required for line plots")?;
                    let y = y.context("--y is required for line plots")?;
                    let mut line = Line::new(x, y)
                        .with_dataset(table)
                        .with_plot_size(width, height);
                    if let Some(hue) = hue {
                        line = line.with_hue(hue);
                    }
                    if let Some(style) = style {
                        line = line.with_style(style);
                    }
                    line.plot(&SpecBackend)?
                }
                GraphKind::Scatter => {
                    let mut scatter = Scatter::new()
                        .with_dataset(table)
                        .with_plot_size(width, height);
                    if let Some(x) = x {
                        scatter = scatter.with_x(x);
                    }
                    if let Some(y) = y {
                        scatter = scatter.with_y(y);
                    }
                    if let Some(hue) = hue {
                        scatter = scatter.with_hue(hue);
                    }
                    if let Some(style) = style {
                        scatter = scatter.with_style(style);
                    }
                    scatter.plot(&SpecBackend)?
                }
            };

            let mut writer = open_output(output.as_deref())?;
            serde_json::to_writer_pretty(&mut writer, &spec)
                .context("Failed to write plot description")?;
            writeln!(writer)?;
            writer.flush()?;
            info!("Wrote {:?} plot description", kind);
        }
    }

    Ok(())
}

fn open_output(path: Option<&Path>) -> anyhow::Result<Box<dyn Write>> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file {path:?}"))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout().lock())),
    }
}
