use clap::Parser;
use std::time::Instant;
use tracing::{debug, error, info};
use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};

use xml2yaml::{
    converter::Converter,
    enums::ScannerKind,
    error::Result,
    formatter::FormatConfig,
    utils::{read_file, write_file},
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input XML file path
    #[arg(short, long)]
    file: String,

    /// Output file path
    #[arg(short, long)]
    output: Option<String>,

    /// Number of times to run the conversion
    #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    runs: u32,

    /// Scanner used to read the XML
    #[arg(short, long, value_enum, default_value_t = ScannerKind::Manual)]
    scanner: ScannerKind,

    /// Spaces per indentation level
    #[arg(short, long, default_value_t = 2)]
    indent: usize,
}

fn main() {
    // Initialize the default subscriber for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_span_events(FmtSpan::CLOSE)
        .with_target(false) // Don't show target
        .without_time() // Don't show timestamps
        .init(); // Initialize the subscriber

    if let Err(e) = run() {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();

    // Read input file
    info!("Reading file: {}", args.file);
    let content = read_file(&args.file)?;

    let config = FormatConfig {
        indent_spaces: args.indent,
    };

    // Convert, repeating for timing
    let started = Instant::now();
    let mut yaml = String::new();
    for iteration in 1..=args.runs {
        debug!("Conversion run {}/{}", iteration, args.runs);
        yaml = Converter::xml_to_yaml(&content, args.scanner, &config)?;
    }
    info!(
        "Converted {} time(s) with the {} scanner in {:?}",
        args.runs,
        args.scanner,
        started.elapsed()
    );

    // Write to file or print to stdout
    if let Some(output_path) = args.output {
        write_file(&output_path, &yaml)?;
    } else {
        println!("{}", yaml);
    }

    Ok(())
}
