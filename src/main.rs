//! qr-svg CLI
//!
//! Usage:
//!   qr-svg [OPTIONS] [FILE]
//!
//! Options:
//!   -c, --config <FILE>     Render configuration (TOML format)
//!       --cell-size <N>     Edge length of one module
//!       --margin <N>        Blank border around the matrix
//!       --ec-level <LEVEL>  Error correction level (L, M, Q, H)
//!   -m, --matrix            Input is a text module matrix, not a payload
//!       --data-url          Print a base64 data URL instead of raw SVG
//!   -d, --debug             Print matrix statistics to stderr
//!   -h, --help              Print help

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;
use std::process;

use clap::Parser;

use qr_svg::{
    encode, render_svg, to_data_url, BitMatrix, ErrorCorrection, ModuleMatrix, RenderConfig,
};

#[derive(Parser)]
#[command(name = "qr-svg")]
#[command(about = "Render QR codes as compact SVG documents")]
struct Cli {
    /// Input file (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Render configuration file (TOML format)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Edge length of one module
    #[arg(long)]
    cell_size: Option<f64>,

    /// Blank border around the matrix (defaults to four cells)
    #[arg(long)]
    margin: Option<f64>,

    /// Error correction level: L, M, Q or H
    #[arg(long)]
    ec_level: Option<ErrorCorrection>,

    /// Treat input as a text module matrix (1/# dark, 0/. light)
    #[arg(short, long)]
    matrix: bool,

    /// Print a base64 data URL instead of raw SVG
    #[arg(long)]
    data_url: bool,

    /// Debug mode: print matrix statistics to stderr
    #[arg(short, long)]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    // If no input file and stdin is a terminal (interactive), show intro help
    if cli.input.is_none() && io::stdin().is_terminal() {
        print_intro();
        return;
    }

    // Load configuration, then let flags override it
    let mut config = match &cli.config {
        Some(path) => match RenderConfig::from_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading config '{}': {}", path.display(), e);
                process::exit(1);
            }
        },
        None => RenderConfig::default(),
    };
    if let Some(cell_size) = cli.cell_size {
        config.svg.cell_size = cell_size;
    }
    if let Some(margin) = cli.margin {
        config.svg.margin = Some(margin);
    }
    if let Some(level) = cli.ec_level {
        config.encoder.error_correction = level;
    }
    config.debug = cli.debug;

    // Read input
    let source = match &cli.input {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                process::exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => buffer,
                Err(e) => {
                    eprintln!("Error reading from stdin: {}", e);
                    process::exit(1);
                }
            }
        }
    };

    let svg = if cli.matrix {
        let matrix = match BitMatrix::parse(&source) {
            Ok(m) => m,
            Err(e) => {
                let filename = cli
                    .input
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "<stdin>".to_string());
                eprint!(
                    "{}",
                    e.format_with_color(&source, &filename, io::stderr().is_terminal())
                );
                process::exit(1);
            }
        };
        print_debug(&config, &matrix);
        render_svg(&matrix, &config.svg)
    } else {
        let payload = source.strip_suffix('\n').unwrap_or(&source);
        let payload = payload.strip_suffix('\r').unwrap_or(payload);
        match encode(payload, &config.encoder) {
            Ok(code) => {
                print_debug(&config, &code);
                render_svg(&code, &config.svg)
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        }
    };

    if cli.data_url {
        println!("{}", to_data_url(&svg));
    } else {
        println!("{}", svg);
    }
}

fn print_debug(config: &RenderConfig, matrix: &impl ModuleMatrix) {
    if !config.debug {
        return;
    }
    let geometry = config.svg.geometry();
    let n = matrix.side_length();
    eprintln!("=== Matrix Debug ===");
    eprintln!("side={} dark={}", n, matrix.dark_count());
    eprintln!(
        "cell_size={} margin={} canvas={}",
        geometry.cell_size,
        geometry.margin,
        geometry.canvas_size(n)
    );
    eprintln!("ec_level={}", config.encoder.error_correction);
    eprintln!("====================");
}

fn print_intro() {
    println!(
        r#"qr-svg - Render QR codes as compact SVG documents

USAGE:
    qr-svg [OPTIONS] [FILE]
    echo '<payload>' | qr-svg

OPTIONS:
    -c, --config       Render configuration (TOML file)
    --cell-size        Edge length of one module (default 2)
    --margin           Blank border (default 4 cells)
    --ec-level         Error correction level: L, M, Q, H (default H)
    -m, --matrix       Input is a text module matrix (1/# dark, 0/. light)
    --data-url         Print a base64 data URL
    -d, --debug        Print matrix statistics
    -h, --help         Print help

QUICK START:
    echo 'https://example.com' | qr-svg > qr.svg"#
    );
}
