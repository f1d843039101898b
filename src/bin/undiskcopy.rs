/// Extract a raw image from a Disk Copy 4.2 image

use clap::Parser;
use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;
use undiskcopy::{convert_file, ConvertOptions, DiskCopyError};

/// Extracts raw images from Disk Copy 4.2 images
#[derive(Parser)]
#[command(name = "undiskcopy")]
#[command(about = "Extracts raw images from Disk Copy 4.2 images")]
#[command(disable_help_flag = true)]
struct Cli {
    /// Disk Copy 4.2 image to read
    #[arg(allow_hyphen_values = true)]
    input: PathBuf,
    /// Raw image to write
    #[arg(allow_hyphen_values = true)]
    output: PathBuf,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            eprint!("{}", DiskCopyError::Usage(err.render().to_string()));
            return ExitCode::FAILURE;
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .without_time()
        .with_target(false)
        .init();

    // Verified here so advisories are printed even when the checksum fails
    let options = ConvertOptions {
        verify_checksum: false,
    };
    let result = convert_file(&cli.input, &cli.output, &options).and_then(|report| {
        for advisory in &report.advisories {
            eprintln!("Warning: {}", advisory);
        }
        report.verify()
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err, &cli);
            ExitCode::FAILURE
        }
    }
}

fn report_error(err: &DiskCopyError, cli: &Cli) {
    eprintln!("{}", err);
    if err.is_non_destructive() {
        eprintln!("Output kept at {}", cli.output.display());
    }
}
