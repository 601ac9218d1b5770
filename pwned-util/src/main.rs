mod error;

use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use pwned_converter::convert_file;
use pwned_format::{encode_hex_digest, parse_hex_digest};
use pwned_verifier::{BIN_FILE_ENV, BreachChecker, sha1_digest, verify_file};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::error::Error;

#[derive(Parser, Debug)]
#[command(name = "pwned-util", version)]
#[command(about = "Convert the Pwned Passwords SHA1 corpus to binary and check passwords against it")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create a binary version of an ordered-by-hash text corpus
    #[command(
        after_help = "Example: pwned-util optimize -i pwned-passwords-ordered-2.0.txt -o pwned-passwords-ordered-2.0.bin"
    )]
    Optimize {
        /// Ordered-by-hash SHA1 text corpus (63-byte lines)
        #[arg(short, long)]
        input: PathBuf,

        /// Binary file to create (truncated if it exists)
        #[arg(short, long)]
        output: PathBuf,

        /// Disable progress bar
        #[arg(long)]
        no_progress: bool,
    },

    /// Check whether a password exists in a binary file
    #[command(after_help = "Example: pwned-util check -f pwned-passwords-ordered-2.0.bin Passw0rd")]
    Check {
        /// Binary file created by `optimize`
        #[arg(short, long, env = BIN_FILE_ENV)]
        file: PathBuf,

        /// Treat VALUE as a 40-character hex SHA1 digest instead of a password
        #[arg(long)]
        sha1: bool,

        /// Password (or digest with --sha1) to look up
        value: String,
    },

    /// Check that a binary file is sorted by digest
    Verify {
        /// Binary file created by `optimize`
        #[arg(short, long, env = BIN_FILE_ENV)]
        file: PathBuf,
    },
}

fn main() -> Result<(), Error> {
    init_tracing();
    let args = Args::parse();

    match args.command {
        Command::Optimize { input, output, no_progress } => optimize(&input, &output, no_progress),
        Command::Check { file, sha1, value } => check(&file, sha1, &value),
        Command::Verify { file } => verify(&file),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).try_init();
}

fn optimize(input: &Path, output: &Path, no_progress: bool) -> Result<(), Error> {
    // Position is in hundredths of a percent.
    let progress_bar = if !no_progress {
        let pb = ProgressBar::new(10_000);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {percent}% {msg}")
                .expect("Invalid progress bar template")
                .progress_chars("#>-"),
        );
        Some(pb)
    } else {
        None
    };

    let mut report = |percent: f32| {
        if let Some(ref pb) = progress_bar {
            pb.set_position((percent * 100.0) as u64);
        }
    };

    let started = Instant::now();
    let stats = convert_file(input, output, &mut report)?;

    if let Some(pb) = progress_bar {
        pb.finish_with_message("done");
    }

    println!(
        "Wrote {} records ({} bytes) to {:?} in {:?}",
        stats.records,
        stats.bytes_written,
        output,
        started.elapsed()
    );
    Ok(())
}

fn check(file: &Path, sha1: bool, value: &str) -> Result<(), Error> {
    let digest = if sha1 {
        parse_hex_digest(value).ok_or_else(|| Error::InvalidDigest { value: value.to_string() })?
    } else {
        sha1_digest(value)
    };

    let hex = encode_hex_digest(&digest);
    debug!(digest = %String::from_utf8_lossy(&hex), "looking up digest");

    let checker = BreachChecker::new(file);
    let timer = Instant::now();
    let found = checker.contains_digest(&digest)?;
    println!("Password exists = {}, elapsed = {:?}", found, timer.elapsed());

    Ok(())
}

fn verify(file: &Path) -> Result<(), Error> {
    let report = verify_file(file)?;

    println!(
        "{} records, {} duplicate digests, sorted = {}",
        report.records,
        report.duplicates,
        report.is_sorted()
    );

    match report.first_unsorted {
        Some(index) => Err(Error::Unsorted { path: file.to_path_buf(), index }),
        None => Ok(()),
    }
}
