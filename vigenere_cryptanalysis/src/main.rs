use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use vigenere_core::{
    config::validate_key_length, cryptanalyze, decrypt, estimate_key_length, io, Cryptanalysis,
    Limits, Result, Text, MAX_KEY_LENGTH,
};

/// Below this many letters the statistics are too noisy to trust
const MIN_RELIABLE_LETTERS: usize = 50;

/// Command-line arguments for the Vigenère cryptanalysis program.
#[derive(Parser, Debug)]
#[command(version, about = "Ciphertext-only attack on the Vigenère cipher")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Print the IC table and per-column scores to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Estimate the key length with the Index of Coincidence
    Keylength {
        /// Path to the input file containing encrypted text
        #[arg(short, long, help = "Path to the input file containing encrypted text")]
        file: PathBuf,

        /// Largest key length to consider
        #[arg(short, long, default_value_t = MAX_KEY_LENGTH)]
        max_length: usize,
    },

    /// Recover the key by chi-squared frequency analysis
    Cryptanalyze {
        /// Path to the input file containing encrypted text
        #[arg(short, long, help = "Path to the input file containing encrypted text")]
        file: PathBuf,

        /// Known key length; estimated when omitted
        #[arg(short, long)]
        key_length: Option<usize>,

        /// Also write the text decrypted with the recovered key here
        #[arg(short, long, help = "Path to the output file for decrypted text")]
        output: Option<PathBuf>,
    },
}

fn main() {
    let cli: Cli = Cli::parse();

    let outcome = match &cli.command {
        Command::Keylength { file, max_length } => {
            keylength(file, *max_length, cli.verbose).map(|length| length.to_string())
        }
        Command::Cryptanalyze {
            file,
            key_length,
            output,
        } => run_cryptanalysis(file, *key_length, output.as_deref(), cli.verbose)
            .map(|report| report.key.to_string()),
    };

    match outcome {
        Ok(line) => println!("{}", line),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(e.exit_code());
        }
    }
}

fn load_ciphertext(file: &Path, limits: &Limits, verbose: bool) -> Result<Text> {
    let ciphertext = io::read_text(file, limits)?;

    if ciphertext.len() < MIN_RELIABLE_LETTERS {
        eprintln!("Warning: Text may be too short for reliable analysis");
    }
    if verbose {
        eprintln!("DEBUG: {} letters after normalization", ciphertext.len());
    }

    Ok(ciphertext)
}

/// Estimates the key length of the ciphertext in `file`
fn keylength(file: &Path, max_length: usize, verbose: bool) -> Result<usize> {
    let limits = Limits::default().with_max_key_length(max_length)?;
    let ciphertext = load_ciphertext(file, &limits, verbose)?;

    if verbose {
        let report = cryptanalyze(&ciphertext, None, &limits)?;
        print_ic_table(&report);
        return Ok(report.key_length);
    }

    Ok(estimate_key_length(&ciphertext, limits.max_key_length))
}

/// Recovers the key of the ciphertext in `file`, optionally writing the
/// decryption it yields
fn run_cryptanalysis(
    file: &Path,
    key_length: Option<usize>,
    output: Option<&Path>,
    verbose: bool,
) -> Result<Cryptanalysis> {
    if let Some(length) = key_length {
        validate_key_length(length)?;
    }

    let limits = Limits::default();
    let ciphertext = load_ciphertext(file, &limits, verbose)?;
    let report = cryptanalyze(&ciphertext, key_length, &limits)?;

    if verbose {
        print_ic_table(&report);
        for (column, score) in report.columns.iter().enumerate() {
            eprintln!(
                "DEBUG: column {:2}: shift {} (chi-squared {:.2})",
                column, score.shift, score.chi_squared
            );
        }
    }

    if let Some(path) = output {
        let plaintext = decrypt(&report.key, &ciphertext);
        io::write_wrapped(path, &plaintext, limits.line_width)?;
        if verbose {
            eprintln!("DEBUG: decrypted text saved to {}", path.display());
        }
    }

    Ok(report)
}

fn print_ic_table(report: &Cryptanalysis) {
    for (index, ic) in report.average_ics.iter().enumerate() {
        let marker = if index + 1 == report.key_length { " <" } else { "" };
        eprintln!("DEBUG: period {:2}: average IC {:.4}{}", index + 1, ic, marker);
    }
}
