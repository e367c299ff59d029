use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, ValueEnum};
use vigenere_core::{io, transform, Direction, Key, Limits, Result, Text};

/// Command-line arguments for the Vigenère cipher program.
#[derive(Parser, Debug)]
#[command(version, about = "Encrypt or decrypt a text file with the Vigenère cipher")]
struct Cli {
    /// Path to the input file (at most 100 KB; non-letters are dropped)
    #[arg(short, long, help = "Path to the input file")]
    file: PathBuf,

    /// Key: 1 to 32 upper-case letters A-Z
    #[arg(short, long, help = "Key string for the cipher (A-Z, up to 32 letters)")]
    key: String,

    /// Path to the output file; defaults to ciphertext.txt or deciphertext.txt
    #[arg(short, long, help = "Path to the output file")]
    output: Option<PathBuf>,

    /// Mode of operation (encrypt or decrypt)
    #[arg(short, long, help = "Mode of operation (encrypt/decrypt)")]
    mode: OperationMode,

    /// Print diagnostics to stderr
    #[arg(short, long)]
    verbose: bool,
}

/// Enum representing the mode of operation for the cipher.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OperationMode {
    /// Encrypt mode
    Encrypt,
    /// Decrypt mode
    Decrypt,
}

impl OperationMode {
    fn default_output(self) -> &'static str {
        match self {
            OperationMode::Encrypt => "ciphertext.txt",
            OperationMode::Decrypt => "deciphertext.txt",
        }
    }
}

impl From<OperationMode> for Direction {
    fn from(mode: OperationMode) -> Self {
        match mode {
            OperationMode::Encrypt => Direction::Encrypt,
            OperationMode::Decrypt => Direction::Decrypt,
        }
    }
}

/// Main entry point for the Vigenère cipher program.
fn main() {
    let cli: Cli = Cli::parse();

    match run(&cli) {
        // Result goes to stdout, the wrapped copy to the output file
        Ok(result) => println!("{}", result),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(e.exit_code());
        }
    }
}

/// Validates the key, transforms the input file and writes the output file.
///
/// The key is checked before the input is touched, and nothing is written
/// unless every step succeeds.
fn run(cli: &Cli) -> Result<Text> {
    let key = Key::parse(&cli.key)?;
    let limits = Limits::default();
    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(cli.mode.default_output()));

    let input = io::read_text(&cli.file, &limits)?;
    let direction = Direction::from(cli.mode);

    if cli.verbose {
        eprintln!("DEBUG: {} {} letters with a {}-letter key", direction, input.len(), key.len());
    }

    let result = transform(direction, &key, &input);
    write_output(&output, &result, &limits, cli.verbose)?;

    Ok(result)
}

fn write_output(path: &Path, text: &Text, limits: &Limits, verbose: bool) -> Result<()> {
    io::write_wrapped(path, text, limits.line_width)?;

    if verbose {
        eprintln!("DEBUG: output saved to {}", path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use vigenere_core::VigenereError;

    fn cli(file: &Path, key: &str, output: &Path, mode: OperationMode) -> Cli {
        Cli {
            file: file.to_path_buf(),
            key: key.to_string(),
            output: Some(output.to_path_buf()),
            mode,
            verbose: false,
        }
    }

    #[test]
    fn test_encrypt_then_decrypt_files() {
        let dir = tempfile::tempdir().unwrap();
        let plain = dir.path().join("plain.txt");
        let cipher = dir.path().join("cipher.txt");
        let deciphered = dir.path().join("deciphered.txt");
        fs::write(&plain, "Hello, World!\n").unwrap();

        let encrypted = run(&cli(&plain, "KEY", &cipher, OperationMode::Encrypt)).unwrap();
        assert_eq!(encrypted.to_string(), "RIJVSUYVJN");
        assert_eq!(fs::read_to_string(&cipher).unwrap(), "RIJVSUYVJN\n");

        let decrypted = run(&cli(&cipher, "KEY", &deciphered, OperationMode::Decrypt)).unwrap();
        assert_eq!(decrypted.to_string(), "HELLOWORLD");
    }

    #[test]
    fn test_invalid_key_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let plain = dir.path().join("plain.txt");
        let output = dir.path().join("out.txt");
        fs::write(&plain, "attack at dawn").unwrap();

        let result = run(&cli(&plain, "lowercase", &output, OperationMode::Encrypt));
        assert!(matches!(result, Err(VigenereError::InvalidKey(_))));
        assert_eq!(result.unwrap_err().exit_code(), 1);
        assert!(!output.exists());
    }

    #[test]
    fn test_missing_input_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out.txt");

        let result = run(&cli(&dir.path().join("nope.txt"), "KEY", &output, OperationMode::Decrypt));
        let err = result.unwrap_err();
        assert!(matches!(err, VigenereError::InputUnreadable { .. }));
        assert_eq!(err.exit_code(), 3);
        assert!(!output.exists());
    }

    #[test]
    fn test_default_output_names() {
        assert_eq!(OperationMode::Encrypt.default_output(), "ciphertext.txt");
        assert_eq!(OperationMode::Decrypt.default_output(), "deciphertext.txt");
    }

    #[test]
    fn test_cli_parses_mode() {
        let cli = Cli::try_parse_from(["vigenere", "-f", "in.txt", "-k", "KEY", "-m", "decrypt"]).unwrap();
        assert_eq!(cli.mode, OperationMode::Decrypt);
        assert!(cli.output.is_none());
    }
}
