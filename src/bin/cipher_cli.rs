use anyhow::{bail, Result};
use cipher_core::{CipherEngine, CipherMode, CipherOutput, Direction};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "cipher_cli")]
#[command(about = "Classical shift-cipher toolbox")]
#[command(version)]
struct Cli {
    /// Output format
    #[arg(long, global = true)]
    json: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt text with the selected cipher
    Encrypt(TransformArgs),
    /// Decrypt text with the selected cipher
    Decrypt(TransformArgs),
    /// Try all 25 shifts against ciphertext with an unknown key
    Crack(CrackArgs),
}

#[derive(Args)]
struct TransformArgs {
    /// Text to transform
    text: String,

    /// Fixed Caesar shift
    #[arg(long, allow_negative_numbers = true)]
    shift: Option<i32>,

    /// Comma-separated per-word shift list, cycled across words
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    shifts: Option<Vec<i32>>,

    /// Keyword whose letters drive the per-letter shift (Vigenere)
    #[arg(long)]
    keyword: Option<String>,

    /// Comma-separated per-letter shift pattern
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    pattern: Option<Vec<i32>>,
}

#[derive(Args)]
struct CrackArgs {
    /// Ciphertext to brute force
    text: String,
}

impl TransformArgs {
    fn mode(&self) -> Result<CipherMode> {
        match (self.shift, &self.shifts, &self.keyword, &self.pattern) {
            (Some(shift), None, None, None) => Ok(CipherMode::Caesar { shift }),
            (None, Some(shifts), None, None) => Ok(CipherMode::MultiShift {
                shifts: shifts.clone(),
            }),
            (None, None, Some(keyword), None) => Ok(CipherMode::Keyword {
                keyword: keyword.clone(),
            }),
            (None, None, None, Some(pattern)) => Ok(CipherMode::Pattern {
                pattern: pattern.clone(),
            }),
            (None, None, None, None) => {
                bail!("select a cipher with --shift, --shifts, --keyword, or --pattern")
            }
            _ => bail!("--shift, --shifts, --keyword, and --pattern are mutually exclusive"),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("cipher_cli=debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("cipher_cli=warn"))
    };
    fmt().with_env_filter(filter).with_target(false).init();

    let engine = CipherEngine::new();
    match cli.command {
        Commands::Encrypt(args) => {
            let mode = args.mode()?;
            run(&engine, &args.text, &mode, Direction::Encrypt, cli.json)
        }
        Commands::Decrypt(args) => {
            let mode = args.mode()?;
            run(&engine, &args.text, &mode, Direction::Decrypt, cli.json)
        }
        Commands::Crack(args) => run(
            &engine,
            &args.text,
            &CipherMode::BruteForce,
            Direction::Decrypt,
            cli.json,
        ),
    }
}

fn run(
    engine: &CipherEngine,
    text: &str,
    mode: &CipherMode,
    direction: Direction,
    json: bool,
) -> Result<()> {
    tracing::debug!(?mode, ?direction, "applying cipher");

    match engine.apply(text, mode, direction) {
        CipherOutput::Text(result) => {
            if json {
                #[derive(Serialize)]
                struct Output<'a> {
                    input: &'a str,
                    result: &'a str,
                }
                println!(
                    "{}",
                    serde_json::to_string_pretty(&Output {
                        input: text,
                        result: &result,
                    })?
                );
            } else {
                println!("{}", result);
            }
        }
        CipherOutput::Candidates(candidates) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&candidates)?);
            } else {
                for candidate in &candidates {
                    println!("{:>2}  {}", candidate.shift, candidate.result);
                }
            }
        }
    }
    Ok(())
}
