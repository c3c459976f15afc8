//! `kontak` – scan text for contact information from the command line.
//!
//! Reads from a positional argument, `--file`, or stdin, and prints either
//! a human-readable summary or the serialized detection result. The exit
//! code makes the tool usable as a shell filter: 0 = clean, 1 = contact
//! info found, 2 = error.

use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use log::debug;

use kontak_core::{detect_contact_info, detect_contact_info_bytes, ContactKind, DetectionResult};

#[derive(Parser, Debug)]
#[command(
    name = "kontak",
    version,
    about = "Detect contact information (emails, PH phone numbers, social handles) in text"
)]
struct Args {
    /// Text to scan. Reads stdin when neither TEXT nor --file is given.
    text: Option<String>,

    /// Scan the contents of a file instead of TEXT/stdin.
    #[arg(short, long, conflicts_with = "text")]
    file: Option<PathBuf>,

    /// Print the full detection result as JSON.
    #[arg(long)]
    json: bool,

    /// Suppress output; communicate through the exit code only.
    #[arg(short, long, conflicts_with = "json")]
    quiet: bool,
}

fn main() -> ExitCode {
    env_logger::init();

    match run(Args::parse()) {
        Ok(found) => {
            if found {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(2)
        }
    }
}

fn run(args: Args) -> Result<bool> {
    let result = match (&args.file, &args.text) {
        (Some(path), _) => {
            let bytes = std::fs::read(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            debug!("scanning {} ({} bytes)", path.display(), bytes.len());
            detect_contact_info_bytes(&bytes)
                .with_context(|| format!("{} does not contain text", path.display()))?
        }
        (None, Some(text)) => detect_contact_info(text),
        (None, None) => {
            let mut buf = Vec::new();
            std::io::stdin()
                .read_to_end(&mut buf)
                .context("failed to read stdin")?;
            debug!("scanning stdin ({} bytes)", buf.len());
            detect_contact_info_bytes(&buf).context("stdin is not text")?
        }
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else if !args.quiet {
        print_summary(&result);
    }

    Ok(result.has_contact_info)
}

fn print_summary(result: &DetectionResult) {
    if !result.has_contact_info {
        println!("clean: no contact information detected");
        return;
    }

    println!("contact information detected:");
    for kind in ContactKind::ALL {
        for text in result.details.for_kind(kind) {
            println!("  {:<7} {}", kind.key(), text);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }

    #[test]
    fn test_text_and_file_conflict() {
        let parsed = Args::try_parse_from(["kontak", "hello", "--file", "x.txt"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_run_reports_detection() {
        let args = Args::try_parse_from(["kontak", "--quiet", "ring 0917-123-4567"]).unwrap();
        assert!(run(args).unwrap());

        let args = Args::try_parse_from(["kontak", "--quiet", "nothing here"]).unwrap();
        assert!(!run(args).unwrap());
    }
}
