// sheetmatch CLI - config-driven spreadsheet comparison

mod exit_codes;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use sheetmatch_engine::{flatten, run, Dataset, MatchConfig, MatchError};

use exit_codes::{EXIT_INVALID_CONFIG, EXIT_PARSE, EXIT_RUNTIME, EXIT_UNMATCHED};

struct CliError {
    code: u8,
    message: String,
}

fn cli_err(code: u8, message: impl Into<String>) -> CliError {
    CliError {
        code,
        message: message.into(),
    }
}

#[derive(Parser)]
#[command(name = "sheetmatch")]
#[command(about = "Compare two spreadsheets row-by-row with per-column rules")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a comparison from a TOML config file
    #[command(after_help = "\
Examples:
  sheetmatch run compare.toml
  sheetmatch run compare.toml --json
  sheetmatch run compare.toml --output results.xlsx")]
    Run {
        /// Path to the config file
        config: PathBuf,

        /// Output the full match result as JSON to stdout
        #[arg(long)]
        json: bool,

        /// Write the flattened result table to a .csv or .xlsx file
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Validate a config without running
    #[command(after_help = "\
Examples:
  sheetmatch validate compare.toml")]
    Validate {
        /// Path to the config file
        config: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run {
            config,
            json,
            output,
        } => cmd_run(&config, json, output.as_deref()),
        Commands::Validate { config } => cmd_validate(&config),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e.message);
            ExitCode::from(e.code)
        }
    }
}

/// Every engine error is a config problem: the engine itself does no IO and
/// fails only on parse/validation/unknown-column.
fn engine_error_code(err: &MatchError) -> u8 {
    match err {
        MatchError::ConfigParse(_)
        | MatchError::ConfigValidation(_)
        | MatchError::UnknownColumn { .. } => EXIT_INVALID_CONFIG,
    }
}

/// Decode both datasets, resolving file paths relative to the config file's
/// directory. Any decode failure is fatal before matching starts.
fn load_inputs(config_path: &Path, config: &MatchConfig) -> Result<(Dataset, Dataset), CliError> {
    let base_dir = config_path.parent().unwrap_or_else(|| Path::new("."));

    let left = sheetmatch_io::import(
        &base_dir.join(&config.left.file),
        config.left.sheet.as_deref(),
    )
    .map_err(|e| cli_err(EXIT_PARSE, format!("left input: {e}")))?;

    let right = sheetmatch_io::import(
        &base_dir.join(&config.right.file),
        config.right.sheet.as_deref(),
    )
    .map_err(|e| cli_err(EXIT_PARSE, format!("right input: {e}")))?;

    Ok((left, right))
}

fn cmd_run(config_path: &Path, json_output: bool, output_file: Option<&Path>) -> Result<(), CliError> {
    let config_str = std::fs::read_to_string(config_path)
        .map_err(|e| cli_err(EXIT_RUNTIME, format!("cannot read config: {e}")))?;
    let config = MatchConfig::from_toml(&config_str)
        .map_err(|e| cli_err(EXIT_INVALID_CONFIG, e.to_string()))?;

    let (left, right) = load_inputs(config_path, &config)?;

    let result = run(&config, &left, &right)
        .map_err(|e| cli_err(engine_error_code(&e), e.to_string()))?;

    if json_output {
        let json_str = serde_json::to_string_pretty(&result)
            .map_err(|e| cli_err(EXIT_RUNTIME, format!("JSON serialization error: {e}")))?;
        println!("{json_str}");
    }

    if let Some(path) = output_file {
        let table = flatten(&result);
        sheetmatch_io::export(&table, path).map_err(|e| cli_err(EXIT_RUNTIME, e))?;
        eprintln!("wrote {}", path.display());
    }

    // Human summary to stderr
    let s = &result.summary;
    eprintln!(
        "'{}': {} left row(s) — {} matched, {} unmatched",
        result.meta.config_name, s.total, s.matched, s.unmatched,
    );

    if s.unmatched > 0 {
        return Err(cli_err(EXIT_UNMATCHED, "unmatched rows found"));
    }

    Ok(())
}

fn cmd_validate(config_path: &Path) -> Result<(), CliError> {
    let config_str = std::fs::read_to_string(config_path)
        .map_err(|e| cli_err(EXIT_RUNTIME, format!("cannot read config: {e}")))?;

    match MatchConfig::from_toml(&config_str) {
        Ok(config) => {
            eprintln!(
                "valid: '{}' with {} column pair(s)",
                config.name,
                config.pairs.len(),
            );
            Ok(())
        }
        Err(e) => Err(cli_err(EXIT_INVALID_CONFIG, e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    const CONFIG: &str = r#"
name = "CSV run"

[left]
file = "left.csv"

[right]
file = "right.csv"

[[pairs]]
left = "name"
right = "name"
compare = "text"

[[pairs]]
left = "amount"
right = "amount"
compare = "number"
"#;

    #[test]
    fn run_matched_end_to_end() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("compare.toml"), CONFIG).unwrap();
        fs::write(dir.path().join("left.csv"), "name,amount\nBob,500.00\n").unwrap();
        fs::write(dir.path().join("right.csv"), "name,amount\n bob ,500\n").unwrap();

        let out = dir.path().join("results.csv");
        cmd_run(&dir.path().join("compare.toml"), false, Some(&out))
            .map_err(|e| e.message)
            .unwrap();

        let content = fs::read_to_string(&out).unwrap();
        assert!(content.starts_with("index,matched,left_name,left_amount,right_name,right_amount"));
        assert!(content.contains("0,yes,Bob,500.00, bob ,500"));
    }

    #[test]
    fn run_unmatched_exits_with_diff_code() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("compare.toml"), CONFIG).unwrap();
        fs::write(dir.path().join("left.csv"), "name,amount\nBob,500\n").unwrap();
        fs::write(dir.path().join("right.csv"), "name,amount\nAnn,500\n").unwrap();

        let err = cmd_run(&dir.path().join("compare.toml"), false, None).unwrap_err();
        assert_eq!(err.code, EXIT_UNMATCHED);
    }

    #[test]
    fn run_missing_input_is_parse_error() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("compare.toml"), CONFIG).unwrap();
        fs::write(dir.path().join("left.csv"), "name,amount\nBob,500\n").unwrap();

        let err = cmd_run(&dir.path().join("compare.toml"), false, None).unwrap_err();
        assert_eq!(err.code, EXIT_PARSE);
        assert!(err.message.starts_with("right input:"));
    }

    #[test]
    fn run_unknown_column_is_config_error() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("compare.toml"), CONFIG).unwrap();
        fs::write(dir.path().join("left.csv"), "name,amount\nBob,500\n").unwrap();
        fs::write(dir.path().join("right.csv"), "payee,amount\nBob,500\n").unwrap();

        let err = cmd_run(&dir.path().join("compare.toml"), false, None).unwrap_err();
        assert_eq!(err.code, EXIT_INVALID_CONFIG);
        assert!(err.message.contains("no column 'name'"));
    }

    #[test]
    fn validate_reports_bad_toml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(&path, "name = ").unwrap();

        let err = cmd_validate(&path).unwrap_err();
        assert_eq!(err.code, EXIT_INVALID_CONFIG);
    }

    #[test]
    fn validate_accepts_good_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("compare.toml");
        fs::write(&path, CONFIG).unwrap();
        assert!(cmd_validate(&path).is_ok());
    }
}
