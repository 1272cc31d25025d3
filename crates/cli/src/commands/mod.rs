//! CLI definition and execution
//!
//! bucket-mirror has a single operation, so the top-level parser flattens the
//! migration arguments instead of dispatching subcommands. Every flag is
//! optional; running with none reads `config.yaml` from the working
//! directory and uses the `default` profile in `us-east-1`.

use clap::Parser;

use crate::exit_code::ExitCode;
use crate::output::OutputConfig;

pub mod migrate;

/// bucket-mirror - server-side bucket copy
///
/// Copies every object of each configured source bucket into its destination
/// bucket using server-side copies. Bucket pairs are read from a YAML file.
#[derive(Parser, Debug)]
#[command(name = "bucket-mirror")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Print progress lines as JSON objects
    #[arg(long)]
    pub json: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Disable progress bar
    #[arg(long)]
    pub no_progress: bool,

    /// Suppress per-object output
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    #[command(flatten)]
    pub migrate: migrate::MigrateArgs,
}

/// Execute the CLI and return an exit code
pub async fn execute(cli: Cli) -> ExitCode {
    let output_config = OutputConfig {
        json: cli.json,
        no_color: cli.no_color,
        no_progress: cli.no_progress,
        quiet: cli.quiet,
    };

    migrate::execute(cli.migrate, output_config).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_without_arguments() {
        let cli = Cli::try_parse_from(["bucket-mirror"]).unwrap();
        assert!(!cli.json);
        assert!(!cli.quiet);
        assert!(!cli.debug);
    }

    #[test]
    fn test_cli_output_flags() {
        let cli = Cli::try_parse_from(["bucket-mirror", "--json", "-q", "--no-progress"]).unwrap();
        assert!(cli.json);
        assert!(cli.quiet);
        assert!(cli.no_progress);
    }

    #[test]
    fn test_cli_rejects_positional_arguments() {
        assert!(Cli::try_parse_from(["bucket-mirror", "src", "dst"]).is_err());
    }
}
