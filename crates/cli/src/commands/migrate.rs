//! migrate - copy every configured bucket pair
//!
//! Loads the bucket pairs, builds the S3 client and runs the driver.

use std::path::PathBuf;

use bm_core::{
    ConfigLoader, CopyOptions, DEFAULT_CONCURRENCY, DEFAULT_CONFIG_PATH, Driver, KeyMode,
    RunSummary,
};
use bm_s3::{ClientOptions, DEFAULT_PROFILE, DEFAULT_REGION, S3Client};
use clap::Args;
use serde::Serialize;

use crate::exit_code::ExitCode;
use crate::output::{Formatter, OutputConfig, Reporter};

/// Migration arguments
#[derive(Args, Debug)]
pub struct MigrateArgs {
    /// Bucket pair configuration file
    #[arg(long, env = "BUCKET_MIRROR_CONFIG", default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// AWS region
    #[arg(long, default_value = DEFAULT_REGION)]
    pub region: String,

    /// Profile from the shared AWS config and credentials files
    #[arg(long, default_value = DEFAULT_PROFILE)]
    pub profile: String,

    /// Custom endpoint URL for S3-compatible services
    #[arg(long)]
    pub endpoint_url: Option<String>,

    /// Use path-style bucket addressing
    #[arg(long)]
    pub path_style: bool,

    /// Maximum number of copies in flight per bucket pair
    #[arg(long, default_value_t = DEFAULT_CONCURRENCY)]
    pub concurrency: usize,

    /// Keep source keys unchanged instead of prefixing them with the source bucket
    #[arg(long)]
    pub preserve_keys: bool,

    /// Only show what would be copied (dry run)
    #[arg(long)]
    pub dry_run: bool,
}

impl MigrateArgs {
    fn client_options(&self) -> ClientOptions {
        ClientOptions {
            region: self.region.clone(),
            profile: self.profile.clone(),
            endpoint_url: self.endpoint_url.clone(),
            force_path_style: self.path_style,
        }
    }

    fn copy_options(&self) -> CopyOptions {
        let key_mode = if self.preserve_keys {
            KeyMode::Original
        } else {
            KeyMode::Qualified
        };

        CopyOptions::new()
            .concurrency(self.concurrency)
            .key_mode(key_mode)
            .dry_run(self.dry_run)
    }
}

#[derive(Debug, Serialize)]
struct MigrateOutput {
    status: &'static str,
    pairs: usize,
    objects: usize,
    dry_run: bool,
}

/// Execute the migration
pub async fn execute(args: MigrateArgs, output_config: OutputConfig) -> ExitCode {
    let formatter = Formatter::new(output_config.clone());

    let config = match ConfigLoader::with_path(&args.config).load() {
        Ok(c) => c,
        Err(e) => {
            formatter.error(&e.to_string());
            return ExitCode::from_error(&e);
        }
    };

    if config.locations.is_empty() {
        tracing::info!(path = %args.config.display(), "No bucket pairs configured");
        formatter.success("Nothing to migrate: no bucket pairs configured.");
        return ExitCode::Success;
    }

    let client = match S3Client::new(&args.client_options()).await {
        Ok(c) => c,
        Err(e) => {
            formatter.error(&format!("Failed to create S3 client: {e}"));
            return ExitCode::from_error(&e);
        }
    };

    let driver = Driver::new(&client, config.locations).copy_options(args.copy_options());
    let reporter = Reporter::new(output_config);

    match driver.run(&reporter).await {
        Ok(summary) => {
            report_summary(&formatter, summary, args.dry_run);
            ExitCode::Success
        }
        Err(e) => {
            formatter.error(&e.to_string());
            ExitCode::from_error(&e)
        }
    }
}

fn report_summary(formatter: &Formatter, summary: RunSummary, dry_run: bool) {
    if formatter.is_json() {
        formatter.json_line(&MigrateOutput {
            status: "success",
            pairs: summary.pairs,
            objects: summary.objects,
            dry_run,
        });
    } else if dry_run {
        formatter.success(&format!(
            "Dry run: {} object(s) would be copied across {} bucket pair(s).",
            summary.objects, summary.pairs
        ));
    } else {
        formatter.success(&format!(
            "Copied {} object(s) across {} bucket pair(s).",
            summary.objects, summary.pairs
        ));
    }
}
