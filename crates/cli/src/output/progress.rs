//! Progress reporting for a migration run
//!
//! `Reporter` turns driver events into output: one stdout line per listed
//! object, planned copies in dry runs, and a copy progress bar on stderr.

use std::sync::Mutex;

use bm_core::{Progress, QualifiedRef};
use serde::Serialize;

use super::{Formatter, OutputConfig};

/// Progress bar wrapper
///
/// Handles progress display based on output configuration.
/// In quiet or JSON mode, progress is suppressed.
#[derive(Debug)]
pub struct ProgressBar {
    bar: Option<indicatif::ProgressBar>,
}

impl ProgressBar {
    /// Create a new progress bar counting `total` objects
    pub fn new(config: &OutputConfig, total: u64, message: &str) -> Self {
        let bar = if config.quiet || config.json || config.no_progress {
            None
        } else {
            let bar = indicatif::ProgressBar::new(total);
            bar.set_style(
                indicatif::ProgressStyle::default_bar()
                    .template("{spinner:.green} {msg} [{bar:40.cyan/blue}] {pos}/{len} ({eta})")
                    .expect("valid template")
                    .progress_chars("#>-"),
            );
            bar.set_message(message.to_string());
            Some(bar)
        };

        Self { bar }
    }

    /// Increment progress
    pub fn inc(&self, delta: u64) {
        if let Some(bar) = &self.bar {
            bar.inc(delta);
        }
    }

    /// Finish and clear the progress bar
    pub fn finish_and_clear(&self) {
        if let Some(bar) = &self.bar {
            bar.finish_and_clear();
        }
    }
}

/// Human-readable line for a listed object
fn listed_line(index: usize, key: &str) -> String {
    format!("Object {index}: {key}")
}

/// Human-readable line for a copy skipped by a dry run
fn planned_line(source: &QualifiedRef, destination: &str, key: &str) -> String {
    format!("Would copy: {source} -> {destination}/{key}")
}

#[derive(Debug, Serialize)]
struct ListedLine<'a> {
    index: usize,
    key: &'a str,
}

#[derive(Debug, Serialize)]
struct PlannedLine<'a> {
    status: &'static str,
    source: &'a str,
    destination: &'a str,
    key: &'a str,
}

/// Output sink for driver events
#[derive(Debug)]
pub struct Reporter {
    config: OutputConfig,
    formatter: Formatter,
    bar: Mutex<Option<ProgressBar>>,
}

impl Reporter {
    pub fn new(config: OutputConfig) -> Self {
        Self {
            formatter: Formatter::new(config.clone()),
            config,
            bar: Mutex::new(None),
        }
    }

    fn with_bar(&self, f: impl FnOnce(&mut Option<ProgressBar>)) {
        // Keep drawing through a poisoned lock.
        let mut bar = match self.bar.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        f(&mut bar);
    }
}

impl Progress for Reporter {
    fn object_listed(&self, index: usize, key: &str) {
        if self.formatter.is_json() {
            self.formatter.json_line(&ListedLine { index, key });
        } else {
            self.formatter.println(&listed_line(index, key));
        }
    }

    fn copy_started(&self, destination: &str, total: usize) {
        let message = format!("copying into {destination}");
        self.with_bar(|bar| {
            *bar = Some(ProgressBar::new(&self.config, total as u64, &message));
        });
    }

    fn object_copied(&self, _source: &QualifiedRef, _destination: &str, _key: &str) {
        self.with_bar(|bar| {
            if let Some(bar) = bar {
                bar.inc(1);
            }
        });
    }

    fn copy_planned(&self, source: &QualifiedRef, destination: &str, key: &str) {
        if self.formatter.is_json() {
            self.formatter.json_line(&PlannedLine {
                status: "planned",
                source: source.as_str(),
                destination,
                key,
            });
        } else {
            self.formatter.println(&planned_line(source, destination, key));
        }
    }

    fn copy_finished(&self) {
        self.with_bar(|bar| {
            if let Some(bar) = bar.take() {
                bar.finish_and_clear();
            }
        });
    }
}
