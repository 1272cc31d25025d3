//! Run orchestration
//!
//! Processes the configured bucket pairs in declared order. For each pair the
//! source is fully enumerated before any copy is issued, and a pair finishes
//! before the next one begins. The first error aborts the run.

use crate::config::BucketPair;
use crate::enumerate::list_bucket;
use crate::error::{Error, Phase, Result};
use crate::migrate::{CopyOptions, copy_all};
use crate::traits::{ObjectStore, Progress};

/// Totals for a completed run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Bucket pairs processed
    pub pairs: usize,

    /// Objects copied (or planned, in a dry run)
    pub objects: usize,
}

/// Drives a migration over a list of bucket pairs
pub struct Driver<'a, S: ObjectStore + ?Sized> {
    store: &'a S,
    pairs: Vec<BucketPair>,
    options: CopyOptions,
}

impl<'a, S: ObjectStore + ?Sized> Driver<'a, S> {
    /// Create a driver over `pairs`, sharing `store` across every phase
    pub fn new(store: &'a S, pairs: Vec<BucketPair>) -> Self {
        Self {
            store,
            pairs,
            options: CopyOptions::default(),
        }
    }

    /// Set copy options for every pair
    pub fn copy_options(mut self, options: CopyOptions) -> Self {
        self.options = options;
        self
    }

    /// Run every pair to completion, stopping at the first failure
    pub async fn run(&self, progress: &dyn Progress) -> Result<RunSummary> {
        let mut summary = RunSummary::default();

        for (index, pair) in self.pairs.iter().enumerate() {
            tracing::info!(
                index,
                source = %pair.source,
                destination = %pair.destination,
                "Starting bucket pair"
            );

            let refs = list_bucket(self.store, &pair.source, progress)
                .await
                .map_err(|e| abort(index, pair, Phase::Enumerate, e))?;

            let copied = copy_all(
                self.store,
                &refs,
                &pair.destination,
                &self.options,
                progress,
            )
            .await
            .map_err(|e| abort(index, pair, Phase::Copy, e))?;

            tracing::info!(index, objects = copied, "Finished bucket pair");

            summary.pairs += 1;
            summary.objects += copied;
        }

        Ok(summary)
    }
}

fn abort(index: usize, pair: &BucketPair, phase: Phase, cause: Error) -> Error {
    tracing::warn!(index, %phase, error = %cause, "Aborting run");
    Error::Aborted {
        index,
        source_bucket: pair.source.clone(),
        destination: pair.destination.clone(),
        phase,
        source: Box::new(cause),
    }
}
