//! Server-side copy of enumerated objects
//!
//! Issues one copy per qualified reference into the destination bucket.
//! Copies run through a bounded window; with the default window of one they
//! are strictly sequential and follow enumeration order.

use futures::StreamExt;
use futures::stream;

use crate::error::{Error, Result};
use crate::path::QualifiedRef;
use crate::traits::{ObjectStore, Progress};

/// Default number of copies in flight
pub const DEFAULT_CONCURRENCY: usize = 1;

/// How the destination key is derived from a source reference
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum KeyMode {
    /// The whole `bucket/key` reference, so the source bucket name becomes a
    /// prefix in the destination
    #[default]
    Qualified,
    /// The source key unchanged
    Original,
}

impl KeyMode {
    /// Destination key for `source`
    pub fn destination_key<'a>(&self, source: &'a QualifiedRef) -> &'a str {
        match self {
            KeyMode::Qualified => source.as_str(),
            KeyMode::Original => source.key(),
        }
    }
}

/// Copy behaviour options
#[derive(Debug, Clone)]
pub struct CopyOptions {
    /// Maximum number of copies in flight
    pub concurrency: usize,

    /// Destination key derivation
    pub key_mode: KeyMode,

    /// Report planned copies without issuing them
    pub dry_run: bool,
}

impl Default for CopyOptions {
    fn default() -> Self {
        Self {
            concurrency: DEFAULT_CONCURRENCY,
            key_mode: KeyMode::default(),
            dry_run: false,
        }
    }
}

impl CopyOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn concurrency(mut self, n: usize) -> Self {
        self.concurrency = n.max(1);
        self
    }

    pub fn key_mode(mut self, mode: KeyMode) -> Self {
        self.key_mode = mode;
        self
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

/// Copy every reference in `refs` into `destination`
///
/// Returns the number of copies issued (or planned, in a dry run). The first
/// failure in enumeration order stops the run; no further copy is started
/// once it has been observed.
pub async fn copy_all<S>(
    store: &S,
    refs: &[QualifiedRef],
    destination: &str,
    options: &CopyOptions,
    progress: &dyn Progress,
) -> Result<usize>
where
    S: ObjectStore + ?Sized,
{
    tracing::info!(
        destination,
        objects = refs.len(),
        concurrency = options.concurrency,
        dry_run = options.dry_run,
        "Copying objects"
    );

    if options.dry_run {
        for source in refs {
            let key = options.key_mode.destination_key(source);
            progress.copy_planned(source, destination, key);
        }
        return Ok(refs.len());
    }

    progress.copy_started(destination, refs.len());
    let result = issue_copies(store, refs, destination, options, progress).await;
    progress.copy_finished();
    result
}

async fn issue_copies<S>(
    store: &S,
    refs: &[QualifiedRef],
    destination: &str,
    options: &CopyOptions,
    progress: &dyn Progress,
) -> Result<usize>
where
    S: ObjectStore + ?Sized,
{
    let key_mode = options.key_mode;

    // `buffered` yields results in input order, so the error surfaced is the
    // earliest failing reference regardless of completion timing.
    let copies = stream::iter(refs)
        .map(move |source| async move {
            let key = key_mode.destination_key(source);
            store
                .copy_object(destination, source, key)
                .await
                .map_err(|e| Error::Copy {
                    reference: source.to_string(),
                    destination: destination.to_string(),
                    source: Box::new(e),
                })?;
            tracing::debug!(source = %source, destination, key, "Copied object");
            progress.object_copied(source, destination, key);
            Ok::<_, Error>(())
        })
        .buffered(options.concurrency.max(1));
    let mut copies = std::pin::pin!(copies);

    let mut copied = 0;
    while let Some(result) = copies.next().await {
        result?;
        copied += 1;
    }

    Ok(copied)
}
