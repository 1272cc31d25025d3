//! ObjectStore and Progress trait definitions
//!
//! `ObjectStore` is the storage seam: the S3 adapter implements it and tests
//! substitute fakes. `Progress` receives observable events from the
//! enumeration and copy phases.

use async_trait::async_trait;

use crate::error::Result;
use crate::path::QualifiedRef;

/// One page of a bucket listing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListPage {
    /// Object keys, in the order the service returned them
    pub keys: Vec<String>,

    /// Whether more pages remain
    pub is_truncated: bool,

    /// Token resuming the listing at the next page
    pub next_token: Option<String>,
}

impl ListPage {
    /// A final page holding the given keys
    pub fn last(keys: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
            is_truncated: false,
            next_token: None,
        }
    }

    /// A truncated page continuing at `token`
    pub fn more(
        keys: impl IntoIterator<Item = impl Into<String>>,
        token: impl Into<String>,
    ) -> Self {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
            is_truncated: true,
            next_token: Some(token.into()),
        }
    }
}

/// Trait for the storage operations the migration needs
///
/// This trait is implemented by the S3 adapter and can be mocked for testing.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Fetch one page of object keys, resuming at `continuation_token`
    async fn list_page(
        &self,
        bucket: &str,
        continuation_token: Option<String>,
    ) -> Result<ListPage>;

    /// Server-side copy of `copy_source` into `destination` under `key`
    async fn copy_object(
        &self,
        destination: &str,
        copy_source: &QualifiedRef,
        key: &str,
    ) -> Result<()>;
}

/// Receiver of progress events
///
/// Only `object_listed` is required; the copy events default to no-ops.
pub trait Progress: Send + Sync {
    /// An object was listed; `index` counts from zero across the whole bucket
    fn object_listed(&self, index: usize, key: &str);

    /// Copying into `destination` is about to start
    fn copy_started(&self, _destination: &str, _total: usize) {}

    /// A copy was issued successfully
    fn object_copied(&self, _source: &QualifiedRef, _destination: &str, _key: &str) {}

    /// A copy would have been issued, but this is a dry run
    fn copy_planned(&self, _source: &QualifiedRef, _destination: &str, _key: &str) {}

    /// Copying for the current pair ended, successfully or not
    fn copy_finished(&self) {}
}

/// Progress sink that discards every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl Progress for NoProgress {
    fn object_listed(&self, _index: usize, _key: &str) {}
}
