//! Bucket enumeration
//!
//! Lists every object in a bucket by following continuation tokens until the
//! service reports the final page.

use crate::error::{Error, Result};
use crate::path::QualifiedRef;
use crate::traits::{ObjectStore, Progress};

/// List every object in `bucket` as qualified `bucket/key` references
///
/// Each key is reported to `progress` with a zero-based index counting across
/// all pages. Any failed page call aborts the listing; no partial result is
/// returned.
pub async fn list_bucket<S>(
    store: &S,
    bucket: &str,
    progress: &dyn Progress,
) -> Result<Vec<QualifiedRef>>
where
    S: ObjectStore + ?Sized,
{
    let mut refs = Vec::new();
    let mut continuation_token: Option<String> = None;
    let mut page_number = 0usize;

    loop {
        let page = store
            .list_page(bucket, continuation_token.take())
            .await
            .map_err(|e| Error::List {
                bucket: bucket.to_string(),
                source: Box::new(e),
            })?;
        page_number += 1;

        for key in &page.keys {
            progress.object_listed(refs.len(), key);
            refs.push(QualifiedRef::new(bucket, key));
        }

        tracing::debug!(
            bucket,
            page = page_number,
            keys = page.keys.len(),
            total = refs.len(),
            truncated = page.is_truncated,
            "Listed page"
        );

        if !page.is_truncated {
            break;
        }

        match page.next_token {
            Some(token) if !token.is_empty() => continuation_token = Some(token),
            _ => {
                return Err(Error::List {
                    bucket: bucket.to_string(),
                    source: Box::new(Error::InvalidResponse(format!(
                        "page {page_number} is truncated but has no continuation token"
                    ))),
                });
            }
        }
    }

    Ok(refs)
}
