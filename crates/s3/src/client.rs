//! S3 client implementation
//!
//! Wraps aws-sdk-s3 and implements the ObjectStore trait from bm-core.

use async_trait::async_trait;
use aws_credential_types::provider::ProvideCredentials;
use aws_smithy_types::error::display::DisplayErrorContext;

use bm_core::{Error, ListPage, ObjectStore, QualifiedRef, Result};

/// Default region
pub const DEFAULT_REGION: &str = "us-east-1";

/// Default shared-config profile
pub const DEFAULT_PROFILE: &str = "default";

/// Connection settings for the storage client
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// AWS region
    pub region: String,

    /// Named profile from the shared AWS config and credentials files
    pub profile: String,

    /// Custom endpoint for S3-compatible services
    pub endpoint_url: Option<String>,

    /// Use path-style bucket addressing
    pub force_path_style: bool,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            region: DEFAULT_REGION.to_string(),
            profile: DEFAULT_PROFILE.to_string(),
            endpoint_url: None,
            force_path_style: false,
        }
    }
}

/// S3 client wrapper
pub struct S3Client {
    inner: aws_sdk_s3::Client,
}

impl S3Client {
    /// Create a new S3 client from the ambient AWS configuration
    ///
    /// Credentials are resolved eagerly so that a missing or broken profile
    /// fails here rather than on the first request.
    pub async fn new(options: &ClientOptions) -> Result<Self> {
        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(aws_config::Region::new(options.region.clone()))
            .profile_name(&options.profile);

        if let Some(endpoint) = &options.endpoint_url {
            loader = loader.endpoint_url(endpoint);
        }

        let config = loader.load().await;

        let provider = config.credentials_provider().ok_or_else(|| {
            Error::ClientInit(format!(
                "no credentials provider for profile '{}'",
                options.profile
            ))
        })?;

        provider.provide_credentials().await.map_err(|e| {
            Error::ClientInit(format!(
                "could not resolve credentials for profile '{}': {}",
                options.profile,
                DisplayErrorContext(&e)
            ))
        })?;

        tracing::debug!(
            region = %options.region,
            profile = %options.profile,
            endpoint = ?options.endpoint_url,
            "Created S3 client"
        );

        let s3_config = aws_sdk_s3::config::Builder::from(&config)
            .force_path_style(options.force_path_style)
            .build();

        Ok(Self {
            inner: aws_sdk_s3::Client::from_conf(s3_config),
        })
    }
}

/// Map a rendered SDK error onto the bm-core error kinds
fn classify(message: String) -> Error {
    const NOT_FOUND: [&str; 3] = ["NoSuchBucket", "NoSuchKey", "NotFound"];
    const DENIED: [&str; 4] = [
        "AccessDenied",
        "InvalidAccessKeyId",
        "SignatureDoesNotMatch",
        "ExpiredToken",
    ];

    if NOT_FOUND.iter().any(|code| message.contains(code)) {
        Error::NotFound(message)
    } else if DENIED.iter().any(|code| message.contains(code)) {
        Error::Auth(message)
    } else {
        Error::Network(message)
    }
}

#[async_trait]
impl ObjectStore for S3Client {
    async fn list_page(
        &self,
        bucket: &str,
        continuation_token: Option<String>,
    ) -> Result<ListPage> {
        let response = self
            .inner
            .list_objects_v2()
            .bucket(bucket)
            .set_continuation_token(continuation_token)
            .send()
            .await
            .map_err(|e| classify(DisplayErrorContext(&e).to_string()))?;

        let keys = response
            .contents()
            .iter()
            .filter_map(|object| object.key().map(str::to_string))
            .collect();

        Ok(ListPage {
            keys,
            is_truncated: response.is_truncated().unwrap_or(false),
            next_token: response.next_continuation_token().map(str::to_string),
        })
    }

    async fn copy_object(
        &self,
        destination: &str,
        copy_source: &QualifiedRef,
        key: &str,
    ) -> Result<()> {
        self.inner
            .copy_object()
            .copy_source(copy_source.as_str())
            .bucket(destination)
            .key(key)
            .send()
            .await
            .map_err(|e| classify(DisplayErrorContext(&e).to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = ClientOptions::default();
        assert_eq!(options.region, "us-east-1");
        assert_eq!(options.profile, "default");
        assert!(options.endpoint_url.is_none());
        assert!(!options.force_path_style);
    }

    #[test]
    fn test_classify_not_found() {
        let err = classify(
            "service error: NoSuchBucket: The specified bucket does not exist".into(),
        );
        assert!(matches!(err, Error::NotFound(_)));
        assert_eq!(err.exit_code(), 5);
    }

    #[test]
    fn test_classify_auth() {
        let err = classify("service error: AccessDenied: Access Denied".into());
        assert!(matches!(err, Error::Auth(_)));

        let err = classify(
            "InvalidAccessKeyId: The AWS Access Key Id you provided does not exist".into(),
        );
        assert!(matches!(err, Error::Auth(_)));
    }

    #[test]
    fn test_classify_other_is_network() {
        let err = classify("dispatch failure: io error: connection refused".into());
        assert!(matches!(err, Error::Network(_)));
        assert_eq!(err.exit_code(), 3);
    }
}
