use std::fmt;

use bytes::BytesMut;
use futures_util::TryStreamExt;
use log::debug;
use rusoto_core::ByteStream;
use rusoto_s3::{PutObjectRequest, S3Client, S3};
use tokio::runtime::{Builder, Runtime};
use tokio_util::codec::{BytesCodec, FramedRead};

use crate::cloud::client::create_s3_client;
use crate::cloud::{ObjectStore, PutRequest, UploadBody};
use crate::config::UploadConfig;
use crate::error::{BoxError, UploadError, UploadResult};

/// Object store backed by a rusoto S3 client.
///
/// rusoto is async-only, so the store owns a current-thread tokio runtime
/// and blocks on each request. Exactly one request is in flight at a time.
pub struct S3ObjectStore {
    client: S3Client,
    runtime: Runtime,
}

impl fmt::Debug for S3ObjectStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("S3ObjectStore").finish_non_exhaustive()
    }
}

impl S3ObjectStore {
    /// Create a store using the credentials, region and endpoint in `config`.
    pub fn new(config: &UploadConfig) -> UploadResult<Self> {
        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| UploadError::Client(format!("failed to create tokio runtime: {}", e)))?;
        // hyper's connector wants a reactor in scope while it is built
        let client = {
            let _guard = runtime.enter();
            create_s3_client(config)?
        };

        Ok(S3ObjectStore { client, runtime })
    }
}

impl ObjectStore for S3ObjectStore {
    fn put_object(&self, request: PutRequest) -> Result<(), BoxError> {
        let PutRequest {
            bucket,
            key,
            acl,
            content_type,
            content_encoding,
            body,
        } = request;
        let content_length = body.len();

        self.runtime.block_on(async {
            let request = PutObjectRequest {
                bucket,
                key: object_key(&key).to_string(),
                acl,
                content_type: Some(content_type),
                content_encoding,
                content_length: Some(content_length as i64),
                body: Some(into_byte_stream(body)),
                ..Default::default()
            };

            let output = self.client.put_object(request).await?;
            debug!("PutObject accepted (etag: {:?})", output.e_tag);
            Ok::<(), BoxError>(())
        })
    }
}

/// The key as sent to S3.
///
/// Upload keys are rooted at `/`, but rusoto places the key after
/// `/{bucket}/` verbatim, so the root has to be dropped here or the stored
/// object name would start with a slash.
fn object_key(key: &str) -> &str {
    key.trim_start_matches('/')
}

/// Convert an upload body into a sized rusoto stream.
///
/// File bodies are read in chunks as the request is sent rather than being
/// loaded into memory first. Must be called within the runtime.
fn into_byte_stream(body: UploadBody) -> ByteStream {
    match body {
        UploadBody::File { file, len } => {
            let file = tokio::fs::File::from_std(file);
            let stream = FramedRead::new(file, BytesCodec::new()).map_ok(BytesMut::freeze);
            ByteStream::new_with_size(stream, len as usize)
        }
        UploadBody::Bytes(bytes) => ByteStream::from(bytes),
    }
}
