use crate::core::decoder::CsvDecoder;
use crate::core::pipeline::IntakePipeline;
use crate::core::response::UploadResponse;
use crate::core::validator::ProductSchemaValidator;
use crate::core::{Decoder, RawUpload, UploadStore, Validator};
use crate::utils::error::{IntakeError, Result};

pub struct IntakeEngine<S: UploadStore, D: Decoder = CsvDecoder, V: Validator = ProductSchemaValidator>
{
    store: S,
    pipeline: IntakePipeline<D, V>,
}

impl<S: UploadStore> IntakeEngine<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            pipeline: IntakePipeline::default(),
        }
    }
}

impl<S: UploadStore, D: Decoder, V: Validator> IntakeEngine<S, D, V> {
    pub fn with_pipeline(store: S, pipeline: IntakePipeline<D, V>) -> Self {
        Self { store, pipeline }
    }

    /// Reads the upload at `path` and turns it into a response.
    ///
    /// `None` or a path that does not exist yields the "no file" response.
    /// Other read failures are returned as errors.
    pub async fn run(&self, path: Option<&str>) -> Result<UploadResponse> {
        let Some(path) = path else {
            tracing::info!("No upload supplied");
            return Ok(UploadResponse::no_file());
        };

        tracing::info!("Reading upload: {}", path);
        let upload = match self.store.read_upload(path).await {
            Ok(bytes) => RawUpload::from(bytes),
            Err(IntakeError::MissingUpload { path }) => {
                tracing::warn!("Upload not found: {}", path);
                return Ok(UploadResponse::no_file());
            }
            Err(e) => return Err(e),
        };
        tracing::debug!("Read {} bytes", upload.len());

        let response = UploadResponse::from_result(self.pipeline.process(upload.as_bytes()));
        if response.is_success() {
            tracing::info!("Upload accepted");
        } else {
            tracing::info!(
                "Upload refused with status {}: {}",
                response.status,
                response.body.error.as_deref().unwrap_or(&response.body.message)
            );
        }

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::response::{NO_FILE_MESSAGE, PARSE_FAILED_MESSAGE};
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[derive(Clone)]
    struct MockStorage {
        files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    }

    impl MockStorage {
        fn new() -> Self {
            Self {
                files: Arc::new(Mutex::new(HashMap::new())),
            }
        }

        async fn put_file(&self, path: &str, data: &[u8]) {
            let mut files = self.files.lock().await;
            files.insert(path.to_string(), data.to_vec());
        }
    }

    impl UploadStore for MockStorage {
        async fn read_upload(&self, path: &str) -> Result<Vec<u8>> {
            let files = self.files.lock().await;
            files
                .get(path)
                .cloned()
                .ok_or_else(|| IntakeError::MissingUpload {
                    path: path.to_string(),
                })
        }
    }

    struct BrokenStorage;

    impl UploadStore for BrokenStorage {
        async fn read_upload(&self, _path: &str) -> Result<Vec<u8>> {
            Err(IntakeError::IoError(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "denied",
            )))
        }
    }

    #[tokio::test]
    async fn test_run_accepts_valid_upload() {
        let storage = MockStorage::new();
        storage
            .put_file(
                "products.csv",
                b"S.No,Product Name,Input Image Urls\n1,Widget,https://a.com/x.jpg\n",
            )
            .await;

        let engine = IntakeEngine::new(storage);
        let response = engine.run(Some("products.csv")).await.unwrap();

        assert_eq!(response.status, 200);
        assert_eq!(response.body.data.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_run_without_upload() {
        let engine = IntakeEngine::new(MockStorage::new());

        let response = engine.run(None).await.unwrap();
        assert_eq!(response.status, 400);
        assert_eq!(response.body.message, NO_FILE_MESSAGE);

        let response = engine.run(Some("missing.csv")).await.unwrap();
        assert_eq!(response, UploadResponse::no_file());
    }

    #[tokio::test]
    async fn test_run_reports_parse_failure() {
        let storage = MockStorage::new();
        storage.put_file("broken.csv", b"S.No\n\"1\n").await;

        let engine = IntakeEngine::new(storage);
        let response = engine.run(Some("broken.csv")).await.unwrap();

        assert_eq!(response.status, 500);
        assert_eq!(response.body.message, PARSE_FAILED_MESSAGE);
    }

    #[tokio::test]
    async fn test_run_with_custom_pipeline() {
        let storage = MockStorage::new();
        storage
            .put_file(
                "products.csv",
                b"S.No;Product Name;Input Image Urls\n1;Widget;https://a.com/x.jpg\n",
            )
            .await;

        let pipeline = IntakePipeline::new(
            CsvDecoder::new().with_delimiter(b';'),
            ProductSchemaValidator::new(),
        );
        let engine = IntakeEngine::with_pipeline(storage, pipeline);

        let response = engine.run(Some("products.csv")).await.unwrap();
        assert!(response.is_success());
    }

    #[tokio::test]
    async fn test_run_propagates_storage_errors() {
        let engine = IntakeEngine::new(BrokenStorage);
        let err = engine.run(Some("products.csv")).await.unwrap_err();
        assert!(matches!(err, IntakeError::IoError(_)));
    }
}
