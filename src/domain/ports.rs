use crate::domain::model::{RecordSet, ValidationOutcome};
use crate::utils::error::{DecodeError, Result};

pub trait UploadStore: Send + Sync {
    fn read_upload(&self, path: &str)
        -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
}

pub trait Decoder: Send + Sync {
    fn decode(&self, bytes: &[u8]) -> std::result::Result<RecordSet, DecodeError>;
}

pub trait Validator: Send + Sync {
    fn validate(&self, records: RecordSet) -> ValidationOutcome;
}
