pub mod decoder;
pub mod engine;
pub mod pipeline;
pub mod response;
pub mod validator;

pub use crate::domain::model::{RawUpload, Record, RecordSet, ValidationOutcome};
pub use crate::domain::ports::{Decoder, UploadStore, Validator};
pub use crate::utils::error::Result;
