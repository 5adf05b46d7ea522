pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::storage::LocalStorage;
pub use config::IntakeConfig;
pub use crate::core::{
    decoder::CsvDecoder,
    engine::IntakeEngine,
    pipeline::{process, IntakePipeline},
    response::UploadResponse,
    validator::ProductSchemaValidator,
};
pub use domain::model::{InvalidReason, RawUpload, Record, RecordSet, ValidationOutcome};
pub use utils::error::{DecodeError, IntakeError, Result};
