use crate::core::decoder::CsvDecoder;
use crate::core::validator::ProductSchemaValidator;
use crate::core::{Decoder, ValidationOutcome, Validator};
use crate::utils::error::DecodeError;

/// Decode then validate. A decode failure short-circuits before any rule runs.
pub struct IntakePipeline<D: Decoder, V: Validator> {
    decoder: D,
    validator: V,
}

impl<D: Decoder, V: Validator> IntakePipeline<D, V> {
    pub fn new(decoder: D, validator: V) -> Self {
        Self { decoder, validator }
    }

    pub fn process(&self, bytes: &[u8]) -> Result<ValidationOutcome, DecodeError> {
        tracing::debug!("Decoding upload ({} bytes)", bytes.len());
        let records = self.decoder.decode(bytes)?;
        tracing::debug!("Decoded {} records", records.len());

        let outcome = self.validator.validate(records);
        match &outcome {
            ValidationOutcome::Valid(records) => {
                tracing::debug!("Validated {} records", records.len());
            }
            ValidationOutcome::Invalid(failure) => {
                tracing::warn!(
                    reason = %failure.reason,
                    row = ?failure.row,
                    column = ?failure.column,
                    "Upload rejected"
                );
            }
        }

        Ok(outcome)
    }
}

impl Default for IntakePipeline<CsvDecoder, ProductSchemaValidator> {
    fn default() -> Self {
        Self::new(CsvDecoder::new(), ProductSchemaValidator::new())
    }
}

/// Decodes `bytes` as a product CSV and validates it.
pub fn process(bytes: &[u8]) -> Result<ValidationOutcome, DecodeError> {
    IntakePipeline::default().process(bytes)
}
