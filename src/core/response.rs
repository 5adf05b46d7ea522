use crate::core::{RecordSet, ValidationOutcome};
use crate::utils::error::{DecodeError, Result};
use serde::Serialize;

pub const PROCESSED_MESSAGE: &str = "CSV file processed successfully";
pub const VALIDATION_FAILED_MESSAGE: &str = "CSV file validation failed";
pub const PARSE_FAILED_MESSAGE: &str = "Error parsing file";
pub const NO_FILE_MESSAGE: &str = "No file uploaded.";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResponseBody {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<RecordSet>,
}

/// What the transport sends back for one upload.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadResponse {
    pub status: u16,
    pub body: ResponseBody,
}

impl UploadResponse {
    pub fn from_result(result: std::result::Result<ValidationOutcome, DecodeError>) -> Self {
        match result {
            Ok(ValidationOutcome::Valid(records)) => Self {
                status: 200,
                body: ResponseBody {
                    message: PROCESSED_MESSAGE.to_string(),
                    error: None,
                    data: Some(records),
                },
            },
            Ok(ValidationOutcome::Invalid(failure)) => Self {
                status: 400,
                body: ResponseBody {
                    message: VALIDATION_FAILED_MESSAGE.to_string(),
                    error: Some(failure.reason.to_string()),
                    data: None,
                },
            },
            Err(e) => Self {
                status: 500,
                body: ResponseBody {
                    message: PARSE_FAILED_MESSAGE.to_string(),
                    error: Some(e.to_string()),
                    data: None,
                },
            },
        }
    }

    pub fn no_file() -> Self {
        Self {
            status: 400,
            body: ResponseBody {
                message: NO_FILE_MESSAGE.to_string(),
                error: None,
                data: None,
            },
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(&self.body)?
        } else {
            serde_json::to_string(&self.body)?
        };
        Ok(json)
    }
}
