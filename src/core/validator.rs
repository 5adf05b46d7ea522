use crate::core::{Record, RecordSet, ValidationOutcome, Validator};
use crate::domain::model::{InvalidReason, ValidationFailure};

pub const SERIAL_NUMBER: &str = "S.No";
pub const PRODUCT_NAME: &str = "Product Name";
pub const INPUT_IMAGE_URLS: &str = "Input Image Urls";

pub const REQUIRED_FIELDS: [&str; 3] = [SERIAL_NUMBER, PRODUCT_NAME, INPUT_IMAGE_URLS];

const IMAGE_URL_PREFIX: &str = "https://";
const IMAGE_URL_SUFFIX: &str = ".jpg";

type FieldRule = fn(&str) -> bool;

const CONTENT_RULES: [(&str, FieldRule); 3] = [
    (SERIAL_NUMBER, is_serial_number),
    (PRODUCT_NAME, is_product_name),
    (INPUT_IMAGE_URLS, are_image_urls),
];

/// Whole value is ASCII digits, at least one.
pub fn is_serial_number(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

pub fn is_product_name(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Every comma-separated segment must be an https `.jpg` link.
pub fn are_image_urls(value: &str) -> bool {
    value
        .split(',')
        .map(str::trim)
        .all(|url| url.starts_with(IMAGE_URL_PREFIX) && url.ends_with(IMAGE_URL_SUFFIX))
}

/// Checks uploads against the product catalog schema.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProductSchemaValidator;

impl ProductSchemaValidator {
    pub fn new() -> Self {
        Self
    }

    fn find_missing_field(&self, records: &RecordSet) -> Option<ValidationFailure> {
        records.iter().enumerate().find_map(|(row, record)| {
            REQUIRED_FIELDS
                .iter()
                .find(|field| !record.contains(field))
                .map(|field| {
                    ValidationFailure::at(InvalidReason::MissingRequiredFields, row, field)
                })
        })
    }

    fn find_invalid_content(&self, records: &RecordSet) -> Option<ValidationFailure> {
        records.iter().enumerate().find_map(|(row, record)| {
            first_invalid_column(record)
                .map(|column| ValidationFailure::at(InvalidReason::InvalidData, row, column))
        })
    }
}

fn first_invalid_column(record: &Record) -> Option<&'static str> {
    CONTENT_RULES
        .iter()
        .find(|(column, rule)| !record.get(column).is_some_and(|value| rule(value)))
        .map(|(column, _)| *column)
}

impl Validator for ProductSchemaValidator {
    fn validate(&self, records: RecordSet) -> ValidationOutcome {
        if records.is_empty() {
            return ValidationOutcome::Invalid(ValidationFailure::empty());
        }

        if let Some(failure) = self.find_missing_field(&records) {
            return ValidationOutcome::Invalid(failure);
        }

        if let Some(failure) = self.find_invalid_content(&records) {
            return ValidationOutcome::Invalid(failure);
        }

        ValidationOutcome::Valid(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(serial: &str, name: &str, urls: &str) -> Record {
        [
            (SERIAL_NUMBER, serial),
            (PRODUCT_NAME, name),
            (INPUT_IMAGE_URLS, urls),
        ]
        .into_iter()
        .collect()
    }

    fn validate(records: Vec<Record>) -> ValidationOutcome {
        ProductSchemaValidator::new().validate(RecordSet::new(records))
    }

    #[test]
    fn test_serial_number_rule() {
        assert!(is_serial_number("1"));
        assert!(is_serial_number("007"));
        assert!(!is_serial_number(""));
        assert!(!is_serial_number("12a"));
        assert!(!is_serial_number("-1"));
        assert!(!is_serial_number("1.0"));
        assert!(!is_serial_number(" 1"));
        assert!(!is_serial_number("١٢"));
    }

    #[test]
    fn test_product_name_rule() {
        assert!(is_product_name("Widget"));
        assert!(is_product_name("  Widget "));
        assert!(!is_product_name(""));
        assert!(!is_product_name(" \t "));
    }

    #[test]
    fn test_image_urls_rule() {
        assert!(are_image_urls("https://a.com/x.jpg"));
        assert!(are_image_urls("https://a.com/x.jpg, https://b.com/y.jpg"));
        assert!(are_image_urls("  https://a.com/x.jpg  "));
        assert!(!are_image_urls("http://a.com/x.jpg"));
        assert!(!are_image_urls("https://a.com/x.png"));
        assert!(!are_image_urls("https://a.com/x.jpg,"));
        assert!(!are_image_urls("https://a.com/x.jpg,http://b.com/y.jpg"));
        assert!(!are_image_urls(""));
    }

    #[test]
    fn test_valid_records_pass_through_unchanged() {
        let records = vec![
            product("1", "  Widget ", "https://a.com/x.jpg"),
            product("2", "Gadget", " https://a.com/x.jpg ,https://b.com/y.jpg"),
        ];

        match validate(records.clone()) {
            ValidationOutcome::Valid(set) => assert_eq!(set.into_records(), records),
            other => panic!("expected valid, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_record_set() {
        let outcome = validate(vec![]);
        assert_eq!(outcome.reason(), Some(InvalidReason::Empty));
        assert_eq!(
            outcome.reason().unwrap().to_string(),
            "data is empty or not an array"
        );
    }

    #[test]
    fn test_missing_field_on_one_record_fails_set() {
        let mut partial = product("2", "Gadget", "https://a.com/x.jpg");
        partial.data.shift_remove(PRODUCT_NAME);

        let outcome = validate(vec![product("1", "Widget", "https://a.com/x.jpg"), partial]);

        match outcome {
            ValidationOutcome::Invalid(failure) => {
                assert_eq!(failure.reason, InvalidReason::MissingRequiredFields);
                assert_eq!(failure.row, Some(1));
                assert_eq!(failure.column.as_deref(), Some(PRODUCT_NAME));
                assert_eq!(failure.to_string(), "missing required fields");
            }
            other => panic!("expected invalid, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_fields_reported_before_invalid_content() {
        // Row 0 has bad content, row 1 lacks a column: structure wins.
        let mut partial = product("2", "Gadget", "https://a.com/x.jpg");
        partial.data.shift_remove(INPUT_IMAGE_URLS);

        let outcome = validate(vec![product("x", "", "ftp://nope"), partial]);
        assert_eq!(outcome.reason(), Some(InvalidReason::MissingRequiredFields));
    }

    #[test]
    fn test_invalid_content_reports_first_failing_record() {
        let outcome = validate(vec![
            product("1", "Widget", "https://a.com/x.jpg"),
            product("2", "   ", "https://a.com/x.jpg"),
            product("3a", "Gadget", "https://a.com/x.jpg"),
        ]);

        match outcome {
            ValidationOutcome::Invalid(failure) => {
                assert_eq!(failure.reason, InvalidReason::InvalidData);
                assert_eq!(failure.row, Some(1));
                assert_eq!(failure.column.as_deref(), Some(PRODUCT_NAME));
                assert_eq!(failure.to_string(), "contains invalid data");
            }
            other => panic!("expected invalid, got {:?}", other),
        }
    }

    #[test]
    fn test_extra_columns_are_allowed() {
        let mut record = product("1", "Widget", "https://a.com/x.jpg");
        record
            .data
            .insert("Output Image Urls".to_string(), String::new());

        assert!(validate(vec![record]).is_valid());
    }

    #[test]
    fn test_revalidating_valid_set_is_idempotent() {
        let validator = ProductSchemaValidator::new();
        let set = RecordSet::new(vec![product("1", "Widget", "https://a.com/x.jpg")]);

        let first = validator.validate(set.clone());
        let ValidationOutcome::Valid(first_set) = first else {
            panic!("expected valid");
        };
        let second = validator.validate(first_set.clone());

        assert_eq!(second, ValidationOutcome::Valid(first_set));
        assert_eq!(second, ValidationOutcome::Valid(set));
    }
}
