use crate::core::{Decoder, Record, RecordSet};
use crate::utils::error::DecodeError;
use csv::{ReaderBuilder, Trim};

/// Comma-separated decoder. The first line is the header; values are kept verbatim.
///
/// Rows shorter than the header are padded with empty strings. Rows longer
/// than the header are rejected.
#[derive(Debug, Clone)]
pub struct CsvDecoder {
    delimiter: u8,
}

impl Default for CsvDecoder {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

impl CsvDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Returns the line of a quoted field that never closes.
    ///
    /// The csv reader accepts such input and runs the field to end of file,
    /// so this has to be checked up front.
    fn find_unterminated_quote(&self, bytes: &[u8]) -> Option<u64> {
        #[derive(Clone, Copy, PartialEq, Eq)]
        enum State {
            FieldStart,
            Unquoted,
            Quoted,
            QuoteInQuoted,
        }

        let mut state = State::FieldStart;
        let mut line = 1u64;
        let mut opened_on = 1u64;

        for &byte in bytes {
            state = match (state, byte) {
                (State::Quoted, b'"') => State::QuoteInQuoted,
                (State::Quoted, _) => State::Quoted,
                // "" inside a quoted field
                (State::QuoteInQuoted, b'"') => State::Quoted,
                (State::FieldStart, b'"') => {
                    opened_on = line;
                    State::Quoted
                }
                (_, b'\n' | b'\r') => State::FieldStart,
                (_, b) if b == self.delimiter => State::FieldStart,
                _ => State::Unquoted,
            };
            if byte == b'\n' {
                line += 1;
            }
        }

        (state == State::Quoted).then_some(opened_on)
    }
}

impl Decoder for CsvDecoder {
    fn decode(&self, bytes: &[u8]) -> Result<RecordSet, DecodeError> {
        if let Some(line) = self.find_unterminated_quote(bytes) {
            return Err(DecodeError::UnterminatedQuote { line });
        }

        let mut reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(true)
            .trim(Trim::None)
            .flexible(true)
            .from_reader(bytes);

        let headers = reader.headers()?.clone();
        tracing::debug!("Decoded header with {} columns", headers.len());

        let mut records = Vec::new();
        for result in reader.records() {
            let row = result?;

            if row.len() > headers.len() {
                return Err(DecodeError::TooManyFields {
                    line: row.position().map(|p| p.line()).unwrap_or(0),
                    expected: headers.len(),
                    found: row.len(),
                });
            }

            let record: Record = headers
                .iter()
                .enumerate()
                .map(|(idx, column)| (column, row.get(idx).unwrap_or("")))
                .collect();
            records.push(record);
        }

        Ok(RecordSet::new(records))
    }
}
