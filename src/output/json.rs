use serde::Serialize;

use crate::engine::InvalidObjectRecord;
use crate::error::Result;

use super::OutputFormatter;

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    summary: Summary,
    invalid_objects: &'a [InvalidObjectRecord],
}

#[derive(Serialize)]
struct Summary {
    total_invalid_objects: usize,
    total_reasons: usize,
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, records: &[InvalidObjectRecord]) -> Result<String> {
        let output = JsonOutput {
            summary: Summary {
                total_invalid_objects: records.len(),
                total_reasons: records.iter().map(|r| r.reasons.len()).sum(),
            },
            invalid_objects: records,
        };

        let json = serde_json::to_string_pretty(&output)?;
        Ok(format!("{json}\n"))
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
