use std::fmt::Write;

use crate::engine::InvalidObjectRecord;
use crate::error::Result;

use super::OutputFormatter;

const TITLE: &str = "Invalid Objects Report";
const UNDERLINE: &str = "=====================";
const ALL_PASSED: &str = "All objects passed the checks.";

/// Plain-text invalid objects report.
///
/// The layout is a stable contract for downstream readers, so it carries no
/// color or terminal-dependent output.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextFormatter;

impl TextFormatter {
    #[must_use]
    pub fn render(&self, records: &[InvalidObjectRecord]) -> String {
        let mut output = String::new();
        // Writing into a String cannot fail.
        let _ = writeln!(output, "{TITLE}");
        let _ = writeln!(output, "{UNDERLINE}");
        let _ = writeln!(output);

        if records.is_empty() {
            let _ = writeln!(output, "{ALL_PASSED}");
            return output;
        }

        let _ = writeln!(output, "Total invalid objects: {}", records.len());
        let _ = writeln!(output);

        for record in records {
            let _ = writeln!(output, "- {}:", record.object_name);
            for reason in &record.reasons {
                let _ = writeln!(output, "    Reason: {reason}");
            }
            let _ = writeln!(output);
        }

        output
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, records: &[InvalidObjectRecord]) -> Result<String> {
        Ok(self.render(records))
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
