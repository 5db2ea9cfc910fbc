//! CSV output format for analysis reports
//!
//! Two tables are available: `metric,value` rows with every counter and the
//! length of every sample collection, or (with --list-samples)
//! `collection,position,sample_id` rows listing the collections entry by
//! entry.

use crate::analysis::CooccurrenceReport;

/// CSV formatter for a co-occurrence report
#[derive(Debug)]
pub struct CsvReport<'r, 'a> {
    report: &'r CooccurrenceReport<'a>,
}

impl<'r, 'a> CsvReport<'r, 'a> {
    pub fn new(report: &'r CooccurrenceReport<'a>) -> Self {
        Self { report }
    }

    /// Escape CSV field (handle commas, quotes, newlines)
    fn escape_field(field: &str) -> String {
        if field.contains(',') || field.contains('"') || field.contains('\n') {
            format!("\"{}\"", field.replace('"', "\"\""))
        } else {
            field.to_string()
        }
    }

    /// Generate the `metric,value` table
    pub fn metrics_csv(&self) -> String {
        let mut output = String::from("metric,value\n");

        output.push_str(&format!("samples,{}\n", self.report.samples_analyzed));
        for (name, value) in self.report.counts.entries() {
            output.push_str(&format!("{},{}\n", name, value));
        }
        for (name, samples) in self.report.collections() {
            output.push_str(&format!("len_{},{}\n", name, samples.len()));
        }

        output
    }

    /// Generate the `collection,position,sample_id` table
    pub fn samples_csv(&self) -> String {
        let mut output = String::from("collection,position,sample_id\n");

        for (name, samples) in self.report.collections() {
            for (position, entry) in samples.iter().enumerate() {
                output.push_str(name);
                output.push(',');
                output.push_str(&position.to_string());
                output.push(',');
                output.push_str(&Self::escape_field(entry.id.as_str()));
                output.push('\n');
            }
        }

        output
    }

    /// Generate CSV output as string
    pub fn to_csv(&self, list_samples: bool) -> String {
        if list_samples {
            self.samples_csv()
        } else {
            self.metrics_csv()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{AppendPolicy, CooccurrenceAnalyzer};
    use crate::datasets::MemoryDataset;
    use crate::structs::{Action, Sample};

    fn dataset() -> MemoryDataset {
        let mut dataset = MemoryDataset::new();
        dataset.insert(
            "with,comma",
            Sample::from_actions(vec![
                Action::new("grab", 1, Some(10), None),
                Action::new("grab", 2, Some(10), None),
            ]),
        );
        dataset.insert(
            "quiet",
            Sample::from_actions(vec![Action::new("look", 1, None, None)]),
        );
        dataset
    }

    #[test]
    fn test_metrics_csv() {
        let dataset = dataset();
        let report = CooccurrenceAnalyzer::new(AppendPolicy::PerSample).analyze(&dataset);
        let csv = CsvReport::new(&report).to_csv(false);

        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "metric,value");
        assert_eq!(lines[1], "samples,2");
        assert!(lines.contains(&"total_actions,3"));
        assert!(lines.contains(&"total_interactions,2"));
        assert!(lines.contains(&"different_subjects_same_target,1"));
        assert!(lines.contains(&"len_dsst_samples,1"));
        assert!(lines.contains(&"len_ssdt_samples,0"));
        assert_eq!(lines.len(), 1 + 1 + 6 + 4);
    }

    #[test]
    fn test_samples_csv_escapes_ids() {
        let dataset = dataset();
        let report = CooccurrenceAnalyzer::default().analyze(&dataset);
        let csv = CsvReport::new(&report).to_csv(true);

        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "collection,position,sample_id");
        assert_eq!(lines[1], "dsst_samples,0,\"with,comma\"");
        assert_eq!(lines[2], "at_least_one,0,\"with,comma\"");
        assert_eq!(lines.len(), 3);
    }
}
