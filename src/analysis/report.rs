use crate::structs::{Sample, SampleId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// When a sample is appended to the DSST/SSDT sample collections
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum AppendPolicy {
    /// Append after every verb of the sample once a flag is set
    ///
    /// Flags accumulate across the verbs of a sample, so a sample with several
    /// verbs can appear several times in the same collection. This reproduces
    /// the historical reference totals.
    #[default]
    PerVerb,
    /// Append at most once per sample, after all its verbs were examined
    PerSample,
}

impl AppendPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppendPolicy::PerVerb => "per-verb",
            AppendPolicy::PerSample => "per-sample",
        }
    }
}

impl fmt::Display for AppendPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Scalar counters produced by one analysis run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CooccurrenceCounts {
    /// Every action of every sample
    pub total_actions: u64,
    /// Actions with a target
    pub total_interactions: u64,
    /// Actions with an instrument
    pub has_instrument: u64,
    /// Targets shared by more than one interaction of the same verb
    pub different_subjects_same_target: u64,
    /// Subjects with more than one interaction of the same verb
    pub same_subject_different_targets: u64,
    /// Entities that are both subject and target of the same verb
    pub same_subject_target: u64,
}

impl CooccurrenceCounts {
    /// `(name, value)` pairs in reporting order
    pub fn entries(&self) -> [(&'static str, u64); 6] {
        [
            ("total_actions", self.total_actions),
            ("total_interactions", self.total_interactions),
            ("has_instrument", self.has_instrument),
            (
                "different_subjects_same_target",
                self.different_subjects_same_target,
            ),
            (
                "same_subject_different_targets",
                self.same_subject_different_targets,
            ),
            ("same_subject_target", self.same_subject_target),
        ]
    }
}

/// A borrowed sample together with its id
#[derive(Debug, Clone, Copy)]
pub struct SampleRef<'a> {
    pub id: &'a SampleId,
    pub sample: &'a Sample,
}

/// Result of a co-occurrence analysis run
///
/// Sample collections borrow from the analyzed dataset and may hold the same
/// sample more than once under [`AppendPolicy::PerVerb`].
#[derive(Debug, Clone, Default)]
pub struct CooccurrenceReport<'a> {
    /// Policy that filled the sample collections
    pub policy: AppendPolicy,
    /// Number of samples iterated
    pub samples_analyzed: usize,
    pub counts: CooccurrenceCounts,
    /// Samples with different subjects acting on the same target
    pub dsst_samples: Vec<SampleRef<'a>>,
    /// Samples with the same subject acting on different targets
    pub ssdt_samples: Vec<SampleRef<'a>>,
    /// Samples with both DSST and SSDT
    pub both: Vec<SampleRef<'a>>,
    /// Samples with DSST or SSDT
    pub at_least_one: Vec<SampleRef<'a>>,
}

impl<'a> CooccurrenceReport<'a> {
    pub fn new(policy: AppendPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    /// `(name, samples)` pairs of the four sample collections in reporting order
    pub fn collections(&self) -> [(&'static str, &[SampleRef<'a>]); 4] {
        [
            ("dsst_samples", self.dsst_samples.as_slice()),
            ("ssdt_samples", self.ssdt_samples.as_slice()),
            ("both", self.both.as_slice()),
            ("at_least_one", self.at_least_one.as_slice()),
        ]
    }

    /// Generate human-readable report
    pub fn to_report_string(&self, list_samples: bool) -> String {
        let mut report = String::new();

        report.push_str("Action co-occurrence summary\n");
        report.push_str(&format!(
            "  {:<32} {:>10}\n",
            "samples", self.samples_analyzed
        ));
        report.push_str(&format!("  {:<32} {:>10}\n", "append policy", self.policy.as_str()));
        report.push('\n');

        report.push_str("Counters\n");
        for (name, value) in self.counts.entries() {
            report.push_str(&format!("  {:<32} {:>10}\n", name, value));
        }
        report.push('\n');

        report.push_str("Sample collections\n");
        for (name, samples) in self.collections() {
            report.push_str(&format!("  {:<32} {:>10}\n", name, samples.len()));
        }

        if list_samples {
            for (name, samples) in self.collections() {
                report.push('\n');
                report.push_str(&format!("{} ({})\n", name, samples.len()));
                for entry in samples {
                    report.push_str(&format!("  {}\n", entry.id));
                }
            }
        }

        report
    }
}
