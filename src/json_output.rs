//! JSON output format for analysis reports and dataset inspection

use crate::analysis::{CooccurrenceCounts, CooccurrenceReport, SampleRef};
use crate::datasets::Dataset;
use crate::structs::{Action, Entity, Sample};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One of the four sample collections of a report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonCollection {
    /// Number of entries, duplicates included
    pub len: usize,
    /// Sample ids in collection order (if --list-samples enabled)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ids: Option<Vec<String>>,
}

impl JsonCollection {
    fn from_samples(samples: &[SampleRef<'_>], list_samples: bool) -> Self {
        Self {
            len: samples.len(),
            ids: list_samples.then(|| samples.iter().map(|s| s.id.to_string()).collect()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonCollections {
    pub dsst_samples: JsonCollection,
    pub ssdt_samples: JsonCollection,
    pub both: JsonCollection,
    pub at_least_one: JsonCollection,
}

/// Root JSON structure of `hoi analyze --format json`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonReport {
    /// Format version identifier
    pub version: String,
    /// Format name
    pub format: String,
    /// Append policy used for the sample collections
    pub append_policy: String,
    pub samples_analyzed: usize,
    pub counts: CooccurrenceCounts,
    pub collections: JsonCollections,
}

impl JsonReport {
    pub fn from_report(report: &CooccurrenceReport<'_>, list_samples: bool) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            format: "hoi-cooccurrence-v1".to_string(),
            append_policy: report.policy.to_string(),
            samples_analyzed: report.samples_analyzed,
            counts: report.counts,
            collections: JsonCollections {
                dsst_samples: JsonCollection::from_samples(&report.dsst_samples, list_samples),
                ssdt_samples: JsonCollection::from_samples(&report.ssdt_samples, list_samples),
                both: JsonCollection::from_samples(&report.both, list_samples),
                at_least_one: JsonCollection::from_samples(&report.at_least_one, list_samples),
            },
        }
    }

    /// Serialize to JSON string
    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Sample count of one split
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonSplit {
    pub name: String,
    pub samples: usize,
}

/// Root JSON structure of `hoi info --format json`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonDatasetInfo {
    pub samples: usize,
    pub splits: Vec<JsonSplit>,
    pub categories: Vec<String>,
    pub verbs: Vec<String>,
}

impl JsonDatasetInfo {
    pub fn from_dataset<D: Dataset + ?Sized>(dataset: &D) -> Self {
        let splits = dataset
            .splits()
            .iter()
            .map(|name| JsonSplit {
                name: name.clone(),
                samples: dataset
                    .iter()
                    .filter(|(_, sample)| sample.splits.contains(name))
                    .count(),
            })
            .collect();

        Self {
            samples: dataset.len(),
            splits,
            categories: dataset.categories().to_vec(),
            verbs: dataset.verbs().to_vec(),
        }
    }

    /// Serialize to JSON string
    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Root JSON structure of `hoi show --format json`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonSample {
    pub id: String,
    pub image_path: PathBuf,
    pub splits: Vec<String>,
    pub entities: Vec<Entity>,
    pub actions: Vec<Action>,
}

impl JsonSample {
    /// Build from a sample whose entities were already converted for display
    pub fn new(id: &str, sample: &Sample, entities: Vec<Entity>) -> Self {
        Self {
            id: id.to_string(),
            image_path: sample.image_path.clone(),
            splits: sample.splits.clone(),
            entities,
            actions: sample.actions.clone(),
        }
    }

    /// Serialize to JSON string
    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
