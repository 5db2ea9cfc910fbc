//! Datasets of human-object interaction samples
//!
//! Every dataset exposes the same read-only surface through the [`Dataset`]
//! trait: its vocabularies (entity categories and verbs), its split names, and
//! ordered iteration over `(id, sample)` pairs. [`H2ODataset`] reads the
//! on-disk H2O layout; [`MemoryDataset`] holds samples built in code.

mod h2o;
mod memory;

pub use h2o::{H2ODataset, H2O_SPLITS};
pub use memory::MemoryDataset;

use crate::structs::{Sample, SampleId};
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading a dataset from disk
#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid bounding box for entity {entity} of sample '{sample}': {source}")]
    BoundingBox {
        sample: SampleId,
        entity: usize,
        #[source]
        source: crate::structs::BoundingBoxError,
    },
}

/// Result type for dataset loading
pub type Result<T> = std::result::Result<T, DatasetError>;

/// Iterator over the `(id, sample)` pairs of a dataset, in dataset order
pub type SampleIter<'a> = Box<dyn Iterator<Item = (&'a SampleId, &'a Sample)> + 'a>;

/// Read-only interface shared by all datasets
pub trait Dataset {
    /// Entity categories of the dataset
    fn categories(&self) -> &[String];

    /// Verbs of the dataset
    fn verbs(&self) -> &[String];

    /// Split names of the dataset
    fn splits(&self) -> &[String];

    /// Number of samples
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over all samples in dataset order
    fn iter(&self) -> SampleIter<'_>;

    /// Look up a sample by id
    fn get(&self, id: &str) -> Option<&Sample>;
}
