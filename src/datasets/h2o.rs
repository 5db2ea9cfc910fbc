//! Loader for the Human-to-Human-or-Object interaction (H2O) dataset
//!
//! # Layout
//!
//! ```text
//! <root>/
//!   categories.json      ["person", "cup", ...]
//!   verbs.json           ["hold", "drink", ...]
//!   train.json           [{"id", "entities": [...], "actions": [...]}, ...]
//!   test.json
//!   images/<split>/<id>.jpg
//! ```
//!
//! Entity boxes are stored as normalized `xyxy` coordinates.

use super::{Dataset, DatasetError, MemoryDataset, Result, SampleIter};
use crate::structs::{Action, BoundingBox, BoundingBoxFormat, Entity, Sample, SampleId};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Splits read by [`H2ODataset::open`], in load order
pub const H2O_SPLITS: [&str; 2] = ["train", "test"];

#[derive(Debug, Deserialize)]
struct RawSample {
    id: SampleId,
    entities: Vec<RawEntity>,
    actions: Vec<Action>,
}

#[derive(Debug, Deserialize)]
struct RawEntity {
    bbox: Vec<f64>,
    category: String,
}

/// The H2O dataset, fully loaded in memory
#[derive(Debug, Clone)]
pub struct H2ODataset {
    root: PathBuf,
    samples: MemoryDataset,
}

impl H2ODataset {
    /// Load the dataset found under `root`
    ///
    /// Samples of all splits are merged in split order. An id that appears in
    /// more than one split keeps its first position and the sample of the
    /// last split it appears in.
    ///
    /// # Errors
    /// Returns [`DatasetError`] if a file is missing or unreadable, holds
    /// malformed JSON, or describes a bounding box without 4 coordinates.
    pub fn open<P: AsRef<Path>>(root: P) -> Result<Self> {
        let root = root.as_ref().to_path_buf();

        let categories: Vec<String> = read_json(&root.join("categories.json"))?;
        let verbs: Vec<String> = read_json(&root.join("verbs.json"))?;
        let splits: Vec<String> = H2O_SPLITS.iter().map(|s| s.to_string()).collect();

        let mut samples = MemoryDataset::new()
            .with_categories(categories)
            .with_verbs(verbs)
            .with_splits(splits);

        for split in H2O_SPLITS {
            let loaded = load_split(&root, split)?;
            debug!(split, samples = loaded.len(), "Loaded H2O split");
            for (id, sample) in loaded {
                if samples.insert(id.clone(), sample).is_some() {
                    debug!(%id, split, "Sample id already loaded, replacing");
                }
            }
        }

        info!(
            root = %root.display(),
            samples = samples.len(),
            categories = samples.categories().len(),
            verbs = samples.verbs().len(),
            "Opened H2O dataset"
        );

        Ok(Self { root, samples })
    }

    /// Directory the dataset was loaded from
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl Dataset for H2ODataset {
    fn categories(&self) -> &[String] {
        self.samples.categories()
    }

    fn verbs(&self) -> &[String] {
        self.samples.verbs()
    }

    fn splits(&self) -> &[String] {
        self.samples.splits()
    }

    fn len(&self) -> usize {
        self.samples.len()
    }

    fn iter(&self) -> SampleIter<'_> {
        self.samples.iter()
    }

    fn get(&self, id: &str) -> Option<&Sample> {
        self.samples.get(id)
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let contents = fs::read_to_string(path).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&contents).map_err(|source| DatasetError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Read `<root>/<split>.json` into `(id, sample)` pairs in file order
fn load_split(root: &Path, split: &str) -> Result<Vec<(SampleId, Sample)>> {
    let raw: Vec<RawSample> = read_json(&root.join(format!("{}.json", split)))?;
    let image_dir = root.join("images").join(split);

    raw.into_iter()
        .map(|record| {
            let entities = record
                .entities
                .into_iter()
                .enumerate()
                .map(|(index, entity)| {
                    let bbox = BoundingBox::from_slice(&entity.bbox, BoundingBoxFormat::Xyxy, true)
                        .map_err(|source| DatasetError::BoundingBox {
                            sample: record.id.clone(),
                            entity: index,
                            source,
                        })?;
                    Ok(Entity {
                        bbox,
                        category: entity.category,
                    })
                })
                .collect::<Result<Vec<_>>>()?;

            let sample = Sample {
                image_path: image_dir.join(format!("{}.jpg", record.id)),
                entities,
                actions: record.actions,
                splits: vec![split.to_string()],
            };
            Ok((record.id, sample))
        })
        .collect()
}
