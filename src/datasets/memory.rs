use super::{Dataset, SampleIter};
use crate::structs::{Sample, SampleId};
use std::collections::HashMap;

/// An insertion-ordered dataset held in memory
///
/// Inserting an id that is already present replaces the sample but keeps the
/// position of the first insertion.
///
/// # Example
/// ```
/// use hoi::datasets::{Dataset, MemoryDataset};
/// use hoi::structs::{Action, Sample};
///
/// let mut dataset = MemoryDataset::new();
/// dataset.insert("a", Sample::from_actions(vec![Action::new("hold", 0, Some(1), None)]));
/// dataset.insert("b", Sample::from_actions(Vec::new()));
///
/// assert_eq!(dataset.len(), 2);
/// assert_eq!(dataset.get("a").unwrap().actions.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryDataset {
    categories: Vec<String>,
    verbs: Vec<String>,
    splits: Vec<String>,
    samples: Vec<(SampleId, Sample)>,
    /// Fast lookup: sample id → position in `samples`
    index: HashMap<SampleId, usize>,
}

impl MemoryDataset {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_categories(mut self, categories: Vec<String>) -> Self {
        self.categories = categories;
        self
    }

    pub fn with_verbs(mut self, verbs: Vec<String>) -> Self {
        self.verbs = verbs;
        self
    }

    pub fn with_splits(mut self, splits: Vec<String>) -> Self {
        self.splits = splits;
        self
    }

    /// Insert a sample, returning the sample it replaced if the id was already present
    pub fn insert(&mut self, id: impl Into<SampleId>, sample: Sample) -> Option<Sample> {
        let id = id.into();
        if let Some(&position) = self.index.get(&id) {
            return Some(std::mem::replace(&mut self.samples[position].1, sample));
        }

        self.index.insert(id.clone(), self.samples.len());
        self.samples.push((id, sample));
        None
    }
}

impl<I: Into<SampleId>> FromIterator<(I, Sample)> for MemoryDataset {
    fn from_iter<T: IntoIterator<Item = (I, Sample)>>(iter: T) -> Self {
        let mut dataset = Self::new();
        for (id, sample) in iter {
            dataset.insert(id, sample);
        }
        dataset
    }
}

impl Dataset for MemoryDataset {
    fn categories(&self) -> &[String] {
        &self.categories
    }

    fn verbs(&self) -> &[String] {
        &self.verbs
    }

    fn splits(&self) -> &[String] {
        &self.splits
    }

    fn len(&self) -> usize {
        self.samples.len()
    }

    fn iter(&self) -> SampleIter<'_> {
        Box::new(self.samples.iter().map(|(id, sample)| (id, sample)))
    }

    fn get(&self, id: &str) -> Option<&Sample> {
        self.index.get(id).map(|&position| &self.samples[position].1)
    }
}
