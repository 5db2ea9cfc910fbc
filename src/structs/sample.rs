use super::BoundingBox;
use serde::{Deserialize, Deserializer, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::path::PathBuf;

/// Identifier of a sample within a dataset
///
/// Dataset files write ids either as strings or as plain integers; both
/// deserialize to the same textual id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct SampleId(String);

impl SampleId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for SampleId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Number(u64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(s) => SampleId(s),
            RawId::Number(n) => SampleId(n.to_string()),
        })
    }
}

impl fmt::Display for SampleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for SampleId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SampleId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for SampleId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// An entity visible in a sample
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub bbox: BoundingBox,
    /// Dataset-specific category; humans are always `person`
    pub category: String,
}

impl Entity {
    pub fn is_person(&self) -> bool {
        self.category == "person"
    }
}

/// An action linking entities of a sample by index
///
/// `target` is absent when the action is not an interaction with another
/// entity. `instrument` is an entity used to perform the action without being
/// its target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    pub verb: String,
    pub subject: usize,
    #[serde(default)]
    pub target: Option<usize>,
    #[serde(default)]
    pub instrument: Option<usize>,
}

impl Action {
    pub fn new(
        verb: impl Into<String>,
        subject: usize,
        target: Option<usize>,
        instrument: Option<usize>,
    ) -> Self {
        Self {
            verb: verb.into(),
            subject,
            target,
            instrument,
        }
    }

    /// True when the action has a target entity
    pub fn is_interaction(&self) -> bool {
        self.target.is_some()
    }
}

/// One annotated frame of a dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Absolute path of the frame image
    pub image_path: PathBuf,
    pub entities: Vec<Entity>,
    pub actions: Vec<Action>,
    /// Dataset splits the sample belongs to
    pub splits: Vec<String>,
}

impl Sample {
    /// A sample holding only actions, for callers that don't need image data
    pub fn from_actions(actions: Vec<Action>) -> Self {
        Self {
            image_path: PathBuf::new(),
            entities: Vec::new(),
            actions,
            splits: Vec::new(),
        }
    }
}
