// Core data model for human-object interaction samples
//
// A sample is one annotated frame: the entities visible in it (each with a
// bounding box and a category) and the actions linking those entities by
// index. Datasets differ in category and verb vocabularies; the only shared
// convention is that all and only human entities carry the `person` category.

mod bbox;
mod sample;

pub use bbox::{BoundingBox, BoundingBoxError, BoundingBoxFormat};
pub use sample::{Action, Entity, Sample, SampleId};
