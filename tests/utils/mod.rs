// Integration test utilities
//
// Helpers for writing H2O-layout datasets into temporary directories

#![allow(dead_code)] // Not every test binary uses every helper

use serde_json::{json, Value};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Write a JSON value to `<root>/<name>`
pub fn write_json(root: &Path, name: &str, value: &Value) {
    fs::write(root.join(name), serde_json::to_string_pretty(value).unwrap())
        .expect("Failed to write fixture file");
}

/// Create an H2O dataset from train and test sample records
pub fn h2o_dataset(train: Value, test: Value) -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let root = dir.path();

    write_json(root, "categories.json", &json!(["person", "cup", "knife", "bag"]));
    write_json(root, "verbs.json", &json!(["grab", "hold", "cut", "look"]));
    write_json(root, "train.json", &train);
    write_json(root, "test.json", &test);

    dir
}

pub fn entity(category: &str) -> Value {
    json!({"bbox": [0.1, 0.2, 0.5, 0.6], "category": category})
}

pub fn action(verb: &str, subject: usize, target: Option<usize>, instrument: Option<usize>) -> Value {
    json!({"verb": verb, "subject": subject, "target": target, "instrument": instrument})
}

/// Small dataset with one DSST+SSDT sample, one multi-verb sample and one
/// sample without interactions
pub fn sample_dataset() -> TempDir {
    h2o_dataset(
        json!([
            {
                "id": "grab_clip",
                "entities": [entity("person"), entity("person"), entity("cup"), entity("bag")],
                "actions": [
                    action("grab", 0, Some(2), None),
                    action("grab", 0, Some(3), None),
                    action("grab", 1, Some(2), None)
                ]
            },
            {
                "id": "multi_verb",
                "entities": [entity("person"), entity("person"), entity("cup")],
                "actions": [
                    action("hold", 0, Some(2), None),
                    action("hold", 1, Some(2), None),
                    action("look", 0, None, None)
                ]
            }
        ]),
        json!([
            {
                "id": 42,
                "entities": [entity("person"), entity("knife")],
                "actions": [action("cut", 0, None, Some(1))]
            }
        ]),
    )
}
