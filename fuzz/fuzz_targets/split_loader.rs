#![no_main]

use hoi::analysis::CooccurrenceAnalyzer;
use hoi::datasets::H2ODataset;
use libfuzzer_sys::fuzz_target;
use std::fs;

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes as the train split; loading must either fail with an
    // error or yield a dataset the analyzer processes without panicking
    let Ok(dir) = tempfile::TempDir::new() else {
        return;
    };
    let root = dir.path();
    if fs::write(root.join("categories.json"), "[]").is_err()
        || fs::write(root.join("verbs.json"), "[]").is_err()
        || fs::write(root.join("train.json"), data).is_err()
        || fs::write(root.join("test.json"), "[]").is_err()
    {
        return;
    }

    if let Ok(dataset) = H2ODataset::open(root) {
        let _ = CooccurrenceAnalyzer::default().analyze(&dataset);
    }
});
