// Action co-occurrence analysis
//
// Counts, per sample and per verb, how actions share participants:
// - DSST: different subjects acting on the same target
// - SSDT: the same subject acting on different targets
// - subjects that are also targets of the same verb
// together with dataset-wide totals of actions, interactions and instruments.
//
// Samples that show DSST and/or SSDT are collected so they can be inspected
// afterwards. When a sample qualifies is controlled by `AppendPolicy`.

mod cooccurrence;
mod report;

pub use cooccurrence::{
    group_by_verb, verb_cooccurrence, CooccurrenceAnalyzer, Interaction, VerbCooccurrence,
};
pub use report::{AppendPolicy, CooccurrenceCounts, CooccurrenceReport, SampleRef};
