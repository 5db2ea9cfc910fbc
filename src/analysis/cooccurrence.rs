use super::report::{AppendPolicy, CooccurrenceReport, SampleRef};
use crate::config::AnalysisConfig;
use crate::datasets::Dataset;
use crate::structs::{Action, Sample, SampleId};
use std::collections::HashMap;
use tracing::{info, trace};

/// `(subject, target)` pair of one action
pub type Interaction = (usize, Option<usize>);

/// Co-occurrence counts of the interactions of a single verb
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VerbCooccurrence {
    /// Distinct subjects that also appear as a target
    pub same_subject_target: u64,
    /// Distinct subjects with more than one interaction
    pub same_subject_different_targets: u64,
    /// Distinct targets with more than one interaction
    pub different_subjects_same_target: u64,
}

/// Group the `(subject, target)` pairs of `actions` by verb
///
/// Verbs are listed in order of first appearance; pairs keep action order.
///
/// # Example
/// ```
/// use hoi::analysis::group_by_verb;
/// use hoi::structs::Action;
///
/// let actions = vec![
///     Action::new("hold", 0, Some(1), None),
///     Action::new("look", 0, None, None),
///     Action::new("hold", 2, Some(1), None),
/// ];
/// let groups = group_by_verb(&actions);
///
/// assert_eq!(groups[0], ("hold", vec![(0, Some(1)), (2, Some(1))]));
/// assert_eq!(groups[1], ("look", vec![(0, None)]));
/// ```
pub fn group_by_verb(actions: &[Action]) -> Vec<(&str, Vec<Interaction>)> {
    let mut groups: Vec<(&str, Vec<Interaction>)> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();

    for action in actions {
        let verb = action.verb.as_str();
        let position = *positions.entry(verb).or_insert_with(|| {
            groups.push((verb, Vec::new()));
            groups.len() - 1
        });
        groups[position].1.push((action.subject, action.target));
    }

    groups
}

/// Count repeated subjects and targets among the interactions of one verb
///
/// Pairs without a target are ignored. Each repeated subject or target counts
/// once regardless of how often it repeats.
pub fn verb_cooccurrence(pairs: &[Interaction]) -> VerbCooccurrence {
    let mut subjects: HashMap<usize, usize> = HashMap::new();
    let mut targets: HashMap<usize, usize> = HashMap::new();

    for &(subject, target) in pairs {
        if let Some(target) = target {
            *subjects.entry(subject).or_insert(0) += 1;
            *targets.entry(target).or_insert(0) += 1;
        }
    }

    let repeated = |counts: &HashMap<usize, usize>| -> u64 {
        counts.values().filter(|&&count| count > 1).count() as u64
    };

    VerbCooccurrence {
        same_subject_target: subjects
            .keys()
            .filter(|&subject| targets.contains_key(subject))
            .count() as u64,
        same_subject_different_targets: repeated(&subjects),
        different_subjects_same_target: repeated(&targets),
    }
}

/// Single-pass analyzer of action co-occurrence over a dataset
///
/// # Example
/// ```
/// use hoi::analysis::CooccurrenceAnalyzer;
/// use hoi::datasets::MemoryDataset;
/// use hoi::structs::{Action, Sample};
///
/// let mut dataset = MemoryDataset::new();
/// dataset.insert(
///     "clip",
///     Sample::from_actions(vec![
///         Action::new("grab", 1, Some(10), None),
///         Action::new("grab", 1, Some(11), None),
///         Action::new("grab", 2, Some(10), None),
///     ]),
/// );
///
/// let report = CooccurrenceAnalyzer::default().analyze(&dataset);
/// assert_eq!(report.counts.total_actions, 3);
/// assert_eq!(report.counts.different_subjects_same_target, 1);
/// assert_eq!(report.counts.same_subject_different_targets, 1);
/// assert_eq!(report.both.len(), 1);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct CooccurrenceAnalyzer {
    policy: AppendPolicy,
}

impl CooccurrenceAnalyzer {
    pub fn new(policy: AppendPolicy) -> Self {
        Self { policy }
    }

    pub fn from_config(config: &AnalysisConfig) -> Self {
        Self::new(config.append_policy)
    }

    pub fn policy(&self) -> AppendPolicy {
        self.policy
    }

    /// Analyze every sample of `dataset` in dataset order
    pub fn analyze<'a, D: Dataset + ?Sized>(&self, dataset: &'a D) -> CooccurrenceReport<'a> {
        self.analyze_samples(dataset.iter())
    }

    /// Analyze an arbitrary sequence of `(id, sample)` pairs
    pub fn analyze_samples<'a, I>(&self, samples: I) -> CooccurrenceReport<'a>
    where
        I: IntoIterator<Item = (&'a SampleId, &'a Sample)>,
    {
        let mut report = CooccurrenceReport::new(self.policy);

        for (id, sample) in samples {
            report.samples_analyzed += 1;
            let entry = SampleRef { id, sample };

            for action in &sample.actions {
                report.counts.total_actions += 1;
                if action.instrument.is_some() {
                    report.counts.has_instrument += 1;
                }
                if action.target.is_some() {
                    report.counts.total_interactions += 1;
                }
            }

            let mut has_dsst = false;
            let mut has_ssdt = false;

            for (verb, pairs) in group_by_verb(&sample.actions) {
                let verb_counts = verb_cooccurrence(&pairs);
                report.counts.same_subject_target += verb_counts.same_subject_target;
                report.counts.same_subject_different_targets +=
                    verb_counts.same_subject_different_targets;
                report.counts.different_subjects_same_target +=
                    verb_counts.different_subjects_same_target;

                has_ssdt |= verb_counts.same_subject_different_targets > 0;
                has_dsst |= verb_counts.different_subjects_same_target > 0;

                trace!(sample = %id, verb, ?verb_counts, "Verb co-occurrence");

                if self.policy == AppendPolicy::PerVerb {
                    append_sample(&mut report, entry, has_dsst, has_ssdt);
                }
            }

            if self.policy == AppendPolicy::PerSample {
                append_sample(&mut report, entry, has_dsst, has_ssdt);
            }
        }

        info!(
            samples = report.samples_analyzed,
            policy = %self.policy,
            total_actions = report.counts.total_actions,
            dsst_samples = report.dsst_samples.len(),
            ssdt_samples = report.ssdt_samples.len(),
            "Co-occurrence analysis complete"
        );

        report
    }
}

fn append_sample<'a>(
    report: &mut CooccurrenceReport<'a>,
    entry: SampleRef<'a>,
    has_dsst: bool,
    has_ssdt: bool,
) {
    if has_dsst {
        report.dsst_samples.push(entry);
    }
    if has_ssdt {
        report.ssdt_samples.push(entry);
    }
    if has_dsst && has_ssdt {
        report.both.push(entry);
    }
    if has_dsst || has_ssdt {
        report.at_least_one.push(entry);
    }
}
