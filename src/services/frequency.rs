//! Frequency detection service
//!
//! Groups a batch of transactions by tag set and classifies every group.
//! Groups share no data, so classification runs as a parallel map on the
//! rayon pool; the sequential path gives identical results.

use std::collections::BTreeMap;

use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::config::Settings;
use crate::models::{Money, Period, TagSet, Transaction};

use super::classification::{Classification, PeriodClassifier};
use super::grouping::group_by_tags;

/// Everything known about one tag-set group after classification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupAnalysis {
    pub tags: TagSet,
    /// Sum of the group's amounts; `None` if it overflows
    pub total_amount: Option<Money>,
    pub classification: Classification,
}

impl GroupAnalysis {
    /// The group's period
    pub fn period(&self) -> Period {
        self.classification.period
    }
}

/// Service for detecting how often each kind of transaction recurs
#[derive(Debug, Clone)]
pub struct FrequencyService {
    classifier: PeriodClassifier,
    parallel: bool,
}

impl Default for FrequencyService {
    fn default() -> Self {
        Self::new(PeriodClassifier::default())
    }
}

impl FrequencyService {
    /// Create a parallel service around a classifier
    pub fn new(classifier: PeriodClassifier) -> Self {
        Self {
            classifier,
            parallel: true,
        }
    }

    /// Create a service configured from settings
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(PeriodClassifier::from_settings(settings)).with_parallel(settings.parallel)
    }

    /// Enable or disable parallel classification
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// The classifier in use
    pub fn classifier(&self) -> &PeriodClassifier {
        &self.classifier
    }

    /// Map every distinct tag set in the batch to its period
    ///
    /// The key set is exactly the set of tag sets present in the input. Empty
    /// input gives an empty map. Amounts are never read.
    pub fn detect(&self, transactions: &[Transaction]) -> BTreeMap<TagSet, Period> {
        let groups: Vec<(TagSet, Vec<&Transaction>)> =
            group_by_tags(transactions).into_iter().collect();

        if self.parallel {
            groups
                .into_par_iter()
                .map(|(tags, group)| (tags, self.classifier.classify(&group)))
                .collect()
        } else {
            groups
                .into_iter()
                .map(|(tags, group)| (tags, self.classifier.classify(&group)))
                .collect()
        }
    }

    /// Classify every group, keeping statistics, ordered by tag set
    pub fn analyze(&self, transactions: &[Transaction]) -> Vec<GroupAnalysis> {
        if transactions.is_empty() {
            debug!("No transactions to analyze");
            return Vec::new();
        }

        let groups: Vec<(TagSet, Vec<&Transaction>)> =
            group_by_tags(transactions).into_iter().collect();

        debug!(
            transactions = transactions.len(),
            groups = groups.len(),
            parallel = self.parallel,
            "Grouped transactions by tag set"
        );

        let analyses: Vec<GroupAnalysis> = if self.parallel {
            groups
                .into_par_iter()
                .map(|(tags, group)| self.analyze_group(tags, &group))
                .collect()
        } else {
            groups
                .into_iter()
                .map(|(tags, group)| self.analyze_group(tags, &group))
                .collect()
        };

        let recurring = analyses.iter().filter(|a| a.period().is_known()).count();
        info!(
            groups = analyses.len(),
            recurring,
            "Classified transaction groups"
        );

        analyses
    }

    fn analyze_group(&self, tags: TagSet, group: &[&Transaction]) -> GroupAnalysis {
        let classification = self.classifier.classify_detailed(group);
        let total_amount = Money::checked_sum(group.iter().map(|txn| txn.amount));
        if total_amount.is_none() {
            warn!(tags = %tags, "Group total overflows; leaving it out");
        }

        debug!(
            tags = %tags,
            count = group.len(),
            period = %classification.period,
            rule = ?classification.rule,
            "Classified group"
        );

        GroupAnalysis {
            tags,
            total_amount,
            classification,
        }
    }
}
