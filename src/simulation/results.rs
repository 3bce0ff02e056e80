// src/simulation/results.rs
use crate::core::Outcome;
use std::fmt;

/// Outcome of one reset → flip → measure trial.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrialRecord {
    /// 1-based trial index.
    pub index: usize,
    pub outcome: Outcome,
}

/// Ordered outcomes of a driver run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrialResults {
    records: Vec<TrialRecord>,
}

impl TrialResults {
    pub(crate) fn with_capacity(trials: usize) -> Self {
        Self { records: Vec::with_capacity(trials) }
    }

    /// Records the outcome of the next trial. Indices are assigned in order starting at 1.
    pub(crate) fn record(&mut self, outcome: Outcome) -> TrialRecord {
        let record = TrialRecord { index: self.records.len() + 1, outcome };
        self.records.push(record);
        record
    }

    pub fn records(&self) -> &[TrialRecord] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &TrialRecord> {
        self.records.iter()
    }

    /// Outcomes in trial order.
    pub fn outcomes(&self) -> Vec<Outcome> {
        self.records.iter().map(|r| r.outcome).collect()
    }

    /// Outcomes in trial order as classical bits.
    pub fn bits(&self) -> Vec<u8> {
        self.records.iter().map(|r| r.outcome.bit()).collect()
    }

    /// Number of trials that produced `outcome`.
    pub fn count(&self, outcome: Outcome) -> usize {
        self.records.iter().filter(|r| r.outcome == outcome).count()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a TrialResults {
    type Item = &'a TrialRecord;
    type IntoIter = std::slice::Iter<'a, TrialRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl fmt::Display for TrialRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Run {}: We got {}", self.index, self.outcome)
    }
}

impl fmt::Display for TrialResults {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for record in &self.records {
            writeln!(f, "{}", record)?;
        }
        Ok(())
    }
}
