//! The unspent-output pool

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::types::{OutputRecord, OutputReference};

/// Collection of currently unspent outputs, keyed by the reference that
/// uniquely names each one.
///
/// Cloning produces an independent snapshot; the validator relies on that to
/// isolate its working copy from the caller's.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UtxoPool {
    utxos: HashMap<OutputReference, OutputRecord>,
}

impl UtxoPool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, reference: &OutputReference) -> bool {
        self.utxos.contains_key(reference)
    }

    /// Record currently held under `reference`, if any.
    pub fn get(&self, reference: &OutputReference) -> Option<&OutputRecord> {
        self.utxos.get(reference)
    }

    /// Adds a newly created output.
    ///
    /// # Panics
    ///
    /// Panics if `reference` is already present. References are unique per
    /// accepted-transaction output, so a duplicate insert is a caller bug,
    /// never something adversarial input can trigger.
    pub fn insert(&mut self, reference: OutputReference, record: OutputRecord) {
        if self.utxos.insert(reference.clone(), record).is_some() {
            panic!("output reference {reference:?} inserted twice");
        }
    }

    /// Removes a spent output and returns its record.
    ///
    /// # Panics
    ///
    /// Panics if `reference` is not present; removing an absent output is a
    /// caller bug.
    pub fn remove(&mut self, reference: &OutputReference) -> OutputRecord {
        match self.utxos.remove(reference) {
            Some(record) => record,
            None => panic!("output reference {reference:?} removed while absent"),
        }
    }

    /// References of every unspent output currently in the pool.
    pub fn references(&self) -> impl Iterator<Item = &OutputReference> {
        self.utxos.keys()
    }

    pub fn len(&self) -> usize {
        self.utxos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.utxos.is_empty()
    }
}
