//! Frequency table of entered numbers.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// How many times a given value was entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FrequencyRecord {
    pub value: u64,
    pub frequency: u64,
}

/// One record per distinct value, kept in first-entry order.
///
/// Records are never removed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<FrequencyRecord>", into = "Vec<FrequencyRecord>")]
pub struct EntryTable {
    records: Vec<FrequencyRecord>,
    index: HashMap<u64, usize>,
}

impl EntryTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one more entry of `value` and return the updated record.
    pub fn record(&mut self, value: u64) -> FrequencyRecord {
        let pos = match self.index.get(&value) {
            Some(&pos) => pos,
            None => self.insert(value),
        };
        let record = &mut self.records[pos];
        record.frequency += 1;
        *record
    }

    pub fn get(&self, value: u64) -> Option<&FrequencyRecord> {
        self.index.get(&value).map(|&pos| &self.records[pos])
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Copy of all records, most frequent first.
    ///
    /// The order of records with equal frequency is unspecified.
    pub fn by_frequency(&self) -> Vec<FrequencyRecord> {
        let mut sorted = self.records.clone();
        sorted.sort_by(|a, b| b.frequency.cmp(&a.frequency));
        sorted
    }

    fn insert(&mut self, value: u64) -> usize {
        let pos = self.records.len();
        self.records.push(FrequencyRecord {
            value,
            frequency: 0,
        });
        self.index.insert(value, pos);
        pos
    }
}

impl From<Vec<FrequencyRecord>> for EntryTable {
    // Duplicate values are merged into the first record.
    fn from(records: Vec<FrequencyRecord>) -> Self {
        let mut table = Self::new();
        for record in records {
            let pos = match table.index.get(&record.value) {
                Some(&pos) => pos,
                None => table.insert(record.value),
            };
            table.records[pos].frequency += record.frequency;
        }
        table
    }
}

impl From<EntryTable> for Vec<FrequencyRecord> {
    fn from(table: EntryTable) -> Self {
        table.records
    }
}
