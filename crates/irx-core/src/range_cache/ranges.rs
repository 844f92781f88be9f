//! Per-path range index.

use crate::range::ByteRange;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

/// Cached responses for one resource path, keyed by the byte range they were fetched with.
///
/// Ranges may overlap; nothing is merged. Slots keep insertion order so the
/// containment scan has a stable tie-break: the most recently inserted
/// containing range wins.
#[derive(Debug, Default)]
pub struct PathRanges {
    slots: Vec<(ByteRange, Arc<Value>)>,
    index: HashMap<ByteRange, usize>,
}

impl PathRanges {
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Stored ranges in insertion order.
    pub fn ranges(&self) -> impl Iterator<Item = ByteRange> + '_ {
        self.slots.iter().map(|(r, _)| *r)
    }

    /// Literal key match.
    pub fn exact(&self, range: &ByteRange) -> Option<&Arc<Value>> {
        self.index.get(range).map(|&slot| &self.slots[slot].1)
    }

    /// Last inserted entry whose range covers `range`.
    pub fn containing(&self, range: &ByteRange) -> Option<&Arc<Value>> {
        self.slots
            .iter()
            .rev()
            .find(|(stored, _)| stored.contains(range))
            .map(|(_, value)| value)
    }

    /// Exact match first, then the containment scan.
    pub fn lookup(&self, range: &ByteRange) -> Option<&Arc<Value>> {
        self.exact(range).or_else(|| self.containing(range))
    }

    /// Stores `value` under `range`. An existing key keeps its slot and gets the new value.
    pub(crate) fn insert(&mut self, range: ByteRange, value: Arc<Value>) {
        match self.index.get(&range) {
            Some(&slot) => self.slots[slot].1 = value,
            None => {
                self.index.insert(range, self.slots.len());
                self.slots.push((range, value));
            }
        }
    }
}
