//! Combines the static and dynamic tables behind HPACK's single addressing
//! space ([2.3.3]) and provides the lookups the encoder and decoder need to
//! turn header names and values into indices and back.
//!
//! [2.3.3]: https://tools.ietf.org/html/rfc7541#section-2.3.3

mod dynamic_table;
mod static_table;

use dynamic_table::DynamicTable;
pub use static_table::STATIC_TABLE;

/// The default dynamic table capacity, in bytes, before any
/// `SETTINGS_HEADER_TABLE_SIZE` has been negotiated.
pub const DEFAULT_DYNAMIC_SIZE: u32 = 4096;

/// A combined view over the immutable static table and a codec-owned
/// dynamic table.
///
/// Each direction of a codec instance (encoder, decoder) owns its own
/// `Table`; they are never shared, even though both start from the same
/// static entries.
#[derive(Debug)]
pub struct Table<'a> {
    statics: &'a [(&'static [u8], &'static [u8]); 61],
    dynamic: DynamicTable,
}

impl<'a> Table<'a> {
    pub fn with_dynamic_size(max_dynamic_size: u32) -> Self {
        Self {
            statics: STATIC_TABLE,
            dynamic: DynamicTable::with_max_size(max_dynamic_size),
        }
    }

    /// The number of entries addressable right now: the static table plus
    /// whatever currently lives in the dynamic table.
    pub fn len(&self) -> usize {
        self.statics.len() + self.dynamic.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn dynamic_len(&self) -> usize {
        self.dynamic.len()
    }

    pub fn max_dynamic_size(&self) -> u32 {
        self.dynamic.max_size()
    }

    pub fn dynamic_size(&self) -> u32 {
        self.dynamic.size()
    }

    /// Returns the `(name, value)` at the given 1-based combined index.
    pub fn get(&self, index: u32) -> Option<(&[u8], &[u8])> {
        if index == 0 {
            return None;
        }
        let index = index as usize;

        if index <= self.statics.len() {
            let (name, value) = self.statics[index - 1];
            return Some((name, value));
        }

        self.dynamic
            .get(index - self.statics.len() - 1)
            .map(|(name, value)| (name.as_slice(), value.as_slice()))
    }

    /// Looks up `(name, value)` in the combined table. Returns
    /// `(index, true)` for an exact name+value match, `(index, false)` for
    /// a name-only match (case-insensitive), preferring the static table
    /// and, within a table, the newest entry.
    pub fn find(&self, name: &[u8], value: &[u8]) -> Option<(usize, bool)> {
        for (i, &(n, v)) in self.statics.iter().enumerate() {
            if n == name && v == value {
                return Some((i + 1, true));
            }
        }
        for (i, (n, v)) in self.dynamic.iter().enumerate() {
            if n.as_slice() == name && v.as_slice() == value {
                return Some((self.statics.len() + i + 1, true));
            }
        }
        for (i, &(n, _)) in self.statics.iter().enumerate() {
            if n.eq_ignore_ascii_case(name) {
                return Some((i + 1, false));
            }
        }
        for (i, (n, _)) in self.dynamic.iter().enumerate() {
            if n.eq_ignore_ascii_case(name) {
                return Some((self.statics.len() + i + 1, false));
            }
        }
        None
    }

    /// Inserts `(name, value)` into the dynamic table, subject to eviction.
    pub fn insert(&mut self, name: Vec<u8>, value: Vec<u8>) {
        self.dynamic.insert(name, value);
    }

    /// Changes the dynamic table's capacity, evicting oldest entries until
    /// the table fits within the new bound.
    pub fn update_max_dynamic_size(&mut self, size: u32) {
        self.dynamic.set_max_size(size);
    }
}

impl<'a> Default for Table<'a> {
    fn default() -> Self {
        Self::with_dynamic_size(DEFAULT_DYNAMIC_SIZE)
    }
}
