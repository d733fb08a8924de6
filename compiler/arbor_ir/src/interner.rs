//! String interner for identifiers and binding names.
//!
//! Strings are owned by the interner and freed with it. Lookups hand out a
//! shared `Arc<str>`, so the returned text never borrows the lock.

use super::Name;
use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use std::sync::Arc;

#[derive(Default)]
struct InternTable {
    /// Map from string content to index.
    map: FxHashMap<Arc<str>, u32>,
    /// Storage for string contents, indexed by `Name`.
    strings: Vec<Arc<str>>,
}

/// String interner with O(1) interning and lookup.
///
/// # Thread Safety
/// Uses a `RwLock` so a shared interner can be read concurrently.
pub struct StringInterner {
    table: RwLock<InternTable>,
}

/// Interner shared between the front-end, the evaluator and reporting.
pub type SharedInterner = Arc<StringInterner>;

impl StringInterner {
    /// Create a new interner with the empty string and well-known names
    /// pre-interned.
    pub fn new() -> Self {
        let interner = StringInterner {
            table: RwLock::new(InternTable::default()),
        };
        interner.pre_intern();
        interner
    }

    /// Intern a string, returning its Name.
    pub fn intern(&self, s: &str) -> Name {
        // Fast path: already interned
        if let Some(&index) = self.table.read().map.get(s) {
            return Name::from_raw(index);
        }

        let mut table = self.table.write();
        // Double-check after acquiring write lock
        if let Some(&index) = table.map.get(s) {
            return Name::from_raw(index);
        }

        let owned: Arc<str> = Arc::from(s);
        // More than u32::MAX distinct identifiers cannot come from a u32-addressed source.
        let index = u32::try_from(table.strings.len()).unwrap_or(u32::MAX);
        table.strings.push(Arc::clone(&owned));
        table.map.insert(owned, index);
        Name::from_raw(index)
    }

    /// Look up the string for a Name.
    ///
    /// Names from a different interner resolve to the empty string.
    pub fn lookup(&self, name: Name) -> Arc<str> {
        self.table
            .read()
            .strings
            .get(name.index())
            .cloned()
            .unwrap_or_else(|| Arc::from(""))
    }

    /// Number of interned strings, including the empty string.
    pub fn len(&self) -> usize {
        self.table.read().strings.len()
    }

    /// Check if only the empty string is interned.
    pub fn is_empty(&self) -> bool {
        self.len() <= 1
    }

    fn pre_intern(&self) {
        const WELL_KNOWN: &[&str] = &[
            "",
            "this",
            "console",
            "log",
            "info",
            "warn",
            "error",
            "length",
            "undefined",
        ];

        for s in WELL_KNOWN {
            self.intern(s);
        }
    }
}

impl Default for StringInterner {
    fn default() -> Self {
        Self::new()
    }
}
