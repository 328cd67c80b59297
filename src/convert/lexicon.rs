//! Pronunciation overrides for symbol names.
//!
//! Some names read badly when spoken literally (brand names, contractions
//! dropped from file names). Each entry maps a normalized name to the phrase
//! that should be spoken instead. Matching is exact and case-insensitive.

use std::collections::HashMap;

/// Built-in overrides as (normalized name, spoken phrase).
const SPECIAL_CASES: &[(&str, &str)] = &[("mcdonalds", "McDonald's")];

/// Exact-match table of spoken replacements.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    entries: HashMap<String, String>, // lowercased name -> spoken phrase
}

impl Lexicon {
    /// Create a lexicon holding the built-in overrides.
    pub fn builtin() -> Self {
        let mut lexicon = Self::default();
        for (name, spoken) in SPECIAL_CASES {
            lexicon.insert(name, spoken);
        }
        lexicon
    }

    /// Add or replace an override.
    pub fn insert(&mut self, name: &str, spoken: &str) {
        self.entries.insert(name.to_lowercase(), spoken.to_string());
    }

    /// Look up the spoken replacement for a normalized name.
    pub fn lookup(&self, name: &str) -> Option<&str> {
        self.entries.get(&name.to_lowercase()).map(String::as_str)
    }

    /// Number of overrides in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no overrides.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
