//! The `lang.json` dictionary of localized symbol names and descriptions.

use indexmap::IndexMap;
use serde::Serialize;

use crate::catalog::SymbolDefinition;

/// Localized text of one symbol
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LangEntry {
    pub kind: Option<String>,
    pub names: IndexMap<String, String>,
    pub texts: IndexMap<String, String>,
}

impl LangEntry {
    pub fn from_symbol(symbol: &SymbolDefinition) -> Self {
        Self {
            kind: symbol.kind.clone(),
            names: symbol.names.clone(),
            texts: symbol.texts.clone(),
        }
    }
}

/// Symbol id to localized text, in the order symbols were emitted
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct LanguageDictionary {
    entries: IndexMap<String, LangEntry>,
}

impl LanguageDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a symbol. A repeated id replaces the earlier entry and is logged.
    pub fn insert(&mut self, symbol: &SymbolDefinition) {
        let previous = self.entries.insert(symbol.id.clone(), LangEntry::from_symbol(symbol));
        if previous.is_some() {
            crate::log::warn!(symbol = %symbol.id, "duplicate symbol id, later definition wins");
        }
    }

    pub fn get(&self, id: &str) -> Option<&LangEntry> {
        self.entries.get(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Pretty-printed JSON with two-space indentation
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
