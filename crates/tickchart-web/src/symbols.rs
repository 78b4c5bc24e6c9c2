//! Symbol allow-list backing the symbol picker.
//!
//! The list is a JSON array of exchange listing records; every string value
//! whose key mentions `ACT Symbol` contributes one selectable ticker.

use std::collections::BTreeSet;
use std::path::Path;

use serde_json::Value;
use tickchart_core::Symbol;

use crate::error::WebError;

const SYMBOL_KEY_MARKER: &str = "ACT Symbol";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolCatalog {
    symbols: Vec<Symbol>,
}

impl SymbolCatalog {
    pub fn load(path: &Path) -> Result<Self, WebError> {
        let raw = std::fs::read_to_string(path).map_err(|source| WebError::SymbolFile {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json_str(&raw)?;
        tracing::info!(path = %path.display(), count = catalog.len(), "loaded symbol list");
        Ok(catalog)
    }

    pub fn from_json_str(raw: &str) -> Result<Self, WebError> {
        let records: Vec<Value> = serde_json::from_str(raw)?;

        let mut seen = BTreeSet::new();
        let mut symbols = Vec::new();
        for record in records.iter().filter_map(Value::as_object) {
            for (key, value) in record {
                if !key.contains(SYMBOL_KEY_MARKER) {
                    continue;
                }
                let Some(raw_symbol) = value.as_str() else {
                    continue;
                };
                match Symbol::parse(raw_symbol) {
                    Ok(symbol) => {
                        if seen.insert(symbol.clone()) {
                            symbols.push(symbol);
                        }
                    }
                    Err(_) => tracing::warn!(symbol = raw_symbol, "skipping unusable symbol"),
                }
            }
        }

        let catalog = Self { symbols };
        if catalog.is_empty() {
            return Err(WebError::NoSymbols);
        }
        Ok(catalog)
    }

    pub fn from_symbols(symbols: Vec<Symbol>) -> Self {
        Self { symbols }
    }

    /// Exact, case-sensitive membership; form values come from the picker.
    pub fn find(&self, raw: &str) -> Option<&Symbol> {
        self.symbols.iter().find(|symbol| symbol.as_str() == raw)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Symbol> {
        self.symbols.iter()
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}
