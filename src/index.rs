// src/index.rs
//! Card database loaded into memory and queried by exact name.

use std::collections::HashMap;

use crate::card::CardRecord;
use crate::core::parse_document;
use crate::error::{Result, SpoilerError};

/// All cards of one database, immutable after `load`.
///
/// Lookup is exact and case-sensitive. When two cards share a name the one
/// that appears first in the document is the one returned.
#[derive(Clone, Debug, Default)]
pub struct DocumentIndex {
    cards: Vec<CardRecord>,
    by_name: HashMap<String, usize>,
}

impl DocumentIndex {
    /// Parse a card database: the `<card>` children of the root's `<cards>`.
    pub fn load(raw_markup: &str) -> Result<Self> {
        let root = parse_document(raw_markup)?;
        let cards = root.child("cards").ok_or_else(|| {
            SpoilerError::parse(root.line, format!("<{}> has no <cards> element", root.name))
        })?;

        let mut records = Vec::new();
        for (i, el) in cards.children_named("card").enumerate() {
            let record = CardRecord::from_element(el).ok_or_else(|| {
                SpoilerError::parse(el.line, format!("card #{} has no <name>", i + 1))
            })?;
            records.push(record);
        }

        let index = Self::from_records(records);
        logf!("Loaded {} cards ({} distinct names)", index.len(), index.by_name.len());
        Ok(index)
    }

    /// Build from records already in memory, keeping their order.
    pub fn from_records(cards: Vec<CardRecord>) -> Self {
        let mut by_name = HashMap::with_capacity(cards.len());
        for (pos, card) in cards.iter().enumerate() {
            if by_name.contains_key(&card.name) {
                logw!("Duplicate card name {:?} at position {pos}; keeping the first", card.name);
                continue;
            }
            by_name.insert(card.name.clone(), pos);
        }
        Self { cards, by_name }
    }

    pub fn find_by_name(&self, name: &str) -> Result<&CardRecord> {
        self.by_name
            .get(name)
            .map(|&pos| &self.cards[pos])
            .ok_or_else(|| SpoilerError::NotFound(name.to_string()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Records in document order, duplicates included.
    pub fn iter(&self) -> impl Iterator<Item = &CardRecord> {
        self.cards.iter()
    }
}
