// src/card.rs
//! One card as read from the database. Every field except the name may be
//! missing; absence is an explicit `None` (or an empty color list).

use crate::core::Element;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CardRecord {
    pub name: String,
    /// Single-letter color codes, first-seen order, no duplicates or blanks.
    pub colors: Vec<String>,
    pub mana_cost: Option<String>,
    pub card_type: Option<String>,
    pub power_toughness: Option<String>,
    /// Rules text, symbol markup left as-is.
    pub text: Option<String>,
}

impl CardRecord {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), ..Self::default() }
    }

    #[must_use]
    pub fn with_color(mut self, code: impl Into<String>) -> Self {
        push_color(&mut self.colors, code.into());
        self
    }

    #[must_use]
    pub fn with_mana_cost(mut self, cost: impl Into<String>) -> Self {
        self.mana_cost = Some(cost.into());
        self
    }

    #[must_use]
    pub fn with_type(mut self, type_line: impl Into<String>) -> Self {
        self.card_type = Some(type_line.into());
        self
    }

    #[must_use]
    pub fn with_pt(mut self, pt: impl Into<String>) -> Self {
        self.power_toughness = Some(pt.into());
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Read a `<card>` element. `None` when it has no `<name>`.
    ///
    /// Fields come from the first child of each name; colors from every
    /// `<color>` child. The rules-text tag is matched ignoring case, so both
    /// `<text>` and `<Text>` databases load.
    pub(crate) fn from_element(card: &Element) -> Option<Self> {
        let field = |tag: &str| card.child(tag).map(|e| e.text.clone());

        let mut colors = Vec::new();
        for el in card.children_named("color") {
            push_color(&mut colors, el.text.trim().to_string());
        }

        Some(Self {
            name: field("name")?,
            colors,
            mana_cost: field("manacost"),
            card_type: field("type"),
            power_toughness: field("pt"),
            text: card.child_ci("text").map(|e| e.text.clone()),
        })
    }
}

fn push_color(colors: &mut Vec<String>, code: String) {
    if !code.is_empty() && !colors.contains(&code) {
        colors.push(code);
    }
}
