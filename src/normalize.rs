// src/normalize.rs
//! Card record → spoiler entry: color code, power/toughness, rarity and the
//! required-field checks.

use std::fmt;

use crate::card::CardRecord;
use crate::config::consts::{ARTIFACT_CODE, COLLECTOR_NUMBER, GOLD_CODE, RARITY_PREFIX_LEN};
use crate::error::{Result, SpoilerError};
use crate::spoiler::SpoilerEntry;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ColorCode {
    /// No colors at all.
    Artifact,
    /// Exactly one color; the code as it appears in the database.
    Mono(String),
    /// Two or more colors.
    Gold,
}

impl fmt::Display for ColorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorCode::Artifact => f.write_str(ARTIFACT_CODE),
            ColorCode::Mono(code) => f.write_str(code),
            ColorCode::Gold => f.write_str(GOLD_CODE),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Rarity {
    #[default]
    Common,
    Uncommon,
    Rare,
}

impl Rarity {
    pub const ALL: [Rarity; 3] = [Rarity::Common, Rarity::Uncommon, Rarity::Rare];

    pub fn code(self) -> char {
        match self {
            Rarity::Common => 'C',
            Rarity::Uncommon => 'U',
            Rarity::Rare => 'R',
        }
    }

    pub fn from_code(c: char) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.code() == c)
    }

    /// The request-line prefix for this rarity, e.g. `"U: "`.
    pub fn prefix(self) -> String {
        format!("{}: ", self.code())
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Empty and absent color lists are the same thing here: both mean artifact.
pub fn derive_color_code(card: &CardRecord) -> ColorCode {
    match card.colors.as_slice() {
        [] => ColorCode::Artifact,
        [only] => ColorCode::Mono(only.clone()),
        _ => ColorCode::Gold,
    }
}

pub fn derive_power_toughness(card: &CardRecord) -> &str {
    card.power_toughness.as_deref().unwrap_or("")
}

/// Split a `"R: Name"` style request into rarity and name.
///
/// A recognized prefix wins over `explicit`. Without one, `explicit` (or
/// Common) applies and the token comes back untouched.
pub fn resolve_rarity(explicit: Option<Rarity>, token: &str) -> (Rarity, &str) {
    let prefixed = token
        .get(..RARITY_PREFIX_LEN)
        .and_then(|head| match head.as_bytes() {
            [c, b':', b' '] => Rarity::from_code(*c as char),
            _ => None,
        });
    match prefixed {
        Some(rarity) => (rarity, &token[RARITY_PREFIX_LEN..]),
        None => (explicit.unwrap_or_default(), token),
    }
}

/// Mana cost and type are required; rules text falls back to empty.
pub fn build_entry(card: &CardRecord, rarity: Rarity) -> Result<SpoilerEntry> {
    let required = |value: &Option<String>, field: &'static str| {
        value.clone().ok_or_else(|| SpoilerError::MissingField { card: card.name.clone(), field })
    };

    Ok(SpoilerEntry {
        name: card.name.clone(),
        color: derive_color_code(card),
        mana_cost: required(&card.mana_cost, "mana cost")?,
        type_line: required(&card.card_type, "type")?,
        power_toughness: derive_power_toughness(card).to_string(),
        text: card.text.clone().unwrap_or_default(),
        rarity,
        collector_number: COLLECTOR_NUMBER.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dragon() -> CardRecord {
        CardRecord::new("Shivan Dragon")
            .with_color("R")
            .with_mana_cost("4RR")
            .with_type("Creature - Dragon")
            .with_pt("5/5")
            .with_text("Flying\nR: Shivan Dragon gets +1/+0 until end of turn.")
    }

    #[test]
    fn color_code_by_count() {
        assert_eq!(derive_color_code(&CardRecord::new("Ornithopter")), ColorCode::Artifact);
        assert_eq!(derive_color_code(&dragon()), ColorCode::Mono("R".into()));
        let gold = CardRecord::new("Fire // Ice").with_color("R").with_color("U");
        assert_eq!(derive_color_code(&gold), ColorCode::Gold);
    }

    #[test]
    fn color_code_display() {
        assert_eq!(ColorCode::Artifact.to_string(), "Art");
        assert_eq!(ColorCode::Gold.to_string(), "Gld");
        assert_eq!(ColorCode::Mono("G".into()).to_string(), "G");
    }

    #[test]
    fn pt_defaults_to_empty() {
        assert_eq!(derive_power_toughness(&dragon()), "5/5");
        assert_eq!(derive_power_toughness(&CardRecord::new("Lightning Bolt")), "");
    }

    #[test]
    fn prefixes_set_rarity_and_strip() {
        assert_eq!(resolve_rarity(None, "C: Llanowar Elves"), (Rarity::Common, "Llanowar Elves"));
        assert_eq!(resolve_rarity(None, "U: Fire // Ice"), (Rarity::Uncommon, "Fire // Ice"));
        assert_eq!(resolve_rarity(Some(Rarity::Common), "R: Shivan Dragon"), (Rarity::Rare, "Shivan Dragon"));
    }

    #[test]
    fn unprefixed_uses_explicit_or_common() {
        assert_eq!(resolve_rarity(None, "Shivan Dragon"), (Rarity::Common, "Shivan Dragon"));
        assert_eq!(resolve_rarity(Some(Rarity::Rare), "Shivan Dragon"), (Rarity::Rare, "Shivan Dragon"));
    }

    #[test]
    fn lookalike_prefixes_are_names() {
        for token in ["M: Foo", "R:Foo", "r: Foo", "R: ", "R:", "R", "", "Æ: x"] {
            let (rarity, name) = resolve_rarity(None, token);
            if token == "R: " {
                assert_eq!((rarity, name), (Rarity::Rare, ""));
            } else {
                assert_eq!((rarity, name), (Rarity::Common, token), "{token:?}");
            }
        }
    }

    #[test]
    fn entry_from_full_record() {
        let e = build_entry(&dragon(), Rarity::Rare).unwrap();
        assert_eq!(e.name, "Shivan Dragon");
        assert_eq!(e.color, ColorCode::Mono("R".into()));
        assert_eq!(e.mana_cost, "4RR");
        assert_eq!(e.type_line, "Creature - Dragon");
        assert_eq!(e.power_toughness, "5/5");
        assert!(e.text.starts_with("Flying\n"));
        assert_eq!(e.rarity, Rarity::Rare);
        assert_eq!(e.collector_number, "79/79");
    }

    #[test]
    fn missing_text_is_empty() {
        let bear = CardRecord::new("Grizzly Bears").with_color("G").with_mana_cost("1G").with_type("Creature - Bear");
        assert_eq!(build_entry(&bear, Rarity::Common).unwrap().text, "");
    }

    #[test]
    fn missing_cost_or_type_fails() {
        let no_cost = CardRecord::new("Ancestral Vision").with_type("Sorcery");
        match build_entry(&no_cost, Rarity::Rare) {
            Err(SpoilerError::MissingField { card, field }) => {
                assert_eq!(card, "Ancestral Vision");
                assert_eq!(field, "mana cost");
            }
            other => panic!("unexpected {other:?}"),
        }
        let no_type = CardRecord::new("Mystery").with_mana_cost("1");
        assert!(matches!(
            build_entry(&no_type, Rarity::Common),
            Err(SpoilerError::MissingField { field: "type", .. })
        ));
    }
}
