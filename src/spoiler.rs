// src/spoiler.rs
use std::io::Write;

use crate::core::sanitize::encode_latin1;
use crate::error::{Result, SpoilerError};
use crate::normalize::{ColorCode, Rarity};

/// One card in MWS spoiler shape. Built per request, written, dropped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpoilerEntry {
    pub name: String,
    pub color: ColorCode,
    pub mana_cost: String,
    pub type_line: String,
    pub power_toughness: String,
    pub text: String,
    pub rarity: Rarity,
    pub collector_number: String,
}

/// Labels in output order. Flavor text and artist are always blank.
pub const LABELS: [&str; 10] = [
    "Card Name:",
    "Card Color:",
    "Mana Cost:",
    "Type & Class:",
    "Pow/Tou:",
    "Card Text:",
    "Flavor Text:",
    "Artist:",
    "Rarity:",
    "Card #:",
];

impl SpoilerEntry {
    /// `(label, value)` pairs in output order.
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        let values = [
            self.name.clone(),
            self.color.to_string(),
            self.mana_cost.clone(),
            self.type_line.clone(),
            self.power_toughness.clone(),
            self.text.clone(),
            String::new(),
            String::new(),
            self.rarity.to_string(),
            self.collector_number.clone(),
        ];
        LABELS.into_iter().zip(values).collect()
    }

    /// Full record as Latin-1 bytes, `label\tvalue\n` per line.
    pub fn to_latin1(&self) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        for (label, value) in self.fields() {
            buf.extend_from_slice(label.as_bytes());
            buf.push(b'\t');
            let bytes = encode_latin1(&value).map_err(|ch| SpoilerError::Encoding {
                card: self.name.clone(),
                field: label.trim_end_matches(':'),
                ch,
            })?;
            buf.extend_from_slice(&bytes);
            buf.push(b'\n');
        }
        Ok(buf)
    }
}

/// Encode the whole entry first, then write it; a bad char leaves nothing behind.
pub fn write_entry<W: Write>(mut w: W, entry: &SpoilerEntry) -> Result<()> {
    let bytes = entry.to_latin1()?;
    w.write_all(&bytes)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry() -> SpoilerEntry {
        SpoilerEntry {
            name: "Aerie Mystics".into(),
            color: ColorCode::Mono("W".into()),
            mana_cost: "4W".into(),
            type_line: "Creature - Bird Cleric".into(),
            power_toughness: "3/3".into(),
            text: "Flying".into(),
            rarity: Rarity::Uncommon,
            collector_number: "79/79".into(),
        }
    }

    #[test]
    fn writes_ten_tabbed_lines_in_order() {
        let mut out = Vec::new();
        write_entry(&mut out, &entry()).unwrap();
        let s = String::from_utf8(out).unwrap();
        assert_eq!(
            s,
            "Card Name:\tAerie Mystics\n\
             Card Color:\tW\n\
             Mana Cost:\t4W\n\
             Type & Class:\tCreature - Bird Cleric\n\
             Pow/Tou:\t3/3\n\
             Card Text:\tFlying\n\
             Flavor Text:\t\n\
             Artist:\t\n\
             Rarity:\tU\n\
             Card #:\t79/79\n"
        );
    }

    #[test]
    fn latin1_bytes_for_accented_text() {
        let mut e = entry();
        e.text = "Lim-Dûl".into();
        let bytes = e.to_latin1().unwrap();
        assert!(bytes.windows(7).any(|w| w == b"Lim-D\xfbl"));
    }

    #[test]
    fn unencodable_text_writes_nothing() {
        let mut e = entry();
        e.text = "Draw a card \u{2014} then discard".into();
        let mut out = Vec::new();
        match write_entry(&mut out, &e) {
            Err(SpoilerError::Encoding { card, field, ch }) => {
                assert_eq!(card, "Aerie Mystics");
                assert_eq!(field, "Card Text");
                assert_eq!(ch, '\u{2014}');
            }
            other => panic!("unexpected {other:?}"),
        }
        assert!(out.is_empty());
    }
}
