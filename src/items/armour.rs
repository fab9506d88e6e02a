//! # Armour
//!
//! One piece of armour as found in most video games, boots and helmets
//! included. Armour is never stackable: every piece occupies its own
//! inventory slot.

use crate::items::RecordReader;
use crate::SatchelResult;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single piece of armour.
///
/// Record field order: name, material, durability, defense, modifier,
/// modifier level, element.
///
/// # Examples
///
/// ```
/// use satchel::{Armour, RecordReader};
///
/// let mut armour = Armour::new();
/// let mut record = RecordReader::new("Boots Leather 100 2 Protection 1 Fire");
/// armour.read(&mut record).unwrap();
///
/// assert_eq!(armour.name, "Boots");
/// assert_eq!(armour.durability, 100);
/// assert_eq!(armour.element, "Fire");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Armour {
    /// Display name
    pub name: String,
    /// Base material out of which the armour is constructed
    pub material: String,
    /// Durability decreases each time armour is used
    pub durability: i32,
    /// The amount of damage that can be negated
    pub defense: i32,
    /// Type of enchantment afforded (e.g. protection or feather_falling)
    pub modifier: String,
    /// Enchantment level applied
    pub modifier_level: i32,
    /// Associated element (e.g. ice, fire, lightning)
    pub element: String,
}

impl Armour {
    /// Creates armour with an empty name, blank material, zero durability and
    /// defense, no modifier, and a blank element.
    pub fn new() -> Self {
        Self {
            name: String::new(),
            material: String::new(),
            durability: 0,
            defense: 0,
            modifier: String::new(),
            modifier_level: 0,
            element: String::new(),
        }
    }

    /// Populates this armour from the remaining fields of a record.
    pub fn read(&mut self, record: &mut RecordReader<'_>) -> SatchelResult<()> {
        self.name = record.next_str("name")?.to_string();
        self.material = record.next_str("material")?.to_string();
        self.durability = record.next_int("durability")?;
        self.defense = record.next_int("defense")?;
        self.modifier = record.next_str("modifier")?.to_string();
        self.modifier_level = record.next_int("modifier level")?;
        self.element = record.next_str("element")?.to_string();
        Ok(())
    }
}

impl Default for Armour {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Armour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  Nme: {}", self.name)?;
        writeln!(f, "  Dur: {}", self.durability)?;
        writeln!(f, "  Def: {}", self.defense)?;
        writeln!(f, "  Mtl: {}", self.material)?;
        writeln!(f, "  Mdr: {} (Lvl {})", self.modifier, self.modifier_level)?;
        writeln!(f, "  Emt: {}", self.element)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SatchelError;

    fn fancy_armour() -> Armour {
        Armour {
            name: "Fancy".to_string(),
            material: "Vibranium".to_string(),
            durability: 9001,
            defense: 62,
            modifier: "ProcrastinationReduction".to_string(),
            modifier_level: 999999,
            element: "H20".to_string(),
        }
    }

    #[test]
    fn test_new_is_blank() {
        let armour = Armour::new();

        assert_eq!(armour.name, "");
        assert_eq!(armour.material, "");
        assert_eq!(armour.durability, 0);
        assert_eq!(armour.defense, 0);
        assert_eq!(armour.modifier, "");
        assert_eq!(armour.modifier_level, 0);
        assert_eq!(armour.element, "");
        assert_eq!(armour, Armour::default());
    }

    #[test]
    fn test_read_consumes_fields_in_order() {
        let mut armour = Armour::new();
        let mut record =
            RecordReader::new("Fancy Vibranium 9001 62 ProcrastinationReduction 999999 H20");

        armour.read(&mut record).unwrap();

        assert_eq!(armour, fancy_armour());
    }

    #[test]
    fn test_read_fails_on_short_record() {
        let mut armour = Armour::new();
        let mut record = RecordReader::new("Fancy Vibranium 9001");

        let err = armour.read(&mut record).unwrap_err();
        assert!(matches!(err, SatchelError::MissingField("defense")));
    }

    #[test]
    fn test_read_fails_on_non_numeric_durability() {
        let mut armour = Armour::new();
        let mut record =
            RecordReader::new("Fancy Vibranium solid 62 ProcrastinationReduction 999999 H20");

        let err = armour.read(&mut record).unwrap_err();
        assert!(matches!(
            err,
            SatchelError::InvalidNumber {
                field: "durability",
                ..
            }
        ));
    }

    #[test]
    fn test_clone_is_independent() {
        let original = fancy_armour();
        let mut copy = original.clone();

        assert_eq!(copy, original);

        copy.name = "Plain".to_string();
        copy.durability = 1;

        assert_eq!(original.name, "Fancy");
        assert_eq!(original.durability, 9001);
    }

    #[test]
    fn test_display_format() {
        let expected = concat!(
            "  Nme: Fancy\n",
            "  Dur: 9001\n",
            "  Def: 62\n",
            "  Mtl: Vibranium\n",
            "  Mdr: ProcrastinationReduction (Lvl 999999)\n",
            "  Emt: H20\n",
        );

        assert_eq!(fancy_armour().to_string(), expected);
    }
}
