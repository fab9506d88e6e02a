//! # Consumable
//!
//! Food, potions, and other single-purpose items that are used up over time.
//! Consumables are always stackable: identical consumables share one
//! inventory slot up to the stack capacity.

use crate::items::RecordReader;
use crate::SatchelResult;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A consumable item.
///
/// Record field order: name, effect, uses.
///
/// # Examples
///
/// ```
/// use satchel::{Consumable, RecordReader};
///
/// let mut potion = Consumable::new();
/// let mut record = RecordReader::new("HealthPotion Healing 3");
/// potion.read(&mut record).unwrap();
///
/// assert_eq!(potion.name, "HealthPotion");
/// assert_eq!(potion.effect, "Healing");
/// assert_eq!(potion.uses, 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Consumable {
    /// Display name
    pub name: String,
    /// Effect granted on use (e.g. healing or invisibility)
    pub effect: String,
    /// Number of uses before the item is spent
    pub uses: i32,
}

impl Consumable {
    /// Creates a consumable with an empty name, a blank effect, and zero
    /// uses.
    pub fn new() -> Self {
        Self {
            name: String::new(),
            effect: String::new(),
            uses: 0,
        }
    }

    /// Populates this consumable from the remaining fields of a record.
    pub fn read(&mut self, record: &mut RecordReader<'_>) -> SatchelResult<()> {
        self.name = record.next_str("name")?.to_string();
        self.effect = record.next_str("effect")?.to_string();
        self.uses = record.next_int("uses")?;
        Ok(())
    }
}

impl Default for Consumable {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Consumable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  Nme: {}", self.name)?;
        writeln!(f, "  Eft: {}", self.effect)?;
        writeln!(f, "  Use: {}", self.uses)
    }
}
