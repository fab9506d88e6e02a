//! # Items Module
//!
//! The item model: concrete item variants, the tagged `Item` union over
//! them, record tokenization, and the keyword registry that creates items
//! from text records.
//!
//! Stackability is a property of the variant, not of any one instance:
//! armour never stacks, consumables always do. The inventory relies on this
//! when deciding between single-item slots and stacks.

pub mod armour;
pub mod consumable;
pub mod factory;
pub mod record;

pub use armour::*;
pub use consumable::*;
pub use factory::*;
pub use record::*;

use crate::SatchelResult;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One game item of any supported variant.
///
/// Two items are equivalent (`==`) when they are the same variant with
/// identical attribute values; the inventory uses this to decide whether
/// stackable items may share a stack.
///
/// # Examples
///
/// ```
/// use satchel::{Armour, Consumable, Item};
///
/// let boots = Item::from(Armour::new());
/// assert!(!boots.is_stackable());
///
/// let potion = Item::from(Consumable::new());
/// assert!(potion.is_stackable());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Item {
    /// A piece of armour; occupies a whole slot on its own
    Armour(Armour),
    /// A consumable; shares a slot with equivalent consumables
    Consumable(Consumable),
}

impl Item {
    /// Returns the item's display name.
    pub fn name(&self) -> &str {
        match self {
            Item::Armour(armour) => &armour.name,
            Item::Consumable(consumable) => &consumable.name,
        }
    }

    /// Reports whether items of this variant may be stacked.
    ///
    /// The answer depends only on the variant, never on attribute state.
    pub fn is_stackable(&self) -> bool {
        matches!(self, Item::Consumable(_))
    }

    /// Populates this item from the remaining fields of a record.
    ///
    /// Each variant consumes its own fixed field sequence; see [`Armour`]
    /// and [`Consumable`] for the orders.
    pub fn read(&mut self, record: &mut RecordReader<'_>) -> SatchelResult<()> {
        match self {
            Item::Armour(armour) => armour.read(record),
            Item::Consumable(consumable) => consumable.read(record),
        }
    }
}

impl From<Armour> for Item {
    fn from(armour: Armour) -> Self {
        Item::Armour(armour)
    }
}

impl From<Consumable> for Item {
    fn from(consumable: Consumable) -> Self {
        Item::Consumable(consumable)
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Item::Armour(armour) => write!(f, "{}", armour),
            Item::Consumable(consumable) => write!(f, "{}", consumable),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stackability_is_fixed_per_variant() {
        let mut armour = Armour::new();
        assert!(!Item::from(armour.clone()).is_stackable());

        armour.name = "Boots".to_string();
        armour.durability = 100;
        assert!(!Item::from(armour).is_stackable());

        let mut consumable = Consumable::new();
        assert!(Item::from(consumable.clone()).is_stackable());

        consumable.name = "Tomato".to_string();
        consumable.uses = 2;
        assert!(Item::from(consumable).is_stackable());
    }

    #[test]
    fn test_name_reads_through_to_the_variant() {
        let mut armour = Armour::new();
        armour.name = "Helmet".to_string();
        assert_eq!(Item::from(armour).name(), "Helmet");

        let mut consumable = Consumable::new();
        consumable.name = "Bread".to_string();
        assert_eq!(Item::from(consumable).name(), "Bread");
    }

    #[test]
    fn test_read_dispatches_to_the_variant() {
        let mut item = Item::from(Armour::new());
        let mut record = RecordReader::new("Boots Leather 100 2 Protection 1 Fire");

        item.read(&mut record).unwrap();

        match item {
            Item::Armour(armour) => {
                assert_eq!(armour.name, "Boots");
                assert_eq!(armour.material, "Leather");
                assert_eq!(armour.modifier_level, 1);
            }
            other => panic!("expected armour, got {:?}", other),
        }
    }

    #[test]
    fn test_items_of_different_variants_are_never_equivalent() {
        let mut armour = Armour::new();
        armour.name = "Tomato".to_string();
        let mut consumable = Consumable::new();
        consumable.name = "Tomato".to_string();

        assert_ne!(Item::from(armour), Item::from(consumable));
    }

    #[test]
    fn test_clone_is_a_deep_copy() {
        let mut record = RecordReader::new("Boots Leather 100 2 Protection 1 Fire");
        let mut original = Item::from(Armour::new());
        original.read(&mut record).unwrap();

        let mut copy = original.clone();
        if let Item::Armour(armour) = &mut copy {
            armour.material = "Iron".to_string();
        }

        match &original {
            Item::Armour(armour) => assert_eq!(armour.material, "Leather"),
            other => panic!("expected armour, got {:?}", other),
        }
        assert_ne!(original, copy);
    }

    #[test]
    fn test_display_delegates_to_the_variant() {
        let mut consumable = Consumable::new();
        consumable.name = "Bread".to_string();
        consumable.effect = "Hunger".to_string();
        consumable.uses = 1;

        let rendered = Item::from(consumable).to_string();
        assert!(rendered.contains("  Nme: Bread\n"));
        assert!(rendered.contains("  Eft: Hunger\n"));
    }
}
