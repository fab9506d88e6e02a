//! # Item Stack
//!
//! A bounded group of equivalent stackable items occupying one inventory
//! slot. The first item placed becomes the representative; later items are
//! absorbed only when they are equivalent to it and the stack still has
//! room.

use crate::items::Item;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A stack of equivalent stackable items.
///
/// The count always stays within `1..=capacity`; [`ItemStack::try_absorb`]
/// is the only mutator.
///
/// # Examples
///
/// ```
/// use satchel::{Consumable, Item, ItemStack};
///
/// let mut potion = Consumable::new();
/// potion.name = "HealthPotion".to_string();
/// potion.effect = "Healing".to_string();
/// potion.uses = 3;
/// let potion = Item::from(potion);
///
/// let mut stack = ItemStack::new(potion.clone(), 3);
/// assert!(stack.try_absorb(&potion));
/// assert_eq!(stack.count(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemStack {
    /// The first item placed; equivalence is tested against it
    item: Item,
    /// Units currently in the stack
    count: u32,
    /// Maximum units this stack may hold
    capacity: u32,
}

impl ItemStack {
    /// Creates a stack holding one item.
    ///
    /// A capacity below 1 is raised to 1 so the count invariant holds.
    pub fn new(item: Item, capacity: u32) -> Self {
        Self {
            item,
            count: 1,
            capacity: capacity.max(1),
        }
    }

    /// Absorbs `item` into the stack if it is equivalent to the
    /// representative and the stack has room.
    ///
    /// Equivalent means the same variant with identical attribute values.
    /// Returns `true` and increments the count on success; returns `false`
    /// and leaves the stack untouched otherwise.
    pub fn try_absorb(&mut self, item: &Item) -> bool {
        if self.count < self.capacity && *item == self.item {
            self.count += 1;
            true
        } else {
            false
        }
    }

    /// The representative item.
    pub fn item(&self) -> &Item {
        &self.item
    }

    /// Units currently in the stack.
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Maximum units this stack may hold.
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Reports whether the stack has no room left.
    pub fn is_full(&self) -> bool {
        self.count >= self.capacity
    }
}

impl fmt::Display for ItemStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.item)?;
        writeln!(f, "  Qty: {}", self.count)
    }
}
