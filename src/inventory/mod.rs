//! # Inventory
//!
//! The slot allocation engine. An inventory owns a fixed row of slots;
//! stackable items are merged into existing stacks before a fresh slot is
//! claimed, while unstackable items always take a slot of their own.

pub mod stack;

pub use stack::*;

use crate::config;
use crate::items::Item;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One inventory position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Slot {
    /// No item stored here yet
    Empty,
    /// A single unstackable item
    Single(Item),
    /// A bounded stack of equivalent stackable items
    Stacked(ItemStack),
}

impl Slot {
    /// Reports whether the slot holds nothing.
    pub fn is_empty(&self) -> bool {
        matches!(self, Slot::Empty)
    }
}

/// A fixed-size player inventory.
///
/// Slots are filled in order. Adding a stackable item first tries every
/// existing stack from slot zero upward, then claims the first empty slot;
/// adding an unstackable item goes straight for the first empty slot.
///
/// # Examples
///
/// ```
/// use satchel::{Consumable, Inventory, Item};
///
/// let mut inventory = Inventory::new(4);
///
/// let mut bread = Consumable::new();
/// bread.name = "Bread".to_string();
/// bread.effect = "Hunger".to_string();
/// bread.uses = 1;
///
/// assert!(inventory.add_item(Item::from(bread.clone())));
/// assert!(inventory.add_item(Item::from(bread)));
/// assert_eq!(inventory.used_slots(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    slots: Vec<Slot>,
    stack_capacity: u32,
}

impl Inventory {
    /// Creates an inventory with `size` empty slots.
    ///
    /// A size of 0 falls back to [`config::DEFAULT_INVENTORY_SIZE`], and
    /// stacks are bounded by [`config::DEFAULT_STACK_CAPACITY`].
    pub fn new(size: usize) -> Self {
        Self::with_stack_capacity(size, config::DEFAULT_STACK_CAPACITY)
    }

    /// Creates an inventory whose stacks hold at most `stack_capacity`
    /// items each.
    ///
    /// Zero values fall back to the corresponding [`config`] defaults.
    pub fn with_stack_capacity(size: usize, stack_capacity: u32) -> Self {
        let size = if size == 0 {
            config::DEFAULT_INVENTORY_SIZE
        } else {
            size
        };
        let stack_capacity = if stack_capacity == 0 {
            config::DEFAULT_STACK_CAPACITY
        } else {
            stack_capacity
        };
        Self {
            slots: vec![Slot::Empty; size],
            stack_capacity,
        }
    }

    /// Adds an item, reporting whether it found a home.
    ///
    /// Stackable items are absorbed by the first stack of equivalent items
    /// that still has room; failing that, the first empty slot is seeded
    /// with a new stack. Unstackable items claim the first empty slot
    /// directly. Returns `false` when neither works, leaving the inventory
    /// unchanged.
    pub fn add_item(&mut self, item: Item) -> bool {
        if item.is_stackable() {
            for slot in &mut self.slots {
                if let Slot::Stacked(stack) = slot {
                    if stack.try_absorb(&item) {
                        return true;
                    }
                }
            }
            let capacity = self.stack_capacity;
            if let Some(slot) = self.first_empty() {
                *slot = Slot::Stacked(ItemStack::new(item, capacity));
                return true;
            }
        } else if let Some(slot) = self.first_empty() {
            *slot = Slot::Single(item);
            return true;
        }
        false
    }

    /// Number of slots in the inventory.
    pub fn size(&self) -> usize {
        self.slots.len()
    }

    /// Maximum items a single stack may hold.
    pub fn stack_capacity(&self) -> u32 {
        self.stack_capacity
    }

    /// Number of slots currently holding something.
    pub fn used_slots(&self) -> usize {
        self.slots.iter().filter(|slot| !slot.is_empty()).count()
    }

    /// Reports whether every slot is taken.
    ///
    /// A full inventory can still accept stackable items through stacks
    /// with room left.
    pub fn is_full(&self) -> bool {
        self.used_slots() == self.slots.len()
    }

    /// Reports whether no slot is taken.
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Slot::is_empty)
    }

    /// The slot at `index`, or `None` when out of range.
    pub fn slot(&self, index: usize) -> Option<&Slot> {
        self.slots.get(index)
    }

    /// Iterates over every slot in order, paired with its index.
    pub fn slots(&self) -> impl Iterator<Item = (usize, &Slot)> {
        self.slots.iter().enumerate()
    }

    /// Iterates over the occupied slots in order.
    pub fn occupied(&self) -> impl Iterator<Item = &Slot> {
        self.slots.iter().filter(|slot| !slot.is_empty())
    }

    fn first_empty(&mut self) -> Option<&mut Slot> {
        self.slots.iter_mut().find(|slot| slot.is_empty())
    }
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new(config::DEFAULT_INVENTORY_SIZE)
    }
}

impl fmt::Display for Inventory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, " -Used {} of {} slots", self.used_slots(), self.size())?;
        for slot in self.occupied() {
            match slot {
                Slot::Empty => {}
                Slot::Single(item) => write!(f, "{}", item)?,
                Slot::Stacked(stack) => write!(f, "{}", stack)?,
            }
        }
        Ok(())
    }
}
