//! # Storage
//!
//! Batch loading of item record files into an inventory. Each line of the
//! input is one record; records that cannot be turned into an item are
//! logged and skipped so the rest of the file still loads.

use crate::inventory::Inventory;
use crate::items::factory;
use crate::items::{Item, RecordReader};
use crate::SatchelResult;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// The outcome of placing one item into an inventory.
///
/// Renders as ` (S) name` when the item was stored and ` (D) name` when it
/// was dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    /// Name of the item that was offered
    pub name: String,
    /// Whether the inventory found room for it
    pub stored: bool,
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = if self.stored { 'S' } else { 'D' };
        write!(f, " ({}) {}", letter, self.name)
    }
}

/// Reads item records from `reader`, one per line, in file order.
///
/// Blank lines are ignored. Records with an unknown item type keyword are
/// skipped, as are records whose fields cannot be read; neither disturbs
/// the records that follow. Only an I/O failure aborts the read.
///
/// # Examples
///
/// ```
/// use satchel::storage;
///
/// let records = "Armour Boots Leather 100 2 Protection 1 Fire\n\
///                Potion HealthPotion Healing 3\n";
/// let items = storage::read_items(records.as_bytes()).unwrap();
///
/// assert_eq!(items.len(), 2);
/// assert_eq!(items[0].name(), "Boots");
/// ```
pub fn read_items<R: BufRead>(reader: R) -> SatchelResult<Vec<Item>> {
    let mut items = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let mut record = RecordReader::new(&line);
        match factory::parse_record(&mut record) {
            Ok(Some(item)) => items.push(item),
            Ok(None) => debug!("skipping record with unknown item type: {line}"),
            Err(err) => warn!("skipping malformed record '{line}': {err}"),
        }
    }
    Ok(items)
}

/// Reads item records from the file at `path`.
///
/// See [`read_items`] for how individual records are handled.
pub fn read_items_from_path(path: impl AsRef<Path>) -> SatchelResult<Vec<Item>> {
    let path = path.as_ref();
    info!("reading item records from {}", path.display());
    let file = File::open(path)?;
    read_items(BufReader::new(file))
}

/// Offers each item to the inventory in order, recording one [`Placement`]
/// per item.
///
/// Items the inventory rejects are dropped; their placement carries
/// `stored: false`.
pub fn store_items(
    inventory: &mut Inventory,
    items: impl IntoIterator<Item = Item>,
) -> Vec<Placement> {
    items
        .into_iter()
        .map(|item| {
            let name = item.name().to_string();
            let stored = inventory.add_item(item);
            if !stored {
                debug!("no room left for {name}, dropping it");
            }
            Placement { name, stored }
        })
        .collect()
}
