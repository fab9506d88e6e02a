//! # Item Registry
//!
//! Process-wide lookup from item type keywords to item constructors.
//!
//! The table is fixed at compile time and read-only; several spellings may
//! map to the same variant (`Armour`/`Armor`), with the first matching entry
//! winning. Lookup is an exact, case-sensitive comparison.

use crate::items::{Armour, Consumable, Item, RecordReader};
use crate::SatchelResult;

/// Known item type keywords and the constructor for each.
const KNOWN_ITEMS: &[(&str, fn() -> Item)] = &[
    ("Armour", new_armour),
    ("Armor", new_armour),
    ("Food", new_consumable),
    ("Potion", new_consumable),
    ("Disposable", new_consumable),
];

fn new_armour() -> Item {
    Item::Armour(Armour::new())
}

fn new_consumable() -> Item {
    Item::Consumable(Consumable::new())
}

/// Creates a blank item of the variant registered for `keyword`.
///
/// Returns `None` for unknown keywords; callers treat that as "skip this
/// record", not as an error.
///
/// # Examples
///
/// ```
/// use satchel::items::factory;
///
/// let armour = factory::create_item("Armour").unwrap();
/// assert!(!armour.is_stackable());
///
/// assert!(factory::create_item("Sword").is_none());
/// ```
pub fn create_item(keyword: &str) -> Option<Item> {
    KNOWN_ITEMS
        .iter()
        .find(|(known, _)| *known == keyword)
        .map(|(_, constructor)| constructor())
}

/// Reports whether `keyword` names a known item type.
///
/// Pure lookup with the same matching rule as [`create_item`].
pub fn is_known(keyword: &str) -> bool {
    KNOWN_ITEMS.iter().any(|(known, _)| *known == keyword)
}

/// Parses one full item record: leading type keyword, then the variant's
/// fields.
///
/// A record with no fields, or with an unknown keyword, yields `Ok(None)`
/// and the rest of the record is discarded with its reader. A known keyword
/// whose remaining fields do not match the variant's expected arity or types
/// propagates the malformed-record error to the caller iterating records.
///
/// # Examples
///
/// ```
/// use satchel::items::factory;
/// use satchel::RecordReader;
///
/// let mut record = RecordReader::new("Potion HealthPotion Healing 3");
/// let item = factory::parse_record(&mut record).unwrap().unwrap();
/// assert_eq!(item.name(), "HealthPotion");
///
/// let mut unknown = RecordReader::new("Sword Excalibur 9000");
/// assert!(factory::parse_record(&mut unknown).unwrap().is_none());
/// ```
pub fn parse_record(record: &mut RecordReader<'_>) -> SatchelResult<Option<Item>> {
    let keyword = match record.next() {
        Some(keyword) => keyword,
        None => return Ok(None),
    };

    let mut item = match create_item(keyword) {
        Some(item) => item,
        None => return Ok(None),
    };

    item.read(record)?;
    Ok(Some(item))
}
