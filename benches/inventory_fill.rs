//! Benchmarks for record parsing and the slot allocation engine.
//!
//! Run with: cargo bench --bench inventory_fill

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use satchel::{storage, Armour, Consumable, Inventory, Item};

fn make_records(count: usize) -> String {
    let templates = [
        "Armour Helm Iron 120 5 Sturdy 2 None",
        "Potion HealthPotion Healing 3",
        "Food Bread Hunger 1",
        "Armor Boots Leather 100 2 Protection 1 Fire",
    ];
    let mut records = String::new();
    for i in 0..count {
        records.push_str(templates[i % templates.len()]);
        records.push('\n');
    }
    records
}

fn make_batch(count: usize) -> Vec<Item> {
    (0..count)
        .map(|i| match i % 3 {
            0 => Item::Armour(Armour {
                name: format!("Helm{}", i % 7),
                material: "Iron".to_string(),
                durability: 120,
                defense: 5,
                modifier: "Sturdy".to_string(),
                modifier_level: 2,
                element: "None".to_string(),
            }),
            1 => Item::Consumable(Consumable {
                name: "HealthPotion".to_string(),
                effect: "Healing".to_string(),
                uses: 3,
            }),
            _ => Item::Consumable(Consumable {
                name: "Bread".to_string(),
                effect: "Hunger".to_string(),
                uses: 1,
            }),
        })
        .collect()
}

fn benchmark_parse_records(c: &mut Criterion) {
    let records = make_records(1_000);

    c.bench_function("parse_1k_records", |b| {
        b.iter(|| black_box(storage::read_items(black_box(records.as_bytes()))))
    });
}

fn benchmark_fill_inventory(c: &mut Criterion) {
    let batch = make_batch(1_000);

    c.bench_function("store_1k_items", |b| {
        b.iter_batched(
            || batch.clone(),
            |batch| {
                let mut inventory = Inventory::with_stack_capacity(512, 64);
                black_box(storage::store_items(&mut inventory, batch))
            },
            BatchSize::SmallInput,
        )
    });
}

fn benchmark_parse_and_store(c: &mut Criterion) {
    let records = make_records(1_000);

    c.bench_function("parse_and_store_1k", |b| {
        b.iter(|| {
            let items = match storage::read_items(records.as_bytes()) {
                Ok(items) => items,
                Err(err) => panic!("{}", err),
            };
            let mut inventory = Inventory::with_stack_capacity(512, 64);
            black_box(storage::store_items(&mut inventory, items))
        })
    });
}

criterion_group!(
    benches,
    benchmark_parse_records,
    benchmark_fill_inventory,
    benchmark_parse_and_store
);
criterion_main!(benches);
