use balanced_collections::avl_tree::AvlSet;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::Rng;
use std::collections::BTreeSet;

const NUM_OF_OPERATIONS: usize = 1_000;

macro_rules! set_benches {
    ($($module_name:ident: $type_name:ident,)*) => {
        $(
            mod $module_name {
                use super::*;

                pub fn bench_insert(c: &mut Criterion) {
                    c.bench_function(&format!("bench {} insert", stringify!($module_name)), |b| b.iter(|| {
                        let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
                        let mut set = $type_name::new();
                        for _ in 0..NUM_OF_OPERATIONS {
                            set.insert(rng.next_u32());
                        }
                        set
                    }));
                }

                pub fn bench_contains(c: &mut Criterion) {
                    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
                    let mut set = $type_name::new();
                    let mut values = Vec::new();

                    for _ in 0..NUM_OF_OPERATIONS {
                        let key = rng.next_u32();
                        set.insert(key);
                        values.push(key);
                    }

                    c.bench_function(&format!("bench {} contains", stringify!($module_name)), move |b| b.iter(|| {
                        for key in &values {
                            black_box(set.contains(key));
                        }
                    }));
                }

                pub fn bench_remove(c: &mut Criterion) {
                    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
                    let mut set = $type_name::new();
                    let mut values = Vec::new();

                    for _ in 0..NUM_OF_OPERATIONS {
                        let key = rng.next_u32();
                        set.insert(key);
                        values.push(key);
                    }

                    c.bench_function(&format!("bench {} remove", stringify!($module_name)), move |b| b.iter(|| {
                        let mut set = set.clone();
                        for key in &values {
                            black_box(set.remove(key));
                        }
                    }));
                }
            }
        )*

        criterion_group!(
            benches,
            $(
                $module_name::bench_insert,
                $module_name::bench_contains,
                $module_name::bench_remove,
            )*
        );
    }
}

set_benches!(
    avl_tree: AvlSet,
    btreeset: BTreeSet,
);

criterion_main!(benches);
