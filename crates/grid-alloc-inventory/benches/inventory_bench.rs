// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.


use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use grid_alloc_core::position::Size;
use grid_alloc_inventory::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::hint::black_box;

const SEED: u64 = 0x6121_D0C5;
const GRID_SIDES: [i32; 3] = [16, 32, 64];

fn layout(side: i32, seed: u64) -> Inventory<i32> {
    let cfg = LayoutGenConfigBuilder::new()
        .width(side)
        .height(side)
        .item_count((side * side / 6) as usize)
        .side_range(1, 4)
        .seed(seed)
        .build()
        .expect("valid layout config");
    LayoutGenerator::new(cfg).generate()
}

fn bench_find_free_position(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_free_position");
    for side in GRID_SIDES {
        let inventory = layout(side, SEED);
        let mut rng = ChaCha8Rng::seed_from_u64(SEED ^ 0xF00D);
        let sizes: Vec<Size<i32>> = (0..256)
            .map(|_| Size::new(rng.random_range(1..=4), rng.random_range(1..=4)))
            .collect();
        group.bench_with_input(BenchmarkId::from_parameter(side), &inventory, |b, inv| {
            b.iter(|| {
                let found = sizes
                    .iter()
                    .filter_map(|s| inv.find_free_position(*s).ok().flatten())
                    .count();
                black_box(found)
            });
        });
    }
    group.finish();
}

fn bench_add_remove_churn(c: &mut Criterion) {
    let mut group = c.benchmark_group("add_remove_churn");
    for side in GRID_SIDES {
        group.bench_function(BenchmarkId::from_parameter(side), |b| {
            b.iter_batched(
                || (layout(side, SEED), ChaCha8Rng::seed_from_u64(SEED ^ 0xC0DE)),
                |(mut inv, mut rng)| {
                    let mut live: Vec<Item<i32>> = inv.iter().cloned().collect();
                    for _ in 0..1_000 {
                        if !live.is_empty() && rng.random_bool(0.5) {
                            let it = live.swap_remove(rng.random_range(0..live.len()));
                            black_box(inv.remove_item(&it));
                        } else {
                            let it = Item::unnamed(rng.random_range(1..=3), rng.random_range(1..=3));
                            if let Ok(Some(_)) = inv.add_item(&it) {
                                live.push(it);
                            }
                        }
                    }
                    black_box(inv.len())
                },
                BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

fn bench_optimize_space(c: &mut Criterion) {
    let mut group = c.benchmark_group("optimize_space");
    for side in GRID_SIDES {
        group.bench_function(BenchmarkId::from_parameter(side), |b| {
            b.iter_batched(
                || layout(side, SEED),
                |mut inv| black_box(inv.try_optimize_with(&SpaceOptimizer).is_ok()),
                BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

criterion_group!(
    inventory,
    bench_find_free_position,
    bench_add_remove_churn,
    bench_optimize_space
);
criterion_main!(inventory);
