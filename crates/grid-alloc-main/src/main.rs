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


use grid_alloc_core::footprint::Footprint;
use grid_alloc_inventory::prelude::*;
use serde::Serialize;
use std::{fs::File, io::BufWriter, time::Instant};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

fn enable_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_span_events(FmtSpan::ENTER | FmtSpan::EXIT | FmtSpan::CLOSE)
        .init();
}

#[derive(Debug, Clone, Serialize)]
struct LayoutInfo {
    idx: usize,
    seed: u64,
    width: i32,
    height: i32,
    requested_items: usize,
    placed_items: usize,
}

#[derive(Debug, Clone, Serialize)]
struct StatsSnapshot {
    occupied_cells: usize,
    free_cells: usize,
    free_regions: usize,
    largest_free_region: usize,
    largest_free_square: usize,
    fragmentation: f64,
    occupied_bounds: Option<String>,
}

impl From<InventoryStats<i32>> for StatsSnapshot {
    fn from(stats: InventoryStats<i32>) -> Self {
        Self {
            occupied_cells: stats.occupied_cells(),
            free_cells: stats.free_cells(),
            free_regions: stats.free_regions(),
            largest_free_region: stats.largest_free_region(),
            largest_free_square: stats.largest_free_square(),
            fragmentation: stats.fragmentation(),
            occupied_bounds: stats.occupied_bounds().as_ref().map(Footprint::to_string),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
struct RunResult {
    layout: LayoutInfo,
    before: StatsSnapshot,
    after: StatsSnapshot,
    /// `None` when the repack found no slot for some item and the layout was kept.
    moved_items: Option<usize>,
    optimize_elapsed_us: u128,
}

#[derive(Debug, Clone, Serialize)]
struct OptimizeReport {
    description: String,
    runs: Vec<RunResult>,
}

fn interpolate(val0: i32, val1: i32, step: usize, steps: usize) -> i32 {
    if steps <= 1 {
        return val1;
    }
    val0 + (val1 - val0) * step as i32 / (steps as i32 - 1)
}

fn main() {
    enable_tracing();

    let defaults = LayoutGenConfig::<i32>::default();
    let n_layouts = 8usize;
    let (min_side, max_side) = (8, 48);

    let mut runs = Vec::with_capacity(n_layouts);
    for i in 0..n_layouts {
        let side = interpolate(min_side, max_side, i, n_layouts);
        let item_count = (side * side / 5) as usize;
        let seed = defaults.seed() + i as u64;

        let cfg = LayoutGenConfigBuilder::<i32>::new()
            .width(side)
            .height(side)
            .item_count(item_count)
            .side_range(defaults.min_side(), defaults.max_side())
            .names(defaults.names().iter().cloned())
            .seed(seed)
            .build()
            .expect("valid layout config");
        let mut generator: LayoutGenerator<i32> = cfg.into();
        let mut inventory = generator.generate();

        let before = inventory.stats();
        let t0 = Instant::now();
        let moved = match inventory.try_optimize_with(&SpaceOptimizer) {
            Ok(n) => Some(n),
            Err(e) => {
                warn!(idx = i, error = %e, "Repack failed; keeping layout");
                None
            }
        };
        let elapsed = t0.elapsed();
        let after = inventory.stats();
        assert_eq!(before.occupied_cells(), after.occupied_cells());

        info!(
            idx = i,
            %side,
            placed = inventory.len(),
            ?moved,
            before = %before,
            after = %after,
            "Optimized layout"
        );
        if i == 0 {
            println!("{inventory}");
        }

        runs.push(RunResult {
            layout: LayoutInfo {
                idx: i,
                seed,
                width: side,
                height: side,
                requested_items: item_count,
                placed_items: inventory.len(),
            },
            before: before.into(),
            after: after.into(),
            moved_items: moved,
            optimize_elapsed_us: elapsed.as_micros(),
        });
    }

    let report = OptimizeReport {
        description: "Grid inventory: seeded random layouts from small to big; fragmentation before and after optimize_space.".into(),
        runs,
    };

    let file = File::create("optimize_results.json").expect("create optimize_results.json");
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, &report).expect("write json report");

    println!();
    println!("Wrote: optimize_results.json");
}
