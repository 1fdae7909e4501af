//! Reducer dispatch cost on trees of increasing size.
//!
//! The clone-per-edit discipline makes every dispatch O(tree); this bench
//! keeps an eye on the constant factor.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use weft_engine::{Command, DesignerState, locate_by_id, reduce};
use weft_model::{Cell, CellId, DropSide, LaneLocation, WidgetRegistry};

/// A root with `grids` two-lane grids, each lane holding `per_lane` inputs.
fn build_state(grids: usize, per_lane: usize) -> DesignerState {
    let registry = WidgetRegistry::builtin();
    let mut root = Cell::document_root();
    for g in 0..grids {
        let mut grid = registry.instantiate("grid").unwrap();
        grid.id = CellId::new(format!("grid-{g}"));
        for (l, lane) in grid.lanes.iter_mut().enumerate() {
            for i in 0..per_lane {
                let mut input = registry.instantiate("input").unwrap();
                input.id = CellId::new(format!("input-{g}-{l}-{i}"));
                lane.cells.push(input);
            }
        }
        root.lanes[0].cells.push(grid);
    }
    DesignerState::with_root(root)
}

fn bench_reduce(c: &mut Criterion) {
    let registry = WidgetRegistry::builtin();
    let mut group = c.benchmark_group("reduce");

    for &(grids, per_lane) in &[(4usize, 4usize), (16, 8), (32, 16)] {
        let state = build_state(grids, per_lane);
        let cells = state.root().cell_count();
        let deep_anchor = CellId::new(format!("input-{}-1-0", grids - 1));

        group.bench_with_input(
            BenchmarkId::new("positioned_add", cells),
            &state,
            |b, state| {
                b.iter(|| {
                    let drag_item = registry.instantiate("input").unwrap();
                    let next = reduce(
                        state,
                        Command::PositionedAdd {
                            drag_item,
                            drop_item_id: deep_anchor.clone(),
                            side: DropSide::Before,
                        },
                    )
                    .unwrap();
                    black_box(next)
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("move_into", cells),
            &state,
            |b, state| {
                b.iter(|| {
                    let next = reduce(
                        state,
                        Command::Move {
                            id: deep_anchor.clone(),
                            location: LaneLocation::lane(CellId::new("grid-0"), 0),
                        },
                    )
                    .unwrap();
                    black_box(next)
                });
            },
        );

        group.bench_with_input(BenchmarkId::new("locate", cells), &state, |b, state| {
            b.iter(|| black_box(locate_by_id(state.root(), &deep_anchor)));
        });

        group.bench_with_input(BenchmarkId::new("validate", cells), &state, |b, state| {
            b.iter(|| black_box(reduce(state, Command::Validate).unwrap()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_reduce);
criterion_main!(benches);
