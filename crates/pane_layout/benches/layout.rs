//! Criterion benchmarks for layout mutations.
//!
//! Run with: `cargo bench -p pane_layout`
//!
//! Every gesture rebuilds the tree, so these track how split, close, resize
//! and the renderer projection scale with pane count.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use pane_layout::{
    close_pane, focus_next, pane_rects, resize_siblings, split_pane, validate, Direction, NodeId,
    LayoutOptions, LayoutTree, Rect,
};

const PANE_COUNTS: [usize; 3] = [4, 16, 64];

/// Grow a tree by splitting the newest pane, alternating direction, so the
/// result is nested rather than one wide split.
fn build_tree(panes: usize, options: &LayoutOptions) -> LayoutTree {
    let mut tree = LayoutTree::new(options);
    let mut target = tree.first_pane_id();
    for index in 1..panes {
        let direction = if index % 2 == 0 {
            Direction::Row
        } else {
            Direction::Column
        };
        let (next, new_pane) = split_pane(&tree, target, direction, options).unwrap();
        tree = next;
        target = new_pane;
    }
    tree
}

fn bench_split(c: &mut Criterion) {
    let options = LayoutOptions::default();
    let mut group = c.benchmark_group("split_pane");

    for panes in PANE_COUNTS {
        let tree = build_tree(panes, &options);
        let target = tree.pane_ids()[panes / 2];
        group.throughput(Throughput::Elements(panes as u64));
        group.bench_with_input(BenchmarkId::new("nested", panes), &tree, |b, tree| {
            b.iter(|| split_pane(black_box(tree), target, Direction::Row, &options))
        });
    }

    group.finish();
}

fn bench_close(c: &mut Criterion) {
    let options = LayoutOptions::default();
    let mut group = c.benchmark_group("close_pane");

    for panes in PANE_COUNTS {
        let tree = build_tree(panes, &options);
        let target = tree.pane_ids()[panes / 2];
        group.bench_with_input(BenchmarkId::new("nested", panes), &tree, |b, tree| {
            b.iter(|| close_pane(black_box(tree), target, &options))
        });
    }

    group.finish();
}

fn bench_resize(c: &mut Criterion) {
    let options = LayoutOptions::default();
    let mut group = c.benchmark_group("resize_siblings");

    for panes in PANE_COUNTS {
        let tree = build_tree(panes, &options);
        let target = NodeId::from(tree.pane_ids()[panes - 1]);
        group.bench_with_input(BenchmarkId::new("deepest", panes), &tree, |b, tree| {
            b.iter(|| resize_siblings(black_box(tree), target, black_box(3.0), options.min_size))
        });
    }

    group.finish();
}

fn bench_read_paths(c: &mut Criterion) {
    let options = LayoutOptions::default();
    let tree = build_tree(16, &options);
    let bounds = Rect::new(0.0, 0.0, 1920.0, 1080.0);
    let first = tree.first_pane_id();
    let mut group = c.benchmark_group("read_paths");

    group.bench_function("validate", |b| b.iter(|| validate(black_box(&tree))));

    group.bench_function("focus_next", |b| {
        b.iter(|| focus_next(black_box(&tree), first))
    });

    // Runs on every frame in a renderer
    group.bench_function("pane_rects", |b| {
        b.iter(|| pane_rects(black_box(&tree), bounds))
    });

    group.finish();
}

criterion_group!(benches, bench_split, bench_close, bench_resize, bench_read_paths);
criterion_main!(benches);
