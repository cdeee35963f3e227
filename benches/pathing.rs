use criterion::{
    Criterion,
    criterion_group,
    criterion_main
};
use maze_blocks::cells::GridCoordinate;
use maze_blocks::generators;
use maze_blocks::grids::large_grid;
use maze_blocks::pathing;
use maze_blocks::random::Mulberry32;
use maze_blocks::units::{ColumnsCount, RowsCount};

fn bench_distances(c: &mut Criterion) {
    c.bench_function("distances", |b| {
        let mut g = large_grid(RowsCount(350), ColumnsCount(350)).unwrap();
        generators::binary_tree(&mut g, &mut Mulberry32::new(1)).unwrap();
        let start_coord = GridCoordinate::new(349, 0);
        b.iter(|| pathing::Distances::<u32>::new(&g, start_coord))
    });
}

fn bench_longest_path(c: &mut Criterion) {
    c.bench_function("longest_path", |b| {
        let mut g = large_grid(RowsCount(100), ColumnsCount(100)).unwrap();
        generators::binary_tree(&mut g, &mut Mulberry32::new(1)).unwrap();
        b.iter(|| pathing::longest_path(&g))
    });
}

criterion_group!(benches, bench_distances, bench_longest_path);
criterion_main!(benches);
