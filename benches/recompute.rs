use criterion::{Criterion, black_box, criterion_group, criterion_main};

use spaced_grid::{
    Placement, SpacedGrid, SpacingStrategy, Track, TrackSize, synthesize,
};

fn user_tracks(n: usize) -> Vec<Track> {
    (0..n).map(|_| Track::user(TrackSize::star(1.0))).collect()
}

fn build_margin_grid(rows: u16, columns: u16) -> SpacedGrid {
    let mut grid = SpacedGrid::new();
    grid.set_rows((0..rows).map(|_| TrackSize::star(1.0)));
    grid.set_columns((0..columns).map(|_| TrackSize::star(1.0)));
    for row in 0..rows {
        for column in 0..columns {
            let id = format!("cell-{row}-{column}");
            grid.push_child(id.clone(), Placement::cell(row, column))
                .expect("unique child");
            grid.show_child(&id).expect("attached child");
        }
    }
    grid
}

fn synthesis_100_tracks(c: &mut Criterion) {
    let tracks = user_tracks(100);
    c.bench_function("synthesis_100_tracks", |b| {
        b.iter(|| synthesize(black_box(&tracks), black_box(4.0)));
    });
}

fn margin_recompute_12x12(c: &mut Criterion) {
    let mut grid = build_margin_grid(12, 12);
    let mut spacing = 4.0;
    c.bench_function("margin_recompute_12x12", |b| {
        b.iter(|| {
            spacing = if spacing == 4.0 { 6.0 } else { 4.0 };
            grid.set_row_spacing(black_box(spacing)).expect("valid spacing");
        });
    });
}

fn injection_rebuild_32_tracks(c: &mut Criterion) {
    c.bench_function("injection_rebuild_32_tracks", |b| {
        b.iter(|| {
            let mut grid = SpacedGrid::with_strategy(SpacingStrategy::TrackInjection);
            grid.set_rows((0..32).map(|_| TrackSize::star(1.0)));
            grid.set_columns((0..32).map(|_| TrackSize::star(1.0)));
            black_box(grid.rows().len())
        });
    });
}

criterion_group!(
    benches,
    synthesis_100_tracks,
    margin_recompute_12x12,
    injection_rebuild_32_tracks
);
criterion_main!(benches);
