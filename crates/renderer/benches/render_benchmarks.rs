//! Benchmarks for the renderer crate - synthesis, transform and overlay drawing.
//!
//! Run with: cargo bench --package renderer --bench render_benchmarks

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use field_common::{BoundingBox, PolygonFeature, ScreenRect};
use renderer::{
    compute_display_range, derive_transform, synthesize, ColormapKind, PixmapTarget,
    RecordingTarget, Scene, VectorOverlay, ViewerConfig,
};
use test_utils::{create_pressure_field, features};

/// ERA5-like regional and global grid sizes.
const SIZES: [(usize, usize); 3] = [(241, 161), (721, 361), (1440, 721)];

/// A checkerboard of small square "countries" covering the globe.
fn generate_features(count_x: usize, count_y: usize) -> Vec<PolygonFeature> {
    let w = 360.0 / count_x as f64;
    let h = 180.0 / count_y as f64;
    let mut out = Vec::with_capacity(count_x * count_y);
    for j in 0..count_y {
        for i in 0..count_x {
            let x0 = -180.0 + i as f64 * w;
            let y0 = -90.0 + j as f64 * h;
            out.push(features::square_feature("box", x0, y0, w * 0.8));
        }
    }
    out
}

// =============================================================================
// RANGE + SYNTHESIS
// =============================================================================

fn bench_display_range(c: &mut Criterion) {
    let mut group = c.benchmark_group("display_range");

    for (width, height) in SIZES {
        let grid = create_pressure_field(width, height, (-180.0, 180.0), (-90.0, 90.0));
        group.throughput(Throughput::Elements((width * height) as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}x{}", width, height)),
            &grid,
            |b, grid| b.iter(|| compute_display_range(black_box(grid))),
        );
    }

    group.finish();
}

fn bench_synthesize(c: &mut Criterion) {
    let mut group = c.benchmark_group("synthesize");

    for (width, height) in SIZES {
        let grid = create_pressure_field(width, height, (-180.0, 180.0), (-90.0, 90.0));
        let range = match compute_display_range(&grid) {
            Ok(range) => range,
            Err(_) => continue,
        };
        group.throughput(Throughput::Elements((width * height) as u64));

        for kind in [ColormapKind::Turbo, ColormapKind::Pressure] {
            group.bench_with_input(
                BenchmarkId::new(kind.name(), format!("{}x{}", width, height)),
                &grid,
                |b, grid| b.iter(|| synthesize(black_box(grid), &range, kind)),
            );
        }
    }

    group.finish();
}

// =============================================================================
// TRANSFORM + OVERLAY
// =============================================================================

fn bench_derive_transform(c: &mut Criterion) {
    let view = BoundingBox::new(-180.0, -90.0, 180.0, 90.0);
    let dest = ScreenRect::new(12.0, 40.0, 1200.0, 600.0);
    c.bench_function("derive_transform", |b| {
        b.iter(|| derive_transform(black_box(&view), black_box(&dest), 1440, 721))
    });
}

fn bench_overlay_draw(c: &mut Criterion) {
    let mut group = c.benchmark_group("overlay_draw");
    let view = BoundingBox::new(-180.0, -90.0, 180.0, 90.0);
    let dest = ScreenRect::new(0.0, 0.0, 1440.0, 720.0);
    let transform = derive_transform(&view, &dest, 1440, 721);

    for (nx, ny) in [(18, 9), (72, 36)] {
        let overlay = VectorOverlay::new(generate_features(nx, ny), &view);

        group.bench_with_input(
            BenchmarkId::new("recording", nx * ny),
            &overlay,
            |b, overlay| {
                b.iter(|| {
                    let mut target = RecordingTarget::new(1.0);
                    overlay.draw(&mut target, &dest, &transform)
                })
            },
        );

        if let Ok(mut target) = PixmapTarget::new(1440, 720) {
            group.bench_with_input(
                BenchmarkId::new("pixmap", nx * ny),
                &overlay,
                |b, overlay| b.iter(|| overlay.draw(&mut target, &dest, &transform)),
            );
        }
    }

    group.finish();
}

// =============================================================================
// FULL FRAME
// =============================================================================

fn bench_render_frame(c: &mut Criterion) {
    let grid = create_pressure_field(721, 361, (-180.0, 180.0), (-90.0, 90.0));
    let scene = match Scene::from_parts(grid, generate_features(72, 36), &ViewerConfig::default())
    {
        Ok(scene) => scene,
        Err(_) => return,
    };

    if let Ok(mut target) = PixmapTarget::new(1200, 600) {
        c.bench_function("render_frame_1200x600", |b| {
            b.iter(|| scene.render_frame(&mut target, 1200.0, 600.0))
        });
    }
}

criterion_group!(
    benches,
    bench_display_range,
    bench_synthesize,
    bench_derive_transform,
    bench_overlay_draw,
    bench_render_frame,
);
criterion_main!(benches);
