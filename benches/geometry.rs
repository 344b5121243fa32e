use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::Vec3;
use scene_viewer::types::{FrameUniform, ModelUniform};
use scene_viewer::{build_demo_scene, Animation, PerspectiveCamera};
use scene_viewer::scene::{plane_geometry, torus_knot_geometry, unit_box};

fn demo_camera() -> PerspectiveCamera {
    let mut camera = PerspectiveCamera::new(75.0, 16.0 / 9.0, 0.1, 1000.0);
    camera.position = Vec3::new(10.0, 2.0, 10.0);
    camera.look_at(Vec3::ZERO);
    camera
}

/// Benchmark: torus knot tessellation across segment counts
fn bench_torus_knot_tessellation(c: &mut Criterion) {
    let mut group = c.benchmark_group("torus_knot");

    for segments in [32, 64, 100, 128].iter() {
        group.bench_with_input(
            BenchmarkId::new("segments", segments),
            segments,
            |b, &segments| {
                b.iter(|| {
                    black_box(torus_knot_geometry(
                        black_box(0.5),
                        black_box(0.2),
                        segments,
                        segments,
                        2,
                        3,
                    ))
                })
            },
        );
    }

    group.finish();
}

/// Benchmark: the simple primitives the demo scene is built from
fn bench_primitive_generation(c: &mut Criterion) {
    c.bench_function("unit_box", |b| b.iter(|| black_box(unit_box())));

    c.bench_function("ground_plane", |b| {
        b.iter(|| black_box(plane_geometry(black_box(10000.0), black_box(10000.0))))
    });
}

/// Benchmark: per-frame uniform rebuild for the whole demo scene
fn bench_frame_uniforms(c: &mut Criterion) {
    let (scene, _) = build_demo_scene();
    let camera = demo_camera();

    c.bench_function("frame_uniform_compose", |b| {
        b.iter(|| black_box(FrameUniform::compose(black_box(&camera), black_box(&scene))))
    });

    c.bench_function("model_uniforms_all_meshes", |b| {
        b.iter(|| {
            for mesh in scene.meshes() {
                black_box(ModelUniform::from_instance(black_box(mesh)));
            }
        })
    });
}

/// Benchmark: advancing the demo animation for a second of frames
fn bench_animation_advance(c: &mut Criterion) {
    c.bench_function("animation_60_frames", |b| {
        b.iter(|| {
            let (mut scene, meshes) = build_demo_scene();
            let mut animation = Animation::new();
            let params = Default::default();
            for _ in 0..60 {
                animation.advance(&mut scene, &meshes, &params);
            }
            black_box(animation.step())
        })
    });
}

criterion_group!(
    benches,
    bench_torus_knot_tessellation,
    bench_primitive_generation,
    bench_frame_uniforms,
    bench_animation_advance,
);

criterion_main!(benches);
