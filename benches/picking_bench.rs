//! Ray casting and click resolution benchmarks.

#![allow(missing_docs, unused_results)]

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use glam::{Vec2, Vec3};
use vitrine::camera::Camera;
use vitrine::picking::{resolve_pointer, Raycaster};
use vitrine::scene::{InteractiveAction, Mesh, SceneGraph, SceneNode, Transform};
use vitrine::util::easing::EasingFunction;

fn camera() -> Camera {
    Camera::new(Vec3::new(0.0, 3.0, 5.0), Vec3::ZERO, 30.0, 800.0 / 600.0, 0.1, 1000.0)
}

/// The cube plus a `side x side` grid of boxes around it.
fn scene(side: i32) -> SceneGraph {
    let mut graph = SceneGraph::new();
    let group = graph.add(None, SceneNode::group("grid"));
    for x in -side / 2..side / 2 {
        for z in -side / 2..side / 2 {
            let node = SceneNode::with_mesh("box", Mesh::cuboid(0.4, 0.4, 0.4))
                .transformed(Transform::from_translation(Vec3::new(
                    x as f32, -1.0, z as f32,
                )));
            graph.add(Some(group), node);
        }
    }
    graph.add_labeled_cube(
        "Visit",
        1.0,
        Vec3::new(1.5, 0.5, 0.0),
        InteractiveAction::OpenUrl("https://example.com/".into()),
    );
    graph
}

fn easing_benchmark(c: &mut Criterion) {
    let f = EasingFunction::SETTLE;
    c.bench_function("settle_easing", |b| {
        b.iter(|| black_box(f.evaluate(black_box(0.5))))
    });
}

fn intersect_scene_benchmark(c: &mut Criterion) {
    let camera = camera();
    let mut group = c.benchmark_group("intersect_scene");
    for side in [4, 16, 32] {
        let graph = scene(side);
        group.bench_function(format!("{}_nodes", graph.len()), |b| {
            b.iter(|| {
                let caster = Raycaster::from_camera(&camera, black_box(Vec2::new(0.1, -0.2)));
                black_box(caster.intersect_scene(&graph))
            })
        });
    }
    group.finish();
}

fn resolve_pointer_benchmark(c: &mut Criterion) {
    let camera = camera();
    let graph = scene(16);
    c.bench_function("resolve_pointer", |b| {
        b.iter(|| {
            black_box(resolve_pointer(
                &camera,
                &graph,
                black_box(540.0),
                black_box(330.0),
                800.0,
                600.0,
            ))
        })
    });
}

criterion_group!(
    benches,
    easing_benchmark,
    intersect_scene_benchmark,
    resolve_pointer_benchmark
);
criterion_main!(benches);
