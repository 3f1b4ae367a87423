use criterion::{black_box, criterion_group, criterion_main, Criterion};
use molview::catalog::MoleculeCatalog;
use molview::engine::frame::{FrameRenderer, FrameView};
use molview::options::{GeometryOptions, Options};
use molview::renderer::instance::PrimitiveInstance;
use molview::renderer::mesh::{unit_cylinder, unit_sphere};
use molview::scene::builder::SceneBuilder;
use molview::{MoleculeViewer, ViewerCommand};

fn scene_build_benchmark(c: &mut Criterion) {
    let catalog = MoleculeCatalog::builtin();
    let builder = SceneBuilder::new(GeometryOptions::default());
    let mut group = c.benchmark_group("scene_build");

    for record in catalog.iter() {
        group.bench_function(&record.id, |b| {
            b.iter(|| black_box(builder.build(black_box(record))))
        });
    }
    group.finish();
}

fn mesh_benchmark(c: &mut Criterion) {
    c.bench_function("unit_sphere_32x16", |b| {
        b.iter(|| black_box(unit_sphere(black_box(32), black_box(16))))
    });
    c.bench_function("unit_cylinder_32", |b| {
        b.iter(|| black_box(unit_cylinder(black_box(32))))
    });
}

/// Builds the instance records a GPU upload would send.
struct InstanceCollector(Vec<PrimitiveInstance>);

impl FrameRenderer for InstanceCollector {
    type Error = std::convert::Infallible;

    fn render(&mut self, frame: &FrameView<'_>) -> Result<(), Self::Error> {
        self.0.clear();
        if let Some(group) = frame.group {
            self.0
                .extend(group.primitives().iter().map(PrimitiveInstance::from_primitive));
        }
        Ok(())
    }
}

fn frame_benchmark(c: &mut Criterion) {
    let mut viewer = MoleculeViewer::with_builtin(Options::default(), (1280, 720));
    let selected = viewer.execute(ViewerCommand::Select(Some("ethanol".into())));
    assert!(selected.is_ok(), "ethanol record is well-formed");
    let mut collector = InstanceCollector(Vec::new());

    c.bench_function("ethanol_frame", |b| {
        b.iter(|| black_box(viewer.frame(&mut collector)))
    });
}

criterion_group!(benches, scene_build_benchmark, mesh_benchmark, frame_benchmark);
criterion_main!(benches);
