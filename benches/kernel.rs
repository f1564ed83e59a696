#[macro_use]
extern crate criterion;

use criterion::Criterion;
use newton::planes::{Pixel, PlaneMapper};
use newton::roots::RootTable;
use newton::{classify, Degree, Pipeline, PipelineConfig};

fn classify_row(c: &mut Criterion) {
    c.bench_function("classify 256 points, degree 7", |b| {
        let plane = PlaneMapper::square(256).unwrap();
        let roots = RootTable::new();
        b.iter(|| {
            (0..256)
                .map(|column| {
                    let point = plane.pixel_to_point(&Pixel(column, 97));
                    classify(point, Degree::Seven, roots.roots(Degree::Seven)).iterations as u32
                })
                .sum::<u32>()
        })
    });
}

fn full_render(c: &mut Criterion) {
    c.bench_function("render 200x200, degree 5, 4 threads", |b| {
        let config = PipelineConfig::new(4, 200, 5).unwrap();
        let pipeline = Pipeline::new(config).unwrap();
        b.iter(|| pipeline.render_into(vec![], vec![]).unwrap().0.rows)
    });
}

criterion_group!(benches, classify_row, full_render);
criterion_main!(benches);
