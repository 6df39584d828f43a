#![allow(missing_docs)]

use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, Criterion};
use vitrine::carousel::Carousel;
use vitrine::options::CarouselOptions;
use vitrine::slot::{DisplayContent, Material, ModelPrefab};
use vitrine::util::easing::EasingFunction;

fn easing_benchmark(c: &mut Criterion) {
    let f = EasingFunction::Smoothstep;
    c.bench_function("smoothstep_easing", |b| {
        b.iter(|| black_box(f.evaluate(black_box(0.5))))
    });
}

fn advance_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("carousel_advance");

    for count in [4, 32, 256] {
        let materials = (0..count)
            .map(|i| Material::new(format!("m{i}"), [1.0; 4]))
            .collect();
        let content = DisplayContent::new(ModelPrefab::new("bench"), materials);
        let mut carousel = Carousel::new(CarouselOptions::default(), content);
        let _ = carousel.initialize();

        group.bench_function(format!("{count}_slots"), |b| {
            b.iter(|| {
                carousel.next_display();
                carousel.advance(black_box(Duration::from_millis(16)));
                black_box(carousel.position())
            })
        });
    }
    group.finish();
}

criterion_group!(benches, easing_benchmark, advance_benchmark);
criterion_main!(benches);
