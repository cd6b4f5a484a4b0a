use af_core::frame::PixelGrid;
use af_source::resize::Resampler;
use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn bench_resample(c: &mut Criterion) {
    let samples: Vec<(u8, u8, u8)> = (0..480u32)
        .flat_map(|y| (0..640u32).map(move |x| ((x % 256) as u8, (y % 256) as u8, 128)))
        .collect();
    let Ok(src) = PixelGrid::from_rgb(640, 480, &samples) else {
        return;
    };
    let mut resampler = Resampler::new();

    c.bench_function("resample_640x480_to_160", |b| {
        b.iter(|| resampler.resample(black_box(&src), black_box(160)));
    });
}

criterion_group!(benches, bench_resample);
criterion_main!(benches);
