// SPDX-License-Identifier: MPL-2.0
use criterion::{criterion_group, criterion_main, Criterion};
use frontier_dash::gallery::{self, ImageManifest};
use std::hint::black_box;
use std::path::PathBuf;

fn gallery_loading_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery_loading");

    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let image_path = manifest_dir.join("placeholder_images/fig1.png");

    group.bench_function("load_single_figure", |b| {
        b.iter(|| {
            let _ = black_box(gallery::load_image(&image_path).unwrap());
        });
    });

    group.bench_function("load_standard_manifest", |b| {
        // Paths in the standard manifest are relative to the working
        // directory, which cargo sets to the manifest dir for benches.
        let manifest = ImageManifest::standard();
        b.iter(|| {
            let _ = black_box(gallery::load_all(&manifest));
        });
    });

    group.finish();
}

criterion_group!(benches, gallery_loading_benchmark);
criterion_main!(benches);
