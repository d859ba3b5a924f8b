//! Benchmarks for plan2docx transcoding and packing.
//!
//! Run with: cargo bench
//!
//! These benchmarks test throughput at various report sizes.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use plan2docx::{BrandingConfig, ReportRequest};

/// Creates a synthetic analysis with the given number of sections.
fn create_test_markdown(section_count: usize) -> String {
    let mut markdown = String::from("# Rapport d'analyse\n\n");

    for i in 0..section_count {
        markdown.push_str(&format!(
            "## Section {i}\n\
             Le plan présente une **non-conformité** au niveau {i}.\n\
             - Cote **A{i}** vérifiée\n\
             - Cote B{i} à reprendre\n\
             \n\
             | Élément | Statut | Remarque |\n\
             |---|---|---|\n\
             | Mur {i} | OK | RAS |\n\
             | Dalle {i} | **KO** | Épaisseur insuffisante |\n\n"
        ));
    }

    markdown
}

/// Benchmark Markdown transcoding at various sizes.
fn bench_transcoding(c: &mut Criterion) {
    let mut group = c.benchmark_group("transcoding");

    for section_count in [10, 100, 500, 1000].iter() {
        let markdown = create_test_markdown(*section_count);

        group.throughput(Throughput::Bytes(markdown.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("sections", section_count),
            &markdown,
            |b, markdown| {
                b.iter(|| plan2docx::transcode(black_box(markdown)));
            },
        );
    }

    group.finish();
}

/// Benchmark the full build, including DOCX packing.
fn bench_report_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("report_build");
    let branding = BrandingConfig::default();

    for section_count in [10, 100, 500].iter() {
        let request = ReportRequest::new(create_test_markdown(*section_count))
            .with_context("Immeuble R+3")
            .with_prompt("Contrôle des cotes");

        group.bench_with_input(
            BenchmarkId::new("sections", section_count),
            &request,
            |b, request| {
                b.iter(|| plan2docx::build_report(black_box(request), &branding).unwrap());
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_transcoding, bench_report_build);
criterion_main!(benches);
