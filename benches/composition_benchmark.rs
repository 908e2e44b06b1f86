use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tailwind_styled::{create, tags, BaseClass, DedupClasses, RenderRequest, StyleOptions};

fn variants(count: usize) -> Vec<(String, String)> {
    (0..count)
        .map(|i| (format!("v{}", i), format!("bg-slate-{} text-slate-{}", (i % 9 + 1) * 100, 900 - (i % 9) * 100)))
        .collect()
}

fn bench_static_composition(c: &mut Criterion) {
    let button = tags::button(
        "inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-medium",
        StyleOptions::new().variants(variants(8)),
    );
    let request = RenderRequest::new().variant("v3").class_name("mt-2 w-full");

    c.bench_function("compose_static", |b| {
        b.iter(|| black_box(button.class_name(black_box(&request))))
    });
}

fn bench_dynamic_composition(c: &mut Criterion) {
    let card = create(
        BaseClass::dynamic(|p| format!("p-{}", p.get_str("padding").unwrap_or("4"))),
        StyleOptions::new().dynamic_class(|p| {
            if p.is_truthy("selected") {
                "ring-2 ring-blue-500".to_string()
            } else {
                String::new()
            }
        }),
    );
    let request = RenderRequest::new().prop("padding", "6").prop("selected", true);

    c.bench_function("compose_dynamic", |b| {
        b.iter(|| black_box(card.class_name(black_box(&request))))
    });
}

fn bench_variant_table_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("variant_lookup");

    for count in [4usize, 64, 1024] {
        let component = create("base", StyleOptions::new().variants(variants(count)));
        let request = RenderRequest::new().variant(format!("v{}", count - 1));

        group.bench_with_input(BenchmarkId::from_parameter(count), &request, |b, request| {
            b.iter(|| black_box(component.class_name(request)))
        });
    }

    group.finish();
}

fn bench_dedup_merge(c: &mut Criterion) {
    let component = create("p-4 m-2 rounded shadow text-sm", StyleOptions::new()).with_merger(DedupClasses);
    let request = RenderRequest::new().class_name("p-4 rounded text-sm font-bold");

    c.bench_function("compose_dedup", |b| {
        b.iter(|| black_box(component.class_name(black_box(&request))))
    });
}

criterion_group!(
    benches,
    bench_static_composition,
    bench_dynamic_composition,
    bench_variant_table_size,
    bench_dedup_merge
);
criterion_main!(benches);
