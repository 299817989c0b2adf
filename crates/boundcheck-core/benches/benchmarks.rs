use boundcheck_core::{validate, RangeSchema};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use serde_json::json;

fn bench_compile(c: &mut Criterion) {
    let schema = json!({ "maximum": 3.0, "exclusiveMaximum": true, "minimum": 0 });
    c.bench_function("compile_range_schema", |b| {
        b.iter(|| RangeSchema::compile(black_box(&schema)).unwrap())
    });
}

fn bench_validate(c: &mut Criterion) {
    let schema = RangeSchema::compile(&json!({ "maximum": 3.0, "minimum": 0 })).unwrap();
    let instances = vec![json!(2.6), json!(3.5), json!("x"), json!(3), json!(null)];
    c.bench_function("validate_mixed_instances", |b| {
        b.iter(|| {
            for instance in &instances {
                black_box(validate(black_box(&schema), instance));
            }
        })
    });
}

criterion_group!(benches, bench_compile, bench_validate);
criterion_main!(benches);
