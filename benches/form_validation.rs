use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use mapler::form::{fields, validate, FormSchema, FormValues, OutputRecord};

fn filled_values(schema: &FormSchema) -> FormValues {
    FormValues::defaults(schema)
        .with(fields::FIRST_NAME, "Jan")
        .with(fields::LAST_NAME, "Novák")
        .with(fields::PHONE, "123456789")
        .with(fields::EMAIL, "jan@example.com")
        .with(fields::EXPERIENCE, "5")
        .with(fields::CONSENT, true)
}

fn benchmark_validate(c: &mut Criterion) {
    let schema = FormSchema::driver_inquiry();
    let cases = [
        ("empty", FormValues::defaults(&schema)),
        ("filled", filled_values(&schema)),
        (
            "invalid_email",
            filled_values(&schema).with(fields::EMAIL, "not-an-email"),
        ),
    ];

    let mut group = c.benchmark_group("validate");
    for (name, values) in &cases {
        group.bench_with_input(BenchmarkId::from_parameter(name), values, |b, values| {
            b.iter(|| validate(black_box(&schema), black_box(values)))
        });
    }
    group.finish();
}

fn benchmark_output_record(c: &mut Criterion) {
    let schema = FormSchema::driver_inquiry();
    let values = filled_values(&schema);

    c.bench_function("output_record", |b| {
        b.iter(|| OutputRecord::from_values(black_box(&values)).unwrap())
    });
}

criterion_group!(benches, benchmark_validate, benchmark_output_record);
criterion_main!(benches);
