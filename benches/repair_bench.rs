use criterion::{Criterion, criterion_group, criterion_main};
use jsonmend::{parse_json_with_repair, repair_json};
use std::hint::black_box;

fn large_malformed(n: usize) -> String {
    let mut s = String::from("[\n");
    for i in 0..n {
        s.push_str(&format!(
            "{{id: {i}, label: 'item {i}', flag: True, extra: None}}, // row\n"
        ));
    }
    s.push(']');
    s
}

fn bench_repair(c: &mut Criterion) {
    let mut group = c.benchmark_group("repair");
    let cases = vec![
        "{a:1}",
        "{'name': 'widget', qty: 007, tags: [alpha, beta,]}",
        "{ \"a\": 1, /*b*/ \"b\": 2, // eol\n}",
        "{note: 'it\\'s fine', ok: True, bad: None}",
        "a: 1, b: 2",
    ];
    for (i, s) in cases.into_iter().enumerate() {
        group.bench_function(format!("case_{}", i), |b| {
            b.iter(|| {
                let out = repair_json(black_box(s));
                black_box(out);
            })
        });
    }

    let big = large_malformed(1000);
    group.bench_function("large_1000_rows", |b| {
        b.iter(|| {
            let out = repair_json(black_box(&big));
            black_box(out);
        })
    });
    group.finish();

    let valid = serde_json::to_string_pretty(&serde_json::json!({
        "items": (0..200).map(|i| serde_json::json!({"id": i, "v": "x"})).collect::<Vec<_>>()
    }))
    .unwrap();
    c.bench_function("parse_with_repair_valid_input", |b| {
        b.iter(|| {
            let out = parse_json_with_repair(black_box(&valid));
            black_box(out)
        })
    });
}

criterion_group!(benches, bench_repair);
criterion_main!(benches);
