extern crate fixture_codec;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fixture_codec::structures::serialization::{TextDeserialization, TextSerialization};
use fixture_codec::{deserialize, split_array, BinaryTree};

fn criterion_benchmark(c: &mut Criterion) {
    // Complete tree of 4095 nodes in level order.
    let tree_text = format!(
        "[{}]",
        (0..4095).map(|v| v.to_string()).collect::<Vec<_>>().join(",")
    );
    let nested_text = format!(
        "[{}]",
        (0..512)
            .map(|i| format!("[{},{},{}]", i, i + 1, i + 2))
            .collect::<Vec<_>>()
            .join(",")
    );
    let tree = BinaryTree::deserialize(&tree_text).expect("Failed to decode tree");

    c.bench_function("split_array", |bencher| {
        bencher.iter(|| split_array(black_box(&nested_text)))
    });

    c.bench_function("deserialize List[List[int]]", |bencher| {
        bencher.iter(|| deserialize("List[List[int]]", black_box(&nested_text)))
    });

    c.bench_function("tree decode", |bencher| {
        bencher.iter(|| BinaryTree::deserialize(black_box(&tree_text)))
    });

    c.bench_function("tree encode", |bencher| {
        bencher.iter(|| black_box(&tree).serialize())
    });
}

fn custom_criterion() -> Criterion {
    Criterion::default()
        .warm_up_time(std::time::Duration::from_secs(2))
        .measurement_time(std::time::Duration::from_secs(5))
}

criterion_group! {
    name = benches;
    config = custom_criterion();
    targets = criterion_benchmark
}
criterion_main!(benches);
