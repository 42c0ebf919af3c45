use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use keepalived_state::{ScriptChecker, VRRPData, VRRPStats, merge_instances};
use std::collections::HashMap;
use std::hint::black_box;

fn instances(count: u32) -> (HashMap<String, VRRPData>, HashMap<String, VRRPStats>) {
    let mut data = HashMap::new();
    let mut stats = HashMap::new();

    for i in 0..count {
        let name = format!("VI_{}", i);
        data.insert(
            name.clone(),
            VRRPData {
                iname: name.clone(),
                state: 2,
                want_state: 2,
                interface: "eth0".to_string(),
                garp_delay: 5,
                vrid: i % 255 + 1,
                vips: vec![format!("10.{}.{}.1 dev eth0 scope global", i / 256, i % 256)],
                excluded_vips: vec![],
            },
        );
        stats.insert(
            name,
            VRRPStats {
                advert_rcvd: u64::from(i),
                ..Default::default()
            },
        );
    }

    (data, stats)
}

fn merge_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("merge_instances");

    for count in [1u32, 16, 256].iter() {
        let (data, stats) = instances(*count);
        group.bench_with_input(BenchmarkId::from_parameter(count), count, |b, _| {
            b.iter_batched(
                || (data.clone(), stats.clone()),
                |(data, stats)| black_box(merge_instances(data, stats)),
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn script_check_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("check_script");
    group.sample_size(10); // Each check spawns a shell

    let checker = ScriptChecker::new("true");
    group.bench_function("shell_true", |b| {
        let rt = tokio::runtime::Runtime::new().unwrap();
        b.iter(|| rt.block_on(async { black_box(checker.check_script("10.0.0.1").await) }));
    });

    group.finish();
}

criterion_group!(benches, merge_benchmark, script_check_benchmark);
criterion_main!(benches);
