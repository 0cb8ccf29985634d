use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use gf2_cyclic::{
    analysis::analyze_with_config,
    config::AnalysisConfig,
    cyclic::CyclicCode,
    polynomial::{gf2_divide, BitVector},
};

fn division_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("gf2_divide");

    for (name, dividend, divisor) in [
        ("hamming_7_4", 0b1010000u64, 0b1011u64),
        ("crc8_64bit", u64::MAX, 0x107),
        ("crc16_64bit", 0xDEAD_BEEF_CAFE_F00D, 0x1_1021),
    ] {
        group.bench_with_input(
            BenchmarkId::new("divide", name),
            &(dividend, divisor),
            |b, &(dividend, divisor)| b.iter(|| gf2_divide(black_box(dividend), black_box(divisor))),
        );
    }

    group.finish();
}

fn encoding_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");

    for (generator, k) in [("1011", 4usize), ("10011", 11), ("100000111", 48)] {
        let code = CyclicCode::from_bit_str(generator, k).unwrap();
        let message = BitVector::new(0x5555_5555_5555 & ((1u64 << k) - 1), k).unwrap();
        group.bench_with_input(
            BenchmarkId::new("encode", format!("n{}_k{}", code.n(), k)),
            &message,
            |b, message| b.iter(|| code.encode(black_box(message))),
        );
    }

    group.finish();
}

fn analysis_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyze");
    group.sample_size(10);

    for k in [4usize, 8, 12] {
        let code = CyclicCode::from_bit_str("10011", k).unwrap();
        let codeword = code.encode(&BitVector::new(1, k).unwrap()).unwrap();

        let sequential = AnalysisConfig::sequential();
        group.bench_with_input(
            BenchmarkId::new("sequential", code.n()),
            &codeword,
            |b, codeword| {
                b.iter(|| analyze_with_config(codeword.value(), 0b10011, code.n(), &sequential))
            },
        );

        let parallel = AnalysisConfig {
            parallel: true,
            ..AnalysisConfig::default()
        };
        group.bench_with_input(
            BenchmarkId::new("parallel", code.n()),
            &codeword,
            |b, codeword| {
                b.iter(|| analyze_with_config(codeword.value(), 0b10011, code.n(), &parallel))
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    division_benchmarks,
    encoding_benchmarks,
    analysis_benchmarks
);
criterion_main!(benches);
