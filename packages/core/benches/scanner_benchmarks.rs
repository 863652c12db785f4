//! Path Scanner Performance Benchmarks
//!
//! Timing for the whole-string validator and the combinators:
//! - Typical short paths
//! - Adversarial inputs at growing lengths (cost must grow linearly)
//! - Long fluent chains built with the consuming combinators

use std::hint::black_box;
use std::time::{Duration, Instant};

use docpath_core::{Path, is_valid_path};

fn main() {
    println!("Path Scanner Performance Benchmarks\n");

    bench_typical_paths();
    bench_adversarial_scaling();
    bench_fluent_chains();
}

fn per_iteration(total: Duration, iterations: u32) -> Duration {
    total / iterations
}

/// Benchmark validation of realistic paths
fn bench_typical_paths() {
    println!("1. Typical Paths");

    let corpus = [
        "$.user.name",
        "$.store.book[0].title",
        "$.catalog.**.price",
        "$.items[*].tags[*]",
        "$[0][1][2]",
    ];
    let iterations = 100_000;

    let start = Instant::now();
    for _ in 0..iterations {
        for path in &corpus {
            black_box(is_valid_path(black_box(path)));
        }
    }
    let elapsed = start.elapsed();

    println!(
        "   {} validations in {elapsed:?} ({:?} per path)\n",
        iterations * corpus.len() as u32,
        per_iteration(elapsed, iterations * corpus.len() as u32)
    );
}

/// Benchmark adversarial inputs at growing lengths
fn bench_adversarial_scaling() {
    println!("2. Adversarial Input Scaling");

    for n in [1_000, 10_000, 100_000, 1_000_000] {
        let inputs = [
            ("dots", format!("${}X", ".".repeat(n))),
            ("identifier", format!("$.{}!", "a".repeat(n))),
            ("digits", format!("$[{}!]", "9".repeat(n))),
            ("members", format!("${}.", ".a".repeat(n / 2))),
        ];

        for (name, input) in &inputs {
            let start = Instant::now();
            let accepted = is_valid_path(black_box(input));
            let elapsed = start.elapsed();
            assert!(!accepted);
            println!("   n={n:>9} {name:<10} {elapsed:?}");
        }
    }
    println!();
}

/// Benchmark building long paths one segment at a time
fn bench_fluent_chains() {
    println!("3. Fluent Chains");

    for length in [100, 1_000, 10_000] {
        let start = Instant::now();
        let mut path = Path::ROOT;
        for i in 0..length {
            path = match i % 3 {
                0 => path.into_member("field").expect("`field` is a valid member"),
                1 => path
                    .into_array_element(i)
                    .expect("loop counter is a valid index"),
                _ => path.into_wildcard(),
            };
        }
        let elapsed = start.elapsed();
        assert_eq!(i64::try_from(path.depth()), Ok(length));
        println!(
            "   {length:>6} segments -> {} bytes in {elapsed:?}",
            path.as_str().len()
        );
    }
}
