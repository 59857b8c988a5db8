use criterion::{criterion_group, criterion_main, Criterion};
use tinyrand::StdRand;

use pinseeker::mc::{sample_distances, tally_wins, MonteCarloEngine};
use pinseeker::profile::DistributionParams;

fn criterion_benchmark(c: &mut Criterion) {
    let params = [
        DistributionParams {
            mean: 13.0,
            stddev: 9.0,
        },
        DistributionParams {
            mean: 21.0,
            stddev: 8.0,
        },
        DistributionParams {
            mean: 29.5,
            stddev: 7.5,
        },
        DistributionParams {
            mean: 42.0,
            stddev: 11.0,
        },
    ];

    {
        // sanity check
        let wins = MonteCarloEngine::default()
            .with_trials(1_000)
            .with_seed(42)
            .with_params(&params)
            .simulate();
        assert_eq!(1_000, wins.iter().sum::<u64>());
    }

    c.bench_function("cri_mc_sample_10k", |b| {
        let mut rand = StdRand::default();
        b.iter(|| {
            sample_distances(&params, 10_000, &mut rand);
        });
    });

    c.bench_function("cri_mc_tally_10k", |b| {
        let mut rand = StdRand::default();
        let distances = sample_distances(&params, 10_000, &mut rand);
        b.iter(|| {
            tally_wins(&distances, params.len());
        });
    });

    c.bench_function("cri_mc_engine_100k", |b| {
        let mut engine = MonteCarloEngine::default()
            .with_trials(100_000)
            .with_params(&params);
        b.iter(|| {
            engine.simulate();
        });
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
