use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use hifitime::Epoch;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use orbiter::{
    elements::OrbitalElements,
    propagate,
    record::OrbitalRecord,
    settings::{PropagationModel, PropagatorSettings},
};

/// Random healthy element set: a ∈ [7000, 40000] km, e ∈ [0, 0.3].
#[inline]
fn random_elements(rng: &mut StdRng) -> OrbitalElements {
    OrbitalElements {
        semimajor_axis: rng.random_range(7000.0..=40_000.0),
        eccentricity: rng.random_range(0.0..=0.3),
        inclination: rng.random_range(0.0..180.0),
        right_ascension: rng.random_range(0.0..360.0),
        argument_of_perigee: rng.random_range(0.0..360.0),
        mean_anomaly: rng.random_range(0.0..360.0),
    }
}

fn settings(model: PropagationModel) -> PropagatorSettings {
    PropagatorSettings::builder()
        .model(model)
        .fixed_epoch(Epoch::from_gregorian_utc_hms(2024, 1, 1, 0, 0, 0))
        .build()
        .unwrap()
}

fn bench_build_record(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0x5EED);
    let settings = settings(PropagationModel::Sgp4);
    let epoch = Epoch::from_gregorian_utc_hms(2024, 1, 1, 0, 0, 0);

    c.bench_function("record/build_at", |b| {
        b.iter_batched(
            || random_elements(&mut rng),
            |elements| black_box(OrbitalRecord::build_at(&elements, epoch, &settings)),
            BatchSize::SmallInput,
        )
    });
}

fn bench_propagate(c: &mut Criterion) {
    for (name, model) in [
        ("propagate/sgp4", PropagationModel::Sgp4),
        ("propagate/two_body", PropagationModel::TwoBody),
    ] {
        let mut rng = StdRng::seed_from_u64(0xDEADBEEF);
        let settings = settings(model);
        let records: Vec<_> = (0..256)
            .map(|_| {
                OrbitalRecord::build(&random_elements(&mut rng), &settings).unwrap()
            })
            .collect();

        c.bench_function(name, |b| {
            b.iter_batched(
                || {
                    // Pre-generate offsets to avoid RNG cost in the timed section
                    (0..records.len())
                        .map(|_| rng.random_range(-86_400.0..86_400.0))
                        .collect::<Vec<f64>>()
                },
                |offsets| {
                    for (record, dt) in records.iter().zip(offsets) {
                        black_box(propagate(record, black_box(dt)));
                    }
                },
                BatchSize::LargeInput,
            )
        });
    }
}

criterion_group!(benches, bench_build_record, bench_propagate);
criterion_main!(benches);
