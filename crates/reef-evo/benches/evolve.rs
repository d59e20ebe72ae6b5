use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::Rng;
use reef_core::NullDiagnostics;
use reef_evo::{EvolutionConfig, EvolutionaryPcg, FitnessValue, Genotype};

const TARGET: &[u8] = b"procedural content";

#[derive(Clone)]
struct Phrase(Vec<u8>);

impl Genotype for Phrase {
    fn mutate<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let i = rng.gen_range(0..self.0.len());
        self.0[i] = rng.gen_range(b' '..=b'z');
    }

    fn fitness(&self) -> FitnessValue {
        let matching = self.0.iter().zip(TARGET).filter(|(a, b)| a == b).count();
        FitnessValue::new(matching as i32, TARGET.len() as i32)
    }
}

fn bench_evolve(c: &mut Criterion) {
    c.bench_function("reef-evo/evolve(population=100,generations=50)", |b| {
        b.iter(|| {
            let config = EvolutionConfig::default()
                .with_max_generations(50)
                .with_seed(7);
            let mut pcg = EvolutionaryPcg::with_diagnostics(
                || Phrase(vec![b' '; TARGET.len()]),
                config,
                NullDiagnostics,
            )
            .expect("non-empty population");
            black_box(pcg.evolve().fitness)
        })
    });
}

criterion_group!(benches, bench_evolve);
criterion_main!(benches);
