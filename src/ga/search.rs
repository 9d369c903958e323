//! Generational genetic search over tour permutations.
//!
//! # Algorithm
//!
//! 1. Start from `population_size` random permutations of the stops.
//! 2. Each generation: evaluate every tour's closed-loop distance, sort
//!    ascending, keep the `elite_size` best unchanged, and fill the rest of
//!    the next generation with children of tournament-selected parents
//!    (order crossover, then a swap mutation with probability
//!    `mutation_rate`).
//! 3. Return the best tour seen in any generation.
//!
//! # Complexity
//!
//! O(generations · population_size · n) distance lookups plus O(n) per
//! crossover. Markedly slower than 2-opt; callers typically reserve it for
//! tours of at most ~50 stops.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::debug;

use super::operators::{order_crossover, swap_mutation, tournament_selection};
use super::{Chromosome, GeneticConfig};
use crate::distance::DistanceMatrix;
use crate::error::Result;

/// Builds the random source described by a seed: deterministic when `Some`,
/// OS-seeded otherwise.
pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// Runs the genetic search over `stops` using the generator `rng`.
///
/// `stops` may be any subset of the matrix indices; every returned tour is a
/// permutation of it. Fewer than two stops are returned as given.
/// `config.seed` is ignored here; the caller owns the generator.
///
/// # Errors
///
/// [`RoutingError::InvalidConfiguration`](crate::RoutingError::InvalidConfiguration)
/// if `config` fails [`GeneticConfig::validate`].
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use fleet_routing::distance::DistanceMatrix;
/// use fleet_routing::ga::{genetic_search, GeneticConfig};
///
/// let mut dm = DistanceMatrix::new(5);
/// for i in 0..5 {
///     for j in 0..5 {
///         dm.set(i, j, (i as f64 - j as f64).abs());
///     }
/// }
/// let stops: Vec<usize> = (0..5).collect();
/// let config = GeneticConfig::default().with_population_size(30).with_generations(50);
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let (tour, dist) = genetic_search(&stops, &dm, &config, &mut rng).unwrap();
/// assert_eq!(tour.len(), 5);
/// assert!((dist - 8.0).abs() < 1e-10);
/// ```
pub fn genetic_search<R: Rng>(
    stops: &[usize],
    distances: &DistanceMatrix,
    config: &GeneticConfig,
    rng: &mut R,
) -> Result<(Vec<usize>, f64)> {
    config.validate()?;

    if stops.len() < 2 {
        return Ok((stops.to_vec(), distances.tour_distance(stops)));
    }

    let pop_size = config.population_size;
    let elite = config.elite_size.min(pop_size);

    let mut population: Vec<Chromosome> = (0..pop_size)
        .map(|_| {
            let mut genes = stops.to_vec();
            genes.shuffle(rng);
            Chromosome::new(genes)
        })
        .collect();

    let mut best = population[0].clone();
    best.set_fitness(distances.tour_distance(best.genes()));

    for _ in 0..config.generations {
        evaluate(&mut population, distances);
        population.sort_by(|a, b| a.fitness().total_cmp(&b.fitness()));
        if population[0].fitness() < best.fitness() {
            best = population[0].clone();
        }

        let mut next: Vec<Chromosome> = population[..elite].to_vec();
        while next.len() < pop_size {
            let (Some(p1), Some(p2)) = (
                tournament_selection(&population, config.tournament_size, rng),
                tournament_selection(&population, config.tournament_size, rng),
            ) else {
                break;
            };
            let mut child = order_crossover(p1.genes(), p2.genes(), rng);
            if rng.random::<f64>() < config.mutation_rate {
                swap_mutation(&mut child, rng);
            }
            next.push(Chromosome::new(child));
        }
        population = next;
    }

    // The last generation has not been scored yet
    evaluate(&mut population, distances);
    if let Some(last_best) = population
        .iter()
        .min_by(|a, b| a.fitness().total_cmp(&b.fitness()))
    {
        if last_best.fitness() < best.fitness() {
            best = last_best.clone();
        }
    }

    let distance = best.fitness();
    debug!(
        stops = stops.len(),
        generations = config.generations,
        population = pop_size,
        distance,
        "genetic search finished"
    );
    Ok((best.into_genes(), distance))
}

/// Runs [`genetic_search`] with a generator built from `config.seed`.
pub fn genetic_search_seeded(
    stops: &[usize],
    distances: &DistanceMatrix,
    config: &GeneticConfig,
) -> Result<(Vec<usize>, f64)> {
    let mut rng = rng_from_seed(config.seed);
    genetic_search(stops, distances, config, &mut rng)
}

fn evaluate(population: &mut [Chromosome], distances: &DistanceMatrix) {
    for individual in population.iter_mut() {
        let fitness = distances.tour_distance(individual.genes());
        individual.set_fitness(fitness);
    }
}
