//! Selection, crossover and mutation operators on tour permutations.

use std::collections::HashSet;

use rand::seq::index;
use rand::Rng;

use super::Chromosome;

/// Order crossover (OX).
///
/// Copies a random contiguous slice `[start, end)` of `parent1` into the child
/// at the same positions, then fills the remaining positions from `end`
/// onward (wrapping) with the genes of `parent2`, read from `end` onward
/// (wrapping), skipping genes already copied.
///
/// Both parents must be permutations of the same gene set with at least two
/// genes; shorter parents are returned as a copy of `parent1`.
pub fn order_crossover<R: Rng + ?Sized>(
    parent1: &[usize],
    parent2: &[usize],
    rng: &mut R,
) -> Vec<usize> {
    let size = parent1.len();
    if size < 2 {
        return parent1.to_vec();
    }
    let cut = index::sample(rng, size, 2);
    let (a, b) = (cut.index(0), cut.index(1));
    order_crossover_between(parent1, parent2, a.min(b), a.max(b))
}

/// OX with a fixed slice `[start, end)`.
pub(crate) fn order_crossover_between(
    parent1: &[usize],
    parent2: &[usize],
    start: usize,
    end: usize,
) -> Vec<usize> {
    let size = parent1.len();
    let mut child: Vec<Option<usize>> = vec![None; size];
    let mut taken: HashSet<usize> = HashSet::with_capacity(end - start);
    for pos in start..end {
        child[pos] = Some(parent1[pos]);
        taken.insert(parent1[pos]);
    }

    let mut pointer = end;
    for &gene in parent2[end..].iter().chain(&parent2[..end]) {
        if taken.contains(&gene) {
            continue;
        }
        if pointer >= size {
            pointer = 0;
        }
        child[pointer] = Some(gene);
        pointer += 1;
    }

    child.into_iter().flatten().collect()
}

/// Swaps two distinct randomly chosen positions.
pub fn swap_mutation<R: Rng + ?Sized>(genes: &mut [usize], rng: &mut R) {
    if genes.len() < 2 {
        return;
    }
    let pick = index::sample(rng, genes.len(), 2);
    genes.swap(pick.index(0), pick.index(1));
}

/// Tournament selection: samples `size` distinct individuals (or the whole
/// population if smaller) uniformly and returns the fittest.
///
/// Returns `None` for an empty population.
pub fn tournament_selection<'a, R: Rng + ?Sized>(
    population: &'a [Chromosome],
    size: usize,
    rng: &mut R,
) -> Option<&'a Chromosome> {
    let k = size.max(1).min(population.len());
    index::sample(rng, population.len(), k)
        .into_iter()
        .map(|i| &population[i])
        .min_by(|a, b| a.fitness().total_cmp(&b.fitness()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn is_permutation(genes: &[usize], n: usize) -> bool {
        let mut sorted = genes.to_vec();
        sorted.sort_unstable();
        sorted == (0..n).collect::<Vec<_>>()
    }

    #[test]
    fn test_ox_fixed_slice() {
        let p1 = [0, 1, 2, 3, 4, 5, 6, 7];
        let p2 = [7, 6, 5, 4, 3, 2, 1, 0];
        let child = order_crossover_between(&p1, &p2, 2, 5);
        assert_eq!(child, vec![6, 5, 2, 3, 4, 1, 0, 7]);
    }

    #[test]
    fn test_ox_identical_parents() {
        let p = [4, 2, 0, 3, 1];
        let child = order_crossover_between(&p, &p, 1, 3);
        assert_eq!(child, p.to_vec());
    }

    #[test]
    fn test_ox_random_preserves_genes() {
        let mut rng = StdRng::seed_from_u64(42);
        let p1: Vec<usize> = (0..10).collect();
        let p2: Vec<usize> = (0..10).rev().collect();
        for _ in 0..50 {
            let child = order_crossover(&p1, &p2, &mut rng);
            assert!(is_permutation(&child, 10));
        }
    }

    #[test]
    fn test_ox_subset_genes() {
        // Genes need not be 0..n
        let p1 = [9, 4, 7, 2];
        let p2 = [2, 7, 4, 9];
        let child = order_crossover_between(&p1, &p2, 1, 2);
        let mut sorted = child.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, vec![2, 4, 7, 9]);
        assert_eq!(child[1], 4);
    }

    #[test]
    fn test_ox_tiny_parent() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(order_crossover(&[3], &[3], &mut rng), vec![3]);
    }

    #[test]
    fn test_swap_mutation() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut genes = vec![0, 1, 2, 3, 4];
        swap_mutation(&mut genes, &mut rng);
        assert!(is_permutation(&genes, 5));
        let moved = genes.iter().enumerate().filter(|(i, g)| i != *g).count();
        assert_eq!(moved, 2);

        let mut single = vec![0];
        swap_mutation(&mut single, &mut rng);
        assert_eq!(single, vec![0]);
    }

    fn population(fitness: &[f64]) -> Vec<Chromosome> {
        fitness
            .iter()
            .enumerate()
            .map(|(i, &f)| {
                let mut c = Chromosome::new(vec![i]);
                c.set_fitness(f);
                c
            })
            .collect()
    }

    #[test]
    fn test_tournament_whole_population_picks_best() {
        let pop = population(&[5.0, 1.0, 3.0]);
        let mut rng = StdRng::seed_from_u64(3);
        // Tournament larger than the population covers everyone
        let winner = tournament_selection(&pop, 5, &mut rng).expect("non-empty");
        assert_eq!(winner.fitness(), 1.0);
    }

    #[test]
    fn test_tournament_size_one_is_uniform_pick() {
        let pop = population(&[5.0, 1.0, 3.0, 2.0]);
        let mut rng = StdRng::seed_from_u64(11);
        let mut seen = HashSet::new();
        for _ in 0..200 {
            let w = tournament_selection(&pop, 1, &mut rng).expect("non-empty");
            seen.insert(w.genes()[0]);
        }
        assert_eq!(seen.len(), 4);
    }

    #[test]
    fn test_tournament_empty() {
        let mut rng = StdRng::seed_from_u64(3);
        assert!(tournament_selection(&[], 5, &mut rng).is_none());
    }
}
