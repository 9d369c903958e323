//! Tour chromosome for the genetic search.

/// A candidate tour: a permutation of stop indices plus its cached fitness.
///
/// Fitness is the closed-loop tour distance; lower is better. A fresh
/// chromosome has infinite fitness until evaluated.
///
/// # Examples
///
/// ```
/// use fleet_routing::ga::Chromosome;
///
/// let c = Chromosome::new(vec![3, 1, 2]);
/// assert_eq!(c.genes(), &[3, 1, 2]);
/// assert_eq!(c.fitness(), f64::INFINITY);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Chromosome {
    genes: Vec<usize>,
    fitness: f64,
}

impl Chromosome {
    /// Creates an unevaluated chromosome.
    pub fn new(genes: Vec<usize>) -> Self {
        Self {
            genes,
            fitness: f64::INFINITY,
        }
    }

    /// Stop indices in visiting order.
    pub fn genes(&self) -> &[usize] {
        &self.genes
    }

    /// Mutable access to the stop order.
    pub fn genes_mut(&mut self) -> &mut Vec<usize> {
        &mut self.genes
    }

    /// Consumes the chromosome, returning the stop order.
    pub fn into_genes(self) -> Vec<usize> {
        self.genes
    }

    /// Cached tour distance.
    pub fn fitness(&self) -> f64 {
        self.fitness
    }

    /// Stores the tour distance.
    pub fn set_fitness(&mut self, fitness: f64) {
        self.fitness = fitness;
    }

    /// Number of stops in this tour.
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    /// Returns true if the tour has no stops.
    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }
}
