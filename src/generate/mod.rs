//! Seeded random instances for experiments and benchmarks.

mod config;

pub use config::{CapGenConfig, KnapsackGenConfig, TspGenConfig};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::cap::Cap;
use crate::error::ValidationError;
use crate::knapsack::{Item, Knapsack};
use crate::matrix::{WeightMatrix, NO_EDGE};
use crate::tsp::Tsp;

fn create_rng(seed: Option<u64>) -> StdRng {
    StdRng::seed_from_u64(seed.unwrap_or_else(rand::random))
}

/// Uniform draw from `[min, max)`, or `min` when the range is empty.
fn draw<R: Rng>(rng: &mut R, min: f64, max: f64, integer: bool) -> f64 {
    let value = if min < max {
        rng.random_range(min..max)
    } else {
        min
    };
    if integer {
        value.floor()
    } else {
        value
    }
}

/// Random directed TSP instance. Each off-diagonal edge exists with
/// probability `density` percent.
///
/// # Examples
///
/// ```
/// use np_exact::generate::{random_tsp, TspGenConfig};
///
/// let config = TspGenConfig::default().with_size(4).with_seed(42);
/// let a = random_tsp(&config).unwrap();
/// let b = random_tsp(&config).unwrap();
/// assert_eq!(a, b);
/// ```
pub fn random_tsp(config: &TspGenConfig) -> Result<Tsp, ValidationError> {
    config.validate()?;
    let mut rng = create_rng(config.seed);

    let matrix = WeightMatrix::from_fn(config.size, |_, _| {
        if rng.random_range(0..100) < config.density {
            draw(&mut rng, config.min_weight, config.max_weight, config.integer)
        } else {
            NO_EDGE
        }
    });

    debug!(size = config.size, density = config.density, "random tsp");
    Ok(Tsp::from_matrix(matrix))
}

/// Random assignment instance with every cell, the diagonal included,
/// drawn uniformly.
pub fn random_cap(config: &CapGenConfig) -> Result<Cap, ValidationError> {
    config.validate()?;
    let mut rng = create_rng(config.seed);

    let n = config.size;
    let mut costs = WeightMatrix::disconnected(n);
    let mut salaries = WeightMatrix::disconnected(n);
    for i in 0..n {
        for j in 0..n {
            costs.set(i, j, draw(&mut rng, config.min_cost, config.max_cost, config.integer));
            salaries.set(
                i,
                j,
                draw(&mut rng, config.min_salary, config.max_salary, config.integer),
            );
        }
    }

    debug!(size = n, "random cap");
    Ok(Cap::from_matrices(costs, salaries))
}

/// Random standard knapsack. Items are named by draw order; when several
/// share a weight only the most valuable is kept.
pub fn random_knapsack(config: &KnapsackGenConfig) -> Result<Knapsack, ValidationError> {
    config.validate()?;
    let mut rng = create_rng(config.seed);

    let mut items: Vec<Item> = (0..config.items)
        .map(|i| {
            let weight = rng.random_range(config.min_item_weight..=config.max_item_weight);
            let unit = draw(&mut rng, config.min_unit_cost, config.max_unit_cost, false);
            let count = rng.random_range(config.min_count..=config.max_count);
            Item::new(i.to_string(), weight, unit * f64::from(weight), count)
        })
        .collect();

    items.sort_by(|a, b| b.weight.cmp(&a.weight));
    items.dedup_by(|later, kept| {
        if later.weight != kept.weight {
            return false;
        }
        if later.cost > kept.cost {
            std::mem::swap(later, kept);
        }
        true
    });

    debug!(items = items.len(), max_weight = config.max_weight, "random knapsack");
    Knapsack::new(config.max_weight, items)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_tsp_shape() {
        let config = TspGenConfig::default()
            .with_size(6)
            .with_weight_range(2.0, 9.0)
            .with_seed(1);
        let tsp = random_tsp(&config).unwrap();
        let m = tsp.matrix();
        assert_eq!(m.size(), 6);
        for i in 0..6 {
            assert_eq!(m.get(i, i), NO_EDGE);
            for j in (0..6).filter(|&j| j != i) {
                let w = m.get(i, j);
                assert!((2.0..9.0).contains(&w), "weight {} out of range", w);
                assert_eq!(w, w.floor());
            }
        }
    }

    #[test]
    fn test_random_tsp_density_zero() {
        let config = TspGenConfig::default().with_density(0).with_seed(3);
        let tsp = random_tsp(&config).unwrap();
        assert_eq!(tsp.matrix().finite_sum(), 0.0);
        assert!((0..tsp.size()).all(|i| tsp.matrix().row(i).iter().all(|w| w.is_infinite())));
    }

    #[test]
    fn test_random_tsp_seeded() {
        let config = TspGenConfig::default().with_integer(false).with_seed(9);
        assert_eq!(random_tsp(&config).unwrap(), random_tsp(&config).unwrap());
    }

    #[test]
    fn test_random_cap_ranges() {
        let config = CapGenConfig::default()
            .with_size(4)
            .with_cost_range(1.0, 3.0)
            .with_salary_range(10.0, 10.0)
            .with_seed(5);
        let cap = random_cap(&config).unwrap();
        for i in 0..4 {
            for j in 0..4 {
                assert!((1.0..3.0).contains(&cap.costs().get(i, j)));
                assert_eq!(cap.salaries().get(i, j), 10.0);
            }
        }
    }

    #[test]
    fn test_random_knapsack_distinct_weights() {
        let config = KnapsackGenConfig::default()
            .with_items(30)
            .with_item_weight_range(1, 4)
            .with_seed(11);
        let kp = random_knapsack(&config).unwrap();
        let weights: Vec<u32> = kp.items().iter().map(|i| i.weight).collect();
        assert!(weights.windows(2).all(|w| w[0] > w[1]), "{:?}", weights);
        assert!(kp.items().len() <= 4);
        for item in kp.items() {
            let unit = item.cost / f64::from(item.weight);
            assert!((1.0..10.0).contains(&unit));
            assert!((1..=3).contains(&item.count));
        }
    }

    #[test]
    fn test_invalid_config() {
        let config = TspGenConfig::default().with_size(1);
        assert!(random_tsp(&config).is_err());
    }
}
