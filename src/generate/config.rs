//! Random instance configurations.

use crate::error::ValidationError;

fn check_range(name: &str, min: f64, max: f64) -> Result<(), ValidationError> {
    if !min.is_finite() || min < 0.0 {
        return Err(ValidationError::out_of_range(
            format!("min_{name}"),
            min,
            "finite and >= 0",
        ));
    }
    if !max.is_finite() || max < min {
        return Err(ValidationError::out_of_range(
            format!("max_{name}"),
            max,
            format!("finite and >= min_{name} ({min})"),
        ));
    }
    Ok(())
}

fn check_size(size: usize) -> Result<(), ValidationError> {
    if size < 2 {
        return Err(ValidationError::out_of_range("size", size as f64, ">= 2"));
    }
    Ok(())
}

/// Configuration for [`random_tsp`](super::random_tsp).
///
/// # Examples
///
/// ```
/// use np_exact::generate::TspGenConfig;
///
/// let config = TspGenConfig::default()
///     .with_size(6)
///     .with_weight_range(1.0, 50.0)
///     .with_density(80)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TspGenConfig {
    /// Number of vertices.
    pub size: usize,

    /// Smallest edge weight.
    pub min_weight: f64,

    /// Largest edge weight (exclusive unless equal to `min_weight`).
    pub max_weight: f64,

    /// Probability in percent that an off-diagonal edge exists.
    pub density: u32,

    /// Round weights down to whole numbers.
    pub integer: bool,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for TspGenConfig {
    fn default() -> Self {
        Self {
            size: 5,
            min_weight: 1.0,
            max_weight: 100.0,
            density: 100,
            integer: true,
            seed: None,
        }
    }
}

impl TspGenConfig {
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    pub fn with_weight_range(mut self, min: f64, max: f64) -> Self {
        self.min_weight = min;
        self.max_weight = max;
        self
    }

    pub fn with_density(mut self, percent: u32) -> Self {
        self.density = percent;
        self
    }

    pub fn with_integer(mut self, integer: bool) -> Self {
        self.integer = integer;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_size(self.size)?;
        check_range("weight", self.min_weight, self.max_weight)?;
        if self.density > 100 {
            return Err(ValidationError::out_of_range(
                "density",
                self.density,
                "0..=100",
            ));
        }
        Ok(())
    }
}

/// Configuration for [`random_cap`](super::random_cap).
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CapGenConfig {
    /// Number of workers.
    pub size: usize,

    pub min_cost: f64,
    pub max_cost: f64,

    pub min_salary: f64,
    pub max_salary: f64,

    /// Round values down to whole numbers.
    pub integer: bool,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for CapGenConfig {
    fn default() -> Self {
        Self {
            size: 5,
            min_cost: 1.0,
            max_cost: 100.0,
            min_salary: 1.0,
            max_salary: 100.0,
            integer: true,
            seed: None,
        }
    }
}

impl CapGenConfig {
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    pub fn with_cost_range(mut self, min: f64, max: f64) -> Self {
        self.min_cost = min;
        self.max_cost = max;
        self
    }

    pub fn with_salary_range(mut self, min: f64, max: f64) -> Self {
        self.min_salary = min;
        self.max_salary = max;
        self
    }

    pub fn with_integer(mut self, integer: bool) -> Self {
        self.integer = integer;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_size(self.size)?;
        check_range("cost", self.min_cost, self.max_cost)?;
        check_range("salary", self.min_salary, self.max_salary)
    }
}

/// Configuration for [`random_knapsack`](super::random_knapsack).
///
/// Item values are drawn per unit of weight, so `cost = unit_cost * weight`.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KnapsackGenConfig {
    /// Knapsack capacity.
    pub max_weight: u32,

    /// Number of items drawn before equal weights are merged.
    pub items: usize,

    pub min_item_weight: u32,

    /// Heaviest item weight, at most `max_weight`.
    pub max_item_weight: u32,

    pub min_unit_cost: f64,
    pub max_unit_cost: f64,

    pub min_count: u32,
    pub max_count: u32,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for KnapsackGenConfig {
    fn default() -> Self {
        Self {
            max_weight: 10,
            items: 5,
            min_item_weight: 1,
            max_item_weight: 5,
            min_unit_cost: 1.0,
            max_unit_cost: 10.0,
            min_count: 1,
            max_count: 3,
            seed: None,
        }
    }
}

impl KnapsackGenConfig {
    pub fn with_max_weight(mut self, max_weight: u32) -> Self {
        self.max_weight = max_weight;
        self
    }

    pub fn with_items(mut self, items: usize) -> Self {
        self.items = items;
        self
    }

    pub fn with_item_weight_range(mut self, min: u32, max: u32) -> Self {
        self.min_item_weight = min;
        self.max_item_weight = max;
        self
    }

    pub fn with_unit_cost_range(mut self, min: f64, max: f64) -> Self {
        self.min_unit_cost = min;
        self.max_unit_cost = max;
        self
    }

    pub fn with_count_range(mut self, min: u32, max: u32) -> Self {
        self.min_count = min;
        self.max_count = max;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.max_weight < 1 {
            return Err(ValidationError::out_of_range(
                "max_weight",
                self.max_weight,
                ">= 1",
            ));
        }
        if self.items < 1 {
            return Err(ValidationError::out_of_range("items", self.items as f64, ">= 1"));
        }
        if self.min_item_weight < 1 {
            return Err(ValidationError::out_of_range(
                "min_item_weight",
                self.min_item_weight,
                ">= 1",
            ));
        }
        if self.max_item_weight < self.min_item_weight || self.max_item_weight > self.max_weight {
            return Err(ValidationError::out_of_range(
                "max_item_weight",
                self.max_item_weight,
                format!("{}..={}", self.min_item_weight, self.max_weight),
            ));
        }
        check_range("unit_cost", self.min_unit_cost, self.max_unit_cost)?;
        if self.min_count < 1 {
            return Err(ValidationError::out_of_range(
                "min_count",
                self.min_count,
                ">= 1",
            ));
        }
        if self.max_count < self.min_count {
            return Err(ValidationError::out_of_range(
                "max_count",
                self.max_count,
                format!(">= min_count ({})", self.min_count),
            ));
        }
        Ok(())
    }
}
