// Input arrays
// Random generation with bounds, or a literal list of values

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::sorting::SortError;

/// Where the array to sort comes from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum ArraySource {
    /// `size` values drawn uniformly from `[min, max]`
    Random {
        size: usize,
        min: i64,
        max: i64,
        /// Fixed seed for a reproducible array
        #[serde(default, skip_serializing_if = "Option::is_none")]
        seed: Option<u64>,
    },

    /// Exactly these values
    Literal { values: Vec<i64> },
}

impl Default for ArraySource {
    fn default() -> Self {
        ArraySource::Random {
            size: 8,
            min: 1,
            max: 20,
            seed: None,
        }
    }
}

impl ArraySource {
    /// Produce the concrete array
    pub fn resolve(&self) -> Result<Vec<i64>, SortError> {
        match self {
            ArraySource::Random {
                size,
                min,
                max,
                seed,
            } => generate_random(*size, *min, *max, *seed),
            ArraySource::Literal { values } => {
                if values.is_empty() {
                    return Err(SortError::InvalidInput("no values given".to_string()));
                }
                Ok(values.clone())
            }
        }
    }
}

/// Draw `size` values from `[min, max]`
pub fn generate_random(
    size: usize,
    min: i64,
    max: i64,
    seed: Option<u64>,
) -> Result<Vec<i64>, SortError> {
    if size == 0 {
        return Err(SortError::InvalidInput("array size must be at least 1".to_string()));
    }
    if min > max {
        return Err(SortError::InvalidInput(format!(
            "value range is empty: min {} > max {}",
            min, max
        )));
    }

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    Ok((0..size).map(|_| rng.gen_range(min..=max)).collect())
}

/// Parse a comma or whitespace separated list such as `"5, 1, 4"`
pub fn parse_values(text: &str) -> Result<Vec<i64>, SortError> {
    let values = text
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| {
            token.parse::<i64>().map_err(|_| {
                SortError::InvalidInput(format!("'{}' is not an integer", token))
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    if values.is_empty() {
        return Err(SortError::InvalidInput("no values given".to_string()));
    }

    Ok(values)
}
