use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct CraftingConfig {
    /// When disabled every craft attempt yields nothing.
    pub enabled: bool,
    /// Recipe lists at least this long are searched on the rayon pool.
    pub parallel_threshold: usize,
}

impl Default for CraftingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            parallel_threshold: 64,
        }
    }
}

impl CraftingConfig {
    pub fn use_parallel_lookup(&self, recipe_count: usize) -> bool {
        recipe_count >= self.parallel_threshold
    }
}
