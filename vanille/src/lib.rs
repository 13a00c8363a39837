//! Vanille brings vanilla crafting to servers that only ship the game protocol.
//!
//! The host owns the recipe list and the crafting grid. Vanille decides which recipe,
//! if any, the grid satisfies and hands back the item it produces.

use std::path::Path;

use vanille_config::{ConfigError, LoadTomlConfiguration, VanilleConfiguration};
use vanille_core::ItemStack;
use vanille_crafting::{
    check_if_matches_crafting, find_matching_recipe, flatten_3x3, CraftingError, Recipe,
    GRID_SIZE,
};

pub mod logging;

const CARGO_PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Vanille {
    config: VanilleConfiguration,
}

impl Vanille {
    pub fn new(config: VanilleConfiguration) -> Self {
        Self { config }
    }

    /// Loads (or creates) `config.toml` inside `data_folder` and sets up logging.
    pub fn on_load(data_folder: &Path) -> Result<Self, ConfigError> {
        let config = VanilleConfiguration::load(data_folder)?;
        logging::init_logger(&config.logging);

        log::info!("Loading Vanille {CARGO_PKG_VERSION} from {:?}", data_folder);
        if !config.crafting.enabled {
            log::warn!("Crafting is disabled in the configuration, no recipe will match");
        }
        log::debug!("Loaded config {:#?}", config);

        Ok(Self::new(config))
    }

    pub fn on_unload(&self, data_folder: &Path) -> Result<(), ConfigError> {
        self.config.save(data_folder)?;
        log::info!("Vanille unloaded");
        Ok(())
    }

    pub fn config(&self) -> &VanilleConfiguration {
        &self.config
    }

    /// Finds the first recipe in `recipes` the grid satisfies and returns its result.
    pub fn craft(
        &self,
        recipes: &[Recipe],
        grid: [[Option<ItemStack>; GRID_SIZE]; GRID_SIZE],
    ) -> Result<Option<ItemStack>, CraftingError> {
        if !self.config.crafting.enabled {
            return Ok(None);
        }

        let input = flatten_3x3(grid);
        let recipe = if self.config.crafting.use_parallel_lookup(recipes.len()) {
            check_if_matches_crafting(recipes, &input)?
        } else {
            find_matching_recipe(recipes, &input)?
        };
        Ok(recipe.map(|recipe| recipe.result().clone()))
    }
}
