mod crafting;
mod error;
pub mod recipe;

pub use crafting::{check_if_matches_crafting, craft, find_matching_recipe, flatten_3x3};
pub use error::CraftingError;
pub use recipe::{
    is_empty_slot, CraftingType, Recipe, RecipeKeys, ShapedRecipe, ShapelessRecipe, GRID_SIZE,
    GRID_SLOTS,
};
