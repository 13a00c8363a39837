//! Crafting recipes and the matchers deciding whether a crafting grid satisfies them.
//!
//! The input is always a crafting table snapshot of [`GRID_SLOTS`] slots in row-major
//! order (left to right, top to bottom):
//!
//! ```text
//! [0] [1] [2]
//! [3] [4] [5]
//! [6] [7] [8]
//! ```
//!
//! A slot is empty when it is `None`, holds air, or holds a zero-sized stack.

mod recipe_type;
mod shaped;
mod shapeless;

pub use recipe_type::CraftingType;
pub use shaped::{RecipeKeys, ShapedRecipe};
pub use shapeless::ShapelessRecipe;

use vanille_core::{Identifier, ItemStack};

use crate::CraftingError;

/// Width and height of the crafting table grid.
pub const GRID_SIZE: usize = 3;
pub const GRID_SLOTS: usize = GRID_SIZE * GRID_SIZE;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recipe {
    Shaped(ShapedRecipe),
    Shapeless(ShapelessRecipe),
}

impl Recipe {
    /// Checks the 9 slot crafting input against this recipe.
    ///
    /// Not matching is `Ok(false)`. Errors are reserved for malformed input or a
    /// broken recipe definition.
    pub fn matches(&self, input: &[Option<ItemStack>]) -> Result<bool, CraftingError> {
        match self {
            Self::Shaped(recipe) => recipe.matches(input),
            Self::Shapeless(recipe) => recipe.matches(input),
        }
    }

    pub fn result(&self) -> &ItemStack {
        match self {
            Self::Shaped(recipe) => recipe.result(),
            Self::Shapeless(recipe) => recipe.result(),
        }
    }

    pub const fn recipe_type(&self) -> CraftingType {
        match self {
            Self::Shaped(_) => CraftingType::Shaped,
            Self::Shapeless(_) => CraftingType::Shapeless,
        }
    }

    pub fn identifier(&self) -> Identifier {
        self.recipe_type().identifier()
    }

    pub fn is_empty_slot(item: Option<&ItemStack>) -> bool {
        is_empty_slot(item)
    }
}

impl From<ShapedRecipe> for Recipe {
    fn from(value: ShapedRecipe) -> Self {
        Self::Shaped(value)
    }
}

impl From<ShapelessRecipe> for Recipe {
    fn from(value: ShapelessRecipe) -> Self {
        Self::Shapeless(value)
    }
}

#[inline]
pub fn is_empty_slot(item: Option<&ItemStack>) -> bool {
    item.map_or(true, ItemStack::is_empty)
}

pub(crate) fn validate_input(input: &[Option<ItemStack>]) -> Result<(), CraftingError> {
    if input.len() != GRID_SLOTS {
        return Err(CraftingError::InvalidInputSize(input.len()));
    }
    Ok(())
}

/// Builds a crafting input from `(slot, item path)` pairs, every other slot empty.
#[cfg(test)]
pub(crate) fn test_input(slots: &[(usize, &str)]) -> Vec<Option<ItemStack>> {
    let mut input = vec![None; GRID_SLOTS];
    for (slot, path) in slots {
        input[*slot] = Some(ItemStack::vanilla(path));
    }
    input
}
