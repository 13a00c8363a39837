use rayon::prelude::*;
use vanille_core::ItemStack;

use crate::{
    recipe::{validate_input, Recipe, GRID_SIZE},
    CraftingError,
};

/// Turns the host's `[row][column]` crafting grid into row-major slots.
pub fn flatten_3x3(input: [[Option<ItemStack>; GRID_SIZE]; GRID_SIZE]) -> Vec<Option<ItemStack>> {
    input.into_iter().flatten().collect()
}

#[inline(always)]
fn match_recipe<'a>(
    recipe: &'a Recipe,
    input: &[Option<ItemStack>],
) -> Option<Result<&'a Recipe, CraftingError>> {
    recipe
        .matches(input)
        .map(|matched| matched.then_some(recipe))
        .transpose()
}

/// Returns the first recipe in `recipes` matching `input`, checking them in parallel.
///
/// "First" is slice order, so the outcome is the same as [`find_matching_recipe`].
/// A broken recipe ordered before the match surfaces as an error.
pub fn check_if_matches_crafting<'a>(
    recipes: &'a [Recipe],
    input: &[Option<ItemStack>],
) -> Result<Option<&'a Recipe>, CraftingError> {
    validate_input(input)?;
    let found = recipes
        .par_iter()
        .find_map_first(|recipe| match_recipe(recipe, input))
        .transpose()?;
    if let Some(recipe) = found {
        log::debug!(
            "Crafting input matched {} recipe for {}",
            recipe.identifier(),
            recipe.result().material
        );
    }
    Ok(found)
}

/// Sequential counterpart of [`check_if_matches_crafting`].
pub fn find_matching_recipe<'a>(
    recipes: &'a [Recipe],
    input: &[Option<ItemStack>],
) -> Result<Option<&'a Recipe>, CraftingError> {
    validate_input(input)?;
    recipes
        .iter()
        .find_map(|recipe| match_recipe(recipe, input))
        .transpose()
}

pub fn craft(
    recipes: &[Recipe],
    input: &[Option<ItemStack>],
) -> Result<Option<ItemStack>, CraftingError> {
    Ok(check_if_matches_crafting(recipes, input)?.map(|recipe| recipe.result().clone()))
}
