use itertools::Itertools;
use vanille_core::{Identifier, ItemStack};

use super::{is_empty_slot, validate_input};
use crate::CraftingError;

/// A recipe that only cares about which ingredients are in the grid, not where.
///
/// Duplicate ingredients are meaningful: two dyes require two dye items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapelessRecipe {
    ingredients: Vec<Identifier>,
    result: ItemStack,
}

impl ShapelessRecipe {
    pub fn new(ingredients: Vec<Identifier>, result: ItemStack) -> Self {
        Self {
            ingredients,
            result,
        }
    }

    pub fn ingredients(&self) -> &[Identifier] {
        &self.ingredients
    }

    pub fn result(&self) -> &ItemStack {
        &self.result
    }

    pub fn matches(&self, input: &[Option<ItemStack>]) -> Result<bool, CraftingError> {
        validate_input(input)?;

        let materials: Vec<&Identifier> = input
            .iter()
            .map(Option::as_ref)
            .filter(|item| !is_empty_slot(*item))
            .flatten()
            .map(|item| &item.material)
            .collect();

        if materials.len() != self.ingredients.len() {
            return Ok(false);
        }

        Ok(materials.into_iter().counts() == self.ingredients.iter().counts())
    }
}

#[cfg(test)]
mod test {
    use itertools::Itertools;
    use vanille_core::{Identifier, ItemStack};

    use super::ShapelessRecipe;
    use crate::{recipe::test_input, CraftingError};

    fn recipe(paths: &[&str]) -> ShapelessRecipe {
        ShapelessRecipe::new(
            paths.iter().map(|path| Identifier::vanilla(path)).collect(),
            ItemStack::vanilla("result"),
        )
    }

    #[test]
    fn duplicate_ingredients() {
        let recipe = recipe(&["blue_dye", "blue_dye", "water_bucket"]);
        assert!(recipe
            .matches(&test_input(&[
                (0, "blue_dye"),
                (4, "water_bucket"),
                (8, "blue_dye")
            ]))
            .unwrap());
        assert!(!recipe
            .matches(&test_input(&[(0, "blue_dye"), (4, "water_bucket")]))
            .unwrap());
        // right count, wrong multiplicities
        assert!(!recipe
            .matches(&test_input(&[
                (0, "blue_dye"),
                (4, "water_bucket"),
                (8, "water_bucket")
            ]))
            .unwrap());
    }

    #[test]
    fn extra_items_fail() {
        let recipe = recipe(&["wheat"]);
        assert!(recipe.matches(&test_input(&[(6, "wheat")])).unwrap());
        assert!(!recipe
            .matches(&test_input(&[(6, "wheat"), (7, "wheat")]))
            .unwrap());
        assert!(!recipe.matches(&test_input(&[])).unwrap());
    }

    #[test]
    fn empty_slots_are_ignored() {
        let recipe = recipe(&["sugar", "egg"]);
        let mut input = test_input(&[(1, "egg"), (2, "sugar")]);
        input[0] = Some(ItemStack::air());
        input[3] = Some(ItemStack::vanilla("pumpkin").with_count(0));
        assert!(recipe.matches(&input).unwrap());
    }

    #[test]
    fn order_independent() {
        let recipe = recipe(&["red_dye", "yellow_dye", "red_dye"]);
        let input = test_input(&[(0, "red_dye"), (3, "yellow_dye"), (5, "red_dye")]);
        for permutation in input.iter().cloned().permutations(input.len()).take(2000) {
            assert!(recipe.matches(&permutation).unwrap());
        }
        let mut reversed = input.clone();
        reversed.reverse();
        assert!(recipe.matches(&reversed).unwrap());
    }

    #[test]
    fn invalid_input_size() {
        assert_eq!(
            recipe(&["stick"]).matches(&vec![None; 8]),
            Err(CraftingError::InvalidInputSize(8))
        );
    }
}
