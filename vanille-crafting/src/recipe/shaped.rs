use std::collections::HashMap;

use vanille_core::{Identifier, ItemStack, Matrix};

use super::{is_empty_slot, validate_input, GRID_SIZE};
use crate::CraftingError;

/// Maps pattern characters to the material they stand for.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeKeys(HashMap<char, Identifier>);

impl RecipeKeys {
    pub fn get(&self, symbol: char) -> Option<&Identifier> {
        self.0.get(&symbol)
    }

    pub fn contains(&self, symbol: char) -> bool {
        self.0.contains_key(&symbol)
    }
}

impl From<HashMap<char, Identifier>> for RecipeKeys {
    fn from(value: HashMap<char, Identifier>) -> Self {
        Self(value)
    }
}

impl FromIterator<(char, Identifier)> for RecipeKeys {
    fn from_iter<I: IntoIterator<Item = (char, Identifier)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// A recipe whose ingredients have to be laid out in a fixed shape.
///
/// The pattern may be smaller than the crafting grid, in which case it can sit at any
/// offset as long as every slot outside of it stays empty. `None` cells in the pattern
/// must be empty in the grid as well.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapedRecipe {
    keys: RecipeKeys,
    pattern: Matrix<Option<char>>,
    result: ItemStack,
    mirrored: bool,
}

impl ShapedRecipe {
    pub fn new(
        keys: RecipeKeys,
        pattern: Matrix<Option<char>>,
        result: ItemStack,
        mirrored: bool,
    ) -> Result<Self, CraftingError> {
        check_pattern_size(&pattern)?;
        Ok(Self {
            keys,
            pattern,
            result,
            mirrored,
        })
    }

    /// Builds the pattern from text rows as they appear in datapacks, `' '` being an
    /// empty cell. Shorter rows are padded with empty cells.
    pub fn from_rows(
        rows: &[&str],
        keys: RecipeKeys,
        result: ItemStack,
        mirrored: bool,
    ) -> Result<Self, CraftingError> {
        let width = rows
            .iter()
            .map(|row| row.chars().count())
            .max()
            .unwrap_or(0);
        if rows.is_empty() || width == 0 {
            return Err(CraftingError::InvalidPattern(
                "pattern has no rows or columns".to_string(),
            ));
        }
        if rows.len() > GRID_SIZE || width > GRID_SIZE {
            return Err(CraftingError::InvalidPattern(format!(
                "pattern is {width}x{} but the crafting grid is {GRID_SIZE}x{GRID_SIZE}",
                rows.len()
            )));
        }

        let pattern = Matrix::from_fn(width, rows.len(), |x, y| {
            rows[y].chars().nth(x).filter(|symbol| *symbol != ' ')
        })?;
        Self::new(keys, pattern, result, mirrored)
    }

    /// Reports the first pattern character that has no ingredient mapping.
    pub fn validate(&self) -> Result<(), CraftingError> {
        match self
            .pattern
            .iter()
            .find_map(|(_, _, symbol)| symbol.filter(|symbol| !self.keys.contains(*symbol)))
        {
            Some(symbol) => Err(CraftingError::UndefinedSymbol(symbol)),
            None => Ok(()),
        }
    }

    pub fn keys(&self) -> &RecipeKeys {
        &self.keys
    }

    pub fn pattern(&self) -> &Matrix<Option<char>> {
        &self.pattern
    }

    pub fn result(&self) -> &ItemStack {
        &self.result
    }

    pub const fn mirrored(&self) -> bool {
        self.mirrored
    }

    /// Tries the pattern at every offset it fits in, top to bottom then left to right,
    /// checking the mirrored orientation right after the normal one when enabled.
    pub fn matches(&self, input: &[Option<ItemStack>]) -> Result<bool, CraftingError> {
        validate_input(input)?;
        check_pattern_size(&self.pattern)?;
        self.validate()?;

        let grid = Matrix::from_fn(GRID_SIZE, GRID_SIZE, |x, y| {
            input[y * GRID_SIZE + x].as_ref()
        })?;

        for offset_y in 0..=GRID_SIZE - self.pattern.height() {
            for offset_x in 0..=GRID_SIZE - self.pattern.width() {
                if self.matches_at(&grid, offset_x, offset_y, false)?
                    || (self.mirrored && self.matches_at(&grid, offset_x, offset_y, true)?)
                {
                    return Ok(true);
                }
            }
        }
        Ok(false)
    }

    fn matches_at(
        &self,
        grid: &Matrix<Option<&ItemStack>>,
        offset_x: usize,
        offset_y: usize,
        mirror: bool,
    ) -> Result<bool, CraftingError> {
        if !self.pattern_matches(grid, offset_x, offset_y, mirror)?
            || !self.non_pattern_slots_empty(grid, offset_x, offset_y)
        {
            return Ok(false);
        }
        log::trace!(
            "Shaped recipe for {} matched at offset ({offset_x}, {offset_y}){}",
            self.result.material,
            if mirror { " mirrored" } else { "" }
        );
        Ok(true)
    }

    fn pattern_matches(
        &self,
        grid: &Matrix<Option<&ItemStack>>,
        offset_x: usize,
        offset_y: usize,
        mirror: bool,
    ) -> Result<bool, CraftingError> {
        let width = self.pattern.width();
        for y in 0..self.pattern.height() {
            for x in 0..width {
                let pattern_x = if mirror { width - 1 - x } else { x };
                let expected = *self.pattern.get(pattern_x, y)?;
                let actual = *grid.get(offset_x + x, offset_y + y)?;
                if !self.slot_matches(expected, actual)? {
                    return Ok(false);
                }
            }
        }
        Ok(true)
    }

    fn non_pattern_slots_empty(
        &self,
        grid: &Matrix<Option<&ItemStack>>,
        offset_x: usize,
        offset_y: usize,
    ) -> bool {
        let (width, height) = (self.pattern.width(), self.pattern.height());
        grid.all(|x, y, item| {
            let inside = (offset_x..offset_x + width).contains(&x)
                && (offset_y..offset_y + height).contains(&y);
            inside || is_empty_slot(*item)
        })
    }

    fn slot_matches(
        &self,
        expected: Option<char>,
        actual: Option<&ItemStack>,
    ) -> Result<bool, CraftingError> {
        let Some(symbol) = expected else {
            return Ok(is_empty_slot(actual));
        };
        let material = self
            .keys
            .get(symbol)
            .ok_or(CraftingError::UndefinedSymbol(symbol))?;
        Ok(actual.is_some_and(|item| !item.is_empty() && item.material == *material))
    }
}

fn check_pattern_size(pattern: &Matrix<Option<char>>) -> Result<(), CraftingError> {
    if pattern.width() > GRID_SIZE || pattern.height() > GRID_SIZE {
        return Err(CraftingError::InvalidPattern(format!(
            "pattern is {}x{} but the crafting grid is {GRID_SIZE}x{GRID_SIZE}",
            pattern.width(),
            pattern.height()
        )));
    }
    Ok(())
}
