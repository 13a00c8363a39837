use thiserror::Error;
use vanille_core::MatrixError;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CraftingError {
    #[error("Crafting input must contain exactly 9 slots, got: {0}")]
    InvalidInputSize(usize),
    #[error("No ingredient mapping found for pattern character: '{0}'")]
    UndefinedSymbol(char),
    #[error("Invalid recipe pattern: {0}")]
    InvalidPattern(String),
    #[error(transparent)]
    Matrix(#[from] MatrixError),
}
