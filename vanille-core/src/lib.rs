pub mod identifier;
pub mod item;
pub mod math;

pub use identifier::Identifier;
pub use item::ItemStack;
pub use math::matrix::{Matrix, MatrixError};
