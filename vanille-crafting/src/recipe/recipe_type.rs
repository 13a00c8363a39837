use std::{fmt, str::FromStr};

use vanille_core::Identifier;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CraftingType {
    Shaped,
    Shapeless,
}

impl CraftingType {
    pub const fn path(&self) -> &'static str {
        match self {
            Self::Shaped => "crafting_shaped",
            Self::Shapeless => "crafting_shapeless",
        }
    }

    /// The recipe type key the host dispatches on, e.g. `minecraft:crafting_shaped`.
    pub fn identifier(&self) -> Identifier {
        Identifier::vanilla(self.path())
    }
}

impl FromStr for CraftingType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim_start_matches("minecraft:") {
            "crafting_shaped" => Ok(Self::Shaped),
            "crafting_shapeless" => Ok(Self::Shapeless),
            _ => Err(format!("Could not find recipe with id: \"{s}\"")),
        }
    }
}

impl fmt::Display for CraftingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.identifier())
    }
}
