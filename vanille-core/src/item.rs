use serde::{Deserialize, Serialize};

use crate::Identifier;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemStack {
    pub material: Identifier,
    pub item_count: u32,
    // TODO: Add Item Components once recipes can require them
}

impl ItemStack {
    pub fn new(material: Identifier, item_count: u32) -> Self {
        Self {
            material,
            item_count,
        }
    }

    /// A single item of a vanilla material, e.g. `ItemStack::vanilla("stick")`.
    pub fn vanilla(path: &str) -> Self {
        Self::new(Identifier::vanilla(path), 1)
    }

    pub fn air() -> Self {
        Self::new(Identifier::vanilla("air"), 0)
    }

    #[must_use]
    pub fn with_count(mut self, item_count: u32) -> Self {
        self.item_count = item_count;
        self
    }

    pub fn is_air(&self) -> bool {
        self.material.is_vanilla() && self.material.path == "air"
    }

    /// Air and zero-sized stacks occupy a slot without holding anything.
    pub fn is_empty(&self) -> bool {
        self.is_air() || self.item_count == 0
    }
}

#[cfg(test)]
mod test {
    use super::ItemStack;
    use crate::Identifier;

    #[test]
    fn emptiness() {
        assert!(ItemStack::air().is_empty());
        assert!(ItemStack::vanilla("air").is_empty());
        assert!(ItemStack::vanilla("stick").with_count(0).is_empty());
        assert!(!ItemStack::vanilla("stick").is_empty());
        // only the vanilla namespace has air
        assert!(!ItemStack::new(Identifier::new("vanille", "air"), 1).is_empty());
    }
}
