use std::{fmt, str::FromStr};

use serde::{de::Visitor, Deserialize, Deserializer, Serialize, Serializer};

pub const VANILLA_NAMESPACE: &str = "minecraft";

/// A namespaced key, written as `namespace:path`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Identifier {
    pub namespace: String,
    pub path: String,
}

impl Identifier {
    pub fn new(namespace: &str, path: &str) -> Self {
        Self {
            namespace: namespace.to_string(),
            path: path.to_string(),
        }
    }

    pub fn vanilla(path: &str) -> Self {
        Self::new(VANILLA_NAMESPACE, path)
    }

    pub fn is_vanilla(&self) -> bool {
        self.namespace == VANILLA_NAMESPACE
    }
}

impl FromStr for Identifier {
    type Err = String;

    /// A missing namespace means `minecraft`, the same way vanilla resolves item ids.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (namespace, path) = s.split_once(':').unwrap_or((VANILLA_NAMESPACE, s));
        if namespace.is_empty() || path.is_empty() {
            return Err(format!("Invalid identifier: \"{s}\""));
        }
        Ok(Self::new(namespace, path))
    }
}

impl Serialize for Identifier {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Identifier {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct IdentifierVisitor;

        impl Visitor<'_> for IdentifierVisitor {
            type Value = Identifier;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a valid Identifier (namespace:path)")
            }

            fn visit_string<E>(self, v: String) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                self.visit_str(&v)
            }

            fn visit_str<E>(self, identifier: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                identifier.parse().map_err(serde::de::Error::custom)
            }
        }
        deserializer.deserialize_str(IdentifierVisitor)
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.path)
    }
}

#[cfg(test)]
mod test {
    use super::Identifier;

    #[test]
    fn parse_namespaced() {
        let id: Identifier = "vanille:dye_mix".parse().unwrap();
        assert_eq!(id.namespace, "vanille");
        assert_eq!(id.path, "dye_mix");
        assert!(!id.is_vanilla());
    }

    #[test]
    fn parse_defaults_to_minecraft() {
        let id: Identifier = "stick".parse().unwrap();
        assert_eq!(id, Identifier::vanilla("stick"));
        assert_eq!(id.to_string(), "minecraft:stick");
    }

    #[test]
    fn parse_rejects_empty_parts() {
        assert!("minecraft:".parse::<Identifier>().is_err());
        assert!(":stick".parse::<Identifier>().is_err());
        assert!("".parse::<Identifier>().is_err());
    }

    #[test]
    fn serde_as_string() {
        let id = Identifier::vanilla("crafting_shaped");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"minecraft:crafting_shaped\"");
        let back: Identifier = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
        assert!(serde_json::from_str::<Identifier>("\"minecraft:\"").is_err());
    }
}
