//! Newtype IDs for type-safe identifiers.
//!
//! Categories and products are both keyed by opaque strings; the newtypes keep
//! a product id from being passed where a category id is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro to generate newtype ID structs.
macro_rules! define_id {
    ($name:ident) => {
        /// An opaque, immutable identifier.
        #[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create an ID from an existing string.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Generate a fresh unique ID.
            pub fn generate() -> Self {
                Self(generate_id())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_inner(self) -> String {
                self.0
            }

            /// Whether the ID is empty or whitespace only.
            pub fn is_blank(&self) -> bool {
                self.0.trim().is_empty()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(CategoryId);
define_id!(ProductId);

/// ULIDs sort by creation time and never collide in practice.
fn generate_id() -> String {
    ulid::Ulid::new().to_string().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_creation() {
        let id = CategoryId::new("cat-1");
        assert_eq!(id.as_str(), "cat-1");
        assert!(!id.is_blank());
    }

    #[test]
    fn test_id_generation() {
        let id1 = CategoryId::generate();
        let id2 = CategoryId::generate();
        assert_ne!(id1, id2);
        assert_eq!(id1.as_str().len(), 26);
    }

    #[test]
    fn test_blank_id() {
        assert!(CategoryId::new("").is_blank());
        assert!(CategoryId::new("   ").is_blank());
    }

    #[test]
    fn test_id_serializes_as_plain_string() {
        let id = ProductId::new("p-9");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"p-9\"");
        let back: ProductId = serde_json::from_str("\"p-9\"").unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_id_display() {
        let id = CategoryId::new("tops");
        assert_eq!(format!("{}", id), "tops");
    }
}
