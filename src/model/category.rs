//! Travel categories and their quick-select defaults.
//!
//! The category set is open ended: the four known kinds of trip get default
//! titles and images for quick entry, and anything else is carried through as
//! free text.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Image shown for an expense when no other image applies.
pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/150";

const SONGTHAEW_IMAGE: &str = "https://img.icons8.com/color/96/bus.png";
const MOTO_IMAGE: &str = "https://img.icons8.com/color/96/motorcycle.png";
const GRAB_IMAGE: &str = "https://img.icons8.com/color/96/taxi.png";
const OTHER_IMAGE: &str = "https://img.icons8.com/color/96/general-ledger.png";

/// The kind of trip an expense was for.
///
/// Serializes to the plain tag used in the store (`songthaew`, `moto`, `grab`,
/// `other`), and any unrecognized tag round-trips unchanged as `Custom`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Category {
    /// Shared pickup-truck taxi.
    Songthaew,
    /// Motorbike taxi.
    Moto,
    /// Ride hailing.
    Grab,
    #[default]
    Other,
    /// A tag outside the known set, kept as entered.
    Custom(String),
}

impl Category {
    /// The default title a quick-select entry gets for this category.
    pub fn default_title(&self) -> &str {
        match self {
            Category::Songthaew => "Songthaew",
            Category::Moto => "Motorbike taxi",
            Category::Grab => "Grab",
            Category::Other => "Other",
            Category::Custom(tag) => tag,
        }
    }

    /// The default image a quick-select entry gets for this category, if the
    /// category is one of the known set.
    pub fn default_image_url(&self) -> Option<&'static str> {
        match self {
            Category::Songthaew => Some(SONGTHAEW_IMAGE),
            Category::Moto => Some(MOTO_IMAGE),
            Category::Grab => Some(GRAB_IMAGE),
            Category::Other => Some(OTHER_IMAGE),
            Category::Custom(_) => None,
        }
    }

    /// The tag written to the store.
    pub fn tag(&self) -> &str {
        match self {
            Category::Songthaew => "songthaew",
            Category::Moto => "moto",
            Category::Grab => "grab",
            Category::Other => "other",
            Category::Custom(tag) => tag,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

impl FromStr for Category {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "songthaew" => Category::Songthaew,
            "moto" => Category::Moto,
            "grab" => Category::Grab,
            "other" => Category::Other,
            tag => Category::Custom(tag.to_string()),
        })
    }
}

impl Serialize for Category {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.tag())
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        // FromStr is infallible
        Ok(s.parse().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_tags_round_trip() {
        for tag in ["songthaew", "moto", "grab", "other"] {
            let category: Category = tag.parse().unwrap();
            assert_eq!(category.tag(), tag);
            let json = serde_json::to_string(&category).unwrap();
            let back: Category = serde_json::from_str(&json).unwrap();
            assert_eq!(back, category);
        }
    }

    #[test]
    fn test_free_text_round_trips() {
        let category: Category = "boat".parse().unwrap();
        assert_eq!(category, Category::Custom("boat".to_string()));
        let json = serde_json::to_string(&category).unwrap();
        assert_eq!(json, "\"boat\"");
        let back: Category = serde_json::from_str(&json).unwrap();
        assert_eq!(back, category);
    }

    #[test]
    fn test_known_categories_have_image_defaults() {
        assert!(Category::Songthaew.default_image_url().is_some());
        assert!(Category::Moto.default_image_url().is_some());
        assert!(Category::Grab.default_image_url().is_some());
        assert!(Category::Other.default_image_url().is_some());
        assert!(Category::Custom("boat".to_string())
            .default_image_url()
            .is_none());
    }

    #[test]
    fn test_custom_default_title_is_the_tag() {
        let category = Category::Custom("boat".to_string());
        assert_eq!(category.default_title(), "boat");
    }

    #[test]
    fn test_default_is_other() {
        assert_eq!(Category::default(), Category::Other);
    }
}
