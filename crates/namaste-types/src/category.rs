//! Traditional-medicine system categories.
//!
//! This module provides the `Category` enum tagging which traditional-medicine
//! subsystem a code belongs to.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Traditional-medicine system a NAMASTE code belongs to.
///
/// The known AYUSH systems have their own variants. Any other tag found in
/// source data is preserved verbatim in [`Category::Other`].
///
/// # Examples
///
/// ```
/// use namaste_types::Category;
///
/// let category: Category = "Ayurveda".parse().unwrap();
/// assert_eq!(category, Category::Ayurveda);
/// assert_eq!(category.as_str(), "ayurveda");
///
/// let custom: Category = "sys-A".parse().unwrap();
/// assert_eq!(custom, Category::Other("sys-A".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "String", into = "String")
)]
pub enum Category {
    /// Ayurveda.
    Ayurveda,
    /// Siddha.
    Siddha,
    /// Unani.
    Unani,
    /// Homeopathy.
    Homeopathy,
    /// Yoga.
    Yoga,
    /// Naturopathy.
    Naturopathy,
    /// Any other system tag, kept as it appeared in the source data.
    Other(String),
}

impl Category {
    /// Wire names of the known systems, in declaration order.
    pub const KNOWN: &'static [&'static str] = &[
        "ayurveda",
        "siddha",
        "unani",
        "homeopathy",
        "yoga",
        "naturopathy",
    ];

    /// Parses a category tag. Matching of known systems is case-insensitive.
    pub fn from_tag(tag: &str) -> Self {
        let tag = tag.trim();
        match tag.to_ascii_lowercase().as_str() {
            "ayurveda" => Self::Ayurveda,
            "siddha" => Self::Siddha,
            "unani" => Self::Unani,
            "homeopathy" => Self::Homeopathy,
            "yoga" => Self::Yoga,
            "naturopathy" => Self::Naturopathy,
            _ => Self::Other(tag.to_string()),
        }
    }

    /// Returns the wire name of this category.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Ayurveda => "ayurveda",
            Self::Siddha => "siddha",
            Self::Unani => "unani",
            Self::Homeopathy => "homeopathy",
            Self::Yoga => "yoga",
            Self::Naturopathy => "naturopathy",
            Self::Other(tag) => tag,
        }
    }
}

impl FromStr for Category {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_tag(s))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for Category {
    fn from(tag: String) -> Self {
        Self::from_tag(&tag)
    }
}

impl From<&str> for Category {
    fn from(tag: &str) -> Self {
        Self::from_tag(tag)
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        match category {
            Category::Other(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_categories_roundtrip() {
        for name in Category::KNOWN {
            let category = Category::from_tag(name);
            assert!(!matches!(category, Category::Other(_)));
            assert_eq!(category.as_str(), *name);
        }
    }

    #[test]
    fn test_case_insensitive_parse() {
        assert_eq!(Category::from_tag("SIDDHA"), Category::Siddha);
        assert_eq!(Category::from_tag("  Unani "), Category::Unani);
    }

    #[test]
    fn test_other_preserves_tag() {
        let category = Category::from_tag("sys-B");
        assert!(matches!(category, Category::Other(_)));
        assert_eq!(category.to_string(), "sys-B");
        assert_eq!(String::from(category), "sys-B");
    }
}
