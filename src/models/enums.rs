//! Closed label sets used by the resource catalog

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use utoipa::ToSchema;

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

/// Subject area of a resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum Category {
    Programming,
    Design,
    Business,
    #[serde(rename = "Data Science")]
    DataScience,
    Mathematics,
    #[serde(rename = "Language Learning")]
    LanguageLearning,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Programming,
        Category::Design,
        Category::Business,
        Category::DataScience,
        Category::Mathematics,
        Category::LanguageLearning,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Programming => "Programming",
            Category::Design => "Design",
            Category::Business => "Business",
            Category::DataScience => "Data Science",
            Category::Mathematics => "Mathematics",
            Category::LanguageLearning => "Language Learning",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("Unknown category '{}'", s))
    }
}

// ---------------------------------------------------------------------------
// SkillLevel
// ---------------------------------------------------------------------------

/// Audience skill level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl SkillLevel {
    pub const ALL: [SkillLevel; 3] = [
        SkillLevel::Beginner,
        SkillLevel::Intermediate,
        SkillLevel::Advanced,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SkillLevel::Beginner => "Beginner",
            SkillLevel::Intermediate => "Intermediate",
            SkillLevel::Advanced => "Advanced",
        }
    }
}

impl std::fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SkillLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SkillLevel::ALL
            .into_iter()
            .find(|l| l.as_str() == s)
            .ok_or_else(|| format!("Unknown skill level '{}'", s))
    }
}

/// Comma-separated labels, for validation messages
pub fn labels<T: std::fmt::Display>(values: &[T]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_labels_match_wire_format() {
        for category in Category::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.as_str()));
            assert_eq!(category.as_str().parse::<Category>().unwrap(), category);
        }
    }

    #[test]
    fn test_unknown_labels_rejected() {
        assert!("Unknown".parse::<Category>().is_err());
        assert!("data science".parse::<Category>().is_err());
        assert!("Expert".parse::<SkillLevel>().is_err());
    }

    #[test]
    fn test_skill_level_round_trip() {
        assert_eq!("Advanced".parse::<SkillLevel>().unwrap(), SkillLevel::Advanced);
        assert_eq!(SkillLevel::Beginner.to_string(), "Beginner");
        assert_eq!(labels(&SkillLevel::ALL), "Beginner, Intermediate, Advanced");
    }
}
