//! Event categorization for calendar filtering.
//!
//! Categories are a fixed taxonomy tied to one facility's team-naming
//! conventions. The classification policy is an ordered rule table evaluated
//! top to bottom, so the rules stay data and the evaluation stays trivial.

use crate::model::event_type::EventType;

/// Closed set of filter categories. The order of [`CATEGORIES`] is
/// significant: the last entry is the classifier's fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    AdultLeagueGame,
    Bears,
    PrivateHockeyLessons,
    GretzkyHour,
    PublicSkate,
    DropIn,
    FigureSkating,
    Other,
}

impl Category {
    /// Stable identifier used by filter UIs and registration links.
    pub fn id(self) -> &'static str {
        match self {
            Category::AdultLeagueGame => "adult-league-game",
            Category::Bears => "bears",
            Category::PrivateHockeyLessons => "private-hockey-lessons",
            Category::GretzkyHour => "gretzky-hour",
            Category::PublicSkate => "public-skate",
            Category::DropIn => "drop-in",
            Category::FigureSkating => "figure-skating",
            Category::Other => "other",
        }
    }
}

/// Display and registration metadata for one category.
#[derive(Debug, Clone)]
pub struct CategoryConfig {
    pub id: Category,
    pub name: &'static str,
    pub can_register: bool,
    /// Registration-sport identifier for categories that can be booked online.
    pub sports_id: Option<i64>,
    pub color: &'static str,
}

/// Ordered category table. Consumed by filter UIs; the last entry doubles as
/// the classifier fallback.
pub const CATEGORIES: &[CategoryConfig] = &[
    CategoryConfig {
        id: Category::AdultLeagueGame,
        name: "Adult League Games",
        can_register: false,
        sports_id: None,
        color: "#3b82f6",
    },
    CategoryConfig {
        id: Category::Bears,
        name: "Bears (Youth Hockey)",
        can_register: false,
        sports_id: None,
        color: "#ef4444",
    },
    CategoryConfig {
        id: Category::PrivateHockeyLessons,
        name: "Private Hockey Lessons",
        can_register: false,
        sports_id: None,
        color: "#14b8a6",
    },
    CategoryConfig {
        id: Category::GretzkyHour,
        name: "Gretzky Hour",
        can_register: true,
        sports_id: Some(32),
        color: "#f59e0b",
    },
    CategoryConfig {
        id: Category::PublicSkate,
        name: "Public Skate",
        can_register: true,
        sports_id: Some(31),
        color: "#10b981",
    },
    CategoryConfig {
        id: Category::DropIn,
        name: "Drop-In Sessions",
        can_register: true,
        sports_id: Some(20),
        color: "#8b5cf6",
    },
    CategoryConfig {
        id: Category::FigureSkating,
        name: "Figure Skating",
        can_register: true,
        sports_id: Some(27),
        color: "#ec4899",
    },
    CategoryConfig {
        id: Category::Other,
        name: "Other",
        can_register: true,
        sports_id: None,
        color: "#6b7280",
    },
];

/// Look up a category's config; unknown IDs resolve to the last table entry.
pub fn category_config(id: Category) -> &'static CategoryConfig {
    CATEGORIES
        .iter()
        .find(|c| c.id == id)
        .unwrap_or(&CATEGORIES[CATEGORIES.len() - 1])
}

/// One name-pattern rule: the home-team name must contain any of `markers`
/// (case-sensitive). Some rules only apply when no visiting team is set.
#[derive(Debug, Clone)]
pub struct NameRule {
    pub markers: &'static [&'static str],
    pub requires_no_visiting_team: bool,
    pub category: Category,
}

/// Ordered heuristic classifier. Rule order is semantically load-bearing:
/// the first matching rule wins.
#[derive(Debug, Clone)]
pub struct Classifier {
    rules: Vec<NameRule>,
}

impl Default for Classifier {
    fn default() -> Self {
        Classifier {
            rules: vec![
                NameRule {
                    markers: &["Bears"],
                    requires_no_visiting_team: true,
                    category: Category::Bears,
                },
                NameRule {
                    markers: &["Private Lesson"],
                    requires_no_visiting_team: false,
                    category: Category::PrivateHockeyLessons,
                },
                NameRule {
                    markers: &["Gretzky Hour"],
                    requires_no_visiting_team: false,
                    category: Category::GretzkyHour,
                },
                NameRule {
                    markers: &["Public Skate"],
                    requires_no_visiting_team: false,
                    category: Category::PublicSkate,
                },
                NameRule {
                    markers: &["Drop-In", "Drop In"],
                    requires_no_visiting_team: false,
                    category: Category::DropIn,
                },
                NameRule {
                    markers: &["Freestyle", "Figure Skating"],
                    requires_no_visiting_team: false,
                    category: Category::FigureSkating,
                },
            ],
        }
    }
}

impl Classifier {
    /// Build a classifier with a custom rule table for facilities with
    /// different naming conventions.
    pub fn new(rules: Vec<NameRule>) -> Self {
        Classifier { rules }
    }

    /// Classify one event. Total and deterministic: always returns exactly
    /// one category for a given input.
    pub fn classify(
        &self,
        event_type: EventType,
        has_visiting_team: bool,
        home_team_name: Option<&str>,
    ) -> Category {
        let Some(name) = home_team_name.filter(|n| !n.is_empty()) else {
            return fallback_category();
        };

        // Games with a visiting team are league play regardless of name.
        if event_type == EventType::Game && has_visiting_team {
            return Category::AdultLeagueGame;
        }

        for rule in &self.rules {
            if rule.requires_no_visiting_team && has_visiting_team {
                continue;
            }
            if rule.markers.iter().any(|m| name.contains(m)) {
                return rule.category;
            }
        }

        fallback_category()
    }
}

fn fallback_category() -> Category {
    CATEGORIES[CATEGORIES.len() - 1].id
}
