use serde::{Deserialize, Serialize};

/// Closed set of recipe categories. Persisted as the snake_case tag;
/// anything unrecognized in storage reads back as `Other` instead of
/// failing the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecipeCategory {
    MainCourse,
    Dessert,
    Breakfast,
    Beverage,
    Soup,
    Salad,
    Snack,
    Appetizer,
    Other,
}

impl RecipeCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecipeCategory::MainCourse => "main_course",
            RecipeCategory::Dessert => "dessert",
            RecipeCategory::Breakfast => "breakfast",
            RecipeCategory::Beverage => "beverage",
            RecipeCategory::Soup => "soup",
            RecipeCategory::Salad => "salad",
            RecipeCategory::Snack => "snack",
            RecipeCategory::Appetizer => "appetizer",
            RecipeCategory::Other => "other",
        }
    }

    /// Lenient read-side mapping for stored tags.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "main_course" => RecipeCategory::MainCourse,
            "dessert" => RecipeCategory::Dessert,
            "breakfast" => RecipeCategory::Breakfast,
            "beverage" => RecipeCategory::Beverage,
            "soup" => RecipeCategory::Soup,
            "salad" => RecipeCategory::Salad,
            "snack" => RecipeCategory::Snack,
            "appetizer" => RecipeCategory::Appetizer,
            _ => RecipeCategory::Other,
        }
    }
}

/// Read-time aggregate over a recipe's live ratings. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RatingSummary {
    pub average: f64,
    pub count: u64,
}

impl RatingSummary {
    pub fn empty() -> Self {
        Self {
            average: 0.0,
            count: 0,
        }
    }

    pub fn from_values(values: &[i16]) -> Self {
        if values.is_empty() {
            return Self::empty();
        }

        let sum: i64 = values.iter().map(|v| *v as i64).sum();

        Self {
            average: sum as f64 / values.len() as f64,
            count: values.len() as u64,
        }
    }
}
