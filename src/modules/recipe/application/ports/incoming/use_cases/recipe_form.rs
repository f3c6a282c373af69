use crate::recipe::application::domain::entities::RecipeCategory;

//
// ──────────────────────────────────────────────────────────
// Validated recipe payload, shared by create and update
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct RecipeForm {
    name: String,
    description: String,
    ingredients: Vec<String>,
    instructions: String,
    category: RecipeCategory,
    prep_time_minutes: i32,
    cook_time_minutes: i32,
    servings: i32,
    image_url: Option<String>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum RecipeFormError {
    #[error("Recipe name is required")]
    EmptyName,

    #[error("Recipe name must not exceed 200 characters")]
    NameTooLong,

    #[error("Description is required")]
    EmptyDescription,

    #[error("Description must not exceed 1000 characters")]
    DescriptionTooLong,

    #[error("At least one ingredient is required")]
    NoIngredients,

    #[error("Instructions are required")]
    EmptyInstructions,

    #[error("Instructions must not exceed 4000 characters")]
    InstructionsTooLong,

    #[error("Preparation time must be greater than 0")]
    InvalidPrepTime,

    #[error("Cooking time must be greater than 0")]
    InvalidCookTime,

    #[error("Servings must be greater than 0")]
    InvalidServings,

    #[error("Image URL must not exceed 500 characters")]
    ImageUrlTooLong,
}

impl RecipeForm {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: String,
        description: String,
        ingredients: Vec<String>,
        instructions: String,
        category: RecipeCategory,
        prep_time_minutes: i32,
        cook_time_minutes: i32,
        servings: i32,
        image_url: Option<String>,
    ) -> Result<Self, RecipeFormError> {
        let name = name.trim().to_string();
        if name.is_empty() {
            return Err(RecipeFormError::EmptyName);
        }
        if name.len() > 200 {
            return Err(RecipeFormError::NameTooLong);
        }

        let description = description.trim().to_string();
        if description.is_empty() {
            return Err(RecipeFormError::EmptyDescription);
        }
        if description.len() > 1000 {
            return Err(RecipeFormError::DescriptionTooLong);
        }

        // Blank entries don't count as ingredients
        let ingredients: Vec<String> = ingredients
            .into_iter()
            .map(|i| i.trim().to_string())
            .filter(|i| !i.is_empty())
            .collect();
        if ingredients.is_empty() {
            return Err(RecipeFormError::NoIngredients);
        }

        let instructions = instructions.trim().to_string();
        if instructions.is_empty() {
            return Err(RecipeFormError::EmptyInstructions);
        }
        if instructions.len() > 4000 {
            return Err(RecipeFormError::InstructionsTooLong);
        }

        if prep_time_minutes <= 0 {
            return Err(RecipeFormError::InvalidPrepTime);
        }
        if cook_time_minutes <= 0 {
            return Err(RecipeFormError::InvalidCookTime);
        }
        if servings <= 0 {
            return Err(RecipeFormError::InvalidServings);
        }

        if let Some(ref url) = image_url {
            if url.len() > 500 {
                return Err(RecipeFormError::ImageUrlTooLong);
            }
        }

        Ok(Self {
            name,
            description,
            ingredients,
            instructions,
            category,
            prep_time_minutes,
            cook_time_minutes,
            servings,
            image_url,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn ingredients(&self) -> &[String] {
        &self.ingredients
    }

    pub fn instructions(&self) -> &str {
        &self.instructions
    }

    pub fn category(&self) -> RecipeCategory {
        self.category
    }

    pub fn prep_time_minutes(&self) -> i32 {
        self.prep_time_minutes
    }

    pub fn cook_time_minutes(&self) -> i32 {
        self.cook_time_minutes
    }

    pub fn servings(&self) -> i32 {
        self.servings
    }

    pub fn image_url(&self) -> Option<&String> {
        self.image_url.as_ref()
    }
}
