use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Exercise grouping, e.g. "Upper body".
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exercises: Option<Vec<Exercise>>,
}

/// An exercise definition, worth a fixed amount of xp and optionally bounded
/// to an experience-tier window.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Exercise {
    pub id: Uuid,
    pub name: String,
    pub xp_amount: u32,
    pub category_id: Uuid,
    pub min_experience_id: Option<Uuid>,
    pub max_experience_id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(
        rename = "minExperience",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub min_experience: Option<Experience>,
    #[serde(
        rename = "maxExperience",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub max_experience: Option<Experience>,
}

/// An experience tier ("Beginner", "Advanced", ...).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Experience {
    pub id: Uuid,
    pub name: String,
    pub level: u32,
}

/// A training template: an ordered set of items, optionally pinned to a
/// week day, an experience tier, or a single user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Training {
    pub id: Uuid,
    pub name: String,
    pub week_day: Option<u8>,
    pub experience_id: Option<Uuid>,
    pub user_id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience: Option<Experience>,
    #[serde(
        rename = "trainingItems",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub training_items: Option<Vec<TrainingItem>>,
}

/// One slot in a training template: either a concrete exercise or "amount
/// random exercises drawn from a category", with series and repetitions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrainingItem {
    pub id: Uuid,
    pub amount: Option<u32>,
    pub times: u32,
    pub series: u32,
    pub training_id: Uuid,
    pub category_id: Option<Uuid>,
    pub exercise_id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exercise: Option<Exercise>,
}

/// Create/update payload for `/category`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryData {
    pub name: String,
}

/// Create/update payload for `/exercise`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseData {
    pub name: String,
    pub xp_amount: u32,
    pub category_id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_experience_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_experience_id: Option<Uuid>,
}

/// Create/update payload for `/experience`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceData {
    pub name: String,
    pub level: u32,
}

/// Create/update payload for `/training`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingData {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub week_day: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<Uuid>,
    #[serde(rename = "trainingItems")]
    pub training_items: Vec<TrainingItemData>,
}

/// One item inside a [`TrainingData`] payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingItemData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exercise_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<u32>,
    pub series: u32,
    pub times: u32,
}
