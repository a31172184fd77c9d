use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{finish, require_non_negative, require_range, require_text, FieldErrors, Model, Validate};
use crate::database::store::Entity;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechStack {
    pub id: String,
    pub name: String,
    pub icon: Option<String>,
    pub category: String,
    /// Self-assessed skill, 0-100
    pub proficiency: i32,
    /// Display hint for the frontend badge
    pub color: Option<String>,
    pub description: Option<String>,
    pub years: Option<i32>,
    pub projects: Option<i32>,
    pub created_at: DateTime<Utc>,
}

impl Model for TechStack {
    const ENTITY: Entity = Entity::TechStack;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTechStack {
    pub name: String,
    #[serde(default)]
    pub icon: Option<String>,
    pub category: String,
    pub proficiency: i32,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub years: Option<i32>,
    #[serde(default)]
    pub projects: Option<i32>,
}

impl Validate for NewTechStack {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        require_text(&mut errors, "name", &self.name);
        require_text(&mut errors, "category", &self.category);
        require_range(&mut errors, "proficiency", self.proficiency, 0, 100);
        require_non_negative(&mut errors, "years", self.years);
        require_non_negative(&mut errors, "projects", self.projects);
        finish(errors)
    }
}
