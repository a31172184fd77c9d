use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{finish, require_range, require_text, FieldErrors, Model, Validate};
use crate::database::store::Entity;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: String,
    pub content: String,
    pub name: String,
    pub position: Option<String>,
    pub avatar: Option<String>,
    pub company: Option<String>,
    pub rating: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Model for Testimonial {
    const ENTITY: Entity = Entity::Testimonial;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTestimonial {
    pub content: String,
    pub name: String,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub rating: Option<i32>,
}

impl Validate for NewTestimonial {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        require_text(&mut errors, "content", &self.content);
        require_text(&mut errors, "name", &self.name);
        if let Some(rating) = self.rating {
            require_range(&mut errors, "rating", rating, 1, 5);
        }
        finish(errors)
    }
}
