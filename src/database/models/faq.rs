use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{finish, require_text, FieldErrors, Model, Validate};
use crate::database::store::Entity;

/// Categories the site groups FAQs under. Other non-empty values are accepted.
pub const KNOWN_CATEGORIES: &[&str] = &["general", "services", "pricing", "technical"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Faq {
    pub id: String,
    pub question: String,
    pub answer: String,
    pub category: String,
    pub order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Model for Faq {
    const ENTITY: Entity = Entity::Faq;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewFaq {
    pub question: String,
    pub answer: String,
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default)]
    pub order: i32,
}

fn default_category() -> String {
    KNOWN_CATEGORIES[0].to_string()
}

impl Validate for NewFaq {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        require_text(&mut errors, "question", &self.question);
        require_text(&mut errors, "answer", &self.answer);
        require_text(&mut errors, "category", &self.category);
        finish(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn category_and_order_default() {
        let faq: NewFaq = serde_json::from_value(json!({ "question": "Why?", "answer": "Because." })).unwrap();
        assert_eq!(faq.category, "general");
        assert_eq!(faq.order, 0);
        assert!(faq.validate().is_ok());
    }

    #[test]
    fn blank_question_is_rejected() {
        let faq: NewFaq = serde_json::from_value(json!({ "question": "  ", "answer": "a", "category": "pricing" })).unwrap();
        let errors = faq.validate().unwrap_err();
        assert!(errors.contains_key("question"));
        assert!(!errors.contains_key("answer"));
    }

    #[test]
    fn reads_postgres_timestamps() {
        let faq: Faq = serde_json::from_value(json!({
            "id": "f1",
            "question": "q",
            "answer": "a",
            "category": "general",
            "order": 2,
            "created_at": "2024-05-01T10:00:00.123456+00:00",
            "updated_at": "2024-05-01T10:00:00.123456Z",
        }))
        .unwrap();
        assert_eq!(faq.created_at, faq.updated_at);
    }
}
