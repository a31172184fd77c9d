pub mod faq;
pub mod tech_stack;
pub mod testimonial;

pub use faq::{Faq, NewFaq};
pub use tech_stack::{NewTechStack, TechStack};
pub use testimonial::{NewTestimonial, Testimonial};

use std::collections::BTreeMap;

use serde::{de::DeserializeOwned, Serialize};

use crate::database::store::Entity;

/// A typed view over the rows of one entity
pub trait Model: Serialize + DeserializeOwned + Send + Sync + 'static {
    const ENTITY: Entity;
}

/// Field name -> problem description
pub type FieldErrors = BTreeMap<String, String>;

/// Input payloads check themselves before anything is written
pub trait Validate {
    fn validate(&self) -> Result<(), FieldErrors>;
}

pub(crate) fn require_text(errors: &mut FieldErrors, field: &str, value: &str) {
    if value.trim().is_empty() {
        errors.insert(field.to_string(), "This field is required".to_string());
    }
}

pub(crate) fn require_range(errors: &mut FieldErrors, field: &str, value: i32, min: i32, max: i32) {
    if value < min || value > max {
        errors.insert(field.to_string(), format!("Must be between {} and {}", min, max));
    }
}

pub(crate) fn require_non_negative(errors: &mut FieldErrors, field: &str, value: Option<i32>) {
    if matches!(value, Some(v) if v < 0) {
        errors.insert(field.to_string(), "Must not be negative".to_string());
    }
}

pub(crate) fn finish(errors: FieldErrors) -> Result<(), FieldErrors> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
