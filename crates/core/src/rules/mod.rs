//! AI rules module - domain models.

mod rules_model;

pub use rules_model::{AiRule, NewAiRule, RulePreview};
