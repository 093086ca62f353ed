//! Input validation helpers
//!
//! Range rules live on [`HabitProfile`](crate::habits::HabitProfile) as
//! `validator` derive attributes. This module turns the resulting
//! `ValidationErrors` into field-level messages with user-friendly labels.

use std::collections::BTreeMap;
use validator::ValidationErrors;

// ============================================================================
// User-Friendly Field Labels
// ============================================================================

/// Map wire field names to user-friendly display labels
pub fn get_field_display_label(field_name: &str) -> &str {
    match field_name {
        "name" => "Name",
        "age" => "Age",
        "gender" => "Gender",
        "height" => "Height",
        "weight" => "Weight",
        "smoking" => "Smoking",
        "drinking" => "Drinking",
        "sleep" => "Sleep",
        "water" => "Water",
        "stress" => "Stress Level",
        "depression" => "Mood",
        "screenTime" | "screen_time" => "Screen Time",
        "exercise" => "Exercise",
        "junkFood" | "junk_food" => "Junk Food",
        "sugar" => "Sugar",
        "medicalCheckup" | "medical_checkup" => "Medical Checkup",
        "medicalConditions" | "medical_conditions" => "Medical Conditions",
        _ => field_name,
    }
}

/// Convert a Rust field name to the camelCase name used on the wire
pub fn wire_field_name(field_name: &str) -> String {
    let mut out = String::with_capacity(field_name.len());
    let mut upper_next = false;
    for c in field_name.chars() {
        if c == '_' {
            upper_next = true;
        } else if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}

/// Validation failure with field context
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    /// Wire (camelCase) field name
    pub field: String,
    pub message: String,
    pub display_label: String,
}

impl FieldViolation {
    pub fn new(field: &str, message: &str) -> Self {
        let field = wire_field_name(field);
        let display_label = get_field_display_label(&field).to_string();
        Self {
            field,
            message: message.to_string(),
            display_label,
        }
    }

    /// Format as user-friendly error message
    pub fn user_message(&self) -> String {
        format!("{}: {}", self.display_label, self.message)
    }
}

/// Flatten `validator` output into violations, sorted by field name
pub fn collect_violations(errors: &ValidationErrors) -> Vec<FieldViolation> {
    let mut by_field = BTreeMap::new();
    for (field, field_errors) in errors.field_errors() {
        let message = field_errors
            .iter()
            .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
            .or_else(|| field_errors.first().map(|e| e.code.to_string()))
            .unwrap_or_else(|| "is invalid".to_string());
        by_field.insert(field.to_string(), message);
    }

    by_field
        .into_iter()
        .map(|(field, message)| FieldViolation::new(&field, &message))
        .collect()
}
