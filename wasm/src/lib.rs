//! Final Tap WASM Module
//!
//! Browser bindings for the scorer and the remaining-life formatter, so
//! the form can preview a result without a round-trip to the backend.
//! Values cross the boundary as JSON strings.

use chrono::NaiveDate;
use final_tap_shared::health_metrics;
use final_tap_shared::types::ScoreResponse;
use final_tap_shared::{duration, longevity, HabitProfile};
use wasm_bindgen::prelude::*;

/// Calculate BMI from weight (kg) and height (cm); 0 when height is not positive
#[wasm_bindgen]
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    health_metrics::calculate_bmi(weight_kg, height_cm).unwrap_or(0.0)
}

/// Score a habit profile given as JSON and format the remaining time
/// from `today` (`YYYY-MM-DD`). Returns the score response as JSON.
#[wasm_bindgen]
pub fn score_habits(habits_json: &str, today: &str) -> Result<String, JsValue> {
    score_habits_inner(habits_json, today).map_err(|e| JsValue::from_str(&e))
}

/// Split fractional years into years, months, days and an end date (JSON)
#[wasm_bindgen]
pub fn format_remaining(remaining_years: f64, today: &str) -> Result<String, JsValue> {
    format_remaining_inner(remaining_years, today).map_err(|e| JsValue::from_str(&e))
}

fn parse_today(today: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(today, "%Y-%m-%d").map_err(|e| format!("Invalid date '{today}': {e}"))
}

fn score_habits_inner(habits_json: &str, today: &str) -> Result<String, String> {
    let habits: HabitProfile =
        serde_json::from_str(habits_json).map_err(|e| format!("Invalid habits: {e}"))?;
    let today = parse_today(today)?;

    let score = longevity::score(&habits).map_err(|e| e.to_string())?;
    let remaining =
        duration::format_remaining(score.remaining_years, today).map_err(|e| e.to_string())?;

    serde_json::to_string(&ScoreResponse { score, remaining }).map_err(|e| e.to_string())
}

fn format_remaining_inner(remaining_years: f64, today: &str) -> Result<String, String> {
    let today = parse_today(today)?;
    let remaining = duration::format_remaining(remaining_years, today).map_err(|e| e.to_string())?;
    serde_json::to_string(&remaining).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    const HABITS: &str = r#"{
        "name": "Faust", "age": 30, "gender": "male", "height": 180, "weight": 75,
        "smoking": "none", "drinking": "none", "sleep": 8, "water": 9,
        "stress": "calm", "depression": "happy", "screenTime": 1, "exercise": 45,
        "yoga": true, "junkFood": "rarely", "sugar": "none", "medicalCheckup": "annually"
    }"#;

    #[test]
    fn test_bmi() {
        let bmi = calculate_bmi(70.0, 175.0);
        assert!((bmi - 22.86).abs() < 0.1);
        assert_eq!(calculate_bmi(70.0, 0.0), 0.0);
    }

    #[test]
    fn test_score_habits() {
        let json = score_habits_inner(HABITS, "2026-10-19").unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["score"]["expectancy"], 101);
        assert_eq!(value["remaining"]["endDate"], "2097-10-18");
    }

    #[test]
    fn test_score_habits_rejects_bad_input() {
        assert!(score_habits_inner("{}", "2026-10-19").unwrap_err().starts_with("Invalid habits"));
        assert!(score_habits_inner(HABITS, "19/10/2026").unwrap_err().starts_with("Invalid date"));
    }

    #[test]
    fn test_format_remaining() {
        let json = format_remaining_inner(0.5, "2026-10-19").unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["years"], 0);
        assert_eq!(value["months"], 5);
        assert_eq!(value["days"], 29);
        assert_eq!(value["endDate"], "2027-04-17");
    }
}
