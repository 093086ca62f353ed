//! Body-mass metrics used by the longevity scorer
//!
//! Formula: BMI = weight(kg) / height(m)²

use serde::{Deserialize, Serialize};

/// BMI band as seen by the scorer
///
/// Boundaries are exclusive on the penalized side: a BMI of exactly 25.0 is
/// still normal, exactly 30.0 is still overweight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiBand {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiBand {
    /// Years removed from the expectancy
    pub fn penalty(&self) -> u32 {
        match self {
            BmiBand::Underweight => 2,
            BmiBand::Normal => 0,
            BmiBand::Overweight => 2,
            BmiBand::Obese => 5,
        }
    }

    /// Get a human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            BmiBand::Underweight => "Underweight",
            BmiBand::Normal => "Normal/Healthy",
            BmiBand::Overweight => "Overweight",
            BmiBand::Obese => "Obese",
        }
    }
}

/// Calculate BMI from weight and height
///
/// Returns `None` when height is not a positive finite number.
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> Option<f64> {
    if !height_cm.is_finite() || height_cm <= 0.0 || !weight_kg.is_finite() {
        return None;
    }
    let height_m = height_cm / 100.0;
    Some(weight_kg / (height_m * height_m))
}

/// Classify BMI into a scoring band
pub fn classify_bmi_band(bmi: f64) -> BmiBand {
    if bmi > 30.0 {
        BmiBand::Obese
    } else if bmi > 25.0 {
        BmiBand::Overweight
    } else if bmi < 18.5 {
        BmiBand::Underweight
    } else {
        BmiBand::Normal
    }
}
