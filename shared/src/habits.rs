//! Habit profile: the lifestyle and biometric inputs of one calculation
//!
//! Every behavioral field is a closed enumeration. Unknown levels are
//! rejected when the profile is deserialized, so the scorer only ever
//! sees declared levels.
//!
//! Each scored enumeration exposes `impact()`, its variant → years table.
//! Positive values are virtues, negative values are sins.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use validator::Validate;

// ============================================================================
// Biometrics
// ============================================================================

/// Gender, used only to pick the base life expectancy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    /// Base life expectancy in years
    pub fn base_expectancy(&self) -> i32 {
        match self {
            Gender::Female => 83,
            Gender::Male => 79,
            Gender::Other => 81,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
        }
    }
}

// ============================================================================
// Substances
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Smoking {
    None,
    Occasional,
    Light,
    Heavy,
    Chain,
}

impl Smoking {
    pub fn impact(&self) -> i32 {
        match self {
            Smoking::None => 0,
            Smoking::Occasional => -2,
            Smoking::Light => -5,
            Smoking::Heavy => -12,
            Smoking::Chain => -20,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Smoking::None => "none",
            Smoking::Occasional => "occasional",
            Smoking::Light => "light",
            Smoking::Heavy => "heavy",
            Smoking::Chain => "chain",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Drinking {
    None,
    Rare,
    Weekly,
    Daily,
    Binge,
}

impl Drinking {
    pub fn impact(&self) -> i32 {
        match self {
            Drinking::None => 1,
            Drinking::Rare => 0,
            Drinking::Weekly => -2,
            Drinking::Daily => -6,
            Drinking::Binge => -15,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Drinking::None => "none",
            Drinking::Rare => "rare",
            Drinking::Weekly => "weekly",
            Drinking::Daily => "daily",
            Drinking::Binge => "binge",
        }
    }
}

// ============================================================================
// Mental state
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Stress {
    Calm,
    Moderate,
    High,
    SoulCrushing,
}

impl Stress {
    pub fn impact(&self) -> i32 {
        match self {
            Stress::Calm => 2,
            Stress::Moderate => 0,
            Stress::High => -6,
            Stress::SoulCrushing => -12,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Stress::Calm => "calm",
            Stress::Moderate => "moderate",
            Stress::High => "high",
            Stress::SoulCrushing => "soul-crushing",
        }
    }
}

/// Mood, collected under the `depression` field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Happy,
    Stable,
    Melancholy,
    Abyss,
}

impl Mood {
    pub fn impact(&self) -> i32 {
        match self {
            Mood::Happy => 3,
            Mood::Stable => 0,
            Mood::Melancholy => -5,
            Mood::Abyss => -12,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Happy => "happy",
            Mood::Stable => "stable",
            Mood::Melancholy => "melancholy",
            Mood::Abyss => "abyss",
        }
    }
}

// ============================================================================
// Diet
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JunkFood {
    Rarely,
    Often,
    Daily,
}

impl JunkFood {
    /// Only a daily habit is penalized
    pub fn impact(&self) -> i32 {
        match self {
            JunkFood::Rarely | JunkFood::Often => 0,
            JunkFood::Daily => -8,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            JunkFood::Rarely => "rarely",
            JunkFood::Often => "often",
            JunkFood::Daily => "daily",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sugar {
    None,
    Little,
    Lot,
    Demon,
}

impl Sugar {
    pub fn impact(&self) -> i32 {
        match self {
            Sugar::None => 3,
            Sugar::Little => 0,
            Sugar::Lot => -5,
            Sugar::Demon => -12,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Sugar::None => "none",
            Sugar::Little => "little",
            Sugar::Lot => "lot",
            Sugar::Demon => "demon",
        }
    }
}

/// Collected by the form, not scored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProcessedMeat {
    #[default]
    None,
    Sometimes,
    Daily,
}

/// Collected by the form, not scored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SocialLife {
    #[default]
    Good,
    Lonely,
    Hermit,
}

// ============================================================================
// Medical
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MedicalCheckup {
    Never,
    Rarely,
    Annually,
    BiAnnually,
}

impl MedicalCheckup {
    pub fn impact(&self) -> i32 {
        match self {
            MedicalCheckup::Never => -5,
            MedicalCheckup::Rarely => -2,
            MedicalCheckup::Annually => 3,
            MedicalCheckup::BiAnnually => 5,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MedicalCheckup::Never => "never",
            MedicalCheckup::Rarely => "rarely",
            MedicalCheckup::Annually => "annually",
            MedicalCheckup::BiAnnually => "bi-annually",
        }
    }
}

/// Fixed catalog of medical conditions the form offers
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MedicalCondition {
    Hypertension,
    Diabetes,
    HeartDisease,
    Asthma,
    Cholesterol,
    Kidney,
    Cancer,
    Autoimmune,
    Thyroid,
}

impl MedicalCondition {
    /// Every condition, in display order
    pub const ALL: [MedicalCondition; 9] = [
        MedicalCondition::Hypertension,
        MedicalCondition::Diabetes,
        MedicalCondition::HeartDisease,
        MedicalCondition::Asthma,
        MedicalCondition::Cholesterol,
        MedicalCondition::Kidney,
        MedicalCondition::Cancer,
        MedicalCondition::Autoimmune,
        MedicalCondition::Thyroid,
    ];

    /// Years removed from the expectancy when the condition is present
    pub fn penalty(&self) -> u32 {
        match self {
            MedicalCondition::Hypertension => 5,
            MedicalCondition::Diabetes => 8,
            MedicalCondition::HeartDisease => 10,
            MedicalCondition::Asthma => 2,
            MedicalCondition::Cholesterol => 3,
            MedicalCondition::Kidney => 8,
            MedicalCondition::Cancer => 10,
            MedicalCondition::Autoimmune => 4,
            MedicalCondition::Thyroid => 2,
        }
    }

    /// Wire identifier
    pub fn id(&self) -> &'static str {
        match self {
            MedicalCondition::Hypertension => "hypertension",
            MedicalCondition::Diabetes => "diabetes",
            MedicalCondition::HeartDisease => "heart_disease",
            MedicalCondition::Asthma => "asthma",
            MedicalCondition::Cholesterol => "cholesterol",
            MedicalCondition::Kidney => "kidney",
            MedicalCondition::Cancer => "cancer",
            MedicalCondition::Autoimmune => "autoimmune",
            MedicalCondition::Thyroid => "thyroid",
        }
    }

    /// Human-readable label for the checklist
    pub fn label(&self) -> &'static str {
        match self {
            MedicalCondition::Hypertension => "Hypertension",
            MedicalCondition::Diabetes => "Diabetes",
            MedicalCondition::HeartDisease => "Heart Disease",
            MedicalCondition::Asthma => "Asthma",
            MedicalCondition::Cholesterol => "High Cholesterol",
            MedicalCondition::Kidney => "Kidney Disease",
            MedicalCondition::Cancer => "Cancer",
            MedicalCondition::Autoimmune => "Autoimmune Disorder",
            MedicalCondition::Thyroid => "Thyroid Disorder",
        }
    }

    /// Look up a condition by wire identifier. Unknown ids yield `None`.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.id() == id)
    }
}

impl fmt::Display for MedicalCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

// ============================================================================
// Habit Profile
// ============================================================================

/// Everything the user confesses for one calculation
///
/// Field names follow the form's camelCase payload. Range checks run at the
/// API boundary through `validator`; the scorer keeps its own guard against
/// zero height.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct HabitProfile {
    #[serde(default)]
    #[validate(length(max = 100, message = "must be at most 100 characters"))]
    pub name: String,
    #[validate(range(max = 150, message = "must be between 0 and 150 years"))]
    pub age: u32,
    pub gender: Gender,
    /// Centimeters
    #[validate(range(min = 50.0, max = 300.0, message = "must be between 50 and 300 cm"))]
    pub height: f64,
    /// Kilograms
    #[validate(range(min = 20.0, max = 500.0, message = "must be between 20 and 500 kg"))]
    pub weight: f64,
    pub smoking: Smoking,
    pub drinking: Drinking,
    /// Hours per night
    #[validate(range(min = 0.0, max = 24.0, message = "must be between 0 and 24 hours"))]
    pub sleep: f64,
    /// Glasses per day
    #[validate(range(max = 100, message = "must be at most 100 glasses"))]
    pub water: u32,
    pub stress: Stress,
    pub depression: Mood,
    /// Hours per day
    #[validate(range(min = 0.0, max = 24.0, message = "must be between 0 and 24 hours"))]
    pub screen_time: f64,
    /// Minutes per day
    #[validate(range(max = 1440, message = "cannot exceed 24 hours"))]
    pub exercise: u32,
    #[serde(default)]
    pub yoga: bool,
    pub junk_food: JunkFood,
    pub sugar: Sugar,
    #[serde(default)]
    pub processed_meat: ProcessedMeat,
    #[serde(default)]
    pub city_living: bool,
    #[serde(default)]
    pub social_life: SocialLife,
    pub medical_checkup: MedicalCheckup,
    #[serde(default)]
    #[validate(length(max = 32, message = "too many conditions"))]
    pub medical_conditions: BTreeSet<String>,
}

impl HabitProfile {
    /// Conditions from the catalog; unknown identifiers are skipped
    pub fn known_conditions(&self) -> impl Iterator<Item = MedicalCondition> + '_ {
        self.medical_conditions
            .iter()
            .filter_map(|id| MedicalCondition::from_id(id))
    }

    /// Name to address the user by, with a fallback for blank names
    pub fn display_name(&self, fallback: &'static str) -> &str {
        let trimmed = self.name.trim();
        if trimmed.is_empty() {
            fallback
        } else {
            trimmed
        }
    }
}
