//! Advice requester
//!
//! Turns a habit profile and its remaining years into a prompt for the
//! configured text generator. Whatever happens on the way, the caller gets
//! a non-empty string back.

use crate::generation::{GenerationError, Prompt, TextGenerator};
use final_tap_shared::HabitProfile;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Served when the generator answers with nothing
pub const EMPTY_ADVICE: &str = "Your time is short. Live better or see me sooner.";

/// Served when the generator fails
pub const FALLBACK_ADVICE: &str =
    "The flames are getting hotter. Eat better, move more, and drink water if you want to delay our meeting.";

/// Name used when the profile has none
pub const ANONYMOUS_NAME: &str = "Sinner";

const PERSONA: &str = "You are the 'Keeper of the Final Tap', a devil from hell.";

/// Requests devilish advice and absorbs every failure
#[derive(Clone)]
pub struct AdviceService {
    generator: Arc<dyn TextGenerator>,
    timeout: Duration,
}

impl AdviceService {
    pub fn new(generator: Arc<dyn TextGenerator>, timeout: Duration) -> Self {
        Self { generator, timeout }
    }

    /// Name of the backing generator, for readiness checks
    pub fn provider(&self) -> String {
        self.generator.describe()
    }

    /// Ask for advice. Never fails: empty answers and errors become canned text.
    pub async fn request_advice(&self, profile: &HabitProfile, remaining_years: f64) -> String {
        let prompt = build_prompt(profile, remaining_years);

        let outcome = match tokio::time::timeout(self.timeout, self.generator.generate(&prompt)).await {
            Ok(result) => result,
            Err(_) => Err(GenerationError::Timeout(self.timeout)),
        };

        match outcome {
            Ok(text) if text.trim().is_empty() => {
                warn!(generator = %self.generator.describe(), "Generator returned empty advice");
                record_fallback("empty");
                EMPTY_ADVICE.to_string()
            }
            Ok(text) => {
                debug!(chars = text.len(), "Advice generated");
                text
            }
            Err(GenerationError::Disabled) => {
                record_fallback("disabled");
                FALLBACK_ADVICE.to_string()
            }
            Err(err) => {
                warn!(
                    generator = %self.generator.describe(),
                    reason = err.reason(),
                    error = %err,
                    "Advice generation failed, serving fallback"
                );
                record_fallback(err.reason());
                FALLBACK_ADVICE.to_string()
            }
        }
    }
}

fn record_fallback(reason: &'static str) {
    metrics::counter!("final_tap_advice_fallbacks_total", "reason" => reason).increment(1);
}

/// Build the persona framing and the user's stat sheet
pub fn build_prompt(profile: &HabitProfile, remaining_years: f64) -> Prompt {
    let name = profile.display_name(ANONYMOUS_NAME);

    let system = format!(
        "{PERSONA}\n\
         Start by greeting the user by name in a scary way.\n\
         Give dark, devilish, but helpful advice.\n\
         Focus especially on their medical issues and checkup habits if they are bad.\n\
         Use simple, basic English.\n\
         Keep it under 150 words.\n\
         Format as punchy points."
    );

    let conditions = if profile.medical_conditions.is_empty() {
        "None reported".to_string()
    } else {
        profile
            .medical_conditions
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    };

    let user = format!(
        "The user's name is {name}.\n\
         \n\
         Stats:\n\
         - Age: {age}\n\
         - Gender: {gender}\n\
         - Smoking: {smoking}, Drinking: {drinking}\n\
         - Sleep: {sleep} hrs, Water: {water} glasses\n\
         - Stress: {stress}, Mood: {mood}\n\
         - Screen Time: {screen_time} hrs/day\n\
         - Exercise: {exercise} mins/day\n\
         - Sugar: {sugar}\n\
         - Medical Checkup: {checkup}\n\
         - Existing Issues: {conditions}\n\
         \n\
         They have about {remaining_years:.1} years left.",
        age = profile.age,
        gender = profile.gender.as_str(),
        smoking = profile.smoking.as_str(),
        drinking = profile.drinking.as_str(),
        sleep = profile.sleep,
        water = profile.water,
        stress = profile.stress.as_str(),
        mood = profile.depression.as_str(),
        screen_time = profile.screen_time,
        exercise = profile.exercise,
        sugar = profile.sugar.as_str(),
        checkup = profile.medical_checkup.as_str(),
    );

    Prompt { system, user }
}
