//! Longevity scorer
//!
//! Turns a [`HabitProfile`] into a life-expectancy estimate, a sins/virtues
//! tally and a five-category impact breakdown.
//!
//! Scoring happens in two steps:
//!
//! 1. Every rule inspects the profile and emits zero or more
//!    [`Contribution`]s.
//! 2. A [`Ledger`] folds the contributions into the totals.
//!
//! Folding is plain addition, so the totals do not depend on rule order.
//! Every penalty carries an [`ImpactCategory`], which keeps the breakdown
//! summing to `sins`.

use crate::errors::ScoringError;
use crate::habits::HabitProfile;
use crate::health_metrics::{calculate_bmi, classify_bmi_band, BmiBand};
use serde::{Deserialize, Serialize};

/// Life domain a penalty is attributed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImpactCategory {
    Substances,
    Mental,
    Diet,
    Lifestyle,
    Medical,
}

/// Scoring rule that produced a contribution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    Bmi,
    Smoking,
    Drinking,
    Sleep,
    Water,
    Stress,
    Mood,
    MedicalCheckup,
    MedicalCondition,
    ScreenTime,
    Exercise,
    Yoga,
    JunkFood,
    Sugar,
}

/// How a contribution moves the totals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "category")]
pub enum Effect {
    /// Removes years, counts as a sin in the given category
    Penalty(ImpactCategory),
    /// Adds years and counts as a virtue
    Bonus,
    /// Counts as a virtue without changing the expectancy
    VirtueOnly,
}

/// One rule's effect on the score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contribution {
    pub rule: Rule,
    pub effect: Effect,
    pub magnitude: u32,
}

impl Contribution {
    pub fn penalty(rule: Rule, magnitude: u32, category: ImpactCategory) -> Self {
        Self {
            rule,
            effect: Effect::Penalty(category),
            magnitude,
        }
    }

    pub fn bonus(rule: Rule, magnitude: u32) -> Self {
        Self {
            rule,
            effect: Effect::Bonus,
            magnitude,
        }
    }

    pub fn virtue_only(rule: Rule, magnitude: u32) -> Self {
        Self {
            rule,
            effect: Effect::VirtueOnly,
            magnitude,
        }
    }

    /// Build from a signed lookup-table delta. Zero deltas produce nothing.
    pub fn from_delta(rule: Rule, delta: i32, category: ImpactCategory) -> Option<Self> {
        match delta {
            0 => None,
            d if d < 0 => Some(Self::penalty(rule, d.unsigned_abs(), category)),
            d => Some(Self::bonus(rule, d.unsigned_abs())),
        }
    }

    /// Signed change to the expectancy in years
    pub fn expectancy_delta(&self) -> i32 {
        let magnitude = self.magnitude as i32;
        match self.effect {
            Effect::Penalty(_) => -magnitude,
            Effect::Bonus => magnitude,
            Effect::VirtueOnly => 0,
        }
    }
}

/// Penalty magnitude per life domain
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImpactBreakdown {
    pub substances: u32,
    pub mental: u32,
    pub diet: u32,
    pub lifestyle: u32,
    pub medical: u32,
}

impl ImpactBreakdown {
    pub fn add(&mut self, category: ImpactCategory, amount: u32) {
        match category {
            ImpactCategory::Substances => self.substances += amount,
            ImpactCategory::Mental => self.mental += amount,
            ImpactCategory::Diet => self.diet += amount,
            ImpactCategory::Lifestyle => self.lifestyle += amount,
            ImpactCategory::Medical => self.medical += amount,
        }
    }

    pub fn get(&self, category: ImpactCategory) -> u32 {
        match category {
            ImpactCategory::Substances => self.substances,
            ImpactCategory::Mental => self.mental,
            ImpactCategory::Diet => self.diet,
            ImpactCategory::Lifestyle => self.lifestyle,
            ImpactCategory::Medical => self.medical,
        }
    }

    pub fn total(&self) -> u32 {
        self.substances + self.mental + self.diet + self.lifestyle + self.medical
    }
}

/// Running totals while contributions are applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ledger {
    pub expectancy: i32,
    pub sins: u32,
    pub virtues: u32,
    pub breakdown: ImpactBreakdown,
}

impl Ledger {
    pub fn new(base_expectancy: i32) -> Self {
        Self {
            expectancy: base_expectancy,
            sins: 0,
            virtues: 0,
            breakdown: ImpactBreakdown::default(),
        }
    }

    pub fn apply(&mut self, contribution: &Contribution) {
        self.expectancy += contribution.expectancy_delta();
        match contribution.effect {
            Effect::Penalty(category) => {
                self.sins += contribution.magnitude;
                self.breakdown.add(category, contribution.magnitude);
            }
            Effect::Bonus | Effect::VirtueOnly => self.virtues += contribution.magnitude,
        }
    }

    pub fn apply_all<'a>(mut self, contributions: impl IntoIterator<Item = &'a Contribution>) -> Self {
        for contribution in contributions {
            self.apply(contribution);
        }
        self
    }
}

/// Output of [`score`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LongevityScore {
    /// Estimated age at death, in years
    pub expectancy: i32,
    /// `max(0, expectancy - age)`
    pub remaining_years: f64,
    pub sins: u32,
    pub virtues: u32,
    pub breakdown: ImpactBreakdown,
    pub bmi: f64,
    pub bmi_band: BmiBand,
    pub contributions: Vec<Contribution>,
}

/// Score a habit profile
///
/// Fails only on biometrics that cannot be scored: height or weight that
/// is not a positive finite number, or negative/non-finite sleep or screen
/// time.
pub fn score(profile: &HabitProfile) -> Result<LongevityScore, ScoringError> {
    check_inputs(profile)?;

    let bmi = calculate_bmi(profile.weight, profile.height).ok_or(ScoringError::InvalidBiometric {
        field: "height",
        value: profile.height,
    })?;
    let bmi_band = classify_bmi_band(bmi);

    let contributions = contributions(profile, bmi_band);
    let ledger = Ledger::new(profile.gender.base_expectancy()).apply_all(&contributions);

    let remaining_years = (f64::from(ledger.expectancy) - f64::from(profile.age)).max(0.0);

    Ok(LongevityScore {
        expectancy: ledger.expectancy,
        remaining_years,
        sins: ledger.sins,
        virtues: ledger.virtues,
        breakdown: ledger.breakdown,
        bmi,
        bmi_band,
        contributions,
    })
}

fn check_inputs(profile: &HabitProfile) -> Result<(), ScoringError> {
    let positive = [("height", profile.height), ("weight", profile.weight)];
    for (field, value) in positive {
        if !value.is_finite() || value <= 0.0 {
            return Err(ScoringError::InvalidBiometric { field, value });
        }
    }

    let non_negative = [("sleep", profile.sleep), ("screenTime", profile.screen_time)];
    for (field, value) in non_negative {
        if !value.is_finite() || value < 0.0 {
            return Err(ScoringError::InvalidBiometric { field, value });
        }
    }

    Ok(())
}

/// Every contribution the profile earns, in rule order
pub fn contributions(profile: &HabitProfile, bmi_band: BmiBand) -> Vec<Contribution> {
    let mut out = Vec::with_capacity(16);

    out.extend(bmi_rule(bmi_band));
    out.extend(Contribution::from_delta(
        Rule::Smoking,
        profile.smoking.impact(),
        ImpactCategory::Substances,
    ));
    out.extend(Contribution::from_delta(
        Rule::Drinking,
        profile.drinking.impact(),
        ImpactCategory::Substances,
    ));
    out.extend(sleep_rule(profile.sleep));
    out.extend(water_rule(profile.water));
    out.extend(Contribution::from_delta(
        Rule::Stress,
        profile.stress.impact(),
        ImpactCategory::Mental,
    ));
    out.extend(Contribution::from_delta(
        Rule::Mood,
        profile.depression.impact(),
        ImpactCategory::Mental,
    ));
    out.extend(Contribution::from_delta(
        Rule::MedicalCheckup,
        profile.medical_checkup.impact(),
        ImpactCategory::Medical,
    ));
    out.extend(profile.known_conditions().map(|condition| {
        Contribution::penalty(Rule::MedicalCondition, condition.penalty(), ImpactCategory::Medical)
    }));
    out.extend(screen_time_rule(profile.screen_time));
    if profile.exercise >= 30 {
        out.push(Contribution::bonus(Rule::Exercise, 5));
    }
    if profile.yoga {
        out.push(Contribution::bonus(Rule::Yoga, 3));
    }
    out.extend(Contribution::from_delta(
        Rule::JunkFood,
        profile.junk_food.impact(),
        ImpactCategory::Diet,
    ));
    out.extend(Contribution::from_delta(
        Rule::Sugar,
        profile.sugar.impact(),
        ImpactCategory::Diet,
    ));

    out
}

fn bmi_rule(band: BmiBand) -> Option<Contribution> {
    match band.penalty() {
        0 => None,
        penalty => Some(Contribution::penalty(Rule::Bmi, penalty, ImpactCategory::Lifestyle)),
    }
}

/// Under 6 hours is penalized, 7-9 is a virtue, [6, 7) and over 9 are neutral
fn sleep_rule(hours: f64) -> Option<Contribution> {
    if hours < 6.0 {
        Some(Contribution::penalty(Rule::Sleep, 6, ImpactCategory::Lifestyle))
    } else if (7.0..=9.0).contains(&hours) {
        Some(Contribution::virtue_only(Rule::Sleep, 2))
    } else {
        None
    }
}

fn water_rule(glasses: u32) -> Option<Contribution> {
    if glasses < 4 {
        Some(Contribution::penalty(Rule::Water, 3, ImpactCategory::Lifestyle))
    } else if glasses >= 8 {
        Some(Contribution::bonus(Rule::Water, 2))
    } else {
        None
    }
}

fn screen_time_rule(hours: f64) -> Option<Contribution> {
    if hours > 10.0 {
        Some(Contribution::penalty(Rule::ScreenTime, 5, ImpactCategory::Lifestyle))
    } else if hours <= 2.0 {
        Some(Contribution::virtue_only(Rule::ScreenTime, 2))
    } else {
        None
    }
}
