use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strsim::jaro_winkler;

use crate::error::{FitError, Result};

/// Minimum Jaro-Winkler score for a "did you mean" hint.
const SUGGESTION_THRESHOLD: f64 = 0.8;

/// Biological sex as used by the BMR formula.
///
/// Only `Male` gets the +5 offset; every other value uses -161.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum Sex {
    Male,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Active,
    VeryActive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum Goal {
    Lose,
    Maintain,
    Gain,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum HealthCondition {
    Healthy,
    Diabetes,
    Hypertension,
    HeartDisease,
    JointPain,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum FitnessLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl Sex {
    pub const ALL: [Sex; 2] = [Sex::Male, Sex::Other];

    pub fn label(self) -> &'static str {
        match self {
            Sex::Male => "Male",
            Sex::Other => "Female / other",
        }
    }
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::Light,
        ActivityLevel::Moderate,
        ActivityLevel::Active,
        ActivityLevel::VeryActive,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Sedentary",
            ActivityLevel::Light => "Lightly Active",
            ActivityLevel::Moderate => "Moderately Active",
            ActivityLevel::Active => "Very Active",
            ActivityLevel::VeryActive => "Extremely Active",
        }
    }
}

impl Goal {
    pub const ALL: [Goal; 3] = [Goal::Lose, Goal::Maintain, Goal::Gain];

    pub fn label(self) -> &'static str {
        match self {
            Goal::Lose => "Weight Loss",
            Goal::Maintain => "Weight Maintenance",
            Goal::Gain => "Weight Gain",
        }
    }
}

impl HealthCondition {
    pub const ALL: [HealthCondition; 5] = [
        HealthCondition::Healthy,
        HealthCondition::Diabetes,
        HealthCondition::Hypertension,
        HealthCondition::HeartDisease,
        HealthCondition::JointPain,
    ];

    pub fn label(self) -> &'static str {
        match self {
            HealthCondition::Healthy => "Healthy",
            HealthCondition::Diabetes => "Diabetes",
            HealthCondition::Hypertension => "Hypertension",
            HealthCondition::HeartDisease => "Heart Disease",
            HealthCondition::JointPain => "Joint Pain",
        }
    }
}

impl FitnessLevel {
    pub const ALL: [FitnessLevel; 3] = [
        FitnessLevel::Beginner,
        FitnessLevel::Intermediate,
        FitnessLevel::Advanced,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FitnessLevel::Beginner => "Beginner",
            FitnessLevel::Intermediate => "Intermediate",
            FitnessLevel::Advanced => "Advanced",
        }
    }
}

/// Lowercase, map `-`/`_` to spaces and collapse runs of whitespace.
fn normalize(input: &str) -> String {
    input
        .to_lowercase()
        .replace(['-', '_'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Resolve `input` against an alias table.
///
/// Unknown values fail with `InvalidInput`, carrying the closest alias when
/// one scores above `SUGGESTION_THRESHOLD`.
fn parse_alias<T: Copy>(kind: &str, input: &str, aliases: &[(&str, T)]) -> Result<T> {
    let key = normalize(input);

    if let Some((_, value)) = aliases.iter().find(|(alias, _)| *alias == key) {
        return Ok(*value);
    }

    let suggestion = aliases
        .iter()
        .map(|(alias, _)| (*alias, jaro_winkler(alias, &key)))
        .filter(|(_, score)| *score > SUGGESTION_THRESHOLD)
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));

    let message = match suggestion {
        Some((alias, _)) => format!("unknown {kind} '{input}' (did you mean '{alias}'?)"),
        None => format!("unknown {kind} '{input}'"),
    };
    Err(FitError::InvalidInput(message))
}

impl FromStr for Sex {
    type Err = FitError;

    fn from_str(s: &str) -> Result<Self> {
        parse_alias(
            "sex",
            s,
            &[
                ("male", Sex::Male),
                ("m", Sex::Male),
                ("female", Sex::Other),
                ("f", Sex::Other),
                ("other", Sex::Other),
            ],
        )
    }
}

impl FromStr for ActivityLevel {
    type Err = FitError;

    fn from_str(s: &str) -> Result<Self> {
        parse_alias(
            "activity level",
            s,
            &[
                ("sedentary", ActivityLevel::Sedentary),
                ("light", ActivityLevel::Light),
                ("lightly active", ActivityLevel::Light),
                ("moderate", ActivityLevel::Moderate),
                ("moderately active", ActivityLevel::Moderate),
                ("active", ActivityLevel::Active),
                ("heavy", ActivityLevel::Active),
                ("very active", ActivityLevel::VeryActive),
                ("extremely active", ActivityLevel::VeryActive),
                ("athlete", ActivityLevel::VeryActive),
            ],
        )
    }
}

impl FromStr for Goal {
    type Err = FitError;

    fn from_str(s: &str) -> Result<Self> {
        parse_alias(
            "goal",
            s,
            &[
                ("lose", Goal::Lose),
                ("weight loss", Goal::Lose),
                ("maintain", Goal::Maintain),
                ("maintenance", Goal::Maintain),
                ("weight maintenance", Goal::Maintain),
                ("gain", Goal::Gain),
                ("weight gain", Goal::Gain),
                ("muscle building", Goal::Gain),
            ],
        )
    }
}

impl FromStr for HealthCondition {
    type Err = FitError;

    fn from_str(s: &str) -> Result<Self> {
        parse_alias(
            "health condition",
            s,
            &[
                ("healthy", HealthCondition::Healthy),
                ("none", HealthCondition::Healthy),
                ("diabetes", HealthCondition::Diabetes),
                ("hypertension", HealthCondition::Hypertension),
                ("high blood pressure", HealthCondition::Hypertension),
                ("heart disease", HealthCondition::HeartDisease),
                ("joint pain", HealthCondition::JointPain),
                ("arthritis", HealthCondition::JointPain),
            ],
        )
    }
}

impl FromStr for FitnessLevel {
    type Err = FitError;

    fn from_str(s: &str) -> Result<Self> {
        parse_alias(
            "fitness level",
            s,
            &[
                ("beginner", FitnessLevel::Beginner),
                ("intermediate", FitnessLevel::Intermediate),
                ("advanced", FitnessLevel::Advanced),
            ],
        )
    }
}

macro_rules! display_via_label {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        })*
    };
}

display_via_label!(Sex, ActivityLevel, Goal, HealthCondition, FitnessLevel);

// Profile files accept the same aliases as the command line.
macro_rules! deserialize_via_parse {
    ($($ty:ty),*) => {
        $(impl TryFrom<String> for $ty {
            type Error = String;

            fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
                value.parse().map_err(|e| match e {
                    FitError::InvalidInput(message) => message,
                    other => other.to_string(),
                })
            }
        })*
    };
}

deserialize_via_parse!(Sex, ActivityLevel, Goal, HealthCondition, FitnessLevel);

/// Immutable snapshot of the user's body metrics and goals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub sex: Sex,
    pub age_years: u32,
    pub height_cm: f64,
    pub weight_kg: f64,

    /// Target body weight; scales the deficit or surplus when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal_weight_kg: Option<f64>,

    pub activity_level: ActivityLevel,
    pub goal: Goal,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health_condition: Option<HealthCondition>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fitness_level: Option<FitnessLevel>,
}

impl UserProfile {
    /// Check that every metric is positive and finite.
    pub fn validate(&self) -> Result<()> {
        if self.age_years == 0 {
            return Err(FitError::InvalidInput("age must be positive".to_string()));
        }
        ensure_positive("height", self.height_cm)?;
        ensure_positive("weight", self.weight_kg)?;
        if let Some(goal_weight) = self.goal_weight_kg {
            ensure_positive("goal weight", goal_weight)?;
        }
        Ok(())
    }
}

/// Fail with `InvalidInput` unless `value` is finite and strictly positive.
pub(crate) fn ensure_positive(what: &str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(FitError::InvalidInput(format!(
            "{what} must be a positive number, got {value}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_profile() -> UserProfile {
        UserProfile {
            sex: Sex::Male,
            age_years: 25,
            height_cm: 175.0,
            weight_kg: 70.0,
            goal_weight_kg: None,
            activity_level: ActivityLevel::Moderate,
            goal: Goal::Lose,
            health_condition: None,
            fitness_level: None,
        }
    }

    #[test]
    fn test_parse_source_labels() {
        assert_eq!("Weight Loss".parse::<Goal>().unwrap(), Goal::Lose);
        assert_eq!("muscle-building".parse::<Goal>().unwrap(), Goal::Gain);
        assert_eq!(
            "Lightly Active".parse::<ActivityLevel>().unwrap(),
            ActivityLevel::Light
        );
        assert_eq!(
            "very_active".parse::<ActivityLevel>().unwrap(),
            ActivityLevel::VeryActive
        );
        assert_eq!(
            "  Heart   Disease ".parse::<HealthCondition>().unwrap(),
            HealthCondition::HeartDisease
        );
        assert_eq!("F".parse::<Sex>().unwrap(), Sex::Other);
    }

    #[test]
    fn test_unknown_value_suggests_closest() {
        let err = "moderat".parse::<ActivityLevel>().unwrap_err();
        let message = err.to_string();
        assert!(message.contains("unknown activity level"));
        assert!(message.contains("did you mean 'moderate'"), "{message}");
    }

    #[test]
    fn test_unknown_value_without_suggestion() {
        let err = "zzzz".parse::<FitnessLevel>().unwrap_err();
        assert!(matches!(err, FitError::InvalidInput(_)));
        assert!(!err.to_string().contains("did you mean"));
    }

    #[test]
    fn test_validate_rejects_bad_metrics() {
        assert!(sample_profile().validate().is_ok());

        let mut zero_age = sample_profile();
        zero_age.age_years = 0;
        assert!(zero_age.validate().is_err());

        let mut negative_height = sample_profile();
        negative_height.height_cm = -1.0;
        assert!(negative_height.validate().is_err());

        let mut nan_weight = sample_profile();
        nan_weight.weight_kg = f64::NAN;
        assert!(nan_weight.validate().is_err());

        let mut zero_goal = sample_profile();
        zero_goal.goal_weight_kg = Some(0.0);
        assert!(zero_goal.validate().is_err());
    }

    #[test]
    fn test_profile_json_uses_snake_case() {
        let mut profile = sample_profile();
        profile.activity_level = ActivityLevel::VeryActive;
        let json = serde_json::to_string(&profile).unwrap();
        assert!(json.contains("\"very_active\""));
        assert!(!json.contains("goal_weight_kg"));

        let back: UserProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(back, profile);
    }

    #[test]
    fn test_profile_json_accepts_labels_and_aliases() {
        let json = r#"{
            "sex": "female", "age_years": 30, "height_cm": 160, "weight_kg": 60,
            "activity_level": "Moderately Active", "goal": "Weight Loss",
            "health_condition": "High Blood Pressure", "fitness_level": "Advanced"
        }"#;
        let profile: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.sex, Sex::Other);
        assert_eq!(profile.activity_level, ActivityLevel::Moderate);
        assert_eq!(profile.goal, Goal::Lose);
        assert_eq!(profile.health_condition, Some(HealthCondition::Hypertension));
        assert_eq!(profile.fitness_level, Some(FitnessLevel::Advanced));
    }

    #[test]
    fn test_every_label_and_serialized_name_deserializes() {
        for level in ActivityLevel::ALL {
            let from_label: ActivityLevel =
                serde_json::from_value(serde_json::json!(level.label())).unwrap();
            let from_value: ActivityLevel =
                serde_json::from_value(serde_json::to_value(level).unwrap()).unwrap();
            assert_eq!(from_label, level);
            assert_eq!(from_value, level);
        }
        for condition in HealthCondition::ALL {
            let from_label: HealthCondition =
                serde_json::from_value(serde_json::json!(condition.label())).unwrap();
            let from_value: HealthCondition =
                serde_json::from_value(serde_json::to_value(condition).unwrap()).unwrap();
            assert_eq!(from_label, condition);
            assert_eq!(from_value, condition);
        }
        for goal in Goal::ALL {
            let from_label: Goal = serde_json::from_value(serde_json::json!(goal.label())).unwrap();
            assert_eq!(from_label, goal);
        }
    }

    #[test]
    fn test_unknown_json_value_keeps_parse_message() {
        let err = serde_json::from_str::<ActivityLevel>(r#""moderat""#).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("unknown activity level"), "{message}");
        assert!(message.contains("did you mean 'moderate'"), "{message}");
        assert!(!message.contains("Invalid input"), "{message}");
    }
}
