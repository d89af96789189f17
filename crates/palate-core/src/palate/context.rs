use std::fmt;

use serde::{Deserialize, Serialize};

/// One situational field of a [`Context`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContextField {
    TimeOfDay,
    MoodBefore,
    SocialSetting,
    Occasion,
    EnergyLevel,
    WeatherMood,
    LocationType,
}

impl ContextField {
    pub const ALL: [ContextField; 7] = [
        Self::TimeOfDay,
        Self::MoodBefore,
        Self::SocialSetting,
        Self::Occasion,
        Self::EnergyLevel,
        Self::WeatherMood,
        Self::LocationType,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::TimeOfDay => "time_of_day",
            Self::MoodBefore => "mood_before",
            Self::SocialSetting => "social_setting",
            Self::Occasion => "occasion",
            Self::EnergyLevel => "energy_level",
            Self::WeatherMood => "weather_mood",
            Self::LocationType => "location_type",
        }
    }
}

impl fmt::Display for ContextField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The situation surrounding an experience or a recommendation request.
///
/// Used only for alignment scoring, never for taste computation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Context {
    pub time_of_day: Option<String>,
    pub mood_before: Option<String>,
    pub social_setting: Option<String>,
    pub occasion: Option<String>,
    pub energy_level: Option<String>,
    pub weather_mood: Option<String>,
    pub location_type: Option<String>,
}

impl Context {
    pub fn get(&self, field: ContextField) -> Option<&str> {
        let slot = match field {
            ContextField::TimeOfDay => &self.time_of_day,
            ContextField::MoodBefore => &self.mood_before,
            ContextField::SocialSetting => &self.social_setting,
            ContextField::Occasion => &self.occasion,
            ContextField::EnergyLevel => &self.energy_level,
            ContextField::WeatherMood => &self.weather_mood,
            ContextField::LocationType => &self.location_type,
        };
        slot.as_deref()
    }

    /// A copy with one field set.
    pub fn with(mut self, field: ContextField, value: impl Into<String>) -> Self {
        let slot = match field {
            ContextField::TimeOfDay => &mut self.time_of_day,
            ContextField::MoodBefore => &mut self.mood_before,
            ContextField::SocialSetting => &mut self.social_setting,
            ContextField::Occasion => &mut self.occasion,
            ContextField::EnergyLevel => &mut self.energy_level,
            ContextField::WeatherMood => &mut self.weather_mood,
            ContextField::LocationType => &mut self.location_type,
        };
        *slot = Some(value.into());
        self
    }

    /// Fields that carry a value, in declaration order.
    pub fn present_fields(&self) -> impl Iterator<Item = (ContextField, &str)> + '_ {
        ContextField::ALL
            .into_iter()
            .filter_map(move |f| self.get(f).map(|v| (f, v)))
    }

    pub fn is_empty(&self) -> bool {
        self.present_fields().next().is_none()
    }

    /// `"field:value"` keys used to track how familiar a situation is.
    pub fn signatures(&self) -> Vec<String> {
        self.present_fields()
            .map(|(f, v)| signature(f, v))
            .collect()
    }
}

/// Context-weight key for one field value. Values are trimmed and lowercased.
pub fn signature(field: ContextField, value: &str) -> String {
    format!("{}:{}", field.name(), value.trim().to_lowercase())
}
