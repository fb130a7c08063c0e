use crate::error::{AppError, AppResult};

/// Season implied by the calendar month
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
}

impl Season {
    /// Fixed month-to-season mapping: Dec-Feb winter, Mar-May spring,
    /// Jun-Aug summer, Sep-Nov fall
    pub fn from_month(month: u32) -> Option<Season> {
        match month {
            12 | 1 | 2 => Some(Season::Winter),
            3..=5 => Some(Season::Spring),
            6..=8 => Some(Season::Summer),
            9..=11 => Some(Season::Fall),
            _ => None,
        }
    }

    /// Parses a season tag value as declared in the attribute catalog
    pub fn from_value(value: &str) -> Option<Season> {
        match value {
            "spring" => Some(Season::Spring),
            "summer" => Some(Season::Summer),
            "fall" => Some(Season::Fall),
            "winter" => Some(Season::Winter),
            _ => None,
        }
    }
}

/// Normalized weather/time signal for one recommendation request
///
/// Built once per request by the weather collaborator. The engine never
/// computes adjusted temperature or precipitation itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecommendationContext {
    /// Perceived temperature in Celsius, already adjusted for wind and humidity
    pub adjusted_temperature: f64,
    /// Whether it is currently raining or snowing
    pub is_precipitating: bool,
    /// Calendar month, 1-12
    pub current_month: u32,
}

impl RecommendationContext {
    /// Builds a context, rejecting months outside 1-12
    ///
    /// This is the only caller-contract check the engine performs; every
    /// other input irregularity degrades to a neutral score contribution.
    pub fn new(
        adjusted_temperature: f64,
        is_precipitating: bool,
        current_month: u32,
    ) -> AppResult<Self> {
        if !(1..=12).contains(&current_month) {
            return Err(AppError::InvalidInput(format!(
                "current_month must be between 1 and 12, got {}",
                current_month
            )));
        }
        Ok(Self {
            adjusted_temperature,
            is_precipitating,
            current_month,
        })
    }

    /// Season implied by the context's month
    pub fn season(&self) -> Season {
        // Month range is checked in new()
        Season::from_month(self.current_month).expect("month validated at construction")
    }
}
