/// Display icon selected from an OpenWeather condition code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConditionIcon {
    Lightning,
    Drizzle,
    Rain,
    Snow,
    Fog,
    Sun,
    Cloud,
}

impl ConditionIcon {
    /// Map a condition code to its icon band.
    ///
    /// Codes outside every band (400-499, 900 and above) fall back to `Cloud`,
    /// while anything below 200 shows `Drizzle`.
    pub fn from_condition(condition_id: i64) -> Self {
        match condition_id {
            i64::MIN..=199 => ConditionIcon::Drizzle,
            200..=299 => ConditionIcon::Lightning,
            300..=399 => ConditionIcon::Drizzle,
            500..=599 => ConditionIcon::Rain,
            600..=699 => ConditionIcon::Snow,
            700..=799 => ConditionIcon::Fog,
            800 => ConditionIcon::Sun,
            801..=899 => ConditionIcon::Cloud,
            _ => ConditionIcon::Cloud,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ConditionIcon::Lightning => "cloud-lightning",
            ConditionIcon::Drizzle => "cloud-drizzle",
            ConditionIcon::Rain => "cloud-rain",
            ConditionIcon::Snow => "cloud-snow",
            ConditionIcon::Fog => "cloud-fog",
            ConditionIcon::Sun => "sun",
            ConditionIcon::Cloud => "cloud",
        }
    }
}

impl std::fmt::Display for ConditionIcon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Icon identifier for a condition code.
pub fn condition_icon(condition_id: i64) -> &'static str {
    ConditionIcon::from_condition(condition_id).as_str()
}
