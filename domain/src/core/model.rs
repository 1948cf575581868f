//! Model value object representing the generative model

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Generative models that can answer questions about a meal (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum GenerativeModel {
    #[default]
    Gemini15Flash,
    Gemini25Flash,
    Custom(String),
}

impl GenerativeModel {
    /// Get the string identifier for this model
    pub fn as_str(&self) -> &str {
        match self {
            GenerativeModel::Gemini15Flash => "gemini-1.5-flash",
            GenerativeModel::Gemini25Flash => "gemini-2.5-flash",
            GenerativeModel::Custom(s) => s,
        }
    }

    /// Whether the model identifier is usable in a request path
    pub fn is_valid(&self) -> bool {
        !self.as_str().trim().is_empty()
    }
}

impl std::fmt::Display for GenerativeModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for GenerativeModel {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s {
            "gemini-1.5-flash" => GenerativeModel::Gemini15Flash,
            "gemini-2.5-flash" => GenerativeModel::Gemini25Flash,
            other => GenerativeModel::Custom(other.to_string()),
        })
    }
}

impl Serialize for GenerativeModel {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for GenerativeModel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        // FromStr is infallible
        Ok(s.parse().unwrap_or_default())
    }
}
