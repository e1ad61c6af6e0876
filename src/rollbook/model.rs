use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Opaque record identifier.
///
/// Freshly created records get a uuid, but imported collections may carry any
/// string (older exports used millisecond timestamps), so the id is kept as text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StudentId(String);

impl StudentId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for StudentId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for StudentId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Academic year, ordered 1 through 5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Year {
    First = 1,
    Second = 2,
    Third = 3,
    Fourth = 4,
    Fifth = 5,
}

impl Year {
    pub const ALL: [Year; 5] = [
        Year::First,
        Year::Second,
        Year::Third,
        Year::Fourth,
        Year::Fifth,
    ];

    pub fn ordinal(self) -> u8 {
        self as u8
    }

    pub fn from_ordinal(n: u64) -> Option<Self> {
        match n {
            1 => Some(Year::First),
            2 => Some(Year::Second),
            3 => Some(Year::Third),
            4 => Some(Year::Fourth),
            5 => Some(Year::Fifth),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Year::First => "First Year",
            Year::Second => "Second Year",
            Year::Third => "Third Year",
            Year::Fourth => "Fourth Year",
            Year::Fifth => "Fifth Year",
        }
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.ordinal())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseYearError(String);

impl fmt::Display for ParseYearError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid academic year '{}' (expected 1-5)", self.0)
    }
}

impl std::error::Error for ParseYearError {}

impl FromStr for Year {
    type Err = ParseYearError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .ok()
            .and_then(Year::from_ordinal)
            .ok_or_else(|| ParseYearError(s.to_string()))
    }
}

// Persisted as the string ordinal ("3"); numbers are accepted on the way in.
impl Serialize for Year {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.ordinal().to_string())
    }
}

impl<'de> Deserialize<'de> for Year {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawYear {
            Text(String),
            Number(u64),
        }

        match RawYear::deserialize(deserializer)? {
            RawYear::Text(s) => s.parse().map_err(serde::de::Error::custom),
            RawYear::Number(n) => Year::from_ordinal(n)
                .ok_or_else(|| serde::de::Error::custom(ParseYearError(n.to_string()))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentRecord {
    pub id: StudentId,
    pub name: String,
    pub roll_no: String,
    pub department: String,
    pub year: Year,
    pub email: String,
    pub phone: String,
}

impl StudentRecord {
    /// Builds a record from input that has already passed validation.
    pub(crate) fn from_valid_input(id: StudentId, input: StudentInput, year: Year) -> Self {
        Self {
            id,
            name: input.name,
            roll_no: input.roll_no,
            department: input.department,
            year,
            email: input.email,
            phone: input.phone,
        }
    }

    pub fn to_input(&self) -> StudentInput {
        StudentInput {
            name: self.name.clone(),
            roll_no: self.roll_no.clone(),
            department: self.department.clone(),
            year: self.year.to_string(),
            email: self.email.clone(),
            phone: self.phone.clone(),
        }
    }
}

/// Raw candidate values as entered by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentInput {
    pub name: String,
    pub roll_no: String,
    pub department: String,
    pub year: String,
    pub email: String,
    pub phone: String,
}

impl StudentInput {
    /// Trims the free-text fields. Department and year come from fixed selections.
    pub fn normalized(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            roll_no: self.roll_no.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            ..self
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Table,
    Cards,
}

impl FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "table" => Ok(ViewMode::Table),
            "cards" | "card" => Ok(ViewMode::Cards),
            other => Err(format!("unknown view mode '{}' (expected table or cards)", other)),
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewMode::Table => f.write_str("table"),
            ViewMode::Cards => f.write_str("cards"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

impl ThemePreference {
    pub fn toggled(self) -> Self {
        match self {
            ThemePreference::Light => ThemePreference::Dark,
            ThemePreference::Dark => ThemePreference::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
        }
    }
}

impl FromStr for ThemePreference {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(ThemePreference::Light),
            "dark" => Ok(ThemePreference::Dark),
            other => Err(format!("unknown theme '{}' (expected light or dark)", other)),
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
