use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Holiday calendar entry consumed by business-hours calculation.
/// Holidays are created and edited by the administrative side of the
/// ticketing service; the engine only reads them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Holiday {
    pub id: String,
    pub name: String,
    pub date: NaiveDate,
    pub kind: HolidayKind,
    pub recurring: bool, // If true, repeats annually on same month-day
    pub description: Option<String>,
}

impl Holiday {
    pub fn new(name: String, date: NaiveDate, kind: HolidayKind, recurring: bool) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name,
            date,
            kind,
            recurring,
            description: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HolidayKind {
    Government,
    Restricted,
}

impl std::fmt::Display for HolidayKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HolidayKind::Government => write!(f, "government"),
            HolidayKind::Restricted => write!(f, "restricted"),
        }
    }
}

impl std::str::FromStr for HolidayKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "government" => Ok(HolidayKind::Government),
            "restricted" => Ok(HolidayKind::Restricted),
            _ => Err(format!("Invalid holiday kind: {}", s)),
        }
    }
}
