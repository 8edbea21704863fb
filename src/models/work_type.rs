use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum WorkType {
    Home,         // H
    Office,       // O
    SickVacation, // S
    Holiday,      // derived only, never persisted
}

impl WorkType {
    /// Convert enum → DB string.
    /// The stored names match the historical on-disk format.
    pub fn to_db_str(&self) -> &str {
        match self {
            WorkType::Home => "home",
            WorkType::Office => "office",
            WorkType::SickVacation => "sick-vacation",
            WorkType::Holiday => "holiday",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "home" => Some(WorkType::Home),
            "office" => Some(WorkType::Office),
            "sick-vacation" => Some(WorkType::SickVacation),
            "holiday" => Some(WorkType::Holiday),
            _ => None,
        }
    }

    /// Helper: convert input code from CLI (lowercase or uppercase)
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "H" => Some(WorkType::Home),
            "O" => Some(WorkType::Office),
            "S" => Some(WorkType::SickVacation),
            _ => None,
        }
    }

    pub fn describe(&self) -> &str {
        match self {
            WorkType::Home => "Home",
            WorkType::Office => "Office",
            WorkType::SickVacation => "Sick/Vacation",
            WorkType::Holiday => "Holiday",
        }
    }
}
