use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NengaError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, NengaError>;

/// Postal addressing data for one postcard party.
///
/// Recipients and the sender share this shape. An empty string means the
/// field is absent, which matters for the consecutive-name slots.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Family {
    #[serde(alias = "postalCode")]
    pub postal_code: String,
    pub prefecture: String,
    pub municipalities: String,
    pub address: String,
    pub building: String,
    #[serde(alias = "familyName")]
    pub family_name: String,
    #[serde(alias = "personalName")]
    pub personal_name: String,
    #[serde(alias = "consecutiveName1")]
    pub consecutive_name1: String,
    #[serde(alias = "consecutiveName2")]
    pub consecutive_name2: String,
    #[serde(alias = "consecutiveName3")]
    pub consecutive_name3: String,
    #[serde(alias = "consecutiveName4")]
    pub consecutive_name4: String,
}

pub type Recipient = Family;
pub type Sender = Family;

impl Family {
    /// The personal name followed by the four consecutive-name slots, empty or not.
    pub fn personal_names(&self) -> [&str; 5] {
        [
            &self.personal_name,
            &self.consecutive_name1,
            &self.consecutive_name2,
            &self.consecutive_name3,
            &self.consecutive_name4,
        ]
    }
}

/// Text direction for a run of glyphs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Top to bottom within a column
    Vertical,
    /// Left to right within a row
    Horizontal,
}
