//! Remote records and the employee identifier

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::ReportError;

/// A positive employee identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EmployeeId(u64);

impl EmployeeId {
    /// Create an id, rejecting zero and negative values
    pub fn new(value: i64) -> Result<Self, ReportError> {
        if value <= 0 {
            return Err(ReportError::Usage(format!(
                "{} (employee id must be a positive integer)",
                value
            )));
        }
        Ok(Self(value as u64))
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl FromStr for EmployeeId {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: i64 = s
            .trim()
            .parse()
            .map_err(|_| ReportError::Usage(format!("'{}' is not an integer", s)))?;
        Self::new(value)
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Employee record from `/users/{id}`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Employee {
    #[serde(default)]
    pub id: Option<u64>,
    pub name: String,
}

/// Task record from `/todos?userId={id}`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TodoItem {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(rename = "userId", default)]
    pub user_id: Option<u64>,
    pub title: String,
    pub completed: bool,
}
