use crate::error::AfasError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Comparison operator understood by AFAS GetConnectors.
///
/// The discriminants are the `operatortypes` codes of the REST API and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Operator {
    #[default]
    EqualTo = 1,
    GreaterThanOrEqualTo = 2,
    LessThanOrEqualTo = 3,
    GreaterThan = 4,
    LessThan = 5,
    Contains = 6,
    NotEqualTo = 7,
    Empty = 8,
    NotEmpty = 9,
    StartsWith = 10,
    NotContains = 11,
    NotStartsWith = 12,
    EndsWith = 13,
    NotEndsWith = 14,
    QuickFilter = 15,
}

impl Operator {
    pub const ALL: [Operator; 15] = [
        Operator::EqualTo,
        Operator::GreaterThanOrEqualTo,
        Operator::LessThanOrEqualTo,
        Operator::GreaterThan,
        Operator::LessThan,
        Operator::Contains,
        Operator::NotEqualTo,
        Operator::Empty,
        Operator::NotEmpty,
        Operator::StartsWith,
        Operator::NotContains,
        Operator::NotStartsWith,
        Operator::EndsWith,
        Operator::NotEndsWith,
        Operator::QuickFilter,
    ];

    pub fn code(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl TryFrom<u8> for Operator {
    type Error = AfasError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Operator::ALL
            .into_iter()
            .find(|op| op.code() == code)
            .ok_or(AfasError::UnknownOperator(code))
    }
}

/// Sort direction of an order-by entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderDirection {
    #[default]
    Ascending,
    Descending,
}

impl OrderDirection {
    /// Prefix AFAS expects in front of the field id.
    pub fn prefix(self) -> &'static str {
        match self {
            OrderDirection::Ascending => "",
            OrderDirection::Descending => "-",
        }
    }
}
