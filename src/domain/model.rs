use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

pub const MIN_VALUE: i64 = 1;
pub const MAX_VALUE: i64 = 3999;

/// 最長的羅馬數字 (3888 → MMMDCCCLXXXVIII)
pub const MAX_NUMERAL_LEN: usize = 15;

const NUMERAL_ALPHABET: [char; 7] = ['M', 'D', 'C', 'L', 'X', 'V', 'I'];

/// 外部傳入、尚未驗證的原始值
#[derive(Debug, Clone, PartialEq)]
pub enum ConversionInput {
    Missing,
    Text(String),
    Integer(i64),
    Float(f64),
}

impl ConversionInput {
    /// 從 JSON 值建立 (null → Missing)
    pub fn from_json(value: &serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Self::Missing,
            serde_json::Value::String(s) => Self::Text(s.clone()),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Self::Integer(i),
                None => n.as_f64().map(Self::Float).unwrap_or(Self::Missing),
            },
            other => Self::Text(other.to_string()),
        }
    }
}

impl From<Option<&str>> for ConversionInput {
    fn from(raw: Option<&str>) -> Self {
        match raw {
            Some(s) => Self::Text(s.to_string()),
            None => Self::Missing,
        }
    }
}

impl From<&str> for ConversionInput {
    fn from(raw: &str) -> Self {
        Self::Text(raw.to_string())
    }
}

impl From<i64> for ConversionInput {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for ConversionInput {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

/// 已確認介於 1..=3999 的整數，只能由 validator 建立
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ValidatedNumber(u16);

impl ValidatedNumber {
    pub(crate) fn new(value: u16) -> Self {
        debug_assert!((MIN_VALUE..=MAX_VALUE).contains(&i64::from(value)));
        Self(value)
    }

    pub fn get(self) -> u16 {
        self.0
    }
}

impl fmt::Display for ValidatedNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 只包含 M/D/C/L/X/V/I、長度 1..=15 的字串
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct RomanNumeral(String);

impl RomanNumeral {
    pub(crate) fn from_encoded(value: String) -> Self {
        debug_assert!(!value.is_empty() && value.len() <= MAX_NUMERAL_LEN);
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl TryFrom<String> for RomanNumeral {
    type Error = InternalFault;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.is_empty() || value.len() > MAX_NUMERAL_LEN {
            return Err(InternalFault::new(format!(
                "numeral length {} outside 1..={}",
                value.len(),
                MAX_NUMERAL_LEN
            )));
        }

        if let Some(bad) = value.chars().find(|c| !NUMERAL_ALPHABET.contains(c)) {
            return Err(InternalFault::new(format!(
                "numeral contains invalid character {:?}",
                bad
            )));
        }

        Ok(Self(value))
    }
}

impl fmt::Display for RomanNumeral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RejectionReason {
    NotANumber,
    OutOfRange,
}

impl RejectionReason {
    pub fn code(&self) -> &'static str {
        match self {
            RejectionReason::NotANumber => "NOT_A_NUMBER",
            RejectionReason::OutOfRange => "OUT_OF_RANGE",
        }
    }
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// 使用者輸入錯誤，對外以 400 回應
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("{message}")]
pub struct Rejection {
    pub reason: RejectionReason,
    pub message: String,
}

impl Rejection {
    pub fn not_a_number() -> Self {
        Self {
            reason: RejectionReason::NotANumber,
            message: "Invalid input. Input must be whole number between 1 and 3999".to_string(),
        }
    }

    pub fn out_of_range() -> Self {
        Self {
            reason: RejectionReason::OutOfRange,
            message: "Input out of range. Input must be between 1 and 3999".to_string(),
        }
    }
}

/// 內部契約被破壞，細節只寫進日誌
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("internal contract violation: {detail}")]
pub struct InternalFault {
    pub detail: String,
}

impl InternalFault {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub input: ValidatedNumber,
    pub output: RomanNumeral,
}
