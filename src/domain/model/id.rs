use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::domain::error::DomainError;

/// カタログ番号（ISBN相当）。一意性は保証しない。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct MaterialId(u64);

impl MaterialId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for MaterialId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for MaterialId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_number("ISBN", s).map(Self)
    }
}

/// 前後の空白を除いて10進数として解釈する。失敗時は入力文字列を保持したエラーを返す。
pub fn parse_number<T: FromStr>(field: &'static str, input: &str) -> Result<T, DomainError> {
    input
        .trim()
        .parse::<T>()
        .map_err(|_| DomainError::InvalidNumber {
            field,
            input: input.to_string(),
        })
}
