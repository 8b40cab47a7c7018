//! Transient view parameters and their wire names.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Completion-status filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusFilter {
    #[default]
    All,
    Pending,
    Done,
}

/// Display ordering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortMode {
    /// Dated tasks first by ascending date, undated ones newest first.
    #[default]
    Due,
    Newest,
    Oldest,
}

/// Unknown filter or sort name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseParamError {
    kind: &'static str,
    value: String,
    expected: &'static str,
}

impl Display for ParseParamError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unsupported {} `{}`; expected {}",
            self.kind, self.value, self.expected
        )
    }
}

impl Error for ParseParamError {}

impl StatusFilter {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Pending => "pending",
            Self::Done => "done",
        }
    }
}

impl FromStr for StatusFilter {
    type Err = ParseParamError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "pending" => Ok(Self::Pending),
            "done" => Ok(Self::Done),
            other => Err(ParseParamError {
                kind: "filter",
                value: other.to_string(),
                expected: "all|pending|done",
            }),
        }
    }
}

impl Display for StatusFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl SortMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Due => "due",
            Self::Newest => "newest",
            Self::Oldest => "oldest",
        }
    }
}

impl FromStr for SortMode {
    type Err = ParseParamError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "due" => Ok(Self::Due),
            "newest" => Ok(Self::Newest),
            "oldest" => Ok(Self::Oldest),
            other => Err(ParseParamError {
                kind: "sort mode",
                value: other.to_string(),
                expected: "due|newest|oldest",
            }),
        }
    }
}

impl Display for SortMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parameters the pipeline is asked to compute a view for.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewParams {
    pub filter: StatusFilter,
    pub query: String,
    pub sort: SortMode,
}
