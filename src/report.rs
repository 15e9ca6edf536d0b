use crate::error::SummaryError;
use serde::{de, Deserialize, Deserializer};
use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Lint outcome for a single file. Keys not listed here are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileLintResult {
    pub file_path: String,
    pub error_count: Count,
    pub warning_count: Count,
}

impl FileLintResult {
    pub fn has_errors(&self) -> bool {
        !self.error_count.is_zero()
    }
}

/// A non-negative JSON integer of any size, kept as its decimal digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Count(String);

impl Count {
    pub fn is_zero(&self) -> bool {
        self.0.bytes().all(|b| b == b'0')
    }
}

impl fmt::Display for Count {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Count {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // arbitrary_precision keeps the number's source text
        let digits = serde_json::Number::deserialize(deserializer)?.to_string();
        if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
            Ok(Count(digits))
        } else {
            Err(de::Error::custom(format_args!(
                "invalid count `{digits}`, expected a non-negative integer"
            )))
        }
    }
}

#[cfg(test)]
impl From<u64> for Count {
    fn from(n: u64) -> Self {
        Count(n.to_string())
    }
}

/// Per-file results in the order the linter wrote them.
#[derive(Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct LintReport {
    pub results: Vec<FileLintResult>,
}

impl LintReport {
    pub fn into_results(self) -> std::vec::IntoIter<FileLintResult> {
        self.results.into_iter()
    }
}

pub fn load_report(path: &Path) -> Result<LintReport, SummaryError> {
    let file = File::open(path).map_err(|source| SummaryError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_reader(BufReader::new(file)).map_err(|source| {
        // from_reader surfaces read failures as serde_json io errors
        if source.is_io() {
            SummaryError::Read {
                path: path.to_path_buf(),
                source: source.into(),
            }
        } else {
            SummaryError::Parse {
                path: path.to_path_buf(),
                source,
            }
        }
    })
}
