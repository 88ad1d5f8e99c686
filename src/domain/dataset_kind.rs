// ============================================================
// Layer 3 - DatasetKind
// ============================================================
// The two labelled corpora the loader understands. Each one
// fixes the number of classes and the CSV file name inside
// the data directory:
//
//   ALLSIDES → 5 classes, khan_dataset.csv
//   SEMEVAL  → 2 classes, semeval.csv
//
// Anything else is a configuration error.

use std::{fmt, str::FromStr};

use anyhow::bail;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DatasetKind {
    AllSides,
    SemEval,
}

impl DatasetKind {
    /// Number of label classes in this corpus
    pub fn num_class(&self) -> usize {
        match self {
            DatasetKind::AllSides => 5,
            DatasetKind::SemEval  => 2,
        }
    }

    /// CSV file name inside the data directory
    pub fn file_name(&self) -> &'static str {
        match self {
            DatasetKind::AllSides => "khan_dataset.csv",
            DatasetKind::SemEval  => "semeval.csv",
        }
    }
}

impl FromStr for DatasetKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ALLSIDES" => Ok(DatasetKind::AllSides),
            "SEMEVAL"  => Ok(DatasetKind::SemEval),
            other => bail!(
                "Invalid dataset name '{}': expected ALLSIDES or SEMEVAL",
                other
            ),
        }
    }
}

impl fmt::Display for DatasetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetKind::AllSides => write!(f, "ALLSIDES"),
            DatasetKind::SemEval  => write!(f, "SEMEVAL"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_known_names() {
        assert_eq!("ALLSIDES".parse::<DatasetKind>().unwrap(), DatasetKind::AllSides);
        assert_eq!("semeval".parse::<DatasetKind>().unwrap(), DatasetKind::SemEval);
    }

    #[test]
    fn test_rejects_unknown_name() {
        let err = "AG_NEWS".parse::<DatasetKind>().unwrap_err();
        assert!(err.to_string().contains("Invalid dataset name"));
    }

    #[test]
    fn test_fixed_properties() {
        assert_eq!(DatasetKind::AllSides.num_class(), 5);
        assert_eq!(DatasetKind::SemEval.num_class(), 2);
        assert_eq!(DatasetKind::SemEval.file_name(), "semeval.csv");
    }

    #[test]
    fn test_display_parses_back() {
        for kind in [DatasetKind::AllSides, DatasetKind::SemEval] {
            assert_eq!(kind.to_string().parse::<DatasetKind>().unwrap(), kind);
        }
        assert_eq!(DatasetKind::SemEval.to_string(), "SEMEVAL");
    }
}
