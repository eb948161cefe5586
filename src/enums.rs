use clap::ValueEnum;
use std::fmt;

/// Which scanner turns XML text into an element tree
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ScannerKind {
    /// Delimiter search with explicit index arithmetic
    #[default]
    Manual,
    /// Anchored regular expressions
    Pattern,
}

impl fmt::Display for ScannerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Manual => write!(f, "manual"),
            Self::Pattern => write!(f, "pattern"),
        }
    }
}
