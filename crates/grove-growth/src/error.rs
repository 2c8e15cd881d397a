use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GrowthError {
    /// A block role names a block the registry does not know.
    UnknownBlock { role: &'static str, name: String },
}

impl fmt::Display for GrowthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GrowthError::UnknownBlock { role, name } => {
                write!(f, "{} block '{}' is not registered", role, name)
            }
        }
    }
}

impl std::error::Error for GrowthError {}
