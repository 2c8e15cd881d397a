use std::fmt;

/// Why a tick ended without a growth attempt.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SkipReason {
    NotASapling,
    /// The sapling could not stay and was removed.
    Unsustainable,
    TooDark,
    GateClosed,
    NoGenerator,
    MissingCell,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum GrowthOutcome {
    NoAttempt(SkipReason),
    /// The structure was carved; the sapling cell was consumed.
    Succeeded,
    /// The structure did not fit; the sapling was restored unchanged.
    Failed,
}

impl GrowthOutcome {
    pub fn attempted(self) -> bool {
        !matches!(self, GrowthOutcome::NoAttempt(_))
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SkipReason::NotASapling => "not a sapling",
            SkipReason::Unsustainable => "removed",
            SkipReason::TooDark => "too dark",
            SkipReason::GateClosed => "gate closed",
            SkipReason::NoGenerator => "no generator",
            SkipReason::MissingCell => "missing cell",
        };
        f.write_str(s)
    }
}

impl fmt::Display for GrowthOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GrowthOutcome::NoAttempt(reason) => write!(f, "no attempt ({})", reason),
            GrowthOutcome::Succeeded => f.write_str("succeeded"),
            GrowthOutcome::Failed => f.write_str("failed"),
        }
    }
}
