use std::fmt;
use std::str::FromStr;

use grove_blocks::BlockState;

const NAMES: [&str; SaplingVariant::COUNT] = [
    "apple",
    "yellow_autumn",
    "bamboo",
    "magic",
    "dark",
    "dead",
    "fir",
    "holy",
    "orange_autumn",
    "origin",
    "pink_cherry",
    "maple",
    "white_cherry",
    "hellbark",
    "jacaranda",
    "persimmon",
];

/// Sapling sub-type, stored as the sapling block's state.
///
/// Codes outside `0..16` normalize to the default variant (`apple`, code 0)
/// on construction, so every lookup sees an in-range code.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SaplingVariant(u8);

impl SaplingVariant {
    pub const COUNT: usize = 16;

    pub const DEFAULT: SaplingVariant = SaplingVariant(0);
    pub const BAMBOO: SaplingVariant = SaplingVariant(2);
    pub const DARK: SaplingVariant = SaplingVariant(4);
    /// The sacred variant; it only roots on sacred soil.
    pub const HOLY: SaplingVariant = SaplingVariant(7);
    pub const HELLBARK: SaplingVariant = SaplingVariant(13);

    #[inline]
    pub fn from_code(code: u16) -> Self {
        if (code as usize) < Self::COUNT {
            SaplingVariant(code as u8)
        } else {
            Self::DEFAULT
        }
    }

    #[inline]
    pub fn from_state(state: BlockState) -> Self {
        Self::from_code(state)
    }

    #[inline]
    pub fn code(self) -> u8 {
        self.0
    }

    #[inline]
    pub fn state(self) -> BlockState {
        self.0 as BlockState
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub fn is_sacred(self) -> bool {
        self == Self::HOLY
    }

    pub fn name(self) -> &'static str {
        NAMES[self.index()]
    }

    pub fn all() -> impl Iterator<Item = SaplingVariant> {
        (0..Self::COUNT as u8).map(SaplingVariant)
    }
}

impl fmt::Display for SaplingVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownVariant(pub String);

impl fmt::Display for UnknownVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown sapling variant '{}'", self.0)
    }
}

impl std::error::Error for UnknownVariant {}

impl FromStr for SaplingVariant {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NAMES
            .iter()
            .position(|n| *n == s)
            .map(|i| SaplingVariant(i as u8))
            .ok_or_else(|| UnknownVariant(s.to_string()))
    }
}
