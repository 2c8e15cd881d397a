//! Sapling growth: placement rules, the per-tick growth decision, variant
//! dispatch, and rollback-safe structure generation.
#![forbid(unsafe_code)]

pub mod dispatch;
pub mod error;
pub mod executor;
pub mod outcome;
pub mod params;
pub mod placement;
pub mod roles;
pub mod scheduler;
pub mod variant;

pub use dispatch::{FAMILIES, Family, Forms, VariantDispatcher};
pub use error::GrowthError;
pub use executor::GrowthExecutor;
pub use outcome::{GrowthOutcome, SkipReason};
pub use params::GrowthParams;
pub use placement::{PlacementValidator, SubstrateClass};
pub use roles::{GrowthBlocks, RoleNames};
pub use scheduler::GrowthScheduler;
pub use variant::SaplingVariant;
