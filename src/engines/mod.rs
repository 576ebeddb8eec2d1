//! Search engine module
//!
//! Defines the Engine and Provider traits and the two API adapters.

mod loader;
mod provider;
mod traits;

// Engine implementations
pub mod google;
pub mod youtube;

pub use loader::{EngineLoader, Providers};
pub use provider::EngineProvider;
pub use traits::*;
