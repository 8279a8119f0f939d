//! State types split into domain-focused modules.
//!
//! - `runtime`: State struct (catalog, view/category selection, overlay)
//! - `detail`: kind-specific detail overlay state
//! - `hits`: screen regions recorded per frame for mouse hit-testing

pub mod detail;
pub mod hits;
pub mod runtime;

pub use detail::{AssistantDetail, DetailState, PromptDetail};
pub use hits::HitMap;
pub use runtime::State;
