//! Catalog data model and the pure logic behind the promptdeck UI.
//!
//! - `types`: PromptItem, AssistantItem, Catalog, View, the Card trait
//! - `loader`: parallel load of the fixed set of JSON documents
//! - `filter`: category filtering over a loaded sequence
//! - `template`: placeholder extraction and substitution for prompts
//! - `transcript`: parsing of assistant chat transcripts for display

pub mod filter;
pub mod loader;
pub mod template;
pub mod transcript;
pub mod types;

pub use filter::{ALL_CATEGORIES, filter_items};
pub use loader::{LoadError, load_catalog};
pub use types::{AssistantItem, Card, Catalog, PromptItem, View};
