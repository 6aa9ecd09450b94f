//! Builders that deep-merge partial overrides onto default values.
//!
//! A [`Builder`] holds a base value of some type `T`. Each call to
//! [`Builder::build`] takes an optional [`DeepPartial<T>`] in which every
//! field, at every depth, may be left out, and returns the base with those
//! fields replaced:
//!
//! ```text
//! builder_for(base) → Builder<T> → build(Some(&overrides)) → T
//!                                → build(None)             → &base
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use deep_builder::{DeepPartial, builder_for};
//! use serde_json::json;
//!
//! let build = builder_for(json!({
//!     "name": "",
//!     "settings": { "theme": "light", "notifications": true },
//! }));
//!
//! let overrides = DeepPartial::new().set("settings.theme", json!("dark"));
//! let user = build.build(Some(&overrides)).expect("merge succeeds");
//!
//! assert_eq!(
//!     *user,
//!     json!({ "name": "", "settings": { "theme": "dark", "notifications": true } })
//! );
//! ```
//!
//! # Merge rules
//!
//! Objects merge key by key. Arrays and scalars are replaced as a whole, as is
//! any value whose type differs between base and override. [`MergeOptions`]
//! can switch arrays to concatenation and make `null` overrides no-ops.

pub mod builder;
pub mod error;
pub mod merge;
pub mod parse;
pub mod partial;

pub(crate) mod codec;

pub use error::*;

// Re-export the main entry points at the crate root for convenience.
pub use builder::{Builder, builder_for};
pub use merge::{ArrayMerge, MergeOptions, deep_merge, deep_merge_with, merge_all, merge_into};
pub use parse::{parse_base, parse_partial, parse_value};
pub use partial::{DeepPartial, foreign_paths};
