//! Builders that produce values from defaults plus deeply-partial overrides.
//!
//! ```rust
//! use deep_builder::{DeepPartial, builder_for};
//! use serde::{Deserialize, Serialize};
//! use serde_json::json;
//!
//! #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
//! struct Settings {
//!     theme: String,
//!     notifications: bool,
//! }
//!
//! #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
//! struct User {
//!     name: String,
//!     settings: Settings,
//! }
//!
//! let build_user = builder_for(User {
//!     name: String::new(),
//!     settings: Settings { theme: "light".into(), notifications: true },
//! });
//!
//! let dark = DeepPartial::from_value(json!({"settings": {"theme": "dark"}}));
//! let user = build_user.build(Some(&dark)).unwrap();
//! assert_eq!(user.settings.theme, "dark");
//! assert!(user.settings.notifications);
//! ```

use crate::codec;
use crate::error::BuildError;
use crate::merge::{MergeOptions, merge_into};
use crate::partial::{DeepPartial, foreign_paths};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::borrow::Cow;
use tracing::{debug, trace};

/// Creates a [`Builder`] around `base`.
pub fn builder_for<T>(base: T) -> Builder<T> {
    Builder::new(base)
}

/// Holds a default value and merges overrides onto it on demand.
///
/// The base is never mutated, so one builder can serve any number of
/// independent builds.
#[derive(Clone, Debug)]
pub struct Builder<T> {
    base: T,
    options: MergeOptions,
}

impl<T> Builder<T> {
    pub fn new(base: T) -> Self {
        debug!(base_type = std::any::type_name::<T>(), "created builder");
        Builder {
            base,
            options: MergeOptions::default(),
        }
    }

    pub fn with_options(mut self, options: MergeOptions) -> Self {
        self.options = options;
        self
    }

    pub fn base(&self) -> &T {
        &self.base
    }

    pub fn options(&self) -> &MergeOptions {
        &self.options
    }
}

impl<T> Builder<T>
where
    T: Serialize + DeserializeOwned + Clone,
{
    /// Builds a value from the defaults and an optional override.
    ///
    /// With no override (or a `null` one) this borrows the base itself rather
    /// than copying it. Otherwise the override is merged onto a copy of the
    /// base and the result is returned owned.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError`] if the base cannot be converted to a JSON tree
    /// or the merged tree no longer deserializes into `T`. Fields the
    /// override leaves alone always come back with the base's values.
    pub fn build(&self, overrides: Option<&DeepPartial<T>>) -> Result<Cow<'_, T>, BuildError> {
        match overrides {
            Some(partial) if !partial.is_absent() => {
                let merged = self.merge(partial)?;
                let value = codec::decode(merged).map_err(BuildError::deserialization)?;
                Ok(Cow::Owned(value))
            }
            _ => {
                trace!("no override, returning base");
                Ok(Cow::Borrowed(&self.base))
            }
        }
    }

    /// Like [`build`](Self::build), but always returns a fresh value.
    pub fn build_owned(&self, overrides: Option<&DeepPartial<T>>) -> Result<T, BuildError> {
        self.build(overrides).map(Cow::into_owned)
    }

    /// Returns the merged tree before it is converted back into `T`.
    ///
    /// Keys the override adds beyond the base's shape are still present here,
    /// even when `T` would drop them. Non-finite floats appear as `"NaN"`,
    /// `"Infinity"` or `"-Infinity"`, and integers beyond 64 bits as strings
    /// of digits.
    pub fn build_value(&self, overrides: Option<&DeepPartial<T>>) -> Result<Value, BuildError> {
        match overrides {
            Some(partial) if !partial.is_absent() => self.merge(partial),
            _ => codec::encode(&self.base).map_err(BuildError::serialization),
        }
    }

    /// Returns a builder whose defaults are this builder's defaults with
    /// `overrides` applied. Merge options carry over.
    pub fn extend(&self, overrides: &DeepPartial<T>) -> Result<Builder<T>, BuildError> {
        let base = self.build_owned(Some(overrides))?;
        Ok(Builder {
            base,
            options: self.options.clone(),
        })
    }

    fn merge(&self, partial: &DeepPartial<T>) -> Result<Value, BuildError> {
        let mut merged = codec::encode(&self.base).map_err(BuildError::serialization)?;

        let foreign = foreign_paths(&merged, partial.as_value());
        if !foreign.is_empty() {
            debug!(paths = ?foreign, "override names keys missing from base");
        }

        merge_into(&mut merged, partial.as_value(), &self.options);
        debug!(
            arrays = ?self.options.arrays,
            skip_nulls = self.options.skip_nulls,
            "merged override onto base"
        );
        Ok(merged)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_override_borrows_base() {
        let builder = builder_for(json!({"a": 1}));
        let built = builder.build(None).unwrap();
        assert!(matches!(built, Cow::Borrowed(_)));
        assert!(std::ptr::eq(built.as_ref(), builder.base()));
    }

    #[test]
    fn null_override_counts_as_missing() {
        let builder = builder_for(json!({"a": 1}));
        let partial = DeepPartial::from_value(Value::Null);
        assert!(matches!(builder.build(Some(&partial)).unwrap(), Cow::Borrowed(_)));
    }

    #[test]
    fn empty_override_yields_owned_copy() {
        let builder = builder_for(json!({"a": 1}));
        let built = builder.build(Some(&DeepPartial::new())).unwrap();
        assert!(matches!(built, Cow::Owned(_)));
        assert_eq!(built.as_ref(), builder.base());
    }

    #[test]
    fn primitive_base_is_replaced() {
        let builder = builder_for(5u32);
        let partial = DeepPartial::from_value(json!(0));
        assert_eq!(builder.build_owned(Some(&partial)).unwrap(), 0);
    }

    #[test]
    fn type_mismatch_surfaces_as_deserialize_error() {
        let builder = builder_for(7u32);
        let partial = DeepPartial::from_value(json!("seven"));
        let err = builder.build(Some(&partial)).unwrap_err();
        assert_eq!(err.kind, crate::error::BuildErrorKind::Deserialize);
    }
}
