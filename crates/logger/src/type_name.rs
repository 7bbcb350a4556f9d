//! Logger names derived from Rust types

use crate::{Error, Result};
use std::any::type_name;
use std::fmt;

/// Identifies a type for the purpose of naming a logger after it.
///
/// The canonical name is the full path reported by [`std::any::type_name`],
/// generic arguments included, so distinct types get distinct names within
/// one build.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeIdentifier {
    raw: &'static str,
}

impl TypeIdentifier {
    /// Identifier for `T`
    #[must_use]
    pub fn of<T: ?Sized>() -> Self {
        Self {
            raw: type_name::<T>(),
        }
    }

    /// Identifier for the type of `value`
    #[must_use]
    pub fn of_val<T: ?Sized>(_value: &T) -> Self {
        Self::of::<T>()
    }

    /// The name as reported by the compiler, before validation
    #[must_use]
    pub const fn raw(&self) -> &'static str {
        self.raw
    }

    /// Canonical, fully-qualified logger name for the type.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidIdentifier`] for types with no usable name:
    /// an empty name, or one containing a compiler-synthesised segment such
    /// as `{{closure}}` or `{{async block}}`.
    pub fn canonical_name(&self) -> Result<&'static str> {
        if self.raw.is_empty() || is_anonymous(self.raw) {
            return Err(Error::InvalidIdentifier {
                type_name: self.raw.to_string(),
            });
        }

        Ok(self.raw)
    }
}

impl fmt::Debug for TypeIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TypeIdentifier").field(&self.raw).finish()
    }
}

/// Anonymous items show up in `type_name` as `{{closure}}`, `{{constant}}`,
/// `{{async fn body}}` and similar.
fn is_anonymous(name: &str) -> bool {
    name.contains("{{")
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    struct ThingDoer;

    #[allow(dead_code)]
    struct Wrapper<T>(T);

    #[test]
    fn test_named_type() {
        let id = TypeIdentifier::of::<ThingDoer>();

        assert_eq!(
            id.canonical_name().unwrap(),
            "proven_logger::type_name::tests::ThingDoer"
        );
    }

    #[test]
    fn test_generic_arguments_keep_names_distinct() {
        let a = TypeIdentifier::of::<Wrapper<u8>>().canonical_name().unwrap();
        let b = TypeIdentifier::of::<Wrapper<u16>>().canonical_name().unwrap();

        assert_ne!(a, b);
        assert!(a.ends_with("Wrapper<u8>"));
    }

    #[test]
    fn test_of_val_matches_of() {
        let value = ThingDoer;

        assert_eq!(TypeIdentifier::of_val(&value), TypeIdentifier::of::<ThingDoer>());
    }

    #[test]
    fn test_unsized_types() {
        assert_eq!(TypeIdentifier::of::<str>().canonical_name().unwrap(), "str");
        assert!(TypeIdentifier::of::<dyn std::error::Error>()
            .canonical_name()
            .is_ok());
    }

    #[test]
    fn test_closure_is_rejected() {
        let closure = || 42;
        let id = TypeIdentifier::of_val(&closure);

        assert_matches!(
            id.canonical_name(),
            Err(Error::InvalidIdentifier { type_name }) if type_name.contains("{{closure}}")
        );
    }

    #[test]
    fn test_async_block_is_rejected() {
        let fut = async {};
        let id = TypeIdentifier::of_val(&fut);

        assert_matches!(id.canonical_name(), Err(Error::InvalidIdentifier { .. }));
    }
}
