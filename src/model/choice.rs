//! # Closed Choice Sets
//!
//! The shop and burger menus are closed enumerations the user picks from by name
//! or by ordinal. Instead of reflecting over the enum at runtime, every choice type
//! carries an explicit table of `(name, ordinal, value)` tuples through the
//! [`Choice`] trait, and the `closed_choice!` macro generates that table from the
//! enum declaration so the two can never drift apart.
//!
//! ```rust
//! use burger_shop::model::{parse_choice, Choice, Shop};
//!
//! assert_eq!(parse_choice::<Shop>("Tokyo", None), Ok(Shop::Tokyo));
//! assert_eq!(parse_choice::<Shop>("2", None), Ok(Shop::NewYork));
//! assert_eq!(Shop::Taipei.ordinal(), 1);
//! ```

use super::error::SelectionError;
use std::fmt::Display;

/// A closed, enumerable set of values the user can select from.
pub trait Choice: Copy + Eq + Display + 'static {
    /// Name used in prompts and error messages (e.g. `Shop`).
    const TYPE_NAME: &'static str;

    /// Every member of the set as `(name, ordinal, value)`, in declaration order.
    const CHOICES: &'static [(&'static str, u8, Self)];

    /// The 1-based ordinal the user may type instead of the name.
    fn ordinal(self) -> u8;

    /// The display name of this value.
    fn name(self) -> &'static str;

    /// All values in declaration order.
    fn all() -> Vec<Self> {
        Self::CHOICES.iter().map(|&(_, _, value)| value).collect()
    }
}

/// Declares a closed choice enum with explicit ordinals and implements
/// [`Choice`] and `Display` for it.
macro_rules! closed_choice {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident as $label:literal {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident = $ordinal:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash,
            ::serde::Serialize, ::serde::Deserialize,
        )]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant = $ordinal
            ),+
        }

        impl $crate::model::Choice for $name {
            const TYPE_NAME: &'static str = $label;
            const CHOICES: &'static [(&'static str, u8, Self)] =
                &[$((stringify!($variant), $ordinal, $name::$variant)),+];

            fn ordinal(self) -> u8 {
                self as u8
            }

            fn name(self) -> &'static str {
                match self {
                    $($name::$variant => stringify!($variant)),+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::model::Choice::name(*self))
            }
        }
    };
}

/// Parses user input into a member of `T`.
///
/// The input is trimmed, then matched against each member's name
/// (ASCII case-insensitive) or its decimal ordinal.
///
/// # Errors
/// - [`SelectionError::InvalidSelection`] if the text names no member of `T`.
/// - [`SelectionError::UnacceptableSelection`] if `acceptable` is given and the
///   parsed value is not in it.
pub fn parse_choice<T: Choice>(
    input: &str,
    acceptable: Option<&[T]>,
) -> Result<T, SelectionError> {
    let text = input.trim();
    let ordinal = text.parse::<u8>().ok();

    let value = T::CHOICES
        .iter()
        .find(|(name, choice_ordinal, _)| {
            name.eq_ignore_ascii_case(text) || ordinal == Some(*choice_ordinal)
        })
        .map(|&(_, _, value)| value)
        .ok_or_else(|| SelectionError::InvalidSelection {
            choice: T::TYPE_NAME,
            input: text.to_string(),
        })?;

    match acceptable {
        Some(allowed) if !allowed.contains(&value) => {
            Err(SelectionError::UnacceptableSelection {
                choice: T::TYPE_NAME,
                input: text.to_string(),
            })
        }
        _ => Ok(value),
    }
}

/// Renders choices the way the prompts show them: `(1)Taipei (2)NewYork`.
pub fn list_choices<T: Choice>(choices: &[T]) -> String {
    choices
        .iter()
        .map(|choice| format!("({}){}", choice.ordinal(), choice.name()))
        .collect::<Vec<_>>()
        .join(" ")
}
