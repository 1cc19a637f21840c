//! Capabilities of extracted property values
//!
//! Built-in checks never inspect a value's type at runtime. Instead they
//! require capabilities on the extracted type:
//!
//! - [`PropertyValue`] says whether a value is present and, if so, what the
//!   checks look at. `Option<V>` is the only absent-capable shape shipped
//!   here; every other implementation is always present.
//! - [`Emptiness`] reports whether a present value counts as empty, which is
//!   all `not_empty` needs.
//!
//! A check applied to a type lacking the capability is a compile error, not
//! a runtime failure.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};

/// A property value that may be absent.
///
/// # Example
///
/// ```rust
/// use fluentrule::predicate::PropertyValue;
///
/// assert_eq!(Some(5_i32).present(), Some(&5));
/// assert_eq!(None::<i32>.present(), None);
/// assert_eq!(5_i32.present(), Some(&5));
/// assert_eq!(String::from("hi").present(), Some("hi"));
/// ```
pub trait PropertyValue {
    /// The view handed to built-in checks when the value is present.
    type Target: ?Sized;

    /// Returns the present value, or `None` when the value is absent.
    fn present(&self) -> Option<&Self::Target>;
}

impl<V> PropertyValue for Option<V> {
    type Target = V;

    #[inline]
    fn present(&self) -> Option<&V> {
        self.as_ref()
    }
}

impl PropertyValue for String {
    type Target = str;

    #[inline]
    fn present(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl PropertyValue for &'static str {
    type Target = str;

    #[inline]
    fn present(&self) -> Option<&str> {
        Some(*self)
    }
}

impl PropertyValue for Box<str> {
    type Target = str;

    #[inline]
    fn present(&self) -> Option<&str> {
        Some(&**self)
    }
}

macro_rules! always_present {
    ($($ty:ty),* $(,)?) => {
        $(
            impl PropertyValue for $ty {
                type Target = $ty;

                #[inline]
                fn present(&self) -> Option<&$ty> {
                    Some(self)
                }
            }
        )*
    };
}

always_present!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char,
);

macro_rules! always_present_generic {
    ($($ty:ident<$($param:ident),+>),* $(,)?) => {
        $(
            impl<$($param),+> PropertyValue for $ty<$($param),+> {
                type Target = Self;

                #[inline]
                fn present(&self) -> Option<&Self> {
                    Some(self)
                }
            }
        )*
    };
}

always_present_generic!(
    Vec<V>,
    VecDeque<V>,
    HashMap<K, V>,
    BTreeMap<K, V>,
    HashSet<V>,
    BTreeSet<V>,
);

impl<V, const N: usize> PropertyValue for [V; N] {
    type Target = Self;

    #[inline]
    fn present(&self) -> Option<&Self> {
        Some(self)
    }
}

/// Emptiness of a present value, as seen by `not_empty`.
///
/// Text, sequences, maps, sets and arrays are empty when they hold no
/// elements. Scalars are never empty, so `not_empty` on a number always
/// passes once the number is present.
///
/// # Example
///
/// ```rust
/// use fluentrule::predicate::Emptiness;
///
/// assert!("".is_empty_value());
/// assert!(!vec![1].is_empty_value());
/// assert!(!0_i32.is_empty_value());
/// ```
pub trait Emptiness {
    /// True when the value holds nothing.
    fn is_empty_value(&self) -> bool;
}

impl Emptiness for str {
    #[inline]
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl Emptiness for String {
    #[inline]
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl Emptiness for Box<str> {
    #[inline]
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<E: Emptiness + ?Sized> Emptiness for &E {
    #[inline]
    fn is_empty_value(&self) -> bool {
        (**self).is_empty_value()
    }
}

impl<V> Emptiness for [V] {
    #[inline]
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<V, const N: usize> Emptiness for [V; N] {
    #[inline]
    fn is_empty_value(&self) -> bool {
        N == 0
    }
}

macro_rules! empty_by_len {
    ($($ty:ident<$($param:ident),+>),* $(,)?) => {
        $(
            impl<$($param),+> Emptiness for $ty<$($param),+> {
                #[inline]
                fn is_empty_value(&self) -> bool {
                    self.is_empty()
                }
            }
        )*
    };
}

empty_by_len!(
    Vec<V>,
    VecDeque<V>,
    HashMap<K, V>,
    BTreeMap<K, V>,
    HashSet<V>,
    BTreeSet<V>,
);

macro_rules! never_empty {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Emptiness for $ty {
                #[inline]
                fn is_empty_value(&self) -> bool {
                    false
                }
            }
        )*
    };
}

never_empty!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char,
);
