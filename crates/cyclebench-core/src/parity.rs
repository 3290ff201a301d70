//! Odd/even classification.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Integer types that can be tested for oddness.
///
/// Filter operations are generic over this trait so the same strategy code
/// works for any key or element width.
///
/// # Example
///
/// ```
/// use cyclebench_core::Parity;
///
/// assert!(3u8.is_odd());
/// assert!(10usize.is_even());
/// assert!((-7i64).is_odd());
/// ```
pub trait Parity {
    fn is_odd(&self) -> bool;

    fn is_even(&self) -> bool {
        !self.is_odd()
    }
}

macro_rules! impl_parity {
    ($($t:ty),* $(,)?) => {
        $(
            impl Parity for $t {
                #[inline]
                fn is_odd(&self) -> bool {
                    *self % 2 != 0
                }
            }
        )*
    };
}

impl_parity!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

/// Value stored by the build-mapping operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tag {
    Even,
    Odd,
}

impl Tag {
    /// Tags a value by its parity.
    ///
    /// ```
    /// use cyclebench_core::Tag;
    ///
    /// assert_eq!(Tag::of(&4u32), Tag::Even);
    /// assert_eq!(Tag::of(&5u32), Tag::Odd);
    /// ```
    #[inline]
    pub fn of<T: Parity>(value: &T) -> Self {
        if value.is_even() {
            Tag::Even
        } else {
            Tag::Odd
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Tag::Even => "even",
            Tag::Odd => "odd",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
