//! Macros making implementing error flag sets easier.

/// Creates a set of error flags wrapping an integer.
///
/// Each flag is given as its constant name, its bit value, and the static
/// text that describes it. The flags are kept in an internal table in the
/// order they are given which is also the order in which they are iterated
/// over and described.
///
/// This adds impls for `BitOr`, `BitOrAssign`, `Debug`, and `Default`.
macro_rules! error_flags {
    ( $(#[$attr:meta])* =>
      $flagtype:ident, $inttype:path;
      $( $(#[$variant_attr:meta])* ( $variant:ident =>
                                        $value:expr, $descr:expr) )* ) => {
        $(#[$attr])*
        #[derive(Clone, Copy, Default, Eq, Hash, PartialEq)]
        pub struct $flagtype($inttype);

        impl $flagtype {
            $(
                $(#[$variant_attr])*
                pub const $variant: $flagtype = $flagtype($value);
            )*

            /// The named flags in their canonical order.
            const TABLE: &'static [($flagtype, &'static str, &'static str)]
                = &[
                    $( ($flagtype::$variant, stringify!($variant), $descr), )*
                ];
        }

        impl $flagtype {
            /// Returns a set without any flags.
            #[must_use]
            pub const fn empty() -> Self {
                Self(0)
            }

            /// Returns a value from its raw integer value.
            ///
            /// Bits that don’t correspond to a named flag are kept.
            #[must_use]
            pub const fn from_bits(value: $inttype) -> Self {
                Self(value)
            }

            /// Returns the raw integer value.
            #[must_use]
            pub const fn bits(self) -> $inttype {
                self.0
            }

            /// Returns whether no bit at all is set.
            #[must_use]
            pub const fn is_empty(self) -> bool {
                self.0 == 0
            }

            /// Returns whether all bits of `other` are set in `self`.
            #[must_use]
            pub const fn contains(self, other: Self) -> bool {
                self.0 & other.0 == other.0
            }

            /// Returns whether `self` and `other` share at least one bit.
            #[must_use]
            pub const fn intersects(self, other: Self) -> bool {
                self.0 & other.0 != 0
            }

            /// Sets all bits of `other` in `self`.
            pub fn insert(&mut self, other: Self) {
                self.0 |= other.0
            }

            /// Returns the static description of a single named flag.
            #[must_use]
            pub fn description(self) -> Option<&'static str> {
                Self::TABLE.iter().find_map(|&(flag, _, descr)| {
                    (flag == self).then_some(descr)
                })
            }

            /// Returns an iterator over the named flags set in `self`.
            pub fn iter(self) -> impl Iterator<Item = $flagtype> {
                Self::TABLE.iter().filter_map(move |&(flag, _, _)| {
                    self.intersects(flag).then_some(flag)
                })
            }
        }

        //--- BitOr and BitOrAssign

        impl core::ops::BitOr for $flagtype {
            type Output = Self;

            fn bitor(self, other: Self) -> Self {
                Self(self.0 | other.0)
            }
        }

        impl core::ops::BitOrAssign for $flagtype {
            fn bitor_assign(&mut self, other: Self) {
                self.insert(other)
            }
        }

        //--- From

        impl From<$inttype> for $flagtype {
            fn from(value: $inttype) -> Self {
                $flagtype::from_bits(value)
            }
        }

        impl From<$flagtype> for $inttype {
            fn from(value: $flagtype) -> Self {
                value.bits()
            }
        }

        //--- Debug

        impl core::fmt::Debug for $flagtype {
            fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
                f.write_str(concat!(stringify!($flagtype), "("))?;
                let mut first = true;
                let mut rest = self.0;
                for &(flag, name, _) in Self::TABLE {
                    if self.intersects(flag) {
                        if !first {
                            f.write_str(" | ")?;
                        }
                        f.write_str(name)?;
                        first = false;
                        rest &= !flag.0;
                    }
                }
                if rest != 0 {
                    if !first {
                        f.write_str(" | ")?;
                    }
                    write!(f, "{:#x}", rest)?;
                }
                f.write_str(")")
            }
        }
    }
}
