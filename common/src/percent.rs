//! [`Percent`]-related definitions.

use std::str::FromStr;

use derive_more::Display;
use rust_decimal::Decimal;

/// Floating-point percentage.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
pub struct Percent(Decimal);

impl Percent {
    /// Creates a new [`Percent`] by checking the provided value is not less
    /// than `0` and not greater than `100`.
    #[must_use]
    pub fn new(val: impl Into<Decimal>) -> Option<Self> {
        let val = val.into();
        (Decimal::ZERO..=Decimal::ONE_HUNDRED)
            .contains(&val)
            .then_some(Self(val))
    }

    /// Creates a new [`Percent`] from the provided whole number of percents.
    ///
    /// [`None`] is returned if `val` is greater than `100`.
    #[must_use]
    pub const fn whole(val: u8) -> Option<Self> {
        if val > 100 {
            return None;
        }
        Some(Self(Decimal::from_parts(val as u32, 0, 0, false, 0)))
    }

    /// Returns this [`Percent`] of the provided `amount`.
    ///
    /// [`None`] is returned if the intermediate product overflows.
    #[must_use]
    pub fn checked_of(self, amount: Decimal) -> Option<Decimal> {
        amount.checked_mul(self.0)?.checked_div(Decimal::ONE_HUNDRED)
    }
}

impl FromStr for Percent {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decimal::from_str(s.trim_end_matches('%'))
            .ok()
            .and_then(Self::new)
            .ok_or("invalid percent value")
    }
}

#[cfg(feature = "serde")]
mod serde {
    //! Module providing integration with [`serde`] crate.

    use std::{fmt, str::FromStr as _};

    use rust_decimal::Decimal;
    use serde::{
        de::{self, Visitor},
        Deserialize, Deserializer, Serialize, Serializer,
    };

    use super::Percent;

    impl Serialize for Percent {
        fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
            s.collect_str(self)
        }
    }

    impl<'de> Deserialize<'de> for Percent {
        fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
            d.deserialize_any(PercentVisitor)
        }
    }

    /// [`Visitor`] accepting a [`Percent`] written either as a number or as a
    /// string.
    struct PercentVisitor;

    impl PercentVisitor {
        /// Validates the parsed `val` as a [`Percent`].
        fn check<E: de::Error>(val: Decimal) -> Result<Percent, E> {
            Percent::new(val).ok_or_else(|| {
                E::custom(format!("`{val}` is out of `[0, 100]` range"))
            })
        }
    }

    impl Visitor<'_> for PercentVisitor {
        type Value = Percent;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a percentage in `[0, 100]` range")
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<Percent, E> {
            Self::check(Decimal::from(v))
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<Percent, E> {
            Self::check(Decimal::from(v))
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<Percent, E> {
            Decimal::try_from(v)
                .map_err(|e| E::custom(format!("invalid percent `{v}`: {e}")))
                .and_then(Self::check)
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Percent, E> {
            Percent::from_str(v).map_err(E::custom)
        }
    }
}
