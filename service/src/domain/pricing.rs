//! Pricing of a booking.
//!
//! Every amount here is computed from caller-supplied values and a single
//! [`Config`], so the same inputs always give the same [`Breakdown`].

use common::{Currency, Date, Money, Percent};
use derive_more::{Display, Error};
use rust_decimal::Decimal;
use smart_default::SmartDefault;

use crate::domain::{add_on, AddOn};

/// Default tax rate.
const DEFAULT_TAX_RATE: Percent = match Percent::whole(15) {
    Some(rate) => rate,
    None => panic!("15% is a valid `Percent`"),
};

/// Fees and rates every booking is priced with.
#[derive(Clone, Copy, Debug, Eq, PartialEq, SmartDefault)]
pub struct Config {
    /// [`Currency`] of every price.
    #[default(Currency::Usd)]
    pub currency: Currency,

    /// Flat fee charged once per booking.
    #[default(Decimal::from(45))]
    pub service_fee: Decimal,

    /// Share of the room total charged as taxes.
    #[default(DEFAULT_TAX_RATE)]
    pub tax_rate: Percent,

    /// Price of [`AddOn::Breakfast`] per guest per night.
    #[default(Decimal::from(15))]
    pub breakfast: Decimal,

    /// Flat price of [`AddOn::AirportPickup`].
    #[default(Decimal::from(50))]
    pub airport_pickup: Decimal,

    /// Flat price of [`AddOn::EarlyCheckIn`].
    #[default(Decimal::from(50))]
    pub early_check_in: Decimal,

    /// Flat price of [`AddOn::LateCheckOut`].
    #[default(Decimal::from(30))]
    pub late_check_out: Decimal,
}

impl Config {
    /// Returns the cost of the provided [`AddOn`] for the given number of
    /// `guests` and `nights`.
    ///
    /// [`None`] is returned if the cost overflows.
    #[must_use]
    pub fn add_on_cost(
        &self,
        add_on: AddOn,
        guests: u32,
        nights: u32,
    ) -> Option<Money> {
        let amount = match add_on {
            AddOn::Breakfast => self
                .breakfast
                .checked_mul(Decimal::from(guests))?
                .checked_mul(Decimal::from(nights))?,
            AddOn::AirportPickup => self.airport_pickup,
            AddOn::EarlyCheckIn => self.early_check_in,
            AddOn::LateCheckOut => self.late_check_out,
        };
        Some(Money::new(amount, self.currency))
    }

    /// Returns the itemized costs of the selected [`AddOn`]s.
    ///
    /// Unselected [`AddOn`]s are omitted. [`None`] is returned if any cost
    /// overflows.
    #[must_use]
    pub fn add_on_costs(
        &self,
        add_ons: &add_on::Selection,
        guests: u32,
        nights: u32,
    ) -> Option<Vec<(AddOn, Money)>> {
        add_ons
            .selected()
            .map(|add_on| {
                Some((add_on, self.add_on_cost(add_on, guests, nights)?))
            })
            .collect()
    }

    /// Returns the total cost of the selected [`AddOn`]s.
    ///
    /// [`None`] is returned if the total overflows.
    #[must_use]
    pub fn add_on_total(
        &self,
        add_ons: &add_on::Selection,
        guests: u32,
        nights: u32,
    ) -> Option<Money> {
        add_ons.selected().try_fold(Money::zero(self.currency), |sum, a| {
            sum.checked_add(self.add_on_cost(a, guests, nights)?)
        })
    }

    /// Prices a stay of `nights` for `guests` in a room with the provided
    /// `nightly_price` and the selected `add_ons`.
    ///
    /// # Errors
    ///
    /// Errors with [`InvalidInput`] if the `nightly_price` is negative or is
    /// not in the configured [`Currency`], if there are no `guests`, or if
    /// any amount is too large to be represented.
    pub fn quote(
        &self,
        nightly_price: Money,
        nights: u32,
        guests: u32,
        add_ons: &add_on::Selection,
    ) -> Result<Breakdown, InvalidInput> {
        if nightly_price.is_negative() {
            return Err(InvalidInput::NegativePrice(nightly_price));
        }
        if nightly_price.currency != self.currency {
            return Err(InvalidInput::CurrencyMismatch {
                expected: self.currency,
                actual: nightly_price.currency,
            });
        }
        if guests == 0 {
            return Err(InvalidInput::NoGuests);
        }

        let room_total =
            room_total(nightly_price, nights).ok_or(InvalidInput::Overflow)?;
        let service_fee = Money::new(self.service_fee, self.currency);
        let taxes =
            taxes(room_total, self.tax_rate).ok_or(InvalidInput::Overflow)?;
        let add_ons = self
            .add_on_costs(add_ons, guests, nights)
            .ok_or(InvalidInput::Overflow)?;
        let add_on_total = add_ons
            .iter()
            .try_fold(Money::zero(self.currency), |sum, (_, cost)| {
                sum.checked_add(*cost)
            })
            .ok_or(InvalidInput::Overflow)?;
        let grand_total = [service_fee, taxes, add_on_total]
            .into_iter()
            .try_fold(room_total, Money::checked_add)
            .ok_or(InvalidInput::Overflow)?;

        Ok(Breakdown {
            nights,
            nightly_price,
            room_total,
            service_fee,
            taxes,
            add_ons,
            add_on_total,
            grand_total,
        })
    }
}

/// Itemized price of a booking.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Breakdown {
    /// Number of nights the room is paid for.
    pub nights: u32,

    /// Price of a single night.
    pub nightly_price: Money,

    /// Price of all the nights.
    pub room_total: Money,

    /// Flat per-booking fee.
    pub service_fee: Money,

    /// Taxes on the [`Breakdown::room_total`].
    pub taxes: Money,

    /// Costs of the selected [`AddOn`]s only.
    pub add_ons: Vec<(AddOn, Money)>,

    /// Sum of the [`Breakdown::add_ons`] costs.
    pub add_on_total: Money,

    /// Sum of everything above.
    pub grand_total: Money,
}

/// Returns the price of `nights` at the provided `nightly_price`.
///
/// [`None`] is returned if the price overflows.
#[must_use]
pub fn room_total(nightly_price: Money, nights: u32) -> Option<Money> {
    nightly_price.checked_times(nights)
}

/// Returns the taxes on the provided `room_total`, rounded to whole currency
/// units with midpoints rounded away from zero.
///
/// [`None`] is returned if the taxes overflow.
#[must_use]
pub fn taxes(room_total: Money, rate: Percent) -> Option<Money> {
    let amount = rate.checked_of(room_total.amount)?;
    Some(Money::new(amount, room_total.currency).round())
}

/// Invalid input of a price or stay computation.
#[derive(Clone, Copy, Debug, Display, Error, Eq, PartialEq)]
pub enum InvalidInput {
    /// Price is below zero.
    #[display("price `{_0}` is negative")]
    NegativePrice(#[error(not(source))] Money),

    /// Price is in another [`Currency`] than prices are computed in.
    #[display("price is in `{actual}`, but `{expected}` is expected")]
    CurrencyMismatch {
        /// [`Currency`] prices are computed in.
        expected: Currency,

        /// [`Currency`] of the provided price.
        actual: Currency,
    },

    /// Number of guests is zero.
    #[display("at least one guest is required")]
    NoGuests,

    /// Departure is not later than the arrival.
    #[display("check-out `{check_out}` is not after check-in `{check_in}`")]
    CheckOutNotAfterCheckIn {
        /// [`Date`] of the arrival.
        check_in: Date,

        /// [`Date`] of the departure.
        check_out: Date,
    },

    /// Computed amount is too large to be represented.
    #[display("price is too large to be computed")]
    Overflow,
}

#[cfg(test)]
mod spec {
    use common::{Currency, Money, Percent};
    use rust_decimal::Decimal;

    use crate::domain::{add_on::Selection, AddOn};

    use super::{room_total, taxes, Config, InvalidInput};

    fn usd(amount: i64) -> Money {
        Money::new(amount, Currency::Usd)
    }

    fn selection(add_ons: &[AddOn]) -> Selection {
        add_ons.iter().copied().collect()
    }

    #[test]
    fn prices_reference_booking() {
        let breakdown = Config::default()
            .quote(
                usd(299),
                3,
                2,
                &selection(&[
                    AddOn::Breakfast,
                    AddOn::AirportPickup,
                    AddOn::LateCheckOut,
                ]),
            )
            .unwrap();

        assert_eq!(breakdown.room_total, usd(897));
        assert_eq!(breakdown.service_fee, usd(45));
        assert_eq!(breakdown.taxes, usd(135));
        assert_eq!(
            breakdown.add_ons,
            vec![
                (AddOn::Breakfast, usd(90)),
                (AddOn::AirportPickup, usd(50)),
                (AddOn::LateCheckOut, usd(30)),
            ],
        );
        assert_eq!(breakdown.add_on_total, usd(170));
        assert_eq!(breakdown.grand_total, usd(1247));
    }

    #[test]
    fn room_total_is_linear() {
        for price in [0, 1, 150, 299, 450] {
            for nights in 0..10 {
                assert_eq!(
                    room_total(usd(price), nights),
                    Some(usd(price * i64::from(nights))),
                );
            }
        }
    }

    #[test]
    fn add_ons_are_additive() {
        let config = Config::default();
        for a in AddOn::ALL {
            for b in AddOn::ALL.iter().filter(|b| *b != a) {
                let total = |add_ons: &[AddOn]| {
                    config.add_on_total(&selection(add_ons), 3, 4).unwrap()
                };

                assert_eq!(
                    total(&[*a, *b]).amount,
                    total(&[*a]).amount + total(&[*b]).amount,
                );
            }
        }
    }

    #[test]
    fn breakfast_scales_with_guests_and_nights() {
        let config = Config::default();

        assert_eq!(config.add_on_cost(AddOn::Breakfast, 2, 3), Some(usd(90)));
        assert_eq!(config.add_on_cost(AddOn::Breakfast, 4, 3), Some(usd(180)));
        assert_eq!(config.add_on_cost(AddOn::Breakfast, 2, 0), Some(usd(0)));
        assert_eq!(config.add_on_cost(AddOn::AirportPickup, 4, 7), Some(usd(50)));
        assert_eq!(config.add_on_cost(AddOn::EarlyCheckIn, 1, 1), Some(usd(50)));
        assert_eq!(config.add_on_cost(AddOn::LateCheckOut, 1, 1), Some(usd(30)));
    }

    #[test]
    fn taxes_are_rounded_share_of_room_total() {
        let rate = Percent::whole(15).unwrap();

        assert_eq!(taxes(usd(897), rate), Some(usd(135)));
        assert_eq!(taxes(usd(500), rate), Some(usd(75)));
        // 15% of 1350 is 202.5, which rounds up.
        assert_eq!(taxes(usd(1350), rate), Some(usd(203)));
        assert_eq!(taxes(usd(0), rate), Some(usd(0)));
        assert_eq!(taxes(usd(1000), rate), Some(usd(150)));
        assert_eq!(taxes(usd(2000), rate), Some(usd(300)));
    }

    #[test]
    fn grand_total_is_sum_of_parts() {
        let config = Config::default();
        let all = [
            AddOn::Breakfast,
            AddOn::AirportPickup,
            AddOn::EarlyCheckIn,
            AddOn::LateCheckOut,
        ];
        for mask in 0_u8..16 {
            let add_ons = all
                .iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, a)| *a)
                .collect::<Selection>();
            for (price, nights, guests) in [(250, 2, 2), (333, 1, 1), (0, 0, 3)]
            {
                let b = config.quote(usd(price), nights, guests, &add_ons).unwrap();

                assert_eq!(
                    b.grand_total.amount,
                    b.room_total.amount
                        + b.service_fee.amount
                        + b.taxes.amount
                        + b.add_on_total.amount,
                );
                assert_eq!(b.add_ons.len(), add_ons.selected().count());
            }
        }
    }

    #[test]
    fn zero_nights_and_no_add_ons_are_valid() {
        let b = Config::default()
            .quote(usd(250), 0, 1, &Selection::default())
            .unwrap();

        assert_eq!(b.room_total, usd(0));
        assert_eq!(b.taxes, usd(0));
        assert!(b.add_ons.is_empty());
        assert_eq!(b.add_on_total, usd(0));
        assert_eq!(b.grand_total, usd(45));
    }

    #[test]
    fn uses_configured_fees() {
        let config = Config {
            service_fee: Decimal::from(50),
            breakfast: Decimal::from(25),
            airport_pickup: Decimal::from(75),
            late_check_out: Decimal::from(50),
            ..Config::default()
        };
        let b = config
            .quote(
                usd(250),
                2,
                2,
                &selection(&[AddOn::Breakfast, AddOn::AirportPickup]),
            )
            .unwrap();

        assert_eq!(b.service_fee, usd(50));
        assert_eq!(b.add_on_total, usd(175));
        assert_eq!(b.grand_total, usd(500 + 50 + 75 + 175));
    }

    #[test]
    fn rejects_invalid_input() {
        let config = Config::default();
        let none = Selection::default();

        assert_eq!(
            config.quote(usd(-1), 1, 1, &none),
            Err(InvalidInput::NegativePrice(usd(-1))),
        );
        assert_eq!(
            config.quote(usd(100), 1, 0, &none),
            Err(InvalidInput::NoGuests),
        );
        assert_eq!(
            config.quote(Money::new(100, Currency::Eur), 1, 1, &none),
            Err(InvalidInput::CurrencyMismatch {
                expected: Currency::Usd,
                actual: Currency::Eur,
            }),
        );
    }

    #[test]
    fn rejects_amounts_too_large_to_compute() {
        let config = Config::default();
        let huge = Money::new(Decimal::MAX / Decimal::TWO, Currency::Usd);

        assert_eq!(
            config.quote(huge, 3, 1, &Selection::default()),
            Err(InvalidInput::Overflow),
        );
        assert!(config
            .quote(usd(1), u32::MAX, 4, &selection(&[AddOn::Breakfast]))
            .is_ok());

        let pricey = Config {
            breakfast: Decimal::MAX / Decimal::TEN,
            ..Config::default()
        };
        assert_eq!(
            pricey.quote(usd(100), 7, 4, &selection(&[AddOn::Breakfast])),
            Err(InvalidInput::Overflow),
        );
        assert_eq!(pricey.add_on_cost(AddOn::Breakfast, 4, 7), None);

        let fees = Config {
            service_fee: Decimal::MAX,
            ..Config::default()
        };
        assert_eq!(
            fees.quote(usd(1), 1, 1, &Selection::default()),
            Err(InvalidInput::Overflow),
        );
    }
}
