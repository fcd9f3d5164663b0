//! [`Room`] definitions.

use std::{cmp::Ordering, collections::BTreeSet, ops::RangeInclusive};

use common::{define_kind, Money};
use derive_more::{AsRef, Display, From, FromStr, Into};
use rust_decimal::Decimal;

/// Room of the hotel available for booking.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Room {
    /// ID of this [`Room`].
    pub id: Id,

    /// [`Name`] of this [`Room`].
    pub name: Name,

    /// [`Kind`] of this [`Room`].
    pub kind: Kind,

    /// Price of a single night in this [`Room`].
    pub nightly_price: Money,

    /// Maximum number of guests this [`Room`] accommodates.
    pub capacity: Capacity,

    /// [`Rating`] of this [`Room`] given by its former guests.
    pub rating: Rating,

    /// [`Bed`] type of this [`Room`].
    pub bed: Bed,

    /// [`Amenity`]s available to the guests of this [`Room`].
    pub amenities: BTreeSet<Amenity>,
}

/// ID of a [`Room`].
#[derive(
    Clone,
    Copy,
    Debug,
    Display,
    Eq,
    From,
    FromStr,
    Hash,
    Into,
    Ord,
    PartialEq,
    PartialOrd,
)]
pub struct Id(u32);

/// Name of a [`Room`].
#[derive(AsRef, Clone, Debug, Display, Eq, PartialEq)]
#[as_ref(str, String)]
pub struct Name(String);

impl Name {
    /// Creates a new [`Name`] if the given `name` is valid.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        Self::check(&name).then_some(Self(name))
    }

    /// Checks whether the given `name` is a valid [`Name`].
    fn check(name: impl AsRef<str>) -> bool {
        let name = name.as_ref();
        name.trim() == name && !name.is_empty() && name.len() <= 128
    }
}

impl FromStr for Name {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Name`")
    }
}

define_kind! {
    #[doc = "Kind of a [`Room`]."]
    enum Kind {
        #[doc = "Standard room."]
        Standard = 1,

        #[doc = "Deluxe suite."]
        Deluxe = 2,

        #[doc = "Executive suite."]
        Executive = 3,

        #[doc = "Premium suite."]
        Premium = 4,

        #[doc = "Family suite."]
        Family = 5,
    }
}

define_kind! {
    #[doc = "Type of beds in a [`Room`]."]
    enum Bed {
        #[doc = "King-size bed."]
        King = 1,

        #[doc = "Queen-size bed."]
        Queen = 2,

        #[doc = "Twin beds."]
        Twin = 3,

        #[doc = "Double bed."]
        Double = 4,
    }
}

define_kind! {
    #[doc = "Facility available to the guests of a [`Room`]."]
    enum Amenity {
        #[doc = "Wireless internet."]
        Wifi = 1,

        #[doc = "Swimming pool."]
        Pool = 2,

        #[doc = "Fitness center."]
        Gym = 3,

        #[doc = "Spa center."]
        Spa = 4,

        #[doc = "On-site restaurant."]
        Restaurant = 5,

        #[doc = "Car parking."]
        Parking = 6,
    }
}

/// Maximum number of guests a [`Room`] accommodates.
#[derive(Clone, Copy, Debug, Display, Eq, Into, Ord, PartialEq, PartialOrd)]
pub struct Capacity(u32);

impl Capacity {
    /// Creates a new [`Capacity`] if the provided number of `guests` is
    /// positive.
    #[must_use]
    pub fn new(guests: u32) -> Option<Self> {
        (guests > 0).then_some(Self(guests))
    }

    /// Indicates whether the provided number of `guests` fits this
    /// [`Capacity`].
    #[must_use]
    pub fn fits(self, guests: u32) -> bool {
        guests <= self.0
    }
}

/// Rating of a [`Room`] in `[0, 5]` range.
#[derive(Clone, Copy, Debug, Display, Eq, Into, Ord, PartialEq, PartialOrd)]
pub struct Rating(Decimal);

impl Rating {
    /// Creates a new [`Rating`] if the provided value is in `[0, 5]` range.
    #[must_use]
    pub fn new(val: impl Into<Decimal>) -> Option<Self> {
        let val = val.into();
        (Decimal::ZERO..=Decimal::from(5))
            .contains(&val)
            .then_some(Self(val))
    }
}

/// Criteria a [`Room`] should satisfy to be listed.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Filter {
    /// Range the nightly price should be in, if any.
    pub price: Option<RangeInclusive<Decimal>>,

    /// [`Kind`] the [`Room`] should be of, if any.
    pub kind: Option<Kind>,

    /// Number of guests the [`Room`] should accommodate, if any.
    pub guests: Option<u32>,

    /// [`Amenity`]s the [`Room`] should have all of.
    pub amenities: BTreeSet<Amenity>,

    /// [`Bed`] types the [`Room`] should have any of.
    ///
    /// Empty means any [`Bed`] type.
    pub beds: BTreeSet<Bed>,
}

impl Filter {
    /// Indicates whether the provided [`Room`] satisfies this [`Filter`].
    #[must_use]
    pub fn matches(&self, room: &Room) -> bool {
        self.price
            .as_ref()
            .map_or(true, |range| range.contains(&room.nightly_price.amount))
            && self.kind.map_or(true, |kind| kind == room.kind)
            && self.guests.map_or(true, |guests| room.capacity.fits(guests))
            && self.amenities.is_subset(&room.amenities)
            && (self.beds.is_empty() || self.beds.contains(&room.bed))
    }
}

define_kind! {
    #[doc = "Order of listed [`Room`]s."]
    enum Sort {
        #[doc = "Cheapest first."]
        PriceLow = 1,

        #[doc = "Most expensive first."]
        PriceHigh = 2,

        #[doc = "Best rated first."]
        Rating = 3,

        #[doc = "Alphabetically by name."]
        Name = 4,

        #[doc = "Most recently added first."]
        Newest = 5,
    }
}

impl Default for Sort {
    fn default() -> Self {
        Self::PriceLow
    }
}

impl Sort {
    /// Compares the provided [`Room`]s according to this [`Sort`].
    #[must_use]
    pub fn compare(self, a: &Room, b: &Room) -> Ordering {
        match self {
            Self::PriceLow => {
                a.nightly_price.amount.cmp(&b.nightly_price.amount)
            }
            Self::PriceHigh => {
                b.nightly_price.amount.cmp(&a.nightly_price.amount)
            }
            Self::Rating => b.rating.cmp(&a.rating),
            Self::Name => AsRef::<str>::as_ref(&a.name)
                .cmp(AsRef::<str>::as_ref(&b.name)),
            Self::Newest => b.id.cmp(&a.id),
        }
    }
}
