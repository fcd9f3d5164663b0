//! [`AddOn`] definitions.

use common::define_kind;

define_kind! {
    #[doc = "Optional paid extra selected independently of a room."]
    enum AddOn {
        #[doc = "Breakfast for every guest on every night of a stay."]
        Breakfast = 1,

        #[doc = "Transfer from the airport to the hotel."]
        AirportPickup = 2,

        #[doc = "Check-in before the regular check-in time."]
        EarlyCheckIn = 3,

        #[doc = "Check-out after the regular check-out time."]
        LateCheckOut = 4,
    }
}

/// Set of selected [`AddOn`]s.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Selection {
    /// Whether [`AddOn::Breakfast`] is selected.
    breakfast: bool,

    /// Whether [`AddOn::AirportPickup`] is selected.
    airport_pickup: bool,

    /// Whether [`AddOn::EarlyCheckIn`] is selected.
    early_check_in: bool,

    /// Whether [`AddOn::LateCheckOut`] is selected.
    late_check_out: bool,
}

impl Selection {
    /// Returns this [`Selection`] with the provided [`AddOn`] selected.
    #[must_use]
    pub fn with(mut self, add_on: AddOn) -> Self {
        *self.flag_mut(add_on) = true;
        self
    }

    /// Indicates whether the provided [`AddOn`] is selected.
    #[must_use]
    pub fn is_selected(&self, add_on: AddOn) -> bool {
        match add_on {
            AddOn::Breakfast => self.breakfast,
            AddOn::AirportPickup => self.airport_pickup,
            AddOn::EarlyCheckIn => self.early_check_in,
            AddOn::LateCheckOut => self.late_check_out,
        }
    }

    /// Iterates over the selected [`AddOn`]s in their declaration order.
    pub fn selected(&self) -> impl Iterator<Item = AddOn> + '_ {
        AddOn::ALL
            .iter()
            .copied()
            .filter(|add_on| self.is_selected(*add_on))
    }

    /// Returns the flag of the provided [`AddOn`].
    fn flag_mut(&mut self, add_on: AddOn) -> &mut bool {
        match add_on {
            AddOn::Breakfast => &mut self.breakfast,
            AddOn::AirportPickup => &mut self.airport_pickup,
            AddOn::EarlyCheckIn => &mut self.early_check_in,
            AddOn::LateCheckOut => &mut self.late_check_out,
        }
    }
}

impl FromIterator<AddOn> for Selection {
    fn from_iter<I: IntoIterator<Item = AddOn>>(iter: I) -> Self {
        iter.into_iter().fold(Self::default(), Self::with)
    }
}
