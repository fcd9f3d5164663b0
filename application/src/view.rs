//! Human-readable views of [`Service`] results.
//!
//! [`Service`]: crate::Service

use std::fmt;

use common::{DateTime, Money};
use itertools::Itertools as _;
use service::{
    domain::{self, AddOn},
    query::rooms,
};

/// Width of a label column.
const LABEL_WIDTH: usize = 24;

/// [`rooms::Page`] view as a table.
#[derive(Clone, Copy, Debug)]
pub struct Rooms<'a>(pub &'a rooms::Page);

impl fmt::Display for Rooms<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let page = self.0;

        writeln!(
            f,
            "{:>4}  {:<24}  {:<10}  {:>10}  {:>6}  {:>6}",
            "ID", "NAME", "KIND", "PER NIGHT", "GUESTS", "RATING",
        )?;
        for room in &page.items {
            writeln!(
                f,
                "{:>4}  {:<24}  {:<10}  {:>10}  {:>6}  {:>6}",
                room.id.to_string(),
                room.name.to_string(),
                room.kind.to_string(),
                room.nightly_price.to_string(),
                room.capacity.to_string(),
                room.rating.to_string(),
            )?;
        }
        write!(
            f,
            "Page {} of {} ({} rooms)",
            page.args.number(),
            page.total_pages().max(1),
            page.total_items,
        )?;
        if page.has_previous_page() {
            write!(f, ", previous: --page {}", page.args.number() - 1)?;
        }
        if page.has_next_page() {
            write!(f, ", next: --page {}", page.args.number() + 1)?;
        }
        Ok(())
    }
}

/// [`domain::Room`] view as a card.
#[derive(Clone, Copy, Debug)]
pub struct Room<'a>(pub &'a domain::Room);

impl fmt::Display for Room<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = self.0;

        writeln!(f, "{} (ID {})", r.name, r.id)?;
        field(f, "Kind", &r.kind)?;
        field(f, "Per night", &r.nightly_price)?;
        field(f, "Guests", &format_args!("up to {}", r.capacity))?;
        field(f, "Rating", &r.rating)?;
        field(f, "Bed", &r.bed)?;
        write!(
            f,
            "{:<LABEL_WIDTH$}{}",
            "Amenities",
            if r.amenities.is_empty() {
                "none".to_owned()
            } else {
                r.amenities.iter().join(", ")
            },
        )
    }
}

/// [`domain::Breakdown`] view as an itemized bill.
#[derive(Clone, Copy, Debug)]
pub struct Breakdown<'a>(pub &'a domain::Breakdown);

impl fmt::Display for Breakdown<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let b = self.0;

        line(
            f,
            &format!("Room ({} x {})", nights(b.nights), b.nightly_price),
            b.room_total,
        )?;
        line(f, "Service fee", b.service_fee)?;
        line(f, "Taxes", b.taxes)?;
        for (add_on, cost) in &b.add_ons {
            line(f, add_on_label(*add_on), *cost)?;
        }
        if !b.add_ons.is_empty() {
            line(f, "Add-ons total", b.add_on_total)?;
        }
        write!(f, "{:<LABEL_WIDTH$}{:>12}", "Total", b.grand_total.to_string())
    }
}

/// [`domain::Booking`] view as a confirmation.
#[derive(Clone, Copy, Debug)]
pub struct Booking<'a> {
    /// Viewed [`domain::Booking`].
    pub booking: &'a domain::Booking,

    /// Last moment the [`domain::Booking`] may be cancelled free of charge.
    pub free_cancellation_until: DateTime,

    /// Whether pre-check-in is open for the [`domain::Booking`] right now.
    pub pre_check_in_open: bool,
}

impl fmt::Display for Booking<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self {
            booking: b,
            free_cancellation_until,
            pre_check_in_open,
        } = *self;

        writeln!(f, "Booking {}: {}", b.status, b.confirmation)?;
        field(f, "Transaction", &b.transaction)?;
        field(f, "Room", &b.room_id)?;
        field(
            f,
            "Guest",
            &format_args!(
                "{} {} <{}>, {}",
                b.guest.first_name,
                b.guest.last_name,
                b.guest.email,
                b.guest.phone,
            ),
        )?;
        field(
            f,
            "Stay",
            &format_args!(
                "{} to {}, {}, {} guest(s)",
                b.stay.check_in(),
                b.stay.check_out(),
                nights(b.stay.nights()),
                b.guests,
            ),
        )?;
        field(f, "Check-in at", &b.check_in_at)?;
        writeln!(f)?;
        writeln!(f, "{}", Breakdown(&b.price))?;
        writeln!(f)?;
        field(f, "Free cancellation until", &free_cancellation_until)?;
        write!(
            f,
            "{:<LABEL_WIDTH$}{}",
            "Pre-check-in",
            if pre_check_in_open { "open" } else { "not open yet" },
        )
    }
}

/// Pre-check-in eligibility view.
#[derive(Clone, Copy, Debug)]
pub struct Eligibility {
    /// Moment of the check-in.
    pub check_in_at: DateTime,

    /// Moment the eligibility is checked at.
    pub now: DateTime,

    /// Whether pre-check-in is open.
    pub eligible: bool,
}

impl fmt::Display for Eligibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self {
            check_in_at,
            now,
            eligible,
        } = self;

        write!(
            f,
            "Pre-check-in for check-in at {check_in_at} is {} at {now}",
            if *eligible { "open" } else { "closed" },
        )
    }
}

/// Writes a labeled amount of [`Money`] line.
fn line(f: &mut fmt::Formatter<'_>, label: &str, amount: Money) -> fmt::Result {
    writeln!(f, "{label:<LABEL_WIDTH$}{:>12}", amount.to_string())
}

/// Writes a labeled value line.
fn field(
    f: &mut fmt::Formatter<'_>,
    label: &str,
    value: &dyn fmt::Display,
) -> fmt::Result {
    writeln!(f, "{label:<LABEL_WIDTH$}{value}")
}

/// Formats the number of nights with the noun in the proper form.
fn nights(n: u32) -> String {
    if n == 1 {
        "1 night".to_owned()
    } else {
        format!("{n} nights")
    }
}

/// Returns the human-readable label of the provided [`AddOn`].
fn add_on_label(add_on: AddOn) -> &'static str {
    match add_on {
        AddOn::Breakfast => "Breakfast",
        AddOn::AirportPickup => "Airport pickup",
        AddOn::EarlyCheckIn => "Early check-in",
        AddOn::LateCheckOut => "Late check-out",
    }
}
