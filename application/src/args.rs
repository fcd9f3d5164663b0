//! [`Args`] definitions.

use std::num::NonZeroUsize;

use clap::Parser;
use common::{pagination, Date, DateTime};
use rust_decimal::Decimal;
use service::{
    command::CreateBooking,
    domain::{
        booking::{guest, Guest},
        room, AddOn, InvalidInput, Stay,
    },
    query::{self, rooms::Search},
};

/// Booking desk of the Glimmora hotel.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to the configuration file.
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,

    /// [`Command`] to run.
    #[command(subcommand)]
    pub command: Command,
}

impl Args {
    /// Parses command line arguments.
    ///
    /// # Errors
    ///
    /// Errors if failed to parse command line arguments.
    pub fn parse() -> Result<Self, clap::Error> {
        <Self as Parser>::try_parse()
    }
}

/// Command to run.
#[derive(Debug, clap::Subcommand)]
pub enum Command {
    /// Lists catalog rooms.
    Rooms(Rooms),

    /// Shows a single catalog room.
    Room(Room),

    /// Prices a stay in a room.
    Quote(Quote),

    /// Books a stay in a room.
    Book(Book),

    /// Checks whether pre-check-in is open.
    Eligibility(Eligibility),
}

/// Arguments of the [`Command::Rooms`].
#[derive(Clone, Debug, clap::Args)]
pub struct Rooms {
    /// Lowest nightly price to list.
    #[arg(long)]
    pub min_price: Option<Decimal>,

    /// Highest nightly price to list.
    #[arg(long)]
    pub max_price: Option<Decimal>,

    /// Kind of rooms to list.
    #[arg(long)]
    pub kind: Option<room::Kind>,

    /// Number of guests a listed room should accommodate.
    #[arg(long)]
    pub guests: Option<u32>,

    /// Amenity a listed room should have, may be repeated.
    #[arg(long = "amenity")]
    pub amenities: Vec<room::Amenity>,

    /// Bed type a listed room may have, may be repeated.
    #[arg(long = "bed")]
    pub beds: Vec<room::Bed>,

    /// Order of listed rooms.
    #[arg(long, default_value = "PRICE_LOW")]
    pub sort: room::Sort,

    /// 1-based number of the page to list.
    #[arg(long, default_value = "1")]
    pub page: NonZeroUsize,

    /// Number of rooms on a page.
    #[arg(long, default_value = "6")]
    pub per_page: NonZeroUsize,
}

impl From<Rooms> for Search {
    fn from(args: Rooms) -> Self {
        let Rooms {
            min_price,
            max_price,
            kind,
            guests,
            amenities,
            beds,
            sort,
            page,
            per_page,
        } = args;

        let price = (min_price.is_some() || max_price.is_some()).then(|| {
            min_price.unwrap_or(Decimal::MIN)..=max_price.unwrap_or(Decimal::MAX)
        });
        Self {
            filter: room::Filter {
                price,
                kind,
                guests,
                amenities: amenities.into_iter().collect(),
                beds: beds.into_iter().collect(),
            },
            sort,
            page: pagination::Arguments::non_zero(page, per_page),
        }
    }
}

/// Arguments of the [`Command::Room`].
#[derive(Clone, Copy, Debug, clap::Args)]
pub struct Room {
    /// ID of the room to show.
    #[arg(long)]
    pub id: room::Id,
}

/// Arguments of the [`Command::Quote`].
#[derive(Clone, Debug, clap::Args)]
pub struct Quote {
    /// ID of the room to stay in.
    #[arg(long)]
    pub room: room::Id,

    /// Arrival date, as `YYYY-MM-DD`.
    #[arg(long)]
    pub check_in: Date,

    /// Departure date, as `YYYY-MM-DD`.
    #[arg(long)]
    pub check_out: Date,

    /// Number of guests staying.
    #[arg(long, default_value = "1")]
    pub guests: u32,

    /// Add-on to include, may be repeated.
    #[arg(long = "add-on")]
    pub add_ons: Vec<AddOn>,
}

impl TryFrom<Quote> for query::Quote {
    type Error = InvalidInput;

    fn try_from(args: Quote) -> Result<Self, Self::Error> {
        let Quote {
            room,
            check_in,
            check_out,
            guests,
            add_ons,
        } = args;

        Ok(Self {
            room_id: room,
            stay: Stay::new(check_in, check_out)?,
            guests,
            add_ons: add_ons.into_iter().collect(),
        })
    }
}

/// Arguments of the [`Command::Book`].
#[derive(Clone, Debug, clap::Args)]
pub struct Book {
    /// Stay to book.
    #[command(flatten)]
    pub quote: Quote,

    /// First name of the guest.
    #[arg(long)]
    pub first_name: guest::Name,

    /// Last name of the guest.
    #[arg(long)]
    pub last_name: guest::Name,

    /// Email of the guest.
    #[arg(long)]
    pub email: guest::Email,

    /// Phone number of the guest.
    #[arg(long)]
    pub phone: guest::Phone,
}

impl TryFrom<Book> for CreateBooking {
    type Error = InvalidInput;

    fn try_from(args: Book) -> Result<Self, Self::Error> {
        let Book {
            quote,
            first_name,
            last_name,
            email,
            phone,
        } = args;
        let query::Quote {
            room_id,
            stay,
            guests,
            add_ons,
        } = quote.try_into()?;

        Ok(Self {
            room_id,
            stay,
            guests,
            guest: Guest {
                first_name,
                last_name,
                email,
                phone,
            },
            add_ons,
        })
    }
}

/// Arguments of the [`Command::Eligibility`].
#[derive(Clone, Debug, clap::Args)]
pub struct Eligibility {
    /// Moment of the check-in, in RFC 3339 format.
    #[arg(long)]
    pub check_in_at: DateTime,

    /// Moment to check at, in RFC 3339 format, the current time if omitted.
    #[arg(long)]
    pub now: Option<DateTime>,
}
