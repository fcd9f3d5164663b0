//! [`Query`] collection related to multiple [`Room`]s.

use common::{
    operations::{By, Select},
    pagination,
};
use smart_default::SmartDefault;
use tracerr::Traced;

use crate::{
    domain::{room, Room},
    infra::{database, Database},
    Service,
};

use super::Query;

/// Page of [`Room`]s.
pub type Page = pagination::Page<Room>;

/// [`Query`] searching the catalog for [`Room`]s.
#[derive(Clone, Debug, SmartDefault)]
pub struct Search {
    /// [`room::Filter`] the listed [`Room`]s should satisfy.
    pub filter: room::Filter,

    /// [`room::Sort`] order of the listed [`Room`]s.
    pub sort: room::Sort,

    /// [`pagination::Arguments`] of the requested [`Page`].
    #[default(Search::DEFAULT_PAGE)]
    pub page: pagination::Arguments,
}

impl Search {
    /// Default number of [`Room`]s on a [`Page`].
    pub const DEFAULT_PAGE_SIZE: usize = 6;

    /// First [`Page`] of the default size.
    const DEFAULT_PAGE: pagination::Arguments =
        match pagination::Arguments::new(1, Self::DEFAULT_PAGE_SIZE) {
            Some(args) => args,
            None => panic!("page number and size are not zero"),
        };
}

impl<Db, Clk> Query<Search> for Service<Db, Clk>
where
    Db: Database<
        Select<By<Vec<Room>, room::Filter>>,
        Ok = Vec<Room>,
        Err = Traced<database::Error>,
    >,
{
    type Ok = Page;
    type Err = Traced<database::Error>;

    async fn execute(&self, query: Search) -> Result<Self::Ok, Self::Err> {
        let Search { filter, sort, page } = query;

        let mut rooms = self
            .database()
            .execute(Select(By::new(filter)))
            .await
            .map_err(tracerr::wrap!())?;
        rooms.sort_by(|a, b| sort.compare(a, b));

        Ok(Page::cut(page, rooms))
    }
}

#[cfg(test)]
mod spec {
    use common::pagination;
    use rust_decimal::Decimal;

    use crate::{domain::room, query::fixture, Query as _};

    use super::Search;

    fn ids(page: &super::Page) -> Vec<u32> {
        page.items.iter().map(|r| r.id.into()).collect()
    }

    #[tokio::test]
    async fn lists_cheapest_first_by_default() {
        let svc = fixture::service("2025-11-01T10:00:00Z");

        let page = svc.execute(Search::default()).await.unwrap();

        assert_eq!(ids(&page), vec![4, 1, 2, 5, 3, 6]);
        assert_eq!(page.total_items, 6);
        assert_eq!(page.total_pages(), 1);
    }

    #[tokio::test]
    async fn filters_rooms() {
        let svc = fixture::service("2025-11-01T10:00:00Z");

        let page = svc
            .execute(Search {
                filter: room::Filter {
                    price: Some(Decimal::from(200)..=Decimal::from(400)),
                    guests: Some(2),
                    ..room::Filter::default()
                },
                ..Search::default()
            })
            .await
            .unwrap();
        assert_eq!(ids(&page), vec![1, 2, 5]);

        let page = svc
            .execute(Search {
                filter: room::Filter {
                    kind: Some(room::Kind::Deluxe),
                    ..room::Filter::default()
                },
                sort: room::Sort::PriceHigh,
                ..Search::default()
            })
            .await
            .unwrap();
        assert_eq!(ids(&page), vec![6, 1]);

        let page = svc
            .execute(Search {
                filter: room::Filter {
                    amenities: [room::Amenity::Pool, room::Amenity::Gym].into(),
                    beds: [room::Bed::King, room::Bed::Queen].into(),
                    ..room::Filter::default()
                },
                ..Search::default()
            })
            .await
            .unwrap();
        assert_eq!(ids(&page), vec![1, 5, 3]);

        let page = svc
            .execute(Search {
                filter: room::Filter {
                    amenities: [room::Amenity::Spa].into(),
                    beds: [room::Bed::Twin].into(),
                    ..room::Filter::default()
                },
                ..Search::default()
            })
            .await
            .unwrap();
        assert!(page.items.is_empty());
    }

    #[tokio::test]
    async fn sorts_rooms() {
        let svc = fixture::service("2025-11-01T10:00:00Z");

        for (sort, expected) in [
            (room::Sort::PriceHigh, vec![6, 3, 5, 2, 1, 4]),
            (room::Sort::Rating, vec![3, 2, 6, 1, 5, 4]),
            (room::Sort::Name, vec![1, 2, 5, 6, 3, 4]),
            (room::Sort::Newest, vec![6, 5, 4, 3, 2, 1]),
        ] {
            let page = svc
                .execute(Search {
                    sort,
                    ..Search::default()
                })
                .await
                .unwrap();

            assert_eq!(ids(&page), expected, "sorted by `{sort}`");
        }
    }

    #[tokio::test]
    async fn paginates_rooms() {
        let svc = fixture::service("2025-11-01T10:00:00Z");

        let page = svc
            .execute(Search {
                page: pagination::Arguments::new(2, 4).unwrap(),
                ..Search::default()
            })
            .await
            .unwrap();

        assert_eq!(ids(&page), vec![3, 6]);
        assert_eq!(page.total_pages(), 2);
        assert!(page.has_previous_page());
        assert!(!page.has_next_page());
    }
}
