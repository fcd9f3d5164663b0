//! Abstractions for page-numbered pagination.

use std::num::NonZeroUsize;

/// Pagination arguments.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Arguments {
    /// 1-based number of the requested page.
    number: NonZeroUsize,

    /// Maximum number of items on a page.
    size: NonZeroUsize,
}

impl Arguments {
    /// Creates new [`Arguments`] for the page with the provided 1-based
    /// `number` holding at most `size` items.
    ///
    /// [`None`] is returned if either value is zero.
    #[must_use]
    pub const fn new(number: usize, size: usize) -> Option<Self> {
        match (NonZeroUsize::new(number), NonZeroUsize::new(size)) {
            (Some(number), Some(size)) => Some(Self::non_zero(number, size)),
            _ => None,
        }
    }

    /// Creates new [`Arguments`] out of the already non-zero `number` and
    /// `size`.
    #[must_use]
    pub const fn non_zero(number: NonZeroUsize, size: NonZeroUsize) -> Self {
        Self { number, size }
    }

    /// Returns the 1-based number of the requested page.
    #[must_use]
    pub fn number(&self) -> usize {
        self.number.get()
    }

    /// Returns the maximum number of items on a page.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size.get()
    }

    /// Returns the number of items preceding the requested page.
    fn offset(&self) -> usize {
        (self.number() - 1).saturating_mul(self.size())
    }
}

/// A page of items.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Page<T> {
    /// Items on this [`Page`].
    pub items: Vec<T>,

    /// [`Arguments`] this [`Page`] was cut with.
    pub args: Arguments,

    /// Total number of items across all the pages.
    pub total_items: usize,
}

impl<T> Page<T> {
    /// Cuts a [`Page`] out of all the provided `items` according to the given
    /// [`Arguments`].
    ///
    /// A page past the last one has no items.
    #[must_use]
    pub fn cut(args: Arguments, items: impl IntoIterator<Item = T>) -> Self {
        let offset = args.offset();
        let mut total_items = 0;
        let mut page = Vec::new();
        for item in items {
            if total_items >= offset && page.len() < args.size() {
                page.push(item);
            }
            total_items += 1;
        }
        Self {
            items: page,
            args,
            total_items,
        }
    }

    /// Returns the total number of pages.
    #[must_use]
    pub fn total_pages(&self) -> usize {
        self.total_items.div_ceil(self.args.size())
    }

    /// Indicates whether there is a page after this one.
    #[must_use]
    pub fn has_next_page(&self) -> bool {
        self.args.number() < self.total_pages()
    }

    /// Indicates whether there is a page before this one.
    #[must_use]
    pub fn has_previous_page(&self) -> bool {
        self.args.number() > 1
    }
}
