//! Page-number resolution and page fetching for listing views.
//!
//! A requested page never produces an error: a missing or non-integer value
//! falls back to the first page, and an integer outside the valid range falls
//! back to the last page. An empty collection still has one (empty) page.

use crate::errors::Result;
use sea_orm::{ConnectionTrait, EntityTrait, PaginatorTrait, Select};

/// Page shown when the requested page is absent or not an integer.
pub const FIRST_PAGE: u64 = 1;

/// One page of a larger ordered collection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Page<T> {
    /// Items on this page, in collection order
    pub items: Vec<T>,
    /// 1-based number of this page
    pub number: u64,
    /// Total number of pages, at least 1
    pub num_pages: u64,
    /// Total number of items across all pages
    pub total_items: u64,
    /// Maximum number of items per page
    pub per_page: u64,
}

impl<T> Page<T> {
    /// Number of the previous page, if there is one
    #[must_use]
    pub const fn previous_page_number(&self) -> Option<u64> {
        if self.number > 1 {
            Some(self.number - 1)
        } else {
            None
        }
    }

    /// Number of the next page, if there is one
    #[must_use]
    pub const fn next_page_number(&self) -> Option<u64> {
        if self.number < self.num_pages {
            Some(self.number + 1)
        } else {
            None
        }
    }

    /// 1-based position of the first item on this page within the collection, 0 when empty
    #[must_use]
    pub const fn start_index(&self) -> u64 {
        if self.total_items == 0 {
            0
        } else {
            (self.number - 1) * self.per_page + 1
        }
    }

    /// 1-based position of the last item on this page within the collection
    #[must_use]
    pub fn end_index(&self) -> u64 {
        self.start_index() + self.items.len() as u64 - u64::from(!self.items.is_empty())
    }
}

/// Number of pages needed for `total_items`; an empty collection has one page.
#[must_use]
pub const fn num_pages(total_items: u64, per_page: u64) -> u64 {
    if total_items == 0 || per_page == 0 {
        1
    } else {
        total_items.div_ceil(per_page)
    }
}

/// Turns a raw `page` query value into a valid 1-based page number.
#[must_use]
pub fn resolve_page_number(raw: Option<&str>, num_pages: u64) -> u64 {
    let Some(raw) = raw else {
        return FIRST_PAGE;
    };
    let trimmed = raw.trim();
    let digits = trimmed.strip_prefix(['+', '-']).unwrap_or(trimmed);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return FIRST_PAGE;
    }
    // Negative, zero, overflowing and too-large values all land on the last page.
    match trimmed.parse::<u64>() {
        Ok(number) if (1..=num_pages).contains(&number) => number,
        _ => num_pages,
    }
}

/// Runs `select` and returns the page named by `raw_page`.
pub async fn fetch_page<'db, C, E>(
    db: &'db C,
    select: Select<E>,
    per_page: u64,
    raw_page: Option<&str>,
) -> Result<Page<E::Model>>
where
    C: ConnectionTrait,
    E: EntityTrait,
    E::Model: Sync + 'db,
{
    let paginator = select.paginate(db, per_page);
    let total_items = paginator.num_items().await?;
    let num_pages = num_pages(total_items, per_page);
    let number = resolve_page_number(raw_page, num_pages);
    let items = paginator.fetch_page(number - 1).await?;

    Ok(Page {
        items,
        number,
        num_pages,
        total_items,
        per_page,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_num_pages() {
        assert_eq!(num_pages(0, 4), 1);
        assert_eq!(num_pages(4, 4), 1);
        assert_eq!(num_pages(5, 4), 2);
        assert_eq!(num_pages(9, 4), 3);
    }

    #[test]
    fn test_missing_or_non_integer_page_is_first() {
        assert_eq!(resolve_page_number(None, 3), 1);
        assert_eq!(resolve_page_number(Some(""), 3), 1);
        assert_eq!(resolve_page_number(Some("abc"), 3), 1);
        assert_eq!(resolve_page_number(Some("2.5"), 3), 1);
        assert_eq!(resolve_page_number(Some("-"), 3), 1);
    }

    #[test]
    fn test_out_of_range_page_is_last() {
        assert_eq!(resolve_page_number(Some("5"), 3), 3);
        assert_eq!(resolve_page_number(Some("0"), 3), 3);
        assert_eq!(resolve_page_number(Some("-1"), 3), 3);
        assert_eq!(resolve_page_number(Some("99999999999999999999999"), 3), 3);
    }

    #[test]
    fn test_valid_page_is_kept() {
        assert_eq!(resolve_page_number(Some("2"), 3), 2);
        assert_eq!(resolve_page_number(Some(" 3 "), 3), 3);
        assert_eq!(resolve_page_number(Some("+1"), 3), 1);
    }

    #[test]
    fn test_page_navigation() {
        let page = Page {
            items: vec!['i'],
            number: 3,
            num_pages: 3,
            total_items: 9,
            per_page: 4,
        };
        assert_eq!(page.previous_page_number(), Some(2));
        assert_eq!(page.next_page_number(), None);
        assert_eq!(page.start_index(), 9);
        assert_eq!(page.end_index(), 9);

        let empty: Page<char> = Page {
            items: Vec::new(),
            number: 1,
            num_pages: 1,
            total_items: 0,
            per_page: 4,
        };
        assert_eq!(empty.previous_page_number(), None);
        assert_eq!(empty.next_page_number(), None);
        assert_eq!(empty.start_index(), 0);
        assert_eq!(empty.end_index(), 0);
    }
}
