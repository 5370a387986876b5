use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::calendar::Day;

/// Position of a page in the document, starting at 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PageId(pub usize);

impl PageId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "page {}", self.0 + 1)
    }
}

/// What a page shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageKind {
    /// The twelve months of the year at a glance.
    YearOverview { year: i32 },
    /// One month as a full-page grid.
    MonthOverview { year: i32, month: u32 },
    /// One day, with room for notes.
    DayDetail(Day),
}

/// Navigation targets of a page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Links {
    /// Preceding page of the same kind (previous day or previous month).
    pub previous: Option<PageId>,
    /// Following page of the same kind (next day or next month).
    pub next: Option<PageId>,
    /// Overview page this page belongs to.
    pub parent: Option<PageId>,
}

/// A single renderable page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub id: PageId,
    pub kind: PageKind,
    pub links: Links,
    /// Pages summarized by this one: months for the year page, days for a
    /// month page. Empty for day pages.
    pub children: Vec<PageId>,
}

impl Page {
    pub fn is_year_overview(&self) -> bool {
        matches!(self.kind, PageKind::YearOverview { .. })
    }

    pub fn is_month_overview(&self) -> bool {
        matches!(self.kind, PageKind::MonthOverview { .. })
    }

    pub fn is_day_detail(&self) -> bool {
        matches!(self.kind, PageKind::DayDetail(_))
    }

    /// The day shown by a day page.
    pub fn day(&self) -> Option<&Day> {
        match &self.kind {
            PageKind::DayDetail(day) => Some(day),
            _ => None,
        }
    }

    /// Month of a month or day page.
    pub fn month(&self) -> Option<u32> {
        match &self.kind {
            PageKind::YearOverview { .. } => None,
            PageKind::MonthOverview { month, .. } => Some(*month),
            PageKind::DayDetail(day) => Some(day.month()),
        }
    }

    /// Every page this page links to, parent first.
    pub fn targets(&self) -> impl Iterator<Item = PageId> + '_ {
        [self.links.parent, self.links.previous, self.links.next]
            .into_iter()
            .flatten()
            .chain(self.children.iter().copied())
    }
}

/// Every page of one agenda, in reading order.
///
/// The order is the year overview, then for each month its overview page
/// followed by one page per day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub(super) year: i32,
    pub(super) pages: Vec<Page>,
    pub(super) months: Vec<PageId>,
}

impl Document {
    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn page(&self, id: PageId) -> Option<&Page> {
        self.pages.get(id.0)
    }

    pub fn year_page(&self) -> Option<&Page> {
        self.pages.first()
    }

    /// Overview page of `month` in `1..=12`.
    pub fn month_page(&self, month: u32) -> Option<&Page> {
        let index = month.checked_sub(1)? as usize;
        self.months.get(index).and_then(|id| self.page(*id))
    }

    /// Day page of `date`, if the date belongs to the document's year.
    pub fn day_page(&self, date: NaiveDate) -> Option<&Page> {
        if date.year() != self.year {
            return None;
        }
        let month = self.month_page(date.month())?;
        self.page(PageId(month.id.0 + date.day() as usize))
            .filter(|page| page.day().map(|d| d.date) == Some(date))
    }

    /// Every day page in chronological order.
    pub fn day_pages(&self) -> impl Iterator<Item = &Page> {
        self.pages.iter().filter(|page| page.is_day_detail())
    }

    /// Every day in chronological order.
    pub fn days(&self) -> impl Iterator<Item = &Day> {
        self.pages.iter().filter_map(Page::day)
    }
}
