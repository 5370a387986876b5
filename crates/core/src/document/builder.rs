use chrono::Datelike;
use tracing::debug;

use super::types::{Document, Links, Page, PageId, PageKind};
use crate::calendar::{days_of_year, validate_year, Day, Result};
use crate::holidays::HolidaySet;

/// Builds the fully linked page sequence of `year`.
///
/// Holidays are attached to the day pages on exact date match; holidays
/// outside `year` are ignored.
pub fn build(year: i32, holidays: &HolidaySet) -> Result<Document> {
    validate_year(year)?;
    let dates = days_of_year(year)?;
    assert!(
        matches!(dates.len(), 365 | 366),
        "{year} enumerated to {} days",
        dates.len()
    );

    let year_id = PageId(0);
    let mut pages = Vec::with_capacity(1 + 12 + dates.len());
    pages.push(Page {
        id: year_id,
        kind: PageKind::YearOverview { year },
        links: Links::default(),
        children: Vec::new(),
    });

    let mut months: Vec<PageId> = Vec::with_capacity(12);
    let mut days: Vec<PageId> = Vec::with_capacity(dates.len());

    for date in dates {
        let month = date.month();
        if months.len() < month as usize {
            let month_id = PageId(pages.len());
            months.push(month_id);
            pages.push(Page {
                id: month_id,
                kind: PageKind::MonthOverview { year, month },
                links: Links {
                    parent: Some(year_id),
                    ..Links::default()
                },
                children: Vec::new(),
            });
        }

        // `months` is never empty here: January opens the loop.
        let month_id = months[months.len() - 1];
        let day_id = PageId(pages.len());
        let day = Day::new(date).with_holiday(holidays.day_holiday(date));
        pages.push(Page {
            id: day_id,
            kind: PageKind::DayDetail(day),
            links: Links {
                parent: Some(month_id),
                ..Links::default()
            },
            children: Vec::new(),
        });
        pages[month_id.0].children.push(day_id);
        days.push(day_id);
    }

    link_sequence(&mut pages, &months);
    link_sequence(&mut pages, &days);
    pages[year_id.0].children = months.clone();

    debug!(
        year,
        pages = pages.len(),
        holidays = holidays.len(),
        "Built agenda document"
    );

    Ok(Document {
        year,
        pages,
        months,
    })
}

/// Chains `ids` through their previous/next links.
fn link_sequence(pages: &mut [Page], ids: &[PageId]) {
    for (i, id) in ids.iter().enumerate() {
        let links = &mut pages[id.0].links;
        links.previous = i.checked_sub(1).map(|p| ids[p]);
        links.next = ids.get(i + 1).copied();
    }
}
