//! Layout of the year, month and day pages.

use agenda_core::calendar::month_grid;
use agenda_core::{Day, Document, Locale, Page, PageId, PageKind};
use chrono::{Datelike, NaiveDate, Weekday};

use crate::canvas::{Align, Canvas, TextStyle};
use crate::layout::{
    month_color, Area, Color, RenderOptions, BOTTOM_MARGIN, DAY_OFF_GRAY, LEFT_MARGIN,
    PAGE_HEIGHT_MM, PAGE_WIDTH_MM, RIGHT_MARGIN, TOP_MARGIN,
};
use crate::metrics::{wrap, Font};

const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Draws `page` of `document`.
pub(crate) fn draw(document: &Document, page: &Page, options: &RenderOptions) -> Canvas {
    let mut canvas = Canvas::new();
    match &page.kind {
        PageKind::YearOverview { year } => draw_year(&mut canvas, document, *year, options),
        PageKind::MonthOverview { year, month } => {
            draw_month(&mut canvas, document, page, *year, *month, options)
        }
        PageKind::DayDetail(day) => draw_day(&mut canvas, document, page, day, options),
    }
    canvas
}

/// Where and how to draw a small month calendar.
struct MiniMonth {
    x: f32,
    y: f32,
    /// Side of one day cell.
    cell: f32,
    highlighted: Option<NaiveDate>,
    show_year: bool,
    /// Page opened by tapping the month header.
    header_target: Option<PageId>,
}

fn day_target(document: &Document, date: NaiveDate) -> Option<PageId> {
    document.day_page(date).map(|page| page.id)
}

fn day_of(document: &Document, date: NaiveDate) -> Option<&Day> {
    document.day_page(date).and_then(Page::day)
}

fn month_title(options: &RenderOptions, year: i32, month: u32, show_year: bool) -> String {
    let name = options.locale.month_name(month);
    if show_year {
        format!("{name} {year:04}")
    } else {
        name.to_string()
    }
}

fn draw_mini_month(
    canvas: &mut Canvas,
    document: &Document,
    year: i32,
    month: u32,
    layout: &MiniMonth,
    options: &RenderOptions,
) {
    let cell = layout.cell;
    let width = 7.0 * cell;

    let header = Area::new(layout.x, layout.y, width, 1.5 * cell);
    canvas.fill_rect(header, month_color(month));
    canvas.text(
        &month_title(options, year, month, layout.show_year),
        TextStyle::new(Font::Bold, 2.0 * cell).color(Color::WHITE),
        header,
        Align::Center,
    );
    canvas.link_opt(header, layout.header_target);

    let labels_y = header.bottom();
    for (column, weekday) in WEEKDAYS.iter().enumerate() {
        canvas.text(
            options.locale.weekday_abbrev(*weekday),
            TextStyle::new(Font::Regular, 0.8 * cell),
            Area::new(layout.x + column as f32 * cell, labels_y, cell, 0.5 * cell),
            Align::Center,
        );
    }

    let grid_y = labels_y + 0.5 * cell;
    let Ok(weeks) = month_grid(year, month) else {
        return;
    };
    for (row, week) in weeks.iter().enumerate() {
        for (column, date) in week.iter().enumerate() {
            let Some(date) = date else { continue };
            let area = Area::new(
                layout.x + column as f32 * cell,
                grid_y + row as f32 * cell,
                cell,
                cell,
            );
            if day_of(document, *date).is_some_and(Day::is_day_off) {
                canvas.fill_rect(area, Color::gray(DAY_OFF_GRAY));
            }
            let font = if layout.highlighted == Some(*date) {
                Font::Bold
            } else {
                Font::Regular
            };
            canvas.text_top(
                &date.day().to_string(),
                TextStyle::new(font, 1.5 * cell),
                area.inset(0.6),
                Align::Right,
            );
            canvas.link_opt(area, day_target(document, *date));
        }
    }
}

fn draw_year(canvas: &mut Canvas, document: &Document, year: i32, options: &RenderOptions) {
    canvas.text(
        &format!("{year:04}"),
        TextStyle::new(Font::Bold, 40.0),
        Area::new(0.0, 0.0, PAGE_WIDTH_MM, TOP_MARGIN),
        Align::Center,
    );

    let cell = 8.0;
    let pitch = 9.0 * 7.0;
    for month in 1..=12u32 {
        let index = (month - 1) as f32;
        let layout = MiniMonth {
            x: LEFT_MARGIN + (index % 3.0) * pitch,
            y: TOP_MARGIN + (index / 3.0).floor() * pitch,
            cell,
            highlighted: None,
            show_year: false,
            header_target: document.month_page(month).map(|page| page.id),
        };
        draw_mini_month(canvas, document, year, month, &layout, options);
    }
}

fn draw_month(
    canvas: &mut Canvas,
    document: &Document,
    page: &Page,
    year: i32,
    month: u32,
    options: &RenderOptions,
) {
    let width = PAGE_WIDTH_MM - LEFT_MARGIN - RIGHT_MARGIN;
    let cell_w = width / 7.0;
    let header = Area::new(LEFT_MARGIN, 8.0, width, 16.0);
    let arrow_w = 12.0;

    canvas.fill_rect(header, month_color(month));
    canvas.text(
        &month_title(options, year, month, true),
        TextStyle::new(Font::Bold, 24.0).color(Color::WHITE),
        header,
        Align::Center,
    );
    let title_area = Area::new(header.x + arrow_w, header.y, width - 2.0 * arrow_w, header.h);
    canvas.link_opt(title_area, page.links.parent);

    let arrow_style = TextStyle::new(Font::Bold, 24.0).color(Color::WHITE);
    let previous = Area::new(header.x, header.y, arrow_w, header.h);
    let next = Area::new(header.right() - arrow_w, header.y, arrow_w, header.h);
    if page.links.previous.is_some() {
        canvas.text("<", arrow_style, previous, Align::Center);
    }
    if page.links.next.is_some() {
        canvas.text(">", arrow_style, next, Align::Center);
    }
    canvas.link_opt(previous, page.links.previous);
    canvas.link_opt(next, page.links.next);

    let labels_y = header.bottom();
    for (column, weekday) in WEEKDAYS.iter().enumerate() {
        canvas.text(
            options.locale.weekday_abbrev(*weekday),
            TextStyle::new(Font::Regular, 11.0),
            Area::new(LEFT_MARGIN + column as f32 * cell_w, labels_y, cell_w, 8.0),
            Align::Center,
        );
    }

    let grid_y = labels_y + 8.0;
    let Ok(weeks) = month_grid(year, month) else {
        return;
    };
    let available = PAGE_HEIGHT_MM - BOTTOM_MARGIN - grid_y;
    let cell_h = (available / weeks.len().max(1) as f32).min(36.0);
    let label_style = TextStyle::new(Font::Regular, 7.0);

    for (row, week) in weeks.iter().enumerate() {
        for (column, date) in week.iter().enumerate() {
            let area = Area::new(
                LEFT_MARGIN + column as f32 * cell_w,
                grid_y + row as f32 * cell_h,
                cell_w,
                cell_h,
            );
            let Some(date) = date else {
                canvas.stroke_rect(area, 0, 0.2);
                continue;
            };
            let day = day_of(document, *date);
            if day.is_some_and(Day::is_day_off) {
                canvas.fill_rect(area, Color::gray(DAY_OFF_GRAY));
            }
            canvas.stroke_rect(area, 0, 0.2);
            canvas.text_top(
                &date.day().to_string(),
                TextStyle::new(Font::Regular, 12.0),
                area.inset(1.5),
                Align::Right,
            );

            if let Some(label) = day.and_then(Day::label) {
                let text_area = Area::new(area.x + 1.0, area.y + 7.5, area.w - 2.0, area.h - 8.5);
                let lines = wrap(label, label_style.font, label_style.size, text_area.w, 6);
                canvas.paragraph(&lines, label_style, text_area, Align::Left);
            }
            canvas.link_opt(area, day_target(document, *date));
        }
    }
}

fn day_heading(options: &RenderOptions, date: NaiveDate) -> String {
    let month = options.locale.month_name(date.month());
    match options.locale {
        Locale::En => format!("{month} {}, {:04}", date.day(), date.year()),
        Locale::Fr => format!("{} {month} {:04}", date.day(), date.year()),
    }
}

fn draw_day(
    canvas: &mut Canvas,
    document: &Document,
    page: &Page,
    day: &Day,
    options: &RenderOptions,
) {
    let cell = 8.0;
    let cal_w = 7.0 * cell;
    let cal_h = 8.0 * cell;
    let cal_x = PAGE_WIDTH_MM - cal_w - 4.0;
    let cal_y = 50.0;
    let year_target = document.year_page().map(|p| p.id);

    let weekday_area = Area::new(cal_x, 0.0, cal_w, 15.0);
    canvas.text(
        options.locale.weekday_name(day.weekday),
        TextStyle::new(Font::Bold, 26.0),
        weekday_area,
        Align::Center,
    );
    canvas.link_opt(weekday_area, year_target);

    let number_area = Area::new(
        cal_x,
        weekday_area.bottom(),
        cal_w,
        cal_y - weekday_area.bottom(),
    );
    canvas.text(
        &day.day().to_string(),
        TextStyle::new(Font::Bold, 110.0),
        number_area,
        Align::Center,
    );
    canvas.link_opt(number_area, page.links.parent);

    let layout = MiniMonth {
        x: cal_x,
        y: cal_y,
        cell,
        highlighted: Some(day.date),
        show_year: true,
        header_target: page.links.parent,
    };
    draw_mini_month(canvas, document, day.year(), day.month(), &layout, options);

    // Navigation row above the note lines.
    let notes_right = cal_x - 8.0;
    let arrow_w = 10.0;
    let nav_y = 4.0;
    let nav_h = 12.0;
    let arrow_style = TextStyle::new(Font::Bold, 20.0);
    let previous = Area::new(LEFT_MARGIN, nav_y, arrow_w, nav_h);
    let next = Area::new(notes_right - arrow_w, nav_y, arrow_w, nav_h);
    if page.links.previous.is_some() {
        canvas.text("<", arrow_style, previous, Align::Center);
    }
    if page.links.next.is_some() {
        canvas.text(">", arrow_style, next, Align::Center);
    }
    canvas.link_opt(previous, page.links.previous);
    canvas.link_opt(next, page.links.next);

    let heading_area = Area::new(previous.right(), nav_y, next.x - previous.right(), nav_h);
    canvas.text(
        &day_heading(options, day.date),
        TextStyle::new(Font::Regular, 14.0),
        heading_area,
        Align::Center,
    );
    canvas.link_opt(heading_area, page.links.parent);

    let line_height = PAGE_HEIGHT_MM / 30.0;
    for i in 1..30 {
        let y = i as f32 * line_height + TOP_MARGIN;
        if y > PAGE_HEIGHT_MM - BOTTOM_MARGIN {
            break;
        }
        let x_end = if y < cal_y + cal_h {
            notes_right
        } else {
            PAGE_WIDTH_MM - RIGHT_MARGIN
        };
        canvas.line(
            (LEFT_MARGIN, y),
            (x_end, y),
            options.line_gray,
            options.line_width,
        );
    }

    if let Some(label) = day.label() {
        let style = TextStyle::new(Font::Bold, 16.0);
        let area = Area::new(
            LEFT_MARGIN,
            TOP_MARGIN - 2.0,
            notes_right - LEFT_MARGIN,
            line_height * 2.0,
        );
        let lines = wrap(label, style.font, style.size, area.w, 2);
        canvas.paragraph(&lines, style, area, Align::Center);
    }
}
