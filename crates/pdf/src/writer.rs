//! Serialization of a page sequence into a PDF file.

use std::io::Write;
use std::time::Instant;

use agenda_core::{Document, Page, PageId};
use flate2::write::ZlibEncoder;
use flate2::Compression;
use pdf_writer::types::{ActionType, AnnotationType};
use pdf_writer::{Filter, Pdf, Rect, Ref, TextStr};
use tracing::{debug, info};

use crate::canvas::Link;
use crate::error::{RenderError, Result};
use crate::layout::{RenderOptions, MM_TO_PT, PAGE_HEIGHT_MM, PAGE_WIDTH_MM};
use crate::metrics::Font;
use crate::pages;

/// Object references of one page.
struct PageRefs {
    page: Ref,
    content: Ref,
}

/// Renders `document` as PDF bytes.
///
/// Pages appear in document order and every link becomes a `GoTo` annotation
/// targeting the top of its page. Month pages are listed in the outline.
pub fn render(document: &Document, options: &RenderOptions) -> Result<Vec<u8>> {
    options.validate()?;
    if document.is_empty() {
        return Err(RenderError::EmptyDocument);
    }
    let started = Instant::now();

    let mut next_ref = Ref::new(1);
    let mut alloc = || next_ref.bump();

    let catalog_id = alloc();
    let tree_id = alloc();
    let info_id = alloc();
    let outline_id = alloc();
    let regular_id = alloc();
    let bold_id = alloc();
    let refs: Vec<PageRefs> = document
        .pages()
        .iter()
        .map(|_| PageRefs {
            page: alloc(),
            content: alloc(),
        })
        .collect();

    let mut pdf = Pdf::new();
    let media_box = Rect::new(0.0, 0.0, PAGE_WIDTH_MM * MM_TO_PT, PAGE_HEIGHT_MM * MM_TO_PT);
    let top = PAGE_HEIGHT_MM * MM_TO_PT;
    let mut link_count = 0usize;

    for (page, page_refs) in document.pages().iter().zip(&refs) {
        let canvas = pages::draw(document, page, options);
        let (content, links) = canvas.finish();
        check_links(document.len(), page.id, &links)?;

        let annotation_ids: Vec<Ref> = links.iter().map(|_| alloc()).collect();
        for (link, id) in links.iter().zip(&annotation_ids) {
            let target = refs[link.target.index()].page;
            let mut annotation = pdf.annotation(*id);
            annotation
                .subtype(AnnotationType::Link)
                .rect(link.area.to_pdf_rect())
                .border(0.0, 0.0, 0.0, None);
            annotation
                .action()
                .action_type(ActionType::GoTo)
                .destination()
                .page(target)
                .xyz(0.0, top, None);
        }
        link_count += links.len();

        {
            let mut pdf_page = pdf.page(page_refs.page);
            pdf_page
                .media_box(media_box)
                .parent(tree_id)
                .contents(page_refs.content);
            pdf_page
                .resources()
                .fonts()
                .pair(Font::Regular.resource(), regular_id)
                .pair(Font::Bold.resource(), bold_id);
            if !annotation_ids.is_empty() {
                pdf_page.annotations(annotation_ids.iter().copied());
            }
        }

        pdf.stream(page_refs.content, &compress(&content)?)
            .filter(Filter::FlateDecode);
        debug!(page = %page.id, links = links.len(), "drew page");
    }

    pdf.pages(tree_id)
        .kids(refs.iter().map(|r| r.page))
        .count(refs.len() as i32);

    for (font, id) in [(Font::Regular, regular_id), (Font::Bold, bold_id)] {
        pdf.type1_font(id)
            .base_font(font.base_font())
            .encoding_predefined(pdf_writer::Name(b"WinAnsiEncoding"));
    }

    let title = format!("Agenda {:04}", document.year());
    pdf.document_info(info_id)
        .title(TextStr(&title))
        .author(TextStr(&options.author))
        .creator(TextStr(concat!("agenda ", env!("CARGO_PKG_VERSION"))));

    write_outline(&mut pdf, document, options, outline_id, &refs, &mut alloc, top);

    pdf.catalog(catalog_id).pages(tree_id).outlines(outline_id);

    let bytes = pdf.finish();
    info!(
        year = document.year(),
        pages = document.len(),
        links = link_count,
        bytes = bytes.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "rendered agenda"
    );
    Ok(bytes)
}

/// Writes one outline entry per month page.
fn write_outline(
    pdf: &mut Pdf,
    document: &Document,
    options: &RenderOptions,
    outline_id: Ref,
    refs: &[PageRefs],
    alloc: &mut impl FnMut() -> Ref,
    top: f32,
) {
    let months: Vec<(&Page, Ref)> = document
        .pages()
        .iter()
        .filter(|page| page.is_month_overview())
        .map(|page| (page, alloc()))
        .collect();

    {
        let mut outline = pdf.outline(outline_id);
        if let (Some((_, first)), Some((_, last))) = (months.first(), months.last()) {
            outline.first(*first).last(*last);
        }
        outline.count(months.len() as i32);
    }

    for (i, (page, id)) in months.iter().enumerate() {
        let name = page
            .month()
            .map(|month| options.locale.month_name(month))
            .unwrap_or_default();
        let mut item = pdf.outline_item(*id);
        item.title(TextStr(name)).parent(outline_id);
        if let Some((_, prev)) = i.checked_sub(1).and_then(|p| months.get(p)) {
            item.prev(*prev);
        }
        if let Some((_, next)) = months.get(i + 1) {
            item.next(*next);
        }
        item.dest().page(refs[page.id.index()].page).xyz(0.0, top, None);
    }
}

/// Deflates a content stream.
fn compress(content: &[u8]) -> Result<Vec<u8>> {
    let to_error = |e: std::io::Error| RenderError::Compression(e.to_string());
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(content).map_err(to_error)?;
    encoder.finish().map_err(to_error)
}

/// Rejects links pointing outside the document.
fn check_links(len: usize, from: PageId, links: &[Link]) -> Result<()> {
    match links.iter().find(|link| link.target.index() >= len) {
        Some(link) => Err(RenderError::DanglingLink {
            from: from.index(),
            to: link.target.index(),
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Area;
    use agenda_core::{build, Holiday, HolidaySet, Locale};
    use chrono::NaiveDate;

    fn make_date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn count(haystack: &[u8], needle: &[u8]) -> usize {
        haystack.windows(needle.len()).filter(|w| *w == needle).count()
    }

    fn sample_document(year: i32) -> Document {
        let holidays: HolidaySet = [
            Holiday::bank(make_date(year, 7, 14), "Bastille Day"),
            Holiday::school(make_date(year, 7, 14), "Summer Holidays"),
        ]
        .into_iter()
        .collect();
        build(year, &holidays).unwrap()
    }

    #[test]
    fn test_render_page_count() {
        let document = sample_document(2026);
        let bytes = render(&document, &RenderOptions::default()).unwrap();

        assert!(bytes.starts_with(b"%PDF"));
        let parsed = lopdf::Document::load_mem(&bytes).unwrap();
        assert_eq!(parsed.get_pages().len(), document.len());
        assert_eq!(document.len(), 378);
    }

    #[test]
    fn test_render_leap_year() {
        let document = sample_document(2024);
        let bytes = render(&document, &RenderOptions::default()).unwrap();
        let parsed = lopdf::Document::load_mem(&bytes).unwrap();
        assert_eq!(parsed.get_pages().len(), 1 + 12 + 366);
    }

    #[test]
    fn test_every_link_is_annotated() {
        let document = sample_document(2026);
        let options = RenderOptions::default();
        let expected: usize = document
            .pages()
            .iter()
            .map(|page| pages::draw(&document, page, &options).links().len())
            .sum();

        let bytes = render(&document, &options).unwrap();
        assert_eq!(count(&bytes, b"/Subtype /Link"), expected);
        assert_eq!(count(&bytes, b"/S /GoTo"), expected);
    }

    #[test]
    fn test_metadata_and_outline() {
        let document = sample_document(2026);
        let bytes = render(&document, &RenderOptions::default()).unwrap();
        assert_eq!(count(&bytes, b"(Agenda 2026)"), 1);
        assert_eq!(count(&bytes, b"/Type /Outlines"), 1);
        // Page content is deflated, only the outline entry stays readable.
        assert_eq!(count(&bytes, b"(January)"), 1);
        assert_eq!(count(&bytes, b"/BaseFont /Helvetica-Bold"), 1);
    }

    #[test]
    fn test_render_french() {
        let document = sample_document(2026);
        let options = RenderOptions::default().with_locale(Locale::Fr);
        let bytes = render(&document, &options).unwrap();
        let parsed = lopdf::Document::load_mem(&bytes).unwrap();
        assert_eq!(parsed.get_pages().len(), document.len());
        assert_eq!(count(&bytes, b"(janvier)"), 1);
    }

    #[test]
    fn test_content_streams_are_compressed() {
        let document = sample_document(2026);
        let options = RenderOptions::default();
        let raw: usize = document
            .pages()
            .iter()
            .map(|page| pages::draw(&document, page, &options).finish().0.len())
            .sum();

        let bytes = render(&document, &options).unwrap();
        assert_eq!(count(&bytes, b"/Filter /FlateDecode"), document.len());
        assert!(
            bytes.len() < raw / 2,
            "{} bytes for {raw} of content",
            bytes.len()
        );
    }

    #[test]
    fn test_compressed_content_inflates_back() {
        use std::io::Read;

        let document = sample_document(2026);
        let year_page = document.year_page().unwrap();
        let options = RenderOptions::default();
        let (content, _) = pages::draw(&document, year_page, &options).finish();

        let mut inflated = Vec::new();
        flate2::read::ZlibDecoder::new(compress(&content).unwrap().as_slice())
            .read_to_end(&mut inflated)
            .unwrap();
        assert_eq!(inflated, content);
        assert_eq!(count(&inflated, b"(January) Tj"), 1);
    }

    #[test]
    fn test_render_is_deterministic() {
        let document = sample_document(2026);
        let options = RenderOptions::default();
        assert_eq!(
            render(&document, &options).unwrap(),
            render(&document, &options).unwrap()
        );
    }

    #[test]
    fn test_invalid_options() {
        let document = sample_document(2026);
        let options = RenderOptions::default().with_line_style(0.0, 200);
        assert_eq!(
            render(&document, &options),
            Err(RenderError::InvalidLineWidth(0.0))
        );
    }

    #[test]
    fn test_dangling_link() {
        let links = [Link {
            area: Area::new(0.0, 0.0, 10.0, 10.0),
            target: PageId(400),
        }];
        assert_eq!(
            check_links(378, PageId(2), &links),
            Err(RenderError::DanglingLink { from: 2, to: 400 })
        );
        assert!(check_links(378, PageId(2), &links[..0]).is_ok());
    }
}
