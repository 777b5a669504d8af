use std::sync::LazyLock;

use scraper::{ElementRef, Selector};
use serde::Serialize;
use tracing::debug;

use super::document::{element_text, ParsedDocument};
use super::fields::details;

const VALUE_CELLS: &[&str] = &["td.queryfield", r#"td[valign="top"]"#, r#"td[align="center"]"#];
const FLAG_CELLS: &[&str] = &["td.queryfield + td"];

const DETAILS_TABLE: &str =
    r#"table[width="70%"][cellspacing="0"][cellpadding="4"][summary="For formatting purpose"]"#;

static DETAILS: LazyLock<Selector> = LazyLock::new(|| fingerprint(DETAILS_TABLE, VALUE_CELLS));
static INSPECTIONS: LazyLock<Selector> =
    LazyLock::new(|| fingerprint(&report_table("Inspections"), VALUE_CELLS));
static CRASHES: LazyLock<Selector> =
    LazyLock::new(|| fingerprint(&report_table("Crashes"), VALUE_CELLS));
static REVIEW: LazyLock<Selector> =
    LazyLock::new(|| fingerprint(&report_table("Review Information"), VALUE_CELLS));
static CLASSIFICATION: LazyLock<Selector> =
    LazyLock::new(|| fingerprint(&report_table("Operation Classification"), FLAG_CELLS));
static OPERATION: LazyLock<Selector> =
    LazyLock::new(|| fingerprint(&report_table("Carrier Operation"), FLAG_CELLS));
static CARGO: LazyLock<Selector> =
    LazyLock::new(|| fingerprint(&report_table("Cargo Carried"), FLAG_CELLS));

static SUMMARY_LABELS: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(r##"font[color="#0000C0"]:not([face="arial"])"##).unwrap());

/// Characters kept from each summary label.
pub const SUMMARY_PREFIX_LEN: usize = 10;

fn report_table(summary: &str) -> String {
    format!(r#"table[summary="{}"]"#, summary)
}

/// Scope each cell pattern to the table landmark. A selector list matches
/// every element once, in document order.
fn fingerprint(table: &str, cells: &[&str]) -> Selector {
    let css = cells
        .iter()
        .map(|cell| format!("{} {}", table, cell))
        .collect::<Vec<_>>()
        .join(", ");
    Selector::parse(&css).unwrap()
}

/// One extracted cell. Address cells keep their markup because the
/// embedded `<br>` is what separates street from city.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Text(String),
    RawMarkup(String),
}

/// Positional report sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Details,
    Inspections,
    Crashes,
    Review,
}

/// Checkbox-style report sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagKind {
    Classification,
    Operation,
    Cargo,
}

/// How matched cells turn into tokens.
#[derive(Debug, Clone, Copy)]
enum Window {
    /// First `limit` cells, blanks kept, `raw` positions captured as markup.
    Bounded {
        limit: usize,
        raw: &'static [usize],
    },
    /// Every cell with non-empty text.
    Dense,
}

impl SectionKind {
    pub const ALL: [SectionKind; 4] = [
        SectionKind::Details,
        SectionKind::Inspections,
        SectionKind::Crashes,
        SectionKind::Review,
    ];

    fn fingerprint(self) -> &'static Selector {
        match self {
            SectionKind::Details => &*DETAILS,
            SectionKind::Inspections => &*INSPECTIONS,
            SectionKind::Crashes => &*CRASHES,
            SectionKind::Review => &*REVIEW,
        }
    }

    fn window(self) -> Window {
        match self {
            SectionKind::Details => Window::Bounded {
                limit: details::WINDOW,
                raw: details::RAW_MARKUP,
            },
            _ => Window::Dense,
        }
    }
}

impl FlagKind {
    pub const ALL: [FlagKind; 3] = [FlagKind::Classification, FlagKind::Operation, FlagKind::Cargo];

    fn fingerprint(self) -> &'static Selector {
        match self {
            FlagKind::Classification => &*CLASSIFICATION,
            FlagKind::Operation => &*OPERATION,
            FlagKind::Cargo => &*CARGO,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Section {
    pub kind: SectionKind,
    pub tokens: Vec<Token>,
}

/// A checkbox row: `value` is whether the box next to `key` is marked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyValueEntry {
    pub key: String,
    pub value: bool,
}

/// Everything pulled out of one page, before field mapping.
#[derive(Debug, Clone)]
pub struct ExtractedSections {
    pub details: Section,
    pub classification: Vec<KeyValueEntry>,
    pub operation: Vec<KeyValueEntry>,
    pub cargo: Vec<KeyValueEntry>,
    pub inspections: Section,
    pub crashes: Section,
    pub review: Section,
    pub summary: Vec<String>,
}

/// Extract every section in a fixed order.
pub fn extract_all(doc: &ParsedDocument) -> ExtractedSections {
    let sections = ExtractedSections {
        details: extract_section(doc, SectionKind::Details),
        classification: extract_flags(doc, FlagKind::Classification),
        operation: extract_flags(doc, FlagKind::Operation),
        cargo: extract_flags(doc, FlagKind::Cargo),
        inspections: extract_section(doc, SectionKind::Inspections),
        crashes: extract_section(doc, SectionKind::Crashes),
        review: extract_section(doc, SectionKind::Review),
        summary: extract_summary(doc),
    };
    debug!(
        details = sections.details.tokens.len(),
        classification = sections.classification.len(),
        operation = sections.operation.len(),
        cargo = sections.cargo.len(),
        inspections = sections.inspections.tokens.len(),
        crashes = sections.crashes.tokens.len(),
        review = sections.review.tokens.len(),
        summary = sections.summary.len(),
        "Extracted sections"
    );
    sections
}

pub fn extract_section(doc: &ParsedDocument, kind: SectionKind) -> Section {
    let cells: Vec<ElementRef<'_>> = doc.select(kind.fingerprint()).collect();
    let tokens = match kind.window() {
        Window::Bounded { limit, raw } => cells
            .iter()
            .take(limit)
            .enumerate()
            .map(|(i, cell)| {
                if raw.contains(&i) {
                    Token::RawMarkup(cell.inner_html())
                } else {
                    Token::Text(element_text(cell))
                }
            })
            .collect(),
        Window::Dense => cells
            .iter()
            .filter(|cell| cell.text().any(|t| !t.is_empty()))
            .map(|cell| Token::Text(element_text(cell)))
            .collect(),
    };
    Section { kind, tokens }
}

/// Checkbox rows; label cells with blank text are skipped entirely.
pub fn extract_flags(doc: &ParsedDocument, kind: FlagKind) -> Vec<KeyValueEntry> {
    doc.select(kind.fingerprint())
        .filter_map(|cell| {
            let key = element_text(&cell);
            if key.is_empty() {
                return None;
            }
            let value = cell
                .prev_siblings()
                .find_map(ElementRef::wrap)
                .is_some_and(|mark| !element_text(&mark).is_empty());
            Some(KeyValueEntry { key, value })
        })
        .collect()
}

/// "As of" dates and totals rendered as coloured labels, in document order.
/// Only labels starting with a digit count; each keeps its first ten characters.
pub fn extract_summary(doc: &ParsedDocument) -> Vec<String> {
    doc.select(&SUMMARY_LABELS)
        .map(|label| element_text(&label))
        .filter(|text| text.starts_with(|c: char| c.is_ascii_digit()))
        .map(|text| text.chars().take(SUMMARY_PREFIX_LEN).collect())
        .collect()
}

// ── Tests ──
