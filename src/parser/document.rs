use scraper::{ElementRef, Html, Selector};
use tracing::debug;

/// Phrases the registry renders instead of a carrier snapshot.
pub const NOT_FOUND_SENTINELS: &[&str] = &["Record Inactive", "Record Not Found", "WELCOME TO SAFER"];

/// A parsed profile page. Every extraction step borrows this explicitly;
/// nothing about the current page lives outside it.
pub struct ParsedDocument {
    html: Html,
}

impl ParsedDocument {
    /// Parse raw markup. Malformed input never fails: the HTML5 parser
    /// recovers and the result is at worst an empty tree.
    pub fn load(markup: &str) -> Self {
        let html = Html::parse_document(markup);
        if !html.errors.is_empty() {
            debug!("Recovered from {} markup errors", html.errors.len());
        }
        ParsedDocument { html }
    }

    pub fn select<'a, 'b>(&'a self, selector: &'b Selector) -> scraper::html::Select<'a, 'b> {
        self.html.select(selector)
    }

    pub fn root(&self) -> ElementRef<'_> {
        self.html.root_element()
    }

    /// Concatenated text of the whole document.
    pub fn text(&self) -> String {
        self.root().text().collect()
    }

    /// True when the page is a sentinel ("not found" / inactive / landing) page.
    pub fn is_not_found(&self) -> bool {
        let text = self.text();
        NOT_FOUND_SENTINELS.iter().any(|s| text.contains(s))
    }
}

/// Trimmed text content of an element.
pub fn element_text(element: &ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}
