//! Fixed position tables for each report section.
//!
//! The profile page has no field labels we can key on reliably, so each
//! value is identified by where it falls among the matched cells. A layout
//! change upstream should only ever touch this file.

use super::sections::{Section, Token};
use crate::utils::NOT_AVAILABLE;

/// Vehicle / driver / hazmat / IEP positions of one inspection row.
#[derive(Debug, Clone, Copy)]
pub struct Quad {
    pub vehicle: usize,
    pub driver: usize,
    pub hazmat: usize,
    pub iep: usize,
}

/// Vehicle / driver positions of one Canadian inspection row.
#[derive(Debug, Clone, Copy)]
pub struct Pair {
    pub vehicle: usize,
    pub driver: usize,
}

/// Fatal / injury / tow / total positions of one crash row.
#[derive(Debug, Clone, Copy)]
pub struct CrashRow {
    pub fatal: usize,
    pub injury: usize,
    pub tow: usize,
    pub total: usize,
}

const fn quad(start: usize) -> Quad {
    Quad {
        vehicle: start,
        driver: start + 1,
        hazmat: start + 2,
        iep: start + 3,
    }
}

const fn pair(start: usize) -> Pair {
    Pair {
        vehicle: start,
        driver: start + 1,
    }
}

const fn crash_row(start: usize) -> CrashRow {
    CrashRow {
        fatal: start,
        injury: start + 1,
        tow: start + 2,
        total: start + 3,
    }
}

pub mod details {
    pub const ENTITY_TYPE: usize = 0;
    pub const STATUS: usize = 1;
    pub const OUT_OF_SERVICE: usize = 2;
    pub const LEGAL_NAME: usize = 3;
    pub const DBA_NAME: usize = 4;
    pub const PHYSICAL_ADDRESS: usize = 5;
    pub const PHONE: usize = 6;
    pub const MAILING_ADDRESS: usize = 7;
    pub const USDOT_NUMBER: usize = 8;
    pub const STATE_CARRIER_ID: usize = 9;
    pub const MC_NUMBER: usize = 10;
    pub const DUNS_NUMBER: usize = 11;
    pub const POWER_UNITS: usize = 12;
    pub const DRIVERS: usize = 13;
    pub const MCS150_FORM_DATE: usize = 14;
    pub const MCS150_MILEAGE: usize = 15;

    /// Cells read from the details table; anything after is ignored.
    pub const WINDOW: usize = 16;
    /// Cells captured as markup rather than text.
    pub const RAW_MARKUP: &[usize] = &[PHYSICAL_ADDRESS, MAILING_ADDRESS];
}

pub mod inspections {
    use super::{pair, quad, Pair, Quad};

    pub const US_INSPECTIONS: Quad = quad(0);
    pub const US_OUT_OF_SERVICE: Quad = quad(4);
    pub const US_OUT_OF_SERVICE_PERCENT: Quad = quad(8);
    pub const US_NATIONAL_AVERAGE: Quad = quad(12);

    pub const CA_INSPECTIONS: Pair = pair(16);
    pub const CA_OUT_OF_SERVICE: Pair = pair(18);
    pub const CA_OUT_OF_SERVICE_PERCENT: Pair = pair(20);
}

pub mod crashes {
    use super::{crash_row, CrashRow};

    pub const US: CrashRow = crash_row(0);
    pub const CANADA: CrashRow = crash_row(4);
}

pub mod review {
    pub const RATING_DATE: usize = 0;
    pub const REVIEW_DATE: usize = 1;
    pub const RATING: usize = 2;
    pub const REVIEW_TYPE: usize = 3;
}

/// Order of the coloured summary labels down the page.
pub mod summary {
    pub const INFORMATION_AS_OF: usize = 0;
    pub const US_INSPECTIONS_AS_OF: usize = 1;
    pub const US_TOTAL_INSPECTIONS: usize = 2;
    pub const US_TOTAL_IEP_INSPECTIONS: usize = 3;
    pub const US_CRASHES_AS_OF: usize = 4;
    pub const CA_INSPECTIONS_AS_OF: usize = 5;
    pub const CA_TOTAL_INSPECTIONS: usize = 6;
    pub const CA_CRASHES_AS_OF: usize = 7;
    pub const RATING_AS_OF: usize = 8;
}

impl Section {
    /// Text token at `index`; `None` past the end or for a markup token.
    pub fn text(&self, index: usize) -> Option<&str> {
        match self.tokens.get(index)? {
            Token::Text(t) => Some(t),
            Token::RawMarkup(_) => None,
        }
    }

    /// Markup token at `index`; `None` past the end or for a text token.
    pub fn raw(&self, index: usize) -> Option<&str> {
        match self.tokens.get(index)? {
            Token::RawMarkup(m) => Some(m),
            Token::Text(_) => None,
        }
    }

    /// Text at `index`, or `"n/a"` when the section is too short.
    pub fn field(&self, index: usize) -> String {
        self.text(index).unwrap_or(NOT_AVAILABLE).to_string()
    }
}

/// Summary metric at `index`, or `"n/a"`.
pub fn metric(summary: &[String], index: usize) -> String {
    summary
        .get(index)
        .map(String::as_str)
        .unwrap_or(NOT_AVAILABLE)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::sections::SectionKind;

    fn section(tokens: Vec<Token>) -> Section {
        Section {
            kind: SectionKind::Review,
            tokens,
        }
    }

    #[test]
    fn lookups_respect_token_kind() {
        let s = section(vec![
            Token::Text("Satisfactory".into()),
            Token::RawMarkup("<br>".into()),
        ]);
        assert_eq!(s.text(0), Some("Satisfactory"));
        assert_eq!(s.raw(0), None);
        assert_eq!(s.raw(1), Some("<br>"));
        assert_eq!(s.text(1), None);
    }

    #[test]
    fn out_of_range_falls_back() {
        let s = section(vec![Token::Text("01/02/2020".into())]);
        assert_eq!(s.field(review::RATING_DATE), "01/02/2020");
        assert_eq!(s.field(review::REVIEW_TYPE), "n/a");
        assert_eq!(s.text(99), None);
        assert_eq!(metric(&[], summary::RATING_AS_OF), "n/a");
    }

    #[test]
    fn empty_text_is_kept() {
        let s = section(vec![Token::Text(String::new())]);
        assert_eq!(s.field(0), "");
    }

    #[test]
    fn tables_cover_every_position() {
        assert_eq!(details::MCS150_MILEAGE + 1, details::WINDOW);
        assert_eq!(inspections::US_NATIONAL_AVERAGE.iep, 15);
        assert_eq!(inspections::CA_INSPECTIONS.vehicle, 16);
        assert_eq!(inspections::CA_OUT_OF_SERVICE_PERCENT.driver, 21);
        assert_eq!(crashes::CANADA.total, 7);
        assert_eq!(summary::RATING_AS_OF, 8);
    }
}
