use crate::parser::extract::address::{self, ParsedAddress};
use crate::parser::extract::phone;
use crate::parser::fields::{self, crashes, details, inspections, review, summary, CrashRow, Pair, Quad};
use crate::parser::sections::{ExtractedSections, Section};
use crate::record::*;
use crate::utils::{or_na, start_case, NOT_AVAILABLE};

const COUNTRY_CODE: &str = "US";
const COUNTRY_NAME: &str = "United States";

/// Assemble the full record. Pure: every gap is filled with a default.
pub fn build(usdot: &str, parsed: &ExtractedSections, fallback: &ContactFallback) -> CompanyRecord {
    let d = &parsed.details;

    let (phone_number, phone_country_code) = match d.text(details::PHONE).filter(|p| !p.is_empty()) {
        Some(p) => (phone::normalize(p), phone::PHONE_COUNTRY.to_string()),
        None => (
            fallback.phone_number.clone(),
            fallback.phone_country_code.clone(),
        ),
    };

    CompanyRecord {
        name: start_case(&d.field(details::LEGAL_NAME)),
        dba_name: or_na(d.text(details::DBA_NAME)),
        mc_number: or_na(d.text(details::MC_NUMBER)),
        usdot_number: d
            .text(details::USDOT_NUMBER)
            .filter(|n| !n.is_empty())
            .unwrap_or(usdot)
            .to_string(),
        address: postal(address::parse(d.raw(details::PHYSICAL_ADDRESS))),
        mail_address: postal(address::parse(d.raw(details::MAILING_ADDRESS))),
        phone_number,
        phone_country_code,
        entity_type: start_case(&or_na(d.text(details::ENTITY_TYPE))),
        safer_company: SaferCompany {
            details: carrier_details(parsed),
            inspections_in_us: us_inspections(parsed),
            inspections_in_canada: canada_inspections(parsed),
            safety_rating: safety_rating(parsed),
        },
    }
}

fn postal(a: ParsedAddress) -> PostalAddress {
    PostalAddress {
        address_line1: start_case(&a.address_line1),
        address_line2: NOT_AVAILABLE.to_string(),
        city_name: start_case(&a.city_name),
        region_code: a.region_code,
        region_name: NOT_AVAILABLE.to_string(),
        country_code: COUNTRY_CODE.to_string(),
        country_name: COUNTRY_NAME.to_string(),
        post_code: a.post_code,
    }
}

fn carrier_details(parsed: &ExtractedSections) -> CarrierDetails {
    let d = &parsed.details;
    CarrierDetails {
        status: start_case(&d.field(details::STATUS)),
        out_of_service: d.field(details::OUT_OF_SERVICE),
        state_carrier_number: d.field(details::STATE_CARRIER_ID),
        duns_number: d.field(details::DUNS_NUMBER),
        power_units: d.field(details::POWER_UNITS),
        drivers: d.field(details::DRIVERS),
        mcs150_form_date: d.field(details::MCS150_FORM_DATE),
        mcs150_mileage: d.field(details::MCS150_MILEAGE),
        information_as_of_date: fields::metric(&parsed.summary, summary::INFORMATION_AS_OF),
        classification: parsed.classification.clone(),
        operations: parsed.operation.clone(),
        cargo: parsed.cargo.clone(),
    }
}

fn us_inspections(parsed: &ExtractedSections) -> UsInspections {
    let i = &parsed.inspections;
    let s = &parsed.summary;
    UsInspections {
        inspection_as_of_date: fields::metric(s, summary::US_INSPECTIONS_AS_OF),
        total_inspections: fields::metric(s, summary::US_TOTAL_INSPECTIONS),
        total_iep_inspections: fields::metric(s, summary::US_TOTAL_IEP_INSPECTIONS),
        crashes_as_of_date: fields::metric(s, summary::US_CRASHES_AS_OF),
        inspections: breakdown(i, inspections::US_INSPECTIONS),
        out_of_service: breakdown(i, inspections::US_OUT_OF_SERVICE),
        out_of_service_in_percent: breakdown(i, inspections::US_OUT_OF_SERVICE_PERCENT),
        nat_average: breakdown(i, inspections::US_NATIONAL_AVERAGE),
        crashes: crash_counts(&parsed.crashes, crashes::US),
    }
}

fn canada_inspections(parsed: &ExtractedSections) -> CanadaInspections {
    let i = &parsed.inspections;
    let s = &parsed.summary;
    CanadaInspections {
        inspection_as_of_date: fields::metric(s, summary::CA_INSPECTIONS_AS_OF),
        total_inspections: fields::metric(s, summary::CA_TOTAL_INSPECTIONS),
        crashes_as_of_date: fields::metric(s, summary::CA_CRASHES_AS_OF),
        inspections: vehicle_driver(i, inspections::CA_INSPECTIONS),
        out_of_service: vehicle_driver(i, inspections::CA_OUT_OF_SERVICE),
        out_of_service_in_percent: vehicle_driver(i, inspections::CA_OUT_OF_SERVICE_PERCENT),
        crashes: crash_counts(&parsed.crashes, crashes::CANADA),
    }
}

fn safety_rating(parsed: &ExtractedSections) -> SafetyRating {
    let r = &parsed.review;
    SafetyRating {
        report_as_of_date: fields::metric(&parsed.summary, summary::RATING_AS_OF),
        rating_data: RatingData {
            rating_date: r.field(review::RATING_DATE),
            review_date: r.field(review::REVIEW_DATE),
            rating: r.field(review::RATING),
            review_type: r.field(review::REVIEW_TYPE),
        },
    }
}

fn breakdown(section: &Section, at: Quad) -> InspectionBreakdown {
    InspectionBreakdown {
        vehicle: section.field(at.vehicle),
        driver: section.field(at.driver),
        hazmat: section.field(at.hazmat),
        iep: section.field(at.iep),
    }
}

fn vehicle_driver(section: &Section, at: Pair) -> VehicleDriver {
    VehicleDriver {
        vehicle: section.field(at.vehicle),
        driver: section.field(at.driver),
    }
}

fn crash_counts(section: &Section, at: CrashRow) -> CrashCounts {
    CrashCounts {
        fatal: section.field(at.fatal),
        injury: section.field(at.injury),
        tow: section.field(at.tow),
        total: section.field(at.total),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::sections::{SectionKind, Token};

    fn empty(kind: SectionKind) -> Section {
        Section {
            kind,
            tokens: Vec::new(),
        }
    }

    fn empty_sections() -> ExtractedSections {
        ExtractedSections {
            details: empty(SectionKind::Details),
            classification: Vec::new(),
            operation: Vec::new(),
            cargo: Vec::new(),
            inspections: empty(SectionKind::Inspections),
            crashes: empty(SectionKind::Crashes),
            review: empty(SectionKind::Review),
            summary: Vec::new(),
        }
    }

    fn details_section(values: &[&str]) -> Section {
        Section {
            kind: SectionKind::Details,
            tokens: values
                .iter()
                .enumerate()
                .map(|(i, v)| {
                    if details::RAW_MARKUP.contains(&i) {
                        Token::RawMarkup(v.to_string())
                    } else {
                        Token::Text(v.to_string())
                    }
                })
                .collect(),
        }
    }

    #[test]
    fn empty_page_is_complete_shape() {
        let fallback = ContactFallback::new("+15550000000", "US");
        let record = build("42", &empty_sections(), &fallback);
        assert_eq!(record.name, "n/a");
        assert_eq!(record.entity_type, "n/a");
        assert_eq!(record.usdot_number, "42");
        assert_eq!(record.dba_name, "n/a");
        assert_eq!(record.address.address_line1, "n/a");
        assert_eq!(record.address.country_code, "US");
        assert_eq!(record.phone_number, "+15550000000");
        assert_eq!(record.safer_company.details.power_units, "n/a");
        assert_eq!(record.safer_company.inspections_in_canada.crashes.total, "n/a");
        assert_eq!(record.safer_company.safety_rating.rating_data.rating, "n/a");
    }

    #[test]
    fn blank_phone_uses_fallback() {
        let mut parsed = empty_sections();
        parsed.details = details_section(&["CARRIER", "ACTIVE", "None", "ACME", "", "", ""]);
        let fallback = ContactFallback::new("+15550001111", "CA");
        let record = build("7", &parsed, &fallback);
        assert_eq!(record.phone_number, "+15550001111");
        assert_eq!(record.phone_country_code, "CA");
        assert_eq!(record.name, "Acme");
        assert_eq!(record.safer_company.details.status, "Active");
    }

    #[test]
    fn details_positions_map_to_fields() {
        let mut parsed = empty_sections();
        parsed.details = details_section(&[
            "INTRASTATE ONLY (HM)",
            "NOT AUTHORIZED",
            "03/01/2024",
            "ROAD RUNNER LOGISTICS INC",
            "RRL",
            "\n 9 ELM ST<br>\n DALLAS, TX &nbsp; 75201",
            "214-555-0100",
            "not an address",
            "999",
            "TX-55",
            "MC-1",
            "11-222-3333",
            "3",
            "4",
            "01/01/2025",
            "10,000 (2024)",
        ]);
        let r = build("999", &parsed, &ContactFallback::default());
        let d = &r.safer_company.details;
        assert_eq!(r.entity_type, "Intrastate Only (hm)");
        assert_eq!(d.status, "Not Authorized");
        assert_eq!(d.out_of_service, "03/01/2024");
        assert_eq!(r.name, "Road Runner Logistics Inc");
        assert_eq!(r.dba_name, "RRL");
        assert_eq!(r.address.address_line1, "9 Elm St");
        assert_eq!(r.address.city_name, "Dallas");
        assert_eq!(r.address.region_code, "TX");
        assert_eq!(r.address.post_code, "75201");
        assert_eq!(r.phone_number, "+12145550100");
        assert_eq!(r.phone_country_code, "US");
        assert_eq!(r.mail_address.city_name, "n/a");
        assert_eq!(r.mail_address.post_code, "n/a");
        assert_eq!(r.usdot_number, "999");
        assert_eq!(d.state_carrier_number, "TX-55");
        assert_eq!(r.mc_number, "MC-1");
        assert_eq!(d.duns_number, "11-222-3333");
        assert_eq!(d.power_units, "3");
        assert_eq!(d.drivers, "4");
        assert_eq!(d.mcs150_form_date, "01/01/2025");
        assert_eq!(d.mcs150_mileage, "10,000 (2024)");
    }

    #[test]
    fn inspection_and_crash_positions() {
        let mut parsed = empty_sections();
        parsed.inspections.tokens = (0..22).map(|i| Token::Text(format!("i{i}"))).collect();
        parsed.crashes.tokens = (0..8).map(|i| Token::Text(format!("c{i}"))).collect();
        parsed.summary = (0..9).map(|i| format!("s{i}")).collect();
        let r = build("1", &parsed, &ContactFallback::default()).safer_company;

        let us = &r.inspections_in_us;
        assert_eq!(us.inspection_as_of_date, "s1");
        assert_eq!(us.total_inspections, "s2");
        assert_eq!(us.total_iep_inspections, "s3");
        assert_eq!(us.crashes_as_of_date, "s4");
        assert_eq!(us.inspections.vehicle, "i0");
        assert_eq!(us.inspections.iep, "i3");
        assert_eq!(us.out_of_service.vehicle, "i4");
        assert_eq!(us.out_of_service_in_percent.hazmat, "i10");
        assert_eq!(us.nat_average.iep, "i15");
        assert_eq!(us.crashes.fatal, "c0");
        assert_eq!(us.crashes.total, "c3");

        let ca = &r.inspections_in_canada;
        assert_eq!(ca.inspection_as_of_date, "s5");
        assert_eq!(ca.total_inspections, "s6");
        assert_eq!(ca.crashes_as_of_date, "s7");
        assert_eq!(ca.inspections.vehicle, "i16");
        assert_eq!(ca.out_of_service.driver, "i19");
        assert_eq!(ca.out_of_service_in_percent.driver, "i21");
        assert_eq!(ca.crashes.injury, "c5");
        assert_eq!(ca.crashes.total, "c7");

        assert_eq!(r.details.information_as_of_date, "s0");
        assert_eq!(r.safety_rating.report_as_of_date, "s8");
    }
}
