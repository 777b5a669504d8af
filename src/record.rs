use serde::Serialize;

use crate::config::Settings;
use crate::parser::sections::KeyValueEntry;

/// Normalised carrier record, serialised as camelCase JSON.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyRecord {
    pub name: String,
    pub dba_name: String,
    pub mc_number: String,
    pub usdot_number: String,
    pub address: PostalAddress,
    pub mail_address: PostalAddress,
    pub phone_number: String,
    pub phone_country_code: String,
    #[serde(rename = "type")]
    pub entity_type: String,
    pub safer_company: SaferCompany,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostalAddress {
    pub address_line1: String,
    pub address_line2: String,
    pub city_name: String,
    pub region_code: String,
    pub region_name: String,
    pub country_code: String,
    pub country_name: String,
    pub post_code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaferCompany {
    pub details: CarrierDetails,
    #[serde(rename = "inspectionsInUS")]
    pub inspections_in_us: UsInspections,
    pub inspections_in_canada: CanadaInspections,
    pub safety_rating: SafetyRating,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CarrierDetails {
    pub status: String,
    pub out_of_service: String,
    pub state_carrier_number: String,
    pub duns_number: String,
    pub power_units: String,
    pub drivers: String,
    pub mcs150_form_date: String,
    pub mcs150_mileage: String,
    pub information_as_of_date: String,
    pub classification: Vec<KeyValueEntry>,
    pub operations: Vec<KeyValueEntry>,
    pub cargo: Vec<KeyValueEntry>,
}

/// Vehicle / driver / hazmat / IEP breakdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InspectionBreakdown {
    pub vehicle: String,
    pub driver: String,
    pub hazmat: String,
    pub iep: String,
}

/// Vehicle / driver breakdown (Canada reports no hazmat or IEP columns).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VehicleDriver {
    pub vehicle: String,
    pub driver: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CrashCounts {
    pub fatal: String,
    pub injury: String,
    pub tow: String,
    pub total: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UsInspections {
    pub inspection_as_of_date: String,
    pub total_inspections: String,
    pub total_iep_inspections: String,
    pub crashes_as_of_date: String,
    pub inspections: InspectionBreakdown,
    pub out_of_service: InspectionBreakdown,
    pub out_of_service_in_percent: InspectionBreakdown,
    pub nat_average: InspectionBreakdown,
    pub crashes: CrashCounts,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CanadaInspections {
    pub inspection_as_of_date: String,
    pub total_inspections: String,
    pub crashes_as_of_date: String,
    pub inspections: VehicleDriver,
    pub out_of_service: VehicleDriver,
    pub out_of_service_in_percent: VehicleDriver,
    pub crashes: CrashCounts,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SafetyRating {
    pub report_as_of_date: String,
    pub rating_data: RatingData,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingData {
    pub rating_date: String,
    pub review_date: String,
    pub rating: String,
    #[serde(rename = "type")]
    pub review_type: String,
}

/// Contact used when the page carries no phone number, normally the
/// requesting user's own phone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactFallback {
    pub phone_number: String,
    pub phone_country_code: String,
}

impl ContactFallback {
    pub fn new(phone_number: impl Into<String>, phone_country_code: impl Into<String>) -> Self {
        ContactFallback {
            phone_number: phone_number.into(),
            phone_country_code: phone_country_code.into(),
        }
    }
}

impl From<&Settings> for ContactFallback {
    fn from(settings: &Settings) -> Self {
        ContactFallback::new(
            settings.default_phone_number.clone(),
            settings.default_phone_country_code.clone(),
        )
    }
}

impl Default for ContactFallback {
    fn default() -> Self {
        ContactFallback::from(&Settings::default())
    }
}
