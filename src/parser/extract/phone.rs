/// North American calling code prepended to every number.
pub const CALLING_CODE: &str = "+1";
/// Country reported alongside a number taken from the page.
pub const PHONE_COUNTRY: &str = "US";

/// Keep only the digits and prefix the calling code. The digit count is not checked.
pub fn normalize(phone: &str) -> String {
    let digits: String = phone.chars().filter(char::is_ascii_digit).collect();
    format!("{}{}", CALLING_CODE, digits)
}
