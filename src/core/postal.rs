use crate::domain::model::CountryCode;
use regex::Regex;
use std::sync::LazyLock;

// 只接受 ASCII 數字，與表單輸入一致
static CANADIAN_POSTAL_CODE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z][0-9][A-Za-z] ?[0-9][A-Za-z][0-9]$").expect("Invalid regex")
});

static US_ZIP_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{5}$").expect("Invalid regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostalFormat {
    Canadian,
    UsZip,
}

impl PostalFormat {
    pub fn country(&self) -> CountryCode {
        match self {
            PostalFormat::Canadian => CountryCode::Ca,
            PostalFormat::UsZip => CountryCode::Us,
        }
    }
}

/// `A1A 1A1` or `A1A1A1`, either case.
pub fn is_canadian(postal_code: &str) -> bool {
    CANADIAN_POSTAL_CODE.is_match(postal_code)
}

/// Exactly five digits.
pub fn is_us_zip(postal_code: &str) -> bool {
    US_ZIP_CODE.is_match(postal_code)
}

/// Recognize one of the two supported formats. Canadian is checked first;
/// the two patterns never overlap.
pub fn detect_format(postal_code: &str) -> Option<PostalFormat> {
    if is_canadian(postal_code) {
        Some(PostalFormat::Canadian)
    } else if is_us_zip(postal_code) {
        Some(PostalFormat::UsZip)
    } else {
        None
    }
}

/// Render-time classification. Anything that is not Canadian-shaped is
/// treated as US; the ZIP pattern is not re-checked here.
pub fn classify_country(postal_code: &str) -> CountryCode {
    if is_canadian(postal_code) {
        CountryCode::Ca
    } else {
        CountryCode::Us
    }
}
