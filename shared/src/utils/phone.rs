//! Phone number validation and formatting utilities
//!
//! Holds the per-region pattern table used both by the client-facing flow
//! (fast feedback before submission) and as an input gate on the server side.
//! Unrecognised regions fall back to a permissive generic pattern.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

/// Validation rules for one region
#[derive(Debug)]
pub struct PhoneRegion {
    /// Pattern a local number must match
    pub pattern: Regex,
    /// Canonical display format for the region
    pub format: &'static str,
    /// Example placeholder shown to users
    pub placeholder: &'static str,
}

/// Region code used when the caller does not specify one
pub const DEFAULT_REGION: &str = "DEFAULT";

static PHONE_REGIONS: Lazy<HashMap<&'static str, PhoneRegion>> = Lazy::new(|| {
    let mut regions = HashMap::new();
    regions.insert(
        "ES",
        PhoneRegion {
            pattern: Regex::new(r"^(\+34|0034|34)?[6789]\d{8}$").unwrap(),
            format: "+34 6XX XXX XXX",
            placeholder: "+34 600000000",
        },
    );
    regions.insert(
        "MX",
        PhoneRegion {
            pattern: Regex::new(r"^(\+52|0052|52)?[1-9]\d{9}$").unwrap(),
            format: "+52 XXX XXX XXXX",
            placeholder: "+52 5500000000",
        },
    );
    regions.insert(
        "AR",
        PhoneRegion {
            pattern: Regex::new(r"^(\+54|0054|54)?[2-3679]\d{7,8}$").unwrap(),
            format: "+54 9 XXX XXX XXXX",
            placeholder: "+54 9 1100000000",
        },
    );
    regions.insert(
        "CO",
        PhoneRegion {
            pattern: Regex::new(r"^(\+57|0057|57)?[13]00[0-9]{7}$").unwrap(),
            format: "+57 3XX XXX XXXX",
            placeholder: "+57 3001000000",
        },
    );
    regions.insert(
        "CL",
        PhoneRegion {
            pattern: Regex::new(r"^(\+56|0056|56)?[2-9]\d{8}$").unwrap(),
            format: "+56 9 XXXX XXXX",
            placeholder: "+56 900000000",
        },
    );
    regions.insert(
        "PE",
        PhoneRegion {
            pattern: Regex::new(r"^(\+51|0051|51)?[6789]\d{8}$").unwrap(),
            format: "+51 9XX XXX XXX",
            placeholder: "+51 900000000",
        },
    );
    regions.insert(
        "BR",
        PhoneRegion {
            pattern: Regex::new(r"^(\+55|0055|55)?[1-9]\d{8,9}$").unwrap(),
            format: "+55 (XX) XXXXX-XXXX",
            placeholder: "+55 11 900000000",
        },
    );
    regions.insert(
        "US",
        PhoneRegion {
            pattern: Regex::new(r"^(\+1)?[2-9]\d{2}[2-9]\d{2}\d{4}$").unwrap(),
            format: "+1 (XXX) XXX-XXXX",
            placeholder: "+1 (555) 123-4567",
        },
    );
    regions.insert(
        DEFAULT_REGION,
        PhoneRegion {
            pattern: Regex::new(r"^(\+\d{1,3})?[\d\s()-]{7,}$").unwrap(),
            format: "+XX XXXXXXXXX",
            placeholder: "+XXXXXXXXXXXX",
        },
    );
    regions
});

/// Look up the validation rules for a region, falling back to `DEFAULT`
pub fn phone_region(country_code: Option<&str>) -> &'static PhoneRegion {
    country_code
        .and_then(|code| PHONE_REGIONS.get(code))
        .unwrap_or_else(|| &PHONE_REGIONS[DEFAULT_REGION])
}

/// Validate a phone number against its region's pattern
///
/// Stateless gate function; identical behaviour whether called from the
/// client-facing flow or server-side validation.
pub fn validate_phone(phone: &str, country_code: Option<&str>) -> bool {
    phone_region(country_code).pattern.is_match(phone.trim())
}

/// Strip common formatting characters, keeping digits and a leading `+`
pub fn normalize_phone_number(phone: &str) -> String {
    phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect()
}

/// Mask a phone number for logging (e.g. +34****4567)
pub fn mask_phone_number(phone: &str) -> String {
    let normalized = normalize_phone_number(phone);
    if normalized.len() >= 7 {
        format!(
            "{}****{}",
            &normalized[0..3],
            &normalized[normalized.len() - 4..]
        )
    } else {
        "****".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_spanish_mobile() {
        assert!(validate_phone("+34600000001", Some("ES")));
        assert!(validate_phone("600000001", Some("ES")));
        assert!(!validate_phone("+34100000001", Some("ES"))); // invalid leading digit
        assert!(!validate_phone("+3460000000", Some("ES"))); // too short
    }

    #[test]
    fn test_validate_us_number() {
        assert!(validate_phone("+15552234567", Some("US")));
        assert!(validate_phone("5552234567", Some("US")));
        assert!(!validate_phone("+11552234567", Some("US"))); // area code cannot start with 1
        assert!(!validate_phone("+15551234567", Some("US"))); // exchange cannot start with 1
    }

    #[test]
    fn test_validate_latin_american_numbers() {
        assert!(validate_phone("+525500000000", Some("MX")));
        assert!(validate_phone("+573001000000", Some("CO")));
        assert!(validate_phone("+56900000000", Some("CL")));
        assert!(validate_phone("+51900000001", Some("PE")));
        assert!(validate_phone("+5511900000000", Some("BR")));
    }

    #[test]
    fn test_unknown_region_falls_back_to_default() {
        assert!(validate_phone("+8613812345678", Some("CN")));
        assert!(validate_phone("+8613812345678", None));
        assert!(validate_phone("1234567", None)); // plus sign optional
        assert!(!validate_phone("123456", None)); // fewer than 7 characters
        assert!(!validate_phone("not-a-phone", None));
    }

    #[test]
    fn test_validation_trims_whitespace() {
        assert!(validate_phone("  +34600000001  ", Some("ES")));
    }

    #[test]
    fn test_region_lookup() {
        assert_eq!(phone_region(Some("US")).format, "+1 (XXX) XXX-XXXX");
        assert_eq!(phone_region(Some("ZZ")).format, "+XX XXXXXXXXX");
        assert_eq!(phone_region(None).placeholder, "+XXXXXXXXXXXX");
    }

    #[test]
    fn test_normalize_phone_number() {
        assert_eq!(normalize_phone_number("+1 (555) 123-4567"), "+15551234567");
        assert_eq!(normalize_phone_number("600 000 001"), "600000001");
    }

    #[test]
    fn test_mask_phone_number() {
        assert_eq!(mask_phone_number("+15551234567"), "+15****4567");
        assert_eq!(mask_phone_number("12345"), "****");
    }
}
