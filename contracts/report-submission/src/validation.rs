#![no_std]

use soroban_sdk::{Bytes, String};

use crate::types::Error;

/// Ceiling on stored reports. Kept as a constant; there is no setter.
pub const MAX_REPORTS: u64 = 1_000_000;

/// Maximum length for the report description (bytes).
pub const MAX_DESCRIPTION_LEN: u32 = 500;
/// Maximum length for the location field.
pub const MAX_LOCATION_LEN: u32 = 100;
/// Maximum length for the free-form metadata field.
pub const MAX_METADATA_LEN: u32 = 200;

/// Severity scale bounds, inclusive.
pub const MIN_SEVERITY: u32 = 1;
pub const MAX_SEVERITY: u32 = 5;

/// Non-empty string no longer than `max_len`, or `err`.
fn validate_text(value: &String, max_len: u32, err: Error) -> Result<(), Error> {
    if value.is_empty() || value.len() > max_len {
        return Err(err);
    }
    Ok(())
}

pub fn validate_report_capacity(count: u64) -> Result<(), Error> {
    if count >= MAX_REPORTS {
        return Err(Error::ReportCountExceeded);
    }
    Ok(())
}

pub fn validate_drug_id(drug_id: u64) -> Result<(), Error> {
    if drug_id == 0 {
        return Err(Error::InvalidDrugId);
    }
    Ok(())
}

pub fn validate_anonymous_id(anonymous_id: &Bytes) -> Result<(), Error> {
    if anonymous_id.is_empty() {
        return Err(Error::InvalidAnonymousId);
    }
    Ok(())
}

pub fn validate_description(description: &String) -> Result<(), Error> {
    validate_text(description, MAX_DESCRIPTION_LEN, Error::InvalidDescription)
}

pub fn validate_severity(severity: u32) -> Result<(), Error> {
    if !(MIN_SEVERITY..=MAX_SEVERITY).contains(&severity) {
        return Err(Error::InvalidSeverity);
    }
    Ok(())
}

pub fn validate_location(location: &String) -> Result<(), Error> {
    validate_text(location, MAX_LOCATION_LEN, Error::InvalidLocation)
}

pub fn validate_evidence_hash(evidence_hash: &Bytes) -> Result<(), Error> {
    if evidence_hash.is_empty() {
        return Err(Error::InvalidHash);
    }
    Ok(())
}

/// Metadata may be empty, only the upper bound is enforced.
pub fn validate_metadata(metadata: &String) -> Result<(), Error> {
    if metadata.len() > MAX_METADATA_LEN {
        return Err(Error::InvalidMetadata);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::{Bytes, Env, String};

    #[test]
    fn test_validate_report_capacity() {
        assert!(validate_report_capacity(0).is_ok());
        assert!(validate_report_capacity(MAX_REPORTS - 1).is_ok());
        assert_eq!(
            validate_report_capacity(MAX_REPORTS),
            Err(Error::ReportCountExceeded)
        );
    }

    #[test]
    fn test_validate_drug_id() {
        assert!(validate_drug_id(1).is_ok());
        assert_eq!(validate_drug_id(0), Err(Error::InvalidDrugId));
    }

    #[test]
    fn test_validate_anonymous_id() {
        let env = Env::default();
        assert!(validate_anonymous_id(&Bytes::from_array(&env, &[1u8; 16])).is_ok());
        assert_eq!(
            validate_anonymous_id(&Bytes::new(&env)),
            Err(Error::InvalidAnonymousId)
        );
    }

    #[test]
    fn test_validate_description() {
        let env = Env::default();
        assert!(validate_description(&String::from_str(&env, "Headache")).is_ok());
        assert_eq!(
            validate_description(&String::from_str(&env, "")),
            Err(Error::InvalidDescription)
        );
        let too_long = String::from_str(&env, "a".repeat(501).as_str());
        assert_eq!(
            validate_description(&too_long),
            Err(Error::InvalidDescription)
        );
    }

    #[test]
    fn test_validate_severity() {
        assert!(validate_severity(1).is_ok());
        assert!(validate_severity(5).is_ok());
        assert_eq!(validate_severity(0), Err(Error::InvalidSeverity));
        assert_eq!(validate_severity(6), Err(Error::InvalidSeverity));
    }

    #[test]
    fn test_validate_location() {
        let env = Env::default();
        assert!(validate_location(&String::from_str(&env, "New York")).is_ok());
        assert_eq!(
            validate_location(&String::from_str(&env, "")),
            Err(Error::InvalidLocation)
        );
        let too_long = String::from_str(&env, "a".repeat(101).as_str());
        assert_eq!(validate_location(&too_long), Err(Error::InvalidLocation));
    }

    #[test]
    fn test_validate_evidence_hash() {
        let env = Env::default();
        assert!(validate_evidence_hash(&Bytes::from_array(&env, &[2u8; 32])).is_ok());
        assert_eq!(
            validate_evidence_hash(&Bytes::new(&env)),
            Err(Error::InvalidHash)
        );
    }

    #[test]
    fn test_validate_metadata() {
        let env = Env::default();
        assert!(validate_metadata(&String::from_str(&env, "Age: 30")).is_ok());
        assert!(validate_metadata(&String::from_str(&env, "")).is_ok());
        let too_long = String::from_str(&env, "a".repeat(201).as_str());
        assert_eq!(validate_metadata(&too_long), Err(Error::InvalidMetadata));
    }
}
