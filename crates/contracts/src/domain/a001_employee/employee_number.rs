use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of leading surname characters taken into the employee number
pub const SURNAME_PREFIX_LEN: usize = 3;

/// Number of trailing ID-number digits taken into the employee number
pub const ID_SUFFIX_LEN: usize = 4;

/// Employee number derived from the surname and the ID number
///
/// `uppercase(surname[0..3]) + id_number[last 4]`, or an empty value when
/// either part is too short. Lengths are counted in characters, not bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeNumber(String);

impl EmployeeNumber {
    pub fn derive(surname: &str, id_number: &str) -> Self {
        let id_len = id_number.chars().count();
        if surname.chars().count() < SURNAME_PREFIX_LEN || id_len < ID_SUFFIX_LEN {
            return Self::default();
        }

        let prefix: String = surname
            .chars()
            .take(SURNAME_PREFIX_LEN)
            .collect::<String>()
            .to_uppercase();
        let suffix: String = id_number.chars().skip(id_len - ID_SUFFIX_LEN).collect();

        Self(prefix + &suffix)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for EmployeeNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for EmployeeNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_from_full_input() {
        assert_eq!(EmployeeNumber::derive("Doe", "9001015009087").as_str(), "DOE9087");
        assert_eq!(EmployeeNumber::derive("smith", "8507125800083").as_str(), "SMI0083");
    }

    #[test]
    fn test_derive_boundaries() {
        assert_eq!(EmployeeNumber::derive("Ngu", "1234").as_str(), "NGU1234");
        assert!(EmployeeNumber::derive("Li", "1234567890123").is_empty());
        assert!(EmployeeNumber::derive("Dlamini", "123").is_empty());
        assert!(EmployeeNumber::derive("", "").is_empty());
    }

    #[test]
    fn test_derive_is_idempotent() {
        let first = EmployeeNumber::derive("van Wyk", "7708125009081");
        let second = EmployeeNumber::derive("van Wyk", "7708125009081");
        assert_eq!(first, second);
        assert_eq!(first.as_str(), "VAN9081");
    }

    #[test]
    fn test_derive_counts_characters_not_bytes() {
        assert_eq!(EmployeeNumber::derive("Ölz", "0001").as_str(), "ÖLZ0001");
        assert!(EmployeeNumber::derive("Øy", "12345").is_empty());
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let number = EmployeeNumber::derive("Doe", "9001015009087");
        assert_eq!(serde_json::to_string(&number).unwrap(), "\"DOE9087\"");
    }
}
