use std::fmt;
use std::str::FromStr;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Error type related to country codes
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CountryError {
    #[error("country codes must consist of exactly three characters")]
    InvalidLength,
    #[error("country codes must contain only alphabetic ASCII characters")]
    InvalidCharacter,
}

/// Three-letter country of origin code, stored upper-cased
#[derive(Debug, Clone, PartialEq, Copy)]
pub struct CountryCode {
    code: [char; 3],
}

impl CountryCode {
    pub fn new(input: &str) -> Result<CountryCode, CountryError> {
        let mut code = [' ', ' ', ' '];
        let mut idx = 0;
        for c in input.trim().chars() {
            if idx >= 3 {
                return Err(CountryError::InvalidLength);
            }
            if c.is_ascii_alphabetic() {
                code[idx] = c.to_ascii_uppercase();
                idx += 1;
            } else {
                return Err(CountryError::InvalidCharacter);
            }
        }
        if idx != 3 {
            Err(CountryError::InvalidLength)
        } else {
            Ok(Self { code })
        }
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}{}", self.code[0], self.code[1], self.code[2])
    }
}

impl FromStr for CountryCode {
    type Err = CountryError;

    fn from_str(c: &str) -> Result<CountryCode, CountryError> {
        CountryCode::new(c)
    }
}

impl Serialize for CountryCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

struct CountryCodeVisitor;

impl<'de> Visitor<'de> for CountryCodeVisitor {
    type Value = CountryCode;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a country code must consist of three alphabetic characters")
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        match CountryCode::from_str(value) {
            Ok(val) => Ok(val),
            Err(err) => Err(E::custom(format!("{}", err))),
        }
    }
}

impl<'de> Deserialize<'de> for CountryCode {
    fn deserialize<D>(deserializer: D) -> Result<CountryCode, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(CountryCodeVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_write_country() {
        // valid code
        let country = CountryCode::from_str("SWE").unwrap();
        assert_eq!(format!("{}", country), "SWE".to_string());

        // case ignorance
        let country = CountryCode::from_str("usa").unwrap();
        assert_eq!(format!("{}", country), "USA".to_string());

        // to short
        let country = CountryCode::from_str("US");
        assert_eq!(country, Err(CountryError::InvalidLength));

        // to long
        let country = CountryCode::from_str("USAA");
        assert_eq!(country, Err(CountryError::InvalidLength));

        // invalid character
        let country = CountryCode::from_str("12A");
        assert_eq!(country, Err(CountryError::InvalidCharacter));
    }

    #[test]
    fn deserialize_country() {
        let input = r#""SWE""#;

        let country: CountryCode = serde_json::from_str(input).unwrap();
        assert_eq!(format!("{}", country), "SWE");
    }

    #[test]
    fn serialize_country() {
        let country = CountryCode::new("SWE").unwrap();
        let json = serde_json::to_string(&country).unwrap();
        assert_eq!(json, r#""SWE""#);
    }
}
