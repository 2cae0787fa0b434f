///! Implementation of a container for one inventory line item
use std::fmt;

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

use super::{ArticleNumber, CountryCode, DataError};

/// One inventory record. The article number is assigned once by the store
/// and never changes; all other fields are editable. The total price is a
/// derived value and intentionally not a field, see [`Asset::total_price`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub article_number: ArticleNumber,
    pub article_name: String,
    pub model: String,
    pub quantity: u32,
    pub unit_price: f64,
    pub country: CountryCode,
}

impl Asset {
    pub fn new(
        article_number: ArticleNumber,
        article_name: &str,
        model: &str,
        quantity: u32,
        unit_price: f64,
        country: CountryCode,
    ) -> Result<Asset, DataError> {
        check_non_empty("articleName", article_name)?;
        check_non_empty("model", model)?;
        check_non_negative_price(unit_price)?;
        Ok(Asset {
            article_number,
            article_name: article_name.trim().to_string(),
            model: model.trim().to_string(),
            quantity,
            unit_price,
            country,
        })
    }

    /// Always recomputed from quantity and unit price; a `totalPrice`
    /// found in a stored file is never trusted.
    pub fn total_price(&self) -> f64 {
        self.quantity as f64 * self.unit_price
    }

    /// Replace all editable fields in place, keeping the article number.
    pub fn update(
        &mut self,
        article_name: &str,
        model: &str,
        quantity: u32,
        unit_price: f64,
        country: CountryCode,
    ) -> Result<(), DataError> {
        check_non_empty("articleName", article_name)?;
        check_non_empty("model", model)?;
        check_non_negative_price(unit_price)?;
        self.article_name = article_name.trim().to_string();
        self.model = model.trim().to_string();
        self.quantity = quantity;
        self.unit_price = unit_price;
        self.country = country;
        Ok(())
    }
}

fn check_non_empty(field: &str, value: &str) -> Result<(), DataError> {
    if value.trim().is_empty() {
        Err(DataError::InvalidAsset(format!(
            "{} must not be empty",
            field
        )))
    } else {
        Ok(())
    }
}

fn check_non_negative_price(unit_price: f64) -> Result<(), DataError> {
    if !unit_price.is_finite() || unit_price < 0.0 {
        Err(DataError::InvalidAsset(
            "unitPrice must be a non-negative amount".to_string(),
        ))
    } else {
        Ok(())
    }
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} | {} | {} | {} | ${:.2} | ${:.2} | {}",
            self.article_number,
            self.article_name,
            self.model,
            self.quantity,
            self.unit_price,
            self.total_price(),
            self.country,
        )
    }
}

/// Hand-written so the derived `totalPrice` shows up in stored files for
/// readability, in a stable field order. Deserialization ignores it.
impl Serialize for Asset {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Asset", 7)?;
        state.serialize_field("articleNumber", &self.article_number)?;
        state.serialize_field("articleName", &self.article_name)?;
        state.serialize_field("model", &self.model)?;
        state.serialize_field("quantity", &self.quantity)?;
        state.serialize_field("unitPrice", &self.unit_price)?;
        state.serialize_field("totalPrice", &self.total_price())?;
        state.serialize_field("country", &self.country)?;
        state.end()
    }
}
