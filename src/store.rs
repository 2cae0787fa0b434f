///! Implementation of the in-memory asset store
use crate::datatypes::{ArticleNumber, Asset, CountryCode, DataError};

/// Ordered collection of assets for one file's editing session, insertion
/// order is display order. The article number counter is derived from the
/// last loaded record and advances on every successful add.
#[derive(Debug)]
pub struct AssetStore {
    assets: Vec<Asset>,
    next_sequence: u32,
}

impl AssetStore {
    pub fn new() -> AssetStore {
        AssetStore {
            assets: Vec::new(),
            next_sequence: 1,
        }
    }

    /// Build a store from loaded records, resuming the counter after the
    /// last record's numeric suffix.
    pub fn from_assets(assets: Vec<Asset>) -> AssetStore {
        let next_sequence = match assets.last() {
            Some(asset) => asset.article_number.sequence() + 1,
            None => 1,
        };
        AssetStore {
            assets,
            next_sequence,
        }
    }

    /// Allocate the next article number and append a new asset. Only
    /// field validation can fail here; the counter never collides as long
    /// as articles are only ever added through this method.
    pub fn add(
        &mut self,
        article_name: &str,
        model: &str,
        quantity: u32,
        unit_price: f64,
        country: CountryCode,
    ) -> Result<Asset, DataError> {
        let number = ArticleNumber::new(self.next_sequence);
        let asset = Asset::new(number, article_name, model, quantity, unit_price, country)?;
        self.next_sequence += 1;
        self.assets.push(asset.clone());
        Ok(asset)
    }

    /// Case-insensitive exact match on the article number.
    pub fn find(&self, article_number: &str) -> Option<&Asset> {
        self.assets
            .iter()
            .find(|a| a.article_number.matches(article_number))
    }

    fn find_mut(&mut self, article_number: &str) -> Option<&mut Asset> {
        self.assets
            .iter_mut()
            .find(|a| a.article_number.matches(article_number))
    }

    /// Replace all editable fields of the matching asset in place.
    pub fn update(
        &mut self,
        article_number: &str,
        article_name: &str,
        model: &str,
        quantity: u32,
        unit_price: f64,
        country: CountryCode,
    ) -> Result<&Asset, DataError> {
        match self.find_mut(article_number) {
            Some(asset) => {
                asset.update(article_name, model, quantity, unit_price, country)?;
                Ok(asset)
            }
            None => Err(DataError::NotFound(format!(
                "no asset with article number {}",
                article_number.trim()
            ))),
        }
    }

    /// Remove the first structurally equal entry; a miss is a no-op.
    pub fn remove(&mut self, asset: &Asset) {
        if let Some(pos) = self.assets.iter().position(|a| a == asset) {
            self.assets.remove(pos);
        }
    }

    pub fn count(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    pub fn assets(&self) -> &[Asset] {
        &self.assets
    }

    pub fn next_sequence(&self) -> u32 {
        self.next_sequence
    }
}

impl Default for AssetStore {
    fn default() -> Self {
        Self::new()
    }
}
