use crate::assets::AssetLoader;
use crate::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tonal_color::{Color, GenerateOptions};

/// Name of the variant used when a catalog defines none.
pub const DEFAULT_VARIANT: &str = "default";

/// Catalog definition loaded from `catalogs/<name>.yaml`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Catalog name
    pub name: String,

    /// Human readable summary
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Seed name to seed color (any notation `parse_color` accepts)
    #[serde(default)]
    pub seeds: BTreeMap<String, String>,

    /// Variant name to generator options
    #[serde(default = "default_variants")]
    pub variants: BTreeMap<String, GenerateOptions>,
}

fn default_variants() -> BTreeMap<String, GenerateOptions> {
    BTreeMap::from([(DEFAULT_VARIANT.to_string(), GenerateOptions::default())])
}

impl CatalogConfig {
    /// Parse a catalog definition
    ///
    /// `catalog` is only used to label errors.
    pub fn from_yaml(catalog: &str, content: &str) -> Result<Self, CatalogError> {
        serde_yaml::from_str(content).map_err(|source| CatalogError::Yaml {
            catalog: catalog.to_string(),
            source,
        })
    }

    /// Load an embedded catalog definition
    pub fn load_from_assets(loader: &AssetLoader, name: &str) -> Result<Self, CatalogError> {
        let content = loader.read_catalog_string(name)?;

        let config = Self::from_yaml(name, &content)?;
        tracing::info!(
            catalog = %config.name,
            seeds = config.seeds.len(),
            variants = config.variants.len(),
            "Loaded catalog"
        );
        Ok(config)
    }

    /// Generator options for a variant
    pub fn variant(&self, variant: &str) -> Result<&GenerateOptions, CatalogError> {
        self.variants
            .get(variant)
            .ok_or_else(|| CatalogError::UnknownVariant {
                catalog: self.name.clone(),
                variant: variant.to_string(),
            })
    }

    /// Parsed seed color by name
    pub fn seed(&self, name: &str) -> Result<Color, CatalogError> {
        let value = self.seeds.get(name).ok_or_else(|| CatalogError::UnknownSeed {
            catalog: self.name.clone(),
            seed: name.to_string(),
        })?;
        self.parse_seed(name, value)
    }

    /// All seeds, parsed, in name order
    pub fn parsed_seeds(&self) -> Result<Vec<(&str, Color)>, CatalogError> {
        self.seeds
            .iter()
            .map(|(name, value)| Ok((name.as_str(), self.parse_seed(name, value)?)))
            .collect()
    }

    fn parse_seed(&self, name: &str, value: &str) -> Result<Color, CatalogError> {
        value
            .parse()
            .map_err(|source| CatalogError::InvalidSeed {
                catalog: self.name.clone(),
                name: name.to_string(),
                source,
            })
    }
}
