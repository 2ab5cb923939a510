//! Preset palettes built from a catalog definition.
//!
//! A catalog is a set of named seeds crossed with a set of named variants.
//! Building it runs every seed through every variant's generator:
//!
//! ```text
//!  seeds × variants ──► palettes[variant][seed]
//! ```

use serde::Serialize;
use std::collections::BTreeMap;
use tonal_color::{Palette, PaletteGenerator};

use crate::assets::AssetLoader;
use crate::error::CatalogError;
use crate::models::CatalogConfig;

/// Palettes of one variant, keyed by seed name.
pub type VariantPalettes = BTreeMap<String, Palette>;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Catalog {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Variant name to its palettes
    pub palettes: BTreeMap<String, VariantPalettes>,
}

impl Catalog {
    /// Build every variant of a catalog definition.
    pub fn build(config: &CatalogConfig) -> Result<Self, CatalogError> {
        let seeds = config.parsed_seeds()?;

        let palettes = config
            .variants
            .iter()
            .map(|(variant, options)| {
                tracing::debug!(catalog = %config.name, %variant, "Building variant");
                let built = seeds
                    .iter()
                    .map(|(name, seed)| (name.to_string(), options.palette(seed)))
                    .collect();
                (variant.clone(), built)
            })
            .collect();

        Ok(Self {
            name: config.name.clone(),
            description: config.description.clone(),
            palettes,
        })
    }

    /// Build a single variant of a catalog definition.
    pub fn build_variant(
        config: &CatalogConfig,
        variant: &str,
    ) -> Result<VariantPalettes, CatalogError> {
        let options = config.variant(variant)?;
        Ok(config
            .parsed_seeds()?
            .into_iter()
            .map(|(name, seed)| (name.to_string(), options.palette(&seed)))
            .collect())
    }

    /// Load and build a catalog by name.
    pub fn load(loader: &AssetLoader, name: &str) -> Result<Self, CatalogError> {
        Self::build(&CatalogConfig::load_from_assets(loader, name)?)
    }

    pub fn variant(&self, variant: &str) -> Result<&VariantPalettes, CatalogError> {
        self.palettes
            .get(variant)
            .ok_or_else(|| CatalogError::UnknownVariant {
                catalog: self.name.clone(),
                variant: variant.to_string(),
            })
    }

    /// Look up one palette.
    pub fn palette(&self, variant: &str, seed: &str) -> Option<&Palette> {
        self.palettes.get(variant)?.get(seed)
    }

    pub fn variant_names(&self) -> impl Iterator<Item = &str> {
        self.palettes.keys().map(String::as_str)
    }
}
