//! Embedded catalog assets
//!
//! Catalog definitions are compiled into the binary from `catalogs/*.yaml`.
//! Nothing is read from the filesystem at runtime.

use rust_embed::RustEmbed;
use std::borrow::Cow;
use std::path::Path;

use crate::error::CatalogError;

const CATALOG_EXTENSION: &str = "yaml";

/// Embedded catalog definitions
#[derive(RustEmbed)]
#[folder = "catalogs/"]
#[include = "*.yaml"]
struct EmbeddedCatalogs;

/// Catalog loader over the embedded assets
#[derive(Debug, Default, Clone, Copy)]
pub struct AssetLoader;

impl AssetLoader {
    pub fn new() -> Self {
        Self
    }

    /// Read a catalog definition by name (without extension)
    pub fn read_catalog(&self, name: &str) -> Option<Cow<'static, [u8]>> {
        EmbeddedCatalogs::get(&format!("{name}.{CATALOG_EXTENSION}")).map(|f| {
            tracing::trace!(catalog = %name, "Loading catalog from embedded assets");
            f.data
        })
    }

    /// Read a catalog definition as a UTF-8 string
    pub fn read_catalog_string(&self, name: &str) -> Result<String, CatalogError> {
        let bytes = self
            .read_catalog(name)
            .ok_or_else(|| CatalogError::UnknownCatalog(name.to_string()))?;
        String::from_utf8(bytes.into_owned()).map_err(|source| CatalogError::Encoding {
            catalog: name.to_string(),
            source,
        })
    }

    /// Names of the catalogs compiled into the binary, sorted
    pub fn list_catalogs(&self) -> Vec<String> {
        let mut names: Vec<String> = EmbeddedCatalogs::iter()
            .filter_map(|f| catalog_name(Path::new(f.as_ref())))
            .collect();
        names.sort();
        names
    }
}

fn catalog_name(path: &Path) -> Option<String> {
    if path.extension()?.to_str()? != CATALOG_EXTENSION {
        return None;
    }
    path.file_stem()?.to_str().map(str::to_string)
}
