use thiserror::Error;
use tonal_color::ParseError;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Unknown catalog: {0}")]
    UnknownCatalog(String),

    #[error("Unknown variant '{variant}' in catalog '{catalog}'")]
    UnknownVariant { catalog: String, variant: String },

    #[error("Catalog '{catalog}' has no seed named '{seed}'")]
    UnknownSeed { catalog: String, seed: String },

    #[error("Failed to parse catalog '{catalog}': {source}")]
    Yaml {
        catalog: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Invalid seed '{name}' in catalog '{catalog}': {source}")]
    InvalidSeed {
        catalog: String,
        name: String,
        #[source]
        source: ParseError,
    },

    #[error("Catalog '{catalog}' is not valid UTF-8: {source}")]
    Encoding {
        catalog: String,
        #[source]
        source: std::string::FromUtf8Error,
    },
}
