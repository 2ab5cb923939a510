//! Integration tests for catalog loading and building.

mod common;

use common::fixtures::{self, ant_design};
use pretty_assertions::assert_eq;
use tonal::assets::AssetLoader;
use tonal::catalog::Catalog;
use tonal::error::CatalogError;
use tonal::models::CatalogConfig;
use tonal_color::palette::OKLCH_LADDER_SEED_INDEX;
use tonal_color::{generate_oklch_ladder, Color};

fn embedded(name: &str) -> Catalog {
    Catalog::load(&AssetLoader::new(), name).unwrap()
}

#[test]
fn test_ant_design_light_variant() {
    let catalog = embedded("ant-design");
    let light = catalog.variant("light").unwrap();

    assert_eq!(light.len(), 13);
    for seed in ant_design::SEEDS {
        let palette = &light[seed];
        assert_eq!(palette.len(), 10, "{seed}");
        assert_eq!(palette.primary.as_ref(), Some(&palette.colors[5]), "{seed}");
        common::assert_hex_entries(palette);
        common::assert_light_to_dark(palette);
    }

    common::assert_colors(&light["blue"], &ant_design::BLUE);
    common::assert_colors(&light["green"], &ant_design::GREEN);
}

#[test]
fn test_ant_design_dark_variant() {
    let catalog = embedded("ant-design");

    let blue = catalog.palette("dark", "blue").unwrap();
    common::assert_colors(blue, &ant_design::BLUE_DARK);
    assert_eq!(blue.primary.as_deref(), Some("#1677ff"));

    let red = catalog.palette("dark", "red").unwrap();
    common::assert_colors(red, &ant_design::RED_DARK);
    assert_eq!(red.primary.as_deref(), Some("#f5222d"));
}

#[test]
fn test_tailwind_catalog() {
    let catalog = embedded("tailwind");
    let palettes = catalog.variant("default").unwrap();

    assert_eq!(palettes.len(), 22);
    for (seed, palette) in palettes {
        assert_eq!(palette.len(), 11, "{seed}");
        assert_eq!(
            palette.primary.as_ref(),
            palette.colors.get(OKLCH_LADDER_SEED_INDEX),
            "{seed}"
        );
        common::assert_hex_entries(palette);
        common::assert_light_to_dark(palette);
    }

    common::assert_colors(&palettes["blue"], &fixtures::TAILWIND_BLUE);
}

#[test]
fn test_catalog_matches_direct_generation() {
    let config = CatalogConfig::load_from_assets(&AssetLoader::new(), "tailwind").unwrap();
    let catalog = Catalog::build(&config).unwrap();

    for (name, seed) in &config.seeds {
        let seed: Color = seed.parse().unwrap();
        assert_eq!(
            catalog.palette("default", name).unwrap().colors,
            generate_oklch_ladder(&seed),
            "{name}"
        );
    }
}

#[test]
fn test_unknown_catalog_and_variant() {
    let loader = AssetLoader::new();
    assert!(matches!(
        Catalog::load(&loader, "material"),
        Err(CatalogError::UnknownCatalog(_))
    ));

    let catalog = embedded("tailwind");
    let err = catalog.variant("dark").unwrap_err();
    assert_eq!(err.to_string(), "Unknown variant 'dark' in catalog 'tailwind'");
}

#[test]
fn test_custom_catalog_definition() {
    let config = CatalogConfig::from_yaml("brand", fixtures::BRAND_CATALOG).unwrap();
    let catalog = Catalog::build(&config).unwrap();

    assert_eq!(catalog.description.as_deref(), Some("Brand palettes"));
    assert_eq!(
        catalog.variant_names().collect::<Vec<_>>(),
        ["dark", "light", "ramp"]
    );

    common::assert_colors(catalog.palette("light", "primary").unwrap(), &ant_design::BLUE);
    common::assert_colors(
        catalog.palette("dark", "primary").unwrap(),
        &ant_design::BLUE_DARK,
    );

    let ramp = catalog.palette("ramp", "danger").unwrap();
    assert_eq!(ramp.len(), 6);
    assert_eq!(ramp.primary, None);
    common::assert_light_to_dark(ramp);
}

#[test]
fn test_camel_case_option_names() {
    let config = CatalogConfig::from_yaml(
        "camel",
        "name: camel\nseeds:\n  blue: \"#1677ff\"\nvariants:\n  dark:\n    algorithm: hsv-ladder\n    theme: dark\n    backgroundColor: \"#141414\"\n  ramp:\n    algorithm: oklch-gradient\n    steps: 3\n    startL: 0.9\n    endL: 0.2\n",
    )
    .unwrap();
    let catalog = Catalog::build(&config).unwrap();

    common::assert_colors(catalog.palette("dark", "blue").unwrap(), &ant_design::BLUE_DARK);
    assert_eq!(catalog.palette("ramp", "blue").unwrap().len(), 3);
}

#[test]
fn test_broken_catalog_definitions() {
    assert!(matches!(
        CatalogConfig::from_yaml("syntax", "name: [oops"),
        Err(CatalogError::Yaml { .. })
    ));

    // A misspelled option key is an error, not a silent default
    let err = CatalogConfig::from_yaml(
        "typo",
        "name: typo\nvariants:\n  ramp:\n    algorithm: oklch-gradient\n    start_lightness: 0.5\n",
    )
    .unwrap_err();
    assert!(matches!(err, CatalogError::Yaml { .. }));

    let config =
        CatalogConfig::from_yaml("badseed", "name: badseed\nseeds:\n  x: \"rgb(1)\"\n").unwrap();
    let err = Catalog::build(&config).unwrap_err();
    assert!(matches!(err, CatalogError::InvalidSeed { .. }));
    assert!(err.to_string().starts_with("Invalid seed 'x' in catalog 'badseed'"));
}

#[test]
fn test_only_embedded_catalogs_are_listed() {
    assert_eq!(AssetLoader::new().list_catalogs(), ["ant-design", "tailwind"]);
}

#[test]
fn test_catalog_json_round_trip_shape() {
    let catalog = embedded("ant-design");
    let json = serde_json::to_value(&catalog).unwrap();

    assert_eq!(json["name"], "ant-design");
    assert_eq!(json["palettes"]["light"]["blue"]["primary"], "#1677ff");
    assert_eq!(
        json["palettes"]["dark"]["red"]["colors"][0],
        ant_design::RED_DARK[0]
    );
}
