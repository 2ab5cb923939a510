//! Domain-critical regression tests for tonal-color.
//!
//! These tests pin behavior that downstream palettes depend on. Each test
//! documents the regression it guards against.

#[cfg(test)]
mod domain_tests {
    use crate::color::{parse_color, Color};
    use crate::palette::{
        generate, generate_hsv_ladder, generate_oklch_gradient, generate_oklch_ladder, Algorithm,
        GenerateOptions, GradientOptions, HsvLadderOptions, Theme, HSV_LADDER_SEED_INDEX,
    };
    use crate::space::{hsl_to_rgb, rgb_to_hsl, Rgb};
    use pretty_assertions::assert_eq;

    fn hex(s: &str) -> Color {
        s.parse().unwrap()
    }

    /// ant-design seeds and their published ten-step palettes.
    const ANT_DESIGN: [(&str, &str, [&str; 10]); 13] = [
        ("red", "#F5222D", ["#fff1f0", "#ffccc7", "#ffa39e", "#ff7875", "#ff4d4f", "#f5222d", "#cf1322", "#a8071a", "#820014", "#5c0011"]),
        ("volcano", "#FA541C", ["#fff2e8", "#ffd8bf", "#ffbb96", "#ff9c6e", "#ff7a45", "#fa541c", "#d4380d", "#ad2102", "#871400", "#610b00"]),
        ("orange", "#FA8C16", ["#fff7e6", "#ffe7ba", "#ffd591", "#ffc069", "#ffa940", "#fa8c16", "#d46b08", "#ad4e00", "#873800", "#612500"]),
        ("gold", "#FAAD14", ["#fffbe6", "#fff1b8", "#ffe58f", "#ffd666", "#ffc53d", "#faad14", "#d48806", "#ad6800", "#874d00", "#613400"]),
        ("yellow", "#FADB14", ["#feffe6", "#ffffb8", "#fffb8f", "#fff566", "#ffec3d", "#fadb14", "#d4b106", "#ad8b00", "#876800", "#614700"]),
        ("lime", "#A0D911", ["#fcffe6", "#f4ffb8", "#eaff8f", "#d3f261", "#bae637", "#a0d911", "#7cb305", "#5b8c00", "#3f6600", "#254000"]),
        ("green", "#52C41A", ["#f6ffed", "#d9f7be", "#b7eb8f", "#95de64", "#73d13d", "#52c41a", "#389e0d", "#237804", "#135200", "#092b00"]),
        ("cyan", "#13C2C2", ["#e6fffb", "#b5f5ec", "#87e8de", "#5cdbd3", "#36cfc9", "#13c2c2", "#08979c", "#006d75", "#00474f", "#002329"]),
        ("blue", "#1677FF", ["#e6f4ff", "#bae0ff", "#91caff", "#69b1ff", "#4096ff", "#1677ff", "#0958d9", "#003eb3", "#002c8c", "#001d66"]),
        ("geekblue", "#2F54EB", ["#f0f5ff", "#d6e4ff", "#adc6ff", "#85a5ff", "#597ef7", "#2f54eb", "#1d39c4", "#10239e", "#061178", "#030852"]),
        ("purple", "#722ED1", ["#f9f0ff", "#efdbff", "#d3adf7", "#b37feb", "#9254de", "#722ed1", "#531dab", "#391085", "#22075e", "#120338"]),
        ("magenta", "#EB2F96", ["#fff0f6", "#ffd6e7", "#ffadd2", "#ff85c0", "#f759ab", "#eb2f96", "#c41d7f", "#9e1068", "#780650", "#520339"]),
        ("grey", "#666666", ["#a6a6a6", "#999999", "#8c8c8c", "#808080", "#737373", "#666666", "#404040", "#1a1a1a", "#000000", "#000000"]),
    ];

    // ========================================================================
    // GAP 1: HSV ladder must reproduce the ant-design palettes exactly
    // ========================================================================

    /// If this breaks, it means: one of the HSV ladder roundings (hue to an
    /// integer, saturation and value to two decimals) or a step constant has
    /// drifted. Any such change shifts at least one of these 130 entries by
    /// one channel step.
    #[test]
    fn test_hsv_ladder_matches_ant_design() {
        for (name, seed, expected) in ANT_DESIGN {
            let colors = generate_hsv_ladder(&hex(seed), &HsvLadderOptions::default());
            assert_eq!(colors, expected, "REGRESSION: ant-design {name} palette");
        }
    }

    /// If this breaks, it means: the dark theme blend table or `mix` rounding
    /// changed. Reference values are the published ant-design dark palettes.
    #[test]
    fn test_hsv_ladder_dark_matches_ant_design() {
        let dark = HsvLadderOptions::new().theme(Theme::Dark);
        assert_eq!(
            generate_hsv_ladder(&hex("#F5222D"), &dark),
            [
                "#2a1215", "#431418", "#58181c", "#791a1f", "#a61d24", "#d32029", "#e84749",
                "#f37370", "#f89f9a", "#fac8c3"
            ]
        );
        assert_eq!(
            generate_hsv_ladder(&hex("#1677FF"), &dark),
            [
                "#111a2c", "#112545", "#15325b", "#15417e", "#1554ad", "#1668dc", "#3c89e8",
                "#65a9f3", "#8dc5f8", "#b7dcfa"
            ]
        );
    }

    /// If this breaks, it means: the seed is no longer passed through
    /// untouched at index 5, so primary buttons would stop matching the brand
    /// color they were configured with.
    #[test]
    fn test_hsv_ladder_keeps_seed_at_index_5() {
        for seed in ["#123456", "#abcdef", "#ff0000", "#00ff00", "#0000ff", "#7f7f7f", "#010203"] {
            let colors = generate_hsv_ladder(&hex(seed), &HsvLadderOptions::default());
            assert_eq!(colors.len(), 10);
            assert_eq!(colors[HSV_LADDER_SEED_INDEX], hex(seed).to_hex_string());
        }
    }

    // ========================================================================
    // GAP 2: Algorithms are told apart by output size
    // ========================================================================

    /// If this breaks, it means: an algorithm is producing the wrong number of
    /// entries, or the dispatcher routes a tag to the wrong algorithm.
    #[test]
    fn test_output_cardinality() {
        let seed = hex("#722ed1");
        assert_eq!(generate_oklch_ladder(&seed).len(), 11);
        for steps in 2..=16 {
            let options = GradientOptions::new().steps(steps);
            assert_eq!(generate_oklch_gradient(&seed, &options).len(), steps);
        }

        assert_eq!(generate(&seed, &GenerateOptions::from(Algorithm::HsvLadder)).len(), 10);
        assert_eq!(generate(&seed, &GenerateOptions::from(Algorithm::OklchLadder)).len(), 11);
        assert_eq!(generate(&seed, &GenerateOptions::from(Algorithm::OklchGradient)).len(), 10);
    }

    /// If this breaks, it means: a generator emits alpha or uppercase hex,
    /// which breaks consumers that compare palette entries as strings.
    #[test]
    fn test_outputs_are_lowercase_six_digit_hex() {
        let seed = hex("#FA8C1680");
        for algorithm in Algorithm::ALL {
            for c in generate(&seed, &GenerateOptions::from(algorithm)) {
                assert_eq!(c.len(), 7, "{algorithm}: {c}");
                assert!(c.starts_with('#'));
                assert_eq!(c, c.to_lowercase(), "{algorithm}: {c}");
            }
        }
    }

    /// If this breaks, it means: some generator depends on state outside its
    /// inputs.
    #[test]
    fn test_determinism() {
        let options = [
            GenerateOptions::default(),
            GenerateOptions::from(HsvLadderOptions::new().theme(Theme::Dark)),
            GenerateOptions::OklchLadder,
            GenerateOptions::from(GradientOptions::new().steps(7)),
        ];
        for seed in ["#13c2c2", "#000000", "#ffffff"] {
            for o in &options {
                assert_eq!(generate(&hex(seed), o), generate(&hex(seed), o));
            }
        }
    }

    // ========================================================================
    // GAP 3: Round trips and clamping
    // ========================================================================

    /// If this breaks, it means: hex parsing or formatting lost a channel,
    /// swapped byte order or changed case.
    #[test]
    fn test_hex_round_trip() {
        for v in (0u32..=0xffffff).step_by(0x010307) {
            let s = format!("#{v:06x}");
            assert_eq!(hex(&s).to_hex_string(), s);
        }
    }

    /// If this breaks, it means: HSL conversion lost precision beyond one
    /// channel step for ordinary colors.
    #[test]
    fn test_hsl_round_trip_within_one() {
        for (r, g, b) in [(200, 30, 60), (12, 180, 90), (90, 90, 200), (240, 200, 10), (33, 66, 99)] {
            let hsl = rgb_to_hsl(r as f64, g as f64, b as f64);
            let back = hsl_to_rgb(hsl.h, hsl.s, hsl.l);
            for (x, y) in [(back.r, r), (back.g, g), (back.b, b)] {
                assert!((x - y as f64).abs() <= 1.0, "({r}, {g}, {b}) -> {back:?}");
            }
        }
    }

    /// If this breaks, it means: out-of-range input started being rejected
    /// instead of clamped.
    #[test]
    fn test_out_of_range_is_clamped_not_rejected() {
        let c = parse_color(Rgb::new(999.0, -5.0, 128.0)).unwrap();
        assert_eq!((c.r(), c.g(), c.b(), c.alpha()), (255, 0, 128, 1.0));

        let c: Color = serde_json::from_str(r#"{"r": 300, "g": 0, "b": 0, "a": 7}"#).unwrap();
        assert_eq!(c.to_hex_string(), "#ff0000");

        let c = parse_color("hsl(400, 150%, -20%)").unwrap();
        assert_eq!(c.to_hex_string(), "#000000");
    }

    // ========================================================================
    // GAP 4: Metrics and transformations
    // ========================================================================

    /// If this breaks, it means: the WCAG luminance or contrast formula
    /// changed, which would mislabel accessible color pairs.
    #[test]
    fn test_contrast_bounds() {
        let white = hex("#ffffff");
        let black = hex("#000000");
        assert!((white.contrast(&black) - 21.0).abs() < 1e-9);
        for c in ["#1677ff", "#808080", "#fadb14"] {
            let c = hex(c);
            assert_eq!(c.contrast(&c), 1.0);
            let ratio = c.contrast(&white);
            assert!((1.0..=21.0).contains(&ratio));
        }
    }

    /// If this breaks, it means: `mix` or `grayscale` rounding changed.
    #[test]
    fn test_mix_and_grayscale_values() {
        let mixed = hex("#ff0000").mix(&hex("#0000ff"), 50.0);
        assert_eq!(mixed.to_hex_string(), "#800080");

        for (input, luma) in [
            ("#ff0000", 76),
            ("#00ff00", 150),
            ("#0000ff", 29),
            ("#ffffff", 255),
            ("#000000", 0),
        ] {
            let gray = hex(input).grayscale();
            assert_eq!((gray.r(), gray.g(), gray.b()), (luma, luma, luma), "{input}");
        }
    }

    /// If this breaks, it means: a transformation mutated its receiver. The
    /// palette generators rely on the seed staying put.
    #[test]
    fn test_transformations_do_not_mutate() {
        let seed = hex("#52c41a");
        let before = seed.to_hsl();
        let _ = seed.lighten(30.0).darken(10.0).saturate(5.0).desaturate(5.0);
        let _ = seed.tint(20.0).shade(20.0).grayscale();
        assert_eq!(seed.to_hex_string(), "#52c41a");
        assert_eq!(seed.to_hsl(), before);
    }

    /// If this breaks, it means: the memoized derived forms are no longer
    /// safe to read from several threads at once.
    #[test]
    fn test_shared_color_across_threads() {
        let seed = std::sync::Arc::new(hex("#2f54eb"));
        let expected = generate_oklch_ladder(&seed);

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let seed = std::sync::Arc::clone(&seed);
                std::thread::spawn(move || generate_oklch_ladder(&seed))
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    }
}
