use facade_config::design::{from_json, load_design, save_design, to_json};
use facade_config::{
    Axis, DesignFileV1, ElementKind, FacadeConfig, Offset, Overhang, RoofStyle, Seed, SurfaceRole,
    WindowPattern,
};

fn edited_config() -> FacadeConfig {
    FacadeConfig::default()
        .apply_style_preset("biophilic")
        .unwrap()
        .set_element_count(ElementKind::Windows, 10)
        .set_element_position(ElementKind::Windows, 7, Offset::new(-0.4, 1.25))
        .unwrap()
        .set_element_count(ElementKind::Doors, 2)
        .set_dimension(Axis::Height, 13.5)
        .unwrap()
        .set_material(SurfaceRole::Trim, "stone")
        .unwrap()
        .set_window_pattern(WindowPattern::Scattered)
        .set_roof_style(RoofStyle::Curved)
        .set_overhang(Overhang::Dramatic)
        .toggle_balcony(false)
}

#[test]
fn design_roundtrip() {
    let mut design = DesignFileV1::new("courtyard studio", edited_config());
    design.seed = Some(Seed(99));
    design.notes = Some("client prefers the curved roof".into());

    let path = std::path::Path::new("target/test_design.facade.json");
    save_design(path, &design).unwrap();
    let loaded = load_design(path).unwrap();

    assert_eq!(design.design_id, loaded.design_id);
    assert_eq!(design, loaded);
}

#[test]
fn json_roundtrip_for_presets_and_random_designs() {
    let base = FacadeConfig::default();
    let mut configs = vec![base.clone(), edited_config()];
    configs.extend(base.variations(Seed(2024), 16));

    for config in configs {
        let json = to_json(&config).unwrap();
        assert_eq!(from_json(&json).unwrap(), config);
    }
}

#[test]
fn load_rejects_inconsistent_config() {
    let mut design = DesignFileV1::new("broken", FacadeConfig::default());
    design.config.elements.windows.count = 4;

    let path = std::path::Path::new("target/test_design_broken.facade.json");
    save_design(path, &design).unwrap();
    assert!(load_design(path).is_err());
}

#[test]
fn hand_written_json_loads() {
    let json = r##"{
        "style": "modern",
        "materials": { "primary": "brick", "secondary": "glass", "accent": "wood", "trim": "metal" },
        "colorScheme": { "primary": "#b5651d", "secondary": "#adf", "accent": "#654321", "trim": "#333333" },
        "dimensions": { "width": 14.0, "height": 9.0, "depth": 10.0 },
        "elements": {
            "windows": { "style": "arched", "pattern": "asymmetric", "frames": "bold", "count": 2,
                         "positions": [ { "x": 0.0, "y": 0.0 }, { "x": 0.5, "y": 0.0 } ] },
            "doors": { "style": "double", "material": "wood", "count": 1, "positions": [ { "x": 0.0, "y": 0.0 } ] },
            "balcony": { "enabled": false, "style": "corner", "railing": "cable" },
            "roof": { "style": "pitched", "material": "terracotta", "overhang": "medium" },
            "lighting": { "style": "dramatic", "intensity": 0.8 },
            "landscaping": { "style": "formal", "elements": ["trees", "lawn"] }
        }
    }"##;

    let config = from_json(json).unwrap();
    assert!(config.validate().is_ok());
    assert_eq!(config.elements.roof.overhang, Overhang::Standard);
    assert_eq!(config.elements.balcony.position, None);
    assert_eq!(config.color_scheme.secondary.to_string(), "#aaddff");
}
