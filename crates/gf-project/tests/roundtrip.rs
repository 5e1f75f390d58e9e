use gf_project::{
    FieldBounds, FieldName, FormConfig, GasDef, LATEST_VERSION, ProjectError, ScenarioDef,
    ScenarioFile, load, load_json, load_yaml, save_json, save_yaml,
};
use gf_stoich::ScenarioKind;
use std::collections::BTreeMap;

fn continuous_file() -> ScenarioFile {
    ScenarioFile {
        version: LATEST_VERSION,
        name: "Carbonylation".to_string(),
        description: Some("CO at 9 bar".to_string()),
        bounds: BTreeMap::new(),
        scenario: ScenarioDef::ContinuousFlow {
            pressure: 9.0,
            gas_equivalents: 3.0,
            liquid_concentration: 0.2,
            gas: GasDef::Catalog {
                catalog: "CO".to_string(),
            },
            residence_time: 12.0,
            reactor_volume: 4.0,
        },
    }
}

#[test]
fn roundtrip_yaml_continuous_flow() {
    let file = continuous_file();
    let path = std::env::temp_dir().join("gf_project_roundtrip_continuous.yaml");

    save_yaml(&path, &file).unwrap();
    let loaded = load_yaml(&path).unwrap();

    assert_eq!(file, loaded);
}

#[test]
fn roundtrip_json_loop_filling_with_bounds() {
    let mut bounds = BTreeMap::new();
    bounds.insert(FieldName::LiquidFlowRate, FieldBounds::new(0.0, 10.0, 0.01));
    let file = ScenarioFile {
        version: LATEST_VERSION,
        name: "Big pump".to_string(),
        description: None,
        bounds,
        scenario: ScenarioDef::LoopFilling {
            liquid_flow_rate: 5.0,
            liquid_concentration: 0.5,
            gas_equivalents: 2.0,
            gas: GasDef::Properties {
                molecular_weight: 2.016,
                mass_density: 0.0899,
            },
        },
    };
    let path = std::env::temp_dir().join("gf_project_roundtrip_loop.json");

    save_json(&path, &file).unwrap();
    let loaded = load(&path).unwrap();

    assert_eq!(file, loaded);
}

#[test]
fn save_refuses_out_of_bounds_file() {
    let mut file = ScenarioFile {
        scenario: ScenarioDef::from_defaults(ScenarioKind::LoopFilling, &FormConfig::default()),
        ..continuous_file()
    };
    if let ScenarioDef::LoopFilling {
        liquid_flow_rate, ..
    } = &mut file.scenario
    {
        // the default bounds stop at 1.5 mL/min
        *liquid_flow_rate = 5.0;
    }
    let path = std::env::temp_dir().join("gf_project_out_of_bounds.yaml");

    let err = save_yaml(&path, &file).unwrap_err();
    assert!(matches!(err, ProjectError::Validation(_)));
}

#[test]
fn malformed_yaml_reports_parse_error() {
    let path = std::env::temp_dir().join("gf_project_malformed.yaml");
    std::fs::write(&path, "version: one\nname: [\n").unwrap();

    assert!(matches!(load_yaml(&path), Err(ProjectError::Yaml(_))));
}

#[test]
fn missing_file_reports_io_error() {
    let path = std::env::temp_dir().join("gf_project_does_not_exist.json");
    let _ = std::fs::remove_file(&path);

    assert!(matches!(load_json(&path), Err(ProjectError::Io(_))));
}
