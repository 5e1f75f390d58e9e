use std::path::Path;

#[test]
fn demos_load_and_run() {
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../demos");
    let demos = [
        "loop_filling_hydrogenation.yaml",
        "continuous_flow_reference.yaml",
        "continuous_flow_large_reactor.json",
    ];

    for name in demos {
        let path = root.join(name);
        let report = gf_app::scenario_service::run_file(&path)
            .unwrap_or_else(|e| panic!("Failed to run {}: {}", name, e));
        assert!(report.outcome.flows.gas_flow_rate > 0.0, "{}", name);
        assert!(report.warnings.is_empty(), "{}", name);
    }
}

#[test]
fn reference_demo_matches_hand_solution() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../demos/continuous_flow_reference.yaml");
    let report = gf_app::scenario_service::run_file(&path).unwrap();
    let flows = report.outcome.flows;
    assert!((flows.gas_flow_rate - 360.0 / 89.0).abs() < 1e-12);
    assert!((flows.liquid_flow_rate.unwrap() - 4.5 / 89.0).abs() < 1e-12);
}
