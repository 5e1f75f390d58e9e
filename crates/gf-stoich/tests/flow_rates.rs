//! End-to-end checks of the public calculator API.

use gf_stoich::{
    ContinuousFlowInputs, GasProperties, LoopFillingInputs, ScenarioInputs, StoichError,
    compute_continuous_flow, compute_loop_filling, find_gas,
};
use std::thread;

fn continuous_reference() -> ContinuousFlowInputs {
    ContinuousFlowInputs {
        pressure: 9.0,
        gas_equivalents: 10.0,
        liquid_concentration: 0.1,
        gas: GasProperties::new(80.0, 1.0),
        residence_time: 10.0,
        reactor_volume: 5.0,
    }
}

#[test]
fn loop_filling_reference_value() {
    let r = compute_loop_filling(LoopFillingInputs {
        liquid_flow_rate: 0.5,
        liquid_concentration: 0.5,
        gas_equivalents: 10.0,
        gas: GasProperties::new(80.0, 1.0),
    })
    .unwrap();
    assert!((r.gas_flow_rate - 200.0).abs() < 1e-12);
}

#[test]
fn continuous_flow_regression_oracle() {
    let r = compute_continuous_flow(continuous_reference()).unwrap();
    assert!((r.gas_flow_rate - 4.044_943_820_224_719).abs() < 1e-12);
    assert!((r.liquid_flow_rate.unwrap() - 0.050_561_797_752_808_99).abs() < 1e-14);
}

#[test]
fn continuous_flow_with_catalog_gas() {
    // Carbon monoxide carbonylation at 5 bar, 2 equivalents
    let co = find_gas("CO").unwrap().properties();
    let inputs = ContinuousFlowInputs {
        pressure: 5.0,
        gas_equivalents: 2.0,
        liquid_concentration: 0.2,
        gas: co,
        residence_time: 20.0,
        reactor_volume: 10.0,
    };
    let r = compute_continuous_flow(inputs).unwrap();
    let liquid = r.liquid_flow_rate.unwrap();
    let k = co.stp_molar_volume() * 2.0 * 0.2;
    assert!((r.gas_flow_rate / 5.0 + liquid - 0.5).abs() < 1e-9);
    assert!((r.gas_flow_rate - k * liquid).abs() < 1e-9);
}

#[test]
fn invalid_inputs_never_yield_non_finite_output() {
    let cases = [
        ContinuousFlowInputs {
            residence_time: 0.0,
            ..continuous_reference()
        },
        ContinuousFlowInputs {
            pressure: 0.0,
            ..continuous_reference()
        },
        ContinuousFlowInputs {
            pressure: f64::NAN,
            ..continuous_reference()
        },
        ContinuousFlowInputs {
            reactor_volume: -1.0,
            ..continuous_reference()
        },
    ];
    for inputs in cases {
        let err = compute_continuous_flow(inputs).unwrap_err();
        assert!(matches!(err, StoichError::Validation { .. }), "{err}");
    }
}

#[test]
fn calculators_can_run_concurrently() {
    let handles: Vec<_> = (1..=8)
        .map(|i| {
            thread::spawn(move || {
                let inputs: ScenarioInputs = ContinuousFlowInputs {
                    reactor_volume: i as f64,
                    ..continuous_reference()
                }
                .into();
                inputs.compute().unwrap()
            })
        })
        .collect();

    let base = compute_continuous_flow(continuous_reference()).unwrap();
    for (i, handle) in handles.into_iter().enumerate() {
        let r = handle.join().unwrap();
        // flows scale linearly with reactor volume (5 mL reference)
        let k = (i + 1) as f64 / 5.0;
        assert!((r.gas_flow_rate - k * base.gas_flow_rate).abs() < 1e-9);
    }
}
