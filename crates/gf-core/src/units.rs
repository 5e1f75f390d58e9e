// gf-core/src/units.rs
//
// The calculators work in bench units (mL, min, mg, mmol, bar). These
// helpers move values between those units and uom's SI quantities.

use uom::si::f64::{
    MassDensity as UomMassDensity, MolarConcentration as UomMolarConcentration,
    MolarMass as UomMolarMass, Pressure as UomPressure, Time as UomTime, Volume as UomVolume,
    VolumeRate as UomVolumeRate,
};
use uom::si::{
    mass_density::kilogram_per_cubic_meter, molar_concentration::mole_per_cubic_meter,
    molar_mass::kilogram_per_mole, pressure::bar as uom_bar, time::minute,
    volume::cubic_meter, volume_rate::cubic_meter_per_second,
};

// Public canonical unit types (SI, f64)
pub type Density = UomMassDensity;
pub type MolarConcentration = UomMolarConcentration;
pub type MolarMass = UomMolarMass;
pub type Pressure = UomPressure;
pub type Time = UomTime;
pub type Volume = UomVolume;
pub type VolumeRate = UomVolumeRate;

pub mod constants {
    /// 1 mL/min in m³/s.
    pub const M3PS_PER_ML_PER_MIN: f64 = 1.0e-6 / 60.0;
    /// 1 mL in m³.
    pub const M3_PER_ML: f64 = 1.0e-6;
    /// 1 mg/mmol in kg/mol.
    pub const KG_PER_MOL_PER_MG_PER_MMOL: f64 = 1.0e-3;
    /// 1 mmol/mL in mol/m³.
    pub const MOL_PER_M3_PER_MMOL_PER_ML: f64 = 1.0e3;
}

use constants::*;

#[inline]
pub fn ml_per_min(v: f64) -> VolumeRate {
    VolumeRate::new::<cubic_meter_per_second>(v * M3PS_PER_ML_PER_MIN)
}

#[inline]
pub fn to_ml_per_min(q: VolumeRate) -> f64 {
    q.get::<cubic_meter_per_second>() / M3PS_PER_ML_PER_MIN
}

#[inline]
pub fn bar(v: f64) -> Pressure {
    Pressure::new::<uom_bar>(v)
}

#[inline]
pub fn to_bar(q: Pressure) -> f64 {
    q.get::<uom_bar>()
}

#[inline]
pub fn minutes(v: f64) -> Time {
    Time::new::<minute>(v)
}

#[inline]
pub fn to_minutes(q: Time) -> f64 {
    q.get::<minute>()
}

#[inline]
pub fn ml(v: f64) -> Volume {
    Volume::new::<cubic_meter>(v * M3_PER_ML)
}

#[inline]
pub fn to_ml(q: Volume) -> f64 {
    q.get::<cubic_meter>() / M3_PER_ML
}

/// mg/mmol is numerically g/mol.
#[inline]
pub fn mg_per_mmol(v: f64) -> MolarMass {
    MolarMass::new::<kilogram_per_mole>(v * KG_PER_MOL_PER_MG_PER_MMOL)
}

#[inline]
pub fn to_mg_per_mmol(q: MolarMass) -> f64 {
    q.get::<kilogram_per_mole>() / KG_PER_MOL_PER_MG_PER_MMOL
}

/// mg/mL is numerically kg/m³.
#[inline]
pub fn mg_per_ml(v: f64) -> Density {
    Density::new::<kilogram_per_cubic_meter>(v)
}

#[inline]
pub fn to_mg_per_ml(q: Density) -> f64 {
    q.get::<kilogram_per_cubic_meter>()
}

#[inline]
pub fn mmol_per_ml(v: f64) -> MolarConcentration {
    MolarConcentration::new::<mole_per_cubic_meter>(v * MOL_PER_M3_PER_MMOL_PER_ML)
}

#[inline]
pub fn to_mmol_per_ml(q: MolarConcentration) -> f64 {
    q.get::<mole_per_cubic_meter>() / MOL_PER_M3_PER_MMOL_PER_ML
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Tolerances, nearly_equal};

    #[test]
    fn bench_units_round_trip() {
        let tol = Tolerances::default();
        assert!(nearly_equal(to_ml_per_min(ml_per_min(0.5)), 0.5, tol));
        assert!(nearly_equal(to_bar(bar(9.0)), 9.0, tol));
        assert!(nearly_equal(to_minutes(minutes(10.0)), 10.0, tol));
        assert!(nearly_equal(to_ml(ml(5.0)), 5.0, tol));
        assert!(nearly_equal(to_mg_per_mmol(mg_per_mmol(80.0)), 80.0, tol));
        assert!(nearly_equal(to_mg_per_ml(mg_per_ml(1.8)), 1.8, tol));
        assert!(nearly_equal(to_mmol_per_ml(mmol_per_ml(0.1)), 0.1, tol));
    }

    #[test]
    fn volume_over_time_is_a_flow() {
        // 5 mL over 10 min -> 0.5 mL/min
        let q: VolumeRate = ml(5.0) / minutes(10.0);
        assert!(nearly_equal(to_ml_per_min(q), 0.5, Tolerances::default()));
    }

    #[test]
    fn bar_in_pascal() {
        use uom::si::pressure::pascal;
        assert!(nearly_equal(
            bar(1.0).get::<pascal>(),
            100_000.0,
            Tolerances::default()
        ));
    }
}
