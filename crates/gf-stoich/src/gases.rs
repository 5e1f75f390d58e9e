//! Reference data for common reaction gases.
//!
//! Molar masses in kg/mol and densities in kg/m³ at 0 °C and 1 atm.

use crate::inputs::GasProperties;
use gf_core::units::{Density, MolarMass};
use uom::si::mass_density::kilogram_per_cubic_meter;
use uom::si::molar_mass::kilogram_per_mole;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GasCatalogEntry {
    pub formula: &'static str,
    pub display_name: &'static str,
    pub aliases: &'static [&'static str],
    pub molar_mass_kg_per_mol: f64,
    pub stp_density_kg_per_m3: f64,
}

impl GasCatalogEntry {
    pub fn molar_mass(&self) -> MolarMass {
        MolarMass::new::<kilogram_per_mole>(self.molar_mass_kg_per_mol)
    }

    pub fn stp_density(&self) -> Density {
        Density::new::<kilogram_per_cubic_meter>(self.stp_density_kg_per_m3)
    }

    /// Properties in bench units, ready for the calculators.
    pub fn properties(&self) -> GasProperties {
        GasProperties::from_quantities(self.molar_mass(), self.stp_density())
    }

    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim();
        self.formula.eq_ignore_ascii_case(query)
            || self.display_name.eq_ignore_ascii_case(query)
            || self
                .aliases
                .iter()
                .any(|alias| alias.eq_ignore_ascii_case(query))
    }
}

const GAS_CATALOG: [GasCatalogEntry; 14] = [
    GasCatalogEntry {
        formula: "H2",
        display_name: "Hydrogen",
        aliases: &[],
        molar_mass_kg_per_mol: 2.016e-3,
        stp_density_kg_per_m3: 0.0899,
    },
    GasCatalogEntry {
        formula: "He",
        display_name: "Helium",
        aliases: &[],
        molar_mass_kg_per_mol: 4.003e-3,
        stp_density_kg_per_m3: 0.1786,
    },
    GasCatalogEntry {
        formula: "CH4",
        display_name: "Methane",
        aliases: &[],
        molar_mass_kg_per_mol: 16.043e-3,
        stp_density_kg_per_m3: 0.717,
    },
    GasCatalogEntry {
        formula: "NH3",
        display_name: "Ammonia",
        aliases: &[],
        molar_mass_kg_per_mol: 17.031e-3,
        stp_density_kg_per_m3: 0.769,
    },
    GasCatalogEntry {
        formula: "N2",
        display_name: "Nitrogen",
        aliases: &[],
        molar_mass_kg_per_mol: 28.014e-3,
        stp_density_kg_per_m3: 1.2506,
    },
    GasCatalogEntry {
        formula: "CO",
        display_name: "Carbon monoxide",
        aliases: &["carbonmonoxide"],
        molar_mass_kg_per_mol: 28.010e-3,
        stp_density_kg_per_m3: 1.250,
    },
    GasCatalogEntry {
        formula: "C2H4",
        display_name: "Ethylene",
        aliases: &["ethene"],
        molar_mass_kg_per_mol: 28.054e-3,
        stp_density_kg_per_m3: 1.260,
    },
    GasCatalogEntry {
        formula: "Air",
        display_name: "Air",
        aliases: &["synthetic air"],
        molar_mass_kg_per_mol: 28.965e-3,
        stp_density_kg_per_m3: 1.293,
    },
    GasCatalogEntry {
        formula: "C2H6",
        display_name: "Ethane",
        aliases: &[],
        molar_mass_kg_per_mol: 30.070e-3,
        stp_density_kg_per_m3: 1.356,
    },
    GasCatalogEntry {
        formula: "O2",
        display_name: "Oxygen",
        aliases: &[],
        molar_mass_kg_per_mol: 31.998e-3,
        stp_density_kg_per_m3: 1.429,
    },
    GasCatalogEntry {
        formula: "Ar",
        display_name: "Argon",
        aliases: &[],
        molar_mass_kg_per_mol: 39.948e-3,
        stp_density_kg_per_m3: 1.784,
    },
    GasCatalogEntry {
        formula: "CO2",
        display_name: "Carbon dioxide",
        aliases: &["carbondioxide"],
        molar_mass_kg_per_mol: 44.009e-3,
        stp_density_kg_per_m3: 1.977,
    },
    GasCatalogEntry {
        formula: "SO2",
        display_name: "Sulfur dioxide",
        aliases: &["sulphur dioxide"],
        molar_mass_kg_per_mol: 64.066e-3,
        stp_density_kg_per_m3: 2.927,
    },
    GasCatalogEntry {
        formula: "Cl2",
        display_name: "Chlorine",
        aliases: &[],
        molar_mass_kg_per_mol: 70.906e-3,
        stp_density_kg_per_m3: 3.214,
    },
];

pub fn gas_catalog() -> &'static [GasCatalogEntry] {
    &GAS_CATALOG
}

/// Look a gas up by formula, name or alias (case-insensitive).
pub fn find_gas(query: &str) -> Option<&'static GasCatalogEntry> {
    GAS_CATALOG.iter().find(|entry| entry.matches(query))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_formula_and_name() {
        assert_eq!(find_gas("co").map(|g| g.formula), Some("CO"));
        assert_eq!(find_gas("  Carbon Monoxide ").map(|g| g.formula), Some("CO"));
        assert_eq!(find_gas("ethene").map(|g| g.formula), Some("C2H4"));
        assert!(find_gas("unobtainium").is_none());
    }

    #[test]
    fn catalog_properties_in_bench_units() {
        let o2 = find_gas("O2").unwrap().properties();
        assert!((o2.molecular_weight - 31.998).abs() < 1e-9);
        assert!((o2.mass_density - 1.429).abs() < 1e-12);
        o2.validate().unwrap();
    }

    #[test]
    fn molar_volumes_near_ideal_gas_value() {
        // 22.4 mL/mmol at STP; real gases deviate by a few percent at most
        for entry in gas_catalog() {
            let v = entry.properties().stp_molar_volume();
            assert!(
                (21.5..23.0).contains(&v),
                "{} molar volume {} mL/mmol",
                entry.formula,
                v
            );
        }
    }

    #[test]
    fn formulas_are_unique() {
        let mut formulas: Vec<_> = gas_catalog().iter().map(|g| g.formula).collect();
        formulas.sort_unstable();
        formulas.dedup();
        assert_eq!(formulas.len(), gas_catalog().len());
    }
}
