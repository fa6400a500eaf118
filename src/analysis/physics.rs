///! Impact physics estimates
///!
///! Back-of-the-envelope formulas for the hypothetical impact section of
///! the assessment report. All of it is order-of-magnitude material for an
///! educational report, not a dynamics model.

use std::f64::consts::PI;

/// Assumed bulk density of a stony asteroid, kg/m³.
pub const ASTEROID_DENSITY_KG_M3: f64 = 3000.0;

/// Energy released per kilogram of TNT, joules.
pub const TNT_JOULES_PER_KG: f64 = 4.184e6;

/// Typical Earth-impact velocity, m/s.
pub const TYPICAL_IMPACT_VELOCITY_MS: f64 = 20_000.0;

/// Mean Earth-Moon distance, km.
pub const LUNAR_DISTANCE_KM: f64 = 384_400.0;

/// Mass of a spherical asteroid of the given diameter, kg.
pub fn mass_kg(diameter_m: f64) -> f64 {
    let radius = diameter_m / 2.0;
    (4.0 / 3.0) * PI * radius.powi(3) * ASTEROID_DENSITY_KG_M3
}

pub fn kinetic_energy_j(mass_kg: f64, velocity_ms: f64) -> f64 {
    0.5 * mass_kg * velocity_ms.powi(2)
}

pub fn tnt_equivalent_kg(energy_j: f64) -> f64 {
    energy_j / TNT_JOULES_PER_KG
}

/// Crater diameter in meters from a gravity-regime scaling law.
pub fn crater_diameter_m(energy_j: f64) -> f64 {
    const TARGET_DENSITY_KG_M3: f64 = 2500.0;
    const GRAVITY_MS2: f64 = 9.81;
    const SCALING_FACTOR: f64 = 1.8;
    SCALING_FACTOR * (energy_j / (TARGET_DENSITY_KG_M3 * GRAVITY_MS2)).powf(1.0 / 3.4)
}

/// Equivalent earthquake magnitude for an impact energy; 0 for
/// non-positive energies.
pub fn seismic_magnitude(energy_j: f64) -> f64 {
    if energy_j <= 0.0 {
        return 0.0;
    }
    (energy_j.log10() - 5.24) / 1.44
}

pub fn size_risk(diameter_m: f64) -> &'static str {
    if diameter_m < 50.0 {
        "Low - Likely atmospheric breakup"
    } else if diameter_m < 140.0 {
        "Moderate - Regional damage potential"
    } else if diameter_m < 1000.0 {
        "High - Continental effects possible"
    } else {
        "Extreme - Global catastrophe potential"
    }
}

pub fn approach_risk(miss_distance_km: f64) -> &'static str {
    if miss_distance_km < 100_000.0 {
        "CRITICAL - Extremely close approach"
    } else if miss_distance_km < 1_000_000.0 {
        "HIGH - Close monitoring required"
    } else if miss_distance_km < 7_500_000.0 {
        "MODERATE - Within lunar distance"
    } else {
        "LOW - Safe distance"
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImpactSetting {
    Urban,
    Rural,
}

pub fn casualty_estimate(diameter_m: f64, setting: ImpactSetting) -> &'static str {
    use ImpactSetting::*;
    if diameter_m < 20.0 {
        match setting {
            Urban => "Hundreds to thousands (mostly injuries)",
            Rural => "Minimal",
        }
    } else if diameter_m < 100.0 {
        match setting {
            Urban => "Thousands to tens of thousands",
            Rural => "Hundreds to thousands",
        }
    } else if diameter_m < 500.0 {
        match setting {
            Urban => "Hundreds of thousands to millions",
            Rural => "Tens of thousands",
        }
    } else {
        match setting {
            Urban => "Millions to tens of millions",
            Rural => "Hundreds of thousands",
        }
    }
}

pub fn economic_damage_estimate(diameter_m: f64) -> &'static str {
    if diameter_m < 50.0 {
        "0.1 - 1 billion USD"
    } else if diameter_m < 140.0 {
        "1 - 50 billion USD"
    } else if diameter_m < 500.0 {
        "50 - 1,000 billion USD"
    } else {
        "1,000+ billion USD (potential civilization impact)"
    }
}

/// Two-line comparison to a known impact event of similar size.
pub fn historical_context(diameter_m: f64) -> [&'static str; 2] {
    if diameter_m < 25.0 {
        [
            "Similar to: Chelyabinsk meteor (2013) - 20m diameter",
            "Effects: Atmospheric airburst, widespread window damage, ~1,500 injuries",
        ]
    } else if diameter_m < 80.0 {
        [
            "Similar to: Tunguska event (1908) - ~50-60m diameter",
            "Effects: Flattened 2,000 km² of forest, no direct casualties due to remote location",
        ]
    } else if diameter_m < 200.0 {
        [
            "Similar to: Barringer Crater impactor (~50,000 years ago) - ~50m diameter",
            "Effects: Created 1.2km wide crater in Arizona",
        ]
    } else {
        [
            "Larger than most historical impacts in human history",
            "Would represent a significant global threat requiring international response",
        ]
    }
}
