//! Reference scenarios comparing the exact, linearized and damped models.

use crate::config::PendulumConfig;
use crate::sim::SimOptions;

/// A named configuration plus run options.
#[derive(Clone, Debug, PartialEq)]
pub struct Preset {
    pub name: &'static str,
    pub config: PendulumConfig,
    pub options: SimOptions,
}

impl Preset {
    /// File name used when the preset is exported as CSV.
    pub fn file_name(&self) -> String {
        format!("{}.csv", self.name)
    }
}

fn preset(
    name: &'static str,
    radius_m: f64,
    resistance: bool,
    simple_harmonic: bool,
    theta0_deg: f64,
    t_end: f64,
) -> Preset {
    Preset {
        name,
        config: PendulumConfig {
            rope_length_m: 1.0,
            radius_m,
            resistance,
            simple_harmonic,
            theta0_rad: theta0_deg.to_radians(),
            ..PendulumConfig::default()
        },
        options: SimOptions {
            dt: 0.001,
            t_end,
            ..SimOptions::default()
        },
    }
}

/// Harmonic vs exact at 10°, 30° and 89°, then 89° with and without air drag.
pub fn reference_presets() -> Vec<Preset> {
    vec![
        preset("simple_harmonic_10", 0.001, false, true, 10.0, 4.0),
        preset("simple_harmonic_30", 0.001, false, true, 30.0, 4.0),
        preset("simple_harmonic_89", 0.001, false, true, 89.0, 4.0),
        preset("exact_10", 0.001, false, false, 10.0, 4.0),
        preset("exact_30", 0.001, false, false, 30.0, 4.0),
        preset("exact_89", 0.001, false, false, 89.0, 4.0),
        preset("air_resistance_no_89", 0.0025, false, false, 89.0, 10.0),
        preset("air_resistance_yes_89", 0.0025, true, false, 89.0, 10.0),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn presets_are_unique_and_buildable() {
        let presets = reference_presets();
        assert_eq!(presets.len(), 8);
        let names: HashSet<_> = presets.iter().map(|p| p.name).collect();
        assert_eq!(names.len(), presets.len());
        for p in &presets {
            assert!(p.config.build().is_ok(), "{}", p.name);
        }
    }

    #[test]
    fn only_the_drag_preset_has_resistance() {
        let damped: Vec<_> = reference_presets()
            .into_iter()
            .filter(|p| p.config.resistance)
            .map(|p| p.file_name())
            .collect();
        assert_eq!(damped, vec!["air_resistance_yes_89.csv".to_string()]);
    }
}
