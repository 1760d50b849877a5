//! Period estimates for recorded trajectories.

use crate::sim::SimRecord;
use std::f64::consts::PI;

/// Period of the linearized pendulum, 2π·sqrt(L/g) [s].
pub fn small_angle_period(rope_length: f64, gravity: f64) -> f64 {
    2.0 * PI * (rope_length / gravity).sqrt()
}

/// Times at which θ crosses zero going from positive to non-positive,
/// linearly interpolated between samples.
pub fn downward_zero_crossings(record: &SimRecord) -> Vec<f64> {
    record
        .samples
        .windows(2)
        .filter_map(|w| {
            let (a, b) = (&w[0], &w[1]);
            if a.theta > 0.0 && b.theta <= 0.0 {
                let frac = a.theta / (a.theta - b.theta);
                Some(a.t + frac * (b.t - a.t))
            } else {
                None
            }
        })
        .collect()
}

/// Mean interval between successive downward zero crossings.
///
/// `None` when the record holds fewer than two crossings.
pub fn measure_period(record: &SimRecord) -> Option<f64> {
    let crossings = downward_zero_crossings(record);
    if crossings.len() < 2 {
        return None;
    }
    let span = crossings[crossings.len() - 1] - crossings[0];
    Some(span / (crossings.len() - 1) as f64)
}
