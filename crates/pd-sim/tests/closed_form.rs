//! Linearized, undamped motion against θ(t) = θ0·cos(ω_n t) + (ω0/ω_n)·sin(ω_n t).

use pd_sim::Pendulum;

const THETA0: f64 = 0.1;
const OMEGA0: f64 = 0.2;

fn closed_form(t: f64, omega_n: f64) -> f64 {
    THETA0 * (omega_n * t).cos() + OMEGA0 / omega_n * (omega_n * t).sin()
}

/// Largest |θ_numeric − θ_exact| over `steps` frames of length `dt`.
fn max_error(dt: f64, steps: usize) -> f64 {
    let mut p = Pendulum::new(1.0, 0.05, false, true, THETA0).unwrap();
    p.set_omega(OMEGA0).unwrap();
    let omega_n = p.params().natural_frequency();

    let mut worst = 0.0_f64;
    for n in 1..=steps {
        let theta = p.next_step(dt).unwrap();
        let t = n as f64 * dt;
        worst = worst.max((theta - closed_form(t, omega_n)).abs());
    }
    worst
}

#[test]
fn tracks_closed_form_with_millisecond_steps() {
    let err = max_error(1.0e-3, 3000);
    assert!(err < 1.0e-3, "max error {err}");
}

#[test]
fn tracks_closed_form_at_display_frame_rate() {
    let err = max_error(1.0 / 60.0, 180);
    assert!(err < 5.0e-3, "max error {err}");
}

#[test]
fn error_shrinks_with_step_size() {
    let coarse = max_error(1.0e-2, 300);
    let fine = max_error(1.0e-3, 3000);
    assert!(fine < coarse, "fine {fine}, coarse {coarse}");
}

#[test]
fn natural_frequency_is_sqrt_g_over_l() {
    let p = Pendulum::new(2.0, 0.05, false, true, THETA0).unwrap();
    let expected = (pd_core::units::constants::G0_MPS2 / 2.0).sqrt();
    assert!((p.params().natural_frequency() - expected).abs() < 1e-12);
}
