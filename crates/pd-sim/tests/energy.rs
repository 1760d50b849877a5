//! Energy behaviour of the frame stepper with and without fluid drag.

use pd_fluids::{DragLaw, Fluid};
use pd_sim::Pendulum;
use proptest::prelude::*;

const DT: f64 = 1.0e-3;

fn energies(pendulum: &mut Pendulum, steps: usize) -> Vec<f64> {
    let mut out = Vec::with_capacity(steps + 1);
    out.push(pendulum.total_energy());
    for _ in 0..steps {
        pendulum.next_step(DT).unwrap();
        out.push(pendulum.total_energy());
    }
    out
}

fn damped(fluid: Fluid, law: DragLaw, simple_harmonic: bool, theta0: f64) -> Pendulum {
    let mut p = Pendulum::new(1.0, 0.05, true, simple_harmonic, theta0).unwrap();
    p.set_fluid(fluid);
    p.set_drag_law(law);
    p
}

fn assert_non_increasing(e: &[f64], label: &str) {
    let tol = 1.0e-4 * e[0];
    for (n, pair) in e.windows(2).enumerate() {
        assert!(
            pair[1] <= pair[0] + tol,
            "{label}: energy rose at step {n}: {} -> {}",
            pair[0],
            pair[1]
        );
    }
}

#[test]
fn drag_never_adds_energy_beyond_step_error() {
    for fluid in Fluid::ALL {
        for law in [DragLaw::Quadratic, DragLaw::Reynolds] {
            let label = format!("{fluid} {law:?} exact");
            let mut p = damped(fluid, law, false, 1.0);
            let e = energies(&mut p, 5000);
            assert_non_increasing(&e, &label);
            assert!(e[e.len() - 1] < e[0], "{label}: no net dissipation");
        }
    }
}

#[test]
fn drag_never_adds_energy_in_linearized_mode() {
    // PE is always m·g·L·(1 − cos θ); the linearized motion only keeps it
    // consistent at small angles.
    for fluid in Fluid::ALL {
        for law in [DragLaw::Quadratic, DragLaw::Reynolds] {
            let label = format!("{fluid} {law:?} harmonic");
            let mut p = damped(fluid, law, true, 0.1);
            let e = energies(&mut p, 5000);
            assert_non_increasing(&e, &label);
        }
    }
    let mut p = damped(Fluid::Water, DragLaw::Quadratic, true, 0.1);
    let e = energies(&mut p, 5000);
    assert!(e[5000] < 0.5 * e[0]);
}

#[test]
fn small_bob_in_water_is_braked_not_reversed() {
    // Drag here is far stiffer than the 10 ms substep can resolve explicitly
    let mut p = Pendulum::new(1.0, 0.001, true, false, 0.0).unwrap();
    p.set_fluid(Fluid::Water);
    p.set_omega(5.0).unwrap();
    let mut last = p.total_energy();
    for _ in 0..20 {
        p.next_step(0.01).unwrap();
        let e = p.total_energy();
        assert!(e <= last, "energy rose: {last} -> {e}");
        assert!(p.omega().abs() < 5.0);
        last = e;
    }
    assert!(p.omega() >= 0.0);
    assert!(last < 0.01 * 0.5 * p.params().mass() * 25.0);
}

#[test]
fn water_dissipates_faster_than_air() {
    let mut air = damped(Fluid::Air, DragLaw::Quadratic, false, 1.0);
    let mut water = damped(Fluid::Water, DragLaw::Quadratic, false, 1.0);
    let e_air = energies(&mut air, 3000);
    let e_water = energies(&mut water, 3000);
    assert!(e_water[3000] < e_air[3000]);
    assert!(e_water[3000] < 0.5 * e_water[0]);
}

#[test]
fn energy_conserved_without_drag() {
    let cases = [(false, 0.5236), (false, 1.2), (true, 0.1745)];
    for (harmonic, theta0) in cases {
        let mut p = Pendulum::new(1.0, 0.05, false, harmonic, theta0).unwrap();
        let e = energies(&mut p, 20_000);
        let e0 = e[0];
        let worst = e
            .iter()
            .map(|v| ((v - e0) / e0).abs())
            .fold(0.0_f64, f64::max);
        assert!(
            worst < 1.0e-2,
            "harmonic={harmonic} theta0={theta0}: relative deviation {worst}"
        );
    }
}

#[test]
fn no_secular_drift_without_drag() {
    let mut p = Pendulum::new(1.0, 0.05, false, false, 0.5236).unwrap();
    let e = energies(&mut p, 40_000);
    // Average over ten-second windows at the start and end of a 40 s run
    let window = 10_000;
    let mean = |s: &[f64]| s.iter().sum::<f64>() / s.len() as f64;
    let early = mean(&e[..window]);
    let late = mean(&e[e.len() - window..]);
    assert!(
        ((late - early) / early).abs() < 1.0e-3,
        "early {early}, late {late}"
    );
}

#[test]
fn energy_reads_follow_direct_writes() {
    let mut p = Pendulum::new(1.0, 0.05, false, false, 0.0).unwrap();
    assert_eq!(p.potential_energy(), 0.0);
    p.set_theta(0.8).unwrap();
    assert!(p.potential_energy() > 0.0);
    assert_eq!(p.kinetic_energy(), 0.0);
    p.set_omega(2.0).unwrap();
    let m = p.params().mass();
    let expected = 0.5 * m * 4.0;
    assert!((p.kinetic_energy() - expected).abs() < 1e-12);
    assert_eq!(p.total_energy(), p.kinetic_energy() + p.potential_energy());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn drag_never_adds_energy_from_any_start(
        radius in 0.001_f64..0.1,
        theta0 in -3.0_f64..3.0,
        omega0 in -20.0_f64..20.0,
        water in any::<bool>(),
        reynolds in any::<bool>(),
        dt in 1.0e-4_f64..(1.0 / 30.0),
    ) {
        let fluid = if water { Fluid::Water } else { Fluid::Air };
        let law = if reynolds { DragLaw::Reynolds } else { DragLaw::Quadratic };
        let mut p = Pendulum::new(1.0, radius, true, false, theta0).unwrap();
        p.set_fluid(fluid);
        p.set_drag_law(law);
        p.set_omega(omega0).unwrap();

        // Semi-implicit Euler lets KE+PE oscillate by a few percent of itself
        let ceiling = 1.05 * p.total_energy() + 1.0e-12;
        for n in 0..300 {
            p.next_step(dt).unwrap();
            let e = p.total_energy();
            prop_assert!(e.is_finite());
            prop_assert!(e <= ceiling, "frame {}: {} > {}", n, e, ceiling);
        }
    }
}
