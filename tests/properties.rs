//! Property tests for the integrator

use lotka::{simulate, SimulationParameters};
use proptest::prelude::*;

fn valid_params() -> impl Strategy<Value = SimulationParameters> {
    (
        (0.0..0.2f64, 0.0..0.05f64, 0.0..0.05f64, 0.0..0.5f64),
        (0.0..200.0f64, 0.0..100.0f64),
        (prop::sample::select(vec![0.01, 0.1, 0.25, 0.5, 1.0]), 0.5..60.0f64, 1usize..4),
    )
        .prop_map(|((a, b, c, d), (prey, predators), (dt, final_time, replications))| {
            SimulationParameters {
                prey_birth_rate: a,
                predation_rate: b,
                predator_efficiency: c,
                predator_loss_rate: d,
                initial_prey: prey,
                initial_predators: predators,
                dt,
                final_time,
                replications,
            }
        })
}

proptest! {
    #[test]
    fn populations_never_negative(params in valid_params()) {
        let result = simulate(&params).unwrap();
        prop_assert!(result.prey_population.iter().all(|&v| v >= 0.0));
        prop_assert!(result.predator_population.iter().all(|&v| v >= 0.0));
    }

    #[test]
    fn shape_matches_horizon(params in valid_params()) {
        let result = simulate(&params).unwrap();
        let steps = (params.final_time / params.dt).floor() as usize + 1;
        prop_assert_eq!(result.shape(), (params.replications, steps));
        prop_assert_eq!(result.prey_population.dim(), (params.replications, steps));
        prop_assert_eq!(result.predator_population.dim(), (params.replications, steps));
    }

    #[test]
    fn elapsed_time_is_step_times_dt(params in valid_params()) {
        let result = simulate(&params).unwrap();
        for ((_, t), &v) in result.elapsed_time.indexed_iter() {
            prop_assert_eq!(v, t as f64 * params.dt);
        }
    }

    #[test]
    fn deterministic(params in valid_params()) {
        let a = simulate(&params).unwrap();
        let b = simulate(&params).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn predation_free_recurrence(params in valid_params()) {
        let params = SimulationParameters {
            predation_rate: 0.0,
            predator_efficiency: 0.0,
            ..params
        };
        let result = simulate(&params).unwrap();
        let prey = result.prey_population.row(0);
        let predators = result.predator_population.row(0);

        for t in 1..result.step_count() {
            let want_prey = prey[t - 1] * (1.0 + params.prey_birth_rate * params.dt);
            let want_pred = (predators[t - 1] * (1.0 - params.predator_loss_rate * params.dt)).max(0.0);
            prop_assert!((prey[t] - want_prey).abs() <= 1e-9 * want_prey.max(1.0));
            prop_assert!((predators[t] - want_pred).abs() <= 1e-9 * want_pred.max(1.0));
        }
    }

    #[test]
    fn extinct_stays_extinct(params in valid_params()) {
        let params = SimulationParameters {
            initial_prey: 0.0,
            initial_predators: 0.0,
            ..params
        };
        let result = simulate(&params).unwrap();
        prop_assert!(result.prey_population.iter().all(|&v| v == 0.0));
        prop_assert!(result.predator_population.iter().all(|&v| v == 0.0));
    }
}
