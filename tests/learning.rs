use marmot::{
    config::NewtonConfig,
    procedures::optimize::{fit, Objective},
};

/// A quadratic objective with gradient 2(w − c) per dimension, stationary at c.
struct Quadratic {
    centers: Vec<f64>,
}

impl Objective for Quadratic {
    fn gradient(&self, weights: &[f64]) -> Vec<f64> {
        weights
            .iter()
            .zip(&self.centers)
            .map(|(w, c)| 2.0 * (w - c))
            .collect()
    }

    fn hessian_diagonal(&self, weights: &[f64]) -> Vec<f64> {
        vec![2.0; weights.len()]
    }
}

mod newton {
    use super::*;

    #[test]
    fn a_bowl_is_descended_to_its_centre() {
        let objective = Quadratic { centers: vec![3.0] };

        let outcome = fit(&objective, vec![0.0], &NewtonConfig::default());

        assert!(outcome.converged);
        assert!(outcome.iterations < 50);
        assert!((outcome.weights[0] - 3.0).abs() < 1e-5);
        assert!(outcome.gradient_norm <= 1e-6);
    }

    #[test]
    fn dimensions_are_fitted_jointly() {
        let objective = Quadratic {
            centers: vec![-1.0, 0.0, 4.5],
        };

        let outcome = fit(&objective, vec![0.0, 0.0, 0.0], &NewtonConfig::default());

        assert!(outcome.converged);
        for (weight, center) in outcome.weights.iter().zip(&objective.centers) {
            assert!((weight - center).abs() < 1e-5);
        }
    }

    #[test]
    fn a_converged_start_takes_no_steps() {
        let objective = Quadratic { centers: vec![2.0] };

        let outcome = fit(&objective, vec![2.0], &NewtonConfig::default());

        assert!(outcome.converged);
        assert_eq!(outcome.iterations, 0);
        assert_eq!(outcome.weights, vec![2.0]);
    }

    #[test]
    fn the_step_cap_bounds_a_hopeless_fit() {
        /// A constant slope offers no stationary point to find.
        struct Slope {}

        impl Objective for Slope {
            fn gradient(&self, weights: &[f64]) -> Vec<f64> {
                vec![1.0; weights.len()]
            }

            fn hessian_diagonal(&self, weights: &[f64]) -> Vec<f64> {
                vec![1.0; weights.len()]
            }
        }

        let outcome = fit(&Slope {}, vec![0.0], &NewtonConfig::default());

        assert!(!outcome.converged);
        assert_eq!(outcome.iterations, NewtonConfig::default().step_cap);
    }

    #[test]
    fn tolerance_is_respected() {
        let objective = Quadratic { centers: vec![1.0] };
        let config = NewtonConfig {
            tolerance: 1e-2,
            ..NewtonConfig::default()
        };

        let outcome = fit(&objective, vec![0.0], &config);

        assert!(outcome.converged);
        assert!(outcome.gradient_norm <= 1e-2);

        let strict = fit(&objective, vec![0.0], &NewtonConfig::default());
        assert!(strict.iterations > outcome.iterations);
    }
}

mod weights {
    use marmot::{
        config::Config,
        context::Context,
        structures::formula::{Formula, Literal, Term},
        types::err::ErrorKind,
    };

    use super::*;

    fn smokes_x() -> Formula {
        Formula::Literal(Literal {
            predicate: "smokes".to_string(),
            args: vec![Term::Variable("x".to_string())],
            polarity: true,
        })
    }

    #[test]
    fn fitted_weights_revise_the_model() {
        let mut ctx = Context::from_config(Config::default());

        ctx.add_domain("person", ["anna", "bob"]).unwrap();
        ctx.add_predicate("smokes", &["person"], false).unwrap();
        ctx.add_formula(smokes_x(), 0.0, false).unwrap();
        ctx.add_formula(Formula::Not(Box::new(smokes_x())), 0.0, false)
            .unwrap();

        let objective = Quadratic {
            centers: vec![1.5, -0.5],
        };
        let outcome = fit(&objective, ctx.formula_db.weights(), &ctx.config.newton);
        assert!(outcome.converged);

        ctx.formula_db.set_weights(&outcome.weights).unwrap();

        let revised = ctx.formula_db.weights();
        assert!((revised[0] - 1.5).abs() < 1e-5);
        assert!((revised[1] + 0.5).abs() < 1e-5);
    }

    #[test]
    fn a_weight_vector_of_the_wrong_length_is_rejected() {
        let mut ctx = Context::from_config(Config::default());

        ctx.add_domain("person", ["anna"]).unwrap();
        ctx.add_predicate("smokes", &["person"], false).unwrap();
        ctx.add_formula(smokes_x(), 1.0, false).unwrap();

        assert_eq!(
            ctx.formula_db.set_weights(&[1.0, 2.0]),
            Err(ErrorKind::WeightCount {
                expected: 1,
                found: 2,
            }),
        );
    }
}
