use marmot::{
    config::Config,
    context::Context,
    structures::formula::{Formula, Literal, Term},
};

fn positive(predicate: &str, args: &[&str]) -> Formula {
    Formula::Literal(Literal {
        predicate: predicate.to_string(),
        args: args
            .iter()
            .map(|v| Term::Variable(v.to_string()))
            .collect(),
        polarity: true,
    })
}

mod search {
    use marmot::structures::atom::GroundAtom;

    use super::*;

    #[test]
    fn a_satisfiable_disjunction_is_satisfied() {
        let mut config = Config::default();
        config.map.threshold = Some(4.0);
        let mut ctx = Context::from_config(config);

        ctx.add_domain("person", ["anna"]).unwrap();
        ctx.add_predicate("smokes", &["person"], false).unwrap();
        ctx.add_predicate("drinks", &["person"], false).unwrap();

        let either = Formula::Or(vec![
            positive("smokes", &["x"]),
            positive("drinks", &["x"]),
        ]);
        ctx.add_formula(either, 5.0, false).unwrap();

        ctx.ground_atoms().unwrap();
        ctx.ground_formulas().unwrap();

        let outcome = ctx.map_search().unwrap();

        assert!(outcome.converged);
        assert!(outcome.satisfied_weight > 4.0);
        assert!(outcome.state.iter().any(|v| *v));
    }

    #[test]
    fn the_reported_weight_is_the_weight_of_the_state() {
        let mut config = Config::default();
        config.map.threshold = Some(2.5);
        let mut ctx = Context::from_config(config);

        ctx.add_domain("person", ["anna", "bob"]).unwrap();
        ctx.add_predicate("smokes", &["person"], false).unwrap();
        ctx.add_predicate("drinks", &["person"], false).unwrap();

        ctx.add_formula(positive("smokes", &["x"]), 1.0, false)
            .unwrap();
        ctx.add_formula(positive("drinks", &["x"]), 0.5, false)
            .unwrap();

        ctx.ground_atoms().unwrap();
        ctx.ground_formulas().unwrap();

        let outcome = ctx.map_search().unwrap();

        // Incremental rescoring and whole-model evaluation agree.
        assert_eq!(outcome.satisfied_weight, ctx.satisfied_weight(&outcome.state));
    }

    #[test]
    fn evidence_is_never_flipped() {
        let mut config = Config::default();
        config.map.threshold = Some(1e3);
        config.map.flip_cap = 200;
        let mut ctx = Context::from_config(config);

        ctx.add_domain("person", ["anna", "bob"]).unwrap();
        ctx.add_predicate("smokes", &["person"], false).unwrap();
        ctx.add_formula(positive("smokes", &["x"]), 1.0, false)
            .unwrap();

        ctx.ground_atoms().unwrap();
        ctx.assert_evidence("!smokes(anna)").unwrap();
        ctx.ground_formulas().unwrap();

        let outcome = ctx.map_search().unwrap();

        let anna = GroundAtom::new("smokes", vec!["anna".to_string()]);
        let anna = ctx.atom_db.index_of(&anna).unwrap();

        assert!(!outcome.state[anna as usize]);
        assert_eq!(outcome.iterations, 200);
        assert!(!outcome.converged);
    }

    #[test]
    fn the_flip_cap_bounds_a_hopeless_search() {
        let mut config = Config::default();
        config.map.threshold = Some(f64::MAX);
        config.map.flip_cap = 50;
        let mut ctx = Context::from_config(config);

        ctx.add_domain("person", ["anna"]).unwrap();
        ctx.add_predicate("smokes", &["person"], false).unwrap();
        ctx.add_formula(positive("smokes", &["x"]), 1.0, false)
            .unwrap();

        ctx.ground_atoms().unwrap();
        ctx.ground_formulas().unwrap();

        let outcome = ctx.map_search().unwrap();

        assert!(!outcome.converged);
        assert_eq!(outcome.iterations, 50);
        assert_eq!(ctx.counters.total_flips, 50);
    }

    #[test]
    fn a_fully_fixed_model_terminates_immediately() {
        let mut config = Config::default();
        config.map.threshold = Some(1e3);
        let mut ctx = Context::from_config(config);

        ctx.add_domain("person", ["anna"]).unwrap();
        ctx.add_predicate("smokes", &["person"], false).unwrap();
        ctx.add_formula(positive("smokes", &["x"]), 1.0, false)
            .unwrap();

        ctx.ground_atoms().unwrap();
        ctx.assert_evidence("smokes(anna)").unwrap();
        ctx.ground_formulas().unwrap();

        let outcome = ctx.map_search().unwrap();

        assert_eq!(outcome.iterations, 0);
        assert_eq!(outcome.satisfied_weight, 1.0);
    }
}

mod selection {
    use marmot::generic::random::MinimalPCG32;
    use rand::{Rng, SeedableRng};

    use super::*;

    #[test]
    fn a_later_block_carries_the_weight() {
        let mut config = Config::default();
        config.map.threshold = Some(4.0);
        let mut ctx = Context::from_config(config);

        // The satisfying flip lives on the second predicate's atom, so a
        // search stuck on the first block can never terminate.
        ctx.add_domain("person", ["anna"]).unwrap();
        ctx.add_predicate("smokes", &["person"], false).unwrap();
        ctx.add_predicate("drinks", &["person"], false).unwrap();
        ctx.add_formula(positive("drinks", &["x"]), 5.0, false)
            .unwrap();

        ctx.ground_atoms().unwrap();
        ctx.ground_formulas().unwrap();

        let outcome = ctx.map_search().unwrap();

        assert!(outcome.converged);
        assert!(outcome.satisfied_weight > 4.0);
    }

    #[test]
    fn every_free_block_is_reachable() {
        let mut config = Config::default();
        config.map.threshold = Some(2.5);
        let mut ctx = Context::from_config(config);

        ctx.add_domain("person", ["anna", "bob", "carol"]).unwrap();
        ctx.add_predicate("smokes", &["person"], false).unwrap();
        ctx.add_formula(positive("smokes", &["x"]), 1.0, false)
            .unwrap();

        ctx.ground_atoms().unwrap();
        ctx.ground_formulas().unwrap();

        // Exceeding the threshold needs all three atoms true, one flip each.
        let outcome = ctx.map_search().unwrap();

        assert!(outcome.converged);
        assert!(outcome.state.iter().all(|v| *v));
    }

    #[test]
    fn index_draws_spread_over_the_range() {
        let mut rng = MinimalPCG32::from_seed(3_u64.to_le_bytes());

        let mut counts = [0_usize; 5];
        for _ in 0..500 {
            counts[rng.gen_range(0..counts.len())] += 1;
        }

        // Coarse uniformity: every index drawn a reasonable share of the time.
        for count in counts {
            assert!(count > 50);
        }
    }
}

mod blocks {
    use super::*;

    #[test]
    fn exclusivity_survives_search() {
        let mut config = Config::default();
        config.map.threshold = Some(f64::MAX);
        config.map.flip_cap = 300;
        let mut ctx = Context::from_config(config);

        ctx.add_domain("doc", ["d1", "d2"]).unwrap();
        ctx.add_domain("cat", ["sports", "politics", "tech"])
            .unwrap();
        ctx.add_predicate("topic", &["doc", "cat"], true).unwrap();
        ctx.add_formula(positive("topic", &["d", "c"]), 1.0, false)
            .unwrap();

        ctx.ground_atoms().unwrap();
        ctx.ground_formulas().unwrap();

        let outcome = ctx.map_search().unwrap();

        assert!(ctx.blocks_exclusive(&outcome.state));
    }

    #[test]
    fn an_all_false_block_is_not_overridden() {
        let mut config = Config::default();
        // Terminate before any flip.
        config.map.threshold = Some(f64::MIN);
        let mut ctx = Context::from_config(config);

        ctx.add_domain("doc", ["d1"]).unwrap();
        ctx.add_domain("cat", ["sports", "politics"]).unwrap();
        ctx.add_predicate("topic", &["doc", "cat"], true).unwrap();
        ctx.add_formula(positive("topic", &["d", "c"]), 1.0, false)
            .unwrap();

        ctx.ground_atoms().unwrap();
        ctx.assert_evidence("!topic(d1, sports)").unwrap();
        ctx.assert_evidence("!topic(d1, politics)").unwrap();
        ctx.ground_formulas().unwrap();

        let outcome = ctx.map_search().unwrap();

        assert_eq!(outcome.iterations, 0);
        assert!(outcome.state.iter().all(|v| !*v));
    }

    #[test]
    fn the_initial_state_selects_one_member_per_block() {
        let mut config = Config::default();
        // Terminate before any flip.
        config.map.threshold = Some(f64::MIN);
        let mut ctx = Context::from_config(config);

        ctx.add_domain("doc", ["d1", "d2"]).unwrap();
        ctx.add_domain("cat", ["sports", "politics"]).unwrap();
        ctx.add_predicate("topic", &["doc", "cat"], true).unwrap();
        ctx.add_formula(positive("topic", &["d", "c"]), 1.0, false)
            .unwrap();

        ctx.ground_atoms().unwrap();
        ctx.ground_formulas().unwrap();

        let outcome = ctx.map_search().unwrap();

        assert_eq!(outcome.iterations, 0);
        assert!(ctx.blocks_exclusive(&outcome.state));
    }
}

mod determinism {
    use super::*;

    fn run(seed: u64) -> marmot::reports::MapOutcome {
        let mut config = Config::default();
        config.seed = seed;
        config.map.threshold = Some(f64::MAX);
        config.map.flip_cap = 100;
        let mut ctx = Context::from_config(config);

        ctx.add_domain("person", ["anna", "bob", "carol"]).unwrap();
        ctx.add_predicate("smokes", &["person"], false).unwrap();
        ctx.add_predicate("drinks", &["person"], false).unwrap();
        ctx.add_formula(positive("smokes", &["x"]), 1.0, false)
            .unwrap();
        ctx.add_formula(positive("drinks", &["x"]), 2.0, false)
            .unwrap();

        ctx.ground_atoms().unwrap();
        ctx.ground_formulas().unwrap();

        ctx.map_search().unwrap()
    }

    #[test]
    fn a_seed_fixes_the_run() {
        let first = run(7);
        let second = run(7);

        assert_eq!(first.state, second.state);
        assert_eq!(first.satisfied_weight, second.satisfied_weight);
        assert_eq!(first.iterations, second.iterations);
    }
}

mod state {
    use marmot::types::err::{self, ErrorKind};

    use super::*;

    #[test]
    fn search_requires_a_grounded_model() {
        let mut ctx = Context::from_config(Config::default());

        ctx.add_domain("person", ["anna"]).unwrap();
        ctx.add_predicate("smokes", &["person"], false).unwrap();
        ctx.add_formula(positive("smokes", &["x"]), 1.0, false)
            .unwrap();
        ctx.ground_atoms().unwrap();

        assert!(matches!(
            ctx.map_search(),
            Err(ErrorKind::State(err::StateError::GroundingRequired))
        ));
    }
}
