use marmot::{config::Config, context::Context};

mod parsing {
    use marmot::builder::literal::parse_literal;

    #[test]
    fn positive_literal() {
        assert_eq!(
            parse_literal("friends(anna,bob)").unwrap(),
            (
                "friends".to_string(),
                vec!["anna".to_string(), "bob".to_string()],
                true,
            ),
        );
    }

    #[test]
    fn negated_literal() {
        assert_eq!(
            parse_literal("!smokes(anna)").unwrap(),
            ("smokes".to_string(), vec!["anna".to_string()], false),
        );
    }

    #[test]
    fn boolean_assignments() {
        let (_, _, truth) = parse_literal("smokes(anna)=True").unwrap();
        assert!(truth);

        let (_, _, truth) = parse_literal("smokes(anna)=False").unwrap();
        assert!(!truth);
    }

    #[test]
    fn selection_appends_the_value() {
        assert_eq!(
            parse_literal("topic(d1)=sports").unwrap(),
            (
                "topic".to_string(),
                vec!["d1".to_string(), "sports".to_string()],
                true,
            ),
        );
    }

    #[test]
    fn whitespace_is_tolerated() {
        assert_eq!(
            parse_literal("  friends( anna , bob )  ").unwrap(),
            (
                "friends".to_string(),
                vec!["anna".to_string(), "bob".to_string()],
                true,
            ),
        );
    }

    #[test]
    fn malformed_text_is_rejected() {
        assert!(parse_literal("smokes(anna").is_err());
        assert!(parse_literal("smokes anna)").is_err());
        assert!(parse_literal("(anna)").is_err());
        assert!(parse_literal("smokes(anna)=").is_err());
        assert!(parse_literal("smokes()anna").is_err());
        assert!(parse_literal("!topic(d1)=sports").is_err());
    }
}

mod assertion {
    use marmot::{
        structures::atom::GroundAtom,
        types::err::{self, ErrorKind},
    };

    use super::*;

    fn smokers() -> Context {
        let mut ctx = Context::from_config(Config::default());
        ctx.add_domain("person", ["anna", "bob"]).unwrap();
        ctx.add_predicate("smokes", &["person"], false).unwrap();
        ctx.ground_atoms().unwrap();
        ctx
    }

    #[test]
    fn truth_is_recorded() {
        let mut ctx = smokers();

        ctx.assert_evidence("smokes(anna)").unwrap();
        ctx.assert_evidence("!smokes(bob)").unwrap();

        let anna = GroundAtom::new("smokes", vec!["anna".to_string()]);
        let bob = GroundAtom::new("smokes", vec!["bob".to_string()]);

        let anna = ctx.atom_db.index_of(&anna).unwrap();
        let bob = ctx.atom_db.index_of(&bob).unwrap();

        assert_eq!(ctx.evidence.value_of(anna), Some(true));
        assert_eq!(ctx.evidence.value_of(bob), Some(false));
    }

    #[test]
    fn asserted_atoms_leave_the_search_pool() {
        let mut ctx = smokers();

        assert_eq!(ctx.block_db.free_blocks().len(), 2);

        ctx.assert_evidence("!smokes(anna)").unwrap();

        assert_eq!(ctx.block_db.free_blocks().len(), 1);
    }

    #[test]
    fn repetition_is_harmless_and_conflict_is_not() {
        let mut ctx = smokers();

        ctx.assert_evidence("smokes(anna)").unwrap();
        ctx.assert_evidence("smokes(anna)").unwrap();

        let conflict = ctx.assert_evidence("!smokes(anna)");
        assert!(matches!(
            conflict,
            Err(ErrorKind::Evidence(err::EvidenceError::ValuationConflict(
                _
            )))
        ));
    }

    #[test]
    fn evidence_requires_ground_atoms() {
        let mut ctx = Context::from_config(Config::default());
        ctx.add_domain("person", ["anna"]).unwrap();
        ctx.add_predicate("smokes", &["person"], false).unwrap();

        assert_eq!(
            ctx.assert_evidence("smokes(anna)"),
            Err(err::StateError::AtomsRequired.into()),
        );
    }

    #[test]
    fn unknown_things_are_rejected() {
        let mut ctx = smokers();

        assert!(ctx.assert_evidence("drinks(anna)").is_err());
        assert!(ctx.assert_evidence("smokes(carol)").is_err());
        assert!(ctx.assert_evidence("smokes(anna,bob)").is_err());
    }
}

mod blocks {
    use marmot::structures::atom::GroundAtom;

    use super::*;

    fn classified() -> Context {
        let mut ctx = Context::from_config(Config::default());
        ctx.add_domain("doc", ["d1", "d2"]).unwrap();
        ctx.add_domain("cat", ["sports", "politics", "tech"])
            .unwrap();
        ctx.add_predicate("topic", &["doc", "cat"], true).unwrap();
        ctx.ground_atoms().unwrap();
        ctx
    }

    #[test]
    fn a_selection_settles_the_block() {
        let mut ctx = classified();

        ctx.assert_evidence("topic(d1)=sports").unwrap();

        let selected = GroundAtom::new(
            "topic",
            vec!["d1".to_string(), "sports".to_string()],
        );
        let selected = ctx.atom_db.index_of(&selected).unwrap();

        assert_eq!(ctx.evidence.value_of(selected), Some(true));

        // Siblings are recorded false and the block is fixed.
        let block = ctx.block_db.block(ctx.block_db.block_of(selected));
        assert!(block.fixed);
        for member in &block.members {
            if *member != selected {
                assert_eq!(ctx.evidence.value_of(*member), Some(false));
            }
        }

        // The other document's block is untouched.
        assert_eq!(ctx.block_db.free_blocks().len(), 1);
    }

    #[test]
    fn two_selections_in_one_block_conflict() {
        let mut ctx = classified();

        ctx.assert_evidence("topic(d1)=sports").unwrap();
        assert!(ctx.assert_evidence("topic(d1)=tech").is_err());
    }

    #[test]
    fn a_false_member_leaves_the_block_open() {
        let mut ctx = classified();

        ctx.assert_evidence("!topic(d1, sports)").unwrap();

        assert_eq!(ctx.block_db.free_blocks().len(), 2);
    }
}
