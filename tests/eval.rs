use burl::config::Config;
use burl::context::Context;
use burl::structures::noun::{IntoNoun, Noun};
use burl::types::err::EvalError;

fn expect_eval<P: IntoNoun, Q: IntoNoun>(program: P, product: Q) {
    let mut ctx = Context::from_config(Config::default());
    assert_eq!(ctx.eval(program.into_noun()), Ok(product.into_noun()));
}

fn expect_failure<P: IntoNoun>(program: P, error: EvalError) {
    let mut ctx = Context::from_config(Config::default());
    assert_eq!(ctx.eval(program.into_noun()), Err(error));
}

mod laws {
    use super::*;

    #[test]
    fn quote_returns_its_argument() {
        expect_eval((0_u8, 1_u8, 44_u8), 44_u8);
        expect_eval(((76_u8, 30_u8), 1_u8, (42_u8, 60_u8)), (42_u8, 60_u8));
    }

    #[test]
    fn axis_one_is_the_subject() {
        expect_eval((99_u8, 0_u8, 1_u8), 99_u8);
        expect_eval(((98_u8, 99_u8), 0_u8, 1_u8), (98_u8, 99_u8));
    }

    #[test]
    fn axis_selection() {
        expect_eval(((98_u8, 99_u8), 0_u8, 2_u8), 98_u8);
        expect_eval(((98_u8, 99_u8), 0_u8, 3_u8), 99_u8);
        expect_eval(((1_u8, 2_u8, 3_u8), 0_u8, 3_u8), (2_u8, 3_u8));
        expect_eval(((((1_u8, 2_u8), 3_u8), 4_u8), 0_u8, 5_u8), 3_u8);
        expect_eval(((((1_u8, 2_u8), 3_u8), 4_u8), 0_u8, 4_u8), (1_u8, 2_u8));
    }

    #[test]
    fn wide_axis_selection() {
        expect_eval(
            (
                (1_u8, 2_u8, 3_u8, 4_u8, (5_u8, 6_u8, 7_u8, (8_u8, 9_u8, 10_u8, 11_u8))),
                0_u8,
                &[0xFF, 0x07][..],
            ),
            11_u8,
        );
    }

    #[test]
    fn increment_of_a_literal() {
        expect_eval((40_u8, 4_u8, 0_u8, 1_u8), 41_u8);
        expect_eval((0_u8, 4_u8, 1_u8, 77_u8), 78_u8);
    }

    #[test]
    fn autocons_pairs_products() {
        let subject = (120_u8, 121_u8);
        expect_eval(
            (subject, ((0_u8, 2_u8), (0_u8, 3_u8))),
            (120_u8, 121_u8),
        );
    }

    #[test]
    fn autocons_distributes_one_subject() {
        expect_eval(
            (22_u8, ((4_u8, (0_u8, 1_u8)), (0_u8, 1_u8), (1_u8, 50_u8))),
            (23_u8, 22_u8, 50_u8),
        );
    }

    #[test]
    fn apply_uses_computed_subject_and_formula() {
        expect_eval(((123_u8, (0_u8, 1_u8)), 2_u8, (0_u8, 2_u8), (0_u8, 3_u8)), 123_u8);
    }

    #[test]
    fn cell_test() {
        expect_eval(((99_u8, 33_u8), 3_u8, (0_u8, 1_u8)), Noun::from_bool(true));
        expect_eval((99_u8, 3_u8, (0_u8, 1_u8)), Noun::from_bool(false));
    }

    #[test]
    fn equality_test() {
        expect_eval(((5_u8, 5_u8), 5_u8, (0_u8, 1_u8)), Noun::from_bool(true));
        expect_eval(((5_u8, 8_u8), 5_u8, (0_u8, 1_u8)), Noun::from_bool(false));
    }

    #[test]
    fn equality_is_byte_exact() {
        let subject = Noun::cell(Noun::atom(&[5][..]), Noun::atom(&[5, 0][..]));
        expect_eval((subject, 5_u8, (0_u8, 1_u8)), Noun::from_bool(false));
    }
}

mod branching {
    use super::*;

    #[test]
    fn yes_takes_the_first_branch() {
        expect_eval(
            (42_u8, (6_u8, (1_u8, 0_u8), (4_u8, 0_u8, 1_u8), (1_u8, 233_u8))),
            43_u8,
        );
    }

    #[test]
    fn no_takes_the_second_branch() {
        expect_eval(
            (42_u8, (6_u8, (1_u8, 1_u8), (4_u8, 0_u8, 1_u8), (1_u8, 233_u8))),
            233_u8,
        );
    }

    #[test]
    fn other_conditions_fail() {
        expect_failure(
            (42_u8, (6_u8, (1_u8, 2_u8), (1_u8, 0_u8), (1_u8, 0_u8))),
            EvalError::BranchCondition,
        );
        expect_failure(
            (42_u8, (6_u8, (1_u8, (7_u8, 7_u8)), (1_u8, 0_u8), (1_u8, 0_u8))),
            EvalError::BranchCondition,
        );
    }

    #[test]
    fn condition_values_read_numerically() {
        // A two-byte zero atom still answers yes.
        let padded_zero = Noun::atom(&[0, 0][..]);
        expect_eval(
            (42_u8, (6_u8, (1_u8, padded_zero), (1_u8, 10_u8), (1_u8, 20_u8))),
            10_u8,
        );
    }
}

mod composition {
    use super::*;

    #[test]
    fn compose_chains_formulas() {
        expect_eval(
            (42_u8, (7_u8, (4_u8, 0_u8, 1_u8), (4_u8, 0_u8, 1_u8))),
            44_u8,
        );
    }

    #[test]
    fn push_extends_the_subject() {
        expect_eval(
            (42_u8, (8_u8, (4_u8, 0_u8, 1_u8), (0_u8, 1_u8))),
            (43_u8, 42_u8),
        );
        expect_eval((42_u8, (8_u8, (4_u8, 0_u8, 1_u8), (4_u8, 0_u8, 3_u8))), 43_u8);
    }
}

mod loops {
    use super::*;

    /// Counts up to one less than the subject: the classic decrement by search.
    fn decrement_formula() -> Noun {
        (
            8_u8,
            (1_u8, 0_u8),
            8_u8,
            (
                1_u8,
                6_u8,
                (5_u8, (0_u8, 7_u8), (4_u8, 0_u8, 6_u8)),
                (0_u8, 6_u8),
                (9_u8, 2_u8, (0_u8, 2_u8), ((4_u8, 0_u8, 6_u8), (0_u8, 7_u8))),
            ),
            (9_u8, 2_u8, 0_u8, 1_u8),
        )
            .into_noun()
    }

    #[test]
    fn decrement_small() {
        let mut ctx = Context::from_config(Config::default());
        let program = Noun::cell(Noun::from_u8(5), decrement_formula());
        assert_eq!(ctx.eval(program), Ok(Noun::from_u8(4)));
    }

    #[test]
    fn long_loops_run_in_bounded_native_stack() {
        let mut ctx = Context::from_config(Config::default());
        let program = Noun::cell(Noun::from_usize(50_000), decrement_formula());
        assert_eq!(ctx.eval(program), Ok(Noun::from_usize(49_999)));
    }

    #[test]
    fn step_limit_interrupts_a_loop() {
        let config = Config {
            step_limit: 1_000,
            ..Config::default()
        };
        let mut ctx = Context::from_config(config);
        let program = Noun::cell(Noun::from_usize(50_000), decrement_formula());
        assert_eq!(ctx.eval(program), Err(EvalError::StepLimitExceeded));
    }

    #[test]
    fn each_eval_refills_the_budget() {
        let config = Config {
            step_limit: 1_000,
            ..Config::default()
        };
        let mut ctx = Context::from_config(config);

        let program = Noun::cell(Noun::from_u8(5), decrement_formula());
        assert_eq!(ctx.eval(program.clone()), Ok(Noun::from_u8(4)));
        assert_eq!(ctx.eval(program), Ok(Noun::from_u8(4)));
    }
}

mod splicing {
    use super::*;

    #[test]
    fn splice_partitions_an_atom() {
        expect_eval(
            (
                &[1, 2, 3, 4, 5][..],
                (16_u8, (0_u8, 1_u8), (1_u8, (2_u8, 3_u8))),
            ),
            (&[1, 2][..], &[3, 4, 5][..]),
        );
    }

    #[test]
    fn splice_flattens_across_cells() {
        expect_eval(
            (
                (&[1, 2][..], &[3, 4, 5][..]),
                (16_u8, (0_u8, 1_u8), (1_u8, 5_u8)),
            ),
            &[1, 2, 3, 4, 5][..],
        );
    }

    #[test]
    fn splice_discards_the_tail() {
        expect_eval(
            (
                &[1, 2, 3, 4, 5][..],
                (16_u8, (0_u8, 1_u8), (1_u8, 2_u8)),
            ),
            &[1, 2][..],
        );
    }

    #[test]
    fn splice_past_the_buffer_fails() {
        expect_failure(
            (&[1, 2][..], (16_u8, (0_u8, 1_u8), (1_u8, 3_u8))),
            EvalError::SpliceShort,
        );
    }
}

mod entropy {
    use super::*;

    #[test]
    fn draws_are_deterministic_per_seed() {
        let program = (20_u8, (15_u8, 0_u8, 1_u8)).into_noun();

        let mut first = Context::from_config(Config::default());
        let mut second = Context::from_config(Config::default());
        let drawn = first.eval(program.clone()).expect("draw failed");

        assert_eq!(drawn.atom_bytes().map(<[u8]>::len), Some(20));
        assert_eq!(second.eval(program.clone()), Ok(drawn.clone()));

        let reseeded_config = Config {
            rng_seed: 7,
            ..Config::default()
        };
        let mut third = Context::from_config(reseeded_config);
        assert_ne!(third.eval(program), Ok(drawn));
    }

    #[test]
    fn draws_count_bytes() {
        let mut ctx = Context::from_config(Config::default());
        let program = (20_u8, (15_u8, 0_u8, 1_u8)).into_noun();
        ctx.eval(program).expect("draw failed");
        assert_eq!(ctx.counters.random_bytes, 20);
    }

    #[test]
    fn ceiling_bounds_a_draw() {
        let config = Config {
            random_ceiling: 10,
            ..Config::default()
        };
        let mut ctx = Context::from_config(config);
        let program = (11_u8, (15_u8, 0_u8, 1_u8)).into_noun();
        assert_eq!(ctx.eval(program), Err(EvalError::EntropyExhausted));
    }

    #[test]
    fn lengths_must_be_atoms() {
        expect_failure(
            (0_u8, (15_u8, 1_u8, (1_u8, 2_u8))),
            EvalError::InvalidLength,
        );
    }
}

mod malformed {
    use super::*;

    #[test]
    fn programs_must_be_cells() {
        let mut ctx = Context::from_config(Config::default());
        assert_eq!(
            ctx.eval(Noun::from_u8(7)),
            Err(EvalError::AtomicProgram)
        );
    }

    #[test]
    fn formulas_must_be_cells() {
        expect_failure((0_u8, 1_u8), EvalError::AtomicFormula);
    }

    #[test]
    fn opcodes_must_fit_a_byte() {
        // A two-byte head reading as 257.
        let wide_head = Noun::atom(&[1, 1][..]);
        expect_failure((0_u8, (wide_head, 0_u8)), EvalError::NotAnOpcode);
    }

    #[test]
    fn opcodes_stop_at_sixteen() {
        expect_failure((0_u8, 17_u8, 0_u8), EvalError::UnknownOpcode(17));
        expect_failure((0_u8, 200_u8, 0_u8), EvalError::UnknownOpcode(200));
    }

    #[test]
    fn arities_are_checked() {
        expect_failure((42_u8, (2_u8, 5_u8)), EvalError::MalformedArgument);
        expect_failure((42_u8, (7_u8, 5_u8)), EvalError::MalformedArgument);
        expect_failure((42_u8, (9_u8, 5_u8)), EvalError::MalformedArgument);
        expect_failure((42_u8, (16_u8, 5_u8)), EvalError::MalformedArgument);
    }

    #[test]
    fn equality_needs_a_pair() {
        expect_failure((5_u8, 5_u8, (0_u8, 1_u8)), EvalError::EqualityOnAtom);
    }

    #[test]
    fn axis_walks_stop_at_atoms() {
        expect_failure((99_u8, 0_u8, 2_u8), EvalError::AxisOutOfRange);
        expect_failure((99_u8, 0_u8, 0_u8), EvalError::AxisOutOfRange);
    }
}
