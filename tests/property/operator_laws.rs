// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for Stream Operator Laws
//!
//! This module uses proptest to verify laws of the action-result operators
//! that must hold for every input sequence: execution emits exactly one
//! result per settled input, reduction hits exactly one callback per result,
//! and an always-deciding confirmation gate behaves as identity or
//! annihilator.

use cim_fx::testing::StubConfirm;
use cim_fx::{ExecutionResult, FxService, LogNotifier};
use futures::executor::block_on;
use futures::{future, stream, StreamExt};
use proptest::prelude::*;
use std::cell::Cell;
use std::sync::Arc;

// ============================================================================
// Strategies and Fixtures
// ============================================================================

/// Generate arbitrary input sequences
fn input_sequence() -> impl Strategy<Value = Vec<u32>> {
    prop::collection::vec(0u32..1000, 0..50)
}

/// Run the parity action over the inputs with immediate futures
///
/// Even inputs double successfully; odd inputs fail with a message naming
/// the input.
fn run_parity(inputs: Vec<u32>) -> Vec<ExecutionResult<u32, u32, String>> {
    let fx = FxService::with_defaults();
    let results = fx.execute(stream::iter(inputs), |x| {
        future::ready(if x % 2 == 0 {
            Ok(x * 2)
        } else {
            Err(format!("odd {x}"))
        })
    });
    block_on(results.collect())
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Property: Settled actions emit exactly one result per input
    ///
    /// With immediately-resolving actions nothing can be superseded, so the
    /// result stream mirrors the input stream one to one, in order.
    #[test]
    fn prop_execute_emits_one_result_per_input_in_order(inputs in input_sequence()) {
        let results = run_parity(inputs.clone());

        prop_assert_eq!(results.len(), inputs.len());

        let echoed: Vec<u32> = results.iter().map(|r| *r.input()).collect();
        prop_assert_eq!(echoed, inputs, "results must preserve input order");
    }

    /// Property: Result variant mirrors the action outcome
    ///
    /// Every even input becomes a Success carrying the doubled output; every
    /// odd input becomes a Failure carrying the error message.
    #[test]
    fn prop_result_variant_mirrors_action_outcome(inputs in input_sequence()) {
        let results = run_parity(inputs);

        for result in &results {
            let input = *result.input();
            if input % 2 == 0 {
                let success = result.as_success();
                prop_assert!(success.is_some(), "even input must succeed");
                prop_assert_eq!(success.map(|s| s.output), Some(input * 2));
            } else {
                let failure = result.as_failure();
                prop_assert!(failure.is_some(), "odd input must fail");
                prop_assert_eq!(
                    failure.map(|f| f.error.clone()),
                    Some(format!("odd {input}"))
                );
            }
        }
    }

    /// Property: Results partition into exactly one variant
    ///
    /// A result is a success or a failure, never both and never neither,
    /// and the accessors agree with the predicates.
    #[test]
    fn prop_result_partitions_into_exactly_one_variant(inputs in input_sequence()) {
        let results = run_parity(inputs);

        for result in &results {
            prop_assert!(result.is_success() != result.is_failure());
            prop_assert_eq!(result.as_success().is_some(), result.is_success());
            prop_assert_eq!(result.as_failure().is_some(), result.is_failure());
        }
    }

    /// Property: Reduction invokes exactly one callback per result
    ///
    /// The success and failure callback counts sum to the number of results,
    /// split along the parity of the inputs.
    #[test]
    fn prop_map_result_callback_counts_sum_to_input_count(inputs in input_sequence()) {
        let fx = FxService::with_defaults();
        let expected_successes = inputs.iter().filter(|x| *x % 2 == 0).count();
        let expected_failures = inputs.len() - expected_successes;

        let results = fx.execute(stream::iter(inputs), |x| {
            future::ready(if x % 2 == 0 {
                Ok(x * 2)
            } else {
                Err(format!("odd {x}"))
            })
        });

        let success_calls = Cell::new(0usize);
        let failure_calls = Cell::new(0usize);
        let reduced = fx.map_result(
            results,
            |_s| success_calls.set(success_calls.get() + 1),
            |_f| failure_calls.set(failure_calls.get() + 1),
        );
        let reduced: Vec<()> = block_on(reduced.collect());

        prop_assert_eq!(success_calls.get(), expected_successes);
        prop_assert_eq!(failure_calls.get(), expected_failures);
        prop_assert_eq!(reduced.len(), expected_successes + expected_failures);
    }

    /// Property: An always-approving gate is the identity
    ///
    /// With immediate approvals no value can arrive while a dialog is open,
    /// so every value passes unchanged and every value is prompted.
    #[test]
    fn prop_approving_gate_is_identity(inputs in input_sequence()) {
        let confirm = Arc::new(StubConfirm::<String>::new());
        let fx = FxService::from_parts(Arc::new(LogNotifier), Arc::clone(&confirm));
        let expected_prompts = inputs.len();

        let passed: Vec<u32> = block_on(
            fx.confirm_filter(stream::iter(inputs.clone()), |v| format!("value {v}"))
                .collect(),
        );

        prop_assert_eq!(passed, inputs);
        prop_assert_eq!(confirm.prompt_count(), expected_prompts);
    }

    /// Property: An always-declining gate drops everything
    ///
    /// Every value is still prompted, and none reaches downstream.
    #[test]
    fn prop_declining_gate_drops_everything(inputs in input_sequence()) {
        let confirm = Arc::new(StubConfirm::<String>::declining());
        let fx = FxService::from_parts(Arc::new(LogNotifier), Arc::clone(&confirm));
        let expected_prompts = inputs.len();

        let passed: Vec<u32> = block_on(
            fx.confirm_filter(stream::iter(inputs), |v| format!("value {v}"))
                .collect(),
        );

        prop_assert!(passed.is_empty(), "declined values must not pass");
        prop_assert_eq!(confirm.prompt_count(), expected_prompts);
    }
}
