//! Property tests for the laws every structural rule must obey: verdicts do
//! not depend on step order or on the encoding of `needs`, and evaluation
//! is repeatable.

use proptest::prelude::*;
use wfcheck_core::DocumentNode;
use wfcheck_rules::catalog::{self, PRIMARY_WORKFLOW, REQUIRED_STEPS};
use wfcheck_rules::Report;

fn step(name: &str) -> DocumentNode {
    DocumentNode::mapping([("name", DocumentNode::string(name))])
}

fn workflow(needs: DocumentNode, step_names: &[String]) -> DocumentNode {
    DocumentNode::mapping([(
        "jobs",
        DocumentNode::mapping([(
            "security-scan",
            DocumentNode::mapping([
                ("needs", needs),
                (
                    "permissions",
                    DocumentNode::mapping([("security-events", DocumentNode::string("write"))]),
                ),
                (
                    "steps",
                    DocumentNode::sequence(step_names.iter().map(|n| step(n))),
                ),
            ]),
        )]),
    )])
}

fn run(document: &DocumentNode) -> Report {
    catalog::primary_scan_job(PRIMARY_WORKFLOW)
        .unwrap()
        .run(Ok(document))
}

fn outcomes(report: &Report) -> Vec<(String, bool)> {
    report
        .verdicts()
        .iter()
        .map(|v| (v.rule_id().to_string(), v.passed()))
        .collect()
}

/// A subset of the required steps plus some unrelated ones.
fn step_names() -> impl Strategy<Value = Vec<String>> {
    let required = prop::sample::subsequence(REQUIRED_STEPS.to_vec(), 0..=REQUIRED_STEPS.len())
        .prop_map(|names| names.into_iter().map(str::to_string).collect::<Vec<_>>());
    let extra = prop::collection::vec("[A-Z][a-z ]{0,20}", 0..4);
    (required, extra).prop_map(|(mut required, extra)| {
        required.extend(extra);
        required
    })
}

proptest! {
    /// Permuting the steps never changes any verdict.
    #[test]
    fn step_order_is_irrelevant(
        (names, shuffled) in step_names().prop_flat_map(|names| {
            let shuffled = Just(names.clone()).prop_shuffle();
            (Just(names), shuffled)
        })
    ) {
        let a = run(&workflow(DocumentNode::string("build"), &names));
        let b = run(&workflow(DocumentNode::string("build"), &shuffled));
        prop_assert_eq!(outcomes(&a), outcomes(&b));
    }

    /// `needs: X` and `needs: [X]` give identical reports.
    #[test]
    fn needs_encoding_is_irrelevant(job in "[a-z][a-z-]{0,12}", names in step_names()) {
        let scalar = workflow(DocumentNode::string(job.clone()), &names);
        let list = workflow(DocumentNode::sequence([DocumentNode::string(job)]), &names);
        prop_assert_eq!(run(&scalar), run(&list));
    }

    /// Evaluation has no hidden state.
    #[test]
    fn evaluation_is_idempotent(names in step_names()) {
        let doc = workflow(DocumentNode::string("build"), &names);
        prop_assert_eq!(run(&doc), run(&doc));
    }

    /// A report passes iff all of its verdicts pass.
    #[test]
    fn report_passes_iff_all_verdicts_pass(names in step_names()) {
        let report = run(&workflow(DocumentNode::string("build"), &names));
        prop_assert_eq!(report.passed(), report.verdicts().iter().all(|v| v.passed()));
        let all_steps = REQUIRED_STEPS.iter().all(|s| names.iter().any(|n| n.contains(s)));
        prop_assert_eq!(report.passed(), all_steps);
    }
}
