mod common;

use common::TestContext;
use lessonbot::app::api::{self, MatchOutcome, TableKind};
use predicates::prelude::*;
use serial_test::serial;

#[test]
fn match_prints_first_matching_row() {
    let ctx = TestContext::new();
    ctx.write_default_data();

    ctx.cli()
        .args(["match", "My teenager has ACNE and dry skin"])
        .assert()
        .success()
        .stdout(predicate::str::contains("problem_keyword: acne"))
        .stdout(predicate::str::contains("audience: Teens with breakouts"))
        .stdout(predicate::str::contains("dry skin").not());
}

#[test]
fn match_alias_searches_problem_table() {
    let ctx = TestContext::new();
    ctx.write_default_data();

    ctx.cli()
        .args(["m", "so PUFFY this morning", "--table", "problem"])
        .assert()
        .success()
        .stdout(predicate::str::contains("lesson_idea: Morning de-puffing in five minutes"));
}

#[test]
fn match_reports_when_nothing_matches() {
    let ctx = TestContext::new();
    ctx.write_default_data();

    ctx.cli()
        .args(["match", "oily scalp"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No matching recommendation found."));
}

#[test]
fn missing_data_file_is_reported_without_failing() {
    let ctx = TestContext::new();
    ctx.write_file("recommendations_final.csv", common::RECOMMENDATIONS_CSV);

    ctx.cli()
        .args(["match", "acne"])
        .assert()
        .success()
        .stdout(predicate::str::contains("🚨"))
        .stdout(predicate::str::contains("problem_recommendations_final.csv"));
}

#[test]
fn configured_data_paths_are_used() {
    let ctx = TestContext::new();
    ctx.write_file("data/rec.csv", common::RECOMMENDATIONS_CSV);
    ctx.write_file("data/problems.csv", common::PROBLEM_RECOMMENDATIONS_CSV);
    ctx.write_config(
        "[data]\nrecommendations = \"data/rec.csv\"\nproblem_recommendations = \"data/problems.csv\"\n",
    );

    ctx.cli()
        .args(["match", "acne"])
        .assert()
        .success()
        .stdout(predicate::str::contains("problem_keyword: acne"));
}

#[test]
#[serial]
fn api_match_uses_current_directory() {
    let ctx = TestContext::new();
    ctx.write_default_data();

    let outcome = ctx
        .with_work_dir(|| api::match_keyword("puffy eyes", TableKind::ProblemRecommendations, None))
        .expect("match should succeed");

    match outcome {
        MatchOutcome::Matched { row, .. } => assert_eq!(row.get("audience"), Some("Busy parents")),
        other => panic!("expected a match, got {:?}", other),
    }
}

#[test]
#[serial]
fn api_match_without_data_returns_sentinel() {
    let ctx = TestContext::new();

    let outcome = ctx
        .with_work_dir(|| api::match_keyword("acne", TableKind::Recommendations, None))
        .expect("missing data is not an error");

    assert!(matches!(outcome, MatchOutcome::DataUnavailable { .. }));
}
