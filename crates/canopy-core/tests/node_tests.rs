use canopy_core::{IconTheme, Outcome, TestNode, TestResult};

#[test]
fn test_new_suite() {
    let suite = TestNode::suite(
        "pkg",
        "pkg/pkg_test.go",
        vec![TestNode::test("TestAlpha", "pkg/pkg_test.go")],
    );

    assert_eq!(suite.name, "pkg");
    assert!(suite.is_suite);
    assert_eq!(suite.children.len(), 1);
    assert!(suite.location.is_some());
    assert!(suite.result.is_none());
    assert!(!suite.loading);
}

#[test]
fn test_new_test_is_leaf() {
    let test = TestNode::test("TestAlpha", "pkg/pkg_test.go");

    assert!(!test.is_suite);
    assert!(test.children.is_empty());
    assert!(test.result.is_none());
}

#[test]
fn test_placeholder_has_no_location() {
    let placeholder = TestNode::placeholder("Loading...");

    assert_eq!(placeholder.name, "Loading...");
    assert!(placeholder.location.is_none());
    assert!(!placeholder.is_suite);
    assert!(placeholder.children.is_empty());
}

#[test]
fn test_set_result_ends_loading() {
    let mut test = TestNode::test("TestAlpha", "pkg/pkg_test.go");
    test.set_loading();
    assert!(test.loading);

    let result = TestResult::new("pkg/pkg_test.go", "TestAlpha", Outcome::Passed, "ok");
    test.set_result(result.clone());

    assert!(!test.loading);
    assert_eq!(test.result, Some(result));
    assert_eq!(test.outcome(), Some(Outcome::Passed));
}

#[test]
fn test_icon_reflects_state() {
    let icons = IconTheme::default();
    let mut test = TestNode::test("TestAlpha", "pkg/pkg_test.go");

    assert_eq!(test.icon(&icons), icons.pending);

    test.set_loading();
    assert_eq!(test.icon(&icons), icons.spinner);

    test.set_result(TestResult::new(
        "pkg/pkg_test.go",
        "TestAlpha",
        Outcome::Failed,
        "assertion failed",
    ));
    assert_eq!(test.icon(&icons), icons.failed);

    let suite = TestNode::suite("pkg", "pkg/pkg_test.go", vec![]);
    assert_eq!(suite.icon(&icons), icons.suite);
}

#[test]
fn test_loading_icon_wins_over_previous_result() {
    let icons = IconTheme::default();
    let mut test = TestNode::test("TestAlpha", "pkg/pkg_test.go");

    test.set_result(TestResult::new(
        "pkg/pkg_test.go",
        "TestAlpha",
        Outcome::Passed,
        "ok",
    ));
    test.set_loading();

    // A re-run shows the spinner even though the old result is still attached
    assert_eq!(test.icon(&icons), icons.spinner);
}

#[test]
fn test_tooltip_is_result_detail() {
    let mut test = TestNode::test("TestAlpha", "pkg/pkg_test.go");
    assert_eq!(test.tooltip(), None);

    test.set_result(TestResult::new(
        "pkg/pkg_test.go",
        "TestAlpha",
        Outcome::Errored,
        "build failed",
    ));
    assert_eq!(test.tooltip(), Some("build failed"));
}

#[test]
fn test_outcome_display_names() {
    assert_eq!(Outcome::Passed.display_name(), "passed");
    assert_eq!(Outcome::Failed.display_name(), "failed");
    assert_eq!(Outcome::Errored.display_name(), "errored");
}
