//! Default values for Canopy configuration.
//!
//! All hardcoded defaults are centralized here for easy maintenance.

// ============================================================================
// Tree Defaults
// ============================================================================

/// Label of the synthetic node surfaced while discovery runs.
pub const DEFAULT_PLACEHOLDER_LABEL: &str = "Loading...";

// ============================================================================
// Icon Defaults
// ============================================================================

/// Icon for a test that has not run yet.
pub const DEFAULT_ICON_PENDING: &str = "testNotRun.svg";

/// Icon for a node with an execution in flight.
pub const DEFAULT_ICON_SPINNER: &str = "spinner.svg";

/// Icon for a passed test.
pub const DEFAULT_ICON_PASSED: &str = "testPassed.svg";

/// Icon for a failed test.
pub const DEFAULT_ICON_FAILED: &str = "testFailed.svg";

/// Icon for a test that errored before completing.
pub const DEFAULT_ICON_ERRORED: &str = "testErrored.svg";

/// Icon for a suite grouping tests.
pub const DEFAULT_ICON_SUITE: &str = "testSuite.svg";
