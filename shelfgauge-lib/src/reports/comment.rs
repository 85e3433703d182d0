use super::format_report;
use crate::entity::{Suite, SuiteTest};
use core::fmt::Write;

const SHORT_REF_LEN: usize = 7;

/// Build the Markdown comment describing `current`, compared with `previous` when given.
///
/// Each test of the current suite becomes one bullet, in reporting order. Tests
/// are matched with the previous suite by name; tests lacking a name or a value
/// are left out.
#[must_use]
pub fn comment_body(title: &str, current: &Suite, previous: Option<&Suite>) -> String {
    let mut body = String::new();

    let name = current.name.as_deref().unwrap_or("unnamed suite");
    let _ = write!(body, "### {title}: {name}");
    if let Some(git_ref) = &current.git_ref {
        let short: String = git_ref.chars().take(SHORT_REF_LEN).collect();
        let _ = write!(body, " @ `{short}`");
    }
    body.push_str("\n\n");

    let mut lines = 0;
    for measurement in current.tests().iter().filter_map(SuiteTest::measurement) {
        let old = previous
            .and_then(|suite| suite.test_named(&measurement.name))
            .and_then(SuiteTest::measurement);

        let _ = writeln!(body, "- {}", format_report(&measurement, old.as_ref()));
        lines += 1;
    }

    if lines == 0 {
        body.push_str("_No measurements reported._\n");
    }

    body
}

#[cfg(test)]
mod tests {
    use super::*;

    fn suite(name: &str, tests: Vec<SuiteTest>) -> Suite {
        Suite {
            name: Some(name.into()),
            git_ref: Some("abc1234def5678".into()),
            tests: Some(tests),
            ..Suite::default()
        }
    }

    #[test]
    fn test_comment_against_previous() {
        let previous = suite("nightly", vec![SuiteTest::new("parse", 100.0), SuiteTest::new("render", 100.0)]);
        let current = suite(
            "nightly",
            vec![SuiteTest::new("parse", 90.0), SuiteTest::new("render", 105.0), SuiteTest::new("startup", 12.0)],
        );

        let body = comment_body("Benchmark results", &current, Some(&previous));
        insta::assert_snapshot!(body, @r"
        ### Benchmark results: nightly @ `abc1234`

        - `parse`: 90 (-10.00%)
        - `render`: 105 (+5.00%)
        - `startup`: 12 (new)
        ");
    }

    #[test]
    fn test_comment_without_previous_marks_everything_new() {
        let current = suite("nightly", vec![SuiteTest::new("parse", 1.0), SuiteTest::new("render", 2.0)]);
        let body = comment_body("Results", &current, None);
        assert_eq!(body.matches("(new)").count(), 2);
    }

    #[test]
    fn test_comment_skips_incomplete_tests() {
        let current = suite(
            "nightly",
            vec![
                SuiteTest {
                    name: None,
                    value: Some(3.0),
                },
                SuiteTest::new("parse", 1.0),
            ],
        );

        let body = comment_body("Results", &current, None);
        assert_eq!(body.lines().filter(|line| line.starts_with("- ")).count(), 1);
    }

    #[test]
    fn test_comment_without_tests() {
        let body = comment_body("Results", &Suite::default(), None);
        assert!(body.starts_with("### Results: unnamed suite\n"));
        assert!(body.contains("No measurements reported"));
    }
}
