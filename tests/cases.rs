use std::{fs, path::Path, str::FromStr};

use bigdecimal::{BigDecimal, RoundingMode};
use walkdir::WalkDir;

/// One line of a `.cases` file:
///
/// ```text
/// <expression> [; <input> <input> ...] => <expected value | !ErrorName>
/// ```
struct Case {
    expression: String,
    inputs:     Vec<BigDecimal>,
    expected:   Expected,
}

enum Expected {
    Value(BigDecimal),
    Error(String),
}

#[test]
fn case_files_evaluate() {
    let mut count = 0;

    for entry in WalkDir::new("tests/cases").into_iter()
                                            .filter_map(Result::ok)
                                            .filter(|e| {
                                                e.path().extension().is_some_and(|ext| ext == "cases")
                                            })
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (line_no, line) in content.lines().enumerate() {
            let Some(case) = parse_case(line, path, line_no + 1) else {
                continue;
            };
            count += 1;
            check(&case, path, line_no + 1);
        }
    }

    assert!(count > 0, "No cases found in tests/cases");
}

fn check(case: &Case, path: &Path, line_no: usize) {
    let outcome = mathfn::evaluate(&case.expression, &case.inputs);
    match (&case.expected, outcome) {
        (Expected::Value(expected), Ok(value)) => {
            assert_eq!(value.with_scale_round(20, RoundingMode::HalfUp),
                       expected.with_scale_round(20, RoundingMode::HalfUp),
                       "{path:?}:{line_no}: {}",
                       case.expression);
        },
        (Expected::Error(name), Err(e)) => {
            let debug = format!("{e:?}");
            assert!(debug.contains(name.as_str()),
                    "{path:?}:{line_no}: {} failed with {debug}, expected {name}",
                    case.expression);
        },
        (Expected::Value(expected), Err(e)) => {
            panic!("{path:?}:{line_no}: {} failed with {e}, expected {expected}",
                   case.expression)
        },
        (Expected::Error(name), Ok(value)) => {
            panic!("{path:?}:{line_no}: {} evaluated to {value}, expected {name}",
                   case.expression)
        },
    }
}

fn parse_case(line: &str, path: &Path, line_no: usize) -> Option<Case> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }

    let (lhs, expected) =
        line.split_once("=>").unwrap_or_else(|| panic!("{path:?}:{line_no}: missing '=>'"));
    let (expression, inputs) = lhs.split_once(';').unwrap_or((lhs, ""));

    let inputs = inputs.split_whitespace()
                       .map(|v| {
                           BigDecimal::from_str(v).unwrap_or_else(|e| {
                                                      panic!("{path:?}:{line_no}: bad input {v}: {e}")
                                                  })
                       })
                       .collect();

    let expected = expected.trim();
    let expected = match expected.strip_prefix('!') {
        Some(name) => Expected::Error(name.to_string()),
        None => Expected::Value(BigDecimal::from_str(expected).unwrap_or_else(|e| {
                                    panic!("{path:?}:{line_no}: bad expected value {expected}: {e}")
                                })),
    };

    Some(Case { expression: expression.trim().to_string(),
                inputs,
                expected })
}
