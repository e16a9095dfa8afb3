use super::*;

use crate::counter::LanguageTally;
use crate::output::{LanguageReport, RunReport};

fn sample_report() -> RunReport {
    RunReport {
        languages: vec![
            LanguageReport {
                name: "C/C++".to_string(),
                tally: LanguageTally {
                    files: 2,
                    code: 10,
                    comment: 4,
                    whitespace: 3,
                },
            },
            LanguageReport {
                name: "Shell".to_string(),
                tally: LanguageTally {
                    files: 1,
                    code: 5,
                    comment: 1,
                    whitespace: 0,
                },
            },
        ],
    }
}

#[test]
fn json_output_is_valid_and_complete() {
    let output = JsonFormatter.format(&sample_report()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(value["summary"]["total_files"], 3);
    assert_eq!(value["summary"]["code"], 15);
    assert_eq!(value["summary"]["comments"], 5);
    assert_eq!(value["summary"]["whitespace"], 3);

    let languages = value["languages"].as_array().unwrap();
    assert_eq!(languages.len(), 2);
    assert_eq!(languages[0]["name"], "C/C++");
    assert_eq!(languages[0]["files"], 2);
    assert_eq!(languages[1]["name"], "Shell");
    assert_eq!(languages[1]["code"], 5);
}

#[test]
fn json_preserves_registration_order() {
    let output = JsonFormatter.format(&sample_report()).unwrap();
    let cpp_pos = output.find("C/C++").unwrap();
    let shell_pos = output.find("Shell").unwrap();

    assert!(cpp_pos < shell_pos);
}

#[test]
fn empty_report_serializes() {
    let output = JsonFormatter.format(&RunReport::default()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(value["summary"]["total_files"], 0);
    assert!(value["languages"].as_array().unwrap().is_empty());
}
