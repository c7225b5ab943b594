use super::*;

#[test]
fn json_contains_summary_and_records() {
    let records = vec![
        InvalidObjectRecord {
            object_name: "Sphere".to_string(),
            reasons: vec!["a".to_string(), "b".to_string()],
        },
        InvalidObjectRecord {
            object_name: "Camera".to_string(),
            reasons: vec!["c".to_string()],
        },
    ];

    let output = JsonFormatter.format(&records).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(parsed["summary"]["total_invalid_objects"], 2);
    assert_eq!(parsed["summary"]["total_reasons"], 3);
    assert_eq!(parsed["invalid_objects"][0]["object_name"], "Sphere");
    assert_eq!(parsed["invalid_objects"][1]["reasons"][0], "c");
}

#[test]
fn json_empty_records() {
    let output = JsonFormatter.format(&[]).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(parsed["summary"]["total_invalid_objects"], 0);
    assert!(parsed["invalid_objects"].as_array().unwrap().is_empty());
}

#[test]
fn json_ends_with_newline() {
    let output = JsonFormatter.format(&[]).unwrap();
    assert!(output.ends_with("}\n"));
    assert!(!output.ends_with("\n\n"));
}
