mod common;
use common::{SAMPLE_YAML, doc_with_days, parse_yaml, schedule, write_doc};
use wap_render::diagnostics::DiagnosticKind;
use wap_render::errors::AppError;
use wap_render::model::schema::{FieldType, extract_types, load_schema};
use wap_render::model::{Color, Schedule, load_document};
use wap_render::utils::{DayTime, military_time};

#[test]
fn test_day_time_parsing() {
    assert_eq!(DayTime::parse("09:30").unwrap().minutes(), 570);
    assert_eq!(DayTime::from_minutes(570).unwrap(), DayTime::parse("09:30").unwrap());
    assert_eq!(military_time(23, 59), "2359");
    assert_eq!(DayTime::from_minutes(75).unwrap().to_string(), "01:15");

    assert!(matches!(DayTime::parse("25:00"), Err(AppError::InvalidTime(_))));
    assert!(matches!(DayTime::parse("nine"), Err(AppError::InvalidTime(_))));
    assert!(DayTime::from_minutes(1440).is_err());
    assert!(DayTime::from_minutes(-1).is_err());
}

#[test]
fn test_color_parsing() {
    assert_eq!(Color::parse("#FF0000").unwrap(), Color::rgba(1.0, 0.0, 0.0, 1.0));
    assert_eq!(Color::parse("00ff00").unwrap(), Color::rgba(0.0, 1.0, 0.0, 1.0));
    assert_eq!(Color::parse("#000000FF").unwrap(), Color::rgba(0.0, 0.0, 0.0, 1.0));
    assert_eq!(Color::parse("#00000000").unwrap().a, 0.0);

    for bad in ["", "invalid", "#12345", "#gg0000", "#1234567"] {
        assert!(
            matches!(Color::parse(bad), Err(AppError::InvalidColor(_))),
            "{bad} should not parse"
        );
    }
}

#[test]
fn test_sample_document_normalised() {
    let (s, diags) = schedule(SAMPLE_YAML);

    assert_eq!(s.meta.title, "Detachement 6 - Woche 1");
    assert_eq!(s.meta.version, "v1.2");
    assert_eq!(s.meta.start_hour(), 8);
    assert_eq!(s.meta.end_hour(), 18);
    assert_eq!(s.days.len(), 3);
    assert_eq!(s.event_count(), 4);
    assert_eq!(s.categories.len(), 2);

    let run = &s.days[0].events[0];
    assert!(run.repeats);
    assert_eq!(run.category, "sport");

    let map = &s.days[0].events[1];
    assert_eq!(map.start, DayTime::parse("09:00").unwrap());
    assert_eq!(map.end, DayTime::parse("10:30").unwrap());
    assert!(!map.repeats);

    let shooting = &s.days[1].events[0];
    assert_eq!(shooting.category, "default");
    assert!(shooting.appears_in("Beso"));

    assert!(s.days[2].events[0].footnote);
    assert!(diags.is_empty(), "{diags:?}");
}

#[test]
fn test_unknown_category_falls_back_to_grey() {
    let (s, diags) = schedule(&doc_with_days(
        r#"
  - offset: 0
    events:
      - { title: x, start: "08:00", end: "09:00", columns: [A], category: nope }
"#,
    ));
    assert_eq!(s.categories.color_for("nope"), Color::DEFAULT_FILL);
    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].kind, DiagnosticKind::UnknownCategory);
}

#[test]
fn test_validation_warnings() {
    let (_, diags) = schedule(&doc_with_days(
        r#"
  - offset: 0
    events:
      - { title: short, start: "09:00", end: "09:05", columns: [A] }
      - { title: early, start: "07:00", end: "08:30", columns: [A] }
      - { title: late, start: "17:00", end: "19:00", columns: [A] }
      - { title: nowhere, start: "10:00", end: "11:00", columns: [] }
  - offset: 0
    events: []
"#,
    ));
    let kinds: Vec<DiagnosticKind> = diags.iter().map(|d| d.kind).collect();
    assert_eq!(
        kinds,
        vec![
            DiagnosticKind::ShortEvent,
            DiagnosticKind::OutsideTimeWindow,
            DiagnosticKind::OutsideTimeWindow,
            DiagnosticKind::NoColumns,
            DiagnosticKind::DuplicateOffset,
        ]
    );
}

#[test]
fn test_reversed_event_is_format_error() {
    let doc = parse_yaml(&doc_with_days(
        r#"
  - offset: 0
    events:
      - { title: back, start: "10:00", end: "09:00", columns: [A] }
"#,
    ));
    let err = Schedule::from_document(&doc, "default").unwrap_err();
    assert!(matches!(err, AppError::InvalidEvent(_)));
}

#[test]
fn test_zero_duration_event_is_accepted() {
    let (s, diags) = schedule(&doc_with_days(
        r#"
  - offset: 0
    events:
      - { title: instant, start: "10:00", end: 600, columns: [A] }
"#,
    ));
    assert_eq!(s.days[0].events[0].duration_minutes(), 0);
    assert_eq!(diags[0].kind, DiagnosticKind::ShortEvent);
}

#[test]
fn test_time_window_must_be_ordered() {
    let doc = parse_yaml(
        r#"
meta:
  startTime: "18:00"
  endTime: "08:00"
days: []
"#,
    );
    let err = Schedule::from_document(&doc, "default").unwrap_err();
    assert!(matches!(err, AppError::Configuration(_)));
}

#[test]
fn test_bad_category_color_is_fatal() {
    let doc = parse_yaml(
        r##"
meta:
  startTime: "08:00"
  endTime: "18:00"
categories:
  - identifier: x
    color: "#12"
"##,
    );
    let err = Schedule::from_document(&doc, "default").unwrap_err();
    assert!(matches!(err, AppError::InvalidColor(_)));
}

#[test]
fn test_load_document_yaml_and_json() {
    let yaml = write_doc("model_load_yaml", "yaml", SAMPLE_YAML);
    assert_eq!(load_document(&yaml).unwrap().days.len(), 3);

    let json = write_doc(
        "model_load_json",
        "json",
        r#"{"meta":{"title":"J","startTime":480,"endTime":"12:00"},
            "days":[{"offset":0,"events":[{"title":"a","start":480,"end":"09:00","columns":["A"]}]}]}"#,
    );
    let doc = load_document(&json).unwrap();
    let (s, _) = Schedule::from_document(&doc, "default").unwrap();
    assert_eq!(s.meta.start, DayTime::parse("08:00").unwrap());
    assert_eq!(s.days[0].events[0].duration_minutes(), 60);

    let txt = write_doc("model_load_txt", "txt", "meta: {}");
    assert!(matches!(load_document(&txt), Err(AppError::UnsupportedInput(_))));
}

#[test]
fn test_schema_type_extraction() {
    let schema: serde_json::Value = serde_json::from_str(
        r#"{
            "type": "object",
            "properties": {
                "meta": {"type": "object"},
                "days": {"type": "array", "items": {"type": "object"}},
                "tags": {"type": "array", "items": {"type": "string"}},
                "weeks": {"type": "integer"},
                "free": {}
            }
        }"#,
    )
    .unwrap();
    let types = extract_types(&schema);

    assert_eq!(types["meta"], FieldType::Object);
    assert_eq!(types["days"], FieldType::Array(Box::new(FieldType::Object)));
    assert_eq!(types["tags"].to_string(), "array<string>");
    assert_eq!(types["weeks"], FieldType::Integer);
    assert_eq!(types["free"], FieldType::Any);

    let not_object = serde_json::json!({"type": "array"});
    assert!(extract_types(&not_object).is_empty());
}

#[test]
fn test_load_schema_from_file() {
    let path = write_doc(
        "model_schema",
        "json",
        r#"{"type":"object","properties":{"meta":{"type":"object"}}}"#,
    );
    let (_, types) = load_schema(&path).unwrap();
    assert_eq!(types.len(), 1);

    let missing = std::env::temp_dir().join("does_not_exist_waprender_schema.json");
    assert!(matches!(load_schema(&missing), Err(AppError::Io(_))));
}
