mod common;
use common::{SAMPLE_YAML, doc_with_days, schedule};
use wap_render::config::Config;
use wap_render::layout::{
    ColumnAllocator, DisplayText, DrawOp, EventPlacer, EventRef, PageComposer, TimeMapper,
};
use wap_render::model::Color;
use wap_render::utils::DayTime;

const ROW: i32 = 24;
const COL: i32 = 17;

fn mapper() -> TimeMapper {
    TimeMapper::new(
        DayTime::parse("08:00").unwrap(),
        DayTime::parse("18:00").unwrap(),
        ROW,
        30,
        2,
    )
}

fn src(day: usize, event: usize) -> EventRef {
    EventRef { day, event }
}

#[test]
fn test_event_uses_first_matching_column_only() {
    let (s, _) = schedule(&doc_with_days(
        r#"
  - offset: 0
    events:
      - { title: run, start: "08:00", end: "09:00", columns: [Sport] }
      - { title: shoot, start: "10:00", end: "12:00", columns: [Range, Beso] }
      - { title: special, start: "13:00", end: "14:00", columns: [Beso] }
"#,
    ));
    let events = &s.days[0].events;
    let alloc = ColumnAllocator::new(6, "Beso");
    let assignment = alloc.assign(&alloc.columns_for_day(events.iter())).unwrap();
    let m = mapper();
    let placer = EventPlacer::new(&m, COL);
    let day_x = 102;

    let run = placer.place(&events[0], src(0, 0), day_x, &assignment);
    assert_eq!(run.column.as_deref(), Some("Sport"));
    assert_eq!((run.rect.x, run.rect.width), (day_x + 2 * COL, 2 * COL));
    assert_eq!(run.rect.y, 9 * 2 * ROW);
    assert_eq!(run.rect.height, 2 * ROW);

    // listed in Range and Beso, but only Range's width is used
    let shoot = placer.place(&events[1], src(0, 1), day_x, &assignment);
    assert_eq!(shoot.column.as_deref(), Some("Range"));
    assert_eq!((shoot.rect.x, shoot.rect.width), (day_x, 2 * COL));
    assert_eq!(shoot.rect.y, 288);
    assert_eq!(shoot.rect.height, 96);

    let special = placer.place(&events[2], src(0, 2), day_x, &assignment);
    assert_eq!((special.rect.x, special.rect.width), (day_x + 4 * COL, COL));
}

#[test]
fn test_event_without_matching_column_has_zero_width() {
    let (s, _) = schedule(&doc_with_days(
        r#"
  - offset: 0
    events:
      - { title: a, start: "08:00", end: "09:00", columns: [Sport] }
      - { title: b, start: "08:00", end: "09:00", columns: [Elsewhere] }
"#,
    ));
    let events = &s.days[0].events;
    let alloc = ColumnAllocator::new(6, "Beso");
    let assignment = alloc.assign(&alloc.columns_for_day(events[..1].iter())).unwrap();
    let m = mapper();
    let p = EventPlacer::new(&m, COL).place(&events[1], src(0, 1), 0, &assignment);

    assert_eq!(p.column, None);
    assert_eq!(p.rect.width, 0);
    assert_eq!(p.rect.x, 6 * COL);
}

#[test]
fn test_display_text_composition() {
    let (s, _) = schedule(&doc_with_days(
        r#"
  - offset: 0
    events:
      - { title: A, start: "08:00", end: "09:00", columns: [X], responsible: Lt Meier, location: Room 3 }
      - { title: B, start: "08:00", end: "09:00", columns: [X], location: Room 3 }
      - { title: C, start: "08:00", end: "09:00", columns: [X], responsible: Lt Meier, footnote: true }
      - { title: D, start: "08:00", end: "09:00", columns: [X], description: bring boots }
"#,
    ));
    let texts: Vec<DisplayText> = s.days[0].events.iter().map(DisplayText::for_event).collect();

    assert_eq!(texts[0].title, "A");
    assert_eq!(texts[0].details, vec!["Lt Meier, Room 3".to_string()]);
    // location without responsible stays on the title line
    assert_eq!(texts[1].title, "B, Room 3");
    assert!(texts[1].details.is_empty());
    assert!(texts[2].details.is_empty());
    assert_eq!(texts[3].details, vec!["bring boots".to_string()]);
}

#[test]
fn test_repeating_events_carried_to_every_later_day() {
    let (s, _) = schedule(SAMPLE_YAML);
    let comp = PageComposer::new(&Config::default()).compose(&s).unwrap();

    assert_eq!(comp.pages.len(), 2);
    assert_eq!(comp.pages[0].index, 0);
    assert_eq!(comp.pages[1].index, 1);

    let placed: Vec<(EventRef, u32)> = comp
        .pages
        .iter()
        .flat_map(|p| p.events().map(|(r, d)| (r.source, d)).collect::<Vec<_>>())
        .collect();

    let run = src(0, 0);
    let days_with_run: Vec<u32> = placed
        .iter()
        .filter(|(r, _)| *r == run)
        .map(|(_, d)| *d)
        .collect();
    assert_eq!(days_with_run, vec![0, 1, 8]);

    // the other events appear once each
    assert_eq!(placed.iter().filter(|(r, _)| *r == src(0, 1)).count(), 1);
    assert_eq!(placed.iter().filter(|(r, _)| *r == src(2, 0)).count(), 1);
}

#[test]
fn test_repeating_drawn_before_own_events() {
    let (s, _) = schedule(&doc_with_days(
        r#"
  - offset: 0
    events:
      - { title: base, start: "08:00", end: "09:00", columns: [Sport] }
  - offset: 1
    events:
      - { title: roll call, start: "08:00", end: "08:30", columns: [Sport], repeats: daily }
  - offset: 2
    events:
      - { title: override, start: "08:00", end: "08:30", columns: [Sport] }
"#,
    ));
    let comp = PageComposer::new(&Config::default()).compose(&s).unwrap();
    let order: Vec<(EventRef, u32)> = comp.pages[0].events().map(|(r, d)| (r.source, d)).collect();

    assert_eq!(
        order,
        vec![
            (src(0, 0), 0),
            (src(1, 0), 1),
            (src(1, 0), 2),
            (src(2, 0), 2),
        ]
    );

    // both occupy the same rectangle; the later one paints over
    let rects: Vec<_> = comp.pages[0].events().map(|(r, _)| *r).collect();
    assert_eq!(
        (rects[2].x, rects[2].y, rects[2].width, rects[2].height),
        (rects[3].x, rects[3].y, rects[3].width, rects[3].height)
    );
}

#[test]
fn test_repeating_columns_count_towards_day_budget() {
    let (s, _) = schedule(&doc_with_days(
        r#"
  - offset: 0
    events:
      - { title: r, start: "08:00", end: "09:00", columns: [A, B, C], repeats: daily }
  - offset: 1
    events:
      - { title: x, start: "10:00", end: "11:00", columns: [D, E, F] }
"#,
    ));
    let err = PageComposer::new(&Config::default()).compose(&s).unwrap_err();
    assert!(err.to_string().contains("too many columns"));
}

#[test]
fn test_category_colors_and_default_fill() {
    let (s, _) = schedule(SAMPLE_YAML);
    let comp = PageComposer::new(&Config::default()).compose(&s).unwrap();

    let fills: Vec<(EventRef, Color)> = comp.pages[0]
        .ops
        .iter()
        .filter_map(|op| match op {
            DrawOp::Event { rect, fill, .. } => Some((rect.source, *fill)),
            _ => None,
        })
        .collect();

    assert_eq!(fills[0], (src(0, 0), Color::rgba(1.0, 0.0, 0.0, 1.0)));
    assert_eq!(fills[1], (src(0, 1), Color::rgba(0.0, 1.0, 0.0, 128.0 / 255.0)));
    // "Shooting" has no category and "default" is not defined
    let shooting = fills.iter().find(|(r, _)| *r == src(1, 0)).unwrap();
    assert_eq!(shooting.1, Color::DEFAULT_FILL);
}

#[test]
fn test_page_draws_grid_before_events() {
    let (s, _) = schedule(SAMPLE_YAML);
    let comp = PageComposer::new(&Config::default()).compose(&s).unwrap();
    let ops = &comp.pages[0].ops;

    let first_event = ops
        .iter()
        .position(|op| matches!(op, DrawOp::Event { .. }))
        .unwrap();
    let last_lines = ops
        .iter()
        .rposition(|op| matches!(op, DrawOp::Lines { .. }))
        .unwrap();
    let translate = ops
        .iter()
        .position(|op| matches!(op, DrawOp::Translate { .. }))
        .unwrap();

    assert!(translate < last_lines);
    assert!(last_lines < first_event);
    assert!(ops[first_event..]
        .iter()
        .all(|op| matches!(op, DrawOp::Event { .. })));
}

#[test]
fn test_day_headers_use_first_day() {
    let (s, _) = schedule(SAMPLE_YAML);
    let comp = PageComposer::new(&Config::default()).compose(&s).unwrap();
    let texts = |page: usize| -> Vec<String> {
        comp.pages[page]
            .ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { text, .. } => Some(text.clone()),
                _ => None,
            })
            .collect()
    };

    assert!(texts(0).contains(&"Montag, 22.04.2024".to_string()));
    assert!(texts(0).contains(&"Sonntag, 28.04.2024".to_string()));
    assert!(texts(1).contains(&"Dienstag, 30.04.2024".to_string()));
    assert!(texts(0).contains(&"Detachement 6 - Woche 1".to_string()));
    assert!(texts(0).contains(&"1/2".to_string()));
}

#[test]
fn test_empty_document_still_has_one_page() {
    let (s, _) = schedule(&doc_with_days("  []"));
    let comp = PageComposer::new(&Config::default()).compose(&s).unwrap();
    assert_eq!(comp.pages.len(), 1);
    assert_eq!(comp.pages[0].events().count(), 0);
}

#[test]
fn test_column_headers_label_each_slot() {
    let (s, _) = schedule(&doc_with_days(
        r#"
  - offset: 0
    events:
      - { title: a, start: "08:00", end: "09:00", columns: [Zug1] }
      - { title: b, start: "08:00", end: "09:00", columns: [Zug2] }
  - offset: 1
    events: []
"#,
    ));
    let comp = PageComposer::new(&Config::default()).compose(&s).unwrap();

    // grid is 20 rows of 24pt; headers sit just above it
    let headers: Vec<(String, f32, f32)> = comp.pages[0]
        .ops
        .iter()
        .filter_map(|op| match op {
            DrawOp::Text { x, y, text, bold, .. } if *bold && *y == 484.0 => {
                Some((text.clone(), *x, *y))
            }
            _ => None,
        })
        .collect();

    let labels: Vec<&str> = headers.iter().map(|(t, _, _)| t.as_str()).collect();
    assert_eq!(labels, vec!["Zug1", "Zug2", "Beso"]);

    // "Zug1" is 15.4pt wide, centred in slots of 34, 34 and 17 points
    let xs: Vec<f32> = headers.iter().map(|(_, x, _)| *x).collect();
    assert!((xs[0] - 9.3).abs() < 1e-3, "{xs:?}");
    assert!((xs[1] - (2.0 * COL as f32 + 9.3)).abs() < 1e-3, "{xs:?}");
    assert!((xs[2] - (4.0 * COL as f32 + 0.8)).abs() < 1e-3, "{xs:?}");

    // headers come before any event is painted
    let first_header = comp.pages[0]
        .ops
        .iter()
        .position(|op| matches!(op, DrawOp::Text { text, .. } if text == "Zug1"))
        .unwrap();
    let first_event = comp.pages[0]
        .ops
        .iter()
        .position(|op| matches!(op, DrawOp::Event { .. }))
        .unwrap();
    assert!(first_header < first_event);
}
