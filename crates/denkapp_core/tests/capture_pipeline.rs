use chrono::{NaiveDate, NaiveDateTime};
use denkapp_core::{analyze, capture, classify, split, Intent, ItemKind, AGENDA_TAG};

fn wednesday_morning() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 5, 1)
        .unwrap()
        .and_hms_opt(9, 0, 0)
        .unwrap()
}

fn six_pm(y: i32, m: u32, d: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(18, 0, 0)
        .unwrap()
}

#[test]
fn capture_end_to_end_sample() {
    let outcome = capture(
        "Bel Jan morgen.\nTe bespreken: begroting CBS.\nIdee: nieuwe signalisatie.",
        wednesday_morning(),
    );

    assert_eq!(outcome.items.len(), 2);

    let task = &outcome.items[0];
    assert_eq!(task.kind, ItemKind::Task);
    assert_eq!(task.title, "Bel Jan morgen");
    assert_eq!(task.due_at, Some(six_pm(2024, 5, 2)));

    let agenda = &outcome.items[1];
    assert_eq!(agenda.kind, ItemKind::Agenda);
    assert_eq!(agenda.title, "Te bespreken: begroting CBS");
    assert_eq!(agenda.due_at, None);
    assert!(agenda.tags.contains(AGENDA_TAG));
    assert!(agenda.tags.contains("CBS"));

    assert!(outcome.mentioned_tags.contains("Mobiliteit"));
}

#[test]
fn agenda_phrase_always_wins_over_date_words() {
    for sentence in [
        "te bespreken vandaag",
        "Bel Jan morgen, te bespreken",
        "Plan overleg vrijdag - TE BESPREKEN",
    ] {
        assert_eq!(classify(sentence), Intent::Agenda, "{sentence}");
        let outcome = capture(sentence, wednesday_morning());
        assert_eq!(outcome.items.len(), 1);
        assert_eq!(outcome.items[0].kind, ItemKind::Agenda);
        assert_eq!(outcome.items[0].due_at, None);
        assert!(outcome.items[0].tags.contains(AGENDA_TAG));
    }
}

#[test]
fn items_follow_sentence_order() {
    let outcome = capture(
        "1) Mail Piet\n2) Koop melk\n3) Te bespreken: feest\n4) Schrijf verslag",
        wednesday_morning(),
    );
    let titles: Vec<_> = outcome.items.iter().map(|item| item.title.as_str()).collect();
    assert_eq!(
        titles,
        vec!["Mail Piet", "Koop melk", "Te bespreken: feest", "Schrijf verslag"]
    );
}

#[test]
fn capture_is_deterministic() {
    let raw = "Bel de krant zondag; idee: fietspad langs de school\nmoet nog thuis poetsen";
    assert_eq!(
        capture(raw, wednesday_morning()),
        capture(raw, wednesday_morning())
    );
}

#[test]
fn analyze_reports_every_sentence() {
    let analyses = analyze("Bel Jan. Mooi weer. Misschien morgen", wednesday_morning());
    let intents: Vec<_> = analyses.iter().map(|analysis| analysis.intent).collect();
    assert_eq!(intents, vec![Intent::Task, Intent::Note, Intent::Idea]);
    assert_eq!(analyses[2].due_at, Some(six_pm(2024, 5, 2)));
}

#[test]
fn separators_only_input_is_empty() {
    assert!(split("...;;\n\n").is_empty());
    let outcome = capture("...;;\n\n", wednesday_morning());
    assert!(outcome.items.is_empty());
    assert!(outcome.mentioned_tags.is_empty());
}

#[test]
fn captured_item_wire_shape() {
    let outcome = capture("Bel de journalist vandaag", wednesday_morning());
    let json = serde_json::to_value(&outcome.items[0]).unwrap();
    assert_eq!(json["type"], "task");
    assert_eq!(json["title"], "Bel de journalist vandaag");
    assert_eq!(json["due_at"], "2024-05-01T18:00:00");
    assert_eq!(json["tags"], serde_json::json!(["Persbericht"]));
}
