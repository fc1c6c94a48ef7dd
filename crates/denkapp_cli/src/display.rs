//! Plain-text rendering for terminal output.

use chrono::{Datelike, NaiveDateTime};
use denkapp_core::{CaptureReport, InboxEntry, ItemRecord, Mindmap, Profile, SentenceAnalysis};

const WEEKDAY_SHORT: [&str; 7] = ["zo", "ma", "di", "wo", "do", "vr", "za"];

/// `wo 01/05 18:00`
pub fn format_due(value: NaiveDateTime) -> String {
    let weekday = WEEKDAY_SHORT[value.weekday().num_days_from_sunday() as usize];
    format!("{weekday} {}", value.format("%d/%m %H:%M"))
}

fn format_tags(tags: &[String]) -> String {
    if tags.is_empty() {
        String::new()
    } else {
        format!("  [{}]", tags.join(", "))
    }
}

fn item_line(item: &ItemRecord) -> String {
    let marker = match (item.is_completable(), item.done) {
        (false, _) => "•",
        (true, Some(true)) => "[x]",
        (true, _) => "[ ]",
    };
    let due = item
        .due_at
        .map(|value| format!("  ({})", format_due(value)))
        .unwrap_or_default();
    format!(
        "{marker} {}{due}{}  {}",
        item.title,
        format_tags(&item.tags),
        item.id
    )
}

fn report_summary(report: &CaptureReport, profile: Profile) -> String {
    format!(
        "{} item(s) opgeslagen in {}, {} nieuw(e) onderwerp(en).",
        report.items.len(),
        profile.label(),
        report.topics_created
    )
}

pub fn print_capture_report(report: &CaptureReport, profile: Profile) {
    if report.inbox_id.is_none() {
        println!("Niets om op te slaan.");
        return;
    }
    for item in &report.items {
        println!("{}", item_line(item));
    }
    if !report.mentioned_tags.is_empty() {
        println!("Onderwerpen: {}", report.mentioned_tags.join(", "));
    }
    println!("{}", report_summary(report, profile));
}

pub fn print_tasks(tasks: &[ItemRecord]) {
    if tasks.is_empty() {
        println!("Geen taken.");
    }
    for task in tasks {
        println!("{}", item_line(task));
    }
}

pub fn print_agenda(items: &[ItemRecord]) {
    if items.is_empty() {
        println!("Niets te bespreken.");
    }
    for item in items {
        println!("{}", item_line(item));
    }
}

pub fn print_mindmap(mindmap: &Mindmap) {
    for group in &mindmap.groups {
        println!("{} ({})", group.topic, group.items.len());
        for item in &group.items {
            println!("  {}", item_line(item));
        }
    }
    if !mindmap.untagged.is_empty() {
        println!("Zonder onderwerp ({})", mindmap.untagged.len());
        for item in &mindmap.untagged {
            println!("  {}", item_line(item));
        }
    }
}

pub fn print_inbox(entries: &[InboxEntry]) {
    for entry in entries {
        println!("{}  {}", entry.created_at.format("%d/%m/%Y %H:%M"), entry.raw_text);
    }
}

pub fn print_analyses(analyses: &[SentenceAnalysis]) {
    for analysis in analyses {
        let due = analysis
            .due_at
            .map(format_due)
            .unwrap_or_else(|| "-".to_string());
        let tags: Vec<String> = analysis.tags.iter().cloned().collect();
        println!(
            "{:<7} {:<14} {}{}",
            analysis.intent.as_str(),
            due,
            analysis.text,
            format_tags(&tags)
        );
    }
}

#[cfg(test)]
mod tests {
    use super::{format_due, item_line, report_summary};
    use chrono::NaiveDate;
    use denkapp_core::{CaptureReport, CapturedItem, ItemKind, ItemRecord, Profile};
    use std::collections::BTreeSet;

    fn record(kind: ItemKind) -> ItemRecord {
        let now = NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        let captured = CapturedItem {
            title: "Bel Jan".to_string(),
            kind,
            due_at: None,
            tags: BTreeSet::new(),
        };
        ItemRecord::from_captured(&captured, Profile::Work, now, None)
    }

    #[test]
    fn due_uses_dutch_weekday_abbreviation() {
        let due = NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_opt(18, 0, 0)
            .unwrap();
        assert_eq!(format_due(due), "wo 01/05 18:00");
    }

    #[test]
    fn only_tasks_get_a_checkbox() {
        let mut task = record(ItemKind::Task);
        assert!(item_line(&task).starts_with("[ ] Bel Jan"));
        task.done = Some(true);
        assert!(item_line(&task).starts_with("[x] Bel Jan"));
        assert!(item_line(&record(ItemKind::Agenda)).starts_with("• Bel Jan"));
    }

    #[test]
    fn summary_names_the_profile() {
        let report = CaptureReport {
            items: vec![record(ItemKind::Task)],
            topics_created: 2,
            ..CaptureReport::default()
        };
        assert_eq!(
            report_summary(&report, Profile::Private),
            "1 item(s) opgeslagen in Privé, 2 nieuw(e) onderwerp(en)."
        );
    }
}
