//! Pretty output formatting.

use chrono::Datelike;

use eventcal_core::calendar::{Event, EventFeedItem};

use crate::handlers::{calendar::MonthView, import::ImportReport};

/// Width of one day column in the month grid.
const CELL_WIDTH: usize = 6;

/// Format an event for display.
pub fn format_event(event: &Event) -> String {
    let mut output = format!(
        "{}\n  ID: {}\n  Start: {}\n  End: {}",
        event.title,
        event.id,
        event.start_time.format("%Y-%m-%d %H:%M"),
        event.end_time.format("%Y-%m-%d %H:%M")
    );
    if !event.description.is_empty() {
        output.push_str(&format!("\n  Description: {}", event.description));
    }
    output
}

/// Format events for display.
pub fn format_events(events: &[Event]) -> String {
    if events.is_empty() {
        return "No events found.".to_string();
    }
    let mut output = format!("EVENTS ({})\n", events.len());
    output.push_str(&"-".repeat(40));
    for event in events {
        output.push_str(&format!("\n{}", format_event(event)));
        output.push('\n');
    }
    output
}

/// Format calendar feed items for display.
pub fn format_feed(items: &[EventFeedItem]) -> String {
    if items.is_empty() {
        return "No events found.".to_string();
    }
    let mut output = format!("FEED ({})\n", items.len());
    output.push_str(&"-".repeat(40));
    for item in items {
        output.push_str(&format!("\n{}  {}  {}", item.start, item.end, item.title));
    }
    output
}

/// Format an import report for display.
pub fn format_import_report(report: &ImportReport) -> String {
    format!(
        "Imported {} rows: {} created, {} already present",
        report.total(),
        report.created.len(),
        report.existing.len()
    )
}

/// Format a month view as a text grid followed by the events it holds.
///
/// Padding days from adjacent months are shown in parentheses and days with
/// events carry a `*`.
pub fn format_month_view(view: &MonthView) -> String {
    let layout = &view.layout;
    let title = layout
        .days()
        .find(|cell| cell.in_month)
        .map(|cell| cell.date.format("%B %Y").to_string())
        .unwrap_or_else(|| format!("{}-{}", layout.year, layout.month));

    let mut output = format!("{title}\n");
    output.push_str(&"-".repeat(CELL_WIDTH * 7));
    output.push('\n');
    for weekday in layout.weekday_headers() {
        output.push_str(&format!("{:>width$}", weekday.to_string(), width = CELL_WIDTH));
    }

    for week in &layout.weeks {
        output.push('\n');
        for cell in &week.days {
            let label = if cell.in_month {
                cell.date.day().to_string()
            } else {
                format!("({})", cell.date.day())
            };
            let marker = if cell.is_empty() { ' ' } else { '*' };
            output.push_str(&format!("{:>width$}{marker}", label, width = CELL_WIDTH - 1));
        }
    }

    for cell in layout.days().filter(|cell| !cell.is_empty()) {
        for event in &cell.events {
            output.push_str(&format!(
                "\n{}  {}",
                event.start_time.format("%Y-%m-%d %H:%M"),
                event.title
            ));
        }
    }

    output.push_str(&format!(
        "\n\n<< {}    {} >>",
        view.previous.to_query(),
        view.next.to_query()
    ));
    output
}
