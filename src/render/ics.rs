//! Calendar feed generation (.ics) for assignment due dates.

use anyhow::Result;
use chrono::Duration;
use icalendar::{Calendar, Component, Event, Property, ValueType};
use semgen_core::{CourseModel, ResolvedDate, links};

/// Generate the calendar feed: one all-day event per assignment with a
/// resolvable due date. TBD assignments are left out.
pub fn render(model: &CourseModel) -> Result<String> {
    let mut cal = Calendar::new();
    cal.append_property(Property::new("X-WR-CALNAME", &model.meta.title));

    for assignment in &model.assignments {
        let ResolvedDate::Date(due) = model.due_date(assignment) else {
            continue;
        };

        let mut event = Event::new();

        // Deterministic UID so a regenerated feed updates events
        // instead of duplicating them
        let uid = format!(
            "{}-{}@{}",
            links::anchor_slug(&assignment.title),
            due.format("%Y%m%d"),
            model.meta.project_slug()
        );
        event.uid(&uid);
        event.summary(&format!("{} due", assignment.title));

        let mut start = Property::new("DTSTART", due.format("%Y%m%d").to_string());
        start.append_parameter(ValueType::Date);
        event.append_property(start);

        let mut end = Property::new("DTEND", (due + Duration::days(1)).format("%Y%m%d").to_string());
        end.append_parameter(ValueType::Date);
        event.append_property(end);

        cal.push(event.done());
    }

    Ok(cal.done().to_string())
}
