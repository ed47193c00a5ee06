//! The immutable course model consumed by renderers.
//!
//! `CourseModel::build` is the only constructor: it sequences the
//! class dates, zips them to the configured days, runs one link
//! registry pass over every link in the course, and validates session
//! references. After that the model is read-only and may be shared
//! across renderers freely.

use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::calendar::{self, ClassSession};
use crate::config::{Eval, RawCourse, SessionRef};
use crate::error::{CourseError, CourseResult};
use crate::links::{Link, LinkRegistry};

/// Course metadata, passed through from the config unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CourseMeta {
    pub title: String,
    pub instructor: String,
    pub office: String,
    pub phone: String,
    pub email: String,
    pub meetings: String,
    pub text: String,
    pub description: String,
    pub legal: String,
    pub ical_link: String,
    pub due_time: String,
    pub project: String,
    pub resources: String,
    pub eval_text: String,
}

impl CourseMeta {
    /// The project name with spaces hyphenated; file stem of the
    /// calendar feed.
    pub fn project_slug(&self) -> String {
        self.project.replace(' ', "-")
    }
}

/// A configured topic attached to its class session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseDay {
    pub title: String,
    pub links: Vec<Link>,
    pub session: ClassSession,
}

/// An assignment with registered links and raw session references.
///
/// Due and assigned dates are resolved through the model on read, not
/// stored here, so an override date always wins without reconciling
/// against the sequencer's output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub title: String,
    pub links: Vec<Link>,
    pub due: SessionRef,
    pub due_date: Option<NaiveDate>,
    pub assigned: SessionRef,
    pub assigned_date: Option<NaiveDate>,
}

/// A session-derived date as seen by renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedDate {
    Date(NaiveDate),
    Tbd,
}

impl ResolvedDate {
    /// `MM-DD` for the schedule-facing documents, or `TBD`.
    pub fn month_day(&self) -> String {
        match self {
            ResolvedDate::Date(d) => d.format("%m-%d").to_string(),
            ResolvedDate::Tbd => "TBD".to_string(),
        }
    }
}

/// One course, fully assembled. Immutable after `build`.
#[derive(Debug, Clone, PartialEq)]
pub struct CourseModel {
    pub meta: CourseMeta,
    pub sessions: Vec<ClassSession>,
    pub days: Vec<CourseDay>,
    pub assignments: Vec<Assignment>,
    pub evaluation: Vec<Eval>,
}

impl CourseModel {
    /// Build the model from a decoded course config.
    ///
    /// Fails when the configured day count does not match the number
    /// of sequenced class dates, or when an assignment references a
    /// session that does not exist and carries no override date.
    pub fn build(raw: RawCourse) -> CourseResult<CourseModel> {
        let excluded: BTreeSet<NaiveDate> = raw.days_off.iter().copied().collect();
        let dates = calendar::sequence(raw.start, raw.end, &excluded);
        let sessions = calendar::sessions(&dates);

        if raw.days.len() != sessions.len() {
            return Err(CourseError::DayCountMismatch {
                configured: raw.days.len(),
                sequenced: sessions.len(),
            });
        }

        // One registry per build; assignments register before days
        let mut registry = LinkRegistry::new();

        let assignments: Vec<Assignment> = raw
            .assignments
            .into_iter()
            .map(|a| Assignment {
                title: a.title,
                links: a.links.into_iter().map(|l| registry.register(l)).collect(),
                due: a.due,
                due_date: a.due_date,
                assigned: a.assigned,
                assigned_date: a.assigned_date,
            })
            .collect();

        let days: Vec<CourseDay> = raw
            .days
            .into_iter()
            .zip(sessions.iter().copied())
            .map(|(day, session)| CourseDay {
                title: day.title,
                links: day.links.into_iter().map(|l| registry.register(l)).collect(),
                session,
            })
            .collect();

        for assignment in &assignments {
            check_reference(&assignment.title, assignment.due, assignment.due_date, sessions.len())?;
            check_reference(
                &assignment.title,
                assignment.assigned,
                assignment.assigned_date,
                sessions.len(),
            )?;
        }

        Ok(CourseModel {
            meta: CourseMeta {
                title: raw.title,
                instructor: raw.instructor,
                office: raw.office,
                phone: raw.phone,
                email: raw.email,
                meetings: raw.meetings,
                text: raw.text,
                description: raw.description,
                legal: raw.legal,
                ical_link: raw.ical_link,
                due_time: raw.due_time,
                project: raw.project,
                resources: raw.resources,
                eval_text: raw.eval_text,
            },
            sessions,
            days,
            assignments,
            evaluation: raw.evaluation,
        })
    }

    /// The date an assignment is due: the override date when present,
    /// else the referenced session's date, else TBD.
    pub fn due_date(&self, assignment: &Assignment) -> ResolvedDate {
        self.resolve(assignment.due, assignment.due_date)
    }

    /// The date an assignment is handed out, same precedence as
    /// [`due_date`](Self::due_date).
    pub fn assigned_date(&self, assignment: &Assignment) -> ResolvedDate {
        self.resolve(assignment.assigned, assignment.assigned_date)
    }

    fn resolve(&self, reference: SessionRef, override_date: Option<NaiveDate>) -> ResolvedDate {
        if let Some(date) = override_date {
            return ResolvedDate::Date(date);
        }
        match reference {
            SessionRef::Tbd => ResolvedDate::Tbd,
            SessionRef::Session(n) => n
                .checked_sub(1)
                .and_then(|i| self.sessions.get(i))
                .map(|s| ResolvedDate::Date(s.date))
                .unwrap_or(ResolvedDate::Tbd),
        }
    }
}

/// Session references are validated eagerly at build time: a dangling
/// reference without an override date fails the whole course rather
/// than rendering a wrong date later.
fn check_reference(
    assignment: &str,
    reference: SessionRef,
    override_date: Option<NaiveDate>,
    sessions: usize,
) -> CourseResult<()> {
    if override_date.is_some() {
        return Ok(());
    }
    if let SessionRef::Session(n) = reference {
        if n > sessions {
            return Err(CourseError::UnresolvedSession {
                assignment: assignment.to_string(),
                reference: n,
                sessions,
            });
        }
    }
    Ok(())
}
