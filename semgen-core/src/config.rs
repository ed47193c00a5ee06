//! TOML shape of a course description file.
//!
//! These types mirror the config file one-to-one and carry no derived
//! state: links have no identifiers yet, days have no dates. The
//! course model builder turns a `RawCourse` into a `CourseModel`.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, de};

use crate::error::CourseResult;

/// A hyperlink as it appears in the config, before the link registry
/// has assigned it an identifier.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LinkEntry {
    /// Display text; also the de-duplication key for identifiers.
    pub title: String,

    /// Link target, opaque to the core.
    #[serde(default)]
    pub url: String,

    /// Nesting depth for renderer emphasis; 0 is top level.
    #[serde(default)]
    pub level: usize,
}

/// An evaluation criterion, passed through to renderers unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Eval {
    pub title: String,
    pub value: String,
}

/// Reference to a class session by 1-based day number.
///
/// In config files, `-1` or an absent key means "to be determined".
/// Zero and other non-positive values are rejected at parse time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionRef {
    #[default]
    Tbd,
    Session(usize),
}

impl SessionRef {
    pub fn is_tbd(&self) -> bool {
        matches!(self, SessionRef::Tbd)
    }
}

impl<'de> Deserialize<'de> for SessionRef {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match i64::deserialize(deserializer)? {
            -1 => Ok(SessionRef::Tbd),
            n if n >= 1 => Ok(SessionRef::Session(n as usize)),
            other => Err(de::Error::custom(format!(
                "session reference must be a positive day number or -1 for TBD, got {other}"
            ))),
        }
    }
}

/// One configured class day: a topic plus its reading/material links.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawDay {
    pub title: String,

    #[serde(default)]
    pub links: Vec<LinkEntry>,
}

/// One configured assignment.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawAssignment {
    pub title: String,

    #[serde(default)]
    pub links: Vec<LinkEntry>,

    /// Day of the semester the assignment is due.
    #[serde(default)]
    pub due: SessionRef,

    /// Explicit due date; wins over the session-derived date.
    #[serde(default, deserialize_with = "date_string::option")]
    pub due_date: Option<NaiveDate>,

    /// Day of the semester the assignment is handed out.
    #[serde(default)]
    pub assigned: SessionRef,

    /// Explicit assigned date; wins over the session-derived date.
    #[serde(default, deserialize_with = "date_string::option")]
    pub assigned_date: Option<NaiveDate>,
}

/// The full course description as decoded from one TOML file.
///
/// Every metadata field is an opaque pass-through string; only
/// `start`, `end`, `days_off`, `days` and `assignments` feed the
/// calendar and registry logic. Missing `start` or `end` means "no
/// calendar configured" and is valid.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct RawCourse {
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

    #[serde(deserialize_with = "date_string::option")]
    pub start: Option<NaiveDate>,

    #[serde(deserialize_with = "date_string::option")]
    pub end: Option<NaiveDate>,

    #[serde(deserialize_with = "date_string::list")]
    pub days_off: Vec<NaiveDate>,

    /// Wall-clock due time appended to due dates in the task list,
    /// e.g. "23:59".
    pub due_time: String,

    /// Project name; its slug is the calendar feed's file stem.
    pub project: String,

    pub days: Vec<RawDay>,
    pub assignments: Vec<RawAssignment>,

    pub resources: String,
    pub evaluation: Vec<Eval>,
    pub eval_text: String,
}

impl RawCourse {
    /// Decode a course description from TOML text.
    pub fn from_toml_str(text: &str) -> CourseResult<RawCourse> {
        Ok(toml::from_str(text)?)
    }
}

/// `YYYY-MM-DD` date strings in config files.
mod date_string {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, de};

    const FORMAT: &str = "%Y-%m-%d";

    fn parse(s: &str) -> Result<NaiveDate, String> {
        NaiveDate::parse_from_str(s, FORMAT)
            .map_err(|_| format!("invalid date '{s}', expected YYYY-MM-DD"))
    }

    pub fn option<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        raw.as_deref().map(parse).transpose().map_err(de::Error::custom)
    }

    pub fn list<'de, D>(deserializer: D) -> Result<Vec<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Vec<String> = Vec::deserialize(deserializer)?;
        raw.iter()
            .map(|s| parse(s))
            .collect::<Result<_, _>>()
            .map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_full_course() {
        let course = RawCourse::from_toml_str(
            r#"
            title = "Systems Programming"
            instructor = "A. Hacker"
            start = "2025-01-06"
            end = "2025-01-18"
            days_off = ["2025-01-08"]
            due_time = "23:59"
            project = "Systems Programming"

            [[days]]
            title = "Intro"
            links = [{ title = "Reading", url = "https://example.com/intro" }]

            [[days]]
            title = "Processes"

            [[days]]
            title = "Threads"

            [[assignments]]
            title = "Homework 1"
            due = 3
            assigned = 1
            links = [{ title = "Spec sheet", url = "https://example.com/hw1", level = 1 }]

            [[evaluation]]
            title = "Homework"
            value = "40%"
            "#,
        )
        .unwrap();

        assert_eq!(course.title, "Systems Programming");
        assert_eq!(course.start, Some(date(2025, 1, 6)));
        assert_eq!(course.days_off, vec![date(2025, 1, 8)]);
        assert_eq!(course.days.len(), 3);
        assert_eq!(course.days[0].links[0].title, "Reading");
        assert_eq!(course.assignments[0].due, SessionRef::Session(3));
        assert_eq!(course.assignments[0].assigned, SessionRef::Session(1));
        assert_eq!(course.assignments[0].links[0].level, 1);
        assert_eq!(course.evaluation[0].value, "40%");
    }

    #[test]
    fn test_missing_fields_default() {
        let course = RawCourse::from_toml_str("title = \"Minimal\"").unwrap();

        assert_eq!(course.start, None);
        assert_eq!(course.end, None);
        assert!(course.days_off.is_empty());
        assert!(course.days.is_empty());
        assert!(course.assignments.is_empty());
    }

    #[test]
    fn test_session_ref_sentinel() {
        let course = RawCourse::from_toml_str(
            r#"
            [[assignments]]
            title = "Paper"
            due = -1
            "#,
        )
        .unwrap();

        assert!(course.assignments[0].due.is_tbd());
        // An absent key is TBD as well
        assert!(course.assignments[0].assigned.is_tbd());
    }

    #[test]
    fn test_session_ref_rejects_zero() {
        let err = RawCourse::from_toml_str(
            r#"
            [[assignments]]
            title = "Paper"
            due = 0
            "#,
        )
        .unwrap_err();

        assert!(
            err.to_string().contains("session reference"),
            "unexpected error: {err}"
        );
    }

    #[test]
    fn test_bad_date_rejected() {
        let err = RawCourse::from_toml_str("start = \"Jan 6, 2025\"").unwrap_err();
        assert!(err.to_string().contains("expected YYYY-MM-DD"), "unexpected error: {err}");
    }
}
