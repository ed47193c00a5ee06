//! Core model for the semgen course document generator.
//!
//! This crate turns a declarative course description into an immutable
//! `CourseModel` that renderers consume read-only:
//! - `config` — the TOML shape of a course file
//! - `calendar` — class-session date sequencing
//! - `links` — link identifier registry and anchor slugs
//! - `course` — the assembled course model

pub mod calendar;
pub mod config;
pub mod course;
pub mod error;
pub mod links;

pub use calendar::ClassSession;
pub use config::{Eval, LinkEntry, RawCourse, SessionRef};
pub use course::{Assignment, CourseDay, CourseMeta, CourseModel, ResolvedDate};
pub use error::{CourseError, CourseResult};
pub use links::{Link, LinkRegistry};
