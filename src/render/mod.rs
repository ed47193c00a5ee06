//! One renderer per output document.
//!
//! Each renderer reads the course model and produces the full text of
//! one file. None of them mutate the model or depend on another
//! renderer's output, so they can run in any order.

pub mod assignments;
pub mod ics;
pub mod schedule;
pub mod syllabus;
pub mod taskpaper;

use std::path::Path;

use anyhow::{Context, Result};
use semgen_core::{CourseModel, Link};

/// Render every document for one course into `out_dir`.
pub fn write_all(model: &CourseModel, out_dir: &Path, syllabus_name: &str) -> Result<()> {
    write(out_dir, syllabus_name, syllabus::render(model))?;
    write(out_dir, "schedule.adoc", schedule::render(model))?;
    write(out_dir, "assignments.adoc", assignments::render(model))?;
    write(out_dir, &ics_filename(model), ics::render(model)?)?;
    write(out_dir, "course.taskpaper", taskpaper::render(model))?;
    Ok(())
}

fn write(out_dir: &Path, name: &str, contents: String) -> Result<()> {
    let path = out_dir.join(name);
    std::fs::write(&path, contents)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

fn ics_filename(model: &CourseModel) -> String {
    let stem = model.meta.project_slug();
    if stem.is_empty() {
        "course.ics".to_string()
    } else {
        format!("{stem}.ics")
    }
}

/// One AsciiDoc bullet for a link: nesting depth as bullet depth, the
/// anchor in front of the link macro. An empty slug emits no anchor.
pub(crate) fn link_bullet(link: &Link) -> String {
    let stars = "*".repeat(link.level + 1);
    if link.slug.is_empty() {
        format!("{} link:{}[{}]", stars, link.url, link.title)
    } else {
        format!("{} [[{}]]link:{}[{}]", stars, link.slug, link.url, link.title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link(level: usize, slug: &str) -> Link {
        Link {
            title: "Reading".to_string(),
            url: "https://example.com".to_string(),
            level,
            identifier: "Reading".to_string(),
            slug: slug.to_string(),
        }
    }

    #[test]
    fn test_link_bullet_depth_follows_level() {
        assert!(link_bullet(&link(0, "Reading")).starts_with("* "));
        assert!(link_bullet(&link(2, "Reading")).starts_with("*** "));
    }

    #[test]
    fn test_link_bullet_carries_anchor() {
        assert_eq!(
            link_bullet(&link(0, "Reading")),
            "* [[Reading]]link:https://example.com[Reading]"
        );
    }

    #[test]
    fn test_empty_slug_emits_no_anchor() {
        assert_eq!(
            link_bullet(&link(0, "")),
            "* link:https://example.com[Reading]"
        );
    }
}
