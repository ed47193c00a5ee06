//! Day-by-day schedule document (AsciiDoc).

use semgen_core::CourseModel;

use super::link_bullet;

/// Render the schedule: one section per course day, links as nested
/// bullets carrying their anchors.
pub fn render(model: &CourseModel) -> String {
    let mut lines = vec![format!("= {}: Schedule", model.meta.title), String::new()];

    for day in &model.days {
        lines.push(format!(
            "== Day {} ({}): {}",
            day.session.index,
            day.session.date.format("%m-%d"),
            day.title
        ));
        lines.push(String::new());
        for link in &day.links {
            lines.push(link_bullet(link));
        }
        if !day.links.is_empty() {
            lines.push(String::new());
        }
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use semgen_core::RawCourse;

    fn model() -> CourseModel {
        let raw = RawCourse::from_toml_str(
            r#"
            title = "Systems Programming"
            start = "2025-01-06"
            end = "2025-01-08"

            [[days]]
            title = "Intro"
            links = [
                { title = "Reading", url = "https://example.com/a" },
                { title = "Slides: day 1", url = "https://example.com/b", level = 1 },
            ]

            [[days]]
            title = "Processes"
            links = [{ title = "Reading", url = "https://example.com/c" }]
            "#,
        )
        .unwrap();
        CourseModel::build(raw).unwrap()
    }

    #[test]
    fn test_day_headings_carry_ordinal_and_date() {
        let doc = render(&model());
        assert!(doc.contains("== Day 1 (01-06): Intro"), "{doc}");
        assert!(doc.contains("== Day 2 (01-08): Processes"), "{doc}");
    }

    #[test]
    fn test_links_are_anchored_bullets() {
        let doc = render(&model());
        assert!(doc.contains("* [[Reading]]link:https://example.com/a[Reading]"), "{doc}");
        // Second "Reading" gets the disambiguated anchor
        assert!(doc.contains("* [[Reading-1]]link:https://example.com/c[Reading]"), "{doc}");
        // Level 1 nests one bullet deeper, colon stripped from the slug
        assert!(
            doc.contains("** [[Slides-day-1]]link:https://example.com/b[Slides: day 1]"),
            "{doc}"
        );
    }
}
