//! Task list (TaskPaper format): one task per assignment.

use semgen_core::{CourseModel, ResolvedDate};

/// Render the task list. Due tags carry the configured wall-clock due
/// time; assignments without a known due date are tagged `@due(TBD)`.
pub fn render(model: &CourseModel) -> String {
    let project = if model.meta.project.is_empty() {
        &model.meta.title
    } else {
        &model.meta.project
    };
    let mut lines = vec![format!("{project}:")];

    for assignment in &model.assignments {
        let mut tags = Vec::new();
        match model.due_date(assignment) {
            ResolvedDate::Date(d) => {
                let date = d.format("%Y-%m-%d");
                if model.meta.due_time.is_empty() {
                    tags.push(format!("@due({date})"));
                } else {
                    tags.push(format!("@due({date} {})", model.meta.due_time));
                }
            }
            ResolvedDate::Tbd => tags.push("@due(TBD)".to_string()),
        }
        if let ResolvedDate::Date(d) = model.assigned_date(assignment) {
            tags.push(format!("@assigned({})", d.format("%Y-%m-%d")));
        }

        lines.push(format!("\t- {} {}", assignment.title, tags.join(" ")));
    }

    lines.join("\n") + "\n"
}

#[cfg(test)]
mod tests {
    use super::*;
    use semgen_core::RawCourse;

    fn model(toml: &str) -> CourseModel {
        CourseModel::build(RawCourse::from_toml_str(toml).unwrap()).unwrap()
    }

    #[test]
    fn test_tasks_carry_due_and_assigned_tags() {
        let model = model(
            r#"
            title = "Systems Programming"
            project = "sysprog"
            due_time = "23:59"
            start = "2025-01-06"
            end = "2025-01-18"
            days = [
                { title = "a" }, { title = "b" }, { title = "c" }, { title = "d" },
            ]

            [[assignments]]
            title = "Homework 1"
            assigned = 1
            due = 3
            "#,
        );

        let doc = render(&model);
        assert!(doc.starts_with("sysprog:\n"), "{doc}");
        assert!(
            doc.contains("\t- Homework 1 @due(2025-01-13 23:59) @assigned(2025-01-06)"),
            "{doc}"
        );
    }

    #[test]
    fn test_tbd_due_date() {
        let model = model(
            r#"
            title = "t"

            [[assignments]]
            title = "Final project"
            "#,
        );

        assert!(render(&model).contains("\t- Final project @due(TBD)"));
    }

    #[test]
    fn test_missing_due_time_leaves_bare_date() {
        let model = model(
            r#"
            title = "t"

            [[assignments]]
            title = "Essay"
            due_date = "2025-03-01"
            "#,
        );

        assert!(render(&model).contains("@due(2025-03-01)"));
    }
}
