//! Assignments list document (AsciiDoc).

use semgen_core::CourseModel;

use super::link_bullet;

/// Render the assignments list: one section per assignment with its
/// assigned/due dates and material links.
pub fn render(model: &CourseModel) -> String {
    let mut lines = vec![format!("= {}: Assignments", model.meta.title), String::new()];

    for assignment in &model.assignments {
        let assigned = model.assigned_date(assignment).month_day();
        let due = model.due_date(assignment).month_day();

        lines.push(format!("== {}", assignment.title));
        lines.push(String::new());
        lines.push(format!("Assigned {assigned}, due {due}."));
        lines.push(String::new());
        for link in &assignment.links {
            lines.push(link_bullet(link));
        }
        if !assignment.links.is_empty() {
            lines.push(String::new());
        }
    }

    lines.join("\n")
}
