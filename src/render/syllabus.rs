//! Syllabus document (AsciiDoc).

use indoc::formatdoc;
use semgen_core::CourseModel;

/// Render the syllabus: contact block, meeting logistics, description,
/// evaluation criteria and resources.
pub fn render(model: &CourseModel) -> String {
    let meta = &model.meta;

    let mut out = formatdoc! {"
        = {title}
        {instructor} <{email}>

        Office: {office} +
        Phone: {phone} +
        Meetings: {meetings}

        == Text

        {text}

        == Description

        {description}
        ",
        title = meta.title,
        instructor = meta.instructor,
        email = meta.email,
        office = meta.office,
        phone = meta.phone,
        meetings = meta.meetings,
        text = meta.text,
        description = meta.description,
    };

    if !model.evaluation.is_empty() {
        out.push_str("\n== Evaluation\n\n|===\n");
        for eval in &model.evaluation {
            out.push_str(&format!("|{} |{}\n", eval.title, eval.value));
        }
        out.push_str("|===\n");
        if !meta.eval_text.is_empty() {
            out.push_str(&format!("\n{}\n", meta.eval_text));
        }
    }

    if !meta.resources.is_empty() {
        out.push_str(&format!("\n== Resources\n\n{}\n", meta.resources));
    }

    if !meta.ical_link.is_empty() {
        out.push_str(&format!(
            "\nSubscribe to the link:{}[course calendar] for assignment due dates.\n",
            meta.ical_link
        ));
    }

    if !meta.legal.is_empty() {
        out.push_str(&format!("\n{}\n", meta.legal));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use semgen_core::RawCourse;

    fn model(toml: &str) -> CourseModel {
        CourseModel::build(RawCourse::from_toml_str(toml).unwrap()).unwrap()
    }

    #[test]
    fn test_title_and_contact_block() {
        let model = model(
            r#"
            title = "Systems Programming"
            instructor = "A. Hacker"
            email = "hacker@example.edu"
            meetings = "MW 10:00-11:15"
            "#,
        );

        let doc = render(&model);
        assert!(doc.starts_with("= Systems Programming\n"));
        assert!(doc.contains("A. Hacker <hacker@example.edu>"));
        assert!(doc.contains("Meetings: MW 10:00-11:15"));
    }

    #[test]
    fn test_evaluation_table() {
        let model = model(
            r#"
            title = "t"
            eval_text = "Late work loses a letter grade per day."

            [[evaluation]]
            title = "Homework"
            value = "40%"

            [[evaluation]]
            title = "Final"
            value = "60%"
            "#,
        );

        let doc = render(&model);
        assert!(doc.contains("== Evaluation"));
        assert!(doc.contains("|Homework |40%"));
        assert!(doc.contains("|Final |60%"));
        assert!(doc.contains("Late work loses a letter grade per day."));
    }

    #[test]
    fn test_empty_sections_are_omitted() {
        let doc = render(&model("title = \"t\""));
        assert!(!doc.contains("== Evaluation"));
        assert!(!doc.contains("== Resources"));
    }
}
