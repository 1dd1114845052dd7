use crate::model::report::ReportTree;

/// Serialize a report tree back to markdown headings.
///
/// Projects and activities iterate in first-seen order. A project with no
/// recorded activities is skipped; an activity with no tasks is skipped
/// (its project heading still appears). One blank line separates successive
/// projects and successive activities within a project. Lines join with
/// `\n`, no trailing newline.
pub fn serialize_report(tree: &ReportTree) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut first_project = true;

    for (project, node) in &tree.projects {
        if !node.has_activities() {
            continue;
        }
        if !first_project {
            lines.push(String::new());
        }
        first_project = false;

        lines.push(format!("# {}", project));

        let mut first_activity = true;
        for (activity, activity_node) in &node.activities {
            if activity_node.is_empty() {
                continue;
            }
            if !first_activity {
                lines.push(String::new());
            }
            first_activity = false;

            lines.push(format!("## {}", activity));
            for (task, task_node) in &activity_node.tasks {
                lines.push(format!("### {}", task));
                for detail in &task_node.details {
                    lines.push(format!("#### {}", detail));
                }
            }
        }
    }

    lines.join("\n")
}
