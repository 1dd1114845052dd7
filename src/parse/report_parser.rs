use crate::model::report::{ActivityNode, GroupCounter, ProjectNode, ReportTree, TaskNode};

/// Parse preprocessed report text into a tree, grouping repeated
/// projects/activities and dropping duplicate tasks/details as they are
/// inserted. Returns the tree and the merge/dedup counters.
///
/// Each line is classified as level 1–4 by either markdown heading syntax
/// (`# `/`## `/`### `/`#### `, any indentation) or exact-indentation symbol
/// syntax (`▶`, two spaces + `- `, four spaces + `+ `, six spaces + `. `).
/// Lines matching neither form are ignored.
pub fn parse_report(text: &str) -> (ReportTree, GroupCounter) {
    let mut tree = ReportTree::default();
    let mut counter = GroupCounter::default();

    // Empty string means "no cursor"; an empty extracted name deliberately
    // leaves the cursor unset, so children of a nameless heading are dropped.
    let mut current_project = String::new();
    let mut current_activity = String::new();
    let mut current_task = String::new();

    for raw in text.split('\n') {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            continue;
        }

        // Level 1: `# project` or `▶ project`
        if let Some(name) = project_name(trimmed) {
            if tree.projects.contains_key(&name) {
                counter.groupings += 1;
            } else {
                tree.projects.insert(name.clone(), ProjectNode::default());
            }
            current_project = name;
            current_activity.clear();
            current_task.clear();
            continue;
        }

        // Level 2: exactly `  - activity` or `## activity`
        if let Some(name) = activity_name(raw, trimmed) {
            if !current_project.is_empty()
                && let Some(project) = tree.projects.get_mut(&current_project)
            {
                if project.activities.contains_key(&name) {
                    counter.groupings += 1;
                } else {
                    project.activities.insert(name.clone(), ActivityNode::default());
                }
            }
            current_activity = name;
            current_task.clear();
            continue;
        }

        // Level 3: exactly `    + task` or `### task`
        if let Some(task) = task_text(raw, trimmed) {
            if !current_project.is_empty()
                && !current_activity.is_empty()
                && let Some(activity) = tree
                    .projects
                    .get_mut(&current_project)
                    .and_then(|p| p.activities.get_mut(&current_activity))
            {
                if activity.tasks.contains_key(&task) {
                    counter.duplicates += 1;
                } else {
                    activity.tasks.insert(task.clone(), TaskNode::default());
                }
                // a repeated task still becomes the cursor, so its details
                // merge into the first-seen entry
                current_task = task;
            } else {
                current_task.clear();
            }
            continue;
        }

        // Level 4: exactly `      . detail` or `#### detail`
        if let Some(detail) = detail_text(raw, trimmed) {
            if !current_project.is_empty()
                && !current_activity.is_empty()
                && !current_task.is_empty()
                && let Some(task) = tree
                    .projects
                    .get_mut(&current_project)
                    .and_then(|p| p.activities.get_mut(&current_activity))
                    .and_then(|a| a.tasks.get_mut(&current_task))
                && !task.details.insert(detail)
            {
                counter.duplicates += 1;
            }
            continue;
        }

        // Anything else is ignored: unrecognized lines never become a
        // catch-all group and are not errors.
    }

    (tree, counter)
}

fn project_name(trimmed: &str) -> Option<String> {
    if let Some(rest) = trimmed.strip_prefix("# ") {
        return Some(rest.trim().to_string());
    }
    trimmed
        .strip_prefix('▶')
        .map(|rest| rest.trim().to_string())
}

fn activity_name(raw: &str, trimmed: &str) -> Option<String> {
    if let Some(rest) = raw.strip_prefix("  - ")
        && !rest.is_empty()
    {
        return Some(rest.trim().to_string());
    }
    if let Some(rest) = trimmed.strip_prefix("## ")
        && !rest.is_empty()
    {
        return Some(rest.trim().to_string());
    }
    None
}

fn task_text(raw: &str, trimmed: &str) -> Option<String> {
    if let Some(rest) = raw.strip_prefix("    + ")
        && !rest.is_empty()
    {
        return Some(rest.trim().to_string());
    }
    if let Some(rest) = trimmed.strip_prefix("### ")
        && !rest.is_empty()
    {
        return Some(rest.trim().to_string());
    }
    None
}

fn detail_text(raw: &str, trimmed: &str) -> Option<String> {
    if let Some(rest) = raw.strip_prefix("      . ")
        && !rest.is_empty()
    {
        return Some(rest.trim().to_string());
    }
    if let Some(rest) = trimmed.strip_prefix("#### ")
        && !rest.is_empty()
    {
        return Some(rest.trim().to_string());
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_markdown_form() {
        let (tree, counter) = parse_report("# P\n## A\n### T");
        assert_eq!(tree.projects.len(), 1);
        let activity = &tree.projects["P"].activities["A"];
        assert!(activity.tasks.contains_key("T"));
        assert_eq!(counter, GroupCounter::default());
    }

    #[test]
    fn test_parse_symbol_form() {
        let (tree, _) = parse_report("▶ P\n  - A\n    + T\n      . D");
        let task = &tree.projects["P"].activities["A"].tasks["T"];
        assert!(task.details.contains("D"));
    }

    #[test]
    fn test_symbol_indentation_is_exact() {
        // three spaces before `-` is not an activity; the line is ignored
        let (tree, _) = parse_report("▶ P\n   - A\n    + T");
        assert!(tree.projects["P"].activities.is_empty());
    }

    #[test]
    fn test_markdown_form_matches_at_any_indent() {
        let (tree, _) = parse_report("# P\n      ## A\n  ### T");
        let activity = &tree.projects["P"].activities["A"];
        assert!(activity.tasks.contains_key("T"));
    }

    #[test]
    fn test_heading_without_space_is_ignored() {
        let (tree, _) = parse_report("#P\n# Real");
        let keys: Vec<&String> = tree.projects.keys().collect();
        assert_eq!(keys, vec!["Real"]);
    }

    #[test]
    fn test_projects_group_by_name() {
        let input = "# P\n## A1\n### T1\n# P\n## A2\n### T2";
        let (tree, counter) = parse_report(input);
        assert_eq!(tree.projects.len(), 1);
        assert_eq!(tree.projects["P"].activities.len(), 2);
        assert_eq!(counter.groupings, 1);
    }

    #[test]
    fn test_activities_group_within_project() {
        let input = "# P\n## A\n### T1\n# P\n## A\n### T2";
        let (tree, counter) = parse_report(input);
        let activity = &tree.projects["P"].activities["A"];
        assert_eq!(activity.tasks.len(), 2);
        // project merge + activity merge
        assert_eq!(counter.groupings, 2);
    }

    #[test]
    fn test_same_activity_name_in_different_projects_not_grouped() {
        let input = "# P1\n## A\n### T\n# P2\n## A\n### T";
        let (tree, counter) = parse_report(input);
        assert_eq!(counter.groupings, 0);
        assert!(tree.projects["P1"].activities.contains_key("A"));
        assert!(tree.projects["P2"].activities.contains_key("A"));
    }

    #[test]
    fn test_duplicate_tasks_counted() {
        let input = "# P\n## A\n### T\n### T";
        let (tree, counter) = parse_report(input);
        assert_eq!(tree.projects["P"].activities["A"].tasks.len(), 1);
        assert_eq!(counter.duplicates, 1);
    }

    #[test]
    fn test_duplicate_details_counted() {
        let input = "# P\n## A\n### T\n#### D\n#### D";
        let (tree, counter) = parse_report(input);
        let task = &tree.projects["P"].activities["A"].tasks["T"];
        assert_eq!(task.details.len(), 1);
        assert_eq!(counter.duplicates, 1);
    }

    #[test]
    fn test_details_of_repeated_task_merge() {
        let input = "# P\n## A\n### T\n#### D1\n### T\n#### D2";
        let (tree, counter) = parse_report(input);
        let task = &tree.projects["P"].activities["A"].tasks["T"];
        let details: Vec<&String> = task.details.iter().collect();
        assert_eq!(details, vec!["D1", "D2"]);
        // the repeated `### T` is a duplicate, its details are distinct
        assert_eq!(counter.duplicates, 1);
    }

    #[test]
    fn test_task_without_context_is_ignored() {
        let (tree, counter) = parse_report("### orphan\n# P\n### still orphaned");
        assert!(tree.projects["P"].activities.is_empty());
        assert_eq!(counter.duplicates, 0);
    }

    #[test]
    fn test_detail_after_orphan_task_does_not_attach() {
        // the orphan `### x` resets the task cursor; its detail is dropped
        let input = "# P\n## A\n### T\n# Q\n### x\n#### stray";
        let (tree, _) = parse_report(input);
        let task = &tree.projects["P"].activities["A"].tasks["T"];
        assert!(task.details.is_empty());
    }

    #[test]
    fn test_unrecognized_lines_dropped() {
        let input = "# P\nrandom prose\n\t- tabbed\n## A\n### T";
        let (tree, _) = parse_report(input);
        assert_eq!(tree.projects.len(), 1);
        assert_eq!(tree.projects["P"].activities.len(), 1);
    }

    #[test]
    fn test_first_seen_order_preserved() {
        let input = "# B\n## X\n### t\n# A\n## Y\n### t\n# B\n## Z\n### t";
        let (tree, _) = parse_report(input);
        let projects: Vec<&String> = tree.projects.keys().collect();
        assert_eq!(projects, vec!["B", "A"]);
        let activities: Vec<&String> = tree.projects["B"].activities.keys().collect();
        assert_eq!(activities, vec!["X", "Z"]);
    }

    #[test]
    fn test_blank_lines_skipped() {
        let input = "# P\n\n\n## A\n   \n### T";
        let (tree, _) = parse_report(input);
        assert!(tree.projects["P"].activities["A"].tasks.contains_key("T"));
    }

    #[test]
    fn test_marker_without_space() {
        // `▶Project` with no space still opens a project
        let (tree, _) = parse_report("▶Project\n  - A\n    + T");
        assert!(tree.projects.contains_key("Project"));
    }

    #[test]
    fn test_empty_input_empty_tree() {
        let (tree, counter) = parse_report("");
        assert!(tree.projects.is_empty());
        assert_eq!(counter, GroupCounter::default());
    }
}
