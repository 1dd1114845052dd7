use indexmap::{IndexMap, IndexSet};

/// Parsed report hierarchy: project → activity → task → detail.
/// Keys at every level are trimmed display names; iteration order is
/// first-seen insertion order, which fixes the output ordering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportTree {
    pub projects: IndexMap<String, ProjectNode>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectNode {
    pub activities: IndexMap<String, ActivityNode>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityNode {
    pub tasks: IndexMap<String, TaskNode>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskNode {
    pub details: IndexSet<String>,
}

impl ActivityNode {
    /// An activity is emitted only when it has at least one task
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

impl ProjectNode {
    /// A project is emitted when any activity was recorded under it, even
    /// if every one of those activities ends up pruned for having no tasks
    pub fn has_activities(&self) -> bool {
        !self.activities.is_empty()
    }
}

impl ReportTree {
    /// Number of projects that appear in serialized output
    pub fn emitted_project_count(&self) -> usize {
        self.projects.values().filter(|p| p.has_activities()).count()
    }
}

/// Merge/dedup counters accumulated while building a tree
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GroupCounter {
    /// Times an already-seen project/activity key was merged into
    pub groupings: usize,
    /// Times an identical task/detail leaf was discarded
    pub duplicates: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_order_preserved() {
        let mut tree = ReportTree::default();
        tree.projects.entry("B".to_string()).or_default();
        tree.projects.entry("A".to_string()).or_default();
        tree.projects.entry("B".to_string()).or_default();
        let keys: Vec<&String> = tree.projects.keys().collect();
        assert_eq!(keys, vec!["B", "A"]);
    }

    #[test]
    fn test_emitted_project_count_skips_activityless_projects() {
        let mut tree = ReportTree::default();
        // project with no activities — never emitted
        tree.projects.entry("empty".to_string()).or_default();
        // project with a taskless activity — still emitted
        let hollow = tree.projects.entry("hollow".to_string()).or_default();
        hollow.activities.entry("a".to_string()).or_default();
        // project with a real task
        let full = tree.projects.entry("full".to_string()).or_default();
        let activity = full.activities.entry("a".to_string()).or_default();
        activity.tasks.entry("t".to_string()).or_default();

        assert_eq!(tree.emitted_project_count(), 2);
    }

    #[test]
    fn test_detail_set_dedups() {
        let mut task = TaskNode::default();
        assert!(task.details.insert("x".to_string()));
        assert!(!task.details.insert("x".to_string()));
        assert_eq!(task.details.len(), 1);
    }
}
