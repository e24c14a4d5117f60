//! Completion report derived from an employee and their todos

use std::fmt;

use serde::Serialize;

use crate::domain::{Employee, TodoItem};

/// Summary of an employee's completed work
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProgressReport {
    pub employee_name: String,
    pub done_count: usize,
    pub total_count: usize,
    /// Titles of completed items, in the order the API returned them
    pub completed_titles: Vec<String>,
}

impl ProgressReport {
    pub fn new(employee: &Employee, todos: &[TodoItem]) -> Self {
        let completed_titles: Vec<String> = todos
            .iter()
            .filter(|todo| todo.completed)
            .map(|todo| todo.title.clone())
            .collect();

        Self {
            employee_name: employee.name.clone(),
            done_count: completed_titles.len(),
            total_count: todos.len(),
            completed_titles,
        }
    }

    pub fn header(&self) -> String {
        format!(
            "Employee {} is done with tasks({}/{}):",
            self.employee_name, self.done_count, self.total_count
        )
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for ProgressReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.header())?;
        for title in &self.completed_titles {
            write!(f, "\n\t{}", title)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn employee(name: &str) -> Employee {
        Employee {
            id: Some(1),
            name: name.to_string(),
        }
    }

    fn todo(title: &str, completed: bool) -> TodoItem {
        TodoItem {
            id: None,
            user_id: Some(1),
            title: title.to_string(),
            completed,
        }
    }

    #[test]
    fn test_reference_output() {
        let report = ProgressReport::new(&employee("Leanne Graham"), &[todo("A", true), todo("B", false)]);
        assert_eq!(report.to_string(), "Employee Leanne Graham is done with tasks(1/2):\n\tA");
    }

    #[test]
    fn test_none_completed() {
        let report = ProgressReport::new(&employee("Ervin Howell"), &[todo("A", false), todo("B", false)]);
        assert_eq!(report.done_count, 0);
        assert_eq!(report.to_string(), "Employee Ervin Howell is done with tasks(0/2):");
    }

    #[test]
    fn test_no_todos() {
        let report = ProgressReport::new(&employee("Ervin Howell"), &[]);
        assert_eq!(report.to_string(), "Employee Ervin Howell is done with tasks(0/0):");
    }

    #[test]
    fn test_source_order_preserved() {
        let todos = [todo("c", true), todo("a", false), todo("b", true), todo("a2", true)];
        let report = ProgressReport::new(&employee("x"), &todos);
        assert_eq!(report.completed_titles, vec!["c", "b", "a2"]);
    }

    #[test]
    fn test_json_fields() {
        let report = ProgressReport::new(&employee("Leanne Graham"), &[todo("A", true), todo("B", false)]);
        let value: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(value["employee_name"], "Leanne Graham");
        assert_eq!(value["done_count"], 1);
        assert_eq!(value["total_count"], 2);
        assert_eq!(value["completed_titles"], serde_json::json!(["A"]));
    }

    proptest! {
        #[test]
        fn prop_counts_match_lines(flags in proptest::collection::vec(any::<bool>(), 0..50)) {
            let todos: Vec<TodoItem> = flags
                .iter()
                .enumerate()
                .map(|(i, done)| todo(&format!("task {}", i), *done))
                .collect();
            let m = flags.iter().filter(|d| **d).count();
            let n = flags.len();

            let report = ProgressReport::new(&employee("Prop"), &todos);
            let rendered = report.to_string();
            let lines: Vec<&str> = rendered.lines().collect();

            prop_assert!(report.done_count <= report.total_count);
            prop_assert_eq!(report.done_count, m);
            prop_assert_eq!(lines.len(), m + 1);
            let expected_suffix = format!("({}/{}):", m, n);
            prop_assert!(lines[0].ends_with(&expected_suffix));
            prop_assert!(lines[1..].iter().all(|l| l.starts_with('\t')));
        }
    }
}
