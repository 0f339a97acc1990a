//! Text rendering for teams and employees.

use chrono::NaiveDateTime;

use crate::models::{Employee, TeamNode};

/// One line per employee: name, position, employment period, and an
/// inactive marker once the end date has passed.
pub fn format_employee_line(employee: &Employee, now: NaiveDateTime) -> String {
    let mut line = employee.full_name();

    if !employee.position.is_empty() {
        line.push_str(", ");
        line.push_str(&employee.position);
    }

    match (employee.start_date, employee.end_date) {
        (Some(start), Some(end)) => {
            line.push_str(&format!(" ({} to {})", format_date(start), format_date(end)));
        }
        (Some(start), None) => {
            line.push_str(&format!(" (from {})", format_date(start)));
        }
        (None, Some(end)) => {
            line.push_str(&format!(" (to {})", format_date(end)));
        }
        (None, None) => {}
    }

    if employee.is_inactive(now) {
        line.push_str(" [inactive]");
    }

    line
}

/// Render the forest as an indented tree, two spaces per nesting level.
/// Teams print their employee count; employees print under their team.
pub fn render_forest(forest: &[TeamNode], now: NaiveDateTime) -> String {
    let mut out = String::new();
    for node in forest {
        render_team(&mut out, node, 0, now);
    }
    out
}

fn render_team(out: &mut String, node: &TeamNode, depth: usize, now: NaiveDateTime) {
    let indent = "  ".repeat(depth);
    let count = node.team.employees.len();
    let label = if count == 1 { "employee" } else { "employees" };

    out.push_str(&format!("{}{} [{} {}]\n", indent, node.team.name, count, label));

    for employee in &node.team.employees {
        out.push_str(&format!("{}  {}\n", indent, format_employee_line(employee, now)));
    }

    for subteam in &node.subteams {
        render_team(out, subteam, depth + 1, now);
    }
}

fn format_date(date: NaiveDateTime) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Team;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(0, 0, 0).unwrap()
    }

    fn employee(name: &str, position: &str, end_date: Option<NaiveDateTime>) -> Employee {
        Employee {
            id: "e1".to_string(),
            name: name.to_string(),
            surname: "Novak".to_string(),
            position: position.to_string(),
            created_at: None,
            start_date: None,
            end_date,
            team_id: "t1".to_string(),
        }
    }

    #[test]
    fn test_employee_line_basic() {
        let line = format_employee_line(&employee("Jan", "Developer", None), at(2024, 6, 1));
        assert_eq!(line, "Jan Novak, Developer");
    }

    #[test]
    fn test_employee_line_without_position() {
        let line = format_employee_line(&employee("Jan", "", None), at(2024, 6, 1));
        assert_eq!(line, "Jan Novak");
    }

    #[test]
    fn test_employee_line_marks_inactive() {
        let line = format_employee_line(
            &employee("Jan", "Tester", Some(at(2023, 12, 31))),
            at(2024, 6, 1),
        );
        assert_eq!(line, "Jan Novak, Tester (to 2023-12-31) [inactive]");
    }

    #[test]
    fn test_employee_line_future_end_date_not_inactive() {
        let line = format_employee_line(
            &employee("Jan", "Tester", Some(at(2025, 1, 1))),
            at(2024, 6, 1),
        );
        assert_eq!(line, "Jan Novak, Tester (to 2025-01-01)");
    }

    #[test]
    fn test_employee_line_with_period() {
        let mut person = employee("Jan", "Developer", Some(at(2025, 6, 30)));
        person.start_date = Some(at(2023, 1, 15));
        let line = format_employee_line(&person, at(2024, 6, 1));
        assert_eq!(line, "Jan Novak, Developer (2023-01-15 to 2025-06-30)");
    }

    #[test]
    fn test_render_forest_indents_subteams() {
        let forest = vec![TeamNode {
            team: Team {
                id: "t1".to_string(),
                name: "Engineering".to_string(),
                parent_team_id: None,
                employees: vec![employee("Jan", "Developer", None)],
            },
            subteams: vec![TeamNode {
                team: Team {
                    id: "t2".to_string(),
                    name: "Platform".to_string(),
                    parent_team_id: Some("t1".to_string()),
                    employees: Vec::new(),
                },
                subteams: Vec::new(),
            }],
        }];

        let rendered = render_forest(&forest, at(2024, 6, 1));
        assert_eq!(
            rendered,
            "Engineering [1 employee]\n  Jan Novak, Developer\n  Platform [0 employees]\n"
        );
    }
}
