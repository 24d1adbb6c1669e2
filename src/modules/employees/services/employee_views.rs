//! Derived views over a fetched employee list.

use std::cmp::Reverse;

use crate::modules::employees::models::Employee;

/// Reported as the highest salary when there are no employees
pub const NO_SALARY: i64 = -1;

/// Size of the top earners list
pub const TOP_EARNER_LIMIT: usize = 10;

/// Keep employees whose name contains `fragment` (case-sensitive)
pub fn filter_by_name(employees: Vec<Employee>, fragment: &str) -> Vec<Employee> {
    employees
        .into_iter()
        .filter(|employee| employee.name.contains(fragment))
        .collect()
}

/// Maximum salary, or [`NO_SALARY`] for an empty list
pub fn highest_salary(employees: &[Employee]) -> i64 {
    employees
        .iter()
        .map(|employee| i64::from(employee.salary))
        .max()
        .unwrap_or(NO_SALARY)
}

/// Names of the `limit` best paid employees, highest salary first
///
/// The sort is stable: equal salaries keep their upstream order.
pub fn top_earner_names(employees: &[Employee], limit: usize) -> Vec<String> {
    let mut ranked: Vec<&Employee> = employees.iter().collect();
    ranked.sort_by_key(|employee| Reverse(employee.salary));
    ranked
        .into_iter()
        .take(limit)
        .map(|employee| employee.name.clone())
        .collect()
}
