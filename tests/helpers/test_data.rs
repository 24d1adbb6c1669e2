// Test Data Factory
//
// Employee fixtures in the upstream wire format.

use serde_json::{json, Value};
use uuid::Uuid;

/// Build one upstream employee record
pub fn employee_record(name: &str, salary: u32, age: u32, title: &str) -> Value {
    json!({
        "id": Uuid::new_v4().to_string(),
        "employee_name": name,
        "employee_salary": salary,
        "employee_age": age,
        "employee_title": title,
        "employee_email": format!("{}@company.com", name.to_lowercase().replace(' ', ".")),
    })
}

/// Twelve heroes, two more than the top earners list holds
pub fn dummy_employees() -> Vec<Value> {
    vec![
        employee_record("Batman", 50000, 30, "Developer"),
        employee_record("Spiderman", 60000, 25, "Designer"),
        employee_record("Wonder Woman", 55000, 20, "Developer"),
        employee_record("Black Adam", 10000, 15, "Designer"),
        employee_record("Flash", 33000, 29, "Developer"),
        employee_record("Green Lantern", 66000, 24, "Designer"),
        employee_record("Cyborg", 29000, 19, "Developer"),
        employee_record("Zeus", 69000, 14, "Designer"),
        employee_record("Hercules", 14000, 30, "Developer"),
        employee_record("Dr. Fate", 41000, 25, "Designer"),
        employee_record("Harley Quinn", 33000, 30, "Developer"),
        employee_record("Joker", 44000, 25, "Designer"),
    ]
}

/// Client create request for the Sentry scenario
pub fn sentry_request() -> Value {
    json!({
        "name": "Sentry",
        "salary": 12345,
        "age": 28,
        "title": "Lead"
    })
}

/// Id field of an upstream record
pub fn record_id(record: &Value) -> String {
    record["id"].as_str().unwrap_or_default().to_string()
}
