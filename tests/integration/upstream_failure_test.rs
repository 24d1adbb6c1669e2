// Integration tests: upstream failure modes
//
// Every failure, whatever its cause, must reach the client as a bare 500.

#[path = "../helpers/mod.rs"]
mod helpers;

use actix_web::http::StatusCode;
use actix_web::{test, web, App};
use employee_gateway::employees;

use helpers::*;

const LIST_ROUTES: [&str; 4] = [
    "/api/v1/employee",
    "/api/v1/employee/search/Bat",
    "/api/v1/employee/highestSalary",
    "/api/v1/employee/topTenHighestEarningEmployeeNames",
];

async fn assert_all_list_routes_fail(base_url: String) {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(employee_service(&base_url)))
            .configure(employees::configure),
    )
    .await;

    for route in LIST_ROUTES {
        let req = test::TestRequest::get().uri(route).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 500, "{} should fail", route);
        assert!(test::read_body(resp).await.is_empty(), "{} leaked a body", route);
    }
}

// A null list payload is treated as failure, not as "no employees".
#[actix_web::test]
async fn test_null_list_payload_fails() {
    let srv = spawn_canned_upstream(
        StatusCode::OK,
        r#"{"data":null,"status":"Successfully processed request."}"#,
    );
    assert_all_list_routes_fail(srv.url(UPSTREAM_PATH)).await;
}

#[actix_web::test]
async fn test_empty_body_fails() {
    let srv = spawn_canned_upstream(StatusCode::OK, "");
    assert_all_list_routes_fail(srv.url(UPSTREAM_PATH)).await;
}

#[actix_web::test]
async fn test_json_null_body_fails() {
    let srv = spawn_canned_upstream(StatusCode::OK, "null");
    assert_all_list_routes_fail(srv.url(UPSTREAM_PATH)).await;
}

#[actix_web::test]
async fn test_malformed_body_fails() {
    let srv = spawn_canned_upstream(StatusCode::OK, r#"{"data":[{"employee_name":1}]}"#);
    assert_all_list_routes_fail(srv.url(UPSTREAM_PATH)).await;
}

#[actix_web::test]
async fn test_upstream_rate_limited_fails() {
    let srv = spawn_canned_upstream(
        StatusCode::TOO_MANY_REQUESTS,
        r#"{"data":null,"status":"Failed to process request.","error":"Too many requests"}"#,
    );
    assert_all_list_routes_fail(srv.url(UPSTREAM_PATH)).await;
}

#[actix_web::test]
async fn test_connection_refused_fails() {
    assert_all_list_routes_fail(unreachable_base_url()).await;
}

#[actix_web::test]
async fn test_create_with_error_envelope_fails() {
    let srv = spawn_canned_upstream(
        StatusCode::OK,
        r#"{"data":null,"status":"Failed to process request.","error":"invalid input"}"#,
    );
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(employee_service_for(&srv)))
            .configure(employees::configure),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/employee")
        .set_json(sentry_request())
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 500);
    assert!(test::read_body(resp).await.is_empty());
}

#[actix_web::test]
async fn test_create_with_incomplete_payload_fails() {
    let srv = spawn_canned_upstream(
        StatusCode::OK,
        r#"{"data":{"id":"4a3a170b-22cd-4ac2-aad1-9bb5b34a1507","employee_name":"Sentry"},"status":"Successfully processed request."}"#,
    );
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(employee_service_for(&srv)))
            .configure(employees::configure),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/employee")
        .set_json(sentry_request())
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 500);
}

#[actix_web::test]
async fn test_delete_flag_false_fails() {
    let batman = employee_record("Batman", 50000, 30, "Developer");
    let id = record_id(&batman);
    let (srv, state) = spawn_upstream(vec![batman]);
    *state.delete_answer.lock().unwrap() = Some(false);

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(employee_service_for(&srv)))
            .configure(employees::configure),
    )
    .await;

    let req = test::TestRequest::delete()
        .uri(&format!("/api/v1/employee/{}", id))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 500);
    assert!(test::read_body(resp).await.is_empty());
    assert_eq!(
        state.calls(),
        vec![format!("GET {}", id), "DELETE Batman".to_string()]
    );
}
