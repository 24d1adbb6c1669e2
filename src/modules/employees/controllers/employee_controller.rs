//! Employee endpoints under `/api/v1/employee`

use std::sync::Arc;

use actix_web::{http::header::ContentType, web, HttpResponse};

use crate::core::error::AppError;
use crate::middleware::json_error_handler;
use crate::modules::employees::models::CreateEmployeeRequest;
use crate::modules::employees::services::EmployeeService;

/// List all employees
/// GET /api/v1/employee
pub async fn get_all_employees(
    service: web::Data<Arc<EmployeeService>>,
) -> Result<HttpResponse, AppError> {
    let employees = service.list_all().await?;

    Ok(HttpResponse::Ok().json(employees))
}

/// Search employees by name fragment
/// GET /api/v1/employee/search/{search_string}
pub async fn search_employees_by_name(
    service: web::Data<Arc<EmployeeService>>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let fragment = path.into_inner();
    let employees = service.search_by_name(&fragment).await?;

    Ok(HttpResponse::Ok().json(employees))
}

/// Get employee by ID
/// GET /api/v1/employee/{id}
pub async fn get_employee_by_id(
    service: web::Data<Arc<EmployeeService>>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let employee = service.get_by_id(&path).await?;

    Ok(HttpResponse::Ok().json(employee))
}

/// GET /api/v1/employee/highestSalary
pub async fn get_highest_salary(
    service: web::Data<Arc<EmployeeService>>,
) -> Result<HttpResponse, AppError> {
    let highest = service.highest_salary().await?;

    Ok(HttpResponse::Ok().json(highest))
}

/// GET /api/v1/employee/topTenHighestEarningEmployeeNames
pub async fn get_top_ten_highest_earning_names(
    service: web::Data<Arc<EmployeeService>>,
) -> Result<HttpResponse, AppError> {
    let names = service.top_earner_names().await?;

    Ok(HttpResponse::Ok().json(names))
}

/// Create a new employee
/// POST /api/v1/employee
pub async fn create_employee(
    service: web::Data<Arc<EmployeeService>>,
    request: web::Json<CreateEmployeeRequest>,
) -> Result<HttpResponse, AppError> {
    let employee = service.create(request.into_inner()).await?;

    Ok(HttpResponse::Ok().json(employee))
}

/// Delete employee by ID, answering with the deleted name as plain text
/// DELETE /api/v1/employee/{id}
pub async fn delete_employee_by_id(
    service: web::Data<Arc<EmployeeService>>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let name = service.delete_by_id(&path).await?;

    Ok(HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body(name))
}

/// Configure employee routes
///
/// Fixed segments are registered ahead of `/{id}` so they win the match.
/// A create body that fails to decode is answered like any other failure.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/employee")
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .route("", web::get().to(get_all_employees))
            .route("", web::post().to(create_employee))
            .route("/search/{search_string}", web::get().to(search_employees_by_name))
            .route("/highestSalary", web::get().to(get_highest_salary))
            .route(
                "/topTenHighestEarningEmployeeNames",
                web::get().to(get_top_ten_highest_earning_names),
            )
            .route("/{id}", web::get().to(get_employee_by_id))
            .route("/{id}", web::delete().to(delete_employee_by_id)),
    );
}
