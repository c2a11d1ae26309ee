
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use tracing::debug;

use crate::{
    config,
    model::{
        employee::{Employee, EmployeeBmc, EmployeeId},
        ModelManager,
    },
    web::{Error, Result},
};

pub async fn api_list_employees(
    State(mm): State<ModelManager>,
    Path((page, page_size)): Path<(String, String)>,
) -> Result<Json<Vec<Employee>>> {
    debug!("{:<12} - api_list_employees {page}/{page_size}", "HANDLER");

    let (offset, limit) = page_window(&page, &page_size)?;
    Ok(Json(EmployeeBmc::list(&mm, offset, limit)))
}

#[axum::debug_handler]
pub async fn api_create_employee(
    State(mm): State<ModelManager>,
    payload: core::result::Result<Json<Employee>, JsonRejection>,
) -> Result<StatusCode> {
    debug!("{:<12} - api_create_employee", "HANDLER");

    let Json(employee_c) = payload.map_err(|rej| Error::InvalidBody(rej.body_text()))?;
    EmployeeBmc::create(&mm, employee_c);
    Ok(StatusCode::CREATED)
}

pub async fn api_get_employee(
    State(mm): State<ModelManager>,
    Path(id): Path<String>,
) -> Result<Json<Employee>> {
    debug!("{:<12} - api_get_employee {id}", "HANDLER");

    let id = parse_id(&id)?;
    let employee = EmployeeBmc::get(&mm, id)?;
    Ok(Json(employee))
}

pub async fn api_update_employee(
    State(mm): State<ModelManager>,
    Path(id): Path<String>,
    payload: core::result::Result<Json<Employee>, JsonRejection>,
) -> Result<StatusCode> {
    debug!("{:<12} - api_update_employee {id}", "HANDLER");

    let id = parse_id(&id)?;
    let Json(mut employee_u) = payload.map_err(|rej| Error::InvalidBody(rej.body_text()))?;
    employee_u.id = id;
    EmployeeBmc::update(&mm, employee_u);
    Ok(StatusCode::OK)
}

pub async fn api_delete_employee(
    State(mm): State<ModelManager>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    debug!("{:<12} - api_delete_employee {id}", "HANDLER");

    let id = parse_id(&id)?;
    EmployeeBmc::delete(&mm, id);
    Ok(StatusCode::OK)
}

pub async fn api_insert_dummy_employees(State(mm): State<ModelManager>) -> StatusCode {
    debug!("{:<12} - api_insert_dummy_employees", "HANDLER");

    EmployeeBmc::insert_dummies(&mm, config().DUMMY_COUNT);
    debug!("{:<12} - employee count now {}", "HANDLER", EmployeeBmc::count(&mm));
    StatusCode::CREATED
}

fn parse_id(raw: &str) -> Result<EmployeeId> {
    raw.parse::<EmployeeId>()
        .map_err(|_| Error::InvalidId(raw.to_string()))
}

/// Turns 1-based `page` and `page_size` path segments into a store offset and limit.
///
/// Pages below 1 and negative sizes are rejected here, so the store never
/// sees a negative offset.
fn page_window(page: &str, page_size: &str) -> Result<(usize, usize)> {
    let page = page
        .parse::<usize>()
        .ok()
        .filter(|page| *page >= 1)
        .ok_or_else(|| Error::InvalidPage(page.to_string()))?;
    let limit = page_size
        .parse::<usize>()
        .map_err(|_| Error::InvalidPageSize(page_size.to_string()))?;

    Ok(((page - 1).saturating_mul(limit), limit))
}
