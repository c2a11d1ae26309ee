use axum::{
    routing::{get, post},
    Router,
};
use employee_rest::{
    api_create_employee, api_delete_employee, api_get_employee, api_insert_dummy_employees,
    api_list_employees, api_update_employee,
};

use crate::model::ModelManager;

mod employee_rest;

pub fn routes(mm: ModelManager) -> Router {
    // The router needs one parameter name per segment position, so the id and
    // page routes share `{key}`; the handlers extract positionally.
    Router::new()
        .route("/employees", post(api_create_employee))
        .route(
            "/employees/{key}",
            get(api_get_employee)
                .put(api_update_employee)
                .delete(api_delete_employee),
        )
        .route("/employees/{key}/{page_size}", get(api_list_employees))
        .route("/insert-dummy-employees", post(api_insert_dummy_employees))
        .with_state(mm)
}
