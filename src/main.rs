
mod config;
mod error;
mod model;
mod web;

#[cfg(test)]
pub mod _dev_utils;

pub use self::error::{Error, Result};
pub use config::config;

use crate::model::ModelManager;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mm = ModelManager::new();
    let routes_all = web::app(mm);

    let addr = config().BIND_ADDR;
    info!("{:<12} - {addr}\n", "LISTENING");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, routes_all)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("{:<12} - ctrl_c handler failed: {err}", "SHUTDOWN");
        return;
    }
    info!("{:<12} - ctrl_c received", "SHUTDOWN");
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use serde_json::{json, Value};

    async fn spawn_app(mm: ModelManager) -> Result<httpc_test::Client> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        tokio::spawn(async move { axum::serve(listener, web::app(mm)).await });

        Ok(httpc_test::new_client(format!("http://{addr}"))?)
    }

    fn ids(body: &Value) -> Vec<i64> {
        body.as_array()
            .map(|items| items.iter().filter_map(|e| e["id"].as_i64()).collect())
            .unwrap_or_default()
    }

    #[tokio::test]
    async fn test_crud_over_http() -> Result<()> {
        let hc = spawn_app(ModelManager::new()).await?;

        let res = hc.do_get("/employees/1").await?;
        assert_eq!(res.status().as_u16(), 404);
        let body = res.json_body()?;
        assert_eq!(body["error"]["type"], "ENTITY_NOT_FOUND");
        assert!(body["error"]["req_uuid"].is_string());

        let res = hc
            .do_post(
                "/employees",
                json!({ "id": 1, "name": "A", "position": "Dev", "salary": 50000 }),
            )
            .await?;
        assert_eq!(res.status().as_u16(), 201);

        let res = hc.do_get("/employees/1/10").await?;
        assert_eq!(res.status().as_u16(), 200);
        assert_eq!(
            res.json_body()?,
            json!([{ "id": 1, "name": "A", "position": "Dev", "salary": 50000.0 }])
        );

        let res = hc
            .do_put(
                "/employees/1",
                json!({ "id": 1, "name": "B", "position": "Dev", "salary": 50000 }),
            )
            .await?;
        assert_eq!(res.status().as_u16(), 200);

        let res = hc.do_get("/employees/1").await?;
        assert_eq!(res.status().as_u16(), 200);
        assert_eq!(res.json_body()?["name"], "B");

        let res = hc.do_delete("/employees/1").await?;
        assert_eq!(res.status().as_u16(), 200);
        let res = hc.do_delete("/employees/1").await?;
        assert_eq!(res.status().as_u16(), 200);

        let res = hc.do_get("/employees/1").await?;
        assert_eq!(res.status().as_u16(), 404);
        Ok(())
    }

    #[tokio::test]
    async fn test_pagination_over_http() -> Result<()> {
        let hc = spawn_app(ModelManager::new()).await?;
        for i in 1..=10 {
            let res = hc
                .do_post(
                    "/employees",
                    json!({ "id": i, "name": format!("Employee {i}"), "position": "Dev", "salary": i * 10000 }),
                )
                .await?;
            assert_eq!(res.status().as_u16(), 201);
        }

        let res = hc.do_get("/employees/1/5").await?;
        assert_eq!(ids(&res.json_body()?), vec![1, 2, 3, 4, 5]);
        let res = hc.do_get("/employees/2/5").await?;
        assert_eq!(ids(&res.json_body()?), vec![6, 7, 8, 9, 10]);
        let res = hc.do_get("/employees/3/5").await?;
        assert_eq!(res.json_body()?, json!([]));

        for bad in ["/employees/-1/5", "/employees/0/5", "/employees/one/5", "/employees/1/-5"] {
            let res = hc.do_get(bad).await?;
            assert_eq!(res.status().as_u16(), 400, "{bad}");
            assert_eq!(res.json_body()?["error"]["type"], "INVALID_PARAMS");
        }
        Ok(())
    }

    #[tokio::test]
    async fn test_malformed_input_over_http() -> Result<()> {
        let hc = spawn_app(ModelManager::new()).await?;
        let fx_employee = json!({ "id": 1, "name": "A", "position": "Dev", "salary": 50000.0 });
        let res = hc.do_post("/employees", fx_employee.clone()).await?;
        assert_eq!(res.status().as_u16(), 201);

        let res = hc.do_post("/employees", json!({ "id": "abc" })).await?;
        assert_eq!(res.status().as_u16(), 400);
        assert_eq!(res.json_body()?["error"]["type"], "INVALID_PARAMS");

        let res = hc.do_put("/employees/1", json!({ "name": "missing fields" })).await?;
        assert_eq!(res.status().as_u16(), 400);

        let res = hc.do_get("/employees/abc").await?;
        assert_eq!(res.status().as_u16(), 400);

        let res = hc.do_get("/employees/1/100").await?;
        assert_eq!(res.json_body()?, json!([fx_employee]));
        Ok(())
    }

    #[tokio::test]
    async fn test_insert_dummy_employees_over_http() -> Result<()> {
        let hc = spawn_app(ModelManager::new()).await?;

        let res = hc.do_post("/insert-dummy-employees", json!({})).await?;
        assert_eq!(res.status().as_u16(), 201);

        let res = hc.do_get("/employees/1/3").await?;
        let body = res.json_body()?;
        assert_eq!(ids(&body), vec![1, 2, 3]);
        assert_eq!(body[0]["name"], "Employee1");
        assert_eq!(body[0]["position"], "Developer");
        Ok(())
    }
}
