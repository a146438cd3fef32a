//! Lets HTML forms reach PUT and DELETE routes: a POST carrying
//! `?_method=PUT` (or DELETE, PATCH) is re-dispatched with that method.
//! Must be registered with `App::wrap` so it runs before routing.

mod manager;
mod manager_middleware;

pub use manager::*;
pub use manager_middleware::*;

use actix_web::{dev::ServiceRequest, http::Method, web};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct OverrideQuery {
    #[serde(rename = "_method")]
    method: Option<String>,
}

fn requested_method(req: &ServiceRequest) -> Option<Method> {
    if req.method() != Method::POST {
        return None;
    }

    let query = web::Query::<OverrideQuery>::from_query(req.query_string()).ok()?;
    match query.method.as_deref()?.to_ascii_uppercase().as_str() {
        "PUT" => Some(Method::PUT),
        "DELETE" => Some(Method::DELETE),
        "PATCH" => Some(Method::PATCH),
        other => {
            tracing::debug!("ignoring unsupported _method override {:?}", other);
            None
        }
    }
}
