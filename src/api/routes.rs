//! API route configuration.

use axum::Router;
use axum::routing::{delete, get, patch, post};

use super::error::ApiError;
use super::handlers::{companies, industries, invoices};
use super::state::AppState;
use crate::db::Database;

/// Build routes with generic database type.
///
/// This macro reduces boilerplate when registering handlers that are generic
/// over the Database trait. It applies the turbofish operator automatically.
macro_rules! routes {
    ($D:ty => {
        $($method:ident $path:literal => $($handler:ident)::+),* $(,)?
    }) => {{
        let router = Router::new();
        $(
            let router = router.route($path, $method($($handler)::+::<$D>));
        )*
        router
    }};
}

/// Fallback for unmatched routes.
async fn not_found() -> ApiError {
    ApiError::not_found("Not Found")
}

/// Create the API router.
pub fn create_router<D: Database + 'static>(state: AppState<D>) -> Router {
    let company_routes = routes!(D => {
        get "/companies" => companies::list_companies,
        post "/companies" => companies::create_company,
        get "/companies/{code}" => companies::get_company,
        patch "/companies/{code}" => companies::update_company,
        delete "/companies/{code}" => companies::delete_company,
    });

    let invoice_routes = routes!(D => {
        get "/invoices" => invoices::list_invoices,
        post "/invoices" => invoices::create_invoice,
        get "/invoices/{id}" => invoices::get_invoice,
        patch "/invoices/{id}" => invoices::update_invoice,
        delete "/invoices/{id}" => invoices::delete_invoice,
    });

    let industry_routes = routes!(D => {
        get "/industries" => industries::list_industries,
        post "/industries" => industries::create_industry,
        post "/industries/{code}" => industries::associate_company,
    });

    company_routes
        .merge(invoice_routes)
        .merge(industry_routes)
        .fallback(not_found)
        .with_state(state)
}
