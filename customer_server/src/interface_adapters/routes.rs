use crate::interface_adapters::handlers::{
    create_customer, delete_customer, get_customer, search_customers, update_customer,
};
use crate::interface_adapters::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

pub fn app(state: AppState) -> Router {
    Router::new()
        .route(
            "/customer/{id}",
            get(get_customer).put(update_customer).delete(delete_customer),
        )
        .route("/customer", post(create_customer))
        .route("/customer/", post(create_customer))
        .route("/customers", get(search_customers))
        .with_state(state)
}
