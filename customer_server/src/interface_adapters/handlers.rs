use crate::domain::entities::Customer;
use crate::interface_adapters::errors::ApiFailure;
use crate::interface_adapters::protocol::SearchCustomersQuery;
use crate::interface_adapters::state::{AppState, InMemoryCustomerRepository};
use crate::use_cases::create_customer::CreateCustomerUseCase;
use crate::use_cases::delete_customer::DeleteCustomerUseCase;
use crate::use_cases::get_customer::GetCustomerUseCase;
use crate::use_cases::search_customers::SearchCustomersUseCase;
use crate::use_cases::update_customer::UpdateCustomerUseCase;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::{http::StatusCode, Json};
use tracing::{debug, info};

fn repository(state: &AppState) -> InMemoryCustomerRepository {
    InMemoryCustomerRepository {
        customers: state.customers.clone(),
    }
}

// Handler for fetching a single customer.
pub async fn get_customer(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<Customer>, ApiFailure> {
    let use_case = GetCustomerUseCase {
        repository: repository(&state),
    };

    let customer = use_case.execute(id).await?;
    debug!(customer_id = id, "customer fetched");

    Ok(Json(customer))
}

// Handler for listing customers whose name contains `nameFilter`.
pub async fn search_customers(
    State(state): State<AppState>,
    Query(query): Query<SearchCustomersQuery>,
) -> Result<Json<Vec<Customer>>, ApiFailure> {
    let use_case = SearchCustomersUseCase {
        repository: repository(&state),
    };

    let customers = use_case.execute(&query.name_filter).await?;
    debug!(
        name_filter = %query.name_filter,
        matches = customers.len(),
        "customers searched"
    );

    Ok(Json(customers))
}

// Handler for creating (or overwriting) a customer.
pub async fn create_customer(
    State(state): State<AppState>,
    payload: Result<Json<Customer>, JsonRejection>,
) -> Result<StatusCode, ApiFailure> {
    let Json(customer) = payload?;
    let customer_id = customer.id;
    let use_case = CreateCustomerUseCase {
        repository: repository(&state),
    };

    use_case.execute(customer).await?;
    info!(customer_id, "customer created");

    Ok(StatusCode::CREATED)
}

// Handler for replacing an existing customer.
pub async fn update_customer(
    State(state): State<AppState>,
    Path(id): Path<u32>,
    payload: Result<Json<Customer>, JsonRejection>,
) -> Result<StatusCode, ApiFailure> {
    let Json(customer) = payload?;
    let use_case = UpdateCustomerUseCase {
        repository: repository(&state),
    };

    use_case.execute(id, customer).await?;
    info!(customer_id = id, "customer updated");

    Ok(StatusCode::ACCEPTED)
}

// Handler for deleting a customer.
pub async fn delete_customer(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<StatusCode, ApiFailure> {
    let use_case = DeleteCustomerUseCase {
        repository: repository(&state),
    };

    use_case.execute(id).await?;
    info!(customer_id = id, "customer deleted");

    Ok(StatusCode::OK)
}
