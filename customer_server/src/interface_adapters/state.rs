use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::entities::Customer;
use crate::domain::ports::CustomerRepository;

pub type CustomerTable = Arc<Mutex<BTreeMap<u32, Customer>>>;

// Application state holding customer storage.
#[derive(Clone, Default)]
pub struct AppState {
    pub customers: CustomerTable,
}

impl AppState {
    pub fn with_customers(customers: impl IntoIterator<Item = Customer>) -> Self {
        let table: BTreeMap<u32, Customer> = customers
            .into_iter()
            .map(|customer| (customer.id, customer))
            .collect();
        Self {
            customers: Arc::new(Mutex::new(table)),
        }
    }
}

// In-memory customer repository adapter, ordered by id.
#[derive(Clone)]
pub struct InMemoryCustomerRepository {
    pub customers: CustomerTable,
}

#[async_trait]
impl CustomerRepository for InMemoryCustomerRepository {
    async fn get(&self, id: u32) -> Result<Option<Customer>, String> {
        let customers = self.customers.lock().await;
        Ok(customers.get(&id).cloned())
    }

    async fn search(&self, name_filter: &str) -> Result<Vec<Customer>, String> {
        let needle = name_filter.to_lowercase();
        let customers = self.customers.lock().await;
        Ok(customers
            .values()
            .filter(|customer| customer.name.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }

    async fn insert(&self, customer: Customer) -> Result<(), String> {
        let mut customers = self.customers.lock().await;
        customers.insert(customer.id, customer);
        Ok(())
    }

    async fn replace(&self, customer: Customer) -> Result<bool, String> {
        let mut customers = self.customers.lock().await;
        match customers.get_mut(&customer.id) {
            Some(existing) => {
                *existing = customer;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn remove(&self, id: u32) -> Result<bool, String> {
        let mut customers = self.customers.lock().await;
        Ok(customers.remove(&id).is_some())
    }
}

// Demo records loaded at startup unless seeding is disabled.
pub fn demo_customers() -> Vec<Customer> {
    vec![
        Customer::new(1, "Kotlin"),
        Customer::new(2, "Spring"),
        Customer::new(3, "Microservice").with_telephone("+44", "7123456789"),
    ]
}
