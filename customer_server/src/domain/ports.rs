use async_trait::async_trait;

use crate::domain::entities::Customer;

// Port for customer storage used by customer use cases.
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    async fn get(&self, id: u32) -> Result<Option<Customer>, String>;
    // Case-insensitive substring match on the name, ordered by id.
    async fn search(&self, name_filter: &str) -> Result<Vec<Customer>, String>;
    // Upsert keyed by `customer.id`.
    async fn insert(&self, customer: Customer) -> Result<(), String>;
    // Overwrites `customer.id` only if it is already stored; the check and
    // the write are one atomic step. Returns whether a record was replaced.
    async fn replace(&self, customer: Customer) -> Result<bool, String>;
    async fn remove(&self, id: u32) -> Result<bool, String>;
}
