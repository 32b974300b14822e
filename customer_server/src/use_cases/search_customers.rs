use crate::domain::entities::Customer;
use crate::domain::errors::CustomerError;
use crate::domain::ports::CustomerRepository;

// Name search over all customers; an empty filter lists everyone.
pub struct SearchCustomersUseCase<R> {
    pub repository: R,
}

impl<R> SearchCustomersUseCase<R>
where
    R: CustomerRepository,
{
    pub async fn execute(&self, name_filter: &str) -> Result<Vec<Customer>, CustomerError> {
        self.repository
            .search(name_filter)
            .await
            .map_err(|_| CustomerError::StorageFailure)
    }
}
