use crate::domain::entities::Customer;
use crate::domain::errors::CustomerError;
use crate::domain::ports::CustomerRepository;

// Single-customer lookup use case.
pub struct GetCustomerUseCase<R> {
    pub repository: R,
}

impl<R> GetCustomerUseCase<R>
where
    R: CustomerRepository,
{
    pub async fn execute(&self, id: u32) -> Result<Customer, CustomerError> {
        self.repository
            .get(id)
            .await
            .map_err(|_| CustomerError::StorageFailure)?
            .ok_or(CustomerError::NotFound(id))
    }
}
