use crate::domain::errors::CustomerError;
use crate::domain::ports::CustomerRepository;

// Customer removal use case.
pub struct DeleteCustomerUseCase<R> {
    pub repository: R,
}

impl<R> DeleteCustomerUseCase<R>
where
    R: CustomerRepository,
{
    pub async fn execute(&self, id: u32) -> Result<(), CustomerError> {
        let removed = self
            .repository
            .remove(id)
            .await
            .map_err(|_| CustomerError::StorageFailure)?;

        if removed {
            Ok(())
        } else {
            Err(CustomerError::NotFound(id))
        }
    }
}
