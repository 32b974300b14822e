// Domain-level errors for customer workflows.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum CustomerError {
    #[error("customer '{0}' not found")]
    NotFound(u32),
    #[error("customer storage failure")]
    StorageFailure,
}
