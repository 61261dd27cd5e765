//! Application services for dares.

mod acquisition;
mod dare_service;

pub use acquisition::{
    AcquireDareRequest, AcquiredDare, AcquisitionError, AcquisitionOrigin, AcquisitionPolicy,
    ContentAcquisition,
};
pub use dare_service::{CreateDareRequest, DareService, DareServiceError, DareServiceResult};
