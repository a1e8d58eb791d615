//! Reports service errors.

use thiserror::Error;

use crate::api::ApiError;

#[derive(Debug, Error)]
pub enum ReportsServiceError {
    #[error("start date is after end date")]
    InvalidDateRange,

    #[error("api error")]
    Api(#[from] ApiError),
}
