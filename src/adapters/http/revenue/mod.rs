//! Revenue simulator HTTP adapter module.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::SimulationRequest;
pub use handlers::RevenueApiError;
pub use routes::revenue_routes;
