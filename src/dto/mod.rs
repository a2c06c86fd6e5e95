pub mod api_response;
pub mod contract_dto;
pub mod ride_dto;
pub mod vehicle_dto;

pub use api_response::ApiResponse;
