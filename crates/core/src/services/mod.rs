pub mod allocation_service;
pub mod projection_service;
