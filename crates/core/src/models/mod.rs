pub mod allocation;
pub mod asset;
pub mod plan;
pub mod portfolio;
pub mod retirement;
