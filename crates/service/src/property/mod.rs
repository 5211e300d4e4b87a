pub mod repository;
pub mod service;

pub use repository::{PropertyRepository, SeaOrmPropertyRepository};
pub use service::PropertyService;
