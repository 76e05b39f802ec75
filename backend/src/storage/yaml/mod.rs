pub mod availability_repository;
pub mod connection;

pub use availability_repository::AvailabilityRepository;
pub use connection::DataConnection;
