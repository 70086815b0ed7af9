//! RabbitMQ integration

pub mod publisher;

pub use publisher::{ManagementEndpoint, RabbitMqPublisher};
