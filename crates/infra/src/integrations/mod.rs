//! External service integrations

pub mod calendar;
pub mod canned;
pub mod invoker;
pub mod openrouter;
pub mod rabbitmq;

pub use calendar::GoogleCalendarGateway;
pub use canned::CannedInvoker;
pub use invoker::create_model_invoker;
pub use openrouter::{ModelApiError, OpenRouterClient};
pub use rabbitmq::{ManagementEndpoint, RabbitMqPublisher};
