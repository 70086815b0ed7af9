//! Health check command

use meetline_domain::Config;

use crate::context::health_report;
use crate::utils::health::HealthReport;

/// Report the configured mode, which credentials are present and whether
/// the pending-task database answers.
///
/// # Example Response
/// ```json
/// {
///   "mode": "deterministic",
///   "api_key_configured": false,
///   "queue_configured": false,
///   "is_healthy": true,
///   "score": 1.0,
///   "components": [
///     { "name": "model", "is_healthy": true, "message": "deterministic fixture" },
///     { "name": "queue", "is_healthy": true, "message": "not configured, publishing is skipped" },
///     { "name": "database", "is_healthy": true, "message": null }
///   ],
///   "timestamp": 1781258400
/// }
/// ```
pub async fn health(config: &Config) -> HealthReport {
    health_report(config).await
}
