//! Application context - dependency injection container

use std::path::PathBuf;
use std::sync::Arc;

use meetline_core::{
    CalendarGateway, CalendarService, DigestSettings, EventPublisher, ExtractionService, Mailer,
    NotificationService, PendingTaskStore, TaskResponseService,
};
use meetline_domain::{Config, InvokerMode, Result};
use meetline_infra::{
    create_model_invoker, DbManager, DocumentLoader, GoogleCalendarGateway, HttpClient,
    RabbitMqPublisher, SpoolMailer, SqlitePendingTaskStore,
};
use tracing::info;

use crate::utils::health::{ComponentHealth, HealthReport, HealthStatus};

/// Application context - holds all services and dependencies
pub struct AppContext {
    pub config: Config,
    pub db: Arc<DbManager>,
    pub documents: DocumentLoader,
    pub extraction: ExtractionService,
    pub calendar: CalendarService,
    pub notifications: NotificationService,
    pub task_responses: TaskResponseService,
}

impl AppContext {
    /// Load configuration (file, then environment) and build the context.
    ///
    /// # Errors
    /// Propagates configuration, database and client construction failures.
    pub async fn load(config_path: Option<PathBuf>) -> Result<Self> {
        let config = meetline_infra::config::load(config_path)?;
        Self::new(config).await
    }

    /// Build every service from an already loaded configuration.
    ///
    /// # Errors
    /// Returns `MeetlineError::Config` when the configuration fails
    /// validation (e.g. live mode without an API key).
    pub async fn new(config: Config) -> Result<Self> {
        config.validate()?;

        let db = Arc::new(open_database(&config)?);

        let invoker = create_model_invoker(&config.model)?;
        let publisher: Arc<dyn EventPublisher> =
            Arc::new(RabbitMqPublisher::from_config(HttpClient::new()?, &config.queue)?);
        let extraction = ExtractionService::new(invoker).with_publisher(publisher);

        let gateway: Arc<dyn CalendarGateway> =
            Arc::new(GoogleCalendarGateway::new(HttpClient::new()?, &config.calendar));
        let calendar = CalendarService::new(Arc::clone(&gateway));

        let store: Arc<dyn PendingTaskStore> =
            Arc::new(SqlitePendingTaskStore::new(Arc::clone(&db)));
        let mailer: Arc<dyn Mailer> =
            Arc::new(SpoolMailer::new(config.notifications.spool_dir.clone()));
        let notifications = NotificationService::new(
            Arc::clone(&store),
            mailer,
            DigestSettings {
                public_base_url: config.notifications.public_base_url.clone(),
                sender: config.notifications.sender.clone(),
            },
        );
        let task_responses = TaskResponseService::new(store, gateway);

        let documents = DocumentLoader::new()?;

        info!(
            mode = %config.model.mode,
            queue_configured = config.queue.is_configured(),
            db_path = %db.path().display(),
            "Application context ready"
        );

        Ok(Self { config, db, documents, extraction, calendar, notifications, task_responses })
    }
}

fn open_database(config: &Config) -> Result<DbManager> {
    let db = DbManager::new(&config.storage.pending_tasks_path, config.storage.pool_size)?;
    db.run_migrations()?;
    Ok(db)
}

/// Report mode, credentials and component health for `config`.
///
/// Works on configurations that would fail validation so a missing API key
/// shows up as an unhealthy component instead of a startup error.
pub async fn health_report(config: &Config) -> HealthReport {
    let api_key_configured = config.model.api_key().is_some();
    let queue_configured = config.queue.is_configured();

    let model = match (config.model.mode, api_key_configured) {
        (InvokerMode::Deterministic, _) => {
            ComponentHealth::healthy_with("model", "deterministic fixture")
        }
        (InvokerMode::Live, true) => ComponentHealth::healthy("model"),
        (InvokerMode::Live, false) => {
            ComponentHealth::unhealthy("model", "OPENROUTER_API_KEY is not configured")
        }
    };

    let queue = if queue_configured {
        ComponentHealth::healthy("queue")
    } else {
        ComponentHealth::healthy_with("queue", "not configured, publishing is skipped")
    };

    let mut status = HealthStatus::new()
        .add_component(model)
        .add_component(queue)
        .add_component(check_database_health(config).await);
    status.calculate_score();

    HealthReport { mode: config.model.mode, api_key_configured, queue_configured, status }
}

/// Open the pending-task database and run a trivial query on a blocking
/// thread.
async fn check_database_health(config: &Config) -> ComponentHealth {
    let config = config.clone();
    let outcome = tokio::task::spawn_blocking(move || {
        let db = open_database(&config)?;
        db.health_check()
    })
    .await;

    match outcome {
        Ok(Ok(())) => ComponentHealth::healthy("database"),
        Ok(Err(err)) => ComponentHealth::unhealthy("database", err.to_string()),
        Err(err) => ComponentHealth::unhealthy("database", format!("health check panicked: {err}")),
    }
}
