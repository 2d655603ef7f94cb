//! # Ignite Node Runtime
//!
//! The host process for the crowdfunding core. The runtime owns no domain
//! logic: it assembles the service, restores or seeds state, runs the
//! long-lived background tasks, and persists a snapshot at shutdown.
//!
//! ## Background Tasks
//!
//! - Event logger: subscribes to the full bus and emits a structured log
//!   line per domain event, the node's audit trail.
//! - Heartbeat publisher: a `Heartbeat` event at a fixed interval, so
//!   stream consumers can distinguish a quiet service from a dead one.
//!
//! ## Startup Sequence
//!
//! 1. Load configuration from environment
//! 2. Restore snapshot if one exists, otherwise seed demo data (if enabled)
//! 3. Spawn background tasks
//! 4. Run until shutdown, then write the snapshot back

pub mod config;

pub use config::{ConfigError, NodeConfig};

use anyhow::{Context, Result};
use ignite_core::{CoreSnapshot, IgniteService};
use shared_bus::{EventFilter, SparkEvent};
use shared_types::entities::now_millis;
use shared_types::policy::CorePolicy;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// The node runtime orchestrating the core service and its tasks.
pub struct NodeRuntime {
    config: NodeConfig,
    service: Arc<IgniteService>,
    shutdown_tx: tokio::sync::watch::Sender<bool>,
    shutdown_rx: tokio::sync::watch::Receiver<bool>,
}

impl NodeRuntime {
    /// Creates a runtime with a fresh, empty service.
    #[must_use]
    pub fn new(config: NodeConfig) -> Self {
        let service = Arc::new(IgniteService::new(CorePolicy::default()));
        let (shutdown_tx, shutdown_rx) = tokio::sync::watch::channel(false);

        Self {
            config,
            service,
            shutdown_tx,
            shutdown_rx,
        }
    }

    /// The core service this runtime hosts.
    #[must_use]
    pub fn service(&self) -> Arc<IgniteService> {
        Arc::clone(&self.service)
    }

    /// Starts the runtime: state restoration, then background tasks.
    ///
    /// # Errors
    ///
    /// Fails if a snapshot file exists but cannot be read or parsed, or if
    /// demo seeding is rejected by the core.
    pub async fn start(&self) -> Result<()> {
        info!("===========================================");
        info!("  Ignite Node Runtime v0.1.0");
        info!("===========================================");

        self.initialize_state()?;
        self.spawn_event_logger();
        self.spawn_heartbeat();

        info!(
            heartbeat_secs = self.config.heartbeat_interval_secs,
            "Node running"
        );
        Ok(())
    }

    /// Restores a snapshot when one is on disk, otherwise seeds demo data.
    fn initialize_state(&self) -> Result<()> {
        if let Some(path) = &self.config.snapshot_path {
            if path.exists() {
                load_snapshot(&self.service, path)?;
                return Ok(());
            }
            info!(path = %path.display(), "No snapshot found, starting cold");
        }

        if self.config.seed_demo_data {
            ignite_core::fixtures::seed_demo_data(&self.service)
                .context("failed to seed demo data")?;
        }
        Ok(())
    }

    fn spawn_event_logger(&self) {
        let mut sub = self.service.subscribe(EventFilter::all());
        let mut shutdown = self.shutdown_rx.clone();

        tokio::spawn(async move {
            loop {
                tokio::select! {
                    event = sub.recv() => {
                        let Some(event) = event else { break };
                        log_event(&event);
                    }
                    _ = shutdown.changed() => {
                        info!("Event logger stopping");
                        break;
                    }
                }
            }
        });
    }

    fn spawn_heartbeat(&self) {
        let bus = Arc::clone(self.service.bus());
        let interval = Duration::from_secs(self.config.heartbeat_interval_secs);
        let mut shutdown = self.shutdown_rx.clone();

        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            // The first tick fires immediately; skip it so subscribers get
            // heartbeats at the configured cadence only.
            ticker.tick().await;
            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        bus.publish_sync(SparkEvent::Heartbeat { timestamp: now_millis() });
                    }
                    _ = shutdown.changed() => {
                        info!("Heartbeat publisher stopping");
                        break;
                    }
                }
            }
        });
    }

    /// Shuts down gracefully: stop tasks, persist the snapshot.
    pub async fn shutdown(&self) {
        info!("Initiating graceful shutdown...");

        if self.shutdown_tx.send(true).is_err() {
            warn!("No tasks were listening for shutdown");
        }

        if let Some(path) = &self.config.snapshot_path {
            if let Err(e) = save_snapshot(&self.service, path) {
                warn!(error = %e, "Failed to persist snapshot");
            }
        }

        // Give tasks a moment to observe the signal
        tokio::time::sleep(Duration::from_millis(200)).await;
        info!("Shutdown complete");
    }
}

/// Restores core state from a JSON snapshot file.
///
/// # Errors
///
/// Fails on unreadable or unparseable files.
pub fn load_snapshot(service: &IgniteService, path: &Path) -> Result<()> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("failed to read snapshot {}", path.display()))?;
    let snapshot: CoreSnapshot = serde_json::from_slice(&bytes)
        .with_context(|| format!("failed to parse snapshot {}", path.display()))?;

    if service.restore_snapshot(snapshot) {
        info!(path = %path.display(), "Snapshot restored");
    } else {
        warn!(path = %path.display(), "Snapshot rejected, keeping current state");
    }
    Ok(())
}

/// Writes core state to a JSON snapshot file.
///
/// # Errors
///
/// Fails if the snapshot cannot be serialized or written.
pub fn save_snapshot(service: &IgniteService, path: &Path) -> Result<()> {
    let snapshot = service.export_snapshot();
    let json = serde_json::to_vec_pretty(&snapshot).context("failed to serialize snapshot")?;
    std::fs::write(path, json)
        .with_context(|| format!("failed to write snapshot {}", path.display()))?;
    info!(path = %path.display(), "Snapshot written");
    Ok(())
}

fn log_event(event: &SparkEvent) {
    match event {
        SparkEvent::ParticipantJoined(p) => {
            info!(event = event.label(), id = %p.id, name = %p.display_name, "Participant joined");
        }
        SparkEvent::SparkCreated(s) => {
            info!(event = event.label(), spark_id = %s.id, title = %s.title, goal = s.goal, "Spark created");
        }
        SparkEvent::BackingMade(b) => {
            info!(
                event = event.label(),
                spark_id = %b.spark_id,
                backer = %b.backer_name,
                amount = b.amount,
                "Backing made"
            );
        }
        SparkEvent::SparkIgnited(s) => {
            info!(
                event = event.label(),
                spark_id = %s.id,
                title = %s.title,
                backers = s.backer_count(),
                "Spark ignited"
            );
        }
        SparkEvent::Heartbeat { timestamp } => {
            debug!(event = event.label(), timestamp, "Heartbeat");
        }
    }
}
