//! Batch fan-out and progress tracking.
//!
//! One batch spawns one task per selected pose. Tasks update the shared
//! registry and publish events as they finish; a supervisor task waits for
//! all of them and publishes the terminal batch event. A panicking pose
//! task fails only its own pose.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;
use tokio::sync::RwLock;
use tracing::{error, info};
use uuid::Uuid;

use profashion_core::config::GenerationConfig;
use profashion_core::consistency::ConsistencyProfile;
use profashion_core::store::{GalleryStore, NewGalleryItem};
use profashion_events::{BatchEvent, BatchEventKind, EventBus};

use crate::error::PipelineError;
use crate::orchestrator::{Orchestrator, PreparedInputs};

/// Terminal-or-pending state of one pose within a batch.
#[derive(Debug, Clone, Serialize)]
pub struct PoseResult {
    pub pose_id: String,
    /// Still generating. Exactly one of `item_id` / `error` is set once
    /// this drops to false.
    pub loading: bool,
    pub item_id: Option<Uuid>,
    pub error: Option<String>,
}

impl PoseResult {
    fn pending(pose_id: String) -> Self {
        Self {
            pose_id,
            loading: true,
            item_id: None,
            error: None,
        }
    }
}

/// Snapshot of a batch's progress.
#[derive(Debug, Clone, Serialize)]
pub struct BatchState {
    pub batch_id: Uuid,
    pub project_id: Uuid,
    pub results: Vec<PoseResult>,
    pub completed: bool,
}

/// Handle returned to the caller when a batch is accepted.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct BatchRef {
    pub batch_id: Uuid,
    pub project_id: Uuid,
}

/// Runs batches and tracks their progress until completion.
pub struct BatchCoordinator {
    orchestrator: Arc<Orchestrator>,
    store: Arc<dyn GalleryStore>,
    bus: Arc<EventBus>,
    batches: Arc<RwLock<HashMap<Uuid, BatchState>>>,
}

impl BatchCoordinator {
    pub fn new(
        orchestrator: Arc<Orchestrator>,
        store: Arc<dyn GalleryStore>,
        bus: Arc<EventBus>,
    ) -> Self {
        Self {
            orchestrator,
            store,
            bus,
            batches: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Accept a batch: ensure the project exists, resolve and pre-process
    /// the shared inputs, then fan out one task per pose and return.
    ///
    /// Input resolution happens before acceptance, so an unusable config
    /// fails the whole submission instead of failing every pose later.
    pub async fn run_batch(
        &self,
        config: GenerationConfig,
        project_id: Option<Uuid>,
    ) -> Result<BatchRef, PipelineError> {
        self.run_batch_with_profile(config, project_id, ConsistencyProfile::random())
            .await
    }

    /// [`run_batch`](Self::run_batch) with a caller-chosen consistency
    /// profile instead of a rolled one. Tests pin a profile here the same
    /// way they seed the RNG one layer down.
    pub async fn run_batch_with_profile(
        &self,
        config: GenerationConfig,
        project_id: Option<Uuid>,
        profile: ConsistencyProfile,
    ) -> Result<BatchRef, PipelineError> {
        let project_id = project_id.unwrap_or_else(Uuid::new_v4);
        self.store.create_project(project_id, Utc::now()).await?;

        let inputs = Arc::new(self.orchestrator.prepare_inputs(&config).await?);
        let config = Arc::new(config);

        let batch_id = Uuid::new_v4();
        let state = BatchState {
            batch_id,
            project_id,
            results: config
                .pose_ids
                .iter()
                .map(|id| PoseResult::pending(id.clone()))
                .collect(),
            completed: false,
        };
        self.batches.write().await.insert(batch_id, state);
        info!(%batch_id, %project_id, poses = config.pose_ids.len(), "batch accepted");

        let handles: Vec<_> = config
            .pose_ids
            .iter()
            .enumerate()
            .map(|(index, pose_id)| {
                let task = PoseTask {
                    orchestrator: Arc::clone(&self.orchestrator),
                    store: Arc::clone(&self.store),
                    bus: Arc::clone(&self.bus),
                    batches: Arc::clone(&self.batches),
                    config: Arc::clone(&config),
                    inputs: Arc::clone(&inputs),
                    profile: profile.clone(),
                    batch_id,
                    project_id,
                    index,
                    pose_id: pose_id.clone(),
                };
                (index, pose_id.clone(), tokio::spawn(task.run()))
            })
            .collect();

        let bus = Arc::clone(&self.bus);
        let batches = Arc::clone(&self.batches);
        tokio::spawn(async move {
            for (index, pose_id, handle) in handles {
                if let Err(join_err) = handle.await {
                    error!(%batch_id, pose_id, %join_err, "pose task aborted");
                    record_failure(
                        &batches,
                        &bus,
                        batch_id,
                        project_id,
                        index,
                        &pose_id,
                        "Generation task aborted".to_string(),
                    )
                    .await;
                }
            }

            let mut registry = batches.write().await;
            if let Some(state) = registry.get_mut(&batch_id) {
                state.completed = true;
                let succeeded = state.results.iter().filter(|r| r.item_id.is_some()).count();
                let failed = state.results.len() - succeeded;
                info!(%batch_id, succeeded, failed, "batch completed");
                bus.publish(BatchEvent::new(
                    batch_id,
                    project_id,
                    BatchEventKind::BatchCompleted { succeeded, failed },
                ));
            }
        });

        Ok(BatchRef {
            batch_id,
            project_id,
        })
    }

    /// Current progress of a batch, if it is known to this process.
    pub async fn snapshot(&self, batch_id: Uuid) -> Option<BatchState> {
        self.batches.read().await.get(&batch_id).cloned()
    }
}

struct PoseTask {
    orchestrator: Arc<Orchestrator>,
    store: Arc<dyn GalleryStore>,
    bus: Arc<EventBus>,
    batches: Arc<RwLock<HashMap<Uuid, BatchState>>>,
    config: Arc<GenerationConfig>,
    inputs: Arc<PreparedInputs>,
    profile: ConsistencyProfile,
    batch_id: Uuid,
    project_id: Uuid,
    index: usize,
    pose_id: String,
}

impl PoseTask {
    async fn run(self) {
        let outcome = self
            .orchestrator
            .generate_pose(&self.config, &self.inputs, &self.profile, &self.pose_id)
            .await;

        match outcome {
            Ok(image) => {
                let item = NewGalleryItem {
                    id: Uuid::new_v4(),
                    project_id: self.project_id,
                    pose_id: self.pose_id.clone(),
                    mime_type: image.mime_type,
                    image_data: image.data,
                    created_at: Utc::now(),
                };
                let item_id = item.id;
                match self.store.append_item(item).await {
                    Ok(()) => self.record_success(item_id).await,
                    Err(err) => self.record_failure(err.to_string()).await,
                }
            }
            Err(err) => self.record_failure(err.to_string()).await,
        }
    }

    async fn record_success(&self, item_id: Uuid) {
        let mut registry = self.batches.write().await;
        if let Some(state) = registry.get_mut(&self.batch_id) {
            if let Some(result) = state.results.get_mut(self.index) {
                result.loading = false;
                result.item_id = Some(item_id);
            }
        }
        drop(registry);

        self.bus.publish(BatchEvent::new(
            self.batch_id,
            self.project_id,
            BatchEventKind::PoseCompleted {
                pose_id: self.pose_id.clone(),
                item_id,
            },
        ));
    }

    async fn record_failure(&self, error: String) {
        record_failure(
            &self.batches,
            &self.bus,
            self.batch_id,
            self.project_id,
            self.index,
            &self.pose_id,
            error,
        )
        .await;
    }
}

async fn record_failure(
    batches: &RwLock<HashMap<Uuid, BatchState>>,
    bus: &EventBus,
    batch_id: Uuid,
    project_id: Uuid,
    index: usize,
    pose_id: &str,
    error: String,
) {
    let mut registry = batches.write().await;
    if let Some(state) = registry.get_mut(&batch_id) {
        if let Some(result) = state.results.get_mut(index) {
            // Keep the first failure if the supervisor reports the same
            // pose again after a panic.
            if !result.loading {
                return;
            }
            result.loading = false;
            result.error = Some(error.clone());
        }
    }
    drop(registry);

    bus.publish(BatchEvent::new(
        batch_id,
        project_id,
        BatchEventKind::PoseFailed {
            pose_id: pose_id.to_string(),
            error,
        },
    ));
}
