//! Background import of shared bookmark files.
//!
//! A single named worker thread drains [`ImportJob`]s from a channel and
//! reports one [`ImportCompletion`] per job on a second channel. The thread
//! owning the user interface drains completions with
//! [`ImportCompletions::deliver`], which tolerates a host that has already
//! been torn down.

use std::panic::{self, AssertUnwindSafe};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Weak};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use tracing::{debug, warn};

use crate::collaborators::{BookmarkImporter, ResourceAccessor};
use crate::error::{ImportFailure, IntentError};
use crate::request::ResourceLocator;

/// Tracing target for the import worker.
pub(crate) const IMPORT_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::import");

/// Name given to the worker thread.
pub const WORKER_THREAD_NAME: &str = "omaps-intent-import";

/// Failure message reported when an importer panics.
pub const IMPORTER_PANICKED: &str = "importer panicked";

/// A document waiting to be imported.
pub struct ImportJob {
    document: ResourceLocator,
    scratch_dir: PathBuf,
    accessor: Arc<dyn ResourceAccessor>,
}

impl ImportJob {
    /// Creates a job importing `document` through `accessor`.
    #[must_use]
    pub fn new(
        document: ResourceLocator,
        scratch_dir: impl Into<PathBuf>,
        accessor: Arc<dyn ResourceAccessor>,
    ) -> Self {
        Self {
            document,
            scratch_dir: scratch_dir.into(),
            accessor,
        }
    }

    /// Returns the document locator.
    #[must_use]
    pub const fn document(&self) -> &ResourceLocator {
        &self.document
    }

    /// Returns the scratch directory handed to the importer.
    #[must_use]
    pub fn scratch_dir(&self) -> &Path {
        &self.scratch_dir
    }
}

/// Outcome of one import job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportCompletion {
    /// Document that was imported.
    pub document: ResourceLocator,
    /// Importer result.
    pub outcome: Result<(), ImportFailure>,
}

/// UI-side target notified once an import finishes.
pub trait ImportHost {
    /// Returns the user to the map.
    fn show_map(&self);
}

/// Handle to the import worker.
///
/// Dropping the queue closes the job channel and waits for the worker to
/// finish every job already submitted.
#[derive(Debug)]
pub struct ImportQueue {
    sender: Option<Sender<ImportJob>>,
    worker: Option<JoinHandle<()>>,
}

impl ImportQueue {
    /// Starts the worker thread.
    ///
    /// # Errors
    ///
    /// Returns [`IntentError::ImportWorker`] when the thread cannot be
    /// spawned.
    pub fn spawn(
        importer: Arc<dyn BookmarkImporter>,
    ) -> Result<(Self, ImportCompletions), IntentError> {
        let (sender, jobs) = mpsc::channel::<ImportJob>();
        let (completed, completions) = mpsc::channel();
        let worker = thread::Builder::new()
            .name(WORKER_THREAD_NAME.to_owned())
            .spawn(move || run_worker(importer.as_ref(), &jobs, &completed))
            .map_err(|source| IntentError::ImportWorker {
                source: Arc::new(source),
            })?;

        let queue = Self {
            sender: Some(sender),
            worker: Some(worker),
        };
        Ok((queue, ImportCompletions { completions }))
    }

    /// Hands a job to the worker without waiting for it.
    ///
    /// # Errors
    ///
    /// Returns [`IntentError::ImportQueueClosed`] when the worker has
    /// stopped.
    pub fn submit(&self, job: ImportJob) -> Result<(), IntentError> {
        let sender = self.sender.as_ref().ok_or(IntentError::ImportQueueClosed)?;
        debug!(
            target: IMPORT_TARGET,
            document = job.document.as_str(),
            "import submitted"
        );
        sender
            .send(job)
            .map_err(|_| IntentError::ImportQueueClosed)
    }
}

impl Drop for ImportQueue {
    fn drop(&mut self) {
        drop(self.sender.take());
        if let Some(worker) = self.worker.take()
            && worker.join().is_err()
        {
            warn!(target: IMPORT_TARGET, "import worker panicked");
        }
    }
}

fn run_worker(
    importer: &dyn BookmarkImporter,
    jobs: &Receiver<ImportJob>,
    completed: &Sender<ImportCompletion>,
) {
    for job in jobs {
        let outcome = import_guarded(importer, &job);
        match &outcome {
            Ok(()) => debug!(
                target: IMPORT_TARGET,
                document = job.document().as_str(),
                "import completed"
            ),
            Err(failure) => warn!(
                target: IMPORT_TARGET,
                document = job.document().as_str(),
                error = %failure,
                "import failed"
            ),
        }

        let completion = ImportCompletion {
            document: job.document,
            outcome,
        };
        if completed.send(completion).is_err() {
            debug!(target: IMPORT_TARGET, "completion receiver dropped");
        }
    }
}

/// Runs one import, turning an importer panic into a failed completion so
/// the worker keeps draining the queue.
fn import_guarded(importer: &dyn BookmarkImporter, job: &ImportJob) -> Result<(), ImportFailure> {
    panic::catch_unwind(AssertUnwindSafe(|| {
        importer.import(job.accessor.as_ref(), job.document(), job.scratch_dir())
    }))
    .unwrap_or_else(|_| Err(ImportFailure::new(job.document().as_str(), IMPORTER_PANICKED)))
}

/// Receiving side of the completion channel.
#[derive(Debug)]
pub struct ImportCompletions {
    completions: Receiver<ImportCompletion>,
}

impl ImportCompletions {
    /// Waits up to `timeout` for the next completion.
    #[must_use]
    pub fn recv_timeout(&self, timeout: Duration) -> Option<ImportCompletion> {
        self.completions.recv_timeout(timeout).ok()
    }

    /// Applies every pending completion to `host` and returns them.
    ///
    /// Completions that arrive after the host has gone are discarded.
    #[must_use]
    pub fn deliver(&self, host: &Weak<dyn ImportHost>) -> Vec<ImportCompletion> {
        let pending: Vec<ImportCompletion> = self.completions.try_iter().collect();
        for completion in &pending {
            match host.upgrade() {
                Some(live) => live.show_map(),
                None => warn!(
                    target: IMPORT_TARGET,
                    document = completion.document.as_str(),
                    "import host gone; completion dropped"
                ),
            }
        }
        pending
    }
}
