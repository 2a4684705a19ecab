use std::sync::Arc;

use vigil_core::{Notifier, SampleRepository, SessionRepository};

/// Error returned when a [`ServiceContextBuilder`] is missing a dependency.
#[derive(Debug, thiserror::Error)]
#[error("ServiceContext is missing a dependency: {0}")]
pub struct MissingDependency(pub &'static str);

/// Shared context holding the dependencies every service works against.
///
/// Cloning is cheap; the trait objects are reference-counted.
#[derive(Clone)]
pub struct ServiceContext {
    samples: Arc<dyn SampleRepository>,
    sessions: Arc<dyn SessionRepository>,
    notifier: Arc<dyn Notifier>,
}

impl ServiceContext {
    pub fn new(
        samples: Arc<dyn SampleRepository>,
        sessions: Arc<dyn SessionRepository>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            samples,
            sessions,
            notifier,
        }
    }

    pub fn builder() -> ServiceContextBuilder {
        ServiceContextBuilder::new()
    }

    pub fn samples(&self) -> &dyn SampleRepository {
        self.samples.as_ref()
    }

    pub fn sessions(&self) -> &dyn SessionRepository {
        self.sessions.as_ref()
    }

    pub fn notifier(&self) -> &dyn Notifier {
        self.notifier.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext").finish_non_exhaustive()
    }
}

/// Builder that collects dependencies before constructing a [`ServiceContext`].
#[derive(Default)]
pub struct ServiceContextBuilder {
    samples: Option<Arc<dyn SampleRepository>>,
    sessions: Option<Arc<dyn SessionRepository>>,
    notifier: Option<Arc<dyn Notifier>>,
}

impl ServiceContextBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn samples(mut self, samples: Arc<dyn SampleRepository>) -> Self {
        self.samples = Some(samples);
        self
    }

    #[must_use]
    pub fn sessions(mut self, sessions: Arc<dyn SessionRepository>) -> Self {
        self.sessions = Some(sessions);
        self
    }

    #[must_use]
    pub fn notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    pub fn build(self) -> Result<ServiceContext, MissingDependency> {
        Ok(ServiceContext {
            samples: self.samples.ok_or(MissingDependency("SampleRepository"))?,
            sessions: self
                .sessions
                .ok_or(MissingDependency("SessionRepository"))?,
            notifier: self.notifier.ok_or(MissingDependency("Notifier"))?,
        })
    }
}
