//! Issues primary keys for new rows.
//!
//! Candidate ids come from an injected [`IdGenerator`]. A candidate that
//! collides with an existing key is discarded and a new one drawn, up to a
//! configured number of attempts.

use std::future::Future;
use std::sync::Arc;

use crate::config::Config;
use crate::database::is_unique_violation;
use crate::errors::{ServiceError, ServiceResult};
use crate::utils::id_generator::{IdGenerator, RandomIdGenerator};

#[derive(Clone)]
pub struct IdIssuer {
    generator: Arc<dyn IdGenerator>,
    max_attempts: u32,
}

impl IdIssuer {
    /// Creates an issuer. `max_attempts` is clamped to at least one.
    pub fn new(generator: Arc<dyn IdGenerator>, max_attempts: u32) -> Self {
        Self {
            generator,
            max_attempts: max_attempts.max(1),
        }
    }

    /// Random ids of `config.id_length` characters, retried up to
    /// `config.id_max_attempts` times.
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            Arc::new(RandomIdGenerator::new(config.id_length)),
            config.id_max_attempts,
        )
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Runs `insert` with freshly generated ids until one is accepted.
    ///
    /// # Arguments
    /// * `entity` - Name of the kind of row being created, for logs and errors
    /// * `insert` - Writes the row under the given id
    ///
    /// # Errors
    /// * `ServiceError::IdExhausted` if every attempt hit a unique violation
    /// * `ServiceError::Database` for any other storage failure, without retry
    pub async fn issue<T, F, Fut>(&self, entity: &str, mut insert: F) -> ServiceResult<T>
    where
        F: FnMut(String) -> Fut,
        Fut: Future<Output = anyhow::Result<T>>,
    {
        for attempt in 1..=self.max_attempts {
            let id = self.generator.generate();

            match insert(id.clone()).await {
                Ok(row) => return Ok(row),
                Err(e) if is_unique_violation(&e) => {
                    tracing::warn!(
                        "{} id {} already taken (attempt {}/{})",
                        entity,
                        id,
                        attempt,
                        self.max_attempts
                    );
                }
                Err(e) => return Err(ServiceError::Database { source: e }),
            }
        }

        tracing::error!(
            "Gave up issuing a {} id after {} attempts",
            entity,
            self.max_attempts
        );
        Err(ServiceError::id_exhausted(entity, self.max_attempts))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::id_generator::SequenceIdGenerator;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[tokio::test]
    async fn test_first_id_is_used_when_free() {
        let issuer = IdIssuer::new(Arc::new(SequenceIdGenerator::new(&["first"])), 3);

        let id = issuer
            .issue("Invitation", |id| async move { Ok::<_, anyhow::Error>(id) })
            .await
            .unwrap();

        assert_eq!(id, "first");
    }

    #[tokio::test]
    async fn test_other_errors_are_not_retried() {
        let issuer = IdIssuer::new(Arc::new(SequenceIdGenerator::new(&["a", "b"])), 3);
        let calls = AtomicU32::new(0);

        let result: ServiceResult<String> = issuer
            .issue("Guest", |_| {
                calls.fetch_add(1, Ordering::SeqCst);
                async { Err(anyhow::anyhow!("disk I/O error")) }
            })
            .await;

        assert!(matches!(result, Err(ServiceError::Database { .. })));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_zero_attempts_is_clamped() {
        let issuer = IdIssuer::new(Arc::new(SequenceIdGenerator::new(&["x"])), 0);
        assert_eq!(issuer.max_attempts(), 1);
    }
}
