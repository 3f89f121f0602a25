use rand::{Rng, distributions::Alphanumeric};

use crate::config::DEFAULT_ID_LENGTH;

/// Generates a random alphanumeric identifier of the specified length.
///
/// Every character is drawn independently and uniformly from the 62 symbols
/// `A-Z`, `a-z` and `0-9`. No uniqueness check is made here; callers that
/// need unique keys go through [`crate::services::id_issuer::IdIssuer`].
///
/// # Examples
///
/// ```
/// use rsvp_backend::utils::id_generator::generate_id;
///
/// let id = generate_id(8);
/// assert_eq!(id.len(), 8);
/// assert!(id.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_id(length: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}

/// Source of candidate identifiers for new rows.
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// Thread-RNG backed generator producing fixed-length alphanumeric ids.
#[derive(Debug, Clone)]
pub struct RandomIdGenerator {
    length: usize,
}

impl RandomIdGenerator {
    pub fn new(length: usize) -> Self {
        Self { length }
    }

    pub fn length(&self) -> usize {
        self.length
    }
}

impl Default for RandomIdGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_ID_LENGTH)
    }
}

impl IdGenerator for RandomIdGenerator {
    fn generate(&self) -> String {
        generate_id(self.length)
    }
}

/// Generator replaying a fixed list of ids, then repeating the last one.
#[cfg(test)]
pub(crate) struct SequenceIdGenerator {
    ids: Vec<String>,
    next: std::sync::atomic::AtomicUsize,
}

#[cfg(test)]
impl SequenceIdGenerator {
    pub(crate) fn new(ids: &[&str]) -> Self {
        Self {
            ids: ids.iter().map(|id| id.to_string()).collect(),
            next: std::sync::atomic::AtomicUsize::new(0),
        }
    }

    pub(crate) fn calls(&self) -> usize {
        self.next.load(std::sync::atomic::Ordering::SeqCst)
    }
}

#[cfg(test)]
impl IdGenerator for SequenceIdGenerator {
    fn generate(&self) -> String {
        let index = self.next.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        let index = index.min(self.ids.len() - 1);
        self.ids[index].clone()
    }
}
