use crate::element::ElementId;
use crc32fast::Hasher;

/// Stable short id for a namespace string (CRC32, hex)
pub fn get_namespace_id(namespace: &str) -> String {
    let mut hasher = Hasher::new();
    hasher.update(b"openbuild:");
    hasher.update(namespace.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Sequential element id generator for one document
#[derive(Debug, Clone)]
pub struct IdGenerator {
    seed: String, // Namespace id (CRC32)
    count: u64,   // Sequential counter
}

impl IdGenerator {
    pub fn new(namespace: &str) -> Self {
        Self {
            seed: get_namespace_id(namespace),
            count: 0,
        }
    }

    pub fn from_seed(seed: String) -> Self {
        Self { seed, count: 0 }
    }

    /// Generate next sequential id
    pub fn new_id(&mut self) -> ElementId {
        self.count = self.count.saturating_add(1);
        ElementId::new(format!("{}-{}", self.seed, self.count))
    }

    /// Move the counter past an id this generator could have produced, so
    /// ids loaded from a file are not handed out again.
    pub fn observe(&mut self, id: &ElementId) {
        let Some(suffix) = id
            .as_str()
            .strip_prefix(self.seed.as_str())
            .and_then(|rest| rest.strip_prefix('-'))
        else {
            return;
        };
        // A suffix at u64::MAX leaves no fresh id after it; skip it
        if let Ok(n) = suffix.parse::<u64>() {
            if n < u64::MAX {
                self.count = self.count.max(n);
            }
        }
    }

    /// Number of ids handed out (or observed) so far
    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn seed(&self) -> &str {
        &self.seed
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new("document")
    }
}
