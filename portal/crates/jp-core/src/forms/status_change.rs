use crate::ApplicationStatus;

/// Teacher decision on an application, sent as query parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusChange {
    pub status: ApplicationStatus,
    pub reason: Option<String>,
}

impl StatusChange {
    pub fn new(status: ApplicationStatus, reason: Option<String>) -> Self {
        Self {
            status,
            reason: reason.filter(|r| !r.trim().is_empty()),
        }
    }

    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("status", self.status.as_str().to_string())];
        if let Some(ref reason) = self.reason {
            pairs.push(("reason", reason.clone()));
        }
        pairs
    }
}
