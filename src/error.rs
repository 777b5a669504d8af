use thiserror::Error;

/// Failure surfaced to callers of a company lookup.
///
/// Missing positions and unparseable addresses never show up here; they
/// degrade to `"n/a"` inside the record instead.
#[derive(Debug, Error)]
pub enum CompanyError {
    #[error("Company with usdot {usdot} was not found in the SAFER system")]
    NotFound { usdot: String },

    #[error("Failed to fetch SAFER page for usdot {usdot}: {source}")]
    Transport {
        usdot: String,
        #[source]
        source: reqwest::Error,
    },
}

impl CompanyError {
    pub fn not_found(usdot: impl Into<String>) -> Self {
        CompanyError::NotFound {
            usdot: usdot.into(),
        }
    }

    pub fn usdot(&self) -> &str {
        match self {
            CompanyError::NotFound { usdot } | CompanyError::Transport { usdot, .. } => usdot,
        }
    }
}
