use std::fmt;

/// Outcome reported for the pipeline run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Success,
    Failure,
}

impl Status {
    /// A non-empty override wins over the pipeline status. Anything other
    /// than exactly `"failure"` counts as success.
    pub fn resolve(explicit_override: Option<&str>, pipeline_status: Option<&str>) -> Self {
        let raw = explicit_override
            .filter(|s| !s.is_empty())
            .or(pipeline_status)
            .unwrap_or_default();
        if raw == "failure" {
            Status::Failure
        } else {
            Status::Success
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Status::Success => "✅",
            Status::Failure => "🚨",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Status::Success => "success",
            Status::Failure => "failure",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
