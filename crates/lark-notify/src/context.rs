use crate::env::Environment;

/// Pipeline metadata for one notification.
///
/// Built once at startup from the environment snapshot and never mutated.
/// Unset and empty variables both read as `None`.
#[derive(Debug, Clone)]
pub struct NotificationContext {
    /// Full repository slug (`owner/name`).
    pub repo: Option<String>,
    /// Short repository name, used in the card header.
    pub repo_name: Option<String>,
    pub repo_url: Option<String>,
    pub branch: Option<String>,
    pub author: Option<String>,
    pub commit_sha: Option<String>,
    pub commit_tag: Option<String>,
    pub commit_message: Option<String>,
    pub pipeline_url: Option<String>,
    /// Link to the commit on the forge.
    pub forge_url: Option<String>,
    /// Legacy pipeline status variable.
    pub pipeline_status: Option<String>,
    pub status_override: Option<String>,
    env: Environment,
}

impl NotificationContext {
    pub fn from_env(env: Environment) -> Self {
        let field = |key: &str| env.get(key).map(str::to_string);
        Self {
            repo: field("CI_REPO"),
            repo_name: field("CI_REPO_NAME"),
            repo_url: field("CI_REPO_URL"),
            branch: field("CI_COMMIT_BRANCH"),
            author: field("CI_COMMIT_AUTHOR"),
            commit_sha: field("CI_COMMIT_SHA"),
            commit_tag: field("CI_COMMIT_TAG"),
            commit_message: field("CI_COMMIT_MESSAGE"),
            pipeline_url: field("CI_PIPELINE_URL"),
            forge_url: field("CI_PIPELINE_FORGE_URL"),
            pipeline_status: field("DRONE_BUILD_STATUS"),
            status_override: field("PLUGIN_STATUS"),
            env,
        }
    }

    /// Value of an arbitrary variable from the snapshot, empty if unset.
    pub fn variable(&self, name: &str) -> &str {
        self.env.get_or(name, "")
    }

    pub fn env(&self) -> &Environment {
        &self.env
    }

    /// First line of the commit message.
    pub fn commit_headline(&self) -> &str {
        self.commit_message
            .as_deref()
            .and_then(|m| m.split('\n').next())
            .unwrap_or_default()
    }
}

/// Display helper: `""` for an absent field.
pub(crate) fn or_empty(field: &Option<String>) -> &str {
    field.as_deref().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_pipeline_fields() {
        let env: Environment = [
            ("CI_REPO", "acme/widget"),
            ("CI_REPO_NAME", "widget"),
            ("CI_COMMIT_BRANCH", "main"),
            ("CI_COMMIT_TAG", ""),
            ("DRONE_BUILD_STATUS", "failure"),
            ("DEPLOY_ENV", "staging"),
        ]
        .into_iter()
        .collect();

        let ctx = NotificationContext::from_env(env);
        assert_eq!(ctx.repo.as_deref(), Some("acme/widget"));
        assert_eq!(ctx.repo_name.as_deref(), Some("widget"));
        assert_eq!(ctx.branch.as_deref(), Some("main"));
        assert_eq!(ctx.commit_tag, None);
        assert_eq!(ctx.pipeline_status.as_deref(), Some("failure"));
        assert_eq!(ctx.variable("DEPLOY_ENV"), "staging");
        assert_eq!(ctx.variable("NOT_SET"), "");
    }

    #[test]
    fn headline_drops_everything_after_first_newline() {
        let env: Environment = [("CI_COMMIT_MESSAGE", "line one\nline two\nline three")]
            .into_iter()
            .collect();
        let ctx = NotificationContext::from_env(env);
        assert_eq!(ctx.commit_headline(), "line one");

        let ctx = NotificationContext::from_env(Environment::default());
        assert_eq!(ctx.commit_headline(), "");
    }
}
