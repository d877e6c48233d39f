//! Action links attached to a card.

use crate::context::NotificationContext;
use crate::message::{Button, ButtonStyle};

/// Button categories that can be named in the allow-list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKind {
    Pipeline,
    Commit,
    Release,
}

impl ButtonKind {
    /// Case-sensitive; unknown names yield `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim() {
            "pipeline" => Some(ButtonKind::Pipeline),
            "commit" => Some(ButtonKind::Commit),
            "release" => Some(ButtonKind::Release),
            _ => None,
        }
    }

    fn keyword(self) -> &'static str {
        match self {
            ButtonKind::Pipeline => "Pipeline",
            ButtonKind::Commit => "Commit",
            ButtonKind::Release => "Release",
        }
    }

    pub fn matches(self, button: &Button) -> bool {
        button.label.contains(self.keyword())
    }
}

/// Pipeline button first, then either a release button (tagged build with
/// a repository URL) or a commit button. A non-empty `allow_list` keeps only
/// the named categories, in build order.
pub fn build_buttons(ctx: &NotificationContext, allow_list: &[String]) -> Vec<Button> {
    let mut buttons = Vec::new();

    if let Some(url) = &ctx.pipeline_url {
        buttons.push(Button {
            label: "View Pipeline".to_string(),
            url: url.clone(),
            style: ButtonStyle::Primary,
        });
    }

    match (&ctx.commit_tag, &ctx.repo_url) {
        (Some(tag), Some(repo_url)) => buttons.push(Button {
            label: "View Release".to_string(),
            url: format!("{repo_url}/releases/tag/{tag}"),
            style: ButtonStyle::Default,
        }),
        // tagged build without a repository URL gets no second button
        (Some(_), None) => {}
        (None, _) => {
            if let Some(url) = &ctx.forge_url {
                buttons.push(Button {
                    label: "View Commit".to_string(),
                    url: url.clone(),
                    style: ButtonStyle::Default,
                });
            }
        }
    }

    if allow_list.is_empty() {
        return buttons;
    }

    let wanted: Vec<ButtonKind> = allow_list
        .iter()
        .filter_map(|name| {
            let kind = ButtonKind::from_name(name);
            if kind.is_none() {
                tracing::debug!(name = %name, "ignoring unknown button name");
            }
            kind
        })
        .collect();

    buttons
        .into_iter()
        .filter(|b| wanted.iter().any(|kind| kind.matches(b)))
        .collect()
}
