//! Text and card rendering of a pipeline notification.

use std::fmt::Write as _;

use crate::buttons::build_buttons;
use crate::context::{or_empty, NotificationContext};
use crate::message::{Card, CardHeader, Element, Message, TextObject};
use crate::status::Status;

const SHORT_SHA_LEN: usize = 7;

/// Tag when present, otherwise the abbreviated commit SHA, otherwise `""`.
///
/// A SHA shorter than seven characters is returned whole.
pub fn project_version(ctx: &NotificationContext) -> String {
    if let Some(tag) = &ctx.commit_tag {
        return tag.clone();
    }
    match &ctx.commit_sha {
        Some(sha) => sha.chars().take(SHORT_SHA_LEN).collect(),
        None => String::new(),
    }
}

pub fn resolve_status(ctx: &NotificationContext) -> Status {
    Status::resolve(ctx.status_override.as_deref(), ctx.pipeline_status.as_deref())
}

pub fn format_card(
    ctx: &NotificationContext,
    project_version: &str,
    allow_list: &[String],
    variable_names: &[String],
) -> Message {
    let status = resolve_status(ctx);
    let (color, status_text) = match status {
        Status::Failure => ("red", "Pipeline Failed"),
        Status::Success => ("green", "Pipeline Succeeded"),
    };

    let mut elements = vec![
        Element::markdown(format!(
            "**Project:** {}\n**Branch:** {}\n**Author:** {}\n**Version:** {}",
            or_empty(&ctx.repo),
            or_empty(&ctx.branch),
            or_empty(&ctx.author),
            project_version,
        )),
        Element::Hr,
        Element::markdown(format!("**Commit Message:**\n{}", ctx.commit_headline())),
    ];

    if !variable_names.is_empty() {
        let mut content = String::from("**Variables:**\n");
        for name in variable_names {
            let _ = writeln!(content, "• `{}`: {}", name, ctx.variable(name));
        }
        elements.push(Element::Hr);
        elements.push(Element::markdown(content));
    }

    let actions = build_buttons(ctx, allow_list);
    if !actions.is_empty() {
        elements.push(Element::Action { actions });
    }

    let title = format!(
        "{} - {} {}",
        or_empty(&ctx.repo_name),
        status.icon(),
        status_text
    );

    Message::Card {
        card: Card {
            header: CardHeader {
                title: TextObject::plain(title),
                template: color.to_string(),
            },
            elements,
        },
    }
}

pub fn format_text(
    ctx: &NotificationContext,
    project_version: &str,
    variable_names: &[String],
) -> Message {
    let status = resolve_status(ctx);
    let status_text = match status {
        Status::Failure => "PIPELINE FAILED",
        Status::Success => "PIPELINE SUCCEEDED",
    };

    let mut body = format!("{} {}\n\n", status.icon(), status_text);
    let _ = writeln!(body, "📋 Project: {}", or_empty(&ctx.repo));
    let _ = writeln!(body, "🌿 Branch: {}", or_empty(&ctx.branch));
    let _ = writeln!(body, "👤 Author: {}", or_empty(&ctx.author));
    let _ = writeln!(body, "🏷️ Version: {project_version}");
    let _ = writeln!(body, "💬 Message: {}", ctx.commit_headline());

    if !variable_names.is_empty() {
        body.push_str("\n📊 Variables:\n");
        for name in variable_names {
            let _ = writeln!(body, "• {}: {}", name, ctx.variable(name));
        }
    }

    if let Some(url) = &ctx.pipeline_url {
        let _ = write!(body, "\n🔗 Pipeline: {url}");
    }

    Message::text(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::Environment;
    use serde_json::Value;

    fn ctx(pairs: &[(&str, &str)]) -> NotificationContext {
        NotificationContext::from_env(pairs.iter().copied().collect::<Environment>())
    }

    fn card_json(ctx: &NotificationContext, allow: &[String], vars: &[String]) -> Value {
        serde_json::to_value(format_card(ctx, "v1.0.0", allow, vars)).unwrap()
    }

    fn text_body(message: Message) -> String {
        match message {
            Message::Text { content } => content.text,
            other => panic!("expected text message, got {other:?}"),
        }
    }

    #[test]
    fn version_prefers_tag_then_short_sha() {
        let tagged = ctx(&[("CI_COMMIT_TAG", "v1.0.0"), ("CI_COMMIT_SHA", "abcdef1234567890")]);
        assert_eq!(project_version(&tagged), "v1.0.0");

        let untagged = ctx(&[("CI_COMMIT_SHA", "abcdef1234567890")]);
        assert_eq!(project_version(&untagged), "abcdef1");

        assert_eq!(project_version(&ctx(&[])), "");
        assert_eq!(project_version(&ctx(&[("CI_COMMIT_SHA", "abc")])), "abc");
    }

    #[test]
    fn header_color_follows_status() {
        let cases = [
            ("success", "", "green"),
            ("failure", "", "red"),
            ("success", "failure", "red"),
            ("failure", "success", "green"),
            ("", "", "green"),
        ];
        for (pipeline, plugin, expected) in cases {
            let ctx = ctx(&[("DRONE_BUILD_STATUS", pipeline), ("PLUGIN_STATUS", plugin)]);
            let card = card_json(&ctx, &[], &[]);
            assert_eq!(
                card["card"]["header"]["template"], expected,
                "pipeline={pipeline:?} override={plugin:?}"
            );
        }
    }

    #[test]
    fn card_title_and_sections() {
        let ctx = ctx(&[
            ("CI_REPO", "acme/widget"),
            ("CI_REPO_NAME", "widget"),
            ("CI_COMMIT_BRANCH", "main"),
            ("CI_COMMIT_AUTHOR", "octocat"),
            ("CI_COMMIT_MESSAGE", "line one\nline two"),
            ("DRONE_BUILD_STATUS", "failure"),
        ]);
        let card = card_json(&ctx, &[], &[]);

        assert_eq!(
            card["card"]["header"]["title"]["content"],
            "widget - 🚨 Pipeline Failed"
        );
        let elements = card["card"]["elements"].as_array().unwrap();
        assert_eq!(elements.len(), 3);
        assert_eq!(
            elements[0]["text"]["content"],
            "**Project:** acme/widget\n**Branch:** main\n**Author:** octocat\n**Version:** v1.0.0"
        );
        assert_eq!(elements[1]["tag"], "hr");
        assert_eq!(elements[2]["text"]["content"], "**Commit Message:**\nline one");
    }

    #[test]
    fn card_variables_block_reads_values_from_snapshot() {
        let ctx = ctx(&[("DEPLOY_ENV", "staging")]);
        let vars = vec!["DEPLOY_ENV".to_string(), "UNSET_VAR".to_string()];
        let card = card_json(&ctx, &[], &vars);

        let elements = card["card"]["elements"].as_array().unwrap();
        assert_eq!(elements.len(), 5);
        assert_eq!(elements[3]["tag"], "hr");
        assert_eq!(
            elements[4]["text"]["content"],
            "**Variables:**\n• `DEPLOY_ENV`: staging\n• `UNSET_VAR`: \n"
        );
    }

    #[test]
    fn card_action_section_holds_buttons() {
        let ctx = ctx(&[
            ("CI_PIPELINE_URL", "https://ci.example/7"),
            ("CI_COMMIT_TAG", "v1.0.0"),
            ("CI_REPO_URL", "https://git.example/acme/widget"),
        ]);
        let card = card_json(&ctx, &[], &[]);
        let elements = card["card"]["elements"].as_array().unwrap();
        let actions = elements.last().unwrap();
        assert_eq!(actions["tag"], "action");
        assert_eq!(actions["actions"].as_array().unwrap().len(), 2);
        assert_eq!(actions["actions"][0]["text"]["content"], "View Pipeline");
        assert_eq!(actions["actions"][1]["text"]["content"], "View Release");
    }

    #[test]
    fn filtered_out_buttons_drop_action_section() {
        let ctx = ctx(&[("CI_PIPELINE_FORGE_URL", "https://git.example/commit/abc")]);
        let card = card_json(&ctx, &["pipeline".to_string()], &[]);
        let elements = card["card"]["elements"].as_array().unwrap();
        assert!(elements.iter().all(|e| e["tag"] != "action"));
    }

    #[test]
    fn text_layout() {
        let ctx = ctx(&[
            ("CI_REPO", "acme/widget"),
            ("CI_COMMIT_BRANCH", "main"),
            ("CI_COMMIT_AUTHOR", "octocat"),
            ("CI_COMMIT_MESSAGE", "line one\nline two"),
            ("CI_PIPELINE_URL", "https://ci.example/7"),
            ("DEPLOY_ENV", "staging"),
        ]);
        let body = text_body(format_text(&ctx, "abcdef1", &["DEPLOY_ENV".to_string()]));
        assert_eq!(
            body,
            "✅ PIPELINE SUCCEEDED\n\n\
             📋 Project: acme/widget\n\
             🌿 Branch: main\n\
             👤 Author: octocat\n\
             🏷️ Version: abcdef1\n\
             💬 Message: line one\n\
             \n📊 Variables:\n\
             • DEPLOY_ENV: staging\n\
             \n🔗 Pipeline: https://ci.example/7"
        );
    }

    #[test]
    fn text_failure_without_links_or_variables() {
        let ctx = ctx(&[("PLUGIN_STATUS", "failure")]);
        let body = text_body(format_text(&ctx, "", &[]));
        assert!(body.starts_with("🚨 PIPELINE FAILED\n\n"));
        assert!(!body.contains("Variables"));
        assert!(!body.contains("🔗"));
        assert!(body.ends_with("💬 Message: \n"));
    }
}
