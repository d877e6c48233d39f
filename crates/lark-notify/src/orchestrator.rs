use std::io::Write;

use chrono::Utc;

use crate::config::Settings;
use crate::context::{or_empty, NotificationContext};
use crate::env::Environment;
use crate::error::Result;
use crate::format::{format_card, format_text, project_version, resolve_status};
use crate::report::{write_build_info, write_debug_dump, BuildInfo};
use crate::signer::SignaturePair;
use crate::sink::{deliver, encode_payload, WebhookSink};

/// One notification run: settings, formatting, signing, delivery.
///
/// Progress and the optional debug dump go to `out`. Every failure is
/// returned; deciding the exit status is left to the caller.
pub async fn run<W: Write>(
    env: Environment,
    sink: &dyn WebhookSink,
    out: &mut W,
) -> Result<()> {
    let settings = Settings::from_env(&env)?;
    let ctx = NotificationContext::from_env(env);
    let version = project_version(&ctx);
    let status = resolve_status(&ctx);

    tracing::info!(
        card = settings.use_card,
        signed = settings.secret.is_some(),
        %status,
        version = %version,
        "preparing notification"
    );

    let message = if settings.use_card {
        format_card(&ctx, &version, &settings.buttons, &settings.variables)
    } else {
        format_text(&ctx, &version, &settings.variables)
    };

    let signature = settings.secret.as_deref().map(SignaturePair::now);
    let payload = encode_payload(&message, signature.as_ref())?;

    if settings.debug {
        write_debug_dump(out, ctx.env(), &payload)?;
    }

    write_build_info(
        out,
        &BuildInfo {
            project: or_empty(&ctx.repo),
            branch: or_empty(&ctx.branch),
            version: &version,
            status: status.as_str(),
            date: Utc::now(),
        },
    )?;

    writeln!(out, "\nSending to Lark...")?;
    deliver(sink, &settings.webhook_url, payload).await?;
    writeln!(out, "Done!")?;
    Ok(())
}
