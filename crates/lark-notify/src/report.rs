//! Human-readable output written to stdout around a delivery.

use std::io::{self, Write};

use chrono::{DateTime, SecondsFormat, Utc};
use tabled::settings::object::Rows;
use tabled::settings::{Modify, Padding, Remove, Style};
use tabled::{Table, Tabled};

use crate::config::SECRET_VAR;
use crate::env::Environment;

const MASK: &str = "********";

#[derive(Tabled)]
struct InfoRow {
    field: &'static str,
    value: String,
}

impl InfoRow {
    fn new(field: &'static str, value: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
        }
    }
}

pub struct BuildInfo<'a> {
    pub project: &'a str,
    pub branch: &'a str,
    pub version: &'a str,
    pub status: &'a str,
    pub date: DateTime<Utc>,
}

pub fn write_build_info<W: Write>(out: &mut W, info: &BuildInfo<'_>) -> io::Result<()> {
    let rows = vec![
        InfoRow::new("PROJECT:", info.project),
        InfoRow::new("BRANCH:", info.branch),
        InfoRow::new("VERSION:", info.version),
        InfoRow::new("STATUS:", info.status),
        InfoRow::new("DATE:", info.date.to_rfc3339_opts(SecondsFormat::Secs, true)),
    ];

    let mut table = Table::new(rows);
    table
        .with(Style::blank())
        .with(Remove::row(Rows::first()))
        .with(Modify::new(Rows::new(0..)).with(Padding::new(1, 1, 0, 0)));

    writeln!(out, "\nBuild Info:")?;
    writeln!(out, "{table}")
}

/// Sorted environment listing plus the outgoing payload. The bot secret is
/// masked.
pub fn write_debug_dump<W: Write>(
    out: &mut W,
    env: &Environment,
    payload: &[u8],
) -> io::Result<()> {
    writeln!(out, "\n** DEBUG ENABLED **")?;
    writeln!(out, "\nEnvironment Variables:")?;
    for (key, value) in env.iter() {
        let shown = if key == SECRET_VAR && !value.is_empty() {
            MASK
        } else {
            value
        };
        writeln!(out, " {key:<30} = {shown}")?;
    }
    writeln!(out, "\nLark Message JSON:")?;
    writeln!(out, "{}", String::from_utf8_lossy(payload))
}
