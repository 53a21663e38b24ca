//! Human-readable and JSON rendering of command results.

use crate::config::OutputFormat;
use crate::scenario::AccountRun;
use serde::Serialize;
use std::io::{self, Write};
use trustgate_account::{AuditEntry, IdentityStatus};
use trustgate_types::Permission;

pub fn section(out: &mut impl Write, title: &str) -> io::Result<()> {
    let rule = "=".repeat(70);
    writeln!(out, "\n{rule}\n  {title}\n{rule}")
}

pub fn status(out: &mut impl Write, status: &IdentityStatus) -> io::Result<()> {
    let permissions = if status.permissions.is_empty() {
        "None".to_string()
    } else {
        status
            .permissions
            .iter()
            .map(Permission::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    };
    writeln!(out, "User:        {}", status.username)?;
    writeln!(out, "Email:       {}", status.email)?;
    writeln!(out, "Phone:       {}", status.phone)?;
    writeln!(out, "Status:      {}", status.verification_status)?;
    writeln!(out, "Permissions: {permissions}")
}

pub fn audit_log(out: &mut impl Write, entries: &[AuditEntry]) -> io::Result<()> {
    writeln!(out, "Audit log ({} entries):", entries.len())?;
    for entry in entries {
        writeln!(out, "  {entry}")?;
    }
    Ok(())
}

pub fn json(out: &mut impl Write, value: &impl Serialize) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)
}

pub fn runs(out: &mut impl Write, runs: &[AccountRun], format: OutputFormat) -> io::Result<()> {
    if format == OutputFormat::Json {
        return json(out, &runs);
    }
    for run in runs {
        section(out, &format!("Account: {}", run.username))?;
        if let Some(error) = &run.creation_error {
            writeln!(out, "Rejected at creation: {error}")?;
            continue;
        }
        for step in &run.steps {
            let mark = if step.success { "ok  " } else { "FAIL" };
            writeln!(out, "{mark} {:<28} {}", step.step, step.message)?;
        }
        if let Some(report) = &run.report {
            writeln!(out)?;
            status(out, &report.identity)?;
        }
        writeln!(out)?;
        audit_log(out, &run.audit_log)?;
    }
    Ok(())
}
