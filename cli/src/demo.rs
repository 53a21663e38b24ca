//! The built-in walkthrough behind `trustgate demo`.

use crate::render;
use std::io::{self, Write};
use trustgate_account::Account;
use trustgate_types::{Clock, Outcome};

fn outcome_line(out: &mut impl Write, label: &str, outcome: &Outcome) -> io::Result<()> {
    let mark = if outcome.is_success() { "ok  " } else { "FAIL" };
    writeln!(out, "  {mark} {label}: {outcome}")
}

pub fn run(out: &mut impl Write, clock: &dyn Clock) -> io::Result<()> {
    render::section(out, "1. Creating an account with valid data")?;
    let mut john = match Account::with_clock(clock, "john_doe", "john.doe@example.com", "+1-555-123-4567") {
        Ok(account) => account,
        Err(e) => {
            writeln!(out, "  account rejected: {e}")?;
            return Ok(());
        }
    };
    render::status(out, &john.identity_status())?;

    render::section(out, "2. Illegal state transitions")?;
    outcome_line(out, "verify without requesting", &john.verify())?;
    outcome_line(out, "request verification", &john.request_verification())?;
    outcome_line(out, "verify", &john.verify())?;
    outcome_line(out, "request again once verified", &john.request_verification())?;
    writeln!(out, "  status is now {}", john.status())?;

    render::section(out, "3. Restricted permissions require verification")?;
    let mut jane = match Account::with_clock(clock, "jane_smith", "jane.smith@example.com", "+1-555-987-6543") {
        Ok(account) => account,
        Err(e) => {
            writeln!(out, "  account rejected: {e}")?;
            return Ok(());
        }
    };
    outcome_line(out, "grant TRANSFER while unverified", &jane.grant_permission("TRANSFER"))?;
    outcome_line(out, "grant VIEW_BALANCE", &jane.grant_permission("VIEW_BALANCE"))?;
    jane.request_verification();
    jane.verify();
    writeln!(out, "  jane_smith is now {}", jane.status())?;
    outcome_line(out, "grant TRANSFER once verified", &jane.grant_permission("TRANSFER"))?;
    outcome_line(out, "grant WITHDRAW", &jane.grant_permission("WITHDRAW"))?;
    outcome_line(out, "grant ADMIN_ACCESS", &jane.grant_permission("ADMIN_ACCESS"))?;
    render::status(out, &jane.identity_status())?;

    render::section(out, "4. Returned collections are copies")?;
    let mut permissions = jane.permissions();
    permissions.clear();
    writeln!(
        out,
        "  cleared the returned set; account still holds {} permissions",
        jane.permissions().len()
    )?;
    let mut log = jane.audit_log();
    let before = log.len();
    log.truncate(1);
    writeln!(
        out,
        "  truncated the returned log; account still has {} of {before} entries",
        jane.audit_log().len()
    )?;

    render::section(out, "5. Input validation")?;
    match john.update_email("invalid-email") {
        Ok(()) => writeln!(out, "  invalid email accepted")?,
        Err(e) => writeln!(out, "  rejected: {e}")?,
    }
    match Account::with_clock(clock, "bad_user", "valid@email.com", "123456789") {
        Ok(_) => writeln!(out, "  invalid phone accepted")?,
        Err(e) => writeln!(out, "  rejected: {e}")?,
    }

    render::section(out, "6. Final state")?;
    for account in [&john, &jane] {
        writeln!(out)?;
        render::status(out, &account.identity_status())?;
        let log = account.audit_log();
        let recent = &log[log.len().saturating_sub(3)..];
        writeln!(out, "Recent actions:")?;
        for entry in recent {
            writeln!(out, "  {}: {}", entry.action, entry.description)?;
        }
    }
    Ok(())
}
