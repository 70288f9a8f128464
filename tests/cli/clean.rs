use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::{CLEAN_CATALOG, CliTest, SAMPLE_CATALOG, run};

const CATALOG_PATH: &str = "translations/SqlExport_pt_BR.ts";

#[test]
fn test_clean_nothing_to_remove() -> Result<()> {
    let test = CliTest::with_file(CATALOG_PATH, CLEAN_CATALOG)?;

    assert_cmd_snapshot!(test.clean_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Checked 1 catalog file (2 messages) - no issues found

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_clean_dry_run_keeps_file() -> Result<()> {
    let test = CliTest::with_file(CATALOG_PATH, SAMPLE_CATALOG)?;

    let (code, stdout, _) = run(test.clean_command())?;

    assert_eq!(code, 0);
    assert!(stdout.contains("  --> ./translations/SqlExport_pt_BR.ts:25:9  [vanished]"));
    assert!(stdout.contains("Would remove 1 message in 1 file."));
    assert!(stdout.contains("Run with --apply to remove these messages."));
    assert_eq!(test.read_file(CATALOG_PATH)?, SAMPLE_CATALOG);

    Ok(())
}

#[test]
fn test_clean_apply_removes_stale_messages() -> Result<()> {
    let test = CliTest::with_file(CATALOG_PATH, SAMPLE_CATALOG)?;

    let mut cmd = test.clean_command();
    cmd.arg("--apply");
    let (code, stdout, _) = run(cmd)?;

    assert_eq!(code, 0);
    assert_eq!(stdout, "Removed 1 message in 1 file.\n");

    let cleaned = test.read_file(CATALOG_PATH)?;
    assert!(!cleaned.contains("-- Old comment"));
    assert!(!cleaned.contains("vanished"));
    assert!(cleaned.contains("<translation type=\"unfinished\"></translation>"));
    assert!(cleaned.contains("<!DOCTYPE TS>"));

    // Second run has nothing left to do
    let (code, stdout, _) = run(test.clean_command())?;
    assert_eq!(code, 0);
    assert!(stdout.contains("no issues found"));

    Ok(())
}

#[test]
fn test_clean_obsolete_check_passes_after_apply() -> Result<()> {
    let test = CliTest::with_file(CATALOG_PATH, SAMPLE_CATALOG)?;

    let mut cmd = test.clean_command();
    cmd.arg("--apply");
    run(cmd)?;

    let mut cmd = test.check_command();
    cmd.arg("obsolete");
    let (code, stdout, _) = run(cmd)?;

    assert_eq!(code, 0);
    assert_eq!(
        stdout,
        "✓ Checked 1 catalog file (4 messages) - no issues found\n"
    );

    Ok(())
}
