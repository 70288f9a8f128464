use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::{CLEAN_CATALOG, CliTest, SAMPLE_CATALOG, run};

#[test]
fn test_clean_catalog() -> Result<()> {
    let test = CliTest::with_file("translations/SqlExport_pt_BR.ts", CLEAN_CATALOG)?;

    assert_cmd_snapshot!(test.check_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Checked 1 catalog file (2 messages) - no issues found

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_all_rules() -> Result<()> {
    let test = CliTest::with_file("translations/SqlExport_pt_BR.ts", SAMPLE_CATALOG)?;

    let (code, stdout, _) = run(test.check_command())?;

    assert_eq!(code, 1);
    assert!(stdout.contains("error: \"-- Index: %1\"  placeholder"));
    assert!(stdout.contains("  --> ./translations/SqlExport_pt_BR.ts:13:9"));
    assert!(stdout.contains("13 |         <translation>-- Índice:</translation>"));
    assert!(stdout.contains("= note: missing %1 in SqlExport (\"-- Índice:\")"));
    assert!(stdout.contains("warning: \"-- Trigger: %1\"  untranslated"));
    assert!(stdout.contains("warning: \"-- View: %1\"  unfinished"));
    assert!(stdout.contains("= note: no pt_BR translation in SqlExport"));
    assert!(stdout.contains("warning: \"-- Old comment\"  obsolete"));
    assert!(stdout.contains("= note: marked vanished in SqlExport"));
    assert!(stdout.contains("✘ 4 problems (1 error, 3 warnings)"));

    Ok(())
}

#[test]
fn test_selected_rule() -> Result<()> {
    let test = CliTest::with_file("translations/SqlExport_pt_BR.ts", SAMPLE_CATALOG)?;

    let mut cmd = test.check_command();
    cmd.arg("obsolete");
    let (code, stdout, _) = run(cmd)?;

    // Warnings only: exit code stays 0
    assert_eq!(code, 0);
    assert!(stdout.contains("obsolete"));
    assert!(!stdout.contains("placeholder"));
    assert!(stdout.contains("1 problem (0 errors, 1 warning)"));

    Ok(())
}

#[test]
fn test_duplicate_entries() -> Result<()> {
    let test = CliTest::with_file(
        "translations/SqlExport_de.ts",
        r#"<TS version="2.1" language="de">
<context>
    <name>SqlExport</name>
    <message>
        <source>-- Table: %1</source>
        <translation>-- Tabelle: %1</translation>
    </message>
    <message>
        <source>-- Table: %1</source>
        <translation>-- Tisch: %1</translation>
    </message>
</context>
</TS>
"#,
    )?;

    let mut cmd = test.check_command();
    cmd.arg("duplicate");
    let (code, stdout, _) = run(cmd)?;

    assert_eq!(code, 1);
    assert!(stdout.contains("error: \"-- Table: %1\"  duplicate"));
    assert!(stdout.contains("./translations/SqlExport_de.ts:10:9"));
    assert!(stdout.contains("= note: already defined in SqlExport at line 6"));

    Ok(())
}

#[test]
fn test_parse_error_does_not_stop_other_catalogs() -> Result<()> {
    let test = CliTest::with_file("translations/SqlExport_pt_BR.ts", CLEAN_CATALOG)?;
    test.write_file("translations/SqlExport_de.ts", "<TS><context></TS>")?;

    let (code, stdout, stderr) = run(test.check_command())?;

    assert_eq!(code, 1);
    assert!(stdout.contains("parse-error"));
    assert!(stdout.contains("./translations/SqlExport_de.ts"));
    assert!(stdout.contains("1 problem (1 error, 0 warnings)"));
    assert!(stderr.contains("1 file(s) could not be parsed"));

    Ok(())
}

#[test]
fn test_config_ignore_texts_and_ignores() -> Result<()> {
    let test = CliTest::with_file("translations/SqlExport_pt_BR.ts", SAMPLE_CATALOG)?;
    test.write_file("translations/old/SqlExport_de.ts", "<TS><context></TS>")?;
    test.write_file(
        ".tsctlrc.json",
        r#"{
  "ignores": ["**/old/**"],
  "ignoreTexts": ["-- Trigger: %1"]
}"#,
    )?;

    let mut cmd = test.check_command();
    cmd.arg("untranslated");
    assert_cmd_snapshot!(cmd, @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Checked 1 catalog file (5 messages) - no issues found

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_translations_root_override() -> Result<()> {
    let test = CliTest::with_file("i18n/SqlExport_pt_BR.ts", CLEAN_CATALOG)?;

    let mut cmd = test.check_command();
    cmd.args(["--translations-root", "./i18n"]);
    let (code, stdout, _) = run(cmd)?;

    assert_eq!(code, 0);
    assert!(stdout.contains("no issues found"));

    Ok(())
}

#[test]
fn test_missing_translations_dir() -> Result<()> {
    let test = CliTest::new()?;

    let (code, _, stderr) = run(test.check_command())?;

    assert_eq!(code, 2);
    assert!(stderr.contains("does not exist"));
    assert!(stderr.contains("translationsRoot"));

    Ok(())
}

#[test]
fn test_path_argument() -> Result<()> {
    let test = CliTest::with_file("project/translations/SqlExport_pt_BR.ts", CLEAN_CATALOG)?;

    let mut cmd = test.check_command();
    cmd.args(["--path", "project"]);
    let (code, stdout, _) = run(cmd)?;

    assert_eq!(code, 0);
    assert!(stdout.contains("Checked 1 catalog file"));

    Ok(())
}
