use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::{CLEAN_CATALOG, CliTest, SAMPLE_CATALOG, run};

#[test]
fn test_lookup_bundled() -> Result<()> {
    let test = CliTest::new()?;

    let mut cmd = test.lookup_command();
    cmd.args(["SqlExport", "-- Table: %1", "--bundled", "--arg", "users"]);

    assert_cmd_snapshot!(cmd, @r"
    success: true
    exit_code: 0
    ----- stdout -----
    -- Tabela: users

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_lookup_bundled_decodes_entities() -> Result<()> {
    let test = CliTest::new()?;

    let mut cmd = test.lookup_command();
    cmd.args([
        "sqlExportCommonConfig",
        "Format DDL statements only (excludes \"INSERT\" statements)",
        "--bundled",
    ]);
    let (code, stdout, _) = run(cmd)?;

    assert_eq!(code, 0);
    assert_eq!(
        stdout,
        "Formatar declarações DDL apenas (excluir declarações \"INSERT\")\n"
    );

    Ok(())
}

#[test]
fn test_lookup_single_locale_is_picked() -> Result<()> {
    let test = CliTest::with_file("translations/SqlExport_pt_BR.ts", CLEAN_CATALOG)?;

    let mut cmd = test.lookup_command();
    cmd.args(["SqlExport", "-- View: %1", "--arg", "v_users"]);
    let (code, stdout, _) = run(cmd)?;

    assert_eq!(code, 0);
    assert_eq!(stdout, "-- Visão: v_users\n");

    Ok(())
}

#[test]
fn test_lookup_missing_entry_falls_back_to_source() -> Result<()> {
    let test = CliTest::with_file("translations/SqlExport_pt_BR.ts", SAMPLE_CATALOG)?;

    // Unknown source, empty translation and vanished entry
    for source in ["-- Sequence: %1", "-- View: %1", "-- Old comment"] {
        let mut cmd = test.lookup_command();
        cmd.args(["SqlExport", source, "--locale", "pt_BR"]);
        let (code, stdout, _) = run(cmd)?;

        assert_eq!(code, 0);
        assert_eq!(stdout, format!("{}\n", source));
    }

    Ok(())
}

#[test]
fn test_lookup_bare_language_resolves_regional_catalog() -> Result<()> {
    let test = CliTest::with_file("translations/SqlExport_pt_BR.ts", CLEAN_CATALOG)?;

    let mut cmd = test.lookup_command();
    cmd.args(["SqlExport", "-- Table: %1", "--locale", "pt"]);
    let (code, stdout, _) = run(cmd)?;

    assert_eq!(code, 0);
    assert_eq!(stdout, "-- Tabela: %1\n");

    Ok(())
}

#[test]
fn test_lookup_several_locales_needs_locale() -> Result<()> {
    let test = CliTest::with_file("translations/SqlExport_pt_BR.ts", CLEAN_CATALOG)?;
    test.write_file(
        "translations/SqlExport_de.ts",
        r#"<TS version="2.1" language="de">
<context>
    <name>SqlExport</name>
    <message>
        <source>-- Table: %1</source>
        <translation>-- Tabelle: %1</translation>
    </message>
</context>
</TS>
"#,
    )?;

    let mut cmd = test.lookup_command();
    cmd.args(["SqlExport", "-- Table: %1"]);
    let (code, _, stderr) = run(cmd)?;
    assert_eq!(code, 2);
    assert!(stderr.contains("Several locales loaded (de, pt_BR)"));

    let mut cmd = test.lookup_command();
    cmd.args(["SqlExport", "-- Table: %1", "--locale", "de"]);
    let (code, stdout, _) = run(cmd)?;
    assert_eq!(code, 0);
    assert_eq!(stdout, "-- Tabelle: %1\n");

    Ok(())
}

#[test]
fn test_lookup_bundled_conflicts_with_locale() -> Result<()> {
    let test = CliTest::new()?;

    let mut cmd = test.lookup_command();
    cmd.args(["SqlExport", "-- Table: %1", "--bundled", "--locale", "de"]);
    let (code, _, stderr) = run(cmd)?;

    assert_eq!(code, 2);
    assert!(stderr.contains("cannot be used with"));

    Ok(())
}
