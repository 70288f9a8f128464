use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::CliTest;

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.command().arg("init"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Created .tsctlrc.json

    ----- stderr -----
    ");

    let config = test.read_file(".tsctlrc.json")?;
    assert!(config.contains("\"translationsRoot\": \"./translations\""));
    assert!(config.contains("\"sourceLanguage\": \"en\""));

    Ok(())
}

#[test]
fn test_init_refuses_existing_config() -> Result<()> {
    let test = CliTest::with_file(".tsctlrc.json", "{}")?;

    assert_cmd_snapshot!(test.command().arg("init"), @r"
    success: false
    exit_code: 1
    ----- stdout -----

    ----- stderr -----
    error: .tsctlrc.json already exists
    ");

    assert_eq!(test.read_file(".tsctlrc.json")?, "{}");
    assert!(test.root().join(".tsctlrc.json").exists());

    Ok(())
}
