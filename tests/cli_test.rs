use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::io::Write;
use std::process::Command;
use tempfile::NamedTempFile;

#[test]
fn test_cli_end_to_end() -> Result<(), Box<dyn std::error::Error>> {
    let mut file = NamedTempFile::new()?;
    writeln!(file, "type, amount, currency, purpose")?;
    writeln!(file, "open, , , ")?;
    writeln!(file, "deposit, 100.5, USD, ")?;
    writeln!(file, "withdraw, 25.25, , ")?;

    let mut cmd = Command::new(cargo_bin!("minibank"));
    cmd.arg(file.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "balance,loan,loan_purpose,active,loading",
        ))
        .stdout(predicate::str::contains("75.25,0,,true,false"));

    Ok(())
}

#[test]
fn test_cli_rejects_bad_rate_spec() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "type, amount, currency, purpose").unwrap();
    writeln!(file, "open, , , ").unwrap();

    let mut cmd = Command::new(cargo_bin!("minibank"));
    cmd.arg(file.path()).arg("--rate").arg("EUR");

    cmd.assert().failure();
}
