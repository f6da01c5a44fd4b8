use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use tempfile::TempDir;

fn script_command(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("lease_info_cli").unwrap();
    cmd.env("LEASE_INFO_CLI_SCRIPT", "1")
        .env("LEASE_INFO_HOME", home.path())
        .env("LEASE_INFO_NOW", "2024-11-24")
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn info_before_any_mileage_shows_placeholder() {
    let home = TempDir::new().unwrap();
    script_command(&home)
        .write_stdin("info\nexit\n")
        .assert()
        .success()
        .stdout(contains("Welcome to the Lease Manager App!").not())
        .stdout(contains("November 24, 2024"))
        .stdout(contains("Days left in Lease: 731"))
        .stdout(contains("Enter Your Current Mileage!"));
}

#[test]
fn overage_reports_amount_owed() {
    let home = TempDir::new().unwrap();
    script_command(&home)
        .write_stdin("mileage 13000\ninfo\nexit\n")
        .assert()
        .success()
        .stdout(contains("Mileage Saved: The mileage has been updated."))
        .stdout(contains("Recommended Mileage: 12000.00"))
        .stdout(contains("Amount Owed if Mileage Not Reduced: $250.00"))
        .stdout(contains("You are over 1000.00 miles"));
}

#[test]
fn allowance_change_recomputes_recommendation() {
    let home = TempDir::new().unwrap();
    script_command(&home)
        .write_stdin("mileage 13000\nallowance 15k\ninfo\nexit\n")
        .assert()
        .success()
        .stdout(contains("Recommended Mileage: 15000.00"))
        .stdout(contains("You are under 2000.00 miles"))
        .stdout(contains("Amount Owed if Mileage Not Reduced").not());
}

#[test]
fn offers_report_the_cheaper_set() {
    let home = TempDir::new().unwrap();
    let input = "offer 1 down 1000\noffer 1 monthly 300\noffer 2 down 2000\noffer 2 monthly 250\nexit\n";
    script_command(&home)
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains("Total Amount Paid: $11800.00"))
        .stdout(contains("Total Amount Paid: $11000.00"))
        .stdout(contains("You are saving $800.00 more with the 2nd set!"));
}

#[test]
fn config_changes_survive_restart() {
    let home = TempDir::new().unwrap();
    script_command(&home)
        .write_stdin("config set lease_end 2025-11-25\nexit\n")
        .assert()
        .success();

    script_command(&home)
        .write_stdin("lease\nexit\n")
        .assert()
        .success()
        .stdout(contains("End: November 25, 2025"))
        .stdout(contains("Days left in Lease: 366"));
}

#[test]
fn unknown_command_suggests_alternative() {
    let home = TempDir::new().unwrap();
    script_command(&home)
        .write_stdin("milage 10\nexit\n")
        .assert()
        .success()
        .stdout(contains("Unknown command `milage`"))
        .stdout(contains("Suggestion: `mileage`?"));
}
