mod common;

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;

fn cli(home: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("expense_tracker_cli").unwrap();
    cmd.env("EXPENSE_TRACKER_CLI_SCRIPT", "1")
        .env("EXPENSE_TRACKER_HOME", home)
        .env("NO_COLOR", "1")
        .env_remove("EXPENSE_TRACKER_DATA_FILE")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn script_mode_adds_records_and_prints_summary() {
    let home = common::temp_home();
    let input = "1\n2024-01-05\nexpense\n10.00\nGroceries\nMilk\n\
                 1\n2024-01-10\nINCOME\n50\nSalary\nPay\n\
                 1\n2024-02-01\nexpense\n5\nTransport\nBus\n\
                 2\n2024-01\n3\n";

    cli(&home)
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains("Transaction added!"))
        .stdout(contains("Summary for 2024-01"))
        .stdout(contains("Total Expense: 10.00"))
        .stdout(contains("Total Income:  50.00"))
        .stdout(contains("Balance:       40.00"))
        .stdout(contains("Goodbye!"));

    let csv = fs::read_to_string(home.join("transactions.csv")).unwrap();
    assert!(csv.starts_with("date,type,amount,category,description\n"));
    assert!(csv.contains("2024-01-05,expense,10.00,Groceries,Milk"));
    assert!(csv.contains("2024-01-10,income,50.00,Salary,Pay"));
    assert_eq!(csv.lines().count(), 4);
}

#[test]
fn invalid_answers_are_reported_and_reprompted() {
    let home = common::temp_home();
    let input = "7\n1\n2023-02-30\n2023-02-28\ntransfer\nexpense\n-5\n5\nRent\nOther\n\n\
                 2\n202302\n2\n2023-02\n3\n";

    cli(&home)
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains("Please choose 1, 2, or 3."))
        .stdout(contains("Invalid date `2023-02-30`"))
        .stdout(contains("Invalid type `transfer`"))
        .stdout(contains("amount cannot be negative"))
        .stdout(contains("Unknown category `Rent`"))
        .stdout(contains("Invalid month `202302`"))
        .stdout(contains("Total Expense: 5.00"));
}

#[test]
fn oversized_amount_is_refused_and_summary_still_runs() {
    let home = common::temp_home();
    let input = "1\n2024-01-05\nincome\n79228162514264337593543950335\n100\nSalary\n\n\
                 1\n2024-01-06\nincome\n1e40\n20\nSalary\n\n\
                 2\n2024-01\n3\n";

    cli(&home)
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains("amount cannot exceed 1000000000000000"))
        .stdout(contains("Total Income:  120.00"))
        .stdout(contains("Goodbye!"));
}

#[test]
fn empty_month_summarizes_to_zero() {
    let home = common::temp_home();
    cli(&home)
        .write_stdin("2\n2026-01\n3\n")
        .assert()
        .success()
        .stdout(contains("Total Expense: 0.00"))
        .stdout(contains("Total Income:  0.00"))
        .stdout(contains("Balance:       0.00"));
}

#[test]
fn config_controls_data_file_and_currency() {
    let home = common::temp_home();
    fs::create_dir_all(home.join("config")).unwrap();
    fs::write(
        home.join("config").join("config.json"),
        r#"{ "data_file": "books/2024.csv", "currency_symbol": "$" }"#,
    )
    .unwrap();

    cli(&home)
        .write_stdin("1\n2024-03-01\nexpense\n80.25\nDining\nDinner\n1\n2024-03-02\nincome\n20\nOther\n\n2\n2024-03\n3\n")
        .assert()
        .success()
        .stdout(contains("Total Expense: $80.25"))
        .stdout(contains("Balance:       -$60.25"));

    assert!(home.join("books").join("2024.csv").exists());
    assert!(!home.join("transactions.csv").exists());
}

#[test]
fn malformed_rows_are_skipped_with_warning() {
    let home = common::temp_home();
    fs::write(
        home.join("transactions.csv"),
        "date,type,amount,category,description\n\
         2026-01-01,expense,not_a_number,Groceries,bad row\n\
         2026-01-02,income,100.00,Salary,ok row\n",
    )
    .unwrap();

    cli(&home)
        .write_stdin("2\n2026-01\n3\n")
        .assert()
        .success()
        .stdout(contains("Skipped 1 malformed row(s)"))
        .stdout(contains("Total Expense: 0.00"))
        .stdout(contains("Total Income:  100.00"))
        .stdout(contains("Balance:       100.00"));
}

#[test]
fn end_of_input_exits_without_error() {
    let home = common::temp_home();
    cli(&home)
        .write_stdin("1\n2024-01-05\n")
        .assert()
        .success()
        .stdout(contains("Cancelled."))
        .stdout(contains("Transaction added!").not());
}
