use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn scout_budget(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("scout-budget").unwrap();
    cmd.env("SCOUT_BUDGET_DIR", config_dir.path())
        .env_remove("RUST_LOG");
    cmd
}

const SCENARIO_A: [&str; 17] = [
    "calc",
    "--total-children",
    "10",
    "--overnight-children",
    "4",
    "--transport-per-child",
    "5",
    "--transport-per-leader",
    "8",
    "--leaders",
    "2",
    "--venue-fee",
    "50",
    "--food",
    "100",
    "--materials",
    "20",
];

#[test]
fn calc_reports_deficit_without_fees() {
    let dir = TempDir::new().unwrap();
    scout_budget(&dir)
        .args(SCENARIO_A)
        .arg("--no-color")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total expenses"))
        .stdout(predicate::str::contains("-€ 236.00"))
        .stdout(predicate::str::contains("€ 23.60"))
        .stdout(predicate::str::contains("IN THE BLACK").not());
}

#[test]
fn calc_break_even_turns_balance_positive() {
    let dir = TempDir::new().unwrap();
    scout_budget(&dir)
        .args(SCENARIO_A)
        .args(["--break-even", "--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("day-rate,23.60"))
        .stdout(predicate::str::contains("overnight-rate,28.32"))
        .stdout(predicate::str::contains("balance,18.88"));
}

#[test]
fn calc_treasury_funded_leaders() {
    let dir = TempDir::new().unwrap();
    scout_budget(&dir)
        .args(SCENARIO_A)
        .args(["--treasury", "--leader-contribution", "15", "--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("leader-income,30.00"))
        .stdout(predicate::str::contains("expenses-children-must-cover,206.00"))
        .stdout(predicate::str::contains("break-even-rate,20.60"));
}

#[test]
fn calc_rejects_unknown_field() {
    let dir = TempDir::new().unwrap();
    scout_budget(&dir)
        .args(["calc", "--set", "tents=3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown field: tents"));
}

#[test]
fn calc_warns_about_inconsistent_counts() {
    let dir = TempDir::new().unwrap();
    scout_budget(&dir)
        .args(["calc", "--set", "total-children=2", "--set", "overnight-children=5"])
        .args(["--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"day_children\": -3"))
        .stderr(predicate::str::contains("more overnight children"));
}

#[test]
fn template_feeds_calc_input() {
    let dir = TempDir::new().unwrap();
    let input_path = dir.path().join("outing.yaml");

    let output = scout_budget(&dir)
        .args(["template", "--example", "--format", "yaml"])
        .output()
        .unwrap();
    assert!(output.status.success());
    std::fs::write(&input_path, output.stdout).unwrap();

    scout_budget(&dir)
        .arg("calc")
        .arg("--input")
        .arg(&input_path)
        .args(["--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("total-expenses,236.00"));
}

#[test]
fn calc_writes_report_file() {
    let dir = TempDir::new().unwrap();
    let report_path = dir.path().join("report.json");

    scout_budget(&dir)
        .args(SCENARIO_A)
        .arg("--output")
        .arg(&report_path)
        .args(["--format", "json"])
        .assert()
        .success();

    let text = std::fs::read_to_string(&report_path).unwrap();
    let report: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(report["output"]["total_expenses"], "236.00");
}

#[test]
fn fields_lists_every_field() {
    let dir = TempDir::new().unwrap();
    scout_budget(&dir)
        .arg("fields")
        .assert()
        .success()
        .stdout(predicate::str::contains("total-children"))
        .stdout(predicate::str::contains("leaders-pay-from-treasury"))
        .stdout(predicate::str::contains("leader-contribution"));
}

#[test]
fn config_set_changes_default_format() {
    let dir = TempDir::new().unwrap();
    scout_budget(&dir)
        .args(["config", "set", "--format", "csv", "--currency", "CHF"])
        .assert()
        .success();
    assert!(dir.path().join("config.json").exists());

    scout_budget(&dir)
        .args(["calc", "--venue-fee", "12"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("metric,value"));

    scout_budget(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Currency symbol: CHF"));
}

#[test]
fn named_amount_flags_are_strict_and_set_is_lenient() {
    let dir = TempDir::new().unwrap();
    scout_budget(&dir)
        .args(["calc", "--food", "abc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid money format"));

    scout_budget(&dir)
        .args(["calc", "--set", "food-cost=abc", "--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("food-cost,0.00"));

    scout_budget(&dir)
        .args(["calc", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("unreadable text becomes 0"));
}

#[test]
fn calc_keeps_sub_cent_amounts() {
    let dir = TempDir::new().unwrap();
    scout_budget(&dir)
        .args(["calc", "--total-children", "8", "--transport-per-child", "0.125"])
        .args(["--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"transport_cost_per_child\": \"0.125\""))
        .stdout(predicate::str::contains("\"total_expenses\": \"1.00\""));
}

#[test]
fn calc_reads_out_of_range_amount_as_zero() {
    let dir = TempDir::new().unwrap();
    scout_budget(&dir)
        .args(["calc", "--set", "food-cost=1000000000000000000000000000000"])
        .args(["--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("food-cost,0.00"));
}

#[test]
fn config_init_force_repairs_corrupt_settings() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.json"), "{ not json").unwrap();

    scout_budget(&dir)
        .args(["calc", "--venue-fee", "12"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse settings file"));

    scout_budget(&dir)
        .args(["config", "init", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote default settings"));

    scout_budget(&dir)
        .args(["calc", "--venue-fee", "12", "--no-color"])
        .assert()
        .success()
        .stdout(predicate::str::contains("€ 12.00"));
}
