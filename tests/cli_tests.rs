use assert_cmd::Command;
use predicates::{prelude::PredicateBooleanExt, str::contains};
use tempfile::TempDir;

const BIN_NAME: &str = "fintrack";

fn fintrack(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin(BIN_NAME).expect("binary exists");
    cmd.env("FINTRACK_DATA_DIR", dir.path())
        .env_remove("FINTRACK_DATA")
        .env_remove("FINTRACK_LOG");
    cmd
}

#[test]
fn insights_shows_sample_totals() {
    let dir = TempDir::new().unwrap();
    fintrack(&dir)
        .arg("insights")
        .assert()
        .success()
        .stdout(contains("$131,500.00"))
        .stdout(contains("$95,300.00"))
        .stdout(contains("$36,200.00"))
        .stdout(contains("27.5%"))
        .stdout(contains("+5.4% from last month"));
}

#[test]
fn insights_period_windows_months() {
    let dir = TempDir::new().unwrap();
    fintrack(&dir)
        .args(["insights", "--period", "3M"])
        .assert()
        .success()
        .stdout(contains("$40,100.00"))
        .stdout(contains("Oct"))
        .stdout(contains("Sep").not());
}

#[test]
fn insights_rejects_unknown_period() {
    let dir = TempDir::new().unwrap();
    fintrack(&dir)
        .args(["insights", "--period", "2W"])
        .assert()
        .failure()
        .stderr(contains("Invalid period"));
}

#[test]
fn insights_reads_monthly_csv() {
    let dir = TempDir::new().unwrap();
    let csv_path = dir.path().join("months.csv");
    std::fs::write(&csv_path, "month,income,expenses\nJan,1000,1000\n").unwrap();

    fintrack(&dir)
        .args(["insights", "--csv"])
        .arg(&csv_path)
        .assert()
        .success()
        .stdout(contains("$1,000.00"))
        .stdout(contains("0.0%"))
        .stdout(contains("n/a from last month"));
}

#[test]
fn insights_exports_csv() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("insights.csv");
    fintrack(&dir)
        .args(["insights", "--output"])
        .arg(&out)
        .assert()
        .success()
        .stdout(contains("exported to"));

    let text = std::fs::read_to_string(&out).unwrap();
    assert!(text.starts_with("Month,Income,Expenses,Profit"));
    assert!(text.contains("Dec"));
}

#[test]
fn expenses_top_limits_rows() {
    let dir = TempDir::new().unwrap();
    fintrack(&dir)
        .args(["expenses", "--top", "2"])
        .assert()
        .success()
        .stdout(contains("Housing"))
        .stdout(contains("Food & Dining"))
        .stdout(contains("Shopping").not());
}

#[test]
fn transfers_search_by_name() {
    let dir = TempDir::new().unwrap();
    fintrack(&dir)
        .args(["transfers", "list", "--search", "sarah"])
        .assert()
        .success()
        .stdout(contains("Sarah Johnson"))
        .stdout(contains("Marcus Chen").not())
        .stdout(contains("1 transfer(s)"));
}

#[test]
fn transfers_filter_by_status() {
    let dir = TempDir::new().unwrap();
    fintrack(&dir)
        .args(["transfers", "list", "--status", "failed"])
        .assert()
        .success()
        .stdout(contains("Yuki Tanaka"))
        .stdout(contains("Sarah Johnson").not());
}

#[test]
fn transfers_no_match_is_not_an_error() {
    let dir = TempDir::new().unwrap();
    fintrack(&dir)
        .args(["transfers", "list", "--search", "zzz"])
        .assert()
        .success()
        .stdout(contains("No transfers found"));
}

#[test]
fn transfers_invalid_status_fails() {
    let dir = TempDir::new().unwrap();
    fintrack(&dir)
        .args(["transfers", "list", "--status", "sent"])
        .assert()
        .failure()
        .stderr(contains("Invalid status filter"));
}

#[test]
fn transfers_list_exports_matches() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("transfers.csv");
    fintrack(&dir)
        .args(["transfers", "list", "--status", "completed", "--output"])
        .arg(&out)
        .assert()
        .success()
        .stdout(contains("Exported 2 transfer(s)"));

    let text = std::fs::read_to_string(&out).unwrap();
    assert_eq!(text.lines().count(), 3);
    assert!(text.contains("Elena Rodriguez"));
}

#[test]
fn transfers_stats() {
    let dir = TempDir::new().unwrap();
    fintrack(&dir)
        .args(["transfers", "stats"])
        .assert()
        .success()
        .stdout(contains("6,450.00 USD"))
        .stdout(contains("32.75 USD"));
}

#[test]
fn transfers_show_and_missing() {
    let dir = TempDir::new().unwrap();
    fintrack(&dir)
        .args(["transfers", "show", "tr-4"])
        .assert()
        .success()
        .stdout(contains("Japan"));

    fintrack(&dir)
        .args(["transfers", "show", "99"])
        .assert()
        .failure()
        .stderr(contains("Transfer not found: tr-99"));
}

#[test]
fn transfers_quote() {
    let dir = TempDir::new().unwrap();
    fintrack(&dir)
        .args([
            "transfers", "quote", "--email", "a@b.com", "--amount", "1,000", "--to", "EUR",
            "--rate", "0.915", "--fee", "5",
        ])
        .assert()
        .success()
        .stdout(contains("915.00 EUR"))
        .stdout(contains("1,005.00 USD"));
}

#[test]
fn transfers_quote_rejects_bad_email() {
    let dir = TempDir::new().unwrap();
    fintrack(&dir)
        .args([
            "transfers", "quote", "--email", "nobody", "--amount", "10", "--to", "EUR",
            "--rate", "0.9",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid recipient email"));
}

#[test]
fn settings_toggle_flips_value() {
    let dir = TempDir::new().unwrap();
    fintrack(&dir)
        .args(["settings", "toggle", "security", "biometric"])
        .assert()
        .success()
        .stdout(contains("security/biometric is now on"));
}

#[test]
fn settings_toggle_unknown_id_is_noop() {
    let dir = TempDir::new().unwrap();
    fintrack(&dir)
        .args(["settings", "toggle", "notifications", "missing"])
        .assert()
        .success()
        .stdout(contains("nothing changed"));
}

#[test]
fn settings_unknown_category_fails() {
    let dir = TempDir::new().unwrap();
    fintrack(&dir)
        .args(["settings", "list", "profile"])
        .assert()
        .failure()
        .stderr(contains("Invalid setting category"));
}

#[test]
fn settings_list_one_category() {
    let dir = TempDir::new().unwrap();
    fintrack(&dir)
        .args(["settings", "list", "notifications"])
        .assert()
        .success()
        .stdout(contains("Notification Preferences"))
        .stdout(contains("Security Settings").not());
}

#[test]
fn export_json_to_stdout() {
    let dir = TempDir::new().unwrap();
    let output = fintrack(&dir)
        .args(["export", "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["metadata"]["transfer_count"], 4);
}

#[test]
fn export_yaml_to_file() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("snapshot.yaml");
    fintrack(&dir)
        .args(["export", "--format", "yaml", "--output"])
        .arg(&out)
        .assert()
        .success();

    let text = std::fs::read_to_string(&out).unwrap();
    assert!(text.contains("Sarah Johnson"));
}

#[test]
fn quote_rejects_oversized_amount() {
    let dir = TempDir::new().unwrap();
    fintrack(&dir)
        .args([
            "transfers", "quote", "--email", "a@b.com", "--amount", "99999999999999999",
            "--to", "EUR", "--rate", "0.9",
        ])
        .assert()
        .failure()
        .stderr(contains("Amount out of range"));
}

#[test]
fn custom_dataset_file() {
    let dir = TempDir::new().unwrap();
    let data = dir.path().join("mine.json");
    std::fs::write(
        &data,
        r#"{"monthly": [{"month": "Jan", "income": 2000, "expenses": 500, "profit": 1500}]}"#,
    )
    .unwrap();

    fintrack(&dir)
        .arg("--data")
        .arg(&data)
        .args(["insights"])
        .assert()
        .success()
        .stdout(contains("$2,000.00"))
        .stdout(contains("75.0%"));

    fintrack(&dir)
        .arg("--data")
        .arg(&data)
        .args(["transfers", "list"])
        .assert()
        .success()
        .stdout(contains("No transfers found"));
}

#[test]
fn missing_dataset_file_fails() {
    let dir = TempDir::new().unwrap();
    fintrack(&dir)
        .args(["--data", "/nonexistent/fintrack.json", "insights"])
        .assert()
        .failure()
        .stderr(contains("Storage error"));
}

#[test]
fn init_writes_config_and_config_shows_it() {
    let dir = TempDir::new().unwrap();
    fintrack(&dir).arg("init").assert().success();
    assert!(dir.path().join("config.json").exists());

    fintrack(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(contains("Initialized:      true"))
        .stdout(contains("Insight period: 12M"));
}
