use assert_fs::prelude::*;
use predicates::prelude::*;

const BOOK: &str = "generated_on: 2026-10-18
managers:
  - id: katerina
    sales:
      week: [100, 110, 120, 130, 140, 150, 160]
      month: [120, 90, 100, 130, 140, 110, 95, 150, 160, 155, 145, 170, 180, 175, 160, 150, 140, 135, 145, 155, 165, 170, 180, 190, 185, 175, 160, 150, 145, 155]
";

#[test]
fn summary_reports_cards_from_sales_file() {
    let input = assert_fs::NamedTempFile::new("sales.yaml").unwrap();
    input.write_str(BOOK).unwrap();

    let mut cmd = assert_cmd::cargo_bin_cmd!("salesboard");
    cmd.args(["summary", "-i", input.path().to_str().unwrap()]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Катерина Орлова (Москва)"))
        .stdout(predicate::str::contains("Итого за месяц: 4\u{a0}480 тыс. ₽"))
        .stdout(predicate::str::contains("Среднее в день: 149 тыс. ₽"))
        .stdout(predicate::str::contains("Лучший день (24): 190 тыс. ₽"));
}

#[test]
fn summary_degrades_missing_managers_to_zero() {
    let input = assert_fs::NamedTempFile::new("sales.yaml").unwrap();
    input.write_str(BOOK).unwrap();

    let mut cmd = assert_cmd::cargo_bin_cmd!("salesboard");
    cmd.args(["summary", "-i", input.path().to_str().unwrap()]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Иван Филимонов (Казань)"))
        .stdout(predicate::str::contains("Итого за месяц: 0 тыс. ₽"))
        .stdout(predicate::str::contains("Лучший день: n/a"));
}

#[test]
fn summary_totals_follow_requested_period() {
    let input = assert_fs::NamedTempFile::new("sales.yaml").unwrap();
    input.write_str(BOOK).unwrap();

    let mut cmd = assert_cmd::cargo_bin_cmd!("salesboard");
    cmd.args(["summary", "-i", input.path().to_str().unwrap(), "-p", "week"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Итого за неделю:"))
        .stdout(predicate::str::contains("Катерина Орлова | 910 тыс. ₽"));
}

#[test]
fn summary_generates_in_memory_without_input() {
    let mut cmd = assert_cmd::cargo_bin_cmd!("salesboard");
    cmd.args(["summary", "--seed", "3"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Sales Summary"))
        .stdout(predicate::str::contains("Лариса Чернова (Екатеринбург)"));
}

#[test]
fn summary_fails_on_missing_input() {
    let temp = assert_fs::TempDir::new().unwrap();
    let missing = temp.path().join("missing.yaml");

    let mut cmd = assert_cmd::cargo_bin_cmd!("salesboard");
    cmd.args(["summary", "-i", missing.to_str().unwrap()]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("failed to read sales file"));
}

#[test]
fn summary_clamps_totals_that_overflow() {
    let input = assert_fs::NamedTempFile::new("sales.yaml").unwrap();
    input
        .write_str(
            "generated_on: 2026-10-18
managers:
  - id: katerina
    sales:
      month: [9223372036854775807, 1]
",
        )
        .unwrap();

    let mut cmd = assert_cmd::cargo_bin_cmd!("salesboard");
    cmd.args(["summary", "-i", input.path().to_str().unwrap()]);

    cmd.assert().success().stdout(predicate::str::contains(
        "Итого за месяц: 9\u{a0}223\u{a0}372\u{a0}036\u{a0}854\u{a0}775\u{a0}807 тыс. ₽",
    ));
}

#[test]
fn summary_rejects_oversized_smoothing_window() {
    let config = assert_fs::NamedTempFile::new("dashboard.yaml").unwrap();
    config
        .write_str("generator:\n  smoothing_window: 18446744073709551615\n")
        .unwrap();

    let mut cmd = assert_cmd::cargo_bin_cmd!("salesboard");
    cmd.args(["summary", "-c", config.path().to_str().unwrap()]);

    cmd.assert()
        .code(1)
        .stderr(predicate::str::contains("smoothing_window"));
}
