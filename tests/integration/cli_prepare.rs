use predicates::prelude::*;
use serde_json::json;
use test_support;

fn write_inputs(dir: &std::path::Path, params: &serde_json::Value) -> (String, String) {
  let paths = test_support::paths_under(dir, &[("report", "out/txt"), ("json", "out/json")]);
  let p = test_support::write_json(dir, "parameters.json", params);
  let d = test_support::write_json(dir, "paths.json", &paths);
  (p.to_string_lossy().to_string(), d.to_string_lossy().to_string())
}

#[test]
fn cli_prints_prepared_report() {
  let td = test_support::tempdir();
  let params: serde_json::Value = test_support::read_fixture_json("parameters.sales_daily.json");
  let (p, d) = write_inputs(td.path(), &params);

  let out = test_support::cmd_bin("sales-report-prep")
    .env_remove("SALES_REPORT_CONFIG_DIR")
    .args(["--parameters", &p, "--paths", &d])
    .output()
    .unwrap();

  assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
  assert!(td.path().join("out/txt").is_dir());
  assert!(td.path().join("out/json").is_dir());

  let v: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
  insta::assert_json_snapshot!(v, { ".paths.report" => "[dir]", ".paths.json" => "[dir]" }, @r###"
  {
    "file_name": "S_D_80012345_20240101",
    "paths": {
      "json": "[dir]",
      "report": "[dir]"
    }
  }
  "###);
}

#[test]
fn cli_reads_parameters_from_stdin() {
  let td = test_support::tempdir();
  let paths = test_support::paths_under(td.path(), &[("report", "stdin")]);
  let d = test_support::write_json(td.path(), "paths.json", &paths);

  test_support::cmd_bin("sales-report-prep")
    .env_remove("SALES_REPORT_CONFIG_DIR")
    .args(["--parameters", "-", "--paths"])
    .arg(&d)
    .write_stdin(test_support::read_fixture_json::<serde_json::Value, _>("parameters.sales_daily.json").to_string())
    .assert()
    .success()
    .stdout(predicate::str::contains("S_D_80012345_20240101"));
}

#[test]
fn cli_reports_violations_and_fails() {
  let td = test_support::tempdir();
  let params: serde_json::Value = test_support::read_fixture_json("parameters.missing_vendor.json");
  let (p, d) = write_inputs(td.path(), &params);

  test_support::cmd_bin("sales-report-prep")
    .env_remove("SALES_REPORT_CONFIG_DIR")
    .args(["--parameters", &p, "--paths", &d])
    .assert()
    .failure()
    .stderr(predicate::str::contains("\"violations\""))
    .stderr(predicate::str::contains("vendor_number"))
    .stderr(predicate::str::contains("Please enter all the required parameters"));

  assert!(!td.path().join("out").exists());
}

#[test]
fn cli_config_dir_overrides_prefix_table() {
  let td = test_support::tempdir();
  let config = td.path().join("config");
  std::fs::create_dir_all(&config).unwrap();
  for name in ["parameters_schema.json", "paths_schema.json"] {
    std::fs::copy(test_support::config_dir().join(name), config.join(name)).unwrap();
  }
  test_support::write_json(&config, "filename_prefix.json", &json!({ "Sales_Summary_Daily": "CUSTOM" }));

  let params: serde_json::Value = test_support::read_fixture_json("parameters.sales_daily.json");
  let (p, d) = write_inputs(td.path(), &params);

  test_support::cmd_bin("sales-report-prep")
    .env("SALES_REPORT_CONFIG_DIR", &config)
    .args(["--parameters", &p, "--paths", &d])
    .assert()
    .success()
    .stdout(predicate::str::contains("CUSTOM_80012345_20240101"));
}

#[test]
fn cli_missing_config_document_fails() {
  let td = test_support::tempdir();
  let empty = td.path().join("empty-config");
  std::fs::create_dir_all(&empty).unwrap();
  let params: serde_json::Value = test_support::read_fixture_json("parameters.sales_daily.json");
  let (p, d) = write_inputs(td.path(), &params);

  test_support::cmd_bin("sales-report-prep")
    .env_remove("SALES_REPORT_CONFIG_DIR")
    .args(["--parameters", &p, "--paths", &d, "--config-dir"])
    .arg(&empty)
    .assert()
    .failure()
    .stderr(predicate::str::contains("config document not found"));
}
