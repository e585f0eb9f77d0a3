use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn ghlc() -> Command {
    Command::cargo_bin("ghlc").unwrap()
}

#[test]
fn test_end_to_end_scan() {
    let project = tempdir().unwrap();
    fs::write(
        project.path().join("Cartfile.resolved"),
        "github \"Alamofire/Alamofire\" \"5.4.0\"\ngithub \"ReactiveX/RxSwift\" \"6.2.0\"\n",
    )
    .unwrap();
    fs::write(
        project.path().join("Mintfile"),
        "yonaskolb/XcodeGen@2.18.0\n",
    )
    .unwrap();
    fs::write(
        project.path().join(".ghlc.yml"),
        "renames:\n  Alamofire: Networking\n",
    )
    .unwrap();

    ghlc()
        .arg("scan")
        .arg(project.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Alamofire/Alamofire (as Networking) 5.4.0 [unknown] \
             https://github.com/Alamofire/Alamofire",
        ))
        .stdout(predicate::str::contains("ReactiveX/RxSwift 6.2.0"))
        .stdout(predicate::str::contains("yonaskolb/XcodeGen 2.18.0"));
}

#[test]
fn test_scan_json_output() {
    let project = tempdir().unwrap();
    fs::write(
        project.path().join("Cartfile.resolved"),
        "github \"Alamofire/Alamofire\" \"5.4.0\"\n",
    )
    .unwrap();

    let output = ghlc()
        .arg("scan")
        .arg(project.path())
        .args(["--format", "json", "--silence"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let parsed: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(parsed[0]["owner"], "Alamofire");
    assert_eq!(parsed[0]["name"], "Alamofire");
    assert_eq!(parsed[0]["version"], "5.4.0");
    assert_eq!(parsed[0]["license"], "unknown");
    assert_eq!(
        parsed[0]["source"],
        "https://github.com/Alamofire/Alamofire"
    );
}

#[test]
fn test_scan_without_manifests_is_empty_and_warns() {
    let project = tempdir().unwrap();

    ghlc()
        .arg("scan")
        .arg(project.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Not found"));
}

#[test]
fn test_scan_silence_suppresses_warnings() {
    let project = tempdir().unwrap();

    ghlc()
        .arg("scan")
        .arg(project.path())
        .arg("--silence")
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_mixed_manifest_drops_unversioned_entries() {
    let project = tempdir().unwrap();
    fs::write(
        project.path().join("Cartfile.resolved"),
        "github \"Alamofire/Alamofire\" \"5.4.0\"\ngithub \"ReactiveX/RxSwift\"\n",
    )
    .unwrap();

    ghlc()
        .arg("scan")
        .arg(project.path())
        .arg("--silence")
        .assert()
        .success()
        .stdout(predicate::str::contains("Alamofire"))
        .stdout(predicate::str::contains("RxSwift").not());
}

#[test]
fn test_commit_hash_versions_are_shortened() {
    let project = tempdir().unwrap();
    fs::write(
        project.path().join("Cartfile.resolved"),
        "github \"danielgindi/Charts\" \"7631c56edf94f7a2bcae9f5d5e4e4f4d2c7a19cf\"\n",
    )
    .unwrap();

    ghlc()
        .arg("scan")
        .arg(project.path())
        .arg("--silence")
        .assert()
        .success()
        .stdout(predicate::str::contains("danielgindi/Charts 7631c56 "))
        .stdout(predicate::str::contains("7631c56edf94").not());
}

#[test]
fn test_scan_writes_report_to_output_file() {
    let project = tempdir().unwrap();
    fs::write(
        project.path().join("Mintfile"),
        "realm/SwiftLint@0.43.1\n",
    )
    .unwrap();
    let report_path = project.path().join("report.txt");

    ghlc()
        .arg("scan")
        .arg(project.path())
        .args(["--silence", "--output"])
        .arg(&report_path)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let report = fs::read_to_string(&report_path).unwrap();
    assert!(report.contains("realm/SwiftLint 0.43.1"));
}

#[test]
fn test_scan_with_missing_explicit_config_fails() {
    let project = tempdir().unwrap();

    ghlc()
        .arg("scan")
        .arg(project.path())
        .args(["--silence", "--config"])
        .arg(project.path().join("nope.yml"))
        .assert()
        .failure();
}

#[test]
fn test_scan_nonexistent_directory_fails() {
    ghlc()
        .arg("scan")
        .arg("/nonexistent/path/for/sure")
        .arg("--silence")
        .assert()
        .failure();
}
