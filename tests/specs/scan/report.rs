//! Reports in each format, written to stdout or a file.

use crate::prelude::*;

const PROCFILE: &str = "\
web: echo serving
worker: true
broken: exit 3
";

#[test]
fn json_report_lists_failures_with_stable_keys() {
    let temp = Project::empty();
    temp.file("Procfile", PROCFILE);

    temp.doscan()
        .args(&["scan", "--format", "json", "--output", "report.json"])
        .exits(1)
        .stderr_has("1 command(s) failed");

    let json = temp.read_json("report.json");
    assert_eq!(json["total_failed"], 1);
    assert_eq!(json["failed_commands"].as_array().unwrap().len(), 1);
    let failure = &json["failed_commands"][0];
    assert_eq!(failure["command"], "exit 3");
    assert_eq!(failure["return_code"], 3);
    assert_eq!(failure["type"], "procfile-process");
    assert!(failure["source"].as_str().unwrap().ends_with("Procfile"));
    assert!(failure["execution_time"].is_number());
    assert!(json["generated_at"].is_string());
    assert_eq!(json["summary"]["success_rate"], 66.7);
}

#[test]
fn markdown_report_goes_to_stdout_by_default() {
    let temp = Project::empty();
    temp.file("Procfile", PROCFILE);

    temp.doscan()
        .args(&["scan"])
        .exits(1)
        .stdout_has("# Command Scan Report")
        .stdout_has("exit 3")
        .stdout_has("- **Exit code:** 3")
        .stdout_has("- **Total detected:** 3")
        .stdout_has("- **Success rate:** 66.7%");
}

#[test]
fn format_is_inferred_from_output_extension() {
    let temp = Project::empty();
    temp.file("Procfile", "web: true\n");

    temp.doscan().args(&["scan", "-o", "out.txt"]).passes().stderr_has("report written to out.txt");
    let text = temp.read("out.txt");
    assert!(text.contains("OK"), "got:\n{text}");
    assert!(text.contains("summary: total=1"), "got:\n{text}");
}

#[test]
fn passing_project_exits_zero() {
    let temp = Project::empty();
    temp.file("Procfile", "web: echo serving\nworker: true\n");

    temp.doscan().args(&["scan", "--format", "json"]).passes();
}

#[test]
fn scan_accepts_project_path_argument() {
    let temp = Project::empty();
    temp.file("app/Procfile", "broken: exit 4\n");

    let run = cli().args(&["scan", "--format", "json", temp.join("app").to_str().unwrap()]).exits(1);
    assert_eq!(run.stdout_json()["failed_commands"][0]["return_code"], 4);
}

#[test]
fn commands_run_in_their_file_directory_with_extra_env() {
    let temp = Project::empty();
    temp.file("svc/Procfile", "check: test -f Procfile && test \"$GREETING\" = hi\n");

    temp.doscan().args(&["scan", "--env", "GREETING=hi"]).passes();
    temp.doscan().args(&["scan"]).exits(1);
}

#[test]
fn parallel_jobs_keep_report_order() {
    let temp = Project::empty();
    temp.file("a/Procfile", "one: sleep 0.2 && exit 5\n");
    temp.file("b/Procfile", "two: true\n");
    temp.file("c/Procfile", "three: exit 6\n");

    let run = temp.doscan().args(&["scan", "--format", "json", "--jobs", "3"]).exits(1);
    let json = run.stdout_json();
    let codes: Vec<_> =
        json["failed_commands"].as_array().unwrap().iter().map(|f| f["return_code"].clone()).collect();
    assert_eq_diff!(codes, vec![serde_json::json!(5), serde_json::json!(6)]);
}
