mod support;

use assert_cmd::Command;
use predicates::str::contains;
use serde_json::Value;
use support::{day, EventBuilder, TestWorkspace};

const CONFIG: &str = r#"
[[tasks.core]]
id = "venue"
name = "Confirm venue"

[[tasks.core]]
id = "contract"
name = "Send contract"

[[tasks.core]]
id = "retired"
name = "Old checklist item"
active = false
"#;

fn workspace() -> TestWorkspace {
    let ws = TestWorkspace::new();
    ws.write_config(CONFIG);
    ws.write_snapshot(vec![
        EventBuilder::new("gala", "Spring Gala")
            .starts(day(2026, 3, 16)) // 1 day out: critical
            .task_done("venue")
            .build(),
        EventBuilder::new("expo", "Trade Expo")
            .starts(day(2026, 3, 21)) // 6 days out: high
            .task_done("venue")
            .task_done("contract")
            .build(),
        EventBuilder::new("retro", "Winter Retro")
            .starts(day(2026, 2, 1)) // past: none
            .build(),
        EventBuilder::new("tbd", "Venue TBD Party").build(),
    ]);
    ws
}

fn run_json(ws: &TestWorkspace, args: &[&str]) -> Value {
    let output = Command::cargo_bin("evops")
        .expect("binary")
        .current_dir(ws.path())
        .args(args)
        .arg("--json")
        .args(["--now", "2026-03-15"])
        .output()
        .expect("run evops");
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("json envelope")
}

#[test]
fn tasks_reports_readiness_per_event() {
    let ws = workspace();
    let envelope = run_json(&ws, &["tasks"]);

    // The inactive template is not counted.
    assert_eq!(envelope["data"]["core_tasks"], 2);

    let events = envelope["data"]["events"].as_array().expect("events");
    assert_eq!(events.len(), 4);

    let gala = &events[0];
    assert_eq!(gala["id"], "gala");
    assert_eq!(gala["ready"], false);
    assert_eq!(gala["incomplete"][0]["id"], "contract");
    assert_eq!(gala["incomplete"][0]["name"], "Send contract");

    let expo = &events[1];
    assert_eq!(expo["ready"], true);
    assert!(expo.get("incomplete").is_none());
}

#[test]
fn tasks_can_target_one_event() {
    let ws = workspace();
    let envelope = run_json(&ws, &["tasks", "--event", "gala"]);
    let events = envelope["data"]["events"].as_array().expect("events");
    assert_eq!(events.len(), 1);
    assert_eq!(events[0]["id"], "gala");
}

#[test]
fn tasks_unknown_event_is_a_user_error() {
    let ws = workspace();
    Command::cargo_bin("evops")
        .expect("binary")
        .current_dir(ws.path())
        .args(["tasks", "--event", "nope", "--now", "2026-03-15"])
        .assert()
        .failure()
        .code(2)
        .stderr(contains("Event not found"));
}

#[test]
fn summary_buckets_by_urgency() {
    let ws = workspace();
    let envelope = run_json(&ws, &["summary"]);

    let buckets = envelope["data"]["buckets"].as_array().expect("buckets");
    assert_eq!(buckets[0]["tier"], "critical");
    assert_eq!(buckets[0]["count"], 1);
    assert_eq!(buckets[0]["events"][0]["id"], "gala");
    assert_eq!(buckets[0]["events"][0]["days_until"], 1);

    assert_eq!(buckets[1]["tier"], "high");
    assert_eq!(buckets[1]["events"][0]["id"], "expo");

    assert_eq!(buckets[2]["count"], 0);
    assert_eq!(buckets[3]["count"], 0);

    // retro (past) and tbd (undated).
    assert_eq!(envelope["data"]["unscheduled_or_past"], 2);
}

#[test]
fn summary_human_output_lists_tiers() {
    let ws = workspace();
    Command::cargo_bin("evops")
        .expect("binary")
        .current_dir(ws.path())
        .args(["summary", "--now", "2026-03-15"])
        .assert()
        .success()
        .stdout(contains("critical: 1"))
        .stdout(contains("[critical] gala"));
}
