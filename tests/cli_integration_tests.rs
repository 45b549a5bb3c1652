// CLI integration tests for the mindful binary
// Every command runs with short timers so the suite stays fast

use assert_cmd::Command;
use predicates::prelude::*;

fn mindful() -> Command {
    let mut cmd = Command::cargo_bin("mindful").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_no_subcommand_shows_welcome() {
    mindful()
        .assert()
        .success()
        .stdout(predicate::str::contains("Your personal mental wellness companion"))
        .stdout(predicate::str::contains("mindful breathe"))
        .stdout(predicate::str::contains("not a replacement for professional mental health care"));
}

#[test]
fn test_help_lists_commands() {
    mindful()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("breathe"))
        .stdout(predicate::str::contains("mood"))
        .stdout(predicate::str::contains("chat"))
        .stdout(predicate::str::contains("resources"));
}

#[test]
fn test_breathe_runs_one_cycle() {
    mindful()
        .args(["breathe", "--cycles", "1", "--interval-ms", "20"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Breathe in slowly"))
        .stdout(predicate::str::contains("Hold your breath"))
        .stdout(predicate::str::contains("Completed cycles: 1"))
        .stdout(predicate::str::contains("Session complete: 1 cycle(s)"))
        .stdout(predicate::str::contains("Benefits of Deep Breathing"));
}

#[test]
fn test_breathe_json_output() {
    let output = mindful()
        .args(["breathe", "--cycles", "1", "--interval-ms", "20", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let snapshots: Vec<serde_json::Value> = stdout
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    let first = snapshots.first().unwrap();
    assert_eq!(first["phase"], "inhale");
    assert_eq!(first["is_running"], true);

    let last = snapshots.last().unwrap();
    assert_eq!(last["completed_cycles"], 1);
    assert_eq!(last["phase"], "inhale");
}

#[test]
fn test_mood_check_in() {
    mindful()
        .args(["mood", "good", "--note", "went for a walk"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Your mood check-in has been recorded"))
        .stdout(predicate::str::contains("Good"))
        .stdout(predicate::str::contains("went for a walk"));
}

#[test]
fn test_mood_json() {
    let output = mindful().args(["mood", "LOW", "--json"]).output().unwrap();
    assert!(output.status.success());

    let entry: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(entry["mood"], "low");
    assert!(entry.get("note").is_none());
    assert!(entry["recorded_at"].is_string());
}

#[test]
fn test_mood_without_argument_lists_options() {
    mindful()
        .arg("mood")
        .assert()
        .success()
        .stdout(predicate::str::contains("How are you feeling today?"))
        .stdout(predicate::str::contains("mindful mood great"));
}

#[test]
fn test_unknown_mood_fails() {
    mindful()
        .args(["mood", "meh"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown mood 'meh'"));
}

#[test]
fn test_chat_single_message() {
    mindful()
        .args(["chat", "--delay-ms", "0", "--message", "I'm feeling really stressed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("How are you feeling today?"))
        .stdout(predicate::str::contains("Let's try a quick breathing exercise"));
}

#[test]
fn test_chat_interactive_session() {
    mindful()
        .args(["chat", "--delay-ms", "0"])
        .write_stdin("I am sad\n\nhello there\n/quit\nnever sent\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("I'm sorry to hear you're feeling down"))
        .stdout(predicate::str::contains("Thank you for sharing"))
        .stdout(predicate::str::contains("Take care"))
        .stdout(predicate::str::contains("never sent").not());
}

#[test]
fn test_resources_lists_directory() {
    mindful()
        .arg("resources")
        .assert()
        .success()
        .stdout(predicate::str::contains("National Suicide Prevention Lifeline"))
        .stdout(predicate::str::contains("Call Now → tel:1-800-273-8255"))
        .stdout(predicate::str::contains("Read More → https://www.mentalhealthfirstaid.org/"));
}

#[test]
fn test_resources_filter_by_kind() {
    let output = mindful()
        .args(["resources", "--kind", "chat", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let resources: Vec<serde_json::Value> = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(resources.len(), 2);
    assert!(resources.iter().all(|r| r["kind"] == "chat"));
}

#[test]
fn test_resources_unknown_kind_fails() {
    mindful()
        .args(["resources", "--kind", "podcast"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown resource kind"));
}
