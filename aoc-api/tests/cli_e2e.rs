#![allow(deprecated)]

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const SESSION: &str = "53616c7465645f5f";

struct Env {
    temp: TempDir,
    server: mockito::ServerGuard,
}

impl Env {
    /// Config directory with a stored artifacts location, but no cookie
    fn new() -> Self {
        let temp = TempDir::new().unwrap();
        let env = Self {
            temp,
            server: mockito::Server::new(),
        };
        fs::create_dir_all(env.config_dir()).unwrap();
        fs::write(
            env.config_dir().join("artifactspath.txt"),
            env.artifacts().display().to_string(),
        )
        .unwrap();
        env
    }

    fn config_dir(&self) -> PathBuf {
        self.temp.path().join("config")
    }

    fn artifacts(&self) -> PathBuf {
        self.temp.path().join("artifacts")
    }

    fn aoc(&self) -> Command {
        let mut cmd = Command::new(cargo_bin("aoc"));
        cmd.env("AOC_CONFIG_DIR", self.config_dir().as_os_str())
            .env("AOC_BASE_URL", self.server.url())
            .env_remove("RUST_LOG");
        cmd
    }

    fn with_cookie(self) -> Self {
        self.aoc().args(["cookie", SESSION]).assert().success();
        self
    }
}

fn write(path: &Path, content: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

#[test]
fn test_fetch_downloads_then_serves_from_cache() {
    let mut env = Env::new().with_cookie();
    let mock = env
        .server
        .mock("GET", "/2020/day/1/input")
        .match_header("cookie", format!("session={}", SESSION).as_str())
        .with_status(200)
        .with_body("42\n")
        .expect(1)
        .create();

    env.aoc()
        .args(["fetch", "2020", "1"])
        .assert()
        .success()
        .stdout("42\n");
    assert_eq!(
        fs::read_to_string(env.artifacts().join("2020").join("1").join("input.txt")).unwrap(),
        "42\n"
    );

    // Second call reads the stored file; the mock still expects exactly one hit
    env.aoc()
        .args(["fetch", "2020", "1"])
        .assert()
        .success()
        .stdout("42\n");
    mock.assert();
}

#[test]
fn test_fetch_passes_input_bytes_through() {
    let mut env = Env::new().with_cookie();
    let body: &'static [u8] = &[0x34, 0x32, 0xFF, 0x0A];
    let _mock = env
        .server
        .mock("GET", "/2020/day/9/input")
        .with_status(200)
        .with_body(body)
        .create();

    env.aoc()
        .args(["fetch", "2020", "9"])
        .assert()
        .success()
        .stdout(body);
    assert_eq!(
        fs::read(env.artifacts().join("2020").join("9").join("input.txt")).unwrap(),
        body
    );

    // A cached file that is not UTF-8 is printed unchanged
    env.aoc()
        .args(["fetch", "2020", "9"])
        .assert()
        .success()
        .stdout(body);
}

#[test]
fn test_fetch_cached_input_needs_no_cookie() {
    let env = Env::new();
    write(
        &env.artifacts().join("2015").join("3").join("input2.txt"),
        "^>v<",
    );

    env.aoc()
        .args(["fetch", "2015", "3", "2"])
        .assert()
        .success()
        .stdout("^>v<");
}

#[test]
fn test_fetch_without_cookie_fails() {
    let env = Env::new();

    env.aoc()
        .args(["fetch", "2020", "1"])
        .assert()
        .failure()
        .code(predicate::ne(1))
        .stderr(predicate::str::starts_with("Error:"));
}

#[test]
fn test_first_run_prompts_for_artifacts_location() {
    let env = Env::new();
    fs::remove_file(env.config_dir().join("artifactspath.txt")).unwrap();
    let artifacts = env.temp.path().join("prompted");

    env.aoc()
        .args(["status"])
        .write_stdin(format!("{}\n", artifacts.display()))
        .assert()
        .success()
        .stderr(predicate::str::contains("absolute path"))
        .stdout(predicate::str::contains("Total: 0 Gold Stars"));

    assert_eq!(
        fs::read_to_string(env.config_dir().join("artifactspath.txt")).unwrap(),
        artifacts.display().to_string()
    );
}

#[test]
fn test_submit_offline_then_cached() {
    let mut env = Env::new();
    let network = env
        .server
        .mock("GET", mockito::Matcher::Any)
        .expect(0)
        .create();
    let answer_file = env.artifacts().join("2020").join("1").join("answer1.txt");

    env.aoc()
        .args(["submit", "2020", "1", "1", "514579", "--offline"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Assuming that '514579'"));
    assert_eq!(fs::read_to_string(&answer_file).unwrap(), "514579");

    env.aoc()
        .args(["submit", "2020", "1", "1", "--offline"])
        .write_stdin("514579\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    env.aoc()
        .args(["submit", "2020", "1", "1"])
        .write_stdin("514579\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("right answer (cached)"));

    env.aoc()
        .args(["submit", "2020", "1", "1", "1"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("cached: 514579"));

    network.assert();
}

#[test]
fn test_submit_empty_answer() {
    let env = Env::new();

    env.aoc()
        .args(["submit", "2020", "1", "1"])
        .write_stdin("\n")
        .assert()
        .failure()
        .code(predicate::ne(1))
        .stderr(predicate::str::contains("empty answer"));
}

#[test]
fn test_submit_to_website() {
    let mut env = Env::new().with_cookie();
    let _description = env
        .server
        .mock("GET", "/2024/day/2")
        .with_status(200)
        .with_body("<html><main><article>puzzle</article></main></html>")
        .create();
    let _answer = env
        .server
        .mock("POST", "/2024/day/2/answer")
        .match_header("cookie", format!("session={}", SESSION).as_str())
        .with_status(200)
        .with_body("<html><main><p>That's not the right answer; your answer is too low.</p></main></html>")
        .create();

    env.aoc()
        .args(["submit", "2024", "2", "1", "3"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("too low"));
    assert!(
        !env.artifacts()
            .join("2024")
            .join("2")
            .join("answer1.txt")
            .exists()
    );
}

#[test]
fn test_status_output() {
    let env = Env::new();
    for (year, day, part) in [(2020, 1, 1), (2020, 1, 2), (2020, 2, 1), (2021, 5, 2)] {
        write(
            &env.artifacts()
                .join(year.to_string())
                .join(day.to_string())
                .join(format!("answer{}.txt", part)),
            "x",
        );
    }

    env.aoc()
        .args(["status"])
        .env("NO_COLOR", "1")
        .assert()
        .success()
        .stdout(predicate::str::contains("AOC puzzle status for all years:"))
        .stdout(predicate::str::contains("Total: 4 Gold Stars"));

    env.aoc()
        .args(["status", "2020"])
        .env("NO_COLOR", "1")
        .assert()
        .success()
        .stdout(predicate::str::contains("Day 01: **"))
        .stdout(predicate::str::contains("Day 02: *"))
        .stdout(predicate::str::contains("Total:  3 Gold Stars"));

    env.aoc()
        .args(["status", "1999"])
        .assert()
        .failure()
        .code(predicate::ne(1));
}

#[test]
fn test_argument_errors() {
    let env = Env::new();

    env.aoc()
        .args(["fetch", "2020", "26"])
        .assert()
        .failure()
        .code(predicate::ne(1));

    env.aoc()
        .args(["submit", "2020", "1", "3", "42"])
        .assert()
        .failure()
        .code(predicate::ne(1));

    env.aoc().arg("--help").assert().success();
}

fn description_body(solved: &[&str]) -> String {
    let mut body = String::from("<html><main><article>puzzle</article>");
    for answer in solved {
        body.push_str(&format!("<p>Your puzzle answer was <code>{}</code>.</p>", answer));
    }
    body.push_str("</main></html>");
    body
}

#[test]
fn test_submit_previously_solved_on_website() {
    let mut env = Env::new().with_cookie();
    let _description = env
        .server
        .mock("GET", "/2022/day/6")
        .with_status(200)
        .with_body(description_body(&["1892", "2313"]))
        .create();
    let answer = env
        .server
        .mock("POST", "/2022/day/6/answer")
        .expect(0)
        .create();
    let day_dir = env.artifacts().join("2022").join("6");

    env.aoc()
        .args(["submit", "2022", "6", "2", "2313"])
        .assert()
        .success()
        .stderr(predicate::str::contains("'2313' is the right answer."));
    assert_eq!(
        fs::read_to_string(day_dir.join("answer2.txt")).unwrap(),
        "2313"
    );

    env.aoc()
        .args(["submit", "2022", "6", "1", "1000"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("'1000' is not the right answer."));
    assert!(!day_dir.join("answer1.txt").exists());

    answer.assert();
}

#[test]
fn test_submit_description_error_fails_without_posting() {
    let mut env = Env::new().with_cookie();
    let _description = env
        .server
        .mock("GET", "/2022/day/7")
        .with_status(404)
        .create();
    let answer = env
        .server
        .mock("POST", "/2022/day/7/answer")
        .expect(0)
        .create();

    env.aoc()
        .args(["submit", "2022", "7", "1", "95437"])
        .assert()
        .failure()
        .code(predicate::ne(1))
        .stderr(predicate::str::contains("Error:"));
    assert!(
        !env.artifacts()
            .join("2022")
            .join("7")
            .join("answer1.txt")
            .exists()
    );
    answer.assert();
}

#[test]
fn test_submit_throttled_is_not_correct() {
    let mut env = Env::new().with_cookie();
    let _description = env
        .server
        .mock("GET", "/2022/day/8")
        .with_status(200)
        .with_body(description_body(&[]))
        .create();
    let _answer = env
        .server
        .mock("POST", "/2022/day/8/answer")
        .with_status(200)
        .with_body(
            "<html><main><p>You gave an answer too recently. \
             You have 1m 5s left to wait.</p></main></html>",
        )
        .create();

    env.aoc()
        .args(["submit", "2022", "8", "1", "21"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("answered too recently, wait 1m 5s"));
    assert!(
        !env.artifacts()
            .join("2022")
            .join("8")
            .join("answer1.txt")
            .exists()
    );
}
