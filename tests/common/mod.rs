//! Helpers for running the fxconv binary against a mock rate API.

use std::io::Write;
use std::process::{Command, Output, Stdio};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const FIXTURE_DATE: &str = "2024-04-30";

/// Mock API with a primary and a mirror prefix on the same server
pub struct MockApi {
    pub server: MockServer,
}

impl MockApi {
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    pub fn primary_prefix(&self) -> String {
        format!("{}/primary/", self.server.uri())
    }

    pub fn mirror_prefix(&self) -> String {
        format!("{}/mirror/", self.server.uri())
    }

    /// Serve the fixture documents under `prefix` (`primary` or `mirror`)
    pub async fn mount_fixtures(&self, prefix: &str, date: &str) {
        Mock::given(method("GET"))
            .and(path(format!("/{prefix}/{date}/v1/currencies.min.json")))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "eur": "Euro",
                "jpy": "Japanese Yen",
                "usd": "US Dollar"
            })))
            .mount(&self.server)
            .await;

        Mock::given(method("GET"))
            .and(path(format!("/{prefix}/{date}/v1/currencies/usd.min.json")))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "date": FIXTURE_DATE,
                "usd": {
                    "eur": 0.93,
                    "jpy": 156.79775322,
                    "usd": 1
                }
            })))
            .mount(&self.server)
            .await;
    }

    /// Make every request under `prefix` fail with `status`
    pub async fn mount_failure(&self, prefix: &str, status: u16) {
        Mock::given(method("GET"))
            .and(wiremock::matchers::path_regex(format!("^/{prefix}/.*")))
            .respond_with(ResponseTemplate::new(status))
            .mount(&self.server)
            .await;
    }

    /// Fail the test if anything at all is requested
    pub async fn expect_no_requests(&self) {
        Mock::given(wiremock::matchers::any())
            .respond_with(ResponseTemplate::new(500))
            .expect(0)
            .mount(&self.server)
            .await;
    }

    /// Run the binary with this API configured, off the async runtime
    pub async fn run(&self, args: &[&str], stdin: Option<&str>) -> Output {
        let primary = self.primary_prefix();
        let mirror = self.mirror_prefix();
        let args: Vec<String> = args.iter().map(|a| a.to_string()).collect();
        let stdin = stdin.map(str::to_string);

        tokio::task::spawn_blocking(move || run_binary(&args, &primary, &mirror, stdin.as_deref()))
            .await
            .expect("binary runner panicked")
    }
}

fn run_binary(args: &[String], primary: &str, mirror: &str, stdin: Option<&str>) -> Output {
    let mut command = Command::new(env!("CARGO_BIN_EXE_fxconv"));
    command
        .args(args)
        .env("FXCONV_API_URL", primary)
        .env("FXCONV_MIRROR_URL", mirror)
        .env("FXCONV_TIMEOUT_SECS", "10")
        .env_remove("FXCONV_LOG_LEVEL")
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    match stdin {
        Some(input) => {
            command.stdin(Stdio::piped());
            let mut child = command.spawn().expect("failed to spawn fxconv");
            child
                .stdin
                .take()
                .expect("stdin is piped")
                .write_all(input.as_bytes())
                .expect("failed to write stdin");
            child.wait_with_output().expect("failed to wait for fxconv")
        }
        None => {
            command.stdin(Stdio::null());
            command.output().expect("failed to run fxconv")
        }
    }
}

pub fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}
