#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use canvas_grade_report::canvas::{ApiResponse, CanvasClient, Transport};
use canvas_grade_report::errors::AppResult;
use chrono::{DateTime, Duration, TimeZone, Utc};
use chrono_tz::Tz;
use std::cell::RefCell;
use std::collections::HashMap;
use std::env;
use std::fs;
use std::io::{BufRead, BufReader, Write};
use std::net::{TcpListener, TcpStream};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::thread;

pub const BASE: &str = "https://canvas.test";

pub fn cgr() -> Command {
    let mut cmd = cargo_bin_cmd!("canvas-grade-report");
    // keep a stray .env in the repo from leaking into the run
    cmd.current_dir(env::temp_dir());
    cmd
}

/// Temporary output file path, removed up front.
pub fn temp_out(name: &str, ext: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    fs::remove_file(&path).ok();
    path
}

/// Fixed evaluation instant: 2024-03-10 12:00:00 UTC seen from Los Angeles.
pub fn fixed_now() -> DateTime<Tz> {
    Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0)
        .unwrap()
        .with_timezone(&chrono_tz::America::Los_Angeles)
}

/// Upstream-formatted timestamp `age` before `now`.
pub fn ago(now: &DateTime<Tz>, age: Duration) -> String {
    (now.with_timezone(&Utc) - age)
        .format("%Y-%m-%dT%H:%M:%SZ")
        .to_string()
}

pub fn submission_json(student: &str, submitted_at: Option<&str>, graded_at: Option<&str>) -> String {
    serde_json::json!({
        "submitted_at": submitted_at,
        "graded_at": graded_at,
        "user": { "name": student },
    })
    .to_string()
}

pub fn assignment_json(id: u64, name: &str, needs_grading: i64) -> String {
    serde_json::json!({
        "id": id,
        "name": name,
        "needs_grading_count": needs_grading,
    })
    .to_string()
}

pub fn array(items: &[String]) -> String {
    format!("[{}]", items.join(","))
}

pub fn next_header(url: &str) -> String {
    format!("<{url}>; rel=\"current\", <{url}>; rel=\"next\", <{BASE}/last>; rel=\"last\"")
}

/// In-memory transport: canned responses per URL, every request recorded.
#[derive(Default)]
pub struct FakeTransport {
    routes: HashMap<String, ApiResponse>,
    requests: RefCell<Vec<String>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn route(mut self, url: &str, status: u16, link: Option<String>, body: &str) -> Self {
        self.routes.insert(
            url.to_string(),
            ApiResponse {
                status,
                link,
                body: body.to_string(),
            },
        );
        self
    }

    pub fn ok(self, url: &str, body: &str) -> Self {
        self.route(url, 200, None, body)
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }

    pub fn count_starting_with(&self, prefix: &str) -> usize {
        self.requests
            .borrow()
            .iter()
            .filter(|u| u.starts_with(prefix))
            .count()
    }
}

impl Transport for FakeTransport {
    fn get(&self, url: &str) -> AppResult<ApiResponse> {
        self.requests.borrow_mut().push(url.to_string());
        Ok(self.routes.get(url).cloned().unwrap_or(ApiResponse {
            status: 404,
            link: None,
            body: r#"{"errors":[{"message":"not found"}]}"#.to_string(),
        }))
    }
}

pub fn client(transport: FakeTransport) -> CanvasClient<FakeTransport> {
    CanvasClient::new(transport, BASE)
}

pub struct StubRoute {
    pub status: u16,
    pub link: Option<String>,
    pub body: String,
}

/// Minimal HTTP/1.1 server on 127.0.0.1 answering from a route table keyed
/// by path (with or without query). Records Authorization headers.
pub struct StubServer {
    pub base_url: String,
    pub auth_headers: Arc<Mutex<Vec<String>>>,
}

impl StubServer {
    pub fn start<F>(build_routes: F) -> Self
    where
        F: FnOnce(&str) -> HashMap<String, StubRoute>,
    {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind stub server");
        let base_url = format!("http://{}", listener.local_addr().expect("local addr"));
        let routes = build_routes(&base_url);
        let auth_headers = Arc::new(Mutex::new(Vec::new()));
        let seen = Arc::clone(&auth_headers);

        thread::spawn(move || {
            for stream in listener.incoming() {
                let Ok(stream) = stream else { continue };
                serve(stream, &routes, &seen);
            }
        });

        Self {
            base_url,
            auth_headers,
        }
    }
}

fn serve(mut stream: TcpStream, routes: &HashMap<String, StubRoute>, seen: &Mutex<Vec<String>>) {
    let mut reader = BufReader::new(stream.try_clone().expect("clone stream"));

    let mut request_line = String::new();
    if reader.read_line(&mut request_line).is_err() {
        return;
    }
    let target = request_line
        .split_whitespace()
        .nth(1)
        .unwrap_or("/")
        .to_string();

    loop {
        let mut line = String::new();
        match reader.read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) if line.trim().is_empty() => break,
            Ok(_) => {
                if let Some((name, value)) = line.split_once(':')
                    && name.eq_ignore_ascii_case("authorization")
                {
                    seen.lock().unwrap().push(value.trim().to_string());
                }
            }
        }
    }

    let path_only = target.split('?').next().unwrap_or("/");
    let (status, link, body) = match routes.get(&target).or_else(|| routes.get(path_only)) {
        Some(r) => (r.status, r.link.clone(), r.body.clone()),
        None => (404, None, "{}".to_string()),
    };

    let mut response = format!(
        "HTTP/1.1 {status} Stub\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n",
        body.len()
    );
    if let Some(link) = link {
        response.push_str(&format!("Link: {link}\r\n"));
    }
    response.push_str("\r\n");
    response.push_str(&body);

    stream.write_all(response.as_bytes()).ok();
    stream.flush().ok();
}
