use std::collections::HashMap;
use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use std::thread;

/// Minimal HTTP/1.1 stub of the content API
///
/// Answers each request path (without query) with a canned status and body,
/// 404 otherwise. Request targets are recorded in arrival order.
#[allow(dead_code)]
pub struct StubServer {
    pub base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
}

#[allow(dead_code)]
impl StubServer {
    pub fn start(routes: Vec<(&str, u16, &str)>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind stub server");
        let base_url = format!("http://{}", listener.local_addr().expect("local addr"));
        let routes: HashMap<String, (u16, String)> = routes
            .into_iter()
            .map(|(path, status, body)| (path.to_string(), (status, body.to_string())))
            .collect();
        let requests = Arc::new(Mutex::new(Vec::new()));
        let recorded = Arc::clone(&requests);

        thread::spawn(move || {
            for stream in listener.incoming() {
                let Ok(mut stream) = stream else { continue };
                let mut reader = BufReader::new(stream.try_clone().expect("clone stream"));

                let mut request_line = String::new();
                if reader.read_line(&mut request_line).is_err() {
                    continue;
                }
                // Drain headers
                let mut line = String::new();
                while reader.read_line(&mut line).map(|n| n > 0).unwrap_or(false) {
                    if line == "\r\n" {
                        break;
                    }
                    line.clear();
                }

                let target = request_line
                    .split_whitespace()
                    .nth(1)
                    .unwrap_or("/")
                    .to_string();
                recorded.lock().unwrap().push(target.clone());

                let path = target.split('?').next().unwrap_or("/");
                let (status, body) = routes
                    .get(path)
                    .cloned()
                    .unwrap_or((404, r#"{"error":"not found"}"#.to_string()));

                let response = format!(
                    "HTTP/1.1 {} Stub\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status,
                    body.len(),
                    body
                );
                let _ = stream.write_all(response.as_bytes());
                let _ = stream.flush();
            }
        });

        Self { base_url, requests }
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[allow(dead_code)]
pub mod payloads {
    pub const TAGS: &str = r##"[
        {"id": 1, "name": "go", "bg_color_hex": "#00add8", "text_color_hex": "#ffffff"},
        {"id": 2, "name": "rust", "bg_color_hex": null, "text_color_hex": null}
    ]"##;

    pub const GO_ARTICLES: &str = r#"[
        {
            "id": 42,
            "title": "Go Basics",
            "description": "Getting started with Go",
            "cover_image": null,
            "readable_publish_date": "Oct 3",
            "url": "https://dev.to/ann/go-basics",
            "tag_list": ["go", "backend"],
            "tags": "go, backend",
            "user": {"name": "Ann Example", "username": "ann", "profile_image": "https://img.example/ann.png"}
        }
    ]"#;

    pub const GO_ARTICLE_DETAIL: &str = r#"{
        "id": 42,
        "title": "Go Basics",
        "description": "Getting started with Go",
        "body_markdown": "Hello **gophers**",
        "cover_image": "https://img.example/cover.png",
        "readable_publish_date": "Oct 3",
        "url": "https://dev.to/ann/go-basics",
        "tag_list": "go, backend",
        "user": {"name": "Ann Example", "username": "ann", "profile_image": "https://img.example/ann.png"}
    }"#;
}
