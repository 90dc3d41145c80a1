#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use ner_console_client::{
    ApiClient, Config, MemorySessionStore, Navigator, RefreshMode, SessionCredentials,
};
use tracing::subscriber::{DefaultGuard, set_default};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{Registry, fmt};
use wiremock::MockServer;

struct VecWriter {
    lines: Arc<Mutex<Vec<String>>>,
}

impl std::io::Write for VecWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let mut guard = self.lines.lock().unwrap();
        guard.push(String::from_utf8_lossy(buf).into_owned());
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

pub fn capture_logs() -> (Arc<Mutex<Vec<String>>>, DefaultGuard) {
    let lines = Arc::new(Mutex::new(Vec::new()));
    let writer_lines = lines.clone();
    let subscriber = Registry::default().with(
        fmt::Layer::default()
            .with_writer(move || VecWriter {
                lines: writer_lines.clone(),
            })
            .with_target(false)
            .with_level(true)
            .with_ansi(false),
    );
    let guard = set_default(subscriber);
    (lines, guard)
}

pub fn config(server: &MockServer, mode: RefreshMode) -> Config {
    Config::from_values(format!("{}/api", server.uri()), None, mode, Some(5))
}

pub struct Harness {
    pub client: ApiClient,
    pub store: Arc<MemorySessionStore>,
    pub navigator: Arc<RecordingNavigator>,
}

pub fn harness(server: &MockServer, credentials: Option<SessionCredentials>) -> Harness {
    harness_with(server, credentials, RefreshMode::Independent, "/projects")
}

pub fn harness_with(
    server: &MockServer,
    credentials: Option<SessionCredentials>,
    mode: RefreshMode,
    current_path: &str,
) -> Harness {
    let store = Arc::new(match credentials {
        Some(creds) => MemorySessionStore::with_credentials(&creds),
        None => MemorySessionStore::new(),
    });
    let navigator = Arc::new(RecordingNavigator::at(current_path));
    let client = ApiClient::new(config(server, mode))
        .expect("client should build")
        .with_session_store(store.clone())
        .with_navigator(navigator.clone());
    Harness {
        client,
        store,
        navigator,
    }
}

pub fn scratch_file(name: &str) -> PathBuf {
    let mut path = PathBuf::from("target");
    path.push("it-scratch");
    std::fs::create_dir_all(&path).ok();
    path.push(name);
    std::fs::remove_file(&path).ok();
    path
}

pub struct RecordingNavigator {
    current: Mutex<Option<String>>,
    redirects: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn at(path: &str) -> Self {
        Self {
            current: Mutex::new(Some(path.to_string())),
            redirects: Mutex::new(Vec::new()),
        }
    }

    pub fn redirects(&self) -> Vec<String> {
        self.redirects.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn current_path(&self) -> Option<String> {
        self.current.lock().unwrap().clone()
    }

    fn redirect_to_login(&self, login_path: &str) {
        self.redirects.lock().unwrap().push(login_path.to_string());
        *self.current.lock().unwrap() = Some(login_path.to_string());
    }
}
