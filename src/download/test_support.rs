//! Helpers shared by the download tests.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use serde_json::Value;
use tracing::subscriber::DefaultGuard;
use tracing_subscriber::fmt::MakeWriter;
use wiremock::MockServer;

use crate::api::{ArchiveClient, Post};
use crate::config::Platform;

pub fn test_client() -> ArchiveClient {
    ArchiveClient::new("kemono-archiver-tests", Duration::from_secs(10)).unwrap()
}

/// Base URL of a mock mirror.
pub fn mirror_base(server: &MockServer) -> String {
    format!("{}/data", server.uri())
}

pub fn test_platform(listing: &str, image: &MockServer, files: &[&MockServer]) -> Platform {
    Platform {
        listing_base: listing.to_string(),
        image_mirrors: vec![mirror_base(image)],
        file_mirrors: files.iter().map(|s| mirror_base(s)).collect(),
    }
}

pub fn post(raw: Value) -> Post {
    serde_json::from_value(raw).unwrap()
}

/// `tracing` output collected by [`capture_logs`].
#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogsWriter;

    fn make_writer(&'a self) -> Self::Writer {
        CapturedLogsWriter(Arc::clone(&self.0))
    }
}

pub struct CapturedLogsWriter(Arc<Mutex<Vec<u8>>>);

impl Write for CapturedLogsWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Send this thread's `tracing` events into a buffer until the guard drops.
pub fn capture_logs() -> (CapturedLogs, DefaultGuard) {
    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(logs.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::INFO)
        .finish();
    (logs, tracing::subscriber::set_default(subscriber))
}
