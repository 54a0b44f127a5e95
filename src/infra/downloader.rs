// ============================================================
// Layer 6 — Downloaders
// ============================================================
// Two ways of getting the corpus archive onto local disk:
//
//   HttpDownloader      — streams a URL to a file with a progress
//                         bar. Any non-2xx status is an error;
//                         there is no retry.
//   LocalCopyDownloader — copies an archive that is already on
//                         disk (offline runs, tests).
//
// Reference: reqwest::blocking documentation
//            indicatif documentation

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::{
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
    time::Duration,
};

use crate::domain::traits::Downloader;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone)]
pub struct HttpDownloader {
    client: reqwest::blocking::Client,
}

impl HttpDownloader {
    pub fn new() -> Result<Self> {
        // No overall timeout: the full corpus is ~80 MB
        let client = reqwest::blocking::Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(Option::<Duration>::None)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client })
    }
}

impl Downloader for HttpDownloader {
    fn download(&self, url: &str, dest: &Path) -> Result<()> {
        tracing::info!("Downloading '{}' to '{}'", url, dest.display());

        let response = self
            .client
            .get(url)
            .send()
            .with_context(|| format!("Failed to send request to '{url}'"))?
            .error_for_status()
            .with_context(|| format!("Download of '{url}' failed"))?;

        let bar = match response.content_length() {
            Some(len) => ProgressBar::new(len),
            None => ProgressBar::new_spinner(),
        };
        if let Ok(style) =
            ProgressStyle::with_template("{spinner} [{elapsed_precise}] {bytes}/{total_bytes} ({bytes_per_sec})")
        {
            bar.set_style(style);
        }

        let file = File::create(dest)
            .with_context(|| format!("Cannot create '{}'", dest.display()))?;
        let mut out = BufWriter::new(file);

        let mut body = bar.wrap_read(response);
        let bytes = io::copy(&mut body, &mut out)
            .with_context(|| format!("Failed while downloading '{url}'"))?;
        out.flush()?;
        bar.finish_and_clear();

        tracing::info!("Downloaded {} bytes", bytes);
        Ok(())
    }
}

/// Treats the URL as ignored and copies a fixed local archive instead.
#[derive(Debug, Clone)]
pub struct LocalCopyDownloader {
    source: PathBuf,
}

impl LocalCopyDownloader {
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self { source: source.into() }
    }
}

impl Downloader for LocalCopyDownloader {
    fn download(&self, url: &str, dest: &Path) -> Result<()> {
        tracing::info!(
            "Using local archive '{}' instead of '{}'",
            self.source.display(),
            url
        );
        fs::copy(&self.source, dest).with_context(|| {
            format!(
                "Cannot copy '{}' to '{}'",
                self.source.display(),
                dest.display()
            )
        })?;
        Ok(())
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{BufRead, BufReader};
    use std::net::TcpListener;
    use std::thread;
    use tempfile::TempDir;

    /// Serve exactly one request on 127.0.0.1 with the given raw response.
    fn serve_once(response: &'static str) -> (String, thread::JoinHandle<()>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}/aclImdb_v1.tar.gz", listener.local_addr().unwrap());

        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut reader = BufReader::new(stream.try_clone().unwrap());
            let mut line = String::new();
            // Drain the request head
            while reader.read_line(&mut line).unwrap() > 0 && line != "\r\n" {
                line.clear();
            }
            stream.write_all(response.as_bytes()).unwrap();
        });

        (url, handle)
    }

    fn local_client() -> HttpDownloader {
        HttpDownloader {
            client: reqwest::blocking::Client::builder().no_proxy().build().unwrap(),
        }
    }

    #[test]
    fn test_http_error_status_fails_without_writing() {
        let (url, server) =
            serve_once("HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n");

        let dir = TempDir::new().unwrap();
        let dest = dir.path().join("data.tar.gz");
        let result = local_client().download(&url, &dest);
        server.join().unwrap();

        assert!(result.is_err());
        assert!(!dest.exists());
    }

    #[test]
    fn test_http_success_writes_body() {
        let (url, server) =
            serve_once("HTTP/1.1 200 OK\r\nContent-Length: 13\r\nConnection: close\r\n\r\narchive bytes");

        let dir = TempDir::new().unwrap();
        let dest = dir.path().join("data.tar.gz");
        local_client().download(&url, &dest).unwrap();
        server.join().unwrap();

        assert_eq!(fs::read(&dest).unwrap(), b"archive bytes");
    }

    #[test]
    fn test_local_copy() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("corpus.tar.gz");
        fs::write(&src, b"archive bytes").unwrap();

        let dest = dir.path().join("data.tar.gz");
        LocalCopyDownloader::new(&src)
            .download("https://example.invalid/corpus.tar.gz", &dest)
            .unwrap();
        assert_eq!(fs::read(&dest).unwrap(), b"archive bytes");
    }

    #[test]
    fn test_local_copy_missing_source() {
        let dir = TempDir::new().unwrap();
        let dest = dir.path().join("data.tar.gz");
        let result = LocalCopyDownloader::new(dir.path().join("missing.tar.gz"))
            .download("unused", &dest);
        assert!(result.is_err());
    }
}
