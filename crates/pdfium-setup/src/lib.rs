//! # pdfium-setup
//!
//! Runtime download, cache and binding of the native
//! [PDFium](https://pdfium.googlesource.com/pdfium/) library, so that users
//! of `pdfium-render` do not have to fetch libpdfium themselves or fiddle
//! with `LD_LIBRARY_PATH` / `DYLD_LIBRARY_PATH`.
//!
//! The first call to [`ensure_library`] (or [`bind`]) resolves the library
//! in this order:
//!
//! 1. `PDFIUM_LIB_PATH` points at an existing file: use it as-is.
//! 2. The per-user cache directory already holds the library: use it.
//! 3. Download the platform `.tgz` from
//!    [bblanchon/pdfium-binaries](https://github.com/bblanchon/pdfium-binaries),
//!    extract the shared library into the cache, use that.
//!
//! The install step runs at most once per process; the resolved path is
//! memoised in a [`OnceLock`] and every later call is a plain path lookup.
//!
//! ```rust,no_run
//! let pdfium = pdfium_setup::bind_silent().expect("PDFium unavailable");
//! ```
//!
//! ## Environment variables
//!
//! - `PDFIUM_LIB_PATH` — path to an existing pdfium library; skips download.
//! - `PDF2JPG_CACHE_DIR` — override the default cache directory.

use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use pdfium_render::prelude::Pdfium;
use thiserror::Error;

/// The pdfium-binaries release tag used for downloads.
///
/// Maps to `bblanchon/pdfium-binaries` tag `chromium/7690`.
pub const PDFIUM_VERSION: &str = "7690";

const RELEASE_BASE_URL: &str =
    "https://github.com/bblanchon/pdfium-binaries/releases/download";

/// Signature of the optional download-progress observer:
/// `(bytes_downloaded, total_bytes_if_known)`.
pub type DownloadProgress<'a> = &'a dyn Fn(u64, Option<u64>);

// ── Error type ───────────────────────────────────────────────────────────

/// Errors returned by pdfium-setup operations.
#[derive(Error, Debug)]
pub enum SetupError {
    /// No prebuilt pdfium binary exists for this OS/architecture pair.
    #[error("Unsupported platform: {os}/{arch}")]
    UnsupportedPlatform { os: String, arch: String },

    /// Could not create or write the local cache directory.
    #[error("Cache directory error: {0}")]
    CacheDir(#[source] std::io::Error),

    /// Network download failed.
    #[error("Download failed: {0}")]
    Download(String),

    /// gzip/tar extraction failed.
    #[error("Archive extraction failed: {0}")]
    Extract(String),

    /// `pdfium-render` could not load the shared library.
    #[error("Failed to bind PDFium from '{path}': {reason}")]
    Bind { path: PathBuf, reason: String },
}

// ── Platform table ───────────────────────────────────────────────────────

/// Release-asset naming for one OS/arch pair.
struct Platform {
    /// Asset filename in the GitHub release, e.g. `pdfium-linux-x64.tgz`.
    archive: &'static str,
    /// Path of the shared library inside the archive.
    member: &'static str,
    /// Filename written into the cache directory.
    lib_name: &'static str,
}

fn platform() -> Result<Platform, SetupError> {
    let (os, arch) = (std::env::consts::OS, std::env::consts::ARCH);

    let (archive, member, lib_name) = match (os, arch) {
        ("macos", "aarch64") => ("pdfium-mac-arm64.tgz", "lib/libpdfium.dylib", "libpdfium.dylib"),
        ("macos", "x86_64") => ("pdfium-mac-x64.tgz", "lib/libpdfium.dylib", "libpdfium.dylib"),
        ("linux", "x86_64") => ("pdfium-linux-x64.tgz", "lib/libpdfium.so", "libpdfium.so"),
        ("linux", "aarch64") => ("pdfium-linux-arm64.tgz", "lib/libpdfium.so", "libpdfium.so"),
        ("windows", "x86_64") => ("pdfium-win-x64.tgz", "bin/pdfium.dll", "pdfium.dll"),
        ("windows", "aarch64") => ("pdfium-win-arm64.tgz", "bin/pdfium.dll", "pdfium.dll"),
        ("windows", "x86") => ("pdfium-win-x86.tgz", "bin/pdfium.dll", "pdfium.dll"),
        _ => {
            return Err(SetupError::UnsupportedPlatform {
                os: os.to_string(),
                arch: arch.to_string(),
            })
        }
    };

    Ok(Platform {
        archive,
        member,
        lib_name,
    })
}

// ── Cache location ───────────────────────────────────────────────────────

/// Per-version cache directory for the PDFium library.
///
/// Defaults to `<user cache dir>/pdf2jpg/pdfium-{VERSION}/`; override the
/// base with `PDF2JPG_CACHE_DIR`.
pub fn cache_dir() -> PathBuf {
    let versioned = format!("pdfium-{PDFIUM_VERSION}");

    if let Ok(base) = std::env::var("PDF2JPG_CACHE_DIR") {
        return PathBuf::from(base).join(versioned);
    }

    dirs::cache_dir()
        .or_else(|| dirs::home_dir().map(|h| h.join(".cache")))
        .unwrap_or_else(std::env::temp_dir)
        .join("pdf2jpg")
        .join(versioned)
}

/// The on-disk library path, or `None` when neither the `PDFIUM_LIB_PATH`
/// override nor the cache holds it.
pub fn installed_library() -> Option<PathBuf> {
    if let Ok(p) = std::env::var("PDFIUM_LIB_PATH") {
        let p = PathBuf::from(p);
        if p.exists() {
            return Some(p);
        }
    }
    let info = platform().ok()?;
    let cached = cache_dir().join(info.lib_name);
    cached.exists().then_some(cached)
}

/// `true` when the next [`ensure_library`] call needs no network access.
pub fn is_installed() -> bool {
    installed_library().is_some()
}

// ── Install / bind ───────────────────────────────────────────────────────

static RESOLVED: OnceLock<PathBuf> = OnceLock::new();

/// Make the PDFium shared library available locally, downloading it first
/// if neither the env override nor the cache has it.
///
/// `on_progress` is invoked periodically during the download with
/// `(bytes_downloaded, total_size_option)`; pass `None` to stay silent.
///
/// Safe to call from multiple threads; the install step runs at most once
/// per process lifetime.
pub fn ensure_library(on_progress: Option<DownloadProgress>) -> Result<PathBuf, SetupError> {
    if let Some(path) = RESOLVED.get() {
        return Ok(path.clone());
    }

    let path = match installed_library() {
        Some(p) => p,
        None => install(on_progress)?,
    };

    // A concurrent caller may have set it first; both hold the same path.
    let _ = RESOLVED.set(path.clone());
    Ok(path)
}

/// Bind to PDFium, installing the library first if necessary.
pub fn bind(on_progress: Option<DownloadProgress>) -> Result<Pdfium, SetupError> {
    let lib_path = ensure_library(on_progress)?;
    bind_at(&lib_path)
}

/// [`bind`] without progress output.
pub fn bind_silent() -> Result<Pdfium, SetupError> {
    bind(None)
}

/// Bind to a PDFium library at an explicit `path`, bypassing the cache and
/// download layers entirely.
pub fn bind_at(path: &Path) -> Result<Pdfium, SetupError> {
    Pdfium::bind_to_library(path)
        .map(Pdfium::new)
        .map_err(|e| SetupError::Bind {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
}

// ── Internal: download and unpack ────────────────────────────────────────

fn install(on_progress: Option<DownloadProgress>) -> Result<PathBuf, SetupError> {
    let info = platform()?;
    let dir = cache_dir();
    let lib_path = dir.join(info.lib_name);

    std::fs::create_dir_all(&dir).map_err(SetupError::CacheDir)?;

    let url = format!("{RELEASE_BASE_URL}/chromium%2F{PDFIUM_VERSION}/{}", info.archive);
    let archive = fetch(&url, on_progress)?;
    unpack(&archive, info.member, &lib_path)?;

    Ok(lib_path)
}

/// Stream `url` into memory, reporting progress every buffer-full.
fn fetch(url: &str, on_progress: Option<DownloadProgress>) -> Result<Vec<u8>, SetupError> {
    let client = reqwest::blocking::Client::builder()
        .user_agent(concat!("pdfium-setup/", env!("CARGO_PKG_VERSION")))
        .redirect(reqwest::redirect::Policy::limited(5))
        .build()
        .map_err(|e| SetupError::Download(e.to_string()))?;

    let mut response = client
        .get(url)
        .send()
        .map_err(|e| SetupError::Download(format!("GET {url}: {e}")))?;

    if !response.status().is_success() {
        return Err(SetupError::Download(format!(
            "HTTP {} for {url}",
            response.status()
        )));
    }

    let total = response.content_length();
    let mut body = Vec::with_capacity(total.unwrap_or(32 * 1024 * 1024) as usize);
    let mut chunk = [0u8; 128 * 1024];
    let mut received: u64 = 0;

    loop {
        match response.read(&mut chunk) {
            Ok(0) => break,
            Ok(n) => {
                body.extend_from_slice(&chunk[..n]);
                received += n as u64;
                if let Some(cb) = on_progress {
                    cb(received, total);
                }
            }
            Err(ref e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(SetupError::Download(format!("read error: {e}"))),
        }
    }

    Ok(body)
}

/// Extract the archive member `member` from a gzipped tar into `dest`.
fn unpack(archive_bytes: &[u8], member: &str, dest: &Path) -> Result<(), SetupError> {
    use flate2::read::GzDecoder;
    use tar::Archive;

    let mut archive = Archive::new(GzDecoder::new(archive_bytes));

    for entry in archive
        .entries()
        .map_err(|e| SetupError::Extract(e.to_string()))?
    {
        let mut entry = entry.map_err(|e| SetupError::Extract(e.to_string()))?;
        let path = entry.path().map_err(|e| SetupError::Extract(e.to_string()))?;

        if path.to_string_lossy() == member {
            entry
                .unpack(dest)
                .map_err(|e| SetupError::Extract(format!("unpack failed: {e}")))?;
            return Ok(());
        }
    }

    Err(SetupError::Extract(format!(
        "library '{member}' not found in archive"
    )))
}

// ── Tests ────────────────────────────────────────────────────────────────
