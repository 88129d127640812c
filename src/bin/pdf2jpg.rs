//! CLI binary for pdf2jpg.
//!
//! A thin shim over the library crate that maps CLI flags to
//! `ConversionConfig` and prints results.

use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use pdf2jpg::{
    convert, inspect, ConversionConfig, ConversionProgressCallback, PageSelection,
    ProgressCallback,
};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;

// ── ANSI colour helpers (no extra deps) ──────────────────────────────────────

fn green(s: &str) -> String {
    format!("\x1b[32m{s}\x1b[0m")
}
fn dim(s: &str) -> String {
    format!("\x1b[2m{s}\x1b[0m")
}
fn bold(s: &str) -> String {
    format!("\x1b[1m{s}\x1b[0m")
}
fn cyan(s: &str) -> String {
    format!("\x1b[36m{s}\x1b[0m")
}

/// Human-readable byte size, e.g. "184.2 KiB".
fn human_bytes(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KiB", "MiB", "GiB"];
    let mut size = bytes as f64;
    let mut unit = 0;
    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{bytes} B")
    } else {
        format!("{size:.1} {}", UNITS[unit])
    }
}

// ── CLI progress callback using indicatif ────────────────────────────────────

/// Terminal progress callback: renders a live progress bar and one log line
/// per saved page. The conversion loop is sequential, so events arrive in
/// page order.
struct CliProgressCallback {
    /// The single progress bar anchored at the bottom of the terminal.
    bar: ProgressBar,
    /// Wall-clock start of the page currently being rendered.
    page_start: Mutex<Option<Instant>>,
    /// Running total of bytes written.
    bytes: AtomicU64,
}

impl CliProgressCallback {
    /// Create a callback whose progress-bar length is set dynamically by
    /// `on_conversion_start` (called once the PDF has been opened).
    fn new_dynamic() -> Arc<Self> {
        let bar = ProgressBar::new(0); // length set in on_conversion_start

        let spinner_style = ProgressStyle::with_template("{spinner:.cyan} {prefix:.bold}  {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", "⠿"]);

        bar.set_style(spinner_style);
        bar.set_prefix("Preparing");
        bar.set_message("Opening PDF…");
        bar.enable_steady_tick(Duration::from_millis(80));

        Arc::new(Self {
            bar,
            page_start: Mutex::new(None),
            bytes: AtomicU64::new(0),
        })
    }

    /// Switch to the full progress-bar style once we know `total`.
    fn activate_bar(&self, total: usize) {
        let progress_style = ProgressStyle::with_template(
            "{spinner:.cyan} {prefix:.bold}  \
             [{bar:42.green/238}] {pos:>3}/{len} pages  \
             ⏱ {elapsed_precise}  ETA {eta_precise}",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏  ")
        .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", "⠿"]);

        self.bar.set_length(total as u64);
        self.bar.set_style(progress_style);
        self.bar.set_prefix("Converting");
        self.bar.reset_eta();
    }
}

impl ConversionProgressCallback for CliProgressCallback {
    fn on_conversion_start(&self, total_pages: usize) {
        self.activate_bar(total_pages);
        self.bar.println(format!(
            "{} {}",
            cyan("◆"),
            bold(&format!("Converting {total_pages} pages…"))
        ));
    }

    fn on_page_start(&self, page_num: usize, _total: usize) {
        *self.page_start.lock().unwrap() = Some(Instant::now());
        self.bar.set_message(format!("page {page_num}"));
    }

    fn on_page_saved(&self, page_num: usize, total: usize, path: &Path, bytes: u64) {
        let elapsed_ms = self
            .page_start
            .lock()
            .unwrap()
            .take()
            .map(|t| t.elapsed().as_millis())
            .unwrap_or(0);

        self.bytes.fetch_add(bytes, Ordering::SeqCst);

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        self.bar.println(format!(
            "  {} Page {:>3}/{:<3}  {:<14}  {:<10}  {}",
            green("✓"),
            page_num,
            total,
            name,
            dim(&human_bytes(bytes)),
            dim(&format!("{:.1}s", elapsed_ms as f64 / 1000.0)),
        ));
        self.bar.inc(1);
    }

    fn on_conversion_complete(&self, _total_pages: usize, pages_written: usize) {
        self.bar.finish_and_clear();
        eprintln!(
            "{} {} pages converted  ({})",
            green("✔"),
            bold(&pages_written.to_string()),
            human_bytes(self.bytes.load(Ordering::SeqCst)),
        );
    }
}

const AFTER_HELP: &str = r#"EXAMPLES:
  # Convert every page into ./pages/page-1.jpg … page-N.jpg
  pdf2jpg document.pdf

  # Choose the output directory
  pdf2jpg document.pdf -o assets/slides

  # Print-quality rendering
  pdf2jpg --dpi 300 --quality 92 scan.pdf

  # Specific pages only
  pdf2jpg --pages 1-5 report.pdf
  pdf2jpg --pages 1,3,9 report.pdf

  # Inspect PDF metadata, convert nothing
  pdf2jpg --inspect-only document.pdf

  # Machine-readable run summary
  pdf2jpg --json document.pdf > summary.json

ENVIRONMENT VARIABLES:
  PDF2JPG_OUTPUT_DIR   Default output directory
  PDF2JPG_DPI          Default rendering DPI
  PDF2JPG_QUALITY      Default JPEG quality
  PDF2JPG_PAGES        Default page selection
  PDFIUM_LIB_PATH      Path to an existing libpdfium — skips auto-download
  PDF2JPG_CACHE_DIR    Override the default pdfium cache directory

SETUP:
  PDFium (~30 MB) is downloaded automatically on first run and cached in
  ~/.cache/pdf2jpg/pdfium-7690/. No manual library setup is required.
  To use an existing pdfium copy: PDFIUM_LIB_PATH=/path/to/libpdfium pdf2jpg ...
"#;

/// Rasterise PDF pages into sequential JPEG images.
#[derive(Parser, Debug)]
#[command(
    name = "pdf2jpg",
    version,
    about = "Rasterise PDF pages into sequential JPEG images",
    long_about = "Convert a PDF document into JPEG page images named page-1.jpg … page-N.jpg, \
rendered at a configurable DPI and JPEG quality. Rendering uses the native PDFium library, \
downloaded automatically on first run.",
    arg_required_else_help = true,
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// Path to the source PDF.
    input: PathBuf,

    /// Output directory for the page-<N>.jpg files (created if absent).
    #[arg(short, long, env = "PDF2JPG_OUTPUT_DIR", default_value = "pages")]
    output_dir: PathBuf,

    /// Rendering DPI (72–600).
    #[arg(long, env = "PDF2JPG_DPI", default_value_t = 200,
          value_parser = clap::value_parser!(u32).range(72..=600))]
    dpi: u32,

    /// JPEG quality (1–100).
    #[arg(long, env = "PDF2JPG_QUALITY", default_value_t = 85,
          value_parser = clap::value_parser!(u8).range(1..=100))]
    quality: u8,

    /// Page selection: all, 5, 3-15, or 1,3,5,7.
    #[arg(long, env = "PDF2JPG_PAGES", default_value = "all")]
    pages: String,

    /// PDF user password for encrypted documents.
    #[arg(long, env = "PDF2JPG_PASSWORD")]
    password: Option<String>,

    /// Output a structured JSON run summary instead of human-readable text.
    #[arg(long, env = "PDF2JPG_JSON")]
    json: bool,

    /// Disable progress bar.
    #[arg(long, env = "PDF2JPG_NO_PROGRESS")]
    no_progress: bool,

    /// Print PDF metadata only, no conversion.
    #[arg(long)]
    inspect_only: bool,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long, env = "PDF2JPG_VERBOSE")]
    verbose: bool,

    /// Suppress all output except errors.
    #[arg(short, long, env = "PDF2JPG_QUIET")]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // ── Logging setup ────────────────────────────────────────────────────
    // Suppress INFO-level library logs when the progress bar is active;
    // the bar provides all the feedback that matters to the user.
    let show_progress = !cli.quiet && !cli.no_progress && !cli.json;
    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet || show_progress {
        "error"
    } else {
        "info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    // ── Ensure the PDFium engine is available ────────────────────────────
    // On the very first run the library (~30 MB) is downloaded from
    // bblanchon/pdfium-binaries into the user cache. Subsequent startups
    // skip this block entirely (instant path check only).
    if !pdfium_setup::is_installed() {
        if !cli.quiet && !cli.json {
            let dl_bar = ProgressBar::new(0);
            dl_bar.set_style(
                ProgressStyle::with_template(
                    "{spinner:.cyan} {prefix:.bold}  \
                     [{bar:42.green/238}] {bytes}/{total_bytes}  ETA {eta_precise}",
                )
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("█▉▊▋▌▍▎▏  ")
                .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", "⠿"]),
            );
            dl_bar.set_prefix("PDF engine");
            dl_bar.set_message("Connecting…");
            dl_bar.enable_steady_tick(Duration::from_millis(80));

            let bar = dl_bar.clone();
            pdfium_setup::ensure_library(Some(&move |downloaded, total| {
                if let Some(t) = total {
                    if bar.length().unwrap_or(0) != t {
                        bar.set_length(t);
                    }
                }
                bar.set_position(downloaded);
            }))
            .context("Failed to download the PDFium engine")?;

            dl_bar.finish_with_message("ready ✓");
        } else {
            // Quiet mode — download silently; errors still propagate.
            pdfium_setup::ensure_library(None)
                .context("Failed to download the PDFium engine")?;
        }
    }

    // ── Inspect-only mode ────────────────────────────────────────────────
    if cli.inspect_only {
        let meta =
            inspect(&cli.input, cli.password.as_deref()).context("Failed to inspect PDF")?;

        if cli.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&meta).context("Failed to serialise metadata")?
            );
        } else {
            println!("File:         {}", cli.input.display());
            if let Some(ref t) = meta.title {
                println!("Title:        {t}");
            }
            if let Some(ref a) = meta.author {
                println!("Author:       {a}");
            }
            if let Some(ref s) = meta.subject {
                println!("Subject:      {s}");
            }
            println!("Pages:        {}", meta.page_count);
            println!("PDF Version:  {}", meta.pdf_version);
            if let Some(ref p) = meta.producer {
                println!("Producer:     {p}");
            }
            if let Some(ref c) = meta.creator {
                println!("Creator:      {c}");
            }
        }
        return Ok(());
    }

    // ── Build config ─────────────────────────────────────────────────────
    // The progress bar starts as a spinner (no page count yet);
    // `on_conversion_start` resizes it once the PDF has been opened.
    let progress_cb: Option<ProgressCallback> = if show_progress {
        let cb = CliProgressCallback::new_dynamic();
        Some(cb as Arc<dyn ConversionProgressCallback>)
    } else {
        None
    };

    let config = build_config(&cli, progress_cb)?;

    // ── Run conversion ───────────────────────────────────────────────────
    let output = convert(&cli.input, &cli.output_dir, &config).context("Conversion failed")?;

    if cli.json {
        let json = serde_json::to_string_pretty(&output).context("Failed to serialise output")?;
        println!("{json}");
    } else if !cli.quiet && !show_progress {
        // Only print inline stats when the progress callback is disabled
        // (the callback already printed the final green tick).
        eprintln!(
            "Converted {} pages in {}ms → {}",
            output.stats.pages_written,
            output.stats.total_duration_ms,
            output.output_dir.display()
        );
    } else if !cli.quiet {
        eprintln!(
            "   {}  —  {}ms total",
            dim(&output.output_dir.display().to_string()),
            output.stats.total_duration_ms,
        );
    }

    Ok(())
}

/// Map CLI args to `ConversionConfig`.
fn build_config(cli: &Cli, progress: Option<ProgressCallback>) -> Result<ConversionConfig> {
    let pages = parse_pages(&cli.pages)?;

    let mut builder = ConversionConfig::builder()
        .dpi(cli.dpi)
        .jpeg_quality(cli.quality)
        .pages(pages);

    if let Some(ref pwd) = cli.password {
        builder = builder.password(pwd.clone());
    }
    if let Some(cb) = progress {
        builder = builder.progress_callback(cb);
    }

    builder.build().context("Invalid configuration")
}

/// Parse `--pages` string into `PageSelection`.
fn parse_pages(s: &str) -> Result<PageSelection> {
    let s = s.trim().to_lowercase();

    if s == "all" {
        return Ok(PageSelection::All);
    }

    // Range: "3-15"
    if let Some((start, end)) = s.split_once('-') {
        let start: usize = start.trim().parse().context("Invalid start page in range")?;
        let end: usize = end.trim().parse().context("Invalid end page in range")?;

        if start < 1 {
            anyhow::bail!("Pages are 1-indexed, minimum is 1 (got {})", start);
        }
        if start > end {
            anyhow::bail!("Invalid page range '{}-{}': start must be <= end", start, end);
        }

        return Ok(PageSelection::Range(start, end));
    }

    // Set: "1,3,5,7"
    if s.contains(',') {
        let pages: Vec<usize> = s
            .split(',')
            .map(|p| {
                p.trim()
                    .parse::<usize>()
                    .context(format!("Invalid page number: '{}'", p.trim()))
            })
            .collect::<Result<Vec<_>>>()?;

        for &p in &pages {
            if p < 1 {
                anyhow::bail!("Pages are 1-indexed, minimum is 1 (got {})", p);
            }
        }

        return Ok(PageSelection::Set(pages));
    }

    // Single page: "5"
    let page: usize = s.parse().context("Invalid page number")?;
    if page < 1 {
        anyhow::bail!("Pages are 1-indexed, minimum is 1 (got {})", page);
    }

    Ok(PageSelection::Single(page))
}
