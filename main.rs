use std::fs::{self, File};
use std::io::{self, BufWriter, StdinLock, Write};
use std::path::{Path, PathBuf};
use std::process;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use encoding_rs::{Encoding, UTF_8};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use tag_cloud::config::{SIZE_MAX, SIZE_MIN};
use tag_cloud::prompt::{INPUT_QUESTION, OUTPUT_QUESTION, Prompter};
use tag_cloud::{CloudConfig, CloudError, Document, OutputFormat};

const STDOUT_PATH: &str = "-";

/// Build an HTML tag cloud from the most frequent words of a text file.
///
/// Anything not given on the command line is asked for on stdin.
#[derive(Parser, Debug)]
#[command(name = "tag-cloud", version, about)]
struct Args {
    /// Text file to read
    input: Option<PathBuf>,

    /// Where to write the cloud ("-" for stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Number of words in the cloud
    #[arg(short = 'n', long)]
    count: Option<usize>,

    /// Document name shown in the page title (defaults to the input path)
    #[arg(long)]
    title: Option<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Html)]
    format: OutputFormat,

    /// Encoding label of the input, e.g. utf-8, windows-1252, shift_jis
    #[arg(long, default_value = "utf-8")]
    encoding: String,

    #[arg(long, default_value_t = SIZE_MIN)]
    min_font: u32,

    #[arg(long, default_value_t = SIZE_MAX)]
    max_font: u32,

    /// Absolute stylesheet linked ahead of the local data/tagcloud.css
    #[arg(long)]
    stylesheet_url: Option<String>,

    /// More log output on stderr (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();
}

/// Prompts go to stdout, unless stdout carries the cloud itself.
fn prompter(cloud_on_stdout: bool) -> Prompter<StdinLock<'static>, Box<dyn Write>> {
    let sink: Box<dyn Write> = if cloud_on_stdout {
        Box::new(io::stderr())
    } else {
        Box::new(io::stdout())
    };
    Prompter::new(io::stdin().lock(), sink)
}

fn build_config(args: &Args) -> Result<CloudConfig> {
    let mut config = CloudConfig::default()
        .with_font_range(args.min_font, args.max_font)
        .with_format(args.format);
    if let Some(url) = &args.stylesheet_url {
        config = config.with_stylesheet_url(url)?;
    }
    config.validate()?;
    Ok(config)
}

/// Read `path` and decode it with `encoding`. A byte-order mark wins over the label.
///
/// Malformed UTF-8 is a read failure. Other encodings decode lossily with a warning.
fn read_text(path: &Path, encoding: &'static Encoding) -> Result<String> {
    let bytes = fs::read(path)
        .map_err(CloudError::InputRead)
        .with_context(|| format!("cannot read {}", path.display()))?;
    let (text, used, had_errors) = encoding.decode(&bytes);
    if had_errors {
        if used == UTF_8 {
            let err = io::Error::new(io::ErrorKind::InvalidData, "input is not valid UTF-8");
            return Err(CloudError::InputRead(err))
                .with_context(|| format!("cannot read {}", path.display()));
        }
        warn!(path = %path.display(), encoding = used.name(), "input contained undecodable bytes");
    }
    debug!(bytes = bytes.len(), encoding = used.name(), "decoded input");
    Ok(text.into_owned())
}

fn run(args: Args) -> Result<()> {
    let config = build_config(&args)?;
    let encoding = Encoding::for_label(args.encoding.as_bytes())
        .ok_or_else(|| CloudError::UnknownEncoding(args.encoding.clone()))?;
    let cloud_on_stdout = args.output.as_deref() == Some(Path::new(STDOUT_PATH));

    let input = match &args.input {
        Some(path) => path.clone(),
        None => PathBuf::from(prompter(cloud_on_stdout).ask_line(INPUT_QUESTION)?),
    };
    let title = args
        .title
        .clone()
        .unwrap_or_else(|| input.display().to_string());

    // A bad input path fails before the output question is asked
    let start = Instant::now();
    let text = read_text(&input, encoding)?;
    let document = Document::read(text.as_bytes(), title)?;
    info!(
        path = %input.display(),
        distinct = document.distinct_words(),
        total = document.counts().total(),
        "counted words in {:.2?}",
        start.elapsed()
    );

    let output = match &args.output {
        Some(path) => path.clone(),
        None => PathBuf::from(prompter(cloud_on_stdout).ask_line(OUTPUT_QUESTION)?),
    };
    let cloud_on_stdout = output.as_path() == Path::new(STDOUT_PATH);

    let count = match args.count {
        Some(n) => n,
        None => prompter(cloud_on_stdout).ask_count(document.distinct_words())?,
    };
    // Reject a bad size before the output file is created
    if count > document.distinct_words() {
        return Err(CloudError::invalid_count(count, document.distinct_words()).into());
    }

    let render_start = Instant::now();
    if cloud_on_stdout {
        let mut out = io::stdout().lock();
        document.render(count, &config, &mut out)?;
    } else {
        let file = File::create(&output)
            .map_err(CloudError::OutputWrite)
            .with_context(|| format!("cannot create {}", output.display()))?;
        let mut out = BufWriter::new(file);
        document.render(count, &config, &mut out)?;
        out.flush()
            .map_err(CloudError::OutputWrite)
            .with_context(|| format!("cannot write {}", output.display()))?;
    }
    info!(
        path = %output.display(),
        words = count,
        "rendered cloud in {:.2?}",
        render_start.elapsed()
    );
    Ok(())
}

fn main() -> Result<()> {
    let args = match Args::try_parse() {
        Ok(args) => args,
        // --help and --version
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            let _ = e.print();
            process::exit(1);
        }
    };
    init_tracing(args.verbose);
    run(args)
}
