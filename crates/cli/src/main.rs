// ABOUTME: CLI that loads a page from a URL, file, or stdin and runs a domquery traversal chain.
// ABOUTME: Applies --step links left to right and prints the extracted values as JSON.

mod steps;

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::{Duration, Instant};

use anyhow::{bail, Context, Result};
use clap::Parser;
use domquery::{Document, DomQuery, LoadOptions};

use crate::steps::{Extract, Step};

const USER_AGENT: &str = concat!("domquery/", env!("CARGO_PKG_VERSION"));

/// Query an HTML page with a chain of traversal steps and print JSON.
#[derive(Parser, Debug)]
#[command(name = "domquery")]
#[command(about = "Run chained DOM traversal steps against an HTML page", long_about = None)]
struct Args {
    /// Page URL (http/https), local file path, or "-" for stdin.
    target: String,

    /// Traversal step: css:SEL, class:NAME, id:ID, tag:TAG, eq:N, first, last, next, prev, parent.
    #[arg(short = 's', long = "step")]
    steps: Vec<Step>,

    /// Value to extract per node: text, html, tag, attr:NAME, or count.
    #[arg(short = 'x', long = "extract", default_value = "text")]
    extract: Extract,

    /// Keep whitespace-only text nodes instead of dropping them.
    #[arg(long = "keep-blank-text")]
    keep_blank_text: bool,

    /// Parse the input as an HTML fragment.
    #[arg(long = "fragment")]
    fragment: bool,

    /// HTTP timeout in seconds.
    #[arg(long = "timeout", default_value_t = 30)]
    timeout: u64,

    /// User-Agent header sent when fetching.
    #[arg(long = "user-agent", default_value = USER_AGENT)]
    user_agent: String,

    /// Output compact JSON instead of pretty.
    #[arg(long, default_value_t = false)]
    compact: bool,

    /// Print elapsed time in ms to stderr.
    #[arg(long = "timing")]
    timing: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    let start = Instant::now();

    let code = match run(&args) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::from(1)
        }
    };

    if args.timing {
        let _ = writeln!(io::stderr(), "elapsed: {}ms", start.elapsed().as_millis());
    }
    code
}

fn run(args: &Args) -> Result<String> {
    let opts = LoadOptions::builder()
        .strip_blank_text(!args.keep_blank_text)
        .fragment(args.fragment)
        .build();
    let doc = load_document(args, &opts)?;

    let mut q = DomQuery::load(&doc);
    for step in &args.steps {
        q = step.apply(&q);
    }
    let value = args.extract.apply(&q);

    if args.compact {
        Ok(serde_json::to_string(&value)?)
    } else {
        Ok(serde_json::to_string_pretty(&value)?)
    }
}

fn load_document(args: &Args, opts: &LoadOptions) -> Result<Document> {
    let target = args.target.as_str();

    if target == "-" {
        let mut buf = Vec::new();
        io::stdin().read_to_end(&mut buf)?;
        return Ok(Document::from_bytes(&buf, None, opts)?);
    }

    if target.starts_with("http://") || target.starts_with("https://") {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(args.timeout))
            .user_agent(args.user_agent.as_str())
            .build()?;
        let resp = client
            .get(target)
            .send()
            .with_context(|| format!("fetching {}", target))?
            .error_for_status()?;
        let content_type = resp
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = resp.bytes()?;
        return Ok(Document::from_bytes(&body, content_type.as_deref(), opts)?);
    }

    let path = PathBuf::from(target);
    if !path.exists() {
        bail!("file not found: {}", target);
    }
    let bytes = fs::read(&path).with_context(|| format!("reading {}", target))?;
    Ok(Document::from_bytes(&bytes, None, opts)?)
}
