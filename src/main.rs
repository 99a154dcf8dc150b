use anyhow::{Context, Result};
use chartopts::{options, Node, OutputFormat, RenderOptions};
use clap::{Parser, ValueEnum};
use serde_json::Value;
use std::io::{self, Read, Write};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Js,
    Json,
}

impl From<Format> for OutputFormat {
    fn from(f: Format) -> Self {
        match f {
            Format::Js => OutputFormat::Literal,
            Format::Json => OutputFormat::Json,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "chartopts")]
#[command(about = "Validate chart options written as object literals and print their trimmed form", long_about = None)]
struct Args {
    /// Schema of the top-level node (e.g. 'Pane', 'WordcloudSeries')
    schema: String,

    /// Output format; overrides the `format` render option
    #[arg(long, value_enum)]
    format: Option<Format>,

    /// Render options as JSON (e.g. '{"indent": 4, "quote": "double"}')
    #[arg(long)]
    options: Option<String>,

    /// Print every declared key, including unset ones
    #[arg(long)]
    untrimmed: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    options::check_all().context("Schema catalogue has conflicting keys")?;

    let schema = options::lookup(&args.schema)
        .with_context(|| format!("Unknown schema '{}'", args.schema))?;

    let mut render = match &args.options {
        Some(json) => serde_json::from_str::<RenderOptions>(json).context("Failed to parse --options")?,
        None => RenderOptions::default(),
    };
    if let Some(format) = args.format {
        render.format = format.into();
    }

    // Read the literal from stdin
    let mut source = String::new();
    io::stdin()
        .read_to_string(&mut source)
        .context("Failed to read options from stdin")?;

    let node = Node::from_js_literal(schema, &source)
        .with_context(|| format!("Failed to build {}", schema.name))?;
    tracing::debug!(schema = schema.name, slots = node.iter().count(), "built node");

    let output = if args.untrimmed {
        render.render_value(&Value::Object(node.to_untrimmed_dict()))
    } else {
        render.render(&node)
    };

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    writeln!(handle, "{output}").context("Failed to write to stdout")?;
    handle.flush().context("Failed to flush stdout")?;

    Ok(())
}
