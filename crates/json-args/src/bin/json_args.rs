//! json-args: decode, wrap and inspect call arguments from the command line.
//!
//! ```text
//! echo '[1, [0.5, 0, 1]]' | json-args get --pos 2 --type vec3
//! json-args wrap --type float --hint deg 12.5
//! echo '{"swe_":1,"type":3,"v":1}' | json-args inspect
//! ```

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use json_args::{type_name, ArgValue, ArgsCodec, ArgsConfig, Handle, Locator, TypeTag, WrappedValue};
use serde_json::{json, Value};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "json-args", about = "Typed call arguments over JSON value trees")]
struct Cli {
    /// JSON codec configuration file
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Locate and decode one argument from a JSON document
    Get {
        #[arg(long = "type", value_name = "TAG")]
        tag: TypeTag,
        #[arg(long)]
        name: Option<String>,
        /// 1-based position in an argument array
        #[arg(long, default_value_t = 0)]
        pos: usize,
        /// Input file; stdin when omitted
        input: Option<PathBuf>,
    },
    /// Wrap a JSON value as a self-describing argument
    Wrap {
        #[arg(long = "type", value_name = "TAG")]
        tag: TypeTag,
        #[arg(long)]
        hint: Option<String>,
        /// Native value as JSON text; floats also accept `inf` and `nan`
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
    /// Print the type metadata of a wrapped value
    Inspect { input: Option<PathBuf> },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = match &cli.config {
        Some(path) => ArgsConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => ArgsConfig::default(),
    };
    debug!(?config, "codec configuration");
    let codec = ArgsCodec::new(config);

    let out = match cli.command {
        Commands::Get {
            tag,
            name,
            pos,
            input,
        } => {
            let doc = read_document(input.as_deref())?;
            let locator = Locator::new(name.as_deref(), pos);
            match codec.get(&doc, locator, tag)? {
                Some(value) => serde_json::to_value(&value)?,
                None => {
                    info!(pos, "argument not present");
                    Value::Null
                }
            }
        }
        Commands::Wrap { tag, hint, value } => {
            let native = match value.parse::<f64>() {
                Ok(f) if tag == TypeTag::Float => ArgValue::Float(f),
                _ => {
                    let raw: Value =
                        serde_json::from_str(&value).context("VALUE is not valid JSON")?;
                    native_value(&codec, &raw, tag)?
                }
            };
            codec.encode_as(tag, hint.as_deref(), &native)?
        }
        Commands::Inspect { input } => {
            let doc = read_document(input.as_deref())?;
            let Some(wrapped) = WrappedValue::inspect(&doc)? else {
                bail!("input is not a wrapped value");
            };
            json!({
                "type": wrapped.raw_type,
                "type_name": type_name(wrapped.raw_type),
                "hint": wrapped.hint,
            })
        }
    };

    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

fn read_document(path: Option<&Path>) -> Result<Value> {
    let text = match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            buf
        }
    };
    serde_json::from_str(&text).context("Input is not valid JSON")
}

/// Reads a command-line value through the decoder, so `wrap` accepts exactly
/// what `get` would. `null` stands for an absent string.
fn native_value(codec: &ArgsCodec, raw: &Value, tag: TypeTag) -> Result<ArgValue> {
    match (tag, raw) {
        (TypeTag::String, Value::Null) => Ok(ArgValue::from(None::<&str>)),
        (TypeTag::Pointer, Value::Null) => Ok(ArgValue::Pointer(Handle::NULL)),
        _ => Ok(codec.decode(raw, tag)?),
    }
}
