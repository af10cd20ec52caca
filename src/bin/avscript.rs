use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "avscript", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build the script described by a JSON manifest.
    Build(BuildArgs),
    /// Compile one signature and bind arguments to it.
    Call(CallArgs),
    /// List built-in functions and their signatures.
    List,
}

#[derive(Parser, Debug)]
struct BuildArgs {
    /// Input manifest JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output script path (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct CallArgs {
    /// Signature text, e.g. `Crop(ri:, ri:, ri:, ri:, b:align)`.
    #[arg(long)]
    signature: String,

    /// Comma-separated values accepted by `t` parameters.
    #[arg(long, default_value = "")]
    types: String,

    /// Directory relative paths resolve against (defaults to the working directory).
    #[arg(long)]
    base_dir: Option<PathBuf>,

    /// Arguments, each parsed as JSON (`null` omits a position); non-JSON text is a string.
    #[arg(allow_hyphen_values = true)]
    args: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Build(args) => cmd_build(args),
        Command::Call(args) => cmd_call(args),
        Command::List => cmd_list(),
    }
}

fn cmd_build(args: BuildArgs) -> anyhow::Result<()> {
    let manifest = avscript::Manifest::load(&args.in_path)?;
    let registry = manifest.build_registry()?;
    let code = manifest.render(&registry)?;

    match args.out {
        Some(out) => {
            if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            std::fs::write(&out, code)
                .with_context(|| format!("write script '{}'", out.display()))?;
            eprintln!("wrote {}", out.display());
        }
        None => print!("{code}"),
    }
    Ok(())
}

fn cmd_call(args: CallArgs) -> anyhow::Result<()> {
    let paths = match args.base_dir {
        Some(dir) => avscript::PathResolver::new(dir),
        None => avscript::PathResolver::from_current_dir()?,
    };
    let sig = avscript::Signature::compile_with_types(&args.signature, args.types.as_str());
    let binder = avscript::CallBinder::new(sig);

    let values = args
        .args
        .iter()
        .map(|raw| parse_cli_arg(raw))
        .collect::<anyhow::Result<Vec<_>>>()?;
    let line = binder.bind(&values, &paths)?;
    println!("{line}");
    Ok(())
}

fn cmd_list() -> anyhow::Result<()> {
    let registry = avscript::Registry::with_core(avscript::PathResolver::from_current_dir()?)?;
    for name in registry.names() {
        let Some(sig) = registry.lookup(name).and_then(|e| e.signature()) else {
            println!("{name}");
            continue;
        };
        if sig.allowed_types().is_empty() {
            println!("{sig}");
        } else {
            println!("{sig}  [types: {}]", sig.allowed_types().join(", "));
        }
    }
    Ok(())
}

fn parse_cli_arg(raw: &str) -> anyhow::Result<avscript::Arg> {
    match serde_json::from_str::<serde_json::Value>(raw) {
        Ok(v @ (serde_json::Value::Array(_) | serde_json::Value::Object(_))) => {
            anyhow::bail!("argument '{raw}' must be a scalar, got {v}")
        }
        Ok(v) => Ok(avscript::Arg::try_from(&v)?),
        Err(_) => Ok(avscript::Arg::Text(raw.to_string())),
    }
}
