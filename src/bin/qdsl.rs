//! qdsl: render expression trees from the command line
//!
//! # Usage
//!
//! ```bash
//! # Render a JSON expression tree for PostgreSQL
//! qdsl render pred.json --dialect postgres
//!
//! # Inline literals instead of placeholders, reading stdin
//! cat pred.json | qdsl render - --literals
//!
//! # Bind named parameters
//! qdsl render pred.json --bind min_age=18 --bind name=bob
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use qdsl::prelude::*;
use std::io::Read;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "qdsl")]
#[command(version)]
#[command(about = "Render typed query expressions for a SQL or JPQL dialect", long_about = None)]
#[command(after_help = "EXAMPLES:
    qdsl render pred.json --dialect postgres
    qdsl render - --literals < pred.json
    qdsl templates mysql")]
struct Cli {
    /// Config file (defaults to ./qdsl.toml, then the user config dir)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Verbose output (repeat for more)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a JSON expression tree
    Render {
        /// JSON file, or '-' for stdin
        input: String,

        /// Target dialect (overrides config)
        #[arg(short, long, env = "QDSL_DIALECT")]
        dialect: Option<Dialect>,

        /// Inline constants as literals
        #[arg(short, long)]
        literals: bool,

        /// Parameter values as name=value
        #[arg(short, long)]
        bind: Vec<String>,

        /// Print text and bindings as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the built-in dialects
    Dialects,
    /// Show every template reachable from a dialect
    Templates {
        dialect: Dialect,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match &cli.command {
        Commands::Render {
            input,
            dialect,
            literals,
            bind,
            json,
        } => render(&cli, input, *dialect, *literals, bind, *json),
        Commands::Dialects => show_dialects(),
        Commands::Templates { dialect } => show_templates(*dialect),
    };

    if let Err(e) = result {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "qdsl=debug",
        _ => "qdsl=trace",
    };
    let filter = tracing_subscriber::EnvFilter::try_from_env("QDSL_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(cli: &Cli) -> Result<RenderConfig> {
    let config = match &cli.config {
        Some(path) => RenderConfig::load_from(path)
            .with_context(|| format!("reading {}", path.display()))?,
        None => RenderConfig::load()?,
    };
    Ok(config)
}

fn read_input(input: &str) -> Result<String> {
    if input == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        std::fs::read_to_string(input).with_context(|| format!("reading {}", input))
    }
}

/// `name=value`; the value is read as an integer, float or boolean when it
/// looks like one, else as a string.
fn parse_binding(raw: &str) -> Result<(String, Value)> {
    let (name, value) = raw
        .split_once('=')
        .with_context(|| format!("binding '{}' is not name=value", raw))?;
    let value = if let Ok(n) = value.parse::<i64>() {
        Value::Int(n)
    } else if let Ok(f) = value.parse::<f64>() {
        Value::Float(f)
    } else if value == "true" {
        Value::Bool(true)
    } else if value == "false" {
        Value::Bool(false)
    } else {
        Value::String(value.to_string())
    };
    Ok((name.trim().to_string(), value))
}

fn render(
    cli: &Cli,
    input: &str,
    dialect: Option<Dialect>,
    literals: bool,
    bind: &[String],
    json: bool,
) -> Result<()> {
    let mut config = load_config(cli)?;
    if let Some(d) = dialect {
        config.dialect = d;
    }
    if literals {
        config.use_literals = true;
    }

    let source = read_input(input)?;
    let expr: Expr = serde_json::from_str(&source).context("parsing expression JSON")?;

    let mut params = ParamBindings::new();
    for raw in bind {
        let (name, value) = parse_binding(raw)?;
        params.insert(name, value);
    }

    let templates = config.templates()?;
    let rendered = expr.to_query_with(&templates, config.options(), Some(&params))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&rendered)?);
        return Ok(());
    }

    if cli.verbose > 0 {
        println!("{} {}", "Dialect:".dimmed(), templates.lineage().join(" → ").cyan());
        println!("{} {}", "Tree:".dimmed(), expr.to_string().yellow());
    }
    println!("{}", rendered.text.white());

    if !rendered.bindings.is_empty() {
        println!();
        println!("{}", "Bindings:".cyan());
        let style = templates.placeholders();
        for (i, b) in rendered.bindings.iter().enumerate() {
            println!(
                "  {} = {} {}",
                style.render(i + 1),
                b.value.to_string().yellow(),
                format!("({})", b.value.kind()).dimmed()
            );
        }
    }
    Ok(())
}

fn show_dialects() -> Result<()> {
    println!(
        "{:14} {:12} {}",
        "Dialect".white().bold(),
        "Params".white().bold(),
        "Extends".white().bold()
    );
    println!("{}", "─".repeat(60).dimmed());
    for d in Dialect::ALL {
        let t = d.templates()?;
        let lineage = t.lineage();
        println!(
            "{:14} {:12} {}",
            d.name().cyan().bold(),
            t.placeholders().render(1).yellow(),
            lineage[1..].join(" → ").dimmed()
        );
    }
    Ok(())
}

fn show_templates(dialect: Dialect) -> Result<()> {
    let t = dialect.templates()?;
    println!("{} {}", "Templates for".cyan().bold(), t.lineage().join(" → ").cyan());
    println!();
    for (op, template) in t.entries() {
        let precedence = template
            .precedence()
            .map(|p| p.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:20} {:>3}  {}",
            op.name().yellow(),
            precedence.dimmed(),
            template.pattern().white()
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_binding() {
        assert_eq!(parse_binding("n=42").unwrap(), ("n".to_string(), Value::Int(42)));
        assert_eq!(parse_binding("x=1.5").unwrap().1, Value::Float(1.5));
        assert_eq!(parse_binding("ok=true").unwrap().1, Value::Bool(true));
        assert_eq!(parse_binding("s=a=b").unwrap().1, Value::from("a=b"));
        assert!(parse_binding("novalue").is_err());
    }
}
