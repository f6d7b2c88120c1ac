//! CLI entry point for bursar.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, and exit codes.
//! All business logic lives in the `bursar-app` crate.

use anyhow::Context;
use bursar_app::{
    LoadedRules, RulesInput, find_rule, load_rules, outcome_to_renderable, parse_applicants_json,
    parse_report_json, render_markdown, render_rules, render_text, run_batch, run_evaluate,
    serialize_report, to_renderable,
};
use bursar_render::render_rules_markdown;
use bursar_settings::{CatalogFormat, Overrides};
use bursar_types::{Applicant, explain};
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

const DEFAULT_CATALOG: &str = "bursar.toml";

#[derive(Parser, Debug)]
#[command(
    name = "bursar",
    version,
    about = "Priority-ordered rule evaluation for scholarship applicants"
)]
struct Cli {
    /// Rule catalog (TOML, or JSON by extension). Defaults to ./bursar.toml when present.
    #[arg(long, global = true)]
    rules: Option<Utf8PathBuf>,

    /// Override the built-in catalog the rules start from (reference|empty).
    #[arg(long, global = true)]
    preset: Option<String>,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Text,
    Markdown,
    Json,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate a single applicant.
    Evaluate {
        /// Cumulative GPA (0.0 to 4.0).
        #[arg(long)]
        cgpa: f64,
        /// Monthly family income.
        #[arg(long)]
        family_income: f64,
        /// Co-curricular score (0 to 100).
        #[arg(long)]
        co_curricular_score: u32,
        /// Number of disciplinary actions (0 to 10).
        #[arg(long)]
        disciplinary_actions: u32,

        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,

        /// Also write the JSON outcome report here.
        #[arg(long)]
        report_out: Option<Utf8PathBuf>,
    },

    /// Evaluate many applicants from a JSON array or JSON-lines file.
    Batch {
        #[arg(long)]
        input: Utf8PathBuf,

        /// Where to write the JSON results (if not specified, prints to stdout).
        #[arg(long, short)]
        output: Option<Utf8PathBuf>,
    },

    /// List the rule catalog in evaluation order.
    Rules,

    /// Show one rule by exact name.
    Rule { name: String },

    /// Explain a decision category (AWARD_FULL, AWARD_PARTIAL, REVIEW, REJECT, NO_DECISION).
    Explain { decision: String },

    /// Render markdown from an existing JSON outcome report.
    Md {
        #[arg(long)]
        report: Utf8PathBuf,

        /// Where to write the Markdown output (if not specified, prints to stdout).
        #[arg(long, short)]
        output: Option<Utf8PathBuf>,
    },
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("bursar error: {err:#}");
            std::process::exit(1);
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("BURSAR_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<i32> {
    let Cli { rules, preset, cmd } = cli;
    // The store is built before any evaluation; a bad catalog stops everything here.
    let load = || load_catalog(rules.as_deref(), preset.clone());

    match cmd {
        Commands::Evaluate {
            cgpa,
            family_income,
            co_curricular_score,
            disciplinary_actions,
            format,
            report_out,
        } => {
            let loaded = load()?;
            let applicant = Applicant {
                cgpa,
                family_income,
                co_curricular_score,
                disciplinary_actions,
            };
            cmd_evaluate(&loaded, &applicant, format, report_out.as_deref())
        }
        Commands::Batch { input, output } => cmd_batch(&load()?, &input, output.as_deref()),
        Commands::Rules => {
            print!("{}", render_rules(&load()?.store));
            Ok(0)
        }
        Commands::Rule { name } => cmd_rule(&load()?, &name),
        Commands::Explain { decision } => cmd_explain(&decision),
        Commands::Md { report, output } => cmd_md(&report, output.as_deref()),
    }
}

fn load_catalog(path: Option<&Utf8Path>, preset: Option<String>) -> anyhow::Result<LoadedRules> {
    let (path, required) = match path {
        Some(p) => (p.to_path_buf(), true),
        None => (Utf8PathBuf::from(DEFAULT_CATALOG), false),
    };

    let text = if path.exists() {
        Some(std::fs::read_to_string(&path).with_context(|| format!("read rules: {}", path))?)
    } else if required {
        anyhow::bail!("rule catalog not found: {}", path);
    } else {
        tracing::debug!(path = %path, "no rule catalog file; using built-in preset");
        None
    };

    load_rules(RulesInput {
        catalog_text: text.as_deref(),
        format: CatalogFormat::from_path(path.as_str()),
        overrides: Overrides { preset },
    })
    .with_context(|| format!("load rules from {}", path))
}

fn cmd_evaluate(
    loaded: &LoadedRules,
    applicant: &Applicant,
    format: OutputFormat,
    report_out: Option<&Utf8Path>,
) -> anyhow::Result<i32> {
    let report = run_evaluate(&loaded.store, applicant)?;

    if let Some(path) = report_out {
        let data = serialize_report(&report)?;
        write_file(path, &data).context("write report json")?;
    }

    match format {
        OutputFormat::Text => print!("{}", render_text(&to_renderable(&report))),
        OutputFormat::Markdown => print!("{}", render_markdown(&to_renderable(&report))),
        OutputFormat::Json => {
            let data = serialize_report(&report)?;
            println!("{}", String::from_utf8_lossy(&data));
        }
    }

    Ok(0)
}

fn cmd_batch(
    loaded: &LoadedRules,
    input: &Utf8Path,
    output: Option<&Utf8Path>,
) -> anyhow::Result<i32> {
    let text =
        std::fs::read_to_string(input).with_context(|| format!("read applicants: {}", input))?;
    let records = parse_applicants_json(&text)?;
    let result = run_batch(&loaded.store, &records);

    let data = serde_json::to_vec_pretty(&result).context("serialize batch output")?;
    match output {
        Some(path) => write_file(path, &data).context("write batch output")?,
        None => println!("{}", String::from_utf8_lossy(&data)),
    }

    // Some records could not be evaluated.
    Ok(if result.counts.errors > 0 { 2 } else { 0 })
}

fn cmd_rule(loaded: &LoadedRules, name: &str) -> anyhow::Result<i32> {
    match find_rule(&loaded.store, name) {
        Some(rule) => {
            print!("{}", render_rules_markdown(&[rule]));
            Ok(0)
        }
        None => {
            eprintln!("unknown rule: {name}");
            eprintln!("available rules:");
            for rule in loaded.store.rules() {
                eprintln!("  {}", rule.name);
            }
            Ok(1)
        }
    }
}

fn cmd_explain(decision: &str) -> anyhow::Result<i32> {
    let Some(exp) = explain::lookup_explanation(decision) else {
        eprintln!("unknown decision: {decision}");
        eprintln!("available decisions: AWARD_FULL, AWARD_PARTIAL, REVIEW, REJECT, NO_DECISION");
        return Ok(1);
    };

    let sample = outcome_to_renderable(&bursar_types::Outcome {
        rule: None,
        decision: exp.decision,
        reason: String::new(),
    });
    println!("{} ({})", exp.title, exp.decision);
    println!();
    println!("Displayed as: {}", sample.decision.label());
    println!();
    println!("{}", exp.description);
    println!();
    println!("Next steps: {}", exp.next_steps);
    Ok(0)
}

fn cmd_md(report_path: &Utf8Path, output: Option<&Utf8Path>) -> anyhow::Result<i32> {
    let report_text = std::fs::read_to_string(report_path)
        .with_context(|| format!("read report: {}", report_path))?;
    let report = parse_report_json(&report_text)?;
    let md = render_markdown(&to_renderable(&report));

    match output {
        Some(path) => write_file(path, md.as_bytes()).context("write markdown output")?,
        None => print!("{}", md),
    }
    Ok(0)
}

fn write_file(path: &Utf8Path, data: &[u8]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_str().is_empty()
    {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {}", parent))?;
    }
    std::fs::write(path, data).with_context(|| format!("write file: {}", path))?;
    Ok(())
}
