//! Developer tasks (schema generation, fixture conformance).
//!
//! Keeping this separate avoids bloating the end-user CLI.

use anyhow::{Context, bail};
use bursar_settings::{CatalogFormat, Overrides};
use bursar_types::Decision;
use schemars::schema_for;
use std::fs;
use std::path::{Path, PathBuf};

/// Get the project root (parent of xtask directory).
fn project_root() -> anyhow::Result<PathBuf> {
    let manifest_dir = match std::env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => std::env::current_dir().context("determine current directory")?,
    };

    if manifest_dir.ends_with("xtask")
        && let Some(parent) = manifest_dir.parent()
    {
        return Ok(parent.to_path_buf());
    }
    Ok(manifest_dir)
}

fn schemas_dir() -> anyhow::Result<PathBuf> {
    Ok(project_root()?.join("schemas"))
}

fn fixtures_dir() -> anyhow::Result<PathBuf> {
    Ok(project_root()?.join("tests").join("fixtures"))
}

/// Schema definition with its target filename.
struct SchemaTarget {
    filename: &'static str,
    generate: fn() -> schemars::Schema,
}

fn generate_catalog_schema() -> schemars::Schema {
    schema_for!(bursar_settings::RuleCatalogV1)
}

fn generate_outcome_schema() -> schemars::Schema {
    schema_for!(bursar_types::OutcomeReport)
}

fn schema_targets() -> Vec<SchemaTarget> {
    vec![
        SchemaTarget {
            filename: "bursar.rules.v1.json",
            generate: generate_catalog_schema,
        },
        SchemaTarget {
            filename: "bursar.outcome.v1.json",
            generate: generate_outcome_schema,
        },
    ]
}

/// Serialize a schema to pretty-printed JSON with trailing newline.
fn serialize_schema(schema: &schemars::Schema) -> anyhow::Result<String> {
    let mut json = serde_json::to_string_pretty(schema).context("Failed to serialize schema")?;
    json.push('\n');
    Ok(json)
}

fn emit_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir()?;
    fs::create_dir_all(&dir).context("Failed to create schemas directory")?;

    for target in schema_targets() {
        let json = serialize_schema(&(target.generate)())?;
        let path = dir.join(target.filename);
        fs::write(&path, &json)
            .with_context(|| format!("Failed to write schema to {}", path.display()))?;
        println!("Wrote {}", path.display());
    }

    println!("\nSchemas emitted successfully.");
    Ok(())
}

/// Check that schemas in the repo match what would be generated.
fn validate_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir()?;
    let mut missing = Vec::new();
    let mut mismatched = Vec::new();

    for target in schema_targets() {
        let path = dir.join(target.filename);
        if !path.exists() {
            missing.push(target.filename);
            continue;
        }

        let expected = serialize_schema(&(target.generate)())?;
        let actual = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        if expected != actual {
            mismatched.push(target.filename);
        }
    }

    if missing.is_empty() && mismatched.is_empty() {
        println!("All schemas are up to date.");
        return Ok(());
    }

    if !missing.is_empty() {
        eprintln!("Missing schemas:");
        for name in &missing {
            eprintln!("  - {}", name);
        }
    }
    if !mismatched.is_empty() {
        eprintln!("Schemas out of date:");
        for name in &mismatched {
            eprintln!("  - {}", name);
        }
    }
    eprintln!("\nRun `cargo xtask emit-schemas` to regenerate.");
    bail!("Schema validation failed")
}

fn files_with_extension(dir: &Path, extensions: &[&str]) -> anyhow::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir).with_context(|| format!("Failed to read {}", dir.display()))? {
        let path = entry?.path();
        if path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| extensions.contains(&e))
        {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Fixture conformance:
/// 1. Every catalog fixture parses and resolves to a valid rule store.
/// 2. Every report fixture validates against the generated outcome schema.
fn conform() -> anyhow::Result<()> {
    let fixtures = fixtures_dir()?;
    let mut errors = Vec::new();

    let catalogs = files_with_extension(&fixtures.join("catalogs"), &["toml", "json"])?;
    for path in &catalogs {
        let name = path.display().to_string();
        let text = fs::read_to_string(path).with_context(|| format!("Failed to read {name}"))?;
        let resolved = bursar_settings::parse_catalog(&text, CatalogFormat::from_path(&name))
            .and_then(|cfg| bursar_settings::resolve_catalog(cfg, Overrides::default()));
        match resolved {
            Ok(r) => println!("  ✓ {} resolves ({} rules)", name, r.store.len()),
            Err(err) => errors.push(format!("{name}: {err:#}")),
        }
    }

    let schema = serde_json::to_value(generate_outcome_schema())?;
    let validator = jsonschema::validator_for(&schema)
        .map_err(|e| anyhow::anyhow!("Failed to compile outcome schema: {}", e))?;

    let reports = files_with_extension(&fixtures.join("reports"), &["json"])?;
    for path in &reports {
        let name = path.display().to_string();
        let text = fs::read_to_string(path).with_context(|| format!("Failed to read {name}"))?;
        let value: serde_json::Value = serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse {name} as JSON"))?;
        let before = errors.len();
        for err in validator.iter_errors(&value) {
            errors.push(format!("{name}: schema validation: {err}"));
        }
        if errors.len() == before {
            println!("  ✓ {} validates", name);
        }
    }

    if catalogs.is_empty() && reports.is_empty() {
        bail!("No fixtures found in {}", fixtures.display());
    }

    if !errors.is_empty() {
        eprintln!("\nConformance errors:");
        for err in &errors {
            eprintln!("  - {}", err);
        }
        bail!("Conformance validation failed with {} errors", errors.len());
    }

    println!("\n✓ All fixtures pass conformance checks!");
    Ok(())
}

/// Every decision has a complete explanation entry.
fn explain_coverage() -> anyhow::Result<()> {
    let mut errors = Vec::new();

    for decision in Decision::ALL {
        match bursar_types::lookup_explanation(decision.as_str()) {
            Some(exp) => {
                if exp.title.is_empty() {
                    errors.push(format!("Decision '{}' has empty title", decision));
                }
                if exp.description.is_empty() {
                    errors.push(format!("Decision '{}' has empty description", decision));
                }
                if exp.next_steps.is_empty() {
                    errors.push(format!("Decision '{}' has empty next steps", decision));
                }
            }
            None => errors.push(format!("Decision '{}' has no explanation", decision)),
        }
    }

    if errors.is_empty() {
        println!("✓ {} decisions have explanations", Decision::ALL.len());
        return Ok(());
    }
    for error in &errors {
        eprintln!("  - {}", error);
    }
    bail!("Explain coverage failed with {} errors", errors.len())
}

fn print_help() {
    eprintln!("xtask commands:");
    eprintln!("  help              Show this message");
    eprintln!("  emit-schemas      Generate JSON schemas from Rust types to schemas/");
    eprintln!("  validate-schemas  Check if schemas/ matches generated output (for CI)");
    eprintln!("  print-schema-ids  Print known schema IDs");
    eprintln!("  conform           Resolve catalog fixtures and validate report fixtures");
    eprintln!("  explain-coverage  Validate every decision has an explanation");
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let cmd = args.get(1).map(|s| s.as_str()).unwrap_or("help");

    match cmd {
        "help" | "--help" | "-h" => {
            print_help();
            Ok(())
        }
        "emit-schemas" => emit_schemas(),
        "validate-schemas" => validate_schemas(),
        "conform" => conform(),
        "explain-coverage" => explain_coverage(),
        "print-schema-ids" => {
            for target in schema_targets() {
                println!("{}", target.filename.trim_end_matches(".json"));
            }
            Ok(())
        }
        other => bail!("unknown xtask command: {other}\n\nRun `cargo xtask help` for usage."),
    }
    .context("xtask failed")
}
