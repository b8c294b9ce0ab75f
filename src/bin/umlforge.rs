//! umlforge CLI - generate Spring Boot projects from class-model requests
//!
//! Reads a JSON or YAML request and writes the generated project as a zip archive.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;
use umlforge::codegen::signature::{attribute_anomalies, method_anomalies};
use umlforge::codegen::{load_request, ClassNames, DatabaseType, Layer};
use umlforge::{Generator, GeneratorConfig};

#[derive(Parser)]
#[command(name = "umlforge")]
#[command(version, about = "Class-model to Spring Boot project generator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a project archive from a request file
    Generate {
        /// Path to the request (.json, .yaml or .yml)
        #[arg(short, long)]
        request: PathBuf,

        /// Output archive path (default: <projectName>.zip)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Database type (postgresql, mysql) - overrides UMLFORGE_DATABASE
        #[arg(short, long)]
        database: Option<String>,

        /// Directory for per-request workspaces - overrides UMLFORGE_TEMP_DIR
        #[arg(short, long)]
        temp_dir: Option<PathBuf>,
    },

    /// Load a request and report derived names and parser anomalies
    Validate {
        /// Path to the request (.json, .yaml or .yml)
        #[arg(short, long)]
        request: PathBuf,
    },
}

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate { request, output, database, temp_dir } => {
            generate_archive(request, output, database, temp_dir).await
        }
        Commands::Validate { request } => validate_request(request),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Run the full pipeline and copy the archive to `output`
async fn generate_archive(
    request_path: PathBuf,
    output: Option<PathBuf>,
    database: Option<String>,
    temp_dir: Option<PathBuf>,
) -> Result<(), String> {
    println!("🔧 Generating project from {}...", request_path.display());

    let request = load_request(&request_path)?;
    println!(
        "  ✓ Loaded '{}' ({} classes)",
        request.project_name(),
        request.classes.len()
    );

    let mut config = GeneratorConfig::default();
    if let Some(database) = database {
        config.database = database.parse::<DatabaseType>()?;
    }
    if let Some(temp_dir) = temp_dir {
        config.temp_root = temp_dir;
    }
    println!("  ℹ Database: {}", config.database);

    let mut archive = Generator::new(config)
        .generate(&request)
        .await
        .map_err(|e| e.to_string())?;

    let output = output.unwrap_or_else(|| PathBuf::from(archive.file_name()));
    let mut file = tokio::fs::File::create(&output)
        .await
        .map_err(|e| format!("Failed to create {}: {}", output.display(), e))?;

    let written = tokio::io::copy(&mut archive, &mut file)
        .await
        .map_err(|e| format!("Failed to write {}: {}", output.display(), e))?;

    println!("  ✓ Wrote {} ({} bytes)", output.display(), written);
    println!("✨ Generation complete!");

    Ok(())
}

/// Print each class's derived names and every leniency anomaly
fn validate_request(request_path: PathBuf) -> Result<(), String> {
    println!("🔍 Validating {}...", request_path.display());

    let request = load_request(&request_path)?;
    println!("  ✓ Project: {}", request.project_name());
    println!("  ✓ Package: {}", request.package_name());

    let names = ClassNames::assign_all(&request.classes);
    let mut anomaly_count = 0;

    for (class, names) in request.classes.iter().zip(&names) {
        let layer_types: Vec<String> = Layer::ALL.iter().map(|l| l.type_name(&names.type_name)).collect();
        println!("\n  {} ({})", names.type_name, names.group);
        println!("    types: {}", layer_types.join(", "));

        for token in &class.attributes {
            for anomaly in attribute_anomalies(token) {
                anomaly_count += 1;
                println!("    ⚠ {:?}: {} ({:?})", token, anomaly.describe(), anomaly.resolution());
            }
        }
        for token in &class.methods {
            for anomaly in method_anomalies(token) {
                anomaly_count += 1;
                println!("    ⚠ {:?}: {} ({:?})", token, anomaly.describe(), anomaly.resolution());
            }
        }
    }

    if anomaly_count == 0 {
        println!("\n✅ Request is clean!");
    } else {
        println!("\n✅ Request is valid ({} anomalies resolved leniently)", anomaly_count);
    }

    Ok(())
}
