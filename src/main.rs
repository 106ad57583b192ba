use metamorph::dictionary::Dictionary;
use metamorph::groups;
use metamorph::mutants;
use metamorph::output;
use metamorph::relations;
use metamorph::runner;
use metamorph::score;
use metamorph::state;
use metamorph::sut::ReferenceFilter;

use std::process;
use std::sync::Arc;
use std::time::Instant;

use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "metamorph", version, about = "Metamorphic mutation testing for the known() filter contract")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate the mutant catalog against the metamorphic relations
    Run {
        /// Comma-separated relation ids to evaluate (default: all)
        #[arg(short, long)]
        relations: Option<String>,
        /// Dictionary language tag
        #[arg(short, long, default_value = "en")]
        language: String,
        /// Construct implementations case-sensitive
        #[arg(long)]
        case_sensitive: bool,
        /// Output JSON instead of human-readable text
        #[arg(long)]
        json: bool,
        /// Exit code only, no output
        #[arg(short, long)]
        quiet: bool,
        /// Also write the report to this path
        #[arg(short, long)]
        output: Option<Utf8PathBuf>,
    },
    /// Show details for a mutant from the last run
    Show {
        /// Mutant id (e.g. @mutant_07 or mutant_07)
        #[arg(name = "id")]
        mutant_id: String,
        /// Output JSON
        #[arg(long)]
        json: bool,
    },
    /// Summary of last run
    Status {
        /// Output JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let exit_code = match cli.command {
        Commands::Run {
            relations,
            language,
            case_sensitive,
            json,
            quiet,
            output,
        } => cmd_run(relations, language, case_sensitive, json, quiet, output),
        Commands::Show { mutant_id, json } => cmd_show(mutant_id, json),
        Commands::Status { json } => cmd_status(json),
    };

    process::exit(exit_code);
}

fn cmd_run(
    relation_filter: Option<String>,
    language: String,
    case_sensitive: bool,
    json_mode: bool,
    quiet: bool,
    output_path: Option<Utf8PathBuf>,
) -> i32 {
    let language = match metamorph::parse_language(&language) {
        Some(l) => l,
        None => {
            output::print_error(&format!(
                "Unsupported language tag: {}. Supported: en",
                language
            ));
            return 2;
        }
    };

    let mut relation_catalog = relations::relation_catalog();
    if let Some(ref filter) = relation_filter {
        let wanted: Vec<&str> = filter.split(',').map(|s| s.trim()).collect();
        let available: Vec<String> =
            relation_catalog.iter().map(|r| r.id().to_string()).collect();
        for id in &wanted {
            if !available.iter().any(|a| a == id) {
                output::print_error(&format!(
                    "Relation '{}' not found. Available: {}",
                    id,
                    available.join(", ")
                ));
                return 2;
            }
        }
        relation_catalog.retain(|r| wanted.iter().any(|id| *id == r.id()));
    }

    let mutant_catalog = mutants::mutant_catalog();
    let group_store = groups::builtin_groups();

    if let Err(e) = runner::validate_run(&mutant_catalog, &relation_catalog, &group_store) {
        output::print_error(&e.to_string());
        return 3;
    }

    let dict = Arc::new(Dictionary::builtin(language));
    let reference = ReferenceFilter::new(Arc::clone(&dict), case_sensitive);

    if let Err(e) = runner::validate_fixtures(&reference, &relation_catalog, &group_store) {
        output::print_error(&format!(
            "{}. Fix the fixtures before trusting any mutation score.",
            e
        ));
        return 3;
    }

    let start = Instant::now();
    let outcomes = runner::run_matrix(
        &mutant_catalog,
        &relation_catalog,
        &group_store,
        &dict,
        case_sensitive,
    );
    let duration_ms = start.elapsed().as_millis() as u64;

    let report = score::score(&outcomes, &mutant_catalog, &relation_catalog);
    let run = state::SavedRun { duration_ms, report };

    state::save_last_run(&run);

    if let Some(path) = output_path {
        if let Err(e) = state::save_to_path(&run, path.as_std_path()) {
            output::print_error(&format!("Failed to write {}: {}", path, e));
            return 3;
        }
        if !quiet && !json_mode {
            output::print_success(&format!("Report written to {}", path));
        }
    }

    if quiet {
        return if run.report.survived > 0 { 1 } else { 0 };
    }

    if json_mode {
        println!("{}", serde_json::to_string(&run).unwrap());
    } else {
        output::print_report(&run.report, run.duration_ms);
    }

    if run.report.survived > 0 { 1 } else { 0 }
}

fn cmd_show(mutant_id: String, json_mode: bool) -> i32 {
    let id = mutant_id.trim_start_matches('@');

    let last_run = match state::load_last_run() {
        Some(r) => r,
        None => {
            output::print_error("No previous run found. Run `metamorph run` first.");
            return 2;
        }
    };

    let record = last_run.report.mutants.iter().find(|m| m.id == id);
    match record {
        Some(m) => {
            if json_mode {
                println!("{}", serde_json::to_string(m).unwrap());
            } else {
                output::print_mutant_detail(m);
            }
            0
        }
        None => {
            let valid: Vec<_> = last_run
                .report
                .mutants
                .iter()
                .map(|m| format!("@{}", m.id))
                .collect();
            output::print_error(&format!(
                "Mutant @{} not found. Valid ids: {}",
                id,
                valid.join(", ")
            ));
            2
        }
    }
}

fn cmd_status(json_mode: bool) -> i32 {
    match state::load_last_run() {
        Some(run) => {
            if json_mode {
                println!("{}", serde_json::to_string(&run).unwrap());
            } else {
                output::print_status(&run.report);
            }
            0
        }
        None => {
            output::print_error("No previous run found. Run `metamorph run` first.");
            2
        }
    }
}
