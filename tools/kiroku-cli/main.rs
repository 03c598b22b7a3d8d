use clap::{Parser, Subcommand};
use itertools::Itertools;
use kiroku::prelude::*;
use serde_json::Value;
use std::fs;
use tracing_subscriber::EnvFilter;

/// Validate and inspect recorded browser-automation workflows
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate a workflow file or a single step JSON file
    Validate {
        /// Path to the JSON file
        path: String,
    },
    /// Print the fields relevant to each step's type
    Fields {
        /// Path to the workflow JSON file
        path: String,
        /// Only show this step (1-based)
        #[arg(short, long)]
        step: Option<usize>,
    },
    /// Print a human-readable plan of the workflow with inputs filled in
    Plan {
        /// Path to the workflow JSON file
        path: String,
        /// JSON object file with input values
        #[arg(long)]
        inputs: Option<String>,
        /// Individual input value, e.g. --input candidateId=42
        #[arg(short, long = "input", value_name = "KEY=VALUE")]
        input: Vec<String>,
        /// Also list the raw relevant fields of each step
        #[arg(long)]
        fields: bool,
        /// Also show recording timestamps and tab ids
        #[arg(long)]
        recording: bool,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Validate { path } => run_validate(&path),
        Command::Fields { path, step } => run_fields(&path, step),
        Command::Plan {
            path,
            inputs,
            input,
            fields,
            recording,
        } => {
            let options = FormatOptions {
                show_fields: fields,
                show_recording: recording,
            };
            run_plan(&path, inputs, input, options)
        }
    }
}

/// Validates either a workflow (an object with `steps`) or a single step.
fn run_validate(path: &str) {
    let content = fs::read_to_string(path)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to read '{}': {}", path, e)));
    let value: Value = serde_json::from_str(&content)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse JSON: {}", e)));

    if value.get("steps").is_some() {
        match Workflow::from_value(value) {
            Ok(workflow) => {
                println!(
                    "Workflow '{}' is valid ({} steps)",
                    workflow.display_name(),
                    workflow.steps.len()
                );
                let counts = workflow.steps.iter().counts_by(|step| step.kind);
                for (kind, count) in counts.into_iter().sorted_by_key(|(kind, _)| kind.as_str()) {
                    println!("  -> {}: {}", kind, count);
                }
            }
            Err(WorkflowError::Step { index, source }) => {
                eprintln!("\nStep {} is invalid:", index + 1);
                print_issues(&source);
                std::process::exit(1);
            }
            Err(e) => exit_with_error(&e.to_string()),
        }
    } else {
        match validate(&value) {
            Ok(step) => println!("Step '{}' ({}) is valid", step.description, step.kind),
            Err(e) => {
                eprintln!("\nStep is invalid:");
                print_issues(&e);
                std::process::exit(1);
            }
        }
    }
}

fn run_fields(path: &str, only: Option<usize>) {
    let workflow = load_workflow(path);
    for (index, step) in workflow.steps.iter().enumerate() {
        let number = index + 1;
        if only.is_some_and(|n| n != number) {
            continue;
        }
        println!("Step {} [{}]: {}", number, step.kind, step.description);
        let fields = variant_fields(step);
        if fields.is_empty() {
            println!("  (no fields)");
        }
        for (key, value) in fields.into_iter().sorted_by_key(|(key, _)| *key) {
            println!("  {}: {}", key, value);
        }
    }
}

fn run_plan(
    path: &str,
    inputs_path: Option<String>,
    assignments: Vec<String>,
    options: FormatOptions,
) {
    let workflow = load_workflow(path);

    let mut inputs = match inputs_path {
        Some(inputs_path) => WorkflowInputs::from_file(&inputs_path)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to load inputs: {}", e))),
        None => WorkflowInputs::new(),
    };
    for assignment in &assignments {
        let (key, value) = WorkflowInputs::parse_assignment(assignment)
            .unwrap_or_else(|e| exit_with_error(&e.to_string()));
        inputs.insert(key, value);
    }

    let required = workflow
        .required_inputs()
        .unwrap_or_else(|e| exit_with_error(&format!("Malformed placeholder: {}", e)));
    let missing: Vec<&String> = required
        .iter()
        .filter(|name| inputs.get(name).is_none())
        .collect();
    if !missing.is_empty() {
        exit_with_error(&format!(
            "Missing inputs: {}",
            missing.iter().join(", ")
        ));
    }

    let rendered = workflow
        .with_inputs(&inputs)
        .unwrap_or_else(|e| exit_with_error(&e.to_string()));
    println!("{}", StepFormatter::with_options(options).format_workflow(&rendered));
}

fn load_workflow(path: &str) -> Workflow {
    Workflow::from_file(path).unwrap_or_else(|e| exit_with_error(&e.to_string()))
}

fn print_issues(error: &ValidationError) {
    for issue in &error.issues {
        eprintln!("  -> {}", issue);
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
