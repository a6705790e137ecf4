//! `intake` command-line entry point.
//!
//! # Responsibility
//! - Run registration form rules against values given on the command line.
//! - Keep output deterministic for scripting: one verdict or one JSON document.
//!
//! # Invariants
//! - Validation failures print the user-facing diagnostic and exit with 1.
//! - `edit` always renders the record and ends with a `valid=` verdict line.
//! - Logging starts only when a log directory is configured.

use clap::{Args, Parser, Subcommand};
use intake_core::{
    build_from_input, default_log_level, init_logging, validate_all, DateStyle, FormField,
    Patient, PatientForm, PatientId, PatientInput,
};
use log::info;
use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "intake")]
#[command(about = "Patient intake form validation and record mapping")]
struct Cli {
    /// Log level (trace|debug|info|warn|error)
    #[arg(long, global = true, env = "INTAKE_LOG_LEVEL")]
    log_level: Option<String>,
    /// Absolute directory for rolling log files
    #[arg(long, global = true, env = "INTAKE_LOG_DIR")]
    log_dir: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check form values and print `ok` or the first diagnostic
    Validate(FieldArgs),
    /// Validate form values and print the resulting patient record as JSON
    Build {
        #[command(flatten)]
        fields: FieldArgs,
        /// Storage-assigned identifier to attach
        #[arg(long)]
        id: Option<PatientId>,
    },
    /// Render a patient JSON record into form fields for editing
    Edit {
        /// Path to a patient record in JSON
        record: PathBuf,
        /// How the birth date is rendered (form|locale-short)
        #[arg(long, default_value = "form")]
        date_style: DateStyle,
    },
    /// Print the core version
    Version,
}

/// Raw form values; omitted flags are blank fields.
#[derive(Args)]
struct FieldArgs {
    /// Patient name
    #[arg(long, default_value = "")]
    name: String,
    /// CPF (999.999.999-99)
    #[arg(long, default_value = "")]
    cpf: String,
    /// E-mail address
    #[arg(long, default_value = "")]
    email: String,
    /// Phone ((99)99999-9999)
    #[arg(long, default_value = "")]
    phone: String,
    /// Birth date (dd/mm/yyyy)
    #[arg(long, default_value = "")]
    birth_date: String,
}

impl From<FieldArgs> for PatientInput {
    fn from(args: FieldArgs) -> Self {
        PatientInput::new(args.name, args.cpf, args.email, args.phone, args.birth_date)
    }
}

/// Text to print and whether the command succeeded.
struct Outcome {
    output: String,
    success: bool,
}

impl Outcome {
    fn ok(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            success: true,
        }
    }

    fn rejected(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            success: false,
        }
    }
}

fn main() -> Result<ExitCode, Box<dyn Error>> {
    let cli = Cli::parse();

    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        init_logging(level, log_dir)?;
    }

    let outcome = run(cli.command)?;
    println!("{}", outcome.output);
    Ok(if outcome.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn run(command: Commands) -> Result<Outcome, Box<dyn Error>> {
    match command {
        Commands::Validate(fields) => {
            let input = PatientInput::from(fields);
            Ok(match validate_all(&input) {
                Ok(()) => Outcome::ok("ok"),
                Err(diagnostic) => Outcome::rejected(diagnostic.message()),
            })
        }
        Commands::Build { fields, id } => {
            let input = PatientInput::from(fields);
            if let Err(diagnostic) = validate_all(&input) {
                return Ok(Outcome::rejected(diagnostic.message()));
            }
            let mut patient = build_from_input(&input);
            if let Some(id) = id {
                patient = patient.with_id(id);
            }
            info!(
                "event=cli_build module=cli status=ok has_birth_date={}",
                patient.birth_date.is_some()
            );
            Ok(Outcome::ok(serde_json::to_string_pretty(&patient)?))
        }
        Commands::Edit { record, date_style } => {
            let json = std::fs::read_to_string(&record)
                .map_err(|err| format!("failed to read `{}`: {err}", record.display()))?;
            let patient: Patient = serde_json::from_str(&json)?;
            let form = PatientForm::from_patient(&patient, date_style);
            let verdict = match patient.validate() {
                Ok(()) => "ok",
                Err(diagnostic) => diagnostic.message(),
            };
            Ok(Outcome::ok(format!("{}\nvalid={verdict}", render_form(&form))))
        }
        Commands::Version => Ok(Outcome::ok(format!(
            "intake_core version={}",
            intake_core::core_version()
        ))),
    }
}

fn render_form(form: &PatientForm) -> String {
    FormField::ALL
        .iter()
        .map(|field| format!("{}={}", field.key(), form.value(*field)))
        .collect::<Vec<_>>()
        .join("\n")
}
