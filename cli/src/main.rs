use std::thread;
use std::time::Duration;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use pearl_catalog::{
    CaseStudyQuery, Catalog, PatientFilters, PatientQuery, PredictionPhase, RangeFilter,
};
use pearl_core::{Gender, PearlConfig, TreatmentResponse};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

mod render;

#[derive(Parser, Debug)]
#[command(
    name = "pearl-cli",
    version,
    about = "Browse the Pearl ITP sample dataset from the terminal."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Print JSON instead of text.
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Search the patient roster. Repeated options match any of their values.
    Patients {
        /// Case-insensitive part of the patient name.
        #[arg(long, default_value = "")]
        name: String,

        #[arg(long = "symptom")]
        symptoms: Vec<String>,

        #[arg(long)]
        region: Vec<String>,

        #[arg(long)]
        ethnicity: Vec<String>,

        #[arg(long, value_parser = parse_gender)]
        gender: Vec<Gender>,

        /// Inclusive age range, e.g. 18-40.
        #[arg(long)]
        age: Option<RangeFilter>,

        /// Inclusive platelet range per µL, e.g. 20000-50000.
        #[arg(long)]
        platelets: Option<RangeFilter>,

        /// Response of any current treatment.
        #[arg(long, value_parser = parse_response)]
        response: Vec<TreatmentResponse>,
    },

    /// Search published case studies.
    Cases {
        /// Matched against title, protocol and tags.
        #[arg(long, default_value = "")]
        term: String,

        /// Exact disease name.
        #[arg(long)]
        disease: Option<String>,

        /// Exact company name.
        #[arg(long)]
        company: Option<String>,
    },

    /// Show one patient's full record.
    Patient { id: String },

    /// Run the treatment predictor for a patient.
    Predict {
        id: String,

        /// Analysis delay in milliseconds.
        #[arg(long)]
        delay_ms: Option<u64>,
    },

    /// List trend analyses, or print the report of one.
    Trends { id: Option<String> },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    tracing::debug!(?cli, "parsed arguments");
    let catalog = Catalog::shared().context("Could not load the sample dataset")?;

    match cli.command {
        Command::Patients {
            name,
            symptoms,
            region,
            ethnicity,
            gender,
            age,
            platelets,
            response,
        } => {
            let query = PatientQuery {
                name,
                filters: PatientFilters {
                    symptoms,
                    region,
                    ethnicity,
                    gender,
                    age_range: age,
                    platelet_range: platelets,
                    treatment_response: response,
                },
            };
            let patients = catalog.search_patients(&query);
            emit(cli.json, &patients, || render::patient_table(&patients))?;
        }
        Command::Cases {
            term,
            disease,
            company,
        } => {
            let query = CaseStudyQuery {
                term,
                disease,
                company,
            };
            let studies = catalog.search_case_studies(&query);
            emit(cli.json, &studies, || render::case_study_list(&studies))?;
        }
        Command::Patient { id } => {
            let patient = catalog
                .find_patient(&id)
                .with_context(|| format!("No record for patient {id}"))?;
            emit(cli.json, patient, || render::patient_detail(patient))?;
        }
        Command::Predict { id, delay_ms } => {
            let patient = catalog
                .find_patient(&id)
                .with_context(|| format!("No record for patient {id}"))?;

            let mut config = PearlConfig::default();
            if let Some(delay_ms) = delay_ms {
                config.analysis_delay_ms = delay_ms;
            }

            let phase = PredictionPhase::default().start(&patient.id)?;
            if !cli.json {
                eprintln!("Analyzing {}...", patient.name);
            }
            wait(config.analysis_delay());

            let phase = phase.finish();
            let Some(prediction) = phase.prediction() else {
                bail!("Prediction for {id} did not complete");
            };
            emit(cli.json, prediction, || render::prediction(prediction))?;
        }
        Command::Trends { id: None } => {
            let analyses = catalog.trend_analyses();
            emit(cli.json, analyses, || render::trend_list(analyses))?;
        }
        Command::Trends { id: Some(id) } => {
            let Some(analysis) = catalog.find_trend(&id) else {
                bail!("No trend analysis with id {id}");
            };
            emit(cli.json, analysis, || {
                pearl_catalog::insights::trend_report(analysis)
            })?;
        }
    }

    Ok(())
}

fn emit<T: Serialize + ?Sized>(
    json: bool,
    value: &T,
    text: impl FnOnce() -> String,
) -> anyhow::Result<()> {
    if json {
        let out = serde_json::to_string_pretty(value).context("Could not encode JSON output")?;
        println!("{out}");
    } else {
        print!("{}", text());
    }
    Ok(())
}

fn wait(delay: Duration) {
    if !delay.is_zero() {
        thread::sleep(delay);
    }
}

fn parse_gender(value: &str) -> Result<Gender, String> {
    Gender::ALL
        .into_iter()
        .find(|gender| gender.label().eq_ignore_ascii_case(value))
        .ok_or_else(|| format!("unknown gender '{value}', expected Male, Female or Other"))
}

fn parse_response(value: &str) -> Result<TreatmentResponse, String> {
    TreatmentResponse::ALL
        .into_iter()
        .find(|response| response.label().eq_ignore_ascii_case(value))
        .ok_or_else(|| format!("unknown treatment response '{value}'"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn patient_filters_parse_from_arguments() {
        let cli = Cli::try_parse_from([
            "pearl-cli",
            "patients",
            "--symptom",
            "Fatigue",
            "--symptom",
            "Petechiae",
            "--gender",
            "female",
            "--platelets",
            "20,000-90,000",
            "--response",
            "Good",
        ])
        .unwrap();

        match cli.command {
            Command::Patients {
                symptoms,
                gender,
                platelets,
                response,
                ..
            } => {
                assert_eq!(symptoms, ["Fatigue", "Petechiae"]);
                assert_eq!(gender, [Gender::Female]);
                assert_eq!(platelets, Some(RangeFilter::new(20_000, 90_000)));
                assert_eq!(response, [TreatmentResponse::Good]);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn malformed_range_is_rejected() {
        assert!(Cli::try_parse_from(["pearl-cli", "patients", "--age", "40"]).is_err());
        assert!(Cli::try_parse_from(["pearl-cli", "patients", "--gender", "robot"]).is_err());
    }

    #[test]
    fn trends_id_is_optional() {
        let cli = Cli::try_parse_from(["pearl-cli", "trends", "--json"]).unwrap();
        assert!(cli.json);
        assert!(matches!(cli.command, Command::Trends { id: None }));
    }
}
