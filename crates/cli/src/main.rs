use clap::{Parser, Subcommand};
use dosha_core::{
    config::model_path_from_env_value, loader::load_model, recommendation_for, Dosha,
    PredictionService, MODEL_PATH_ENV,
};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "dosha")]
#[command(about = "Dosha prediction CLI")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Predict a dosha from free-text symptoms
    Predict {
        /// Symptom description
        symptoms: String,
        /// Classifier artifact path (defaults to DOSHA_MODEL_PATH or the bundled model)
        #[arg(long)]
        model: Option<PathBuf>,
    },
    /// Show the recommendation for a dosha
    Recommend {
        /// Dosha label (vata, pitta, kapha, vata-pitta)
        dosha: String,
    },
    /// List the labels a classifier can predict
    Labels {
        /// Classifier artifact path (defaults to DOSHA_MODEL_PATH or the bundled model)
        #[arg(long)]
        model: Option<PathBuf>,
    },
}

fn resolve_model_path(model: Option<PathBuf>) -> PathBuf {
    model.unwrap_or_else(|| model_path_from_env_value(std::env::var(MODEL_PATH_ENV).ok()))
}

fn load_service(model: Option<PathBuf>) -> Result<PredictionService, Box<dyn std::error::Error>> {
    let path = resolve_model_path(model);
    let classifier = load_model(&path)?;
    Ok(PredictionService::new(Arc::new(classifier)))
}

/// Model labels split by whether they have a recommendation entry.
struct LabelReport {
    labels: Vec<String>,
    unknown: Vec<String>,
}

impl LabelReport {
    fn new(service: &PredictionService) -> Self {
        Self {
            labels: service.labels(),
            unknown: service.unknown_labels(),
        }
    }

    fn lines(&self) -> Vec<String> {
        self.labels
            .iter()
            .map(|label| {
                if self.unknown.contains(label) {
                    format!("{label} (no recommendation)")
                } else {
                    label.clone()
                }
            })
            .collect()
    }

    /// Whether every label the model can emit has a recommendation.
    fn is_complete(&self) -> bool {
        self.unknown.is_empty()
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Predict { symptoms, model }) => {
            let service = load_service(model)?;
            let prediction = service.predict(&symptoms)?;
            println!("{}", serde_json::to_string_pretty(&prediction)?);
        }
        Some(Commands::Recommend { dosha }) => {
            let dosha: Dosha = dosha.parse()?;
            println!(
                "{}",
                serde_json::to_string_pretty(recommendation_for(dosha))?
            );
        }
        Some(Commands::Labels { model }) => {
            let service = load_service(model)?;
            let report = LabelReport::new(&service);
            for line in report.lines() {
                println!("{line}");
            }
            if !report.is_complete() {
                eprintln!(
                    "{} label(s) have no recommendation entry",
                    report.unknown.len()
                );
                std::process::exit(1);
            }
        }
        None => {
            println!("Use 'dosha --help' for commands");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use dosha_core::{Classifier, DoshaResult};

    struct LabelsOnly(Vec<&'static str>);

    impl Classifier for LabelsOnly {
        fn predict(&self, inputs: &[&str]) -> DoshaResult<Vec<String>> {
            Ok(inputs.iter().map(|_| self.0[0].to_string()).collect())
        }

        fn labels(&self) -> Vec<String> {
            self.0.iter().map(|l| l.to_string()).collect()
        }
    }

    fn report(labels: Vec<&'static str>) -> LabelReport {
        LabelReport::new(&PredictionService::new(Arc::new(LabelsOnly(labels))))
    }

    #[test]
    fn test_label_report_complete_for_known_doshas() {
        let report = report(vec!["vata", "pitta", "kapha", "vata-pitta"]);
        assert!(report.is_complete());
        assert_eq!(report.lines(), vec!["vata", "pitta", "kapha", "vata-pitta"]);
    }

    #[test]
    fn test_label_report_flags_labels_without_recommendation() {
        let report = report(vec!["vata", "sama", "kapha"]);
        assert!(!report.is_complete());
        assert_eq!(
            report.lines(),
            vec!["vata", "sama (no recommendation)", "kapha"]
        );
    }

    #[test]
    fn test_resolve_model_path_prefers_explicit_argument() {
        let path = resolve_model_path(Some(PathBuf::from("/srv/models/dosha.yaml")));
        assert_eq!(path, PathBuf::from("/srv/models/dosha.yaml"));
    }

    #[test]
    fn test_bundled_model_has_complete_labels() {
        let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("../..")
            .join(dosha_core::DEFAULT_MODEL_PATH);
        let service = load_service(Some(path)).unwrap();
        assert!(LabelReport::new(&service).is_complete());
    }
}
