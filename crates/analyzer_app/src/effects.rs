use std::path::PathBuf;
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use analyzer_core::{AnalysisReport, Effect, Msg};
use analyzer_gateway::{
    AnalysisOutcome, Attachment, GatewayEvent, GatewayHandle, GatewaySettings,
};
use analyzer_logging::analyzer_info;
use chrono::Local;

use crate::config::AppConfig;

pub struct EffectRunner {
    gateway: Arc<GatewayHandle>,
}

impl EffectRunner {
    pub fn new(config: &AppConfig, msg_tx: mpsc::Sender<Msg>) -> Self {
        let settings = GatewaySettings::new(config.base_url.clone());
        let gateway = Arc::new(GatewayHandle::new(settings));
        let runner = Self { gateway };
        runner.spawn_event_loop(msg_tx);
        runner
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::SubmitForAnalysis {
                    submission_id,
                    attachment,
                } => {
                    analyzer_info!(
                        "SubmitForAnalysis submission_id={} file={}",
                        submission_id,
                        attachment.name
                    );
                    self.gateway.submit(
                        submission_id,
                        Attachment {
                            path: PathBuf::from(attachment.path),
                            filename: attachment.name,
                        },
                    );
                }
            }
        }
    }

    fn spawn_event_loop(&self, msg_tx: mpsc::Sender<Msg>) {
        let gateway = self.gateway.clone();
        thread::spawn(move || loop {
            if let Some(event) = gateway.try_recv() {
                match event {
                    GatewayEvent::SubmissionCompleted {
                        submission_id,
                        result,
                    } => {
                        let at = timestamp();
                        let msg = match result {
                            Ok(outcome) => Msg::AnalysisCompleted {
                                submission_id,
                                report: map_outcome(outcome),
                                at,
                            },
                            Err(err) => Msg::AnalysisFailed {
                                submission_id,
                                message: err.to_string(),
                                at,
                            },
                        };
                        let _ = msg_tx.send(msg);
                    }
                }
            } else {
                thread::sleep(Duration::from_millis(20));
            }
        });
    }
}

/// Display timestamp for new messages. Ordering never depends on it.
pub fn timestamp() -> String {
    Local::now().format("%H:%M:%S").to_string()
}

fn map_outcome(outcome: AnalysisOutcome) -> AnalysisReport {
    match outcome {
        AnalysisOutcome::Outliers {
            detected,
            cleaned_file,
        } => AnalysisReport::Outliers {
            detected,
            cleaned_file,
        },
        AnalysisOutcome::Extraction {
            extracted,
            extracted_file,
        } => AnalysisReport::Extraction {
            extracted,
            extracted_file,
        },
        AnalysisOutcome::Unclassified => AnalysisReport::Unclassified,
        AnalysisOutcome::Failure { error } => AnalysisReport::Failure { error },
    }
}
