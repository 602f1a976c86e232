use std::sync::{mpsc, Arc, Mutex};
use std::thread;

use analyzer_logging::{analyzer_info, analyzer_warn};

use crate::submit::{GatewaySettings, ReqwestSubmitter, Submitter};
use crate::{Attachment, GatewayEvent, SubmissionId};

enum GatewayCommand {
    Submit {
        submission_id: SubmissionId,
        attachment: Attachment,
    },
}

/// Bridge between the synchronous app loop and the async submitter: a
/// background thread owns a tokio runtime, commands and events cross over
/// std mpsc channels.
pub struct GatewayHandle {
    cmd_tx: mpsc::Sender<GatewayCommand>,
    event_rx: Mutex<mpsc::Receiver<GatewayEvent>>,
}

impl GatewayHandle {
    pub fn new(settings: GatewaySettings) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let submitter = Arc::new(ReqwestSubmitter::new(settings));

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let submitter = submitter.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(submitter.as_ref(), command, event_tx).await;
                });
            }
        });

        Self {
            cmd_tx,
            event_rx: Mutex::new(event_rx),
        }
    }

    pub fn submit(&self, submission_id: SubmissionId, attachment: Attachment) {
        let _ = self.cmd_tx.send(GatewayCommand::Submit {
            submission_id,
            attachment,
        });
    }

    pub fn try_recv(&self) -> Option<GatewayEvent> {
        self.event_rx.lock().ok()?.try_recv().ok()
    }
}

async fn handle_command(
    submitter: &dyn Submitter,
    command: GatewayCommand,
    event_tx: mpsc::Sender<GatewayEvent>,
) {
    match command {
        GatewayCommand::Submit {
            submission_id,
            attachment,
        } => {
            analyzer_info!(
                "submission {} started: {:?}",
                submission_id,
                attachment.filename
            );
            let result = submitter.submit(submission_id, &attachment).await;
            if let Err(err) = &result {
                analyzer_warn!("submission {} failed: {}", submission_id, err);
            }
            let _ = event_tx.send(GatewayEvent::SubmissionCompleted {
                submission_id,
                result,
            });
        }
    }
}
