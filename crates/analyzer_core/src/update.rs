use crate::{AnalysisReport, AppState, Effect, Msg};

/// Static assistant reply to a text-only send. Text-only sends never reach
/// the gateway.
pub const HELP_TEXT: &str = "Hello! I am your data analysis assistant.\n\
\n\
What I can do:\n\
- Analyze spreadsheets (CSV/Excel) to detect outlier rows\n\
- Extract numeric data from images\n\
\n\
How to use it:\n\
1. Attach a file with /attach <path>\n\
2. Press Enter to send it for analysis\n\
3. Review the summary and download the result";

/// Draft text generated when a file is picked. A submission is either
/// file-bearing or text-only, never silently both.
pub fn attachment_placeholder(name: &str) -> String {
    format!("Analyze file: {name}")
}

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::InputChanged(text) => {
            state.set_pending_text(text);
            Vec::new()
        }
        Msg::FileChosen { path, name } => {
            let placeholder = attachment_placeholder(&name);
            state.set_pending_attachment(crate::Attachment { path, name });
            state.set_pending_text(placeholder);
            Vec::new()
        }
        Msg::SendRequested { at } => {
            // Single-slot admission control: a send while one is already
            // outstanding is dropped, never queued.
            if state.is_sending() {
                return (state, Vec::new());
            }
            let draft_text = state.draft().pending_text.clone();
            let attachment = state.draft().pending_attachment.clone();
            if draft_text.trim().is_empty() && attachment.is_none() {
                return (state, Vec::new());
            }

            match attachment {
                Some(attachment) => {
                    let content = if draft_text.trim().is_empty() {
                        attachment_placeholder(&attachment.name)
                    } else {
                        draft_text
                    };
                    state.append_user(content, &at, Some(attachment.name.clone()));
                    state.clear_pending_text();
                    let submission_id = state.begin_submission();
                    vec![Effect::SubmitForAnalysis {
                        submission_id,
                        attachment,
                    }]
                }
                None => {
                    state.append_user(draft_text, &at, None);
                    state.append_assistant(HELP_TEXT.to_string(), &at, None);
                    state.reset_draft();
                    Vec::new()
                }
            }
        }
        Msg::AnalysisCompleted {
            submission_id,
            report,
            at,
        } => {
            if state.draft().in_flight != Some(submission_id) {
                // Stale or unknown submission; the single-slot guard makes
                // this unreachable in practice.
                return (state, Vec::new());
            }
            let (content, result_ref) = describe_report(&report);
            state.append_assistant(content, &at, result_ref);
            state.reset_draft();
            Vec::new()
        }
        Msg::AnalysisFailed {
            submission_id,
            message,
            at,
        } => {
            if state.draft().in_flight != Some(submission_id) {
                return (state, Vec::new());
            }
            state.append_assistant(format!("Communication error: {message}"), &at, None);
            state.reset_draft();
            Vec::new()
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

/// Total mapping from a decoded outcome to the assistant message body and
/// optional result token. Every variant produces exactly one message, so
/// the caller's draft reset runs on every completion path.
fn describe_report(report: &AnalysisReport) -> (String, Option<String>) {
    match report {
        AnalysisReport::Outliers {
            detected,
            cleaned_file,
        } => {
            let mut content = format!("Analysis complete.\nOutliers detected: {detected}");
            if let Some(token) = cleaned_file {
                content.push_str(&format!("\nResult file: {token}"));
            }
            content.push_str(
                "\nThe spreadsheet agent flagged the rows that deviate from the rest of your data.",
            );
            (content, cleaned_file.clone())
        }
        AnalysisReport::Extraction {
            extracted,
            extracted_file,
        } => {
            let mut content = format!("Image analysis complete.\nNumbers extracted: {extracted}");
            if let Some(token) = extracted_file {
                content.push_str(&format!("\nResult file: {token}"));
            }
            content.push_str("\nThe image agent pulled numeric values out of your image.");
            (content, extracted_file.clone())
        }
        AnalysisReport::Unclassified => (
            "The analysis finished, but the response did not match any known result shape.\n\
             No result file is available."
                .to_string(),
            None,
        ),
        AnalysisReport::Failure { error } => (format!("Analysis failed: {error}"), None),
    }
}
