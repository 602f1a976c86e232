/// Backend analysis outcome, decoded once at the gateway boundary into a
/// closed variant set. The controller maps each variant to exactly one
/// assistant message.
///
/// File tokens stay optional: the payload is external data, and a present
/// count with a missing token still yields a usable summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisReport {
    /// Spreadsheet analysis: outlier rows were flagged.
    Outliers {
        detected: u64,
        cleaned_file: Option<String>,
    },
    /// Image analysis: numeric values were extracted.
    Extraction {
        extracted: u64,
        extracted_file: Option<String>,
    },
    /// Backend claimed success but neither known result shape was present.
    Unclassified,
    /// Backend reported a failure; `error` is surfaced to the user verbatim.
    Failure { error: String },
}
