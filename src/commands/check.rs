use serde::Serialize;
use tabled::Tabled;
use url::Url;

use crate::cli::InputArgs;
use crate::error::{MediaError, Result};
use crate::output::{self, truncate};
use crate::types::TwitterMedia;

/// A present URL field that is not a usable http(s) URL.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct UrlProblem {
    pub field: &'static str,
    pub value: String,
    pub reason: String,
}

#[derive(Serialize)]
struct Finding {
    index: usize,
    #[serde(flatten)]
    problem: UrlProblem,
}

#[derive(Tabled)]
struct FindingRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Field")]
    field: &'static str,
    #[tabled(rename = "Value")]
    value: String,
    #[tabled(rename = "Problem")]
    reason: String,
}

fn inspect_field(field: &'static str, value: Option<&str>) -> Option<UrlProblem> {
    let value = value?;

    let reason = match Url::parse(value) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => return None,
        Ok(url) => format!("unsupported scheme '{}'", url.scheme()),
        Err(e) => e.to_string(),
    };

    Some(UrlProblem {
        field,
        value: value.to_string(),
        reason,
    })
}

/// Problems with the URLs present on `media`. Absent fields are fine.
pub fn inspect(media: &TwitterMedia) -> Vec<UrlProblem> {
    [
        inspect_field("media_url", media.media_url()),
        inspect_field("url", media.url()),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// Problems across all records, tagged with the 1-based record index.
fn collect_findings(media: &[TwitterMedia]) -> Vec<Finding> {
    media
        .iter()
        .enumerate()
        .flat_map(|(i, item)| {
            inspect(item)
                .into_iter()
                .map(move |problem| Finding { index: i + 1, problem })
        })
        .collect()
}

fn ensure_valid(findings: &[Finding]) -> Result<()> {
    if findings.is_empty() {
        Ok(())
    } else {
        Err(MediaError::InvalidUrls {
            count: findings.len(),
        })
    }
}

pub fn check(args: InputArgs) -> Result<()> {
    let media = super::load_media(&args)?;

    let findings = collect_findings(&media);

    if findings.is_empty() {
        output::print_message(&output::success(&format!(
            "All URLs valid in {} media attachment{}.",
            media.len(),
            if media.len() == 1 { "" } else { "s" }
        )));
        return Ok(());
    }

    if !output::is_quiet() {
        output::print_table(&findings, |_, finding| FindingRow {
            index: finding.index,
            field: finding.problem.field,
            value: truncate(&finding.problem.value, 50),
            reason: finding.problem.reason.clone(),
        });
    }

    ensure_valid(&findings)
}
