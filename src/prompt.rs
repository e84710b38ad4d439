//! Prompt assembly for the executive freight analysis.
//!
//! The template content (Portuguese, Markdown output, three short
//! paragraphs) is a fixed product decision and must not drift from what
//! the dashboard's users already see.

use crate::records::CteRecord;

/// How many records go into the prompt sample.
///
/// Fixed cap, deliberately not a configuration knob: it bounds token
/// spend and keeps latency and cost predictable per call.
pub const SAMPLE_CAP: usize = 30;

/// Role line that opens every prompt.
pub const CONSULTANT_ROLE: &str = "Atue como Consultor Logístico Sênior.";

/// Instruction block closing the prompt.
pub const EXECUTIVE_BRIEF: &str = "Gere uma análise executiva em Markdown (máx 3 parágrafos curtos):\n\
1. Identifique o maior gargalo atual.\n\
2. Sugira uma ação imediata para a equipe.\n\
3. Estime o impacto financeiro se resolvido.";

/// Render one record as a compact pipe-delimited sample line.
fn record_line(record: &CteRecord) -> String {
    format!(
        "CTE:{}|St:{}|Val:{}|Unit:{}",
        record.cte_number, record.status, record.value, record.delivery_unit
    )
}

/// Serialize the first [`SAMPLE_CAP`] records, one line each.
///
/// Input order is preserved; fewer records simply produce fewer lines.
pub fn sample_summary(records: &[CteRecord]) -> String {
    records
        .iter()
        .take(SAMPLE_CAP)
        .map(record_line)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Assemble the full analysis prompt from context and sample summary.
pub fn build_analysis_prompt(context: &str, summary: &str) -> String {
    format!(
        "{CONSULTANT_ROLE}\nContexto: {context}\n\nDados de Amostra (Top {SAMPLE_CAP}):\n{summary}\n\n{EXECUTIVE_BRIEF}\n"
    )
}
