//! Human-readable output formatting

use chrono::{DateTime, Utc};

use conversation_core::{parse_timestamp, Match, SearchResponse};
use conversation_db::DbStats;
use conversation_indexer::IndexStats;

use super::colors::*;

/// Creation time as `Jan 2, 2006 at 3:04 PM`; unparsable text is shown as is
pub fn format_created(timestamp: &str) -> String {
    match parse_timestamp(timestamp) {
        Ok(t) => format_datetime(&t),
        Err(_) => timestamp.to_string(),
    }
}

fn format_datetime(t: &DateTime<Utc>) -> String {
    t.format("%b %-d, %Y at %-I:%M %p").to_string()
}

/// Format one numbered search result
pub fn format_match(index: usize, m: &Match) -> String {
    [
        format!("{}. {}: {}", index, label("UUID"), colored_uuid(&m.uuid)),
        format!("   {}: {}", label("Project"), colored_project(&m.project_path)),
        format!("   {}: {}", label("Created"), value(&format_created(&m.created_at))),
        format!("   {}: {}", label("Messages"), format_count(m.message_count)),
        format!("   {}: {}", label("Summary"), m.summary),
        format!("   {}: {}", label("Relevance"), colored_score(m.relevance_score)),
    ]
    .join("\n")
}

/// Format a full search response
pub fn format_response(response: &SearchResponse) -> String {
    let mut out = format!(
        "Found {} conversation(s) matching \"{}\"\n\n",
        response.total_matches, response.query
    );

    if response.matches.is_empty() {
        out.push_str("No matches found.\n");
        return out;
    }

    for (i, m) in response.matches.iter().enumerate() {
        out.push_str(&format_match(i + 1, m));
        out.push_str("\n\n");
    }
    out
}

/// Summary of an indexing run, plus a warning line when passes failed
pub fn format_index_stats(stats: &IndexStats) -> String {
    let summary = success(&format!(
        "Indexed {} messages from {} conversations ({} skipped) in {}ms",
        format_count(stats.messages as i64),
        format_count(stats.conversations as i64),
        format_count(stats.skipped as i64),
        stats.elapsed.as_millis()
    ));

    if stats.failed == 0 {
        return summary;
    }
    format!(
        "{}\n{}",
        summary,
        warning(&format!("{} conversation(s) failed to index", stats.failed))
    )
}

/// Store statistics block for `cidx status`
pub fn format_stats(stats: &DbStats) -> String {
    let mut lines = vec![
        header("Index Status"),
        String::new(),
        format!("  {}: {}", label("Database"), stats.db_path.display()),
        format!("  {}: {}", label("Size"), stats.format_size()),
        format!("  {}: {}", label("Version"), value(&stats.version.to_string())),
        String::new(),
        format!("  {}: {}", label("Conversations"), format_count(stats.conversation_count)),
        format!("  {}: {}", label("Messages"), format_count(stats.message_count)),
        format!("  {}: {}", label("Tracked files"), format_count(stats.index_state_count)),
    ];

    if let Some(last) = &stats.last_indexed {
        lines.push(String::new());
        lines.push(format!(
            "  {}: {}",
            label("Last indexed"),
            value(&format_created(last))
        ));
    }

    lines.join("\n")
}
