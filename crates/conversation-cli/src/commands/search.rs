//! Search command - ranked full-text search across conversations

use anyhow::{Context, Result};

use conversation_core::{encode_project_path, Config, SearchRequest, SearchScope};
use conversation_db::ConversationDb;

use crate::cli::{Cli, OutputFormat, ScopeArg};
use crate::output::{human, json};

pub fn run(
    cli: &Cli,
    config: &Config,
    query: &str,
    scope: ScopeArg,
    project: Option<&str>,
    limit: usize,
) -> Result<()> {
    let scope = resolve_scope(scope, project)?;
    let request = SearchRequest::new(query, scope).with_limit(limit);

    let db = ConversationDb::open_with_config(config).context("Cannot search (run: cidx index)")?;
    let response = db.search_response(&request)?;

    match cli.format {
        OutputFormat::Human => print!("{}", human::format_response(&response)),
        OutputFormat::Json => println!("{}", json::pretty(&response)?),
    }

    Ok(())
}

/// Turn the scope flags into a search scope
///
/// The current-project scope is keyed by the encoded project path, the same
/// token the transcripts' directory is named after.
fn resolve_scope(scope: ScopeArg, project: Option<&str>) -> Result<SearchScope> {
    match scope {
        ScopeArg::AllProjects => Ok(SearchScope::AllProjects),
        ScopeArg::CurrentProject => {
            let path = match project {
                Some(p) => p.to_string(),
                None => std::env::current_dir()
                    .context("Cannot determine the current directory")?
                    .to_string_lossy()
                    .into_owned(),
            };
            Ok(SearchScope::CurrentProject(encode_project_path(&path)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_project_is_encoded() {
        let scope = resolve_scope(ScopeArg::CurrentProject, Some("/Users/dev/my-app")).unwrap();
        assert_eq!(
            scope,
            SearchScope::CurrentProject("-Users-dev-my-app".to_string())
        );
    }

    #[test]
    fn test_all_projects_ignores_project() {
        let scope = resolve_scope(ScopeArg::AllProjects, Some("/Users/dev/app")).unwrap();
        assert_eq!(scope, SearchScope::AllProjects);
    }

    #[test]
    fn test_current_directory_by_default() {
        let cwd = std::env::current_dir().unwrap();
        let scope = resolve_scope(ScopeArg::CurrentProject, None).unwrap();
        assert_eq!(
            scope,
            SearchScope::CurrentProject(encode_project_path(&cwd.to_string_lossy()))
        );
    }
}
