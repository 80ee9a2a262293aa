//! Loading portfolio content from disk.

use std::fs;
use std::path::Path;

use color_eyre::eyre::WrapErr;
use folio_core::Portfolio;

/// Load the portfolio JSON at `path`.
///
/// With no path configured every section is empty and shows its placeholder.
pub fn load_portfolio(path: Option<&Path>) -> color_eyre::Result<Portfolio> {
    let Some(path) = path else {
        tracing::info!("no content file configured, sections will be empty");
        return Ok(Portfolio::default());
    };

    let raw = fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read content file {}", path.display()))?;
    let portfolio: Portfolio = serde_json::from_str(&raw)
        .wrap_err_with(|| format!("invalid content file {}", path.display()))?;

    tracing::info!(
        path = %path.display(),
        posts = portfolio.posts.len(),
        experiences = portfolio.experiences.len(),
        projects = portfolio.projects.len(),
        skills = portfolio.skills.len(),
        "loaded content"
    );
    Ok(portfolio)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_no_path_is_empty() {
        let portfolio = load_portfolio(None).unwrap();
        assert_eq!(portfolio, Portfolio::default());
    }

    #[test]
    fn test_load_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "skills": [
                    {{"id": "1", "name": "Rust", "category": "Languages", "proficiency": 90}}
                ],
                "experiences": [
                    {{
                        "id": "e1",
                        "position": "Engineer",
                        "company": "Acme",
                        "startDate": "2021-03-01T00:00:00Z",
                        "description": "Built things"
                    }}
                ]
            }}"#
        )
        .unwrap();

        let portfolio = load_portfolio(Some(file.path())).unwrap();
        assert_eq!(portfolio.skills.len(), 1);
        assert_eq!(portfolio.skills[0].name, "Rust");
        assert_eq!(portfolio.experiences[0].period(), "2021 - Present");
        assert!(portfolio.posts.is_empty());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_portfolio(Some(&dir.path().join("nope.json"))).unwrap_err();
        assert!(err.to_string().contains("failed to read content file"));
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();
        let err = load_portfolio(Some(file.path())).unwrap_err();
        assert!(err.to_string().contains("invalid content file"));
    }
}
