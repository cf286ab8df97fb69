//! Repository menu and selection

use super::validators::ValidationError;
use anyhow::{Context, Result};
use seedpr_github::Repository;
use std::io::{BufRead, Write};

/// Render a 1-based numbered menu, one repository per line
pub fn render_menu(repositories: &[Repository]) -> String {
    repositories
        .iter()
        .enumerate()
        .map(|(index, repo)| format!("{}. {}\n", index + 1, repo.full_name))
        .collect()
}

/// Turn a 1-based menu selection into a list index
///
/// # Errors
/// - [`ValidationError::NoRepositories`] if there is nothing to choose from
/// - [`ValidationError::InvalidSelection`] if the input is not a number
/// - [`ValidationError::SelectionOutOfRange`] if the number is not on the menu
pub fn parse_selection(input: &str, count: usize) -> Result<usize, ValidationError> {
    if count == 0 {
        return Err(ValidationError::NoRepositories);
    }

    let input = input.trim();
    let selection: usize = input
        .parse()
        .map_err(|_| ValidationError::InvalidSelection(input.to_string()))?;

    if selection == 0 || selection > count {
        return Err(ValidationError::SelectionOutOfRange { selection, count });
    }

    Ok(selection - 1)
}

/// Prompt for a selection and read a single line
pub fn prompt_selection<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    count: usize,
) -> Result<usize> {
    write!(writer, "Select a repository (1-{}): ", count)?;
    writer.flush()?;

    let mut line = String::new();
    reader
        .read_line(&mut line)
        .context("Failed to read selection")?;

    Ok(parse_selection(&line, count)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn repo(name: &str) -> Repository {
        Repository {
            name: name.to_string(),
            full_name: format!("octocat/{}", name),
        }
    }

    #[test]
    fn test_render_menu() {
        let menu = render_menu(&[repo("one"), repo("two")]);
        assert_eq!(menu, "1. octocat/one\n2. octocat/two\n");
    }

    #[test]
    fn test_render_empty_menu() {
        assert_eq!(render_menu(&[]), "");
    }

    #[test]
    fn test_prompt_selection_reads_one_line() {
        let mut input = Cursor::new("2\n3\n");
        let mut output = Vec::new();

        let index = prompt_selection(&mut input, &mut output, 3).unwrap();

        assert_eq!(index, 1);
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "Select a repository (1-3): "
        );
    }

    #[test]
    fn test_prompt_selection_eof() {
        let mut input = Cursor::new("");
        let mut output = Vec::new();

        let error = prompt_selection(&mut input, &mut output, 3).unwrap_err();
        assert_eq!(
            error.downcast_ref::<ValidationError>(),
            Some(&ValidationError::InvalidSelection(String::new()))
        );
    }
}
