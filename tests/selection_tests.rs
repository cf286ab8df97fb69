//! Repository selection tests

use seedpr::utils::selection::{parse_selection, render_menu};
use seedpr::utils::ValidationError;
use seedpr_github::Repository;

fn three_repos() -> Vec<Repository> {
    ["alpha", "beta", "gamma"]
        .iter()
        .map(|name| Repository {
            name: name.to_string(),
            full_name: format!("octocat/{}", name),
        })
        .collect()
}

#[test]
fn test_valid_selections_map_to_zero_based_index() {
    let repos = three_repos();
    assert_eq!(parse_selection("1", repos.len()), Ok(0));
    assert_eq!(parse_selection("2", repos.len()), Ok(1));
    assert_eq!(parse_selection("3", repos.len()), Ok(2));
}

#[test]
fn test_selection_trims_whitespace() {
    assert_eq!(parse_selection("  2\n", 3), Ok(1));
}

#[test]
fn test_zero_and_past_end_are_out_of_range() {
    assert_eq!(
        parse_selection("0", 3),
        Err(ValidationError::SelectionOutOfRange {
            selection: 0,
            count: 3
        })
    );
    assert_eq!(
        parse_selection("4", 3),
        Err(ValidationError::SelectionOutOfRange {
            selection: 4,
            count: 3
        })
    );
}

#[test]
fn test_non_numeric_is_invalid() {
    assert_eq!(
        parse_selection("abc", 3),
        Err(ValidationError::InvalidSelection("abc".to_string()))
    );
    assert!(matches!(
        parse_selection("-1", 3),
        Err(ValidationError::InvalidSelection(_))
    ));
    assert!(matches!(
        parse_selection("1.5", 3),
        Err(ValidationError::InvalidSelection(_))
    ));
}

#[test]
fn test_empty_list_has_nothing_to_select() {
    assert_eq!(parse_selection("1", 0), Err(ValidationError::NoRepositories));
}

#[test]
fn test_menu_matches_selection_numbers() {
    let menu = render_menu(&three_repos());
    let lines: Vec<&str> = menu.lines().collect();

    assert_eq!(
        lines,
        vec!["1. octocat/alpha", "2. octocat/beta", "3. octocat/gamma"]
    );
}
