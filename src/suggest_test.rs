use super::*;
use crate::catalog::default_catalog;

fn tokens(found: &[&Command]) -> Vec<String> {
    found.iter().map(|c| c.command.clone()).collect()
}

#[test]
fn suggest_requires_slash_and_two_chars() {
    assert!(suggest("", default_catalog()).is_empty());
    assert!(suggest("/", default_catalog()).is_empty());
    assert!(suggest("tp", default_catalog()).is_empty());
    assert!(suggest("hello /tp", default_catalog()).is_empty());
}

#[test]
fn suggest_matches_token_prefix() {
    let found = suggest("/tp", default_catalog());
    assert!(tokens(&found).contains(&"/tp".to_owned()));
}

#[test]
fn suggest_no_match_is_empty() {
    assert!(suggest("/xx", default_catalog()).is_empty());
}

#[test]
fn suggest_token_match_is_case_insensitive() {
    let found = suggest("/GIVE", default_catalog());
    assert_eq!(tokens(&found), vec!["/giveitem", "/givemoney"]);
}

#[test]
fn suggest_matches_description_substring() {
    let found = suggest("/jogador", default_catalog());
    assert_eq!(
        tokens(&found),
        vec!["/tp", "/bring", "/revive", "/heal", "/kick", "/ban", "/logout"]
    );
}

#[test]
fn suggest_preserves_catalog_order() {
    let catalog = vec![
        Command::new("/zeta", "last letter", "z", "#fff"),
        Command::new("/alpha", "first zeta-like", "a", "#fff"),
    ];
    let found = suggest("/zeta", &catalog);
    assert_eq!(tokens(&found), vec!["/zeta", "/alpha"]);
}

#[test]
fn suggest_mixed_token_and_description_hits() {
    let found = suggest("/me", default_catalog());
    // "/me", "/mec" by token; "Mensagem..." by description.
    assert_eq!(tokens(&found), vec!["/ooc", "/me", "/mec"]);
}

#[test]
fn completion_appends_space() {
    let cmd = Command::new("/tp", "Teleportar para jogador [id]", "⚡", "#FF5555");
    assert_eq!(completion(&cmd), "/tp ");
}
