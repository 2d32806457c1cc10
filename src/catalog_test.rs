use super::*;

#[test]
fn default_catalog_lists_roleplay_then_admin_commands() {
    let catalog = default_catalog();
    assert_eq!(catalog.len(), 28);
    assert_eq!(catalog[0].command, "/ooc");
    assert_eq!(catalog[8].command, "/duty");
    assert_eq!(catalog[9].command, "/announce");
    assert_eq!(catalog[27].command, "/logout");
}

#[test]
fn default_catalog_admin_entries_share_color() {
    let catalog = default_catalog();
    assert!(catalog[9..].iter().all(|c| c.color == ADMIN_COLOR));
    assert_eq!(catalog[0].color, "#42A5F5");
}

#[test]
fn default_catalog_tokens_start_with_slash() {
    assert!(default_catalog().iter().all(|c| c.command.starts_with('/')));
}

#[test]
fn active_catalog_prefers_host_list() {
    let host = vec![Command::new("/dance", "Dançar", "💃", "#FFFFFF")];
    let active = active_catalog(&host);
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].command, "/dance");
}

#[test]
fn active_catalog_falls_back_when_host_list_empty() {
    let active = active_catalog(&[]);
    assert_eq!(active.len(), default_catalog().len());
}

#[test]
fn command_deserializes_with_missing_optional_fields() {
    let cmd: Command = serde_json::from_value(serde_json::json!({"command": "/fix"})).expect("command");
    assert_eq!(cmd.command, "/fix");
    assert!(cmd.description.is_empty());
    assert!(cmd.icon.is_empty());
}
