//! Command catalog used for autocomplete.
//!
//! The host may push its own list through the `config` event. When it has
//! not (or pushed an empty list) the built-in roleplay and admin commands
//! below are offered instead. The two lists are never merged.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

const ADMIN_COLOR: &str = "#FF5555";

/// One autocomplete entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Command {
    /// Command token including the leading slash, e.g. `/tp`.
    pub command: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub color: String,
}

impl Command {
    #[must_use]
    pub fn new(command: &str, description: &str, icon: &str, color: &str) -> Self {
        Self {
            command: command.to_owned(),
            description: description.to_owned(),
            icon: icon.to_owned(),
            color: color.to_owned(),
        }
    }
}

static DEFAULT_CATALOG: LazyLock<Vec<Command>> = LazyLock::new(|| {
    let roleplay = [
        ("/ooc", "Mensagem fora do personagem", "💬", "#42A5F5"),
        ("/me", "Descrever uma ação", "🎭", "#BA68C8"),
        ("/do", "Descrever o ambiente/situação", "📝", "#66BB6A"),
        ("/ad", "Anúncio público", "📢", "#C5FF00"),
        ("/tweet", "Publicar no Twitter", "🐦", "#1DA1F2"),
        ("/911", "Chamar a polícia", "🚔", "#4A90D9"),
        ("/ems", "Chamar paramédicos", "🚑", "#FF6B6B"),
        ("/mec", "Chamar mecânico", "🔧", "#FFA500"),
        ("/duty", "Entrar/sair de serviço", "👔", "#2ECC71"),
    ];
    let admin = [
        ("/announce", "Anúncio do sistema (admin)", "📣"),
        ("/clearchat", "Limpar chat (admin)", "🧹"),
        ("/giveitem", "Dar item [id] [item] [qtd]", "🎁"),
        ("/givemoney", "Dar dinheiro [id] [tipo] [qtd]", "💰"),
        ("/removemoney", "Remover dinheiro [id] [tipo] [qtd]", "💸"),
        ("/setjob", "Definir emprego [id] [job] [grau]", "💼"),
        ("/setgang", "Definir gang [id] [gang] [grau]", "🔫"),
        ("/setgroup", "Definir grupo [id] [grupo]", "👑"),
        ("/tp", "Teleportar para jogador [id]", "⚡"),
        ("/bring", "Trazer jogador [id]", "🧲"),
        ("/revive", "Reviver jogador [id]", "❤️"),
        ("/heal", "Curar jogador [id]", "💊"),
        ("/kick", "Expulsar jogador [id] [motivo]", "🚫"),
        ("/ban", "Banir jogador [id] [motivo]", "⛔"),
        ("/addcar", "Adicionar veículo [id] [modelo]", "🚗"),
        ("/delveh", "Apagar veículo [placa]", "🗑️"),
        ("/garageadmin", "Painel admin garagem", "🏗️"),
        ("/clearinventory", "Limpar inventário [id]", "🧹"),
        ("/logout", "Forçar logout jogador", "🚪"),
    ];

    roleplay
        .into_iter()
        .map(|(cmd, desc, icon, color)| Command::new(cmd, desc, icon, color))
        .chain(
            admin
                .into_iter()
                .map(|(cmd, desc, icon)| Command::new(cmd, desc, icon, ADMIN_COLOR)),
        )
        .collect()
});

/// Built-in catalog offered when the host has not supplied one.
#[must_use]
pub fn default_catalog() -> &'static [Command] {
    &DEFAULT_CATALOG
}

/// The catalog in effect: the host list when non-empty, otherwise the default.
#[must_use]
pub fn active_catalog(host: &[Command]) -> &[Command] {
    if host.is_empty() { default_catalog() } else { host }
}
