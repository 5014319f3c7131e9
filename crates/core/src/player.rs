/// Player slot `0` is Gaia, the neutral world player.
pub const GAIA: i32 = 0;

/// Sentinel for a player-reference field that does not apply to an instance.
pub const NO_PLAYER: i32 = -1;

/// Highest player slot a scenario can address.
pub const MAX_PLAYERS: u8 = 8;

/// The active player slots `1..=n`, Gaia excluded.
pub fn active_player_list(active_players: u8) -> Vec<i32> {
    (1..=i32::from(active_players.min(MAX_PLAYERS))).collect()
}

/// Every addressable player slot, used when no explicit target list is given.
pub fn default_copy_players() -> Vec<i32> {
    active_player_list(MAX_PLAYERS)
}
