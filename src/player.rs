use std::{hash::Hash, path::PathBuf};

/// Handle to one discovered player: its name and the persisted policy
/// artifact backing it.
///
/// Handles are created during discovery and immutable afterwards. They are
/// shared as `Arc<PlayerHandle>` between the registry and the simulation;
/// the simulation borrows the roster for the duration of one round.
#[derive(Debug, Clone)]
pub struct PlayerHandle {
    /// Unique name, derived from the player's source folder.
    pub name: String,
    /// Path to the persisted policy artifact backing this player.
    pub model_path: PathBuf,
}

impl PartialEq for PlayerHandle {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for PlayerHandle {}

impl Hash for PlayerHandle {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl PlayerHandle {
    /// Creates a handle from a player name and the path to its artifact.
    pub fn new(name: String, model_path: PathBuf) -> PlayerHandle {
        PlayerHandle { name, model_path }
    }
}
