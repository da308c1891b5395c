use arena_core::{ArenaConfig, Ballistics, Team, Vec3};

/// Static match facts injected into every tactic at assembly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Field {
    pub arena: ArenaConfig,
    pub ballistics: Ballistics,
    pub team: Team,
}

impl Field {
    pub fn new(arena: ArenaConfig, ballistics: Ballistics, team: Team) -> Self {
        Self {
            arena,
            ballistics,
            team,
        }
    }

    /// Sign of `y` on our own half.
    pub fn sign(&self) -> f32 {
        self.team.sign()
    }

    pub fn own_goal(&self) -> Vec3 {
        self.arena.own_goal(self.team)
    }

    pub fn opponent_goal(&self) -> Vec3 {
        self.arena.opponent_goal(self.team)
    }
}

impl Default for Field {
    fn default() -> Self {
        Self::new(ArenaConfig::default(), Ballistics::default(), Team::Blue)
    }
}
