use crate::player::PlayerId;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::South => "south",
            Direction::East => "east",
            Direction::West => "west",
        }
    }
}

/// What to do this tick. Move and shoot carry their direction so an action
/// without one where one is required cannot be constructed.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ActionKind {
    Move(Direction),
    Shoot(Direction),
    Shield,
}

impl ActionKind {
    pub fn verb(self) -> &'static str {
        match self {
            ActionKind::Move(_) => "move",
            ActionKind::Shoot(_) => "shoot",
            ActionKind::Shield => "shield",
        }
    }

    pub fn direction(self) -> Option<Direction> {
        match self {
            ActionKind::Move(direction) | ActionKind::Shoot(direction) => Some(direction),
            ActionKind::Shield => None,
        }
    }
}

/// One turn submission, constructed fresh each tick and never mutated.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Action {
    pub kind: ActionKind,
    pub support: Option<PlayerId>,
}

impl Action {
    pub fn new(kind: ActionKind) -> Self {
        Self {
            kind,
            support: None,
        }
    }

    #[must_use]
    pub fn with_support(mut self, player: PlayerId) -> Self {
        self.support = Some(player);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_is_present_exactly_for_move_and_shoot() {
        for direction in Direction::ALL {
            assert_eq!(
                ActionKind::Move(direction).direction(),
                Some(direction)
            );
            assert_eq!(
                ActionKind::Shoot(direction).direction(),
                Some(direction)
            );
        }

        assert_eq!(ActionKind::Shield.direction(), None);
    }
}
