use arena_shared::{
    action::{Action, ActionKind, Direction},
    status::Status,
    strategy::Strategy,
};
use rand::prelude::SliceRandom;

/// The reference strategy: ignores the snapshot and picks uniformly among
/// five slots {move, move, move, shoot, shield}, so moving is three times
/// as likely as either combat action.
pub struct RandomStrategy<R: rand::Rng> {
    rng: R,
}

impl<R: rand::Rng> RandomStrategy<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    fn direction(&mut self) -> Direction {
        *Direction::ALL.choose(&mut self.rng).unwrap()
    }
}

impl<R: rand::Rng> Strategy for RandomStrategy<R> {
    fn choose_action(&mut self, _: &Status) -> Action {
        let kind = match self.rng.gen_range(0..5u8) {
            0..=2 => ActionKind::Move(self.direction()),
            3 => ActionKind::Shoot(self.direction()),
            _ => ActionKind::Shield,
        };

        Action::new(kind)
    }
}
