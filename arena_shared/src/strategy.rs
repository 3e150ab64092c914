use std::ops::DerefMut;

use crate::{action::Action, status::Status};

/// Maps one observed snapshot to one action.
///
/// Conceptually a pure function: it must not block and must not retain
/// mutable state across calls, with an internal randomness source as the
/// only permitted exception (hence `&mut self`).
pub trait Strategy {
    fn choose_action(&mut self, status: &Status) -> Action;
}

impl Strategy for Box<dyn Strategy + Send> {
    fn choose_action(&mut self, status: &Status) -> Action {
        self.deref_mut().choose_action(status)
    }
}
