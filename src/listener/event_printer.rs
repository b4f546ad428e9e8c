use super::*;

// Prints every applied action, plus a full board snapshot on deal and at
// game end.
#[derive(Debug)]
pub struct EventPrinter;

impl EventPrinter {
    pub fn new() -> Self {
        Self {}
    }
}

impl Listener for EventPrinter {
    fn notify_action(&mut self, state: &GameState, action: &Action) {
        match action {
            Action::Deal { seed } => {
                println!("=== deal (seed: {}) ===", seed);
                println!("{}", state);
            }
            Action::PassCharleston { .. } => {
                println!(
                    "{} (round: {}, next seat: {})",
                    action, state.charleston_round, state.charleston_seat
                );
            }
            _ => {
                println!("seat {}: {}", state.turn, action);
            }
        }
        if state.phase == Phase::GameOver {
            println!("=== game over ===");
            println!("{}", state);
            match state.winner {
                Some(w) => println!("winner: seat {}", w),
                None => println!("no winner"),
            }
        }
    }
}
