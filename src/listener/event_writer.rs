use serde::Serialize;

use super::*;
use crate::error;
use crate::util::misc::{unixtime_now, write_to_file};

#[derive(Serialize)]
struct Record<'a> {
    action: &'a Action,
    phase: Phase,
    turn: Seat,
    wall: usize,
}

// Records one JSON line per applied action and writes the log when the
// game ends (or on drop, for games cut short).
#[derive(Debug)]
pub struct EventWriter {
    path: String,
    records: Vec<String>,
}

impl EventWriter {
    pub fn new() -> Self {
        Self::with_path(&format!("data/{}.jsonl", unixtime_now() as u64))
    }

    pub fn with_path(path: &str) -> Self {
        Self {
            path: path.to_string(),
            records: vec![],
        }
    }

    fn flush(&mut self) {
        if self.records.is_empty() {
            return;
        }
        let data = self.records.join("\n") + "\n";
        if let Err(e) = write_to_file(&self.path, &data) {
            error!("failed to write {}: {}", self.path, e);
        }
        self.records.clear();
    }
}

impl Listener for EventWriter {
    fn notify_action(&mut self, state: &GameState, action: &Action) {
        let record = Record {
            action,
            phase: state.phase,
            turn: state.turn,
            wall: state.wall.len(),
        };
        match serde_json::to_string(&record) {
            Ok(line) => self.records.push(line),
            Err(e) => error!("failed to encode record: {}", e),
        }
        if state.phase == Phase::GameOver {
            self.flush();
        }
    }
}

impl Drop for EventWriter {
    fn drop(&mut self) {
        self.flush();
    }
}
