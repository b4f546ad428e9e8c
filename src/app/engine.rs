use crate::actor::{create_actor, Actor};
use crate::control::GameEngine;
use crate::error;
use crate::info;
use crate::listener::{EventPrinter, EventWriter, Listener};
use crate::model::*;
use crate::util::misc::*;

// [App] bot selfplay
#[derive(Debug)]
pub struct EngineApp {
    seed: u64,
    pause: f64,
    write: bool,
    quiet: bool,
    names: [String; SEAT], // actor names
}

impl EngineApp {
    pub fn new(args: Vec<String>) -> Self {
        let mut app = Self {
            seed: 0,
            pause: 0.0,
            write: false,
            quiet: false,
            names: [
                "Heuristic".into(),
                "Heuristic".into(),
                "Heuristic".into(),
                "Heuristic".into(),
            ],
        };

        let mut it = args.iter();
        while let Some(s) = it.next() {
            match s.as_str() {
                "-s" => app.seed = next_value(&mut it, s),
                "-p" => app.pause = next_value(&mut it, s),
                "-w" => app.write = true,
                "-q" => app.quiet = true,
                "-0" => app.names[0] = next_value(&mut it, s),
                "-1" => app.names[1] = next_value(&mut it, s),
                "-2" => app.names[2] = next_value(&mut it, s),
                "-3" => app.names[3] = next_value(&mut it, s),
                opt => {
                    error!("unknown option: {}", opt);
                    std::process::exit(1);
                }
            }
        }

        if app.seed == 0 {
            app.seed = unixtime_now() as u64;
            info!(
                "random seed not specified, using unix timestamp '{}'",
                app.seed
            );
        }

        app
    }

    pub fn run(self) {
        println!("seed: {}", self.seed);

        let actors = [
            create_actor(&self.names[0]),
            create_actor(&self.names[1]),
            create_actor(&self.names[2]),
            create_actor(&self.names[3]),
        ];
        for s in 0..SEAT {
            println!("actor{}: {:?}", s, actors[s]);
        }
        println!();

        let mut listeners: Vec<Box<dyn Listener>> = vec![];
        if !self.quiet {
            listeners.push(Box::new(EventPrinter::new()));
        }
        if self.write {
            listeners.push(Box::new(EventWriter::new()));
        }

        let mut engine = GameEngine::new(self.seed, self.pause, actors, listeners);
        match engine.run() {
            Some(winner) => println!("result: seat {} wins", winner),
            None => println!("result: drawn game"),
        }
    }
}
