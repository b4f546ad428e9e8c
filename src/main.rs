#![warn(rust_2018_idioms)]
#![allow(clippy::needless_range_loop)]
#![allow(clippy::single_match)]
#![allow(clippy::vec_init_then_push)]

mod actor;
mod app;
mod control;
mod hand;
mod listener;
mod model;
mod util;

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        print_usage();
        return;
    }

    let args2 = args[2..].to_vec();
    match args[1].as_str() {
        "E" => {
            // Engine (bot selfplay)
            app::EngineApp::new(args2).run();
        }
        "C" => {
            // Calculator (hand validation)
            app::CalculatorApp::new(args2).run();
        }
        m => {
            error!("unknown mode: {}", m);
            print_usage();
        }
    }
}

fn print_usage() {
    println!(
        "usage: american_mahjong MODE [OPTIONS]\n\
         \n\
         modes:\n\
         \x20 E  engine: run a bot selfplay game\n\
         \x20      -s SEED     wall shuffle seed (default: unix time)\n\
         \x20      -p SECONDS  pause between actions\n\
         \x20      -q          suppress per-action output\n\
         \x20      -w          write an action log under data/\n\
         \x20      -0..-3 NAME actor for each seat (Heuristic, Random(SEED))\n\
         \x20 C  calculator: validate a 14-tile hand expression\n\
         \x20      C \"1d 1d 1d 2d 2d 2d 3d 3d 3d 4d 4d 4d we we\"\n\
         \x20      -f FILE     read expressions from a file"
    );
}
