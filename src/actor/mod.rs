mod heuristic;
mod random;

use std::fmt;

use crate::model::*;
use crate::util::misc::error_exit;
use crate::util::variant::*;

pub use heuristic::{charleston_pass, claim_decision, discard_choice, Heuristic};
pub use random::Random;

#[derive(Clone)]
pub struct Config {
    pub name: String,
    pub args: Vec<Arg>,
}

// A seat's decision maker. The engine calls select_action whenever the
// seat has a decision point (charleston pass, claim offer, draw, discard);
// None means the actor sees nothing to do in this state.
pub trait Actor: ActorClone + Send {
    fn init(&mut self, _seat: Seat) {}
    fn select_action(&mut self, state: &GameState, seat: Seat) -> Option<Action>;
    fn get_config(&self) -> &Config;
}

impl fmt::Debug for dyn Actor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let conf = self.get_config();
        let arg_str = conf
            .args
            .iter()
            .map(|a| format!("{}={}", a.name, a.value))
            .collect::<Vec<String>>()
            .join(",");
        write!(f, "Actor: {}({})", conf.name, arg_str)
    }
}

// https://stackoverflow.com/questions/30353462/how-to-clone-a-struct-storing-a-boxed-trait-object
pub trait ActorClone {
    fn clone_box(&self) -> Box<dyn Actor>;
}

impl<T> ActorClone for T
where
    T: 'static + Actor + Clone,
{
    fn clone_box(&self) -> Box<dyn Actor> {
        Box::new(self.clone())
    }
}

trait ActorBuilder {
    fn get_default_config(&self) -> Config;
    fn create(&self, config: Config) -> Box<dyn Actor>;
}

// Instantiate an actor from an expression such as "Heuristic" or
// "Random(17)". Omitted arguments keep their defaults.
pub fn create_actor(exp: &str) -> Box<dyn Actor> {
    let builders: Vec<Box<dyn ActorBuilder>> = vec![
        Box::new(heuristic::HeuristicBuilder {}),
        Box::new(random::RandomBuilder {}),
    ];

    let name: &str;
    let args: Vec<&str>;
    match (exp.find('('), exp.rfind(')')) {
        (Some(l), Some(r)) => {
            if r < l {
                error_exit(format!("invalid actor expression: {}", exp))
            }
            name = &exp[..l];
            args = exp[l + 1..r].split(',').collect();
        }
        _ => {
            name = exp;
            args = vec![];
        }
    }

    for b in &builders {
        let mut conf = b.get_default_config();
        if name != conf.name {
            continue;
        }
        if args.len() > conf.args.len() {
            error_exit(format!(
                "expected at most {} arguments for {} but {} were provided",
                conf.args.len(),
                name,
                args.len(),
            ))
        }
        for (i, &a) in args.iter().enumerate() {
            if !a.is_empty() {
                conf.args[i].value = match parse_as(&conf.args[i].value, a) {
                    Ok(v) => v,
                    Err(e) => error_exit(format!("{}: \"{}\"", e, a)),
                };
            }
        }
        return b.create(conf);
    }

    error_exit(format!("unknown actor name: {}", name))
}

fn parse_as(target: &Variant, value: &str) -> Result<Variant, String> {
    Ok(match target {
        Variant::Int(_) => Variant::Int(value.parse::<i64>().map_err(|e| e.to_string())?),
        Variant::Bool(_) => Variant::Bool(value.parse::<bool>().map_err(|e| e.to_string())?),
        Variant::String(_) => Variant::String(value.to_string()),
    })
}
