use std::fs::File;
use std::io::{self, BufRead};

use crate::error;
use crate::hand::{match_definition, standard_card};
use crate::model::*;
use crate::util::misc::*;

// [App] hand validation from the command line. Takes one expression of 14
// whitespace-separated tile symbols, or a file of them with -f.
#[derive(Debug)]
pub struct CalculatorApp {
    args: Vec<String>,
}

impl CalculatorApp {
    pub fn new(args: Vec<String>) -> Self {
        Self { args }
    }

    pub fn run(&self) {
        let mut file_path = "".to_string();
        let mut exp = "".to_string();
        let mut it = self.args.iter();
        while let Some(s) = it.next() {
            match s.as_str() {
                "-f" => file_path = next_value(&mut it, s),
                _ => {
                    if s.starts_with('-') {
                        error!("unknown option: {}", s);
                        return;
                    }
                    if !exp.is_empty() {
                        error!("multiple expressions are not allowed");
                        return;
                    }
                    exp = s.clone();
                }
            }
        }

        if file_path.is_empty() == exp.is_empty() {
            error!("specify exactly one of an expression or -f FILE");
            return;
        }

        if !exp.is_empty() {
            if let Err(e) = process_expression(&exp) {
                error!("{}", e);
            }
        } else if let Err(e) = run_from_file(&file_path) {
            error!("{}", e);
        }
    }
}

fn run_from_file(file_path: &str) -> Res {
    let file = File::open(file_path)?;
    for line in io::BufReader::new(file).lines() {
        let exp = line?;
        let trimmed = exp.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            println!("> {}", exp);
        } else if let Err(e) = process_expression(trimmed) {
            error!("{}", e);
        }
        println!();
    }
    Ok(())
}

fn process_expression(exp: &str) -> Res {
    let tiles = tiles_from_expr(exp)?;
    println!("hand: {}", vec_to_string(&tiles));
    if tiles.len() != FULL_HAND {
        println!("not a {}-tile hand ({} tiles)", FULL_HAND, tiles.len());
        return Ok(());
    }

    let mut matched = false;
    for def in &standard_card() {
        if match_definition(&tiles, def) {
            println!("match: {}", def.name);
            matched = true;
        }
    }
    if !matched {
        println!("no matching hand");
    }
    Ok(())
}
