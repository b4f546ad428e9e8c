mod calculator;
mod engine;

pub use calculator::CalculatorApp;
pub use engine::EngineApp;
