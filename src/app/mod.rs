// Console driver: menu text, prompts, and output formatting.

pub mod console;
pub mod menu;
