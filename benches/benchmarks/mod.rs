pub mod chord;
pub mod generator;
