pub mod compound;
pub mod engine;
pub mod simple;
