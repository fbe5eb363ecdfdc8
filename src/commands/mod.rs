pub mod flip;
