pub mod base;
pub mod node;
mod node_access;
mod node_arena;
pub mod state;
