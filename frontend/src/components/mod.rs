pub mod agent_grid;
pub mod composer;
pub mod transcript;
