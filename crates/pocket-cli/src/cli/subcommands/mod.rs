mod cart;

pub use cart::CartCommands;
