pub mod search;
mod state;

pub use search::find_route;
