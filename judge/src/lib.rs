mod game;
mod player;
mod recording;
mod setup;
mod visualization;
pub use game::*;
pub use player::*;
pub use recording::*;
pub use setup::*;
pub use visualization::*;
