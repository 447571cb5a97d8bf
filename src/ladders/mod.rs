mod tile;
pub use tile::Coord;
pub use tile::Heading;
pub use tile::Tile;

mod error;
pub use error::ConfigError;
pub use error::RollError;

mod path;
pub use path::Path;

mod rules;
pub use rules::Jump;
pub use rules::Rules;
pub use rules::TileKind;

mod piece;
pub use piece::Piece;

mod die;
pub use die::Die;

mod event;
pub use event::GameEvent;
pub use event::Presenter;

mod config;
pub use config::Board;
pub use config::GameConfig;
pub use config::Overshoot;

mod game;
pub use game::Game;
pub use game::Phase;
