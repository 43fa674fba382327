pub mod actor;
pub mod config;
pub mod input;
pub mod outcome;
pub mod snapshot;
pub mod team;

pub use actor::{Actor, AiBrain, Controller, Facing};
pub use config::MatchConfig;
pub use input::InputState;
pub use outcome::{MatchOutcome, MatchPhase, Scores, Winner};
pub use snapshot::{ActorSnapshot, GridSnapshot, MatchSnapshot};
pub use team::Team;
