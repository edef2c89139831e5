//! Flingers Hub - Progression Engine Library
//!
//! Pure rules engine for player/clan/character progression: level tables,
//! slot unlocking, task and quest availability, game reward calculation,
//! and staking reward accrual. All functions operate on state snapshots
//! passed in by the caller; nothing here reads a clock, performs I/O, or
//! holds mutable state of its own (the `player::store` persistence seam
//! is the one deliberate exception, and the engine never calls it).

pub mod classes;
pub mod entities;
pub mod games;
pub mod player;
pub mod progression;
pub mod ranks;
pub mod slots;
pub mod staking;
pub mod tasks;
pub mod validate;

pub use player::PlayerState;
pub use progression::{apply_xp, XpOutcome};
pub use slots::{character_slot_unlocks, clan_slot_unlocks, Requirement};
pub use validate::{validate_tables, ConfigError};
