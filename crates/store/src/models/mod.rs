//! Canonical entity records.
//!
//! Field names here are the one true schema; remote spellings that
//! deviate (`shot_id` vs `id`, `shot_name` vs `name`, `project_sharecode`)
//! are folded in with serde renames and aliases so nothing above this
//! layer ever sees a wire name.

pub mod asset;
pub mod note;
pub mod project;
pub mod shot;
pub mod user;

pub use asset::Asset;
pub use note::Note;
pub use project::Project;
pub use shot::Shot;
pub use user::User;
