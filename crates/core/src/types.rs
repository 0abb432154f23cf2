/// All remote identifiers are 64-bit integer primary keys.
pub type Id = i64;
