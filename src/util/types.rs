/// user key type.
pub type Key = String;
/// user value type.
pub type Value = String;

/// number of characters in a generated key.
pub const KEY_LEN: usize = 5;
/// number of characters in a generated value.
pub const VALUE_LEN: usize = 8;

/// inclusive bounds on the argument count of a READ/WRITE/DELETE command.
/// a command never carries an empty argument list.
pub const MIN_ARGS: usize = 1;
pub const MAX_ARGS: usize = 5;
