/// The type to represent gmu results.
pub type GmuResult<T = ()> = anyhow::Result<T>;

/// The type to represent gmu errors.
pub type GmuError = anyhow::Error;
