use std::fmt::Display;

/// For failures that are reported but not fatal.
pub trait ResultExt<T, E> {
	/// Logs the error, if any, and discards it.
	fn ok_or_log(self) -> Option<T>
	where
		E: Display;
}

impl<T, E> ResultExt<T, E> for Result<T, E> {
	fn ok_or_log(self) -> Option<T>
	where
		E: Display,
	{
		match self {
			Ok(value) => Some(value),
			Err(error) => {
				tracing::error!(%error, "continuing after failure");
				None
			}
		}
	}
}
