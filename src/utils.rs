/// Unwraps an `Option` inside an event loop, skipping the event when empty.
#[macro_export]
macro_rules! value_or_continue {
    ($expr:expr) => {
        $crate::value_or_continue!($expr, stringify!($expr))
    };
    ($expr:expr, $reason:expr) => {
        match $expr {
            Some(value) => value,
            None => {
                debug!("Skipping event: {}", $reason);

                continue;
            }
        }
    };
}
