//! Wall-clock access for creation timestamps and upload keys.

/// Current time in epoch milliseconds. Zero on the server, where no
/// timestamps are ever minted (all mutations are browser-side).
pub fn now_ms() -> u64 {
    #[cfg(feature = "hydrate")]
    {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        {
            js_sys::Date::now() as u64
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0
    }
}
