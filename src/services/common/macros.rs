/// Unwraps a player query with empty string default.
///
/// Queries such as the current path are unavailable while the player is
/// idle; the failure is logged and the bus sees an empty value.
#[macro_export]
macro_rules! unwrap_string {
    ($result:expr, $property:expr) => {
        $result.unwrap_or_else(|err| {
            ::tracing::debug!("Failed to fetch property {}: {}", $property, err);
            String::new()
        })
    };
}

/// Unwraps a player query with 0.0 default.
#[macro_export]
macro_rules! unwrap_f64 {
    ($result:expr, $property:expr) => {
        $result.unwrap_or_else(|err| {
            ::tracing::debug!("Failed to fetch property {}: {}", $property, err);
            0.0
        })
    };
}

/// Unwraps a player query with a custom default.
#[macro_export]
macro_rules! unwrap_or {
    ($result:expr, $property:expr, $default:expr) => {
        $result.unwrap_or_else(|err| {
            ::tracing::debug!("Failed to fetch property {}: {}", $property, err);
            $default
        })
    };
}
