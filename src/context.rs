/// Structured key/value payload attached to a log event.
///
/// The facade passes the context through to the receiving channel unchanged;
/// it performs no validation of the payload's shape.
pub type Context = serde_json::Map<String, serde_json::Value>;

/// Builds a [`Context`] from `key => value` pairs.
///
/// Values can be anything that [`serde_json::json!`] accepts.
///
/// ```rust
/// use multi_logger::context;
///
/// let ctx = context! { "pct" => 92, "volume" => "/var" };
/// assert_eq!(ctx["pct"], 92);
/// ```
#[macro_export]
macro_rules! context {
    () => {
        $crate::Context::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut context = $crate::Context::new();
        $(
            context.insert(($key).to_string(), ::serde_json::json!($value));
        )+
        context
    }};
}
