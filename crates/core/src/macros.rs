#[macro_export]
macro_rules! impl_from {
    ($($From:ty, $To:ty, $Constructor:expr;)*) => {
        $(
            impl From<$From> for $To {
                #[inline]
                fn from(value: $From) -> Self {
                    $Constructor(value)
                }
            }
        )*
    };
}

#[macro_export]
macro_rules! impl_from_cast {
    ($($From:ty as $cast:ty, $To:ty, $Constructor:expr;)*) => {
        $(
            impl From<$From> for $To {
                #[inline]
                fn from(value: $From) -> Self {
                    $Constructor(value as $cast)
                }
            }
        )*
    };
}

/// Builds a [`JsonObject`](crate::JsonObject) literal, keys keep the order they are written in.
///
/// ```
/// use jsonskel_core::json_object;
///
/// let point = json_object! { "x" => 0, "y" => 0 };
/// assert_eq!(point.to_json().unwrap(), r#"{"x":0,"y":0}"#);
/// ```
#[macro_export]
macro_rules! json_object {
    () => {
        $crate::JsonObject::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut object = $crate::JsonObject::new();
        $(
            object.set($key, $value);
        )+
        object
    }};
}
