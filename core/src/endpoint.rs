/// A named API path, usually one variant of a caller-defined enum.
///
/// ```ignore
/// enum Api { Me, Notes }
///
/// impl Endpoint for Api {
///     fn path(&self) -> &str {
///         match self {
///             Api::Me => "users/me",
///             Api::Notes => "notes",
///         }
///     }
/// }
/// ```
pub trait Endpoint {
    /// Path relative to the client's base URL.
    fn path(&self) -> &str;
}

impl<E: Endpoint + ?Sized> Endpoint for &E {
    fn path(&self) -> &str {
        (**self).path()
    }
}
