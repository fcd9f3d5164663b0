//! [`Handler`] abstractions.

use std::future::Future;

/// Executable handler.
///
/// Commands, queries and storage operations are all [`Handler`]s of their
/// own argument types, so a single type may handle many of them.
///
/// ```rust
/// use std::convert::Infallible;
///
/// use common::Handler;
///
/// struct Nights;
///
/// impl Handler<(u32, u32)> for Nights {
///     type Ok = u32;
///     type Err = Infallible;
///
///     async fn execute(
///         &self,
///         (check_in, check_out): (u32, u32),
///     ) -> Result<u32, Infallible> {
///         Ok(check_out.saturating_sub(check_in))
///     }
/// }
///
/// drop(Nights.execute((20, 23)));
/// ```
pub trait Handler<Args = ()> {
    /// Type of successful [`Handler`] result.
    type Ok;

    /// Type of this [`Handler`] error.
    type Err;

    /// Executes this [`Handler`] with the provided arguments.
    fn execute(
        &self,
        args: Args,
    ) -> impl Future<Output = Result<Self::Ok, Self::Err>>;
}
