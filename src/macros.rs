//! Declarative helpers for the command grammar states.
//!
//! A grammar state is a newtype over `Incomplete`. Transitions consume the
//! state and wrap the same buffer in the next state type, so the set of
//! methods on each type is exactly the set of legal continuations.

/// Declares grammar state types.
macro_rules! states {
    ($($(#[$meta:meta])* $name:ident;)+) => {
        $(
            $(#[$meta])*
            #[derive(Debug)]
            #[must_use = "a command must be finished with `build()` or `cache()`"]
            pub struct $name($crate::core::command::Incomplete);
        )+
    };
}

/// Adds `build()` to terminal states.
macro_rules! impl_build {
    ($($state:ident),+ $(,)?) => {
        $(
            impl $state {
                /// Seals the command for dispatch.
                #[inline]
                #[track_caller]
                pub fn build(self) -> $crate::core::command::Completed {
                    self.0.build()
                }
            }
        )+
    };
}

/// Adds `cache()` to terminal states of client-side cacheable commands.
macro_rules! impl_cache {
    ($($state:ident),+ $(,)?) => {
        $(
            impl $state {
                /// Seals the command for client-side caching.
                #[inline]
                #[track_caller]
                pub fn cache(self) -> $crate::core::command::Cacheable {
                    self.0.cache()
                }
            }
        )+
    };
}

/// Adds a repeatable multi-key transition named `key`.
macro_rules! impl_keys {
    ($($from:ident => $to:ident),+ $(,)?) => {
        $(
            impl $from {
                /// Appends keys, folding each into the slot context in order.
                pub fn key<I>(self, keys: I) -> $to
                where
                    I: IntoIterator,
                    I::Item: Into<::bytes::Bytes>,
                {
                    $to(self.0.keys(keys))
                }
            }
        )+
    };
}

/// Adds a repeatable transition appending non-key arguments.
macro_rules! impl_args {
    ($method:ident: $($from:ident => $to:ident),+ $(,)?) => {
        $(
            impl $from {
                /// Appends arguments in order.
                pub fn $method<I>(self, args: I) -> $to
                where
                    I: IntoIterator,
                    I::Item: Into<::bytes::Bytes>,
                {
                    $to(self.0.args(args))
                }
            }
        )+
    };
}

/// Adds the same transitions to several states.
///
/// Each transition names the incoming buffer (`c` below) and evaluates to the
/// buffer the next state wraps:
///
/// ```ignore
/// impl_steps! {
///     [ClientTrackingStatus, ClientTrackingRedirect] {
///         /// Appends `BCAST`.
///         fn bcast(c) -> ClientTrackingBcast { c.arg("BCAST") }
///     }
/// }
/// ```
macro_rules! impl_steps {
    ([$($from:ident),+ $(,)?] $body:tt) => {
        $( impl_steps!(@impl $from $body); )+
    };
    (@impl $from:ident {
        $(
            $(#[$meta:meta])*
            fn $method:ident($c:ident $(, $arg:ident: $ty:ty)*) -> $to:ident $step:block
        )+
    }) => {
        impl $from {
            $(
                $(#[$meta])*
                #[inline]
                pub fn $method(self $(, $arg: $ty)*) -> $to {
                    let $c = self.0;
                    $to($step)
                }
            )+
        }
    };
}
