//! The manifest-implementation macro.

/// Implements [`Injectable`](crate::Injectable) for a struct whose
/// constructor dependencies are held as `Arc` fields.
///
/// The one-argument form is for types with no constructor dependencies
/// (unit structs or empty field structs). The two-argument form lists one
/// `field: DependencyType` pair per constructor parameter, in declaration
/// order; each field must have type `Arc<DependencyType>`, and the
/// declared token for the parameter is the dependency type's short name.
///
/// # Examples
///
/// ```
/// use fibre_wiring::{injectable, Registrar};
/// use std::sync::Arc;
///
/// struct Clock;
/// struct Scheduler {
///   clock: Arc<Clock>,
/// }
///
/// injectable!(Clock);
/// injectable!(Scheduler, [clock: Clock]);
///
/// let registrar = Registrar::new();
/// let factory = registrar.build_factory::<Scheduler>();
/// assert_eq!(factory.tokens(), vec!["Clock"]);
/// ```
#[macro_export]
macro_rules! injectable {
  // A type with no constructor dependencies: injectable!(AppClock)
  ($target:ident) => {
    impl $crate::Injectable for $target {
      fn dependencies() -> Vec<$crate::Token> {
        Vec::new()
      }

      fn construct(_args: &mut $crate::Resolved) -> $crate::Result<Self> {
        Ok($target {})
      }
    }
  };

  // A field struct holding one Arc<Dep> per constructor parameter:
  // injectable!(UserService, [db: Database, clock: AppClock])
  ($target:ident, [$($field:ident : $dep:ty),+ $(,)?]) => {
    impl $crate::Injectable for $target {
      fn dependencies() -> Vec<$crate::Token> {
        vec![$($crate::token_of::<$dep>()),+]
      }

      fn construct(args: &mut $crate::Resolved) -> $crate::Result<Self> {
        Ok($target {
          $($field: args.take::<$dep>()?),+
        })
      }
    }
  };
}
