use core::fmt;

/// Checks a value for problems and reports all of them at once.
pub trait Verifier<T: ?Sized> {
    type Error: fmt::Display + fmt::Debug + Sync + Send + 'static;
    type Errors: IntoIterator<Item = Self::Error>;

    fn verify(&self, value: &T) -> Result<(), Self::Errors>;
}
