/// Typed identifier shared by every aggregate.
///
/// Each aggregate declares its own newtype around `Uuid` and implements this
/// trait, so identifiers of different aggregates cannot be mixed up.
pub trait AggregateId: Sized {
    fn as_string(&self) -> String;

    fn from_string(s: &str) -> Result<Self, String>;
}
