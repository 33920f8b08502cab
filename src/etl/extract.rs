//! Extractor trait for pulling definitions out of a source

use eyre::Result;

/// Extractor trait for extracting data from a source
///
/// Implementors define how to extract items from sources like:
/// - the Glue API in the source region
/// - fixture files in tests
///
/// # Example
/// ```no_run
/// use glue_workflow_clone::etl::Extractor;
/// use eyre::Result;
///
/// struct NameExtractor {
///     names: Vec<String>,
/// }
///
/// impl Extractor for NameExtractor {
///     type Item = String;
///
///     async fn extract(&self) -> Result<Vec<Self::Item>> {
///         Ok(self.names.clone())
///     }
/// }
/// ```
pub trait Extractor: Send + Sync {
    /// The type of items extracted
    type Item: Send;

    /// Extract items from the source
    ///
    /// # Errors
    /// Returns an error if extraction fails (network, API, conversion, etc.)
    fn extract(&self) -> impl std::future::Future<Output = Result<Vec<Self::Item>>> + Send;
}
