//! The request-aggregation pipeline.

use std::sync::Arc;

use pipeline::{
    DescriptionSource, EntityName, Kind, LookupResult, SuccessEnvelope, TextTransformer,
    TransformationResult,
};
use tracing::{debug, instrument, warn};

use crate::PipelineFailure;

/// Validates a translate request and runs the lookup → transformation stages.
///
/// Holds no per-request state; one instance is shared by every in-flight request.
#[derive(Clone)]
pub struct TranslationPipeline {
    lookup: Arc<dyn DescriptionSource>,
    transformer: Arc<dyn TextTransformer>,
}

impl TranslationPipeline {
    /// Creates a pipeline over the given stage implementations.
    pub fn new(lookup: Arc<dyn DescriptionSource>, transformer: Arc<dyn TextTransformer>) -> Self {
        Self {
            lookup,
            transformer,
        }
    }

    /// Runs the full pipeline for raw `kind` and `name` path parameters.
    ///
    /// Validation happens before any upstream call. The first failing stage
    /// short-circuits the rest.
    #[instrument(skip(self))]
    pub async fn run(&self, kind: &str, name: &str) -> Result<SuccessEnvelope, PipelineFailure> {
        let kind: Kind = kind.parse()?;
        let name = EntityName::new(name)?;

        match kind {
            Kind::Pokemon => self.translate(name).await,
        }
    }

    async fn translate(&self, name: EntityName) -> Result<SuccessEnvelope, PipelineFailure> {
        let described = self.describe(&name).await?;
        let transformed = self.transform(&name, &described.description).await?;

        debug!(entity = %name, "pipeline completed");
        Ok(SuccessEnvelope {
            name: name.into_string(),
            description: transformed.text,
        })
    }

    async fn describe(&self, name: &EntityName) -> Result<LookupResult, PipelineFailure> {
        self.lookup
            .fetch_description(name)
            .await
            .map_err(|source| {
                warn!(entity = %name, error = %source, "lookup stage failed");
                PipelineFailure::Lookup {
                    name: name.clone(),
                    source,
                }
            })
    }

    async fn transform(
        &self,
        name: &EntityName,
        text: &str,
    ) -> Result<TransformationResult, PipelineFailure> {
        self.transformer.transform(text).await.map_err(|source| {
            warn!(entity = %name, error = %source, "transformation stage failed");
            PipelineFailure::Transformation {
                name: name.clone(),
                source,
            }
        })
    }
}
