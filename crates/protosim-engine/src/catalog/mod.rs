//! Protocol template catalog.
//!
//! Maps template ids to ordered step sequences. Templates are validated on
//! registration and never change afterwards.

pub mod builtin;

use std::collections::BTreeMap;

use protosim_core::config::TemplateConfig;
use protosim_core::constants::DEFAULT_TEMPLATE_ID;
use protosim_core::errors::{CatalogError, SimResult, SimulationError};
use protosim_core::models::{ProtocolStep, UnknownTemplatePolicy};
use protosim_core::tracing::events;

/// A template picked by [`ProtocolCatalog::resolve`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedTemplate<'a> {
    /// Id of the template actually used.
    pub template_id: &'a str,
    pub steps: &'a [ProtocolStep],
    /// True when the fallback policy substituted this template.
    pub substituted: bool,
}

/// Named, ordered protocol templates.
#[derive(Debug, Clone, Default)]
pub struct ProtocolCatalog {
    templates: BTreeMap<String, Vec<ProtocolStep>>,
}

impl ProtocolCatalog {
    /// An empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// A catalog holding the built-in templates.
    pub fn with_builtins() -> Self {
        let mut templates = BTreeMap::new();
        templates.insert(DEFAULT_TEMPLATE_ID.to_string(), builtin::crispr_plasmid_prep());
        Self { templates }
    }

    /// Built-ins plus every configured template.
    pub fn from_config(templates: &[TemplateConfig]) -> Result<Self, CatalogError> {
        let mut catalog = Self::with_builtins();
        for template in templates {
            catalog.register(template.id.clone(), template.steps.clone())?;
        }
        Ok(catalog)
    }

    /// Add a template. Ids are unique; steps must pass [`ProtocolStep::check`].
    pub fn register(
        &mut self,
        template_id: impl Into<String>,
        steps: Vec<ProtocolStep>,
    ) -> Result<(), CatalogError> {
        let template_id = template_id.into();
        if self.templates.contains_key(&template_id) {
            return Err(CatalogError::DuplicateTemplate { template_id });
        }
        if steps.is_empty() {
            return Err(CatalogError::EmptyTemplate { template_id });
        }
        for step in &steps {
            if let Err(message) = step.check() {
                return Err(CatalogError::InvalidStep {
                    template_id,
                    step: step.name.clone(),
                    message,
                });
            }
        }
        self.templates.insert(template_id, steps);
        Ok(())
    }

    /// Steps of `template_id`, in execution order.
    pub fn lookup(&self, template_id: &str) -> SimResult<&[ProtocolStep]> {
        self.templates
            .get(template_id)
            .map(Vec::as_slice)
            .ok_or_else(|| SimulationError::UnknownTemplate {
                template_id: template_id.to_string(),
            })
    }

    /// Look up `template_id`, applying `policy` when it is unknown.
    ///
    /// A fallback target that is itself missing is reported as unknown under
    /// the requested id.
    pub fn resolve<'a>(
        &'a self,
        template_id: &str,
        policy: &UnknownTemplatePolicy,
    ) -> SimResult<ResolvedTemplate<'a>> {
        if let Some((id, steps)) = self.templates.get_key_value(template_id) {
            return Ok(ResolvedTemplate {
                template_id: id,
                steps,
                substituted: false,
            });
        }
        match policy {
            UnknownTemplatePolicy::Strict => Err(SimulationError::UnknownTemplate {
                template_id: template_id.to_string(),
            }),
            UnknownTemplatePolicy::FallbackTo(fallback) => {
                let (id, steps) = self.templates.get_key_value(fallback.as_str()).ok_or_else(
                    || SimulationError::UnknownTemplate {
                        template_id: template_id.to_string(),
                    },
                )?;
                events::template_fallback(template_id, id);
                Ok(ResolvedTemplate {
                    template_id: id,
                    steps,
                    substituted: true,
                })
            }
        }
    }

    pub fn contains(&self, template_id: &str) -> bool {
        self.templates.contains_key(template_id)
    }

    /// Template ids in sorted order.
    pub fn template_ids(&self) -> Vec<&str> {
        self.templates.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}
