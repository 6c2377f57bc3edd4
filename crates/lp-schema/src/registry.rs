//! Central schema registry.

use std::collections::HashMap;
use std::sync::OnceLock;

use jsonschema::Validator;
use lp_core::Stage;
use schemars::schema_for;
use serde_json::Value;

use crate::error::SchemaError;

struct Entry {
    schema: Value,
    validator: Validator,
}

/// Compiled JSON Schemas keyed by name.
pub struct SchemaRegistry {
    entries: HashMap<&'static str, Entry>,
}

macro_rules! register {
    ($map:expr, $name:expr, $ty:ty) => {{
        let schema = serde_json::to_value(schema_for!($ty))
            .map_err(|e| SchemaError::Generation(format!("{}: {e}", $name)))?;
        let validator = jsonschema::validator_for(&schema)
            .map_err(|e| SchemaError::Generation(format!("{}: {e}", $name)))?;
        $map.insert($name, Entry { schema, validator });
    }};
}

static SHARED: OnceLock<SchemaRegistry> = OnceLock::new();

impl SchemaRegistry {
    /// Build and compile every schema.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::Generation` if a schema fails to serialize or
    /// compile.
    pub fn new() -> Result<Self, SchemaError> {
        let mut entries = HashMap::new();

        // Stage results, named after `Stage::as_str`.
        register!(entries, "market_analysis", lp_core::MarketAnalysis);
        register!(entries, "product_roadmap", lp_core::ProductRoadmap);
        register!(entries, "tech_blueprint", lp_core::TechBlueprint);

        register!(entries, "chain_result", lp_core::ChainResult);
        register!(entries, "agent_output", lp_core::AgentOutput);
        register!(entries, "history_entry", lp_core::history::HistoryEntry);

        Ok(Self { entries })
    }

    /// Process-wide registry, compiled on first use.
    ///
    /// # Errors
    ///
    /// Returns the compilation error from [`SchemaRegistry::new`]; a failed
    /// build is retried on the next call.
    pub fn shared() -> Result<&'static Self, SchemaError> {
        if let Some(registry) = SHARED.get() {
            return Ok(registry);
        }
        let registry = Self::new()?;
        Ok(SHARED.get_or_init(|| registry))
    }

    /// Get a schema by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries.get(name).map(|entry| &entry.schema)
    }

    /// Validate a JSON value against a named schema.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::NotFound` if the schema name is unknown, or
    /// `SchemaError::ValidationFailed` if validation produces errors.
    pub fn validate(&self, name: &str, instance: &Value) -> Result<(), SchemaError> {
        let entry = self
            .entries
            .get(name)
            .ok_or_else(|| SchemaError::NotFound(name.to_string()))?;

        let errors: Vec<String> = entry
            .validator
            .iter_errors(instance)
            .map(|e| {
                let path = e.instance_path.to_string();
                if path.is_empty() {
                    e.to_string()
                } else {
                    format!("{path}: {e}")
                }
            })
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(SchemaError::ValidationFailed {
                schema: name.to_string(),
                errors,
            })
        }
    }

    /// Validate a raw stage response.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::ValidationFailed` if the response is not a
    /// structurally valid result for `stage`.
    pub fn validate_stage(&self, stage: Stage, instance: &Value) -> Result<(), SchemaError> {
        self.validate(stage.as_str(), instance)
    }

    /// All registered schema names, sorted.
    #[must_use]
    pub fn list(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.entries.keys().copied().collect();
        names.sort_unstable();
        names
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn registry() -> SchemaRegistry {
        SchemaRegistry::new().expect("schemas compile")
    }

    #[test]
    fn registers_every_payload() {
        assert_eq!(
            registry().list(),
            vec![
                "agent_output",
                "chain_result",
                "history_entry",
                "market_analysis",
                "product_roadmap",
                "tech_blueprint",
            ]
        );
    }

    #[test]
    fn every_stage_has_a_schema() {
        let reg = registry();
        for stage in Stage::ALL {
            assert!(reg.get(stage.as_str()).is_some(), "missing schema for {stage}");
        }
    }

    #[test]
    fn unknown_schema_is_not_found() {
        let err = registry().validate("nope", &json!({})).unwrap_err();
        assert!(matches!(err, SchemaError::NotFound(name) if name == "nope"));
    }

    #[test]
    fn shared_registry_is_reused() {
        let a = SchemaRegistry::shared().unwrap();
        let b = SchemaRegistry::shared().unwrap();
        assert!(std::ptr::eq(a, b));
    }

    #[test]
    fn validation_errors_name_the_schema() {
        let err = registry()
            .validate_stage(Stage::MarketAnalysis, &json!({"startup_idea": "x"}))
            .unwrap_err();
        let SchemaError::ValidationFailed { schema, errors } = &err else {
            panic!("expected ValidationFailed, got {err:?}");
        };
        assert_eq!(schema, "market_analysis");
        assert!(errors.iter().any(|e| e.contains("session_id")));
        assert!(err.to_string().starts_with("market_analysis failed validation"));
    }
}
