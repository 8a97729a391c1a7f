//! Bill-of-materials registry.
//!
//! Static reference data: one single-input conversion rule per raw-material
//! item. The registry is populated at construction time and read-only
//! afterwards; there is no runtime mutation surface.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use autochain_core::{text, ScmError, ScmResult};

/// Conversion recipe for one raw-material item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BomRule {
    /// Finished-goods item produced by the conversion.
    pub output_item: String,
    /// Positive multiplier applied to the consumed quantity.
    pub yield_ratio: f64,
}

/// Registry keyed by raw-material item name.
#[derive(Debug, Clone, Default)]
pub struct BomRegistry {
    rules: HashMap<String, BomRule>,
}

impl BomRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a conversion rule. Build-time only; replaces any existing
    /// rule for the same input item.
    pub fn register(
        &mut self,
        input_item: impl Into<String>,
        output_item: impl Into<String>,
        yield_ratio: f64,
    ) -> ScmResult<()> {
        let input_item = input_item.into();
        let output_item = output_item.into();

        if text::is_blank(&input_item) || text::is_blank(&output_item) {
            return Err(ScmError::validation("BOM item names cannot be empty"));
        }
        if !yield_ratio.is_finite() || yield_ratio <= 0.0 {
            return Err(ScmError::validation(format!(
                "yield ratio must be positive, got {yield_ratio}"
            )));
        }

        self.rules.insert(
            input_item,
            BomRule {
                output_item,
                yield_ratio,
            },
        );
        Ok(())
    }

    /// Look up the rule for an input item.
    pub fn lookup(&self, input_item: &str) -> ScmResult<&BomRule> {
        self.rules
            .get(input_item)
            .ok_or_else(|| ScmError::recipe_not_found(input_item))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
