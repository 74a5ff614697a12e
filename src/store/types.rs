//! Pizza Data Types
//!
//! Defines the resource record and the partial-update document applied by the
//! PATCH operation.

use serde::{Deserialize, Serialize};

/// A single pizza record.
///
/// The identifier is assigned by the store on creation; any identifier supplied
/// by a client on create is ignored. Identifier 0 is reserved as "unassigned"
/// and is never handed out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pizza {
    /// Unique identifier of the pizza.
    #[serde(default)]
    pub id: i64,
    /// Display name. Optional; a pizza may be created without one.
    pub name: Option<String>,
    /// Whether the pizza is gluten free.
    pub is_gluten_free: bool,
}

/// A partial-update document for a pizza.
///
/// Each field mirrors a mutable field of [`Pizza`]; `None` means "leave the
/// existing value untouched". The identifier is deliberately absent since it
/// can never be patched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PizzaPatch {
    /// New name, if the name should change.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New gluten-free flag, if the flag should change.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_gluten_free: Option<bool>,
}

impl PizzaPatch {
    /// Applies the specified field changes to `pizza`, leaving unspecified
    /// fields as they were.
    pub fn apply_to(&self, pizza: &mut Pizza) {
        if let Some(name) = &self.name {
            pizza.name = Some(name.clone());
        }
        if let Some(flag) = self.is_gluten_free {
            pizza.is_gluten_free = flag;
        }
    }

    /// True if the document changes nothing.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.is_gluten_free.is_none()
    }
}
