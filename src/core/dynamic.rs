use crate::utils::error::{DuckError, Result};
use std::collections::BTreeMap;

// Duck typing kept observable at runtime: a value is a bag of named
// capabilities, and eligibility is decided by lookup at call time.

type CapFn = fn(&DynObject) -> Result<CapValue>;

#[derive(Debug, Clone, PartialEq)]
pub enum CapValue {
    Bool(bool),
    Unit,
}

#[derive(Clone)]
pub struct DynObject {
    kind: &'static str,
    capabilities: BTreeMap<&'static str, CapFn>,
}

impl DynObject {
    pub fn new(kind: &'static str) -> Self {
        Self {
            kind,
            capabilities: BTreeMap::new(),
        }
    }

    pub fn with_capability(mut self, name: &'static str, body: CapFn) -> Self {
        self.capabilities.insert(name, body);
        self
    }

    pub fn kind(&self) -> &'static str {
        self.kind
    }

    pub fn responds_to(&self, name: &str) -> bool {
        self.capabilities.contains_key(name)
    }

    pub fn invoke(&self, name: &str) -> Result<CapValue> {
        let body = self.capabilities.get(name).ok_or_else(|| DuckError::CapabilityMissing {
            receiver: self.kind.to_string(),
            capability: name.to_string(),
        })?;
        body(self)
    }
}

pub fn station() -> DynObject {
    DynObject::new("DockingStation")
        .with_capability("working", |_| Ok(CapValue::Bool(true)))
        // `release` is never installed, so the delegation fails at call
        // time with the missing capability.
        .with_capability("release_bike", |receiver| receiver.invoke("release"))
}

pub fn bike() -> DynObject {
    DynObject::new("Bike").with_capability("working", |_| Ok(CapValue::Bool(false)))
}

pub fn bike_is_working(unit: &DynObject) -> Result<bool> {
    match unit.invoke("working")? {
        CapValue::Bool(verdict) => Ok(verdict),
        CapValue::Unit => Err(DuckError::CapabilityShape {
            receiver: unit.kind().to_string(),
            capability: "working".to_string(),
        }),
    }
}
