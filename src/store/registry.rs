use super::types::ParamId;
use crate::error::{Error, Result};
use crate::parameter::Parameter;
use crate::quantity::Quantity;
use std::collections::HashMap;
use tracing::debug;

/// The parameter slots of one configuration (a bank, a subarray, ...).
///
/// Models are passed explicitly to whoever fills or reports them; there is no
/// process-wide "current model". Slot order is declaration order, which is
/// also report order.
#[derive(Debug, Clone, Default)]
pub struct Model {
    pub name: String,
    params: Vec<Parameter>,
    // Name index; names are unique within a model.
    by_name: HashMap<String, ParamId>,
}

impl Model {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), ..Default::default() }
    }

    pub fn count(&self) -> usize { self.params.len() }

    /// Adds an uninitialized slot.
    pub fn declare_slot(&mut self, name: &str) -> Result<ParamId> {
        if self.by_name.contains_key(name) {
            return Err(Error::DuplicateParameter(name.to_string()));
        }
        let id = ParamId::new(self.params.len()).ok_or_else(|| Error::ModelFull(self.name.clone()))?;
        self.params.push(Parameter::new(name));
        self.by_name.insert(name.to_string(), id);
        Ok(id)
    }

    /// Adds a slot holding a configuration literal.
    pub fn declare_input(&mut self, name: &str, quantity: Quantity) -> Result<ParamId> {
        let id = self.declare_slot(name)?;
        self.params[id.index()].declare(quantity)?;
        Ok(id)
    }

    /// Adds a slot bound to a computed result.
    ///
    /// Only a duplicate name is an error here. An unresolved `source` leaves
    /// the new slot invalid, to be reported as such.
    pub fn bind(&mut self, name: &str, source: &Parameter) -> Result<ParamId> {
        let id = self.declare_slot(name)?;
        if let Err(e) = self.params[id.index()].adopt(source) {
            debug!(model = %self.name, slot = name, error = %e, "bound to unresolved result");
        }
        Ok(id)
    }

    pub fn set_input(&mut self, id: ParamId, quantity: Quantity) -> Result<()> {
        self.slot_mut(id)?.declare(quantity)
    }

    pub fn adopt(&mut self, id: ParamId, source: &Parameter) -> Result<()> {
        self.slot_mut(id)?.adopt(source)
    }

    pub fn invalidate(&mut self, id: ParamId, reason: Error) -> Result<()> {
        self.slot_mut(id)?.invalidate(reason);
        Ok(())
    }

    pub fn get(&self, id: ParamId) -> Option<&Parameter> {
        self.params.get(id.index())
    }

    pub fn find(&self, name: &str) -> Option<ParamId> {
        self.by_name.get(name).copied()
    }

    /// Lookup by name for formula code, which expects every slot it reads to
    /// have been declared.
    pub fn param(&self, name: &str) -> Result<&Parameter> {
        self.find(name)
            .and_then(|id| self.get(id))
            .ok_or_else(|| Error::UnknownParameter(name.to_string()))
    }

    /// `(label, parameter)` pairs in declaration order.
    pub fn rows(&self) -> Vec<(&str, &Parameter)> {
        self.params.iter().map(|p| (p.label(), p)).collect()
    }

    fn slot_mut(&mut self, id: ParamId) -> Result<&mut Parameter> {
        self.params
            .get_mut(id.index())
            .ok_or_else(|| Error::UnknownParameter(format!("#{}", id.0)))
    }
}
