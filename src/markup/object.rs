//! Typed widget objects: one tag's kind and attribute values.

use std::borrow::Cow;

use crate::markup::catalog::{PropertyDef, PropertyType, PropertyValue, WidgetKind};
use crate::markup::error::MarkupError;

// ---------------------------------------------------------------------------
// Attribute
// ---------------------------------------------------------------------------

/// A set property.
///
/// Values read from markup remember their source text, so an untouched
/// attribute is written back exactly as the user typed it.
#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    name: &'static str,
    value: PropertyValue,
    source: Option<String>,
}

impl Attribute {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn value(&self) -> &PropertyValue {
        &self.value
    }

    /// The unescaped attribute text to write.
    pub fn markup_value(&self) -> Cow<'_, str> {
        match &self.source {
            Some(source) => Cow::Borrowed(source),
            None => Cow::Owned(self.value.to_string()),
        }
    }
}

// ---------------------------------------------------------------------------
// WidgetObject
// ---------------------------------------------------------------------------

/// A widget instance described by markup, without children.
///
/// Attributes keep the order they were set in.
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetObject {
    kind: WidgetKind,
    attributes: Vec<Attribute>,
}

impl WidgetObject {
    pub fn new(kind: WidgetKind) -> Self {
        Self {
            kind,
            attributes: Vec::new(),
        }
    }

    pub fn kind(&self) -> WidgetKind {
        self.kind
    }

    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    pub fn get(&self, name: &str) -> Option<&PropertyValue> {
        self.attributes
            .iter()
            .find(|a| a.name == name)
            .map(|a| &a.value)
    }

    /// The `Text` property, if set.
    pub fn text(&self) -> Option<&str> {
        self.get("Text").and_then(PropertyValue::as_str)
    }

    /// The `StyleName` property, if set.
    pub fn style_name(&self) -> Option<&str> {
        self.get("StyleName").and_then(PropertyValue::as_str)
    }

    /// Set a property to a typed value.
    pub fn set(&mut self, name: &str, value: impl Into<PropertyValue>) -> Result<(), MarkupError> {
        let value = value.into();
        let def = self.definition(name)?;
        if !def.ty.accepts(&value) {
            return Err(MarkupError::InvalidValue {
                widget: self.kind.tag().to_string(),
                property: name.to_string(),
                value: value.to_string(),
                reason: format!("expected {}", describe(def.ty)),
            });
        }
        self.store(def.name, value, None);
        Ok(())
    }

    /// Set a property from markup text, parsing it against the schema.
    pub fn set_from_markup(&mut self, name: &str, raw: &str) -> Result<(), MarkupError> {
        let def = self.definition(name)?;
        let value = def.ty.parse(raw).map_err(|reason| MarkupError::InvalidValue {
            widget: self.kind.tag().to_string(),
            property: name.to_string(),
            value: raw.to_string(),
            reason,
        })?;
        self.store(def.name, value, Some(raw.to_string()));
        Ok(())
    }

    /// Clear a property, returning its previous value.
    pub fn remove(&mut self, name: &str) -> Option<PropertyValue> {
        let index = self.attributes.iter().position(|a| a.name == name)?;
        Some(self.attributes.remove(index).value)
    }

    fn definition(&self, name: &str) -> Result<PropertyDef, MarkupError> {
        self.kind
            .property(name)
            .ok_or_else(|| MarkupError::UnknownProperty {
                widget: self.kind.tag().to_string(),
                property: name.to_string(),
            })
    }

    fn store(&mut self, name: &'static str, value: PropertyValue, source: Option<String>) {
        let attribute = Attribute { name, value, source };
        match self.attributes.iter_mut().find(|a| a.name == name) {
            Some(existing) => *existing = attribute,
            None => self.attributes.push(attribute),
        }
    }
}

fn describe(ty: PropertyType) -> &'static str {
    match ty {
        PropertyType::String => "a string",
        PropertyType::Int => "an integer",
        PropertyType::Float => "a number",
        PropertyType::Bool => "a boolean",
        PropertyType::Color => "a color",
        PropertyType::Enum(_) => "an enumeration value",
    }
}
