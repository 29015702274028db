use crate::field::FormField;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Raw, unparsed text of every form field.
///
/// Every field always holds a value; a new instance starts from the
/// defaults in [`FormField::default_value`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormInputs {
    values: [String; 7],
}

impl FormInputs {
    pub fn get(&self, field: FormField) -> &str {
        &self.values[field.index()]
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        self.values[field.index()] = value.into();
    }

    /// Builder-style variant of [`FormInputs::set`].
    #[must_use]
    pub fn with(mut self, field: FormField, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (FormField, &str)> {
        FormField::ALL
            .into_iter()
            .map(move |field| (field, self.get(field)))
    }
}

impl Default for FormInputs {
    fn default() -> Self {
        Self {
            values: FormField::ALL.map(|field| field.default_value().to_string()),
        }
    }
}

impl Serialize for FormInputs {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for (field, value) in self.iter() {
            map.serialize_entry(field.name(), value)?;
        }
        map.end()
    }
}
