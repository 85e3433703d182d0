use super::{Json, ObjectSerializer, Transform};

/// Applies an [`ObjectSerializer`] to every element of an ordered list.
///
/// Element order and count are preserved in both directions. Elements that are
/// not JSON objects deserialize to blank records rather than being dropped.
#[derive(Debug)]
pub struct ArraySerializer<T> {
    element: ObjectSerializer<T>,
}

impl<T: 'static> ArraySerializer<T> {
    #[must_use]
    pub const fn new(element: ObjectSerializer<T>) -> Self {
        Self { element }
    }

    #[must_use]
    pub const fn element(&self) -> &ObjectSerializer<T> {
        &self.element
    }
}

impl<T: 'static> Transform for ArraySerializer<T> {
    type Value = Vec<T>;

    fn serialize(&self, value: &Vec<T>) -> Json {
        Json::Array(self.element.serialize_many(value))
    }

    fn deserialize(&self, json: &Json) -> Option<Vec<T>> {
        json.as_array().map(|items| self.element.deserialize_many(items))
    }
}
