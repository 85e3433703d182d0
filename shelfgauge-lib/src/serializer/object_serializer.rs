use super::{ArraySerializer, Json, Transform};
use core::fmt::{Debug, Formatter};
use serde_json::Map;

/// Reads one field from a record as JSON and writes it back.
trait FieldBinding<T>: Send + Sync {
    fn read(&self, instance: &T) -> Option<Json>;
    fn write(&self, instance: &mut T, json: &Json);
}

struct Binding<T, X: Transform> {
    transform: X,
    get: fn(&T) -> Option<&X::Value>,
    set: fn(&mut T, X::Value),
}

impl<T, X: Transform> FieldBinding<T> for Binding<T, X> {
    fn read(&self, instance: &T) -> Option<Json> {
        (self.get)(instance).map(|value| self.transform.serialize(value))
    }

    fn write(&self, instance: &mut T, json: &Json) {
        if let Some(value) = self.transform.deserialize(json) {
            (self.set)(instance, value);
        }
    }
}

struct Field<T> {
    name: &'static str,
    binding: Box<dyn FieldBinding<T>>,
}

/// Maps records of type `T` to JSON objects and back.
///
/// ```
/// use shelfgauge_lib::serializer::{NUMBER, ObjectSerializer, STRING};
///
/// #[derive(Default)]
/// struct Sample {
///     name: Option<String>,
///     value: Option<f64>,
/// }
///
/// let serializer = ObjectSerializer::new(Sample::default)
///     .field("name", STRING, |s| s.name.as_ref(), |s, v| s.name = Some(v))
///     .field("value", NUMBER, |s| s.value.as_ref(), |s, v| s.value = Some(v));
///
/// let json = serializer.serialize(&Sample { name: Some("parse".into()), value: None });
/// assert_eq!(json, serde_json::json!({ "name": "parse" }));
/// ```
pub struct ObjectSerializer<T> {
    factory: fn() -> T,
    fields: Vec<Field<T>>,
}

impl<T: 'static> ObjectSerializer<T> {
    /// Start an empty definition whose blank records come from `factory`.
    #[must_use]
    pub const fn new(factory: fn() -> T) -> Self {
        Self { factory, fields: Vec::new() }
    }

    /// Append a field bound to `name` in the JSON representation.
    #[must_use]
    pub fn field<X>(mut self, name: &'static str, transform: X, get: fn(&T) -> Option<&X::Value>, set: fn(&mut T, X::Value)) -> Self
    where
        X: Transform + 'static,
    {
        self.fields.push(Field {
            name,
            binding: Box::new(Binding { transform, get, set }),
        });
        self
    }

    /// Wrap this definition so it applies to every element of a list.
    #[must_use]
    pub const fn into_array(self) -> ArraySerializer<T> {
        ArraySerializer::new(self)
    }

    /// JSON keys known to this definition, in output order.
    pub fn field_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|field| field.name)
    }

    #[expect(unused_results, reason = "field names are unique within a definition")]
    pub fn serialize(&self, instance: &T) -> Json {
        let mut map = Map::with_capacity(self.fields.len());
        for field in &self.fields {
            if let Some(value) = field.binding.read(instance) {
                map.insert(field.name.to_string(), value);
            }
        }

        Json::Object(map)
    }

    pub fn serialize_many(&self, instances: &[T]) -> Vec<Json> {
        instances.iter().map(|instance| self.serialize(instance)).collect()
    }

    /// Build a record from a JSON object.
    ///
    /// Keys that are absent or `null` leave the corresponding field as the factory
    /// produced it. A non-object input yields a blank record.
    pub fn deserialize(&self, json: &Json) -> T {
        let mut instance = (self.factory)();
        let Json::Object(map) = json else {
            return instance;
        };

        for field in &self.fields {
            match map.get(field.name) {
                None | Some(Json::Null) => {}
                Some(value) => field.binding.write(&mut instance, value),
            }
        }

        instance
    }

    pub fn deserialize_many(&self, json: &[Json]) -> Vec<T> {
        json.iter().map(|j| self.deserialize(j)).collect()
    }
}

impl<T: 'static> Transform for ObjectSerializer<T> {
    type Value = T;

    fn serialize(&self, value: &T) -> Json {
        Self::serialize(self, value)
    }

    fn deserialize(&self, json: &Json) -> Option<T> {
        json.is_object().then(|| Self::deserialize(self, json))
    }
}

impl<T> Debug for ObjectSerializer<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ObjectSerializer")
            .field("type", &core::any::type_name::<T>())
            .field("fields", &self.fields.iter().map(|field| field.name).collect::<Vec<_>>())
            .finish()
    }
}
