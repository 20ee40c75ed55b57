use crate::AnyArray;
use crate::ArrayElement;
use crate::NativeArray;
use crate::NativeError;
use crate::NativeObject;
use crate::Value;

/// Controls diagnostic JSON rendering.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct JsonOptions {
  /// Nesting deeper than this renders as `null`.
  pub max_depth: usize,
  pub pretty: bool,
}

impl Default for JsonOptions {
  fn default() -> Self {
    Self {
      max_depth: 64,
      pretty: false,
    }
  }
}

/// Converts documents and arrays to `serde_json` values.
///
/// Output follows JSON.stringify: only enumerable properties are written, `undefined` properties
/// are skipped and non-finite numbers become `null`. A document reachable from itself is an error.
pub struct JsonRenderer {
  options: JsonOptions,
  // Addresses of the documents currently being rendered.
  stack: Vec<usize>,
}

impl JsonRenderer {
  pub fn new(options: JsonOptions) -> Self {
    Self {
      options,
      stack: Vec::new(),
    }
  }

  fn too_deep(&self) -> bool {
    self.stack.len() >= self.options.max_depth
  }

  pub fn object(&mut self, object: &NativeObject) -> Result<serde_json::Value, NativeError> {
    let address = object.address();
    if self.stack.contains(&address) {
      return Err(NativeError::CyclicStructure);
    }
    if self.too_deep() {
      return Ok(serde_json::Value::Null);
    }
    self.stack.push(address);
    let mut map = serde_json::Map::new();
    for key in object.keys() {
      let value = object.get_value(&key);
      if value.is_undefined() {
        continue;
      }
      let rendered = self.value(&value);
      match rendered {
        Ok(v) => {
          map.insert(key, v);
        }
        Err(e) => {
          self.stack.pop();
          return Err(e);
        }
      }
    }
    self.stack.pop();
    Ok(serde_json::Value::Object(map))
  }

  pub fn array<T: ArrayElement>(
    &mut self,
    array: &NativeArray<T>,
  ) -> Result<serde_json::Value, NativeError> {
    if self.too_deep() {
      return Ok(serde_json::Value::Null);
    }
    // Elements are copied out so that rendering a nested document never overlaps a borrow of
    // this array.
    let values = array.to_vec();
    let mut out = Vec::with_capacity(values.len());
    for v in &values {
      out.push(v.render(self)?);
    }
    Ok(serde_json::Value::Array(out))
  }

  pub fn value(&mut self, value: &Value) -> Result<serde_json::Value, NativeError> {
    Ok(match value {
      Value::Undefined | Value::Null => serde_json::Value::Null,
      Value::Bool(b) => serde_json::Value::Bool(*b),
      Value::Number(n) => n.render(self)?,
      Value::String(s) => serde_json::Value::String(s.clone()),
      Value::Array(a) => match a {
        AnyArray::String(a) => self.array(a)?,
        AnyArray::Double(a) => self.array(a)?,
        AnyArray::Integer(a) => self.array(a)?,
        AnyArray::Boolean(a) => self.array(a)?,
        AnyArray::Object(a) => self.array(a)?,
      },
      Value::Object(o) => self.object(o)?,
    })
  }

  pub fn finish(&self, value: &serde_json::Value) -> Result<String, NativeError> {
    let rendered = if self.options.pretty {
      serde_json::to_string_pretty(value)
    } else {
      serde_json::to_string(value)
    };
    rendered.map_err(|e| NativeError::InvalidArgument(e.to_string()))
  }
}

impl NativeObject {
  pub fn to_json(&self) -> Result<String, NativeError> {
    self.to_json_with(JsonOptions::default())
  }

  pub fn to_json_with(&self, options: JsonOptions) -> Result<String, NativeError> {
    let mut renderer = JsonRenderer::new(options);
    let value = renderer.object(self)?;
    renderer.finish(&value)
  }
}

impl Value {
  pub fn to_json(&self) -> Result<String, NativeError> {
    let mut renderer = JsonRenderer::new(JsonOptions::default());
    let value = renderer.value(self)?;
    renderer.finish(&value)
  }
}
