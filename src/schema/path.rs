use std::fmt;

/// The dotted sequence of property names identifying a field within the
/// nested object graph, independent of physical storage naming.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct FieldPath {
    parts: Vec<String>,
}

impl FieldPath {
    /// The empty path, identifying the entity itself.
    pub fn root() -> Self {
        Self { parts: vec![] }
    }

    /// Extends the path with one more property name.
    pub fn child(&self, part: &str) -> Self {
        let mut parts = self.parts.clone();
        parts.push(part.to_string());
        Self { parts }
    }

    pub fn parts(&self) -> &[String] {
        &self.parts
    }

    /// The final property name, if the path is not the root.
    pub fn leaf(&self) -> Option<&str> {
        self.parts.last().map(String::as_str)
    }

    pub fn dotted(&self) -> String {
        self.parts.join(".")
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.write_str(&self.dotted())
    }
}

impl fmt::Debug for FieldPath {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "FieldPath({})", self.dotted())
    }
}

impl FromIterator<String> for FieldPath {
    fn from_iter<T: IntoIterator<Item = String>>(iter: T) -> Self {
        Self {
            parts: iter.into_iter().collect(),
        }
    }
}
