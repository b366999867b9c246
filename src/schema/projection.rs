use std::fmt;

/// Positional steps addressing a field within the nested record shape of an
/// entity: one field index per nesting level, in declaration order.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Projection {
    steps: Vec<usize>,
}

impl Projection {
    /// References the projection base (the entity record itself).
    pub fn identity() -> Self {
        Self { steps: vec![] }
    }

    /// Extends the projection with one more field step.
    pub fn child(&self, step: usize) -> Self {
        let mut steps = self.steps.clone();
        steps.push(step);
        Self { steps }
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl<const N: usize> From<[usize; N]> for Projection {
    fn from(steps: [usize; N]) -> Self {
        Self {
            steps: steps.to_vec(),
        }
    }
}

impl From<Vec<usize>> for Projection {
    fn from(steps: Vec<usize>) -> Self {
        Self { steps }
    }
}

impl fmt::Debug for Projection {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "Projection{:?}", self.steps)
    }
}
