/// Defines how an item in a select menu is identified and accessed.
pub trait SelectItem {
    /// The type of value this item represents.
    type Value;

    /// Returns a unique name used to identify this item.
    fn name(&self) -> String;

    /// Returns a reference to the underlying value.
    fn value(&self) -> &Self::Value;

    /// Disabled items are skipped by keyboard navigation and can't be
    /// selected.
    fn disabled(&self) -> bool {
        false
    }
}

impl SelectItem for &'static str {
    type Value = &'static str;

    fn name(&self) -> String {
        self.to_string()
    }

    fn value(&self) -> &Self::Value {
        self
    }
}

impl SelectItem for String {
    type Value = String;

    fn name(&self) -> String {
        self.clone()
    }

    fn value(&self) -> &Self::Value {
        self
    }
}

/// A named value with an optional disabled flag.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectOption<V> {
    pub name: String,
    pub value: V,
    pub disabled: bool,
}

impl<V> SelectOption<V> {
    pub fn new(name: impl Into<String>, value: V) -> Self {
        Self {
            name: name.into(),
            value,
            disabled: false,
        }
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

impl<V> SelectItem for SelectOption<V> {
    type Value = V;

    fn name(&self) -> String {
        self.name.clone()
    }

    fn value(&self) -> &Self::Value {
        &self.value
    }

    fn disabled(&self) -> bool {
        self.disabled
    }
}
