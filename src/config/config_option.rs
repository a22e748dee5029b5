/// A configurable value, with a name and bounds for validation.
#[derive(Clone, Debug)]
pub struct ConfigOption<T> {
    pub name: &'static str,
    pub min: T,
    pub max: T,
    pub value: T,
}

impl<T: Clone> ConfigOption<T> {
    pub fn min_max(&self) -> (T, T) {
        (self.min.clone(), self.max.clone())
    }
}

impl<T: Clone + PartialOrd> ConfigOption<T> {
    /// Sets the value of the option, if the value is within bounds.
    /// Returns true if the value was set.
    pub fn set_bounded(&mut self, value: T) -> bool {
        let (min, max) = self.min_max();
        if min <= value && value <= max {
            self.value = value;
            true
        } else {
            false
        }
    }
}
