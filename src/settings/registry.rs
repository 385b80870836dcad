//! Registry of named, typed option values

use super::types::{OptionKind, OptionValue};

/// A single named option. The kind is fixed at definition time; only the
/// value may change afterwards, and only to a value of the same kind.
#[derive(Debug, Clone)]
struct OptionEntry {
    name: String,
    value: OptionValue,
}

/// The process-wide set of configuration options.
///
/// Constructed once at startup and passed by reference to whoever needs
/// configuration. Lookups are a linear scan: the registry holds on the
/// order of ten entries, so a map would buy nothing.
///
/// Unknown names and kind mismatches panic rather than returning an error.
/// They can only come from a coding mistake in the caller, never from user
/// input, which is validated before it reaches `set_*`.
#[derive(Debug, Default)]
pub struct Settings {
    options: Vec<OptionEntry>,
}

impl Settings {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Define a new option with its initial value.
    ///
    /// # Panics
    ///
    /// Panics if an option with the same name is already defined. All
    /// definitions happen once at startup, so a collision is a bug.
    pub fn define(&mut self, name: &str, value: OptionValue) {
        if self.options.iter().any(|opt| opt.name == name) {
            panic!("option '{name}' is already defined");
        }
        log::debug!("defined option {} = {:?}", name, value);
        self.options.push(OptionEntry {
            name: name.to_string(),
            value,
        });
    }

    /// Number of defined options.
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Whether the registry has no options.
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Whether an option with this name is defined.
    pub fn contains(&self, name: &str) -> bool {
        self.options.iter().any(|opt| opt.name == name)
    }

    /// Get the current value of an integer option.
    ///
    /// # Panics
    ///
    /// Panics if the option is unknown or not an integer.
    pub fn get_int(&self, name: &str) -> i64 {
        match &self.lookup(name).value {
            OptionValue::Int(v) => *v,
            other => kind_mismatch(name, OptionKind::Int, other),
        }
    }

    /// Get the current value of a boolean option.
    ///
    /// # Panics
    ///
    /// Panics if the option is unknown or not a boolean.
    pub fn get_bool(&self, name: &str) -> bool {
        match &self.lookup(name).value {
            OptionValue::Bool(v) => *v,
            other => kind_mismatch(name, OptionKind::Bool, other),
        }
    }

    /// Get the current value of a string option.
    ///
    /// # Panics
    ///
    /// Panics if the option is unknown or not a string.
    pub fn get_string(&self, name: &str) -> &str {
        match &self.lookup(name).value {
            OptionValue::String(v) => v,
            other => kind_mismatch(name, OptionKind::String, other),
        }
    }

    /// Overwrite the value of an integer option.
    ///
    /// # Panics
    ///
    /// Panics if the option is unknown or not an integer.
    pub fn set_int(&mut self, name: &str, value: i64) {
        match &mut self.lookup_mut(name).value {
            OptionValue::Int(v) => *v = value,
            other => kind_mismatch(name, OptionKind::Int, other),
        }
    }

    /// Overwrite the value of a boolean option.
    ///
    /// # Panics
    ///
    /// Panics if the option is unknown or not a boolean.
    pub fn set_bool(&mut self, name: &str, value: bool) {
        match &mut self.lookup_mut(name).value {
            OptionValue::Bool(v) => *v = value,
            other => kind_mismatch(name, OptionKind::Bool, other),
        }
    }

    /// Overwrite the value of a string option. The registry stores its own
    /// copy; the previous payload is dropped.
    ///
    /// # Panics
    ///
    /// Panics if the option is unknown or not a string.
    pub fn set_string(&mut self, name: &str, value: &str) {
        match &mut self.lookup_mut(name).value {
            OptionValue::String(v) => *v = value.to_string(),
            other => kind_mismatch(name, OptionKind::String, other),
        }
    }

    fn lookup(&self, name: &str) -> &OptionEntry {
        self.options
            .iter()
            .find(|opt| opt.name == name)
            .unwrap_or_else(|| panic!("invalid option '{name}'"))
    }

    fn lookup_mut(&mut self, name: &str) -> &mut OptionEntry {
        self.options
            .iter_mut()
            .find(|opt| opt.name == name)
            .unwrap_or_else(|| panic!("invalid option '{name}'"))
    }
}

fn kind_mismatch(name: &str, wanted: OptionKind, got: &OptionValue) -> ! {
    panic!(
        "option '{}' is not of type {} (defined as {})",
        name,
        wanted,
        got.kind()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Settings {
        let mut settings = Settings::new();
        settings.define("display_time", OptionValue::Int(4000));
        settings.define("debug", OptionValue::Bool(false));
        settings.define("font", OptionValue::String("Bitstream Vera Sans 14".into()));
        settings
    }

    #[test]
    fn test_define_and_get() {
        let settings = sample();
        assert_eq!(settings.len(), 3);
        assert_eq!(settings.get_int("display_time"), 4000);
        assert!(!settings.get_bool("debug"));
        assert_eq!(settings.get_string("font"), "Bitstream Vera Sans 14");
    }

    #[test]
    #[should_panic(expected = "already defined")]
    fn test_duplicate_define_panics() {
        let mut settings = sample();
        settings.define("font", OptionValue::String("Sans 12".into()));
    }

    #[test]
    fn test_set_overwrites_value() {
        let mut settings = sample();
        settings.set_int("display_time", 9000);
        settings.set_bool("debug", true);
        assert_eq!(settings.get_int("display_time"), 9000);
        assert!(settings.get_bool("debug"));
    }

    #[test]
    fn test_set_string_round_trips_and_releases_previous() {
        let mut settings = sample();
        // repeated overwrite cycles must never retain a stale payload
        for i in 0..100 {
            let value = format!("Font Number {i}");
            settings.set_string("font", &value);
            assert_eq!(settings.get_string("font"), value);
        }
        assert_eq!(settings.get_string("font"), "Font Number 99");
    }

    #[test]
    fn test_set_string_copies_callers_buffer() {
        let mut settings = sample();
        let mut buffer = String::from("Serif 10");
        settings.set_string("font", &buffer);
        buffer.clear();
        assert_eq!(settings.get_string("font"), "Serif 10");
    }

    #[test]
    #[should_panic(expected = "invalid option 'nonexistent'")]
    fn test_get_unknown_name_panics() {
        sample().get_int("nonexistent");
    }

    #[test]
    #[should_panic(expected = "invalid option 'nonexistent'")]
    fn test_set_unknown_name_panics() {
        sample().set_bool("nonexistent", true);
    }

    #[test]
    #[should_panic(expected = "option 'font' is not of type integer")]
    fn test_get_kind_mismatch_panics() {
        sample().get_int("font");
    }

    #[test]
    #[should_panic(expected = "option 'display_time' is not of type string")]
    fn test_set_kind_mismatch_panics() {
        sample().set_string("display_time", "soon");
    }

    #[test]
    fn test_contains() {
        let settings = sample();
        assert!(settings.contains("font"));
        assert!(!settings.contains("fnot"));
    }
}
