/// How an array behaves when it is compared with a boolean.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ArrayTruthiness {
    /// Every array is truthy, whatever its length.
    #[default]
    Always,
    /// Empty arrays are falsy.
    NonEmpty,
}

/// Settings for a [`crate::compare::Comparator`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Config {
    pub array_truthiness: ArrayTruthiness,
}

impl Config {
    pub fn with_array_truthiness(mut self, array_truthiness: ArrayTruthiness) -> Self {
        self.array_truthiness = array_truthiness;
        self
    }
}
