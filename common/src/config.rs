use crate::greeting::GREETING;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Text printed on a single line, without the trailing newline.
    pub greeting: &'static str,
}

impl Default for Config {
    fn default() -> Self {
        Self { greeting: GREETING }
    }
}
