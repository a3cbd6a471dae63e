#[derive(Clone)]
pub struct Config {
    pub trace_rules: bool,
}

impl Config {
    pub fn load() -> Self {
        let trace_rules = std::env::var("GRAZE_TRACE")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);
        Self { trace_rules }
    }
}
