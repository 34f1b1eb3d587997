//! Responsive layout stylesheet generation.
//!
//! The stylesheet is the rule catalog as-is, followed by one `@media (min-width: …)` block per
//! breakpoint that repeats every rule under a `<breakpoint>:` selector prefix. For example
//! `.eg-ui-flex` becomes `.md\:eg-ui-flex` inside the `md` block. Comment lines are carried into
//! each block and blank lines are dropped there.

pub mod catalog;

use std::fmt::Write as _;

/// First line of the generated file.
pub const HEADER: &str = "/* eGlobe UI Layout (Responsive) */\n\n";

/// Selector prefix shared by every catalog rule.
pub const RULE_PREFIX: &str = ".eg-ui-";

/// Default output file name.
pub const DEFAULT_OUTPUT: &str = "eg-ui-layout.css";

/// A named `min-width` breakpoint.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Breakpoint {
    pub name: &'static str,
    pub min_width: &'static str,
}

/// Breakpoints in emission order.
pub const BREAKPOINTS: [Breakpoint; 2] = [
    Breakpoint {
        name: "md",
        min_width: "768px",
    },
    Breakpoint {
        name: "lg",
        min_width: "992px",
    },
];

/// Renders the stylesheet for the built-in catalog and breakpoints.
pub fn render() -> String {
    generate(catalog::CATALOG, &BREAKPOINTS)
}

/// Renders `catalog` followed by one media block per breakpoint.
pub fn generate(catalog: &str, breakpoints: &[Breakpoint]) -> String {
    let mut css = String::with_capacity(catalog.len() * (breakpoints.len() + 1) * 2);
    css.push_str(HEADER);
    css.push_str(catalog);

    for breakpoint in breakpoints {
        let _ = writeln!(css, "\n@media (min-width: {}) {{", breakpoint.min_width);
        for line in catalog.split('\n') {
            let trimmed = line.trim();
            if trimmed.starts_with(RULE_PREFIX) {
                let _ = writeln!(css, "  .{}\\:{}", breakpoint.name, &trimmed[1..]);
            } else if !trimmed.is_empty() {
                let _ = writeln!(css, "  {line}");
            }
        }
        css.push_str("}\n");
    }
    css
}
