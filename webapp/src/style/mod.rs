use constcat::concat;

mod components;
mod sections;
mod variables;

use components::BASE_COMPONENTS;
use sections::{ANIMATIONS, SECTION_STYLES};
use variables::CSS_VARIABLES;

// full stylesheet, injected once by the App component
pub const PORTFOLIO_STYLES: &str = concat!(
    r#"
/* Global resets and base styles */
* {
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}

html {
  scroll-behavior: smooth;
}

body {
  font-family: system-ui, -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, Cantarell, sans-serif;
  line-height: 1.5;
}

a {
  color: inherit;
  text-decoration: none;
}
"#,
    CSS_VARIABLES,
    BASE_COMPONENTS,
    SECTION_STYLES,
    ANIMATIONS,
);
