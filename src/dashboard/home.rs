/// Title shown on the landing page
pub const WELCOME_TITLE: &str = "Welcome to the Trading Bot Dashboard";

pub fn render() -> Vec<String> {
    vec![WELCOME_TITLE.to_string()]
}
