use maud::{html, Markup, DOCTYPE};

const MAIN_CSS_URL: &str = "main.css";

/// A complete HTML document around the given content.
pub fn page(title: &str, relative_prefix_to_root: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1, shrink-to-fit=no";
                title { (title) }
                link rel="stylesheet" href=(format!("{relative_prefix_to_root}{MAIN_CSS_URL}"));
            }
            body {
                main { (content) }
            }
        }
    }
}
