//! Page shell - the full document around the section fragments.

use shop_commerce::catalog::{CategoryFilter, ALL_CATEGORIES};

use crate::escape::html_escape;
use crate::view::HtmlView;

/// Render the category navigation, marking the active filter.
pub fn render_category_nav<'a>(
    keys: impl IntoIterator<Item = &'a str>,
    active: &CategoryFilter,
) -> String {
    let all = std::iter::once((ALL_CATEGORIES, "All".to_string()));
    let named = keys
        .into_iter()
        .map(|key| (key, CategoryFilter::new(key).title()));

    let buttons: String = all
        .chain(named)
        .map(|(key, label)| {
            let class = if key == active.key() {
                "category-btn active"
            } else {
                "category-btn"
            };
            format!(
                r#"<button class="{}" data-category="{}">{}</button>"#,
                class,
                html_escape(key),
                html_escape(&label)
            )
        })
        .collect();

    format!(
        r#"<nav class="categories" data-section="categories">{}</nav>"#,
        buttons
    )
}

/// Assemble a complete document from the view's latest fragments.
pub fn render_page(title: &str, nav: &str, view: &HtmlView) -> String {
    let notices: String = view.notices().concat();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{}</title>
    <link rel="stylesheet" href="styles.css">
</head>
<body>
    <header class="header">
        <h1 class="logo">{}</h1>
        <button class="cart-btn" id="cartBtn" aria-label="Cart">&#128722; {}</button>
    </header>
    {}
    <main>
        {}
    </main>
    {}
    {}
    <div class="notifications">{}</div>
</body>
</html>
"#,
        html_escape(title),
        html_escape(title),
        view.cart_count(),
        nav,
        view.listing(),
        view.cart_panel(),
        view.detail(),
        notices
    )
}
