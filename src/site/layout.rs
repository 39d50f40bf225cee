//! Shared page chrome: document head, header navigation and footer.

use chrono::Datelike;

use crate::render::{Element, Node};
use crate::theme::{Theme, THEME_STORAGE_KEY};

use super::BuildOptions;

const THEME_TOGGLE_ID: &str = "theme-toggle";

/// Top-level navigation sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavItem {
    Home,
    About,
    Portfolio,
    Contact,
}

impl NavItem {
    /// All items in menu order.
    pub const ALL: [NavItem; 4] = [
        NavItem::Home,
        NavItem::About,
        NavItem::Portfolio,
        NavItem::Contact,
    ];

    /// Menu label.
    pub fn label(self) -> &'static str {
        match self {
            NavItem::Home => "Inicio",
            NavItem::About => "Sobre mí",
            NavItem::Portfolio => "Portfolio",
            NavItem::Contact => "Contacto",
        }
    }

    /// Site-relative URL.
    pub fn href(self) -> &'static str {
        match self {
            NavItem::Home => "/",
            NavItem::About => "/about",
            NavItem::Portfolio => "/portfolio",
            NavItem::Contact => "/contact",
        }
    }
}

/// Head metadata of one page.
pub(crate) struct PageMeta<'a> {
    pub title: String,
    pub description: &'a str,
    pub active: NavItem,
    /// Name shown in the copyright line
    pub owner: &'a str,
}

/// Accessible label of the theme toggle while `theme` is active.
fn toggle_label(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => "Cambiar a modo claro",
        Theme::Light => "Cambiar a modo oscuro",
    }
}

/// Applies the stored (or system) theme before first paint, exposes
/// `toggleTheme()` and follows system changes while nothing is stored.
fn theme_script() -> String {
    format!(
        "(function(){{var k='{key}',d=document.documentElement;\
var m=window.matchMedia('(prefers-color-scheme: dark)');\
function apply(t){{d.classList.remove('light','dark');d.classList.add(t);\
var b=document.getElementById('{button}');\
if(b){{b.setAttribute('aria-label',t==='dark'?'{to_light}':'{to_dark}');}}}}\
apply(localStorage.getItem(k)||(m.matches?'dark':'light'));\
window.toggleTheme=function(){{var n=d.classList.contains('dark')?'light':'dark';\
localStorage.setItem(k,n);apply(n);}};\
m.addEventListener('change',function(e){{if(!localStorage.getItem(k)){{apply(e.matches?'dark':'light');}}}});\
document.addEventListener('DOMContentLoaded',function(){{apply(d.classList.contains('dark')?'dark':'light');}});}})();",
        key = THEME_STORAGE_KEY,
        button = THEME_TOGGLE_ID,
        to_light = toggle_label(Theme::Dark),
        to_dark = toggle_label(Theme::Light),
    )
}

fn theme_toggle(theme: Theme) -> Element {
    Element::new("button")
        .attr("type", "button")
        .attr("id", THEME_TOGGLE_ID)
        .attr("onclick", "toggleTheme()")
        .attr("aria-label", toggle_label(theme))
}

/// Wrap page content in the full HTML document.
pub(crate) fn document(meta: &PageMeta<'_>, main: Element, options: &BuildOptions) -> String {
    let head = Element::new("head")
        .child(Element::new("meta").attr("charset", "utf-8"))
        .child(
            Element::new("meta")
                .attr("name", "viewport")
                .attr("content", "width=device-width, initial-scale=1"),
        )
        .child(Element::new("title").text(meta.title.as_str()))
        .child(
            Element::new("meta")
                .attr("name", "description")
                .attr("content", meta.description),
        )
        .child(
            Element::new("link")
                .attr("rel", "stylesheet")
                .attr("href", options.stylesheet.as_str()),
        )
        .child(Element::new("script").child(Node::raw(theme_script())));

    let body = Element::new("body")
        .class(&options.classes.body)
        .child(header(meta.active, options.theme))
        .child(main)
        .child(footer(options, meta.owner));

    let html = Element::new("html")
        .attr("lang", options.lang.as_str())
        .class(options.theme.as_str())
        .child(head)
        .child(body);

    format!("<!DOCTYPE html>\n{}\n", html.to_html())
}

fn header(active: NavItem, theme: Theme) -> Element {
    let links = NavItem::ALL.iter().map(|item| {
        let link = Element::new("a").attr("href", item.href()).text(item.label());
        if *item == active {
            link.attr("aria-current", "page")
        } else {
            link
        }
    });

    Element::new("header").child(
        Element::new("nav")
            .attr("aria-label", "Principal")
            .child(Element::new("ul").children(links.map(|a| Element::new("li").child(a))))
            .child(theme_toggle(theme)),
    )
}

fn footer(options: &BuildOptions, owner: &str) -> Element {
    let mut links: Vec<Element> = Vec::new();
    if let Some(email) = &options.contact_email {
        links.push(
            Element::new("a")
                .attr("href", format!("mailto:{}", email))
                .text(email.as_str()),
        );
    }
    for link in &options.social_links {
        links.push(
            Element::new("a")
                .attr("href", link.href.as_str())
                .attr("target", "_blank")
                .attr("rel", "noopener noreferrer")
                .text(link.label.as_str()),
        );
    }
    links.push(
        Element::new("a")
            .attr("href", NavItem::Contact.href())
            .text(NavItem::Contact.label()),
    );

    let year = options.now.year();
    Element::new("footer")
        .child(Element::new("ul").children(links.into_iter().map(|a| Element::new("li").child(a))))
        .child(Element::new("p").text(format!("© {} {}", year, owner)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_shell() {
        let options = BuildOptions::new().with_theme(Theme::Dark);
        let meta = PageMeta {
            title: "Hola".to_string(),
            description: "desc \"quoted\"",
            active: NavItem::About,
            owner: "Diego Rios",
        };
        let html = document(&meta, Element::new("main"), &options);
        assert!(html.starts_with("<!DOCTYPE html>\n<html lang=\"es\" class=\"dark\">"));
        assert!(html.contains("<title>Hola</title>"));
        assert!(html.contains("content=\"desc &quot;quoted&quot;\""));
        assert!(html.contains("<a href=\"/about\" aria-current=\"page\">Sobre mí</a>"));
        assert!(html.contains(THEME_STORAGE_KEY));
    }

    #[test]
    fn test_header_has_theme_toggle() {
        let html = header(NavItem::Home, Theme::Light).to_html();
        assert!(html.contains(r#"<button type="button" id="theme-toggle" onclick="toggleTheme()""#));
        assert!(html.contains(r#"aria-label="Cambiar a modo oscuro"></button></nav>"#));
        let dark = header(NavItem::Home, Theme::Dark).to_html();
        assert!(dark.contains(r#"aria-label="Cambiar a modo claro""#));
    }

    #[test]
    fn test_script_follows_system_only_without_stored_choice() {
        let script = theme_script();
        assert!(script.contains("window.toggleTheme=function()"));
        assert!(script.contains("localStorage.setItem(k,n)"));
        let listener = script
            .split("m.addEventListener('change',")
            .nth(1)
            .unwrap();
        assert!(listener.starts_with("function(e){if(!localStorage.getItem(k)){apply(e.matches"));
        assert!(script.contains("var k='portfolio-theme'"));
    }

    #[test]
    fn test_footer_links() {
        let options = BuildOptions::new().with_contact_email("me@example.com");
        let html = footer(&options, "Diego Rios").to_html();
        assert!(html.contains("mailto:me@example.com"));
        assert!(html.contains("Diego Rios"));
        assert!(html.contains("LinkedIn"));
    }
}
