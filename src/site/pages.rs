//! Page bodies for every route of the site.

use chrono::{DateTime, Utc};

use crate::contact::{Field, MIN_MESSAGE_CHARS};
use crate::model::{AboutSection, Image, PortfolioItem, RichText, SiteData, WorkHistoryItem};
use crate::render::{ContentRenderer, Element, RenderOptions};

use super::layout::{document, NavItem, PageMeta};
use super::BuildOptions;

fn rich_text(text: &RichText, class: &str, options: &BuildOptions) -> Element {
    let render_options = RenderOptions::new()
        .with_class(class)
        .with_normalization(options.normalize_unicode);
    ContentRenderer::new(render_options).render(&text.nodes)
}

fn image(img: &Image) -> Element {
    let mut el = Element::new("img")
        .attr("src", img.src.as_str())
        .attr("alt", img.alt.as_str())
        .attr("loading", "lazy");
    if let Some(w) = img.width {
        el = el.attr("width", w.to_string());
    }
    if let Some(h) = img.height {
        el = el.attr("height", h.to_string());
    }
    el
}

/// Cover image, or a labelled placeholder when the item has none yet.
fn cover(img: &Image) -> Element {
    if img.has_source() {
        image(img)
    } else {
        Element::new("div")
            .attr("class", "placeholder")
            .attr("role", "img")
            .attr("aria-label", img.alt.as_str())
    }
}

fn page_title(section: &str, site: &SiteData) -> String {
    format!("{} | {}", section, site.home.title)
}

/// `/`: hero, about summary and portfolio preview.
pub(crate) fn home(site: &SiteData, options: &BuildOptions) -> String {
    let home = &site.home;

    let hero = Element::new("section")
        .attr("id", "hero")
        .child(Element::new("h1").text(home.hero_title.as_str()))
        .child(rich_text(
            &home.hero_description,
            &options.classes.hero,
            options,
        ))
        .child(
            Element::new("a")
                .attr("href", NavItem::Contact.href())
                .text("Contáctame"),
        )
        .child(image(&home.image));

    let about = Element::new("section")
        .attr("id", "about")
        .child(Element::new("h2").text(site.about.title.as_str()))
        .child(rich_text(
            &site.about.description,
            &options.classes.content,
            options,
        ))
        .child(
            Element::new("a")
                .attr("href", NavItem::About.href())
                .text("Leer más"),
        );

    let preview = Element::new("section")
        .attr("id", "portfolio")
        .child(Element::new("h2").text(site.portfolio.title.as_str()))
        .child(project_list(&site.portfolio.items));

    let main = Element::new("main")
        .child(hero)
        .child(about)
        .child(preview);

    let meta = PageMeta {
        title: home.seo.title.clone(),
        description: &home.seo.description,
        active: NavItem::Home,
        owner: &home.title,
    };
    document(&meta, main, options)
}

fn degrees(about: &AboutSection) -> Element {
    Element::new("ul").children(about.education_degrees.iter().map(|d| {
        Element::new("li")
            .child(Element::new("h3").text(d.degree.as_str()))
            .child(Element::new("p").text(d.university.as_str()))
            .child(Element::new("time").text(d.year.as_str()))
    }))
}

fn work_item(job: &WorkHistoryItem, now: DateTime<Utc>, options: &BuildOptions) -> Element {
    let from = job.from.timestamp.format("%Y-%m-%d").to_string();
    let mut period = Element::new("p")
        .attr("class", "duration")
        .child(
            Element::new("time")
                .attr("datetime", from)
                .text(job.duration.as_str()),
        );
    if job.is_current() {
        period = period.attr("data-current", "true");
    }
    period = period.attr("data-months", job.months(now).to_string());

    Element::new("article")
        .child(Element::new("h3").text(job.job_title.as_str()))
        .child(Element::new("p").text(job.company_name.as_str()))
        .child(period)
        .child(rich_text(&job.description, &options.classes.content, options))
}

/// `/about`: description, education and work history.
pub(crate) fn about(site: &SiteData, options: &BuildOptions) -> String {
    let about = &site.about;

    let education = Element::new("section")
        .attr("id", "education")
        .child(Element::new("h2").text(about.education_title.as_str()))
        .child(Element::new("p").text(about.education_text.as_str()))
        .child(degrees(about));

    let history = Element::new("section")
        .attr("id", "work-history")
        .child(Element::new("h2").text(about.work_history_title.as_str()))
        .children(
            about
                .work_history_text
                .iter()
                .map(|t| Element::new("p").text(t.as_str())),
        )
        .children(
            about
                .work_history_items
                .iter()
                .map(|job| work_item(job, options.now, options)),
        );

    let main = Element::new("main")
        .child(Element::new("h1").text(about.title.as_str()))
        .child(rich_text(&about.description, &options.classes.content, options))
        .child(education)
        .child(history);

    let meta = PageMeta {
        title: page_title(&about.title, site),
        description: &site.home.seo.description,
        active: NavItem::About,
        owner: &site.home.title,
    };
    document(&meta, main, options)
}

fn project_card(item: &PortfolioItem) -> Element {
    Element::new("li")
        .attr("style", format!("--project-theme: {}", item.theme))
        .child(
            Element::new("a")
                .attr("href", format!("{}/{}", NavItem::Portfolio.href(), item.slug))
                .child(cover(&item.cover_image))
                .child(Element::new("h3").text(item.title.as_str()))
                .child(categories(&item.categories)),
        )
}

fn project_list(items: &[PortfolioItem]) -> Element {
    Element::new("ul")
        .attr("class", "projects")
        .children(items.iter().map(project_card))
}

fn categories(categories: &[String]) -> Element {
    Element::new("ul")
        .attr("class", "categories")
        .children(
            categories
                .iter()
                .map(|c| Element::new("li").text(c.as_str())),
        )
}

/// `/portfolio`: the full gallery.
pub(crate) fn portfolio(site: &SiteData, options: &BuildOptions) -> String {
    let section = &site.portfolio;
    let main = Element::new("main")
        .child(Element::new("h1").text(section.title.as_str()))
        .child(rich_text(&section.description, &options.classes.content, options))
        .child(project_list(&section.items));

    let meta = PageMeta {
        title: page_title(&section.title, site),
        description: &site.home.seo.description,
        active: NavItem::Portfolio,
        owner: &site.home.title,
    };
    document(&meta, main, options)
}

/// `/portfolio/<slug>`: one project.
pub(crate) fn portfolio_item(
    site: &SiteData,
    item: &PortfolioItem,
    options: &BuildOptions,
) -> String {
    let gallery = Element::new("div")
        .attr("class", "gallery")
        .children(item.gallery.iter().filter(|i| i.has_source()).map(image));

    let main = Element::new("main")
        .attr("style", format!("--project-theme: {}", item.theme))
        .child(
            Element::new("a")
                .attr("href", NavItem::Portfolio.href())
                .text("← Volver al portfolio"),
        )
        .child(Element::new("h1").text(item.title.as_str()))
        .child(categories(&item.categories))
        .child(cover(&item.cover_image))
        .child(rich_text(&item.description, &options.classes.content, options))
        .child(gallery);

    let description = item.description.plain_text();
    let meta = PageMeta {
        title: page_title(&item.title, site),
        description: if description.is_empty() {
            site.home.seo.description.as_str()
        } else {
            description.as_str()
        },
        active: NavItem::Portfolio,
        owner: &site.home.title,
    };
    document(&meta, main, options)
}

fn form_field(field: Field, label: &str, placeholder: &str, kind: &str) -> Element {
    let id = field.name();
    let control = if kind == "textarea" {
        Element::new("textarea")
            .attr("id", id)
            .attr("name", id)
            .attr("rows", "5")
            .attr("minlength", MIN_MESSAGE_CHARS.to_string())
            .attr("placeholder", placeholder)
            .attr("required", "")
    } else {
        Element::new("input")
            .attr("id", id)
            .attr("name", id)
            .attr("type", kind)
            .attr("placeholder", placeholder)
            .attr("required", "")
    };

    Element::new("div")
        .attr("class", "field")
        .child(Element::new("label").attr("for", id).text(label))
        .child(control)
}

/// `/contact`: the contact form, posting to the relay.
pub(crate) fn contact(site: &SiteData, options: &BuildOptions) -> String {
    let mut form = Element::new("form")
        .attr("method", "post")
        .attr("action", options.relay_endpoint.as_str());
    if let Some(key) = &options.access_key {
        form = form.child(
            Element::new("input")
                .attr("type", "hidden")
                .attr("name", "access_key")
                .attr("value", key.as_str()),
        );
    }
    let form = form
        .child(form_field(Field::FullName, "Nombre completo", "Tu nombre", "text"))
        .child(form_field(
            Field::Email,
            "Correo electrónico",
            "tu@email.com",
            "email",
        ))
        .child(form_field(
            Field::Message,
            "Mensaje",
            "Cuéntame sobre tu proyecto...",
            "textarea",
        ))
        .child(
            Element::new("button")
                .attr("type", "submit")
                .text("Enviar mensaje"),
        );

    let main = Element::new("main")
        .child(Element::new("h1").text("Contáctame"))
        .child(Element::new("p").text(
            "Cuéntame sobre tu proyecto, te respondo en menos de 24 horas.",
        ))
        .child(form);

    let meta = PageMeta {
        title: page_title(NavItem::Contact.label(), site),
        description: &site.home.seo.description,
        active: NavItem::Contact,
        owner: &site.home.title,
    };
    document(&meta, main, options)
}
