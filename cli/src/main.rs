//! folio CLI - render rich-text content and build the portfolio site

mod relay;

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use folio::contact::{ContactForm, ContactSession, Field, DEFAULT_RELAY_ENDPOINT};
use folio::render::visitor::UnsupportedMarkerVisitor;
use folio::render::{ContentRenderer, MarkdownRenderer};
use folio::site::{build_site, write_site, BuildOptions};
use folio::{JsonFormat, RenderOptions, SubmitOutcome, Theme};

use relay::HttpRelay;

#[derive(Parser)]
#[command(name = "folio")]
#[command(version)]
#[command(about = "Render rich-text content and build the portfolio site", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the static site
    Build {
        /// Site content JSON (bundled content if not specified)
        #[arg(short, long, value_name = "FILE")]
        data: Option<PathBuf>,

        /// Output directory
        #[arg(short, long, value_name = "DIR", default_value = "public")]
        output: PathBuf,

        /// Theme used before the visitor's preference is known
        #[arg(long, value_enum, default_value = "light")]
        theme: ThemeArg,

        /// Also write gzip-compressed copies
        #[arg(long)]
        precompress: bool,

        /// Contact relay access key
        #[arg(long, env = "FOLIO_ACCESS_KEY", hide_env_values = true)]
        access_key: Option<String>,

        /// Contact address shown in the footer
        #[arg(long)]
        email: Option<String>,
    },

    /// Render a JSON file of content nodes
    Render {
        /// JSON array of nodes, or an object with a "nodes" array
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "html")]
        format: Format,

        /// Class token for the HTML container
        #[arg(long, default_value = "")]
        class: String,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Leave a marker where unsupported nodes were dropped
        #[arg(long)]
        mark_unsupported: bool,

        /// Print render statistics to stderr
        #[arg(long)]
        stats: bool,
    },

    /// Show a summary of the site content
    Info {
        /// Site content JSON (bundled content if not specified)
        #[arg(short, long, value_name = "FILE")]
        data: Option<PathBuf>,
    },

    /// Send a message through the contact relay
    Contact {
        /// Sender's full name
        #[arg(long)]
        name: String,

        /// Sender's email
        #[arg(long)]
        email: String,

        /// Message body
        #[arg(long)]
        message: String,

        /// Relay access key
        #[arg(long, env = "FOLIO_ACCESS_KEY", hide_env_values = true)]
        access_key: Option<String>,

        /// Relay endpoint
        #[arg(long, default_value = DEFAULT_RELAY_ENDPOINT)]
        endpoint: String,

        /// Validate and print the payload without sending
        #[arg(long)]
        dry_run: bool,
    },

    /// Show version information
    Version,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum ThemeArg {
    Light,
    Dark,
}

impl From<ThemeArg> for Theme {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Light => Theme::Light,
            ThemeArg::Dark => Theme::Dark,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Format {
    /// HTML fragment
    Html,
    /// Plain text
    Text,
    /// Markdown
    Markdown,
    /// Node JSON
    Json,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Build {
            data,
            output,
            theme,
            precompress,
            access_key,
            email,
        }) => cmd_build(
            data.as_deref(),
            &output,
            theme,
            precompress,
            access_key,
            email,
        ),
        Some(Commands::Render {
            input,
            format,
            class,
            output,
            mark_unsupported,
            stats,
        }) => cmd_render(
            &input,
            format,
            &class,
            output.as_deref(),
            mark_unsupported,
            stats,
        ),
        Some(Commands::Info { data }) => cmd_info(data.as_deref()),
        Some(Commands::Contact {
            name,
            email,
            message,
            access_key,
            endpoint,
            dry_run,
        }) => cmd_contact(
            ContactForm::new(name, email, message),
            access_key,
            &endpoint,
            dry_run,
        ),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            println!("{}", "Usage: folio <COMMAND>".yellow());
            println!("       folio --help for more information");
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_build(
    data: Option<&Path>,
    output: &Path,
    theme: ThemeArg,
    precompress: bool,
    access_key: Option<String>,
    email: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let pb = ProgressBar::new(3);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );

    pb.set_message("Loading content...");
    let site = folio::data::load_or_builtin(data)?;
    pb.inc(1);

    let mut options = BuildOptions::new()
        .with_output_dir(output)
        .with_theme(theme.into())
        .with_precompress(precompress);
    if let Some(key) = access_key {
        options = options.with_access_key(key);
    }
    if let Some(email) = email {
        options = options.with_contact_email(email);
    }

    pb.set_message("Rendering pages...");
    let pages = build_site(&site, &options);
    pb.inc(1);

    pb.set_message("Writing files...");
    let summary = write_site(&pages, &options)?;
    pb.inc(1);

    pb.finish_with_message("Done!");

    println!("\n{}", "Output files:".green().bold());
    let last = pages.len().saturating_sub(1);
    for (i, page) in pages.iter().enumerate() {
        let branch = if i == last { "└─" } else { "├─" };
        println!("  {} {}", branch.dimmed(), page.path.display());
    }
    println!(
        "\n{} files, {} bytes of HTML{}",
        summary.files_written,
        summary.html_bytes,
        if precompress {
            format!(", {} bytes gzipped", summary.compressed_bytes)
        } else {
            String::new()
        }
    );

    Ok(())
}

fn cmd_render(
    input: &Path,
    format: Format,
    class: &str,
    output: Option<&Path>,
    mark_unsupported: bool,
    show_stats: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let nodes = folio::read_nodes(input)?;
    let options = RenderOptions::new().with_class(class).with_stats(show_stats);

    let (rendered, stats) = match format {
        Format::Html => {
            let mut renderer = ContentRenderer::new(options);
            if mark_unsupported {
                renderer = renderer.with_visitor(UnsupportedMarkerVisitor);
            }
            let result = renderer.render_with_stats(&nodes);
            (result.content, Some(result.stats))
        }
        Format::Markdown => {
            let mut renderer = MarkdownRenderer::new(options);
            if mark_unsupported {
                renderer = renderer.with_visitor(UnsupportedMarkerVisitor);
            }
            let result = renderer.render_with_stats(&nodes);
            (result.content, Some(result.stats))
        }
        Format::Text => (folio::render::to_text(&nodes, &options), None),
        Format::Json => (folio::render::to_json(&nodes, JsonFormat::Pretty)?, None),
    };

    if let Some(path) = output {
        fs::write(path, &rendered)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", rendered);
    }

    if show_stats {
        match stats {
            Some(stats) => eprintln!("{}", serde_json::to_string_pretty(&stats)?),
            None => eprintln!("{}", "Statistics are only collected for html and markdown".yellow()),
        }
    }

    Ok(())
}

fn cmd_info(data: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let site = folio::data::load_or_builtin(data)?;

    println!("{}", "Site Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    match data {
        Some(path) => println!("{}: {}", "Content".bold(), path.display()),
        None => println!("{}: bundled", "Content".bold()),
    }
    println!("{}: {}", "Owner".bold(), site.home.title);
    println!("{}: {}", "Title".bold(), site.home.seo.title);
    println!(
        "{}: {}",
        "Degrees".bold(),
        site.about.education_degrees.len()
    );
    println!(
        "{}: {}",
        "Jobs".bold(),
        site.about.work_history_items.len()
    );
    println!("{}: {}", "Projects".bold(), site.portfolio.items.len());

    for item in &site.portfolio.items {
        println!(
            "  {} {} ({}) [{}]",
            "•".dimmed(),
            item.title,
            item.slug,
            item.categories.join(", ")
        );
    }

    let mut stats = folio::RenderStats::new();
    let rich_texts = std::iter::once(&site.home.hero_description)
        .chain(std::iter::once(&site.about.description))
        .chain(site.about.work_history_items.iter().map(|j| &j.description))
        .chain(std::iter::once(&site.portfolio.description))
        .chain(site.portfolio.items.iter().map(|i| &i.description));
    for text in rich_texts {
        let result = folio::render::to_html_with_stats(&text.nodes, &RenderOptions::default());
        stats.merge(&result.stats);
    }

    println!();
    println!("{}", "Rich Text".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!("{}: {}", "Nodes".bold(), stats.node_count);
    println!("{}: {}", "Paragraphs".bold(), stats.paragraph_count);
    println!("{}: {}", "Unsupported".bold(), stats.skipped_count);
    println!("{}: {}", "Words".bold(), stats.word_count);

    Ok(())
}

fn cmd_contact(
    form: ContactForm,
    access_key: Option<String>,
    endpoint: &str,
    dry_run: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let access_key = access_key.unwrap_or_default();

    let errors = form.validate();
    if errors.has_errors() {
        for field in Field::ALL {
            if let Some(message) = errors.get(field) {
                eprintln!("  {} {}: {}", "✗".red(), field.name(), message);
            }
        }
        return Err("contact form is invalid".into());
    }

    if dry_run {
        println!("{}", serde_json::to_string_pretty(&form.payload(&access_key))?);
        return Ok(());
    }

    if access_key.is_empty() {
        return Err("an access key is required (--access-key or FOLIO_ACCESS_KEY)".into());
    }

    let relay = HttpRelay::new(endpoint)?;
    let mut session = ContactSession::new(access_key);
    for field in Field::ALL {
        session.update(field, form.get(field));
    }

    println!("{}", "Enviando...".cyan());
    match session.submit(&relay) {
        SubmitOutcome::Sent => {
            println!("{}", "¡Mensaje enviado!".green().bold());
            Ok(())
        }
        SubmitOutcome::Rejected(errors) => Err(errors.to_string().into()),
        SubmitOutcome::Failed(reason) => Err(format!(
            "Hubo un error al enviar el mensaje ({}). Por favor, intenta de nuevo.",
            reason
        )
        .into()),
    }
}

fn cmd_version() {
    println!("{} {}", "folio".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Portfolio content renderer and site builder");
    println!();
    println!("License: MIT");
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_render_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("nodes.json");
        let output = dir.path().join("out.html");
        fs::write(
            &input,
            r#"[{"type":"paragraph","content":[{"type":"text","value":"Hola"}]},{"type":"image"}]"#,
        )
        .unwrap();

        cmd_render(&input, Format::Html, "prose", Some(&output), false, false).unwrap();
        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            r#"<div class="prose"><p><span>Hola</span></p></div>"#
        );
    }

    #[test]
    fn test_contact_dry_run_rejects_invalid_form() {
        let form = ContactForm::new("", "no-email", "corto");
        assert!(cmd_contact(form, None, DEFAULT_RELAY_ENDPOINT, true).is_err());
    }
}
