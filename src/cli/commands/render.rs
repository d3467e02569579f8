//! Render command handlers
//!
//! Implements `render cast` and `render page`.

use crate::cli::args::{OutputFormat, RenderCastArgs, RenderPageArgs};
use crate::component::asciinema::{AsciinemaCast, CastOptions};
use crate::component::{Component, PageContext};
use crate::error::PageweaveError;
use crate::render::render_page;

/// Render the asciinema cast embed component.
///
/// The options record comes from a YAML file or from inline flags; the
/// factory's own validation applies either way.
///
/// # Errors
///
/// Returns an error if the options file cannot be loaded, the factory
/// rejects the record, or output serialization fails.
pub fn cast(args: &RenderCastArgs) -> Result<(), PageweaveError> {
    let opts: Option<CastOptions> = match (&args.options, &args.cast_path) {
        (Some(path), _) => Some(CastOptions::from_yaml_file(path)?),
        (None, Some(cast_path)) => Some(CastOptions {
            cast_path: cast_path.clone(),
            cast_id: args.cast_id.clone(),
        }),
        (None, None) => None,
    };

    let component = AsciinemaCast::new(opts)?;
    let ctx = PageContext {
        display_class: args.display_class,
        ..PageContext::default()
    };

    let markup = component.render(&ctx);
    let script = component.after_dom();

    match args.format {
        OutputFormat::Json => {
            let json = serde_json::json!({
                "markup": markup,
                "script": script,
            });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        OutputFormat::Human => {
            println!("{markup}");
            if let Some(script) = script {
                println!();
                println!("// post-render");
                println!("{script}");
            }
        }
    }

    Ok(())
}

/// Render the regions of a full page.
///
/// # Errors
///
/// Returns a JSON error if output serialization fails.
pub fn page(args: &RenderPageArgs) -> Result<(), PageweaveError> {
    let ctx = PageContext {
        site_title: args.site_title.clone(),
        page_title: args.page_title.clone(),
        slug: args.slug.clone(),
        display_class: None,
    };

    let rendered = render_page(args.archetype, &ctx);

    match args.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&rendered)?);
        }
        OutputFormat::Human => {
            println!("<!-- head -->\n{}\n", rendered.head);
            if !rendered.header.is_empty() {
                println!("<!-- header -->\n{}\n", rendered.header);
            }
            println!("<!-- beforeBody -->\n{}\n", rendered.before_body);
            println!("<!-- left -->\n{}\n", rendered.left);
            println!("<!-- right -->\n{}\n", rendered.right);
            println!("<!-- footer -->\n{}", rendered.footer);
            if !rendered.scripts.is_empty() {
                println!("\n// post-render");
                for script in &rendered.scripts {
                    println!("{script}");
                }
            }
        }
    }

    Ok(())
}
